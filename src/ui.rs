use crate::models::{ChoreItem, TrackerView};

pub fn render_index(view: &TrackerView) -> String {
    let chores: String = view.chores.iter().map(render_chore).collect();
    INDEX_HTML
        .replace("{{DATE}}", &view.date)
        .replace("{{TOTAL}}", &view.total_points.to_string())
        .replace("{{MAX}}", &view.max_points.to_string())
        .replace("{{EVER}}", &view.stars_ever.to_string())
        .replace("{{MODAL_HIDDEN}}", if view.celebration_visible { "" } else { "hidden" })
        .replace("{{CHORES}}", &chores)
}

fn render_chore(chore: &ChoreItem) -> String {
    let state = if chore.completed { "done" } else { "todo" };
    let badge = if chore.completed {
        "✔".to_string()
    } else {
        escape_html(&chore.emoji)
    };
    format!(
        r#"<form class="chore-form" method="post" action="/chores/{id}/toggle" data-id="{id}">
        <button class="chore {state} tint-{color}" type="submit">
          <span class="badge">{badge}</span>
          <span class="name">{name}</span>
          <span class="points">★ {points}</span>
        </button>
      </form>
      "#,
        id = chore.id,
        color = escape_html(&chore.color),
        name = escape_html(&chore.name),
        points = chore.points,
    )
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>My Chore Tracker</title>
  <meta name="description" content="Fun chore tracker for kids" />
  <style>
    :root {
      --ink: #4c1d95;
      --card: rgba(255, 255, 255, 0.9);
      --gold: #d97706;
      --done: #a7f3d0;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      font-family: "Trebuchet MS", "Comic Sans MS", sans-serif;
      color: var(--ink);
      background: linear-gradient(135deg, #fce7f3, #ede9fe, #dbeafe);
      background-size: 200% 200%;
      animation: drift 15s ease infinite;
      padding: 24px 16px 48px;
    }

    @keyframes drift {
      0%, 100% { background-position: 0% 50%; }
      50% { background-position: 100% 50%; }
    }

    main {
      width: min(680px, 100%);
      margin: 0 auto;
      display: grid;
      gap: 16px;
    }

    .scoreboard {
      background: var(--card);
      border: 2px solid #e9d5ff;
      border-radius: 24px;
      padding: 24px;
      text-align: center;
      display: grid;
      gap: 14px;
    }

    h1 {
      margin: 0;
      font-size: clamp(2.2rem, 6vw, 3rem);
      font-weight: 900;
    }

    .tally {
      border-radius: 18px;
      padding: 16px;
    }

    .tally.today {
      background: linear-gradient(135deg, #fef3c7, #fef9c3);
      color: var(--gold);
    }

    .tally.ever {
      background: linear-gradient(135deg, #f3e8ff, #fce7f3);
    }

    .tally .value {
      display: block;
      font-size: 3rem;
      font-weight: 900;
    }

    .tally .label {
      font-size: 1.2rem;
      font-weight: 700;
    }

    .chores {
      display: grid;
      gap: 12px;
    }

    .chore-form {
      margin: 0;
    }

    .chore {
      width: 100%;
      border: 2px solid rgba(255, 255, 255, 0.6);
      border-radius: 18px;
      padding: 16px 18px;
      display: flex;
      align-items: center;
      gap: 16px;
      font: inherit;
      cursor: pointer;
      transition: transform 120ms ease;
    }

    .chore:active {
      transform: scale(0.98);
    }

    .chore .badge {
      width: 52px;
      height: 52px;
      border-radius: 50%;
      background: white;
      display: grid;
      place-items: center;
      font-size: 1.8rem;
    }

    .chore .name {
      flex: 1;
      text-align: left;
      font-size: 1.3rem;
      font-weight: 700;
    }

    .chore .points {
      background: rgba(255, 255, 255, 0.8);
      border-radius: 999px;
      padding: 6px 12px;
      font-weight: 900;
    }

    .chore.done {
      background: var(--done);
      border-color: #6ee7b7;
    }

    .tint-rose { background: #fecdd3; }
    .tint-violet { background: #ddd6fe; }
    .tint-amber { background: #fde68a; }
    .tint-teal { background: #99f6e4; }
    .tint-sky { background: #bae6fd; }
    .tint-fuchsia { background: #f5d0fe; }

    .modal {
      position: fixed;
      inset: 0;
      background: rgba(0, 0, 0, 0.3);
      display: grid;
      place-items: center;
      padding: 16px;
      z-index: 40;
    }

    .modal[hidden] {
      display: none;
    }

    .modal-card {
      background: linear-gradient(135deg, #fbcfe8, #e9d5ff);
      border: 4px solid white;
      border-radius: 24px;
      padding: 32px;
      text-align: center;
      max-width: 360px;
    }

    .modal-card .headline {
      font-size: 2.6rem;
      font-weight: 900;
      margin: 0 0 12px;
    }

    .modal-card button {
      border: none;
      border-radius: 16px;
      background: white;
      color: var(--ink);
      font: inherit;
      font-size: 1.3rem;
      font-weight: 900;
      padding: 14px 28px;
      cursor: pointer;
    }
  </style>
</head>
<body>
  <main>
    <section class="scoreboard">
      <h1>✨ My Chores! ✨</h1>
      <div class="tally today">
        <span class="value" id="total">{{TOTAL}}</span>
        <span class="label">out of <span id="max">{{MAX}}</span> stars today!</span>
      </div>
      <div class="tally ever">
        <span class="value" id="ever">{{EVER}}</span>
        <span class="label">Total Stars Ever!</span>
      </div>
    </section>

    <section class="chores" id="chores" data-date="{{DATE}}">
      {{CHORES}}
    </section>
  </main>

  <form class="modal" id="celebration" method="post" action="/celebration/dismiss" {{MODAL_HIDDEN}}>
    <div class="modal-card" id="celebration-card">
      <p class="headline">🎉 AMAZING! 🎉</p>
      <p>All chores done!</p>
      <p>⭐✨💫</p>
      <button type="submit">YAY! 🎈</button>
    </div>
  </form>

  <script>
    const totalEl = document.getElementById('total');
    const maxEl = document.getElementById('max');
    const everEl = document.getElementById('ever');
    const choresEl = document.getElementById('chores');
    const modalEl = document.getElementById('celebration');
    const cardEl = document.getElementById('celebration-card');

    let audio = null;

    const playTone = (tone) => {
      try {
        const Ctx = window.AudioContext || window.webkitAudioContext;
        audio = audio || new Ctx();
        if (audio.state === 'suspended') {
          audio.resume();
        }
        const start = audio.currentTime;
        const seconds = tone.duration_ms / 1000;
        const oscillator = audio.createOscillator();
        const gain = audio.createGain();
        oscillator.connect(gain);
        gain.connect(audio.destination);
        oscillator.type = 'sine';
        oscillator.frequency.value = tone.frequency_hz;
        gain.gain.setValueAtTime(0.3, start);
        gain.gain.exponentialRampToValueAtTime(0.01, start + seconds);
        oscillator.start(start);
        oscillator.stop(start + seconds);
      } catch (err) {
        // no audio
      }
    };

    const playCues = (cues) => {
      cues.forEach((event) => {
        event.tones.forEach((tone) => setTimeout(() => playTone(tone), tone.delay_ms));
      });
    };

    const escapeHtml = (value) =>
      String(value).replace(/[&<>"']/g, (ch) => ({
        '&': '&amp;', '<': '&lt;', '>': '&gt;', '"': '&quot;', "'": '&#39;'
      })[ch]);

    const renderChore = (chore) => `
      <form class="chore-form" method="post" action="/chores/${chore.id}/toggle" data-id="${chore.id}">
        <button class="chore ${chore.completed ? 'done' : 'todo'} tint-${escapeHtml(chore.color)}" type="submit">
          <span class="badge">${chore.completed ? '✔' : escapeHtml(chore.emoji)}</span>
          <span class="name">${escapeHtml(chore.name)}</span>
          <span class="points">★ ${chore.points}</span>
        </button>
      </form>`;

    const render = (view) => {
      totalEl.textContent = view.total_points;
      maxEl.textContent = view.max_points;
      everEl.textContent = view.stars_ever;
      choresEl.dataset.date = view.date;
      choresEl.innerHTML = view.chores.map(renderChore).join('');
      modalEl.hidden = !view.celebration_visible;
    };

    const post = async (url) => {
      const res = await fetch(url, { method: 'POST' });
      if (!res.ok) {
        throw new Error(await res.text());
      }
      return res.json();
    };

    choresEl.addEventListener('submit', (event) => {
      event.preventDefault();
      const id = event.target.dataset.id;
      post(`/api/chores/${id}/toggle`)
        .then((result) => {
          render(result.view);
          playCues(result.cues);
        })
        .catch((err) => console.error('toggle failed', err));
    });

    const dismiss = () => {
      modalEl.hidden = true;
      post('/api/celebration/dismiss')
        .then(render)
        .catch((err) => console.error('dismiss failed', err));
    };

    modalEl.addEventListener('submit', (event) => {
      event.preventDefault();
      dismiss();
    });
    modalEl.addEventListener('click', (event) => {
      if (!cardEl.contains(event.target)) {
        dismiss();
      }
    });
  </script>
</body>
</html>
"#;
