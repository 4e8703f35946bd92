use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cue {
    Check,
    Uncheck,
    Celebration,
}

/// One sine tone, started `delay_ms` after the cue fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tone {
    pub frequency_hz: u32,
    pub duration_ms: u32,
    pub delay_ms: u32,
}

impl Cue {
    pub fn tones(self) -> Vec<Tone> {
        match self {
            Cue::Check => vec![tone(800, 100, 0), tone(1000, 150, 50)],
            Cue::Uncheck => vec![tone(600, 100, 0), tone(500, 100, 50)],
            Cue::Celebration => [523, 659, 784, 1047]
                .into_iter()
                .zip(0..)
                .map(|(frequency, step)| tone(frequency, 300, step * 150))
                .collect(),
        }
    }
}

fn tone(frequency_hz: u32, duration_ms: u32, delay_ms: u32) -> Tone {
    Tone {
        frequency_hz,
        duration_ms,
        delay_ms,
    }
}

/// A cue with its tone schedule, as sent to the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CueEvent {
    pub cue: Cue,
    pub tones: Vec<Tone>,
}

impl From<Cue> for CueEvent {
    fn from(cue: Cue) -> Self {
        Self {
            cue,
            tones: cue.tones(),
        }
    }
}

/// Fire-and-forget audible feedback. Implementations must never fail.
pub trait CuePlayer {
    fn play(&mut self, cue: Cue);
}

/// Collects cues so the page can play them.
impl CuePlayer for Vec<Cue> {
    fn play(&mut self, cue: Cue) {
        self.push(cue);
    }
}

pub struct Silent;

impl CuePlayer for Silent {
    fn play(&mut self, _cue: Cue) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn celebration_is_an_ascending_arpeggio() {
        let tones = Cue::Celebration.tones();
        assert_eq!(tones.len(), 4);
        assert!(tones.windows(2).all(|pair| pair[0].frequency_hz < pair[1].frequency_hz));
        assert_eq!(
            tones.iter().map(|t| t.delay_ms).collect::<Vec<_>>(),
            vec![0, 150, 300, 450]
        );
    }

    #[test]
    fn check_and_uncheck_sound_different() {
        assert_ne!(Cue::Check.tones(), Cue::Uncheck.tones());
    }

    #[test]
    fn cue_event_serializes_snake_case() {
        let event = CueEvent::from(Cue::Uncheck);
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["cue"], "uncheck");
        assert_eq!(value["tones"][0]["frequency_hz"], 600);
    }
}
