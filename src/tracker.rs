//! In-memory tracker state for one session, kept in step with the remote record.
//!
//! The controller is mounted once: the record is loaded (or defaults kept on
//! failure), the post-load change is absorbed by the one-shot [`LoadState`]
//! guard, and only then do reset detection and change saves act on the data.
//!
//! Until a load has succeeded the tracker runs offline: it keeps working on
//! the defaults, retries the load on later refreshes, and never writes the
//! remote row it has not read.

use crate::chores;
use crate::cues::{Cue, CuePlayer};
use crate::models::{ChoreItem, RecordPatch, TrackerRecord, TrackerView};
use crate::store::RemoteStore;
use chrono::{Local, NaiveDate};
use std::time::{Duration, Instant};
use tracing::{error, info, warn};

const LOAD_RETRY: Duration = Duration::from_secs(30);

/// One-shot guard that keeps the load itself from being saved straight back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    NotLoaded,
    JustLoaded,
    Settled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetOutcome {
    NotMounted,
    UpToDate,
    /// Nothing has been loaded yet, so the day rolled over locally only.
    Offline,
    Reset,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    NotMounted,
    Suppressed,
    /// Nothing has been loaded yet; the change stays local.
    Offline,
    Saved,
    Failed,
}

pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

#[derive(Debug)]
pub struct Tracker {
    record_id: i64,
    chores: Vec<ChoreItem>,
    last_reset_date: Option<NaiveDate>,
    all_time_score: u64,
    today_score: u64,
    load_state: LoadState,
    mounted: bool,
    celebrating: bool,
    load_retry: Duration,
    last_load_attempt: Option<Instant>,
}

impl Tracker {
    pub fn new(record_id: i64) -> Self {
        Self {
            record_id,
            chores: chores::default_chores(),
            last_reset_date: None,
            all_time_score: 0,
            today_score: 0,
            load_state: LoadState::NotLoaded,
            mounted: false,
            celebrating: false,
            load_retry: LOAD_RETRY,
            last_load_attempt: None,
        }
    }

    /// Minimum wait between load attempts while offline.
    pub fn with_load_retry(mut self, retry: Duration) -> Self {
        self.load_retry = retry;
        self
    }

    pub fn chores(&self) -> &[ChoreItem] {
        &self.chores
    }

    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn is_celebrating(&self) -> bool {
        self.celebrating
    }

    pub fn record(&self) -> TrackerRecord {
        TrackerRecord {
            chore_list: self.chores.clone(),
            last_reset_date: self.last_reset_date,
            all_time_score: self.all_time_score,
            today_score: self.today_score,
        }
    }

    /// Loads, settles the post-load change, then checks for a new day.
    pub async fn mount(&mut self, store: &dyn RemoteStore, today: NaiveDate) -> ResetOutcome {
        self.refresh(store, today).await
    }

    /// Retries the load while offline, then checks for a new day.
    pub async fn refresh(&mut self, store: &dyn RemoteStore, today: NaiveDate) -> ResetOutcome {
        if self.load_state == LoadState::NotLoaded && self.load_due() && self.load(store).await {
            // Loading replaced the chore list; that change must not be written back.
            self.save_on_change(store).await;
        }
        self.reset_if_needed(store, today).await
    }

    fn load_due(&self) -> bool {
        self.last_load_attempt
            .is_none_or(|at| at.elapsed() >= self.load_retry)
    }

    /// Replaces local state with the remote record. Returns whether it loaded.
    pub async fn load(&mut self, store: &dyn RemoteStore) -> bool {
        self.last_load_attempt = Some(Instant::now());
        let loaded = match store.fetch_record(self.record_id).await {
            Ok(record) => {
                info!(
                    chores = record.chore_list.len(),
                    all_time = record.all_time_score,
                    today = record.today_score,
                    "loaded tracker record"
                );
                self.chores = record.chore_list;
                self.last_reset_date = record.last_reset_date;
                self.all_time_score = record.all_time_score;
                self.today_score = record.today_score;
                self.celebrating = false;
                self.load_state = LoadState::JustLoaded;
                true
            }
            Err(err) => {
                error!("failed to load tracker record: {err}");
                false
            }
        };
        self.mounted = true;
        loaded
    }

    /// Folds today's score into the all-time total once per calendar day.
    pub async fn reset_if_needed(&mut self, store: &dyn RemoteStore, today: NaiveDate) -> ResetOutcome {
        if !self.mounted {
            return ResetOutcome::NotMounted;
        }

        match self.last_reset_date {
            Some(last) if today == last => return ResetOutcome::UpToDate,
            Some(last) if today < last => {
                warn!("local date {today} is before last reset {last}; keeping current day");
                return ResetOutcome::UpToDate;
            }
            _ => {}
        }

        let all_time_score = self.all_time_score.saturating_add(self.today_score);
        let reset_chores = chores::reset(&self.chores);

        if self.load_state == LoadState::NotLoaded {
            info!("offline daily reset for {today}");
            self.apply_reset(today, all_time_score, reset_chores);
            return ResetOutcome::Offline;
        }

        let patch = RecordPatch {
            chore_list: Some(reset_chores.clone()),
            last_reset_date: Some(today),
            all_time_score: Some(all_time_score),
            today_score: Some(0),
        };

        if let Err(err) = store.update_record(self.record_id, &patch).await {
            error!("failed to reset chores for {today}: {err}");
            return ResetOutcome::Failed;
        }

        info!(
            folded = self.today_score,
            all_time = all_time_score,
            "daily reset for {today}"
        );
        self.apply_reset(today, all_time_score, reset_chores);
        ResetOutcome::Reset
    }

    fn apply_reset(&mut self, today: NaiveDate, all_time_score: u64, chores: Vec<ChoreItem>) {
        self.all_time_score = all_time_score;
        self.chores = chores;
        self.today_score = 0;
        self.last_reset_date = Some(today);
        self.celebrating = false;
    }

    /// Writes the chore list and today's score after a local change.
    pub async fn save_on_change(&mut self, store: &dyn RemoteStore) -> SaveOutcome {
        if !self.mounted {
            return SaveOutcome::NotMounted;
        }
        if self.load_state == LoadState::JustLoaded {
            self.load_state = LoadState::Settled;
            return SaveOutcome::Suppressed;
        }

        self.today_score = chores::total_points(&self.chores);
        if self.load_state == LoadState::NotLoaded {
            return SaveOutcome::Offline;
        }

        let patch = RecordPatch {
            chore_list: Some(self.chores.clone()),
            today_score: Some(self.today_score),
            ..RecordPatch::default()
        };

        match store.update_record(self.record_id, &patch).await {
            Ok(()) => SaveOutcome::Saved,
            Err(err) => {
                error!("failed to save chores: {err}");
                SaveOutcome::Failed
            }
        }
    }

    /// Flips chore `id`. Returns its new completion state, or `None` if unknown.
    pub fn toggle(&mut self, id: u32, cues: &mut dyn CuePlayer) -> Option<bool> {
        let next = chores::toggled(&self.chores, id)?;
        let completed = next.iter().any(|chore| chore.id == id && chore.completed);
        let all_complete = chores::all_completed(&next);
        self.chores = next;

        cues.play(if completed { Cue::Check } else { Cue::Uncheck });

        if all_complete && completed {
            self.celebrating = true;
            cues.play(Cue::Celebration);
        } else if self.celebrating && !all_complete {
            self.celebrating = false;
        }

        Some(completed)
    }

    pub fn dismiss_celebration(&mut self) {
        self.celebrating = false;
    }

    pub fn view(&self, today: NaiveDate) -> TrackerView {
        let total_points = chores::total_points(&self.chores);
        let max_points = chores::max_points(&self.chores);
        TrackerView {
            date: today.format("%Y-%m-%d").to_string(),
            chores: self.chores.clone(),
            total_points,
            max_points,
            today_score: self.today_score,
            all_time_score: self.all_time_score,
            stars_ever: self.all_time_score.saturating_add(self.today_score),
            celebration_visible: self.celebrating && total_points == max_points,
        }
    }
}
