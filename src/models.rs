use crate::cues::CueEvent;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoreItem {
    pub id: u32,
    pub name: String,
    pub points: u32,
    pub completed: bool,
    #[serde(default)]
    pub emoji: String,
    #[serde(default)]
    pub color: String,
}

/// The single persisted row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerRecord {
    #[serde(rename = "chore_data")]
    pub chore_list: Vec<ChoreItem>,
    #[serde(default, deserialize_with = "date_or_empty")]
    pub last_reset_date: Option<NaiveDate>,
    #[serde(default)]
    pub all_time_score: u64,
    #[serde(default)]
    pub today_score: u64,
}

impl TrackerRecord {
    /// Row contents before any day has been tracked.
    pub fn seed() -> Self {
        Self {
            chore_list: crate::chores::default_chores(),
            last_reset_date: None,
            all_time_score: 0,
            today_score: 0,
        }
    }
}

/// Partial update of a [`TrackerRecord`]; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordPatch {
    #[serde(rename = "chore_data", skip_serializing_if = "Option::is_none")]
    pub chore_list: Option<Vec<ChoreItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_reset_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_time_score: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub today_score: Option<u64>,
}

impl RecordPatch {
    pub fn apply_to(&self, record: &mut TrackerRecord) {
        if let Some(list) = &self.chore_list {
            record.chore_list = list.clone();
        }
        if let Some(date) = self.last_reset_date {
            record.last_reset_date = Some(date);
        }
        if let Some(score) = self.all_time_score {
            record.all_time_score = score;
        }
        if let Some(score) = self.today_score {
            record.today_score = score;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerView {
    pub date: String,
    pub chores: Vec<ChoreItem>,
    pub total_points: u64,
    pub max_points: u64,
    pub today_score: u64,
    pub all_time_score: u64,
    pub stars_ever: u64,
    pub celebration_visible: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ToggleResponse {
    pub completed: bool,
    pub cues: Vec<CueEvent>,
    pub view: TrackerView,
}

// The hosted table stores "" for a row that was never reset.
fn date_or_empty<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_reads_hosted_row_shape() {
        let row = serde_json::json!({
            "id": 1,
            "chore_data": [
                { "id": 1, "name": "Floss", "points": 1, "completed": true, "emoji": "🪥", "color": "x" }
            ],
            "last_reset_date": "2024-01-01",
            "all_time_score": 10,
            "today_score": 1
        });

        let record: TrackerRecord = serde_json::from_value(row).unwrap();
        assert_eq!(record.chore_list.len(), 1);
        assert!(record.chore_list[0].completed);
        assert_eq!(record.last_reset_date, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(record.all_time_score, 10);
        assert_eq!(record.today_score, 1);
    }

    #[test]
    fn empty_reset_date_reads_as_none() {
        let row = serde_json::json!({
            "chore_data": [],
            "last_reset_date": "",
            "all_time_score": 0,
            "today_score": 0
        });
        let record: TrackerRecord = serde_json::from_value(row).unwrap();
        assert_eq!(record.last_reset_date, None);

        let row = serde_json::json!({ "chore_data": [], "last_reset_date": null });
        let record: TrackerRecord = serde_json::from_value(row).unwrap();
        assert_eq!(record.last_reset_date, None);
    }

    #[test]
    fn patch_serializes_only_present_fields() {
        let patch = RecordPatch {
            today_score: Some(3),
            ..RecordPatch::default()
        };
        let body = serde_json::to_value(&patch).unwrap();
        assert_eq!(body, serde_json::json!({ "today_score": 3 }));
    }

    #[test]
    fn patch_applies_subset() {
        let mut record = TrackerRecord::seed();
        let patch = RecordPatch {
            last_reset_date: NaiveDate::from_ymd_opt(2024, 1, 2),
            all_time_score: Some(13),
            ..RecordPatch::default()
        };
        patch.apply_to(&mut record);

        assert_eq!(record.last_reset_date, NaiveDate::from_ymd_opt(2024, 1, 2));
        assert_eq!(record.all_time_score, 13);
        assert_eq!(record.today_score, 0);
        assert_eq!(record.chore_list, crate::chores::default_chores());
    }
}
