//! Tunable timings and presentation constants.
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DataError;

/// Delays between the phases of a level transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionTimings {
    #[serde(default = "TransitionTimings::default_exit_ms")]
    pub exit_ms: u32,
    #[serde(default = "TransitionTimings::default_settle_ms")]
    pub settle_ms: u32,
    #[serde(default = "TransitionTimings::default_post_entry_ms")]
    pub post_entry_ms: u32,
}

impl TransitionTimings {
    const fn default_exit_ms() -> u32 {
        400
    }

    const fn default_settle_ms() -> u32 {
        50
    }

    const fn default_post_entry_ms() -> u32 {
        800
    }
}

impl Default for TransitionTimings {
    fn default() -> Self {
        Self {
            exit_ms: Self::default_exit_ms(),
            settle_ms: Self::default_settle_ms(),
            post_entry_ms: Self::default_post_entry_ms(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillTimings {
    #[serde(default = "SkillTimings::default_stagger_ms")]
    pub stagger_ms: u32,
    #[serde(default = "SkillTimings::default_glow_ms")]
    pub glow_ms: u32,
}

impl SkillTimings {
    const fn default_stagger_ms() -> u32 {
        200
    }

    const fn default_glow_ms() -> u32 {
        1000
    }
}

impl Default for SkillTimings {
    fn default() -> Self {
        Self {
            stagger_ms: Self::default_stagger_ms(),
            glow_ms: Self::default_glow_ms(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestConfig {
    #[serde(default)]
    pub transitions: TransitionTimings,
    #[serde(default)]
    pub skills: SkillTimings,
    #[serde(default = "QuestConfig::default_swipe_threshold_px")]
    pub swipe_threshold_px: i32,
    #[serde(default = "QuestConfig::default_download_notice_ms")]
    pub download_notice_ms: u32,
    /// Graduation day as `YYYY-MM-DD`, counted from midnight UTC.
    #[serde(default = "QuestConfig::default_graduation_date")]
    pub graduation_date: String,
    #[serde(default = "QuestConfig::default_xp_fill_percent")]
    pub xp_fill_percent: f32,
    #[serde(default = "QuestConfig::default_cgpa_fill_percent")]
    pub cgpa_fill_percent: f32,
}

impl QuestConfig {
    const fn default_swipe_threshold_px() -> i32 {
        50
    }

    const fn default_download_notice_ms() -> u32 {
        500
    }

    fn default_graduation_date() -> String {
        String::from("2026-06-30")
    }

    const fn default_xp_fill_percent() -> f32 {
        100.0
    }

    const fn default_cgpa_fill_percent() -> f32 {
        80.4
    }

    #[must_use]
    pub fn default_config() -> Self {
        Self {
            transitions: TransitionTimings::default(),
            skills: SkillTimings::default(),
            swipe_threshold_px: Self::default_swipe_threshold_px(),
            download_notice_ms: Self::default_download_notice_ms(),
            graduation_date: Self::default_graduation_date(),
            xp_fill_percent: Self::default_xp_fill_percent(),
            cgpa_fill_percent: Self::default_cgpa_fill_percent(),
        }
    }

    /// Parse a configuration document. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the graduation date is
    /// not a `YYYY-MM-DD` date.
    pub fn from_json(json: &str) -> Result<Self, DataError> {
        let config: Self = serde_json::from_str(json).map_err(|source| DataError::Parse {
            what: "quest config",
            source,
        })?;
        config.graduation_deadline()?;
        Ok(config)
    }

    /// Load the embedded configuration, falling back to defaults.
    #[must_use]
    pub fn load_from_static() -> Self {
        Self::from_json(include_str!("../data/quest.json"))
            .unwrap_or_else(|_| Self::default_config())
    }

    /// Midnight UTC on the graduation date.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::Date`] if `graduation_date` cannot be parsed.
    pub fn graduation_deadline(&self) -> Result<DateTime<Utc>, DataError> {
        NaiveDate::parse_from_str(&self.graduation_date, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc())
            .ok_or_else(|| DataError::Date {
                what: "graduation_date",
                value: self.graduation_date.clone(),
            })
    }
}

impl Default for QuestConfig {
    fn default() -> Self {
        Self::default_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_config_matches_defaults() {
        assert_eq!(QuestConfig::load_from_static(), QuestConfig::default_config());
    }

    #[test]
    fn partial_documents_fill_defaults() {
        let cfg =
            QuestConfig::from_json(r#"{"transitions":{"exit_ms":10},"swipe_threshold_px":80}"#)
                .unwrap();
        assert_eq!(cfg.transitions.exit_ms, 10);
        assert_eq!(cfg.transitions.settle_ms, 50);
        assert_eq!(cfg.swipe_threshold_px, 80);
        assert_eq!(cfg.skills, SkillTimings::default());
    }

    #[test]
    fn bad_graduation_date_is_rejected() {
        let err = QuestConfig::from_json(r#"{"graduation_date":"June 30"}"#).unwrap_err();
        assert!(matches!(err, DataError::Date { .. }));
        assert!(QuestConfig::from_json("{not json").is_err());
    }

    #[test]
    fn deadline_is_midnight_utc() {
        let deadline = QuestConfig::default_config().graduation_deadline().unwrap();
        assert_eq!(deadline.to_rfc3339(), "2026-06-30T00:00:00+00:00");
    }
}
