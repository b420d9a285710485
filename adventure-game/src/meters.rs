//! Per-level meters: the XP bar, the CGPA bar and the graduation countdown.
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::transition::LevelEffect;

const DAY_SECS: i64 = 60 * 60 * 24;
const YEAR_SECS: i64 = DAY_SECS * 365;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    pub years: i64,
    pub days: i64,
}

impl Countdown {
    /// Whole years (365 days) and remaining whole days until `deadline`.
    /// Returns `None` once the deadline has passed.
    #[must_use]
    pub fn until(deadline: DateTime<Utc>, now: DateTime<Utc>) -> Option<Self> {
        let remaining: TimeDelta = deadline - now;
        if remaining <= TimeDelta::zero() {
            return None;
        }
        let secs = remaining.num_seconds();
        Some(Self {
            years: secs / YEAR_SECS,
            days: (secs % YEAR_SECS) / DAY_SECS,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LevelMeters {
    pub xp_percent: f32,
    pub cgpa_percent: f32,
    pub countdown: Option<Countdown>,
}

impl LevelMeters {
    /// Apply a post-entry effect. The countdown keeps its last value when the
    /// deadline has passed.
    pub fn apply(
        &mut self,
        effect: LevelEffect,
        targets: MeterTargets,
        deadline: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) {
        match effect {
            LevelEffect::FillXpBar => self.xp_percent = targets.xp_percent,
            LevelEffect::FillCgpaBar => self.cgpa_percent = targets.cgpa_percent,
            LevelEffect::StartGraduationCountdown => {
                if let Some(countdown) = deadline.and_then(|d| Countdown::until(d, now)) {
                    self.countdown = Some(countdown);
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeterTargets {
    pub xp_percent: f32,
    pub cgpa_percent: f32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn deadline() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 30, 0, 0, 0).unwrap()
    }

    #[test]
    fn countdown_splits_years_and_days() {
        let now = Utc.with_ymd_and_hms(2024, 6, 29, 12, 0, 0).unwrap();
        // 730.5 days: two 365-day years and no whole day left
        assert_eq!(
            Countdown::until(deadline(), now),
            Some(Countdown { years: 2, days: 0 })
        );

        let now = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(
            Countdown::until(deadline(), now),
            Some(Countdown { years: 0, days: 180 })
        );
    }

    #[test]
    fn countdown_stops_after_deadline() {
        assert_eq!(Countdown::until(deadline(), deadline()), None);
        let later = Utc.with_ymd_and_hms(2026, 10, 19, 0, 0, 0).unwrap();
        assert_eq!(Countdown::until(deadline(), later), None);
    }

    #[test]
    fn effects_fill_their_meters() {
        let targets = MeterTargets {
            xp_percent: 100.0,
            cgpa_percent: 80.4,
        };
        let now = Utc.with_ymd_and_hms(2026, 6, 20, 0, 0, 0).unwrap();
        let mut meters = LevelMeters::default();
        meters.apply(LevelEffect::FillXpBar, targets, Some(deadline()), now);
        meters.apply(LevelEffect::FillCgpaBar, targets, Some(deadline()), now);
        meters.apply(LevelEffect::StartGraduationCountdown, targets, Some(deadline()), now);
        assert!((meters.xp_percent - 100.0).abs() < f32::EPSILON);
        assert!((meters.cgpa_percent - 80.4).abs() < f32::EPSILON);
        assert_eq!(meters.countdown, Some(Countdown { years: 0, days: 10 }));
    }
}
