//! Per-room call plan, recomputed whenever the host changes the settings.

use log::debug;
use serde::{Deserialize, Serialize};

use super::config::{RoomSettings, TimingConfig};
use crate::core::error::Result;

/// Everything the host dashboard shows about call pacing for a room.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallPlan {
    /// Settings the plan was computed from.
    pub settings: RoomSettings,
    /// Calls after which a winner is near-certain.
    pub calls_needed: u32,
    /// Gap that fits `calls_needed` calls into the meeting.
    pub seconds_between_calls: u32,
    /// Suggested auto-call interval.
    pub recommended_interval_secs: u32,
}

impl CallPlan {
    /// Compute the plan for a room.
    pub fn for_room(settings: RoomSettings, config: &TimingConfig) -> Result<Self> {
        settings.validate()?;
        config.validate()?;

        let calls_needed = config.calls_needed_for_winner(settings.player_count)?;
        let seconds_between_calls =
            config.seconds_between_calls(settings.meeting_minutes, calls_needed)?;
        let recommended_interval_secs =
            config.recommended_call_interval(settings.player_count, settings.meeting_minutes);

        let plan = Self {
            settings,
            calls_needed,
            seconds_between_calls,
            recommended_interval_secs,
        };
        debug!(
            "Call plan for {} players / {} min: {} calls, {}s paced, {}s recommended",
            settings.player_count,
            settings.meeting_minutes,
            calls_needed,
            seconds_between_calls,
            recommended_interval_secs
        );
        Ok(plan)
    }

    /// Seconds spent calling `calls_needed` balls at the paced gap.
    #[must_use]
    pub fn estimated_calling_secs(&self) -> u64 {
        u64::from(self.calls_needed) * u64::from(self.seconds_between_calls)
    }

    /// Whether the paced calls fit in the meeting.
    #[must_use]
    pub fn fits_meeting(&self) -> bool {
        self.estimated_calling_secs() <= u64::from(self.settings.meeting_minutes) * 60
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::MyngoError;

    #[test]
    fn test_plan_reference_room() {
        let plan = CallPlan::for_room(RoomSettings::new(10, 30), &TimingConfig::default()).unwrap();

        assert_eq!(plan.calls_needed, 40);
        assert_eq!(plan.seconds_between_calls, 38);
        // 45 - 5 = 40 numbers over 1620s -> 40.5 -> 41
        assert_eq!(plan.recommended_interval_secs, 41);
        assert_eq!(plan.estimated_calling_secs(), 1520);
        assert!(plan.fits_meeting());
    }

    #[test]
    fn test_plan_short_meeting_overruns() {
        // 50 calls at the 5s floor is 250s, longer than a 1 minute meeting
        let plan = CallPlan::for_room(RoomSettings::new(1, 1), &TimingConfig::default()).unwrap();
        assert_eq!(plan.calls_needed, 50);
        assert_eq!(plan.seconds_between_calls, 5);
        assert!(!plan.fits_meeting());
    }

    #[test]
    fn test_plan_rejects_bad_settings() {
        let config = TimingConfig::default();
        assert_eq!(
            CallPlan::for_room(RoomSettings::new(0, 30), &config),
            Err(MyngoError::InvalidPlayerCount(0))
        );
        assert_eq!(
            CallPlan::for_room(RoomSettings::new(5, 0), &config),
            Err(MyngoError::InvalidMeetingLength(0))
        );
    }

    #[test]
    fn test_plan_rejects_bad_config() {
        let config = TimingConfig::default().with_pacing_bounds(10, 5);
        assert!(matches!(
            CallPlan::for_room(RoomSettings::new(10, 30), &config),
            Err(MyngoError::InvalidConfig(_))
        ));
    }
}
