//! Timing model configuration and room settings.

use serde::{Deserialize, Serialize};

use crate::core::error::{MyngoError, Result};

/// Constants behind the call-pacing formulas.
///
/// `Default` gives the tuned values used by the free functions in
/// [`crate::timing`]; hosts experimenting with pacing can override them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Calls a lone player typically needs before completing a line.
    pub interval_baseline_calls: f64,

    /// Calls saved per extra player in the room.
    pub interval_calls_per_player: f64,

    /// Share of the meeting spent calling (the rest covers setup and wrap-up).
    pub interval_time_share: f64,

    /// Shortest recommended interval (seconds).
    pub min_interval_secs: u32,

    /// Longest recommended interval (seconds).
    pub max_interval_secs: u32,

    /// Calls needed for a single player to complete a line.
    pub winner_baseline_calls: f64,

    /// Calls saved per tenfold increase in players.
    pub winner_log_factor: f64,

    /// Fewest calls ever planned.
    pub min_calls: u32,

    /// Most calls ever planned (every ball).
    pub max_calls: u32,

    /// Share of the meeting used when pacing a planned number of calls.
    pub pacing_time_share: f64,

    /// Shortest paced gap between calls (seconds).
    pub min_pacing_secs: u32,

    /// Longest paced gap between calls (seconds).
    pub max_pacing_secs: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            interval_baseline_calls: 45.0,
            interval_calls_per_player: 0.5,
            interval_time_share: 0.90,
            min_interval_secs: 10,
            max_interval_secs: 90,
            winner_baseline_calls: 50.0,
            winner_log_factor: 10.0,
            min_calls: 15,
            max_calls: 75,
            pacing_time_share: 0.85,
            min_pacing_secs: 5,
            max_pacing_secs: 120,
        }
    }
}

impl TimingConfig {
    /// Override the recommended interval bounds.
    #[must_use]
    pub fn with_interval_bounds(mut self, min_secs: u32, max_secs: u32) -> Self {
        self.min_interval_secs = min_secs;
        self.max_interval_secs = max_secs;
        self
    }

    /// Override the planned call bounds.
    #[must_use]
    pub fn with_call_bounds(mut self, min_calls: u32, max_calls: u32) -> Self {
        self.min_calls = min_calls;
        self.max_calls = max_calls;
        self
    }

    /// Override the paced gap bounds.
    #[must_use]
    pub fn with_pacing_bounds(mut self, min_secs: u32, max_secs: u32) -> Self {
        self.min_pacing_secs = min_secs;
        self.max_pacing_secs = max_secs;
        self
    }

    /// Override both meeting time shares.
    #[must_use]
    pub fn with_time_shares(mut self, interval: f64, pacing: f64) -> Self {
        self.interval_time_share = interval;
        self.pacing_time_share = pacing;
        self
    }

    /// Check that the configuration can produce meaningful timings.
    pub fn validate(&self) -> Result<()> {
        let bounds = [
            ("interval", self.min_interval_secs, self.max_interval_secs),
            ("calls", self.min_calls, self.max_calls),
            ("pacing", self.min_pacing_secs, self.max_pacing_secs),
        ];
        for (name, min, max) in bounds {
            if min > max {
                return Err(MyngoError::InvalidConfig(format!(
                    "{name} bounds inverted: {min} > {max}"
                )));
            }
        }
        if self.min_calls == 0 {
            return Err(MyngoError::InvalidConfig("min_calls must be at least 1".into()));
        }

        let shares = [
            ("interval_time_share", self.interval_time_share),
            ("pacing_time_share", self.pacing_time_share),
        ];
        for (name, share) in shares {
            if !(share > 0.0 && share <= 1.0) {
                return Err(MyngoError::InvalidConfig(format!(
                    "{name} must be in (0, 1], got {share}"
                )));
            }
        }

        let non_negative = [
            ("interval_baseline_calls", self.interval_baseline_calls),
            ("interval_calls_per_player", self.interval_calls_per_player),
            ("winner_baseline_calls", self.winner_baseline_calls),
            ("winner_log_factor", self.winner_log_factor),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(MyngoError::InvalidConfig(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }

        Ok(())
    }
}

/// Host-chosen room settings that drive the timing model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSettings {
    /// Expected number of players.
    pub player_count: u32,
    /// Length of the meeting in minutes.
    pub meeting_minutes: u32,
}

impl RoomSettings {
    /// Create room settings.
    #[must_use]
    pub const fn new(player_count: u32, meeting_minutes: u32) -> Self {
        Self {
            player_count,
            meeting_minutes,
        }
    }

    /// Reject settings the timing model cannot plan for.
    pub fn validate(&self) -> Result<()> {
        if self.player_count == 0 {
            return Err(MyngoError::InvalidPlayerCount(self.player_count));
        }
        if self.meeting_minutes == 0 {
            return Err(MyngoError::InvalidMeetingLength(self.meeting_minutes));
        }
        Ok(())
    }
}
