//! Call-pacing formulas.
//!
//! All three are pure arithmetic and independent of each other. Outputs are
//! rounded to whole seconds or calls and clamped to the configured bounds.

use super::config::TimingConfig;
use crate::core::error::{MyngoError, Result};

impl TimingConfig {
    /// Seconds to wait between calls so a meeting produces a winner.
    ///
    /// Estimates the calls needed as `baseline - per_player * players`
    /// (floored at 1) and spreads the usable share of the meeting over them.
    #[must_use]
    pub fn recommended_call_interval(&self, player_count: u32, meeting_minutes: u32) -> u32 {
        let numbers_needed = (self.interval_baseline_calls
            - self.interval_calls_per_player * f64::from(player_count))
        .max(1.0);
        let available_secs = f64::from(meeting_minutes) * 60.0 * self.interval_time_share;

        clamp_round(
            available_secs / numbers_needed,
            self.min_interval_secs,
            self.max_interval_secs,
        )
    }

    /// Calls after which some player has almost certainly completed a line.
    ///
    /// `ceil(baseline - log_factor * log10(players))`; more players means
    /// fewer calls.
    pub fn calls_needed_for_winner(&self, player_count: u32) -> Result<u32> {
        if player_count < 1 {
            return Err(MyngoError::InvalidPlayerCount(player_count));
        }

        let calls = (self.winner_baseline_calls
            - self.winner_log_factor * f64::from(player_count).log10())
        .ceil();

        Ok(clamp(calls, self.min_calls, self.max_calls))
    }

    /// Seconds between calls to fit `calls_needed` calls into the meeting.
    pub fn seconds_between_calls(&self, meeting_minutes: u32, calls_needed: u32) -> Result<u32> {
        if calls_needed == 0 {
            return Err(MyngoError::InvalidCallsNeeded(calls_needed));
        }

        let pacing_secs = f64::from(meeting_minutes) * 60.0 * self.pacing_time_share;
        let paced = pacing_secs / f64::from(calls_needed);

        Ok(clamp_round(paced, self.min_pacing_secs, self.max_pacing_secs))
    }
}

/// [`TimingConfig::recommended_call_interval`] with default constants.
///
/// ```
/// use myngo::timing::recommended_call_interval;
///
/// // 45 - 5 = 40 numbers over 810 usable seconds
/// assert_eq!(recommended_call_interval(10, 15), 20);
/// ```
#[must_use]
pub fn recommended_call_interval(player_count: u32, meeting_minutes: u32) -> u32 {
    TimingConfig::default().recommended_call_interval(player_count, meeting_minutes)
}

/// [`TimingConfig::calls_needed_for_winner`] with default constants.
///
/// ```
/// use myngo::timing::calls_needed_for_winner;
///
/// assert_eq!(calls_needed_for_winner(10), Ok(40));
/// assert!(calls_needed_for_winner(0).is_err());
/// ```
pub fn calls_needed_for_winner(player_count: u32) -> Result<u32> {
    TimingConfig::default().calls_needed_for_winner(player_count)
}

/// [`TimingConfig::seconds_between_calls`] with default constants.
pub fn seconds_between_calls(meeting_minutes: u32, calls_needed: u32) -> Result<u32> {
    TimingConfig::default().seconds_between_calls(meeting_minutes, calls_needed)
}

fn clamp_round(value: f64, min: u32, max: u32) -> u32 {
    clamp(value.round(), min, max)
}

// max-then-min so an inverted config degrades instead of panicking
fn clamp(value: f64, min: u32, max: u32) -> u32 {
    value.max(f64::from(min)).min(f64::from(max)) as u32
}
