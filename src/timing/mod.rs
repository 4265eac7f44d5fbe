//! Timing model for auto-calling.
//!
//! Turns room settings into pacing numbers. Nothing here schedules calls;
//! an external scheduler reads the recommended interval and decides when
//! to call the next ball.
//!
//! ## Usage
//!
//! ```rust
//! use myngo::timing::{CallPlan, RoomSettings, TimingConfig};
//!
//! let plan = CallPlan::for_room(RoomSettings::new(25, 45), &TimingConfig::default())?;
//! assert!((10..=90).contains(&plan.recommended_interval_secs));
//! # Ok::<(), myngo::MyngoError>(())
//! ```

pub mod config;
pub mod model;
pub mod plan;

pub use config::{RoomSettings, TimingConfig};
pub use model::{calls_needed_for_winner, recommended_call_interval, seconds_between_calls};
pub use plan::CallPlan;
