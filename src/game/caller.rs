//! Number caller: draws balls without replacement for one game.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::card::Ball;
use crate::core::error::MyngoError;
use crate::core::number_set::{NumberSet, MAX_NUMBER, MIN_NUMBER};
use crate::core::rng::GameRng;

/// Called-set and call history for one game.
///
/// The called-set only grows until [`NumberCaller::reset`] starts a new game.
///
/// ```
/// use myngo::core::GameRng;
/// use myngo::game::NumberCaller;
///
/// let mut rng = GameRng::new(1);
/// let mut caller = NumberCaller::new();
///
/// let ball = caller.call_next(&mut rng).unwrap();
/// assert!(caller.called().contains(ball.number()));
/// assert_eq!(caller.remaining(), 74);
/// ```
///
/// Serializes as the call history alone; the called-set is rebuilt on load
/// and a history that repeats a ball is rejected.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Ball>", into = "Vec<Ball>")]
pub struct NumberCaller {
    called: NumberSet,
    history: Vec<Ball>,
}

impl NumberCaller {
    /// Start a game with nothing called.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw and record the next ball, or `None` once all 75 are out.
    pub fn call_next(&mut self, rng: &mut GameRng) -> Option<Ball> {
        let pool: Vec<u8> = (MIN_NUMBER..=MAX_NUMBER)
            .filter(|&n| !self.called.contains(n))
            .collect();

        let ball = rng.choose(&pool).copied().and_then(Ball::new)?;
        self.record(ball);
        Some(ball)
    }

    /// Record a ball called by hand. Returns `false` if it was already called.
    pub fn call(&mut self, ball: Ball) -> bool {
        if self.called.contains(ball.number()) {
            return false;
        }
        self.record(ball);
        true
    }

    fn record(&mut self, ball: Ball) {
        self.called.insert(ball.number());
        self.history.push(ball);
        debug!("Called {} ({} of {})", ball, self.history.len(), MAX_NUMBER);
    }

    /// Numbers called so far.
    #[must_use]
    pub fn called(&self) -> &NumberSet {
        &self.called
    }

    /// Balls in the order they were called.
    #[must_use]
    pub fn history(&self) -> &[Ball] {
        &self.history
    }

    /// The most recent ball.
    #[must_use]
    pub fn last(&self) -> Option<Ball> {
        self.history.last().copied()
    }

    /// Balls still in the drum.
    #[must_use]
    pub fn remaining(&self) -> usize {
        usize::from(MAX_NUMBER) - self.called.len()
    }

    /// Whether every ball has been called.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    /// Start a new game.
    pub fn reset(&mut self) {
        self.called.clear();
        self.history.clear();
        debug!("Caller reset for a new game");
    }
}

impl TryFrom<Vec<Ball>> for NumberCaller {
    type Error = MyngoError;

    fn try_from(history: Vec<Ball>) -> Result<Self, Self::Error> {
        let mut called = NumberSet::new();
        for ball in &history {
            if !called.insert(ball.number()) {
                return Err(MyngoError::DuplicateNumber(ball.number()));
            }
        }
        Ok(Self { called, history })
    }
}

impl From<NumberCaller> for Vec<Ball> {
    fn from(caller: NumberCaller) -> Vec<Ball> {
        caller.history
    }
}
