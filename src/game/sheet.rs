//! A player's card together with the numbers they have marked.

use log::{debug, info, trace};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::card::{
    classify_card, classify_near_win, near_win_lines, verify_claim, Card, Line, NearWin, WinResult,
};
use crate::core::error::{MyngoError, Result};
use crate::core::number_set::{is_ball, NumberSet};

/// What the player view should show for a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "line", rename_all = "snake_case")]
pub enum CardStatus {
    /// A line is complete; show the win button.
    Won(Line),
    /// One square away on at least one line; show the banner.
    NearWin,
    /// Neither.
    InProgress,
}

impl CardStatus {
    /// Whether the card has won.
    #[must_use]
    pub fn is_won(&self) -> bool {
        matches!(self, CardStatus::Won(_))
    }
}

/// One player's card and marks for one game.
///
/// Marks only ever grow; a new game gets a new sheet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSheet {
    card: Card,
    marked: NumberSet,
}

impl PlayerSheet {
    /// Sheet with nothing marked.
    #[must_use]
    pub fn new(card: Card) -> Self {
        Self {
            card,
            marked: NumberSet::new(),
        }
    }

    /// The player's card.
    #[must_use]
    pub fn card(&self) -> &Card {
        &self.card
    }

    /// Numbers marked so far.
    #[must_use]
    pub fn marked(&self) -> &NumberSet {
        &self.marked
    }

    /// Mark a called number that is on the card.
    ///
    /// Marking the same number twice is allowed and changes nothing.
    /// Returns the card status after the mark.
    pub fn mark(&mut self, number: u8, called: &NumberSet) -> Result<CardStatus> {
        if !is_ball(number) {
            debug!("Rejected mark {}: not a ball", number);
            return Err(MyngoError::NumberOutOfRange(number));
        }
        if !self.card.contains(number) {
            debug!("Rejected mark {}: not on card", number);
            return Err(MyngoError::NotOnCard(number));
        }
        if !called.contains(number) {
            debug!("Rejected mark {}: not called yet", number);
            return Err(MyngoError::NotCalled(number));
        }

        let was_won = self.is_won();
        self.marked.insert(number);

        let status = self.status();
        if let (false, CardStatus::Won(line)) = (was_won, status) {
            info!("Card completed {} on mark {}", line, number);
        }
        Ok(status)
    }

    /// Mark every called number that is on the card.
    ///
    /// Returns how many new marks were made.
    pub fn auto_mark(&mut self, called: &NumberSet) -> usize {
        let before = self.marked.len();
        let on_card = self.card.number_set().intersection(called);
        self.marked = self.marked.union(&on_card);

        let added = self.marked.len() - before;
        trace!("Auto-marked {} numbers", added);
        added
    }

    /// Current status; a won card never reports near-win.
    #[must_use]
    pub fn status(&self) -> CardStatus {
        match classify_card(&self.card, &self.marked) {
            WinResult::Win(line) => CardStatus::Won(line),
            WinResult::NoWin if classify_near_win(&self.card, &self.marked) => CardStatus::NearWin,
            WinResult::NoWin => CardStatus::InProgress,
        }
    }

    /// Whether any line is complete.
    #[must_use]
    pub fn is_won(&self) -> bool {
        classify_card(&self.card, &self.marked).has_win()
    }

    /// Lines one square away, with the number each needs.
    #[must_use]
    pub fn near_wins(&self) -> SmallVec<[NearWin; 4]> {
        near_win_lines(&self.card, &self.marked)
    }

    /// Host-side check of this sheet's win claim.
    #[must_use]
    pub fn verify(&self, called: &NumberSet) -> WinResult {
        verify_claim(&self.card, &self.marked, called)
    }
}
