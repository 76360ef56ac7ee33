//! Hand valuation under the Ace rule: every Ace counts as 1 or 11,
//! whichever serves the hand best.

use serde::Serialize;

use crate::{Card, CardCount};

const BLACKJACK: usize = 21;
const ACE_BONUS: usize = 10;

/// The best total a hand can reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HandValue {
    pub total: usize,
    /// At least one Ace is counted as 11.
    pub is_soft: bool,
}

impl HandValue {
    pub fn is_bust(&self) -> bool {
        self.total > BLACKJACK
    }
}

/// Promotes Aces from 1 to 11 as many times as the hand allows without
/// going over 21. When even the all-ones total is over 21 the hand is bust
/// and that minimal total is returned.
pub fn best_total(hand: &CardCount) -> HandValue {
    let sum = hand.get_sum();
    let promotions = if sum > BLACKJACK {
        0
    } else {
        hand.number_of_aces().min((BLACKJACK - sum) / ACE_BONUS)
    };

    HandValue {
        total: sum + ACE_BONUS * promotions,
        is_soft: promotions > 0,
    }
}

pub fn best_total_of(cards: &[Card]) -> HandValue {
    best_total(&cards.iter().collect())
}

pub fn is_bust(hand: &CardCount) -> bool {
    best_total(hand).is_bust()
}
