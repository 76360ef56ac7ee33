use serde::Serialize;
use thiserror::Error;

use crate::valuation::{best_total, is_bust, HandValue};
use crate::{Card, CardCount};

/// Returns the probability that one more card, drawn uniformly from
/// `remaining`, busts `hand`.
///
/// Note that this method won't check if `remaining` is empty. Use
/// [`BustQuery`] to get that guarantee from the type.
pub fn get_busting_probability(hand: &CardCount, remaining: &CardCount) -> f64 {
    let bust_count = count_busting_cards(hand, remaining);
    bust_count as f64 / remaining.get_total() as f64
}

/// Counts the cards in `remaining` that would bust `hand`. Every physical
/// card counts, so a value present twice counts twice.
fn count_busting_cards(hand: &CardCount, remaining: &CardCount) -> usize {
    let mut candidate = hand.clone();
    let mut bust_count = 0;
    for (card, count) in remaining.iter() {
        candidate.add_card(card);
        if is_bust(&candidate) {
            bust_count += count;
        }
        candidate.remove_card(card);
    }

    bust_count
}

/// Detailed outcome of a next-card bust evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BustReport {
    pub hand_value: HandValue,
    pub bust_count: usize,
    pub remaining_total: usize,
    pub probability: f64,
    /// Distinct card values that bust the hand when drawn.
    pub busting_cards: Vec<Card>,
}

pub fn bust_report(hand: &CardCount, remaining: &CardCount) -> BustReport {
    let mut candidate = hand.clone();
    let mut busting_cards = Vec::new();
    for (card, _) in remaining.iter() {
        candidate.add_card(card);
        if is_bust(&candidate) {
            busting_cards.push(card);
        }
        candidate.remove_card(card);
    }

    let bust_count: usize = busting_cards.iter().map(|card| remaining[*card]).sum();
    BustReport {
        hand_value: best_total(hand),
        bust_count,
        remaining_total: remaining.get_total(),
        probability: bust_count as f64 / remaining.get_total() as f64,
        busting_cards,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("there should be at least one remaining card")]
    EmptyRemainingCards,
}

/// A hand and a non-empty bag of remaining cards. Holding one of these is
/// proof that the bust probability is well defined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BustQuery {
    hand: CardCount,
    remaining: CardCount,
}

impl BustQuery {
    pub fn new(hand: CardCount, remaining: CardCount) -> Result<Self, QueryError> {
        if remaining.is_empty() {
            return Err(QueryError::EmptyRemainingCards);
        }
        Ok(BustQuery { hand, remaining })
    }

    pub fn hand(&self) -> &CardCount {
        &self.hand
    }

    pub fn remaining(&self) -> &CardCount {
        &self.remaining
    }

    pub fn busting_probability(&self) -> f64 {
        get_busting_probability(&self.hand, &self.remaining)
    }

    pub fn report(&self) -> BustReport {
        bust_report(&self.hand, &self.remaining)
    }
}
