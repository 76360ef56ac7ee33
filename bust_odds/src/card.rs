use serde::Serialize;
use thiserror::Error;

/// A card as seen by the valuation rules. 1 stands for A, and 10 stands for
/// 10, J, Q and K alike. Suits are not tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Card(u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid card value {0}, it must be in [1, 10]")]
pub struct InvalidCard(pub i64);

impl Card {
    pub const ACE: Card = Card(1);
    pub const TEN: Card = Card(10);

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn is_ace(&self) -> bool {
        self.0 == 1
    }

    /// Iterates all card values from A to 10.
    pub fn all() -> impl Iterator<Item = Card> {
        (1..=10).map(Card)
    }

    pub(crate) fn index(&self) -> usize {
        (self.0 - 1) as usize
    }
}

impl TryFrom<u8> for Card {
    type Error = InvalidCard;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1..=10 => Ok(Card(value)),
            _ => Err(InvalidCard(value as i64)),
        }
    }
}

impl TryFrom<i64> for Card {
    type Error = InvalidCard;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map_err(|_| InvalidCard(value))
            .and_then(Card::try_from)
    }
}

impl From<Card> for u8 {
    fn from(card: Card) -> Self {
        card.0
    }
}
