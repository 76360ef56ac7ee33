use std::ops::Index;

use crate::Card;

/// This provides a container to store the numbers of each card value (from
/// 1 to 10 inclusive). Both a hand and the remaining cards are stored this
/// way, since the order in which the cards arrived never matters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardCount {
    counts: [usize; 10],
    sum: usize,
    total: usize,
}

impl CardCount {
    pub fn empty() -> CardCount {
        Self::default()
    }

    /// Add a card of given card value.
    pub fn add_card(&mut self, card: Card) {
        self.counts[card.index()] += 1;
        self.sum += card.value() as usize;
        self.total += 1;
    }

    /// Remove a card of given card value.
    ///
    /// Panics if there is no card of that value left.
    pub fn remove_card(&mut self, card: Card) {
        let index = card.index();
        if self.counts[index] == 0 {
            panic!("No card of value {} to remove", card.value());
        }
        self.counts[index] -= 1;
        self.sum -= card.value() as usize;
        self.total -= 1;
    }

    /// Note that this method treats Ace as 1.
    pub fn get_sum(&self) -> usize {
        self.sum
    }

    pub fn get_total(&self) -> usize {
        self.total
    }

    pub fn number_of_aces(&self) -> usize {
        self[Card::ACE]
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Iterates the card values present, together with how many of each.
    pub fn iter(&self) -> impl Iterator<Item = (Card, usize)> + '_ {
        Card::all()
            .map(move |card| (card, self[card]))
            .filter(|(_, count)| *count > 0)
    }
}

impl Index<Card> for CardCount {
    type Output = usize;
    fn index(&self, card: Card) -> &Self::Output {
        &self.counts[card.index()]
    }
}

impl FromIterator<Card> for CardCount {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let mut card_count = CardCount::empty();
        for card in iter {
            card_count.add_card(card);
        }
        card_count
    }
}

impl<'a> FromIterator<&'a Card> for CardCount {
    fn from_iter<I: IntoIterator<Item = &'a Card>>(iter: I) -> Self {
        iter.into_iter().copied().collect()
    }
}
