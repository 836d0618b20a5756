use crate::*;

/// A card of the reduced deck.
///
/// Ordered by rank, then suit.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card {
    rank: u8,
    suit: u8,
}

impl Card {
    pub fn new(rank: u8, suit: u8) -> Self {
        debug_assert!(rank < MAX_RANKS);
        debug_assert!(suit < MAX_SUITS);
        Self { rank, suit }
    }
    pub fn rank(&self) -> u8 {
        self.rank
    }
    pub fn suit(&self) -> u8 {
        self.suit
    }
}

/// u16 id
/// each card is mapped to its location in a full sorted deck
/// rank * 4 + suit
impl From<Card> for u16 {
    fn from(c: Card) -> u16 {
        c.rank as u16 * MAX_SUITS as u16 + c.suit as u16
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rank = b"23456789TJQKA"[self.rank as usize] as char;
        let suit = b"cdhs"[self.suit as usize] as char;
        write!(f, "{}{}", rank, suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn u16_ids_are_distinct_and_ordered() {
        let ids = (0..MAX_RANKS)
            .flat_map(|rank| (0..MAX_SUITS).map(move |suit| Card::new(rank, suit)))
            .map(u16::from)
            .collect::<Vec<_>>();
        assert_eq!(ids.len(), (MAX_RANKS as usize) * (MAX_SUITS as usize));
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn ordered_by_rank_first() {
        assert!(Card::new(1, 0) > Card::new(0, 3));
        assert!(Card::new(1, 2) > Card::new(1, 1));
        assert_eq!(Card::new(12, 3).to_string(), "As");
    }
}
