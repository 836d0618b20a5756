use crate::*;

/// Showdown ranking of a hand.
///
/// Compared field by field: the largest group of equal ranks, then
/// whether every card shares one suit, then the ranks high to low.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Strength {
    sets: usize,
    flush: bool,
    kickers: Vec<u8>,
}

impl From<&[Card]> for Strength {
    fn from(cards: &[Card]) -> Self {
        let mut kickers = cards.iter().map(Card::rank).collect::<Vec<_>>();
        kickers.sort_unstable_by(|a, b| b.cmp(a));
        let sets = kickers
            .chunk_by(|a, b| a == b)
            .map(|run| run.len())
            .max()
            .unwrap_or(0);
        let flush = cards.windows(2).all(|w| w[0].suit() == w[1].suit());
        Self {
            sets,
            flush,
            kickers,
        }
    }
}
