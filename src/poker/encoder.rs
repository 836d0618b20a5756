use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Abstraction family over the reference game.
///
/// | Variant    | Bucket                          | Recall                  |
/// |------------|---------------------------------|-------------------------|
/// | `Identity` | canonical cards                 | full history            |
/// | `Ranks`    | ranks with multiplicity         | full history            |
/// | `Strength` | rank sum below / at / above mean | full history           |
/// | `Recent`   | canonical cards                 | last [`RECALL_DEPTH`] actions |
///
/// On Kuhn poker every variant is lossless.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(clap::ValueEnum))]
pub enum Encoder {
    #[default]
    Identity,
    Ranks,
    Strength,
    Recent,
}

impl Abstraction<Poker> for Encoder {
    fn abstracted(
        &self,
        hand: &[Card],
        history: &[Edge],
        _: &[Edge],
        mean: Utility,
    ) -> (Bucket, Recall) {
        match self {
            Self::Identity => (cards(hand), recall(history)),
            Self::Ranks => (ranks(hand), recall(history)),
            Self::Strength => (strength(hand, mean), recall(history)),
            Self::Recent => {
                let tail = history.len().saturating_sub(RECALL_DEPTH);
                (cards(hand), recall(&history[tail..]))
            }
        }
    }
}

fn cards(hand: &[Card]) -> Bucket {
    hand.iter().copied().map(u16::from).collect()
}

/// Suits dropped; the k-th copy of a rank gets its own token.
fn ranks(hand: &[Card]) -> Bucket {
    let mut seen = [0u16; MAX_RANKS as usize];
    hand.iter()
        .map(|card| {
            let copy = seen[card.rank() as usize];
            seen[card.rank() as usize] += 1;
            card.rank() as u16 * MAX_SUITS as u16 + copy
        })
        .collect()
}

fn strength(hand: &[Card], mean: Utility) -> Bucket {
    let score = hand.iter().map(|c| c.rank() as Utility).sum::<Utility>();
    let bucket = match score.partial_cmp(&mean) {
        Some(std::cmp::Ordering::Less) => 0,
        Some(std::cmp::Ordering::Greater) => 2,
        _ => 1,
    };
    Bucket::from([bucket])
}

fn recall(history: &[Edge]) -> Recall {
    history.iter().copied().map(u16::from).collect()
}

impl std::fmt::Display for Encoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Identity => write!(f, "identity"),
            Self::Ranks => write!(f, "ranks"),
            Self::Strength => write!(f, "strength"),
            Self::Recent => write!(f, "recent"),
        }
    }
}
