use crate::*;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeSet;

/// Abstracted private information: an unordered set of tokens.
pub type Bucket = BTreeSet<u16>;
/// Abstracted public history: an ordered token sequence.
pub type Recall = Vec<u16>;

/// Identifier of an information set.
///
/// Composed of the acting player, the abstracted hand, the abstracted
/// history and the number of legal actions. Two states that an
/// abstraction maps to the same parts share every regret and strategy
/// update.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct InfoKey {
    player: Player,
    bucket: Bucket,
    recall: Recall,
    choices: usize,
}

impl InfoKey {
    pub fn new(player: Player, bucket: Bucket, recall: Recall, choices: usize) -> Self {
        Self {
            player,
            bucket,
            recall,
            choices,
        }
    }
    pub fn player(&self) -> Player {
        self.player
    }
    pub fn bucket(&self) -> &Bucket {
        &self.bucket
    }
    pub fn recall(&self) -> &Recall {
        &self.recall
    }
    /// Number of legal actions at every state in this set.
    pub fn choices(&self) -> usize {
        self.choices
    }
}

impl std::fmt::Display for InfoKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "P{} {:?} {:?} /{}",
            self.player, self.bucket, self.recall, self.choices
        )
    }
}
