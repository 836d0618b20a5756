use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// How a traversal treats decision nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sampling {
    /// Enumerate every action of both players and update both.
    Chance,
    /// Enumerate and update the walker; sample the opponent's action.
    External { walker: Player },
}

impl Sampling {
    /// Whether every action of `player` is explored (and updated).
    pub fn explores(&self, player: Player) -> bool {
        match self {
            Self::Chance => true,
            Self::External { walker } => *walker == player,
        }
    }
}

/// Training entrypoint selected by the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(clap::ValueEnum))]
pub enum Scheme {
    /// Chance-sampled CFR, see [`Trainer::train_chance`].
    Chance,
    /// External-sampled CFR, see [`Trainer::train_external`].
    #[default]
    External,
}

impl std::fmt::Display for Scheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Chance => write!(f, "chance"),
            Self::External => write!(f, "external"),
        }
    }
}
