use serde::Deserialize;
use serde::Serialize;

/// An action of the betting round.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Edge {
    /// Forced blind post; the poster keeps the turn.
    Post,
    Check,
    Bet,
    Call,
    Fold,
    Raise,
}

impl Edge {
    pub fn is_aggro(&self) -> bool {
        matches!(self, Edge::Bet | Edge::Raise)
    }
    pub fn is_forced(&self) -> bool {
        matches!(self, Edge::Post)
    }
}

/// u16 bijection
impl From<Edge> for u16 {
    fn from(edge: Edge) -> Self {
        match edge {
            Edge::Post => 0,
            Edge::Check => 1,
            Edge::Bet => 2,
            Edge::Call => 3,
            Edge::Fold => 4,
            Edge::Raise => 5,
        }
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Edge::Post => write!(f, "P"),
            Edge::Check => write!(f, "x"),
            Edge::Bet => write!(f, "b"),
            Edge::Call => write!(f, "c"),
            Edge::Fold => write!(f, "f"),
            Edge::Raise => write!(f, "r"),
        }
    }
}
