use thiserror::Error;

/// Failures surfaced by the solver.
///
/// Every variant is fatal: the solver never retries and never
/// substitutes a default. Contract violations of a [`Game`](crate::Game)
/// or of the store's sizing rule are reported as soon as they are seen.
#[derive(Debug, Error)]
pub enum CfrError {
    #[error("no legal actions at a non-terminal state")]
    NoChoices,

    #[error("terminal state carries no payoff")]
    NoPayoff,

    #[error("payoff requested at a non-terminal state")]
    NotTerminal,

    #[error("infoset {key} was sized for {expected} actions, reached with {found}")]
    Dimension {
        key: String,
        expected: usize,
        found: usize,
    },

    #[error("action sampling failed: {0}")]
    Sampling(#[from] rand::distr::weighted::Error),

    #[error("invalid rules: {0}")]
    Rules(String),

    #[error("corrupt snapshot: {0}")]
    Corrupt(String),

    #[error("snapshot i/o: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CfrError>;
