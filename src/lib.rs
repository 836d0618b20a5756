//! Monte Carlo Counterfactual Regret Minimization over abstracted information sets.
//!
//! The solver is game-agnostic. A game implements [`Game`] and [`State`],
//! an abstraction implements [`Abstraction`], and the [`Trainer`] learns
//! regrets and average strategies in an [`InfosetStore`].
//!
//! # Module Structure
//!
//! - `state`: Game and state contracts consumed by the solver
//! - `abstraction`: Information-set key construction
//! - `infoset`: Keys, regret matching, the store and its snapshot format
//! - `training`: Chance/external sampled CFR, exact evaluation, exploitability
//! - `poker`: Reference card game and abstraction family (Kuhn-sized when reduced)
//! - `error`: Contract violations and persistence failures

#[cfg(feature = "server")]
mod args;
mod abstraction;
mod error;
mod infoset;
mod poker;
mod state;
mod training;

#[cfg(feature = "server")]
pub use args::*;
pub use abstraction::*;
pub use error::*;
pub use infoset::*;
pub use poker::*;
pub use state::*;
pub use training::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Expected values, regrets, and payoffs.
pub type Utility = f64;
/// Strategy weights and reach probabilities.
pub type Probability = f64;
/// Seat index of the acting player (0 or 1).
pub type Player = usize;
/// Antes and bets of the reference game.
pub type Chips = i16;

// ============================================================================
// GAME TREE PARAMETERS
// ============================================================================
/// Number of players at the table.
pub const N: usize = 2;
/// Default number of suits in the reference deck.
pub const SUITS: u8 = 3;
/// Default number of ranks in the reference deck.
pub const RANKS: u8 = 3;
/// Default number of cards dealt to each player.
pub const HAND_SIZE: usize = 3;
/// Forced contribution of each player before any action.
pub const ANTE: Chips = 1;
/// Size of a bet or raise increment.
pub const BET: Chips = 1;
/// Raises permitted on top of the opening bet (0 = Kuhn betting).
pub const MAX_RAISES: usize = 0;
/// Largest deck the reference game accepts.
pub const MAX_SUITS: u8 = 4;
pub const MAX_RANKS: u8 = 13;

// ============================================================================
// ABSTRACTION PARAMETERS
// ============================================================================
/// Number of trailing actions kept by the `Recent` abstraction.
pub const RECALL_DEPTH: usize = 2;

// ============================================================================
// TRAINING PARAMETERS
// ============================================================================
/// Total training iterations for the host trainer.
pub const TRAIN_ITERATIONS: usize = 100_000;
/// Iterations between two exact evaluations.
pub const TRAIN_INTERVALS: usize = 1_000;
/// Iterations per best-response pass of the exploitability estimate.
pub const EXPLOIT_ITERATIONS: usize = 20_000;
/// Seed of the injected random source.
pub const SEED: u64 = 0x5EED;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
