//! Game contracts consumed by the solver.
//!
//! The solver never builds a state itself. It asks the [`Game`] for
//! roots, transitions and payoffs, and reads the acting player and the
//! terminal flag through [`State`].

mod game;
mod state;

pub use game::*;
pub use state::*;
