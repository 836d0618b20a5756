//! Reference card game for the solver.
//!
//! A two-player draw-nothing poker variant on a reduced deck: each
//! player antes, receives a private hand and one betting round follows.
//! With one suit, three ranks and one card per hand it is Kuhn poker.

mod card;
mod edge;
mod encoder;
mod game;
mod rules;
mod spot;
mod strength;

pub use card::*;
pub use edge::*;
pub use encoder::*;
pub use game::*;
pub use rules::*;
pub use spot::*;
pub use strength::*;
