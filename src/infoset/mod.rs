//! Learned state: keys, per-infoset regrets and the store that owns them.

mod disk;
mod infoset;
mod key;
mod store;

pub use infoset::*;
pub use key::*;
pub use store::*;
