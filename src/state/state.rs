use crate::*;

/// A node of the extensive-form game as seen by the traversal.
///
/// States are opaque to the solver beyond these two accessors. Hands,
/// history and payoff live inside the implementation and are reached
/// through [`Game`].
pub trait State: Clone + std::fmt::Debug {
    /// The player whose perspective this state encodes.
    ///
    /// At decision nodes this is the acting player. At terminal nodes
    /// it is the player whose point of view the payoff is given from.
    fn turn(&self) -> Player;
    /// Whether the hand is over.
    fn is_terminal(&self) -> bool;
}

/// Sign applied to a child's value when backing it up to its parent.
///
/// Values are stored from the perspective of the state's player, so a
/// transition that hands the turn over flips the sign and one that
/// keeps it does not.
pub fn sign<S>(parent: &S, child: &S) -> Utility
where
    S: State,
{
    if parent.turn() == child.turn() { 1. } else { -1. }
}
