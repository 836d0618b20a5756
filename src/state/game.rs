use crate::*;

/// Two-player zero-sum imperfect-information game.
///
/// # Required Methods
///
/// - `sample(rng)`: Random initial state (deal drawn from `rng`)
/// - `deal(hands)`: Initial state for fixed hands
/// - `choices(state)`: Ordered legal actions, non-empty unless terminal
/// - `apply(state, action)`: Deterministic transition
/// - `payoff(state)`: Utility of a terminal state for its `turn()`
/// - `canonical(state)`: Suit-canonical hand and history of the acting player
///
/// # Evaluation Support
///
/// `deck()` and `hand_size()` let the evaluator enumerate every deal.
/// `mean()` is the aggregate statistic handed to abstractions.
pub trait Game {
    /// Game state.
    type S: State;
    /// Action.
    type A: Copy + Eq + std::fmt::Debug;
    /// Card.
    type C: Copy + Ord + std::fmt::Debug;

    fn sample<R>(&self, rng: &mut R) -> Self::S
    where
        R: rand::Rng + ?Sized;
    fn deal(&self, hands: [Vec<Self::C>; N]) -> Self::S;
    fn choices(&self, state: &Self::S) -> Vec<Self::A>;
    fn apply(&self, state: &Self::S, action: Self::A) -> Self::S;
    fn payoff(&self, state: &Self::S) -> Result<Utility>;
    fn canonical(&self, state: &Self::S) -> (Vec<Self::C>, Vec<Self::A>);

    fn deck(&self) -> Vec<Self::C>;
    fn hand_size(&self) -> usize;
    fn mean(&self) -> Utility;
}
