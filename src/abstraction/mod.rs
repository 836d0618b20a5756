//! Information-set abstraction.
//!
//! An [`Abstraction`] compresses what the acting player observes into the
//! parts of an [`InfoKey`]. Coarser abstractions merge more states into
//! one infoset and shrink the store; finer ones keep more distinctions.
use crate::*;

/// Maps a canonical observation to abstracted key parts.
///
/// Implementations must be deterministic: the same inputs always give
/// the same bucket and recall. Any state they keep must be fixed before
/// training starts.
pub trait Abstraction<G>
where
    G: Game,
{
    /// Compress a canonical hand and history.
    ///
    /// `choices` are the legal actions at the state and `mean` is the
    /// game's aggregate statistic ([`Game::mean`]).
    fn abstracted(
        &self,
        hand: &[G::C],
        history: &[G::A],
        choices: &[G::A],
        mean: Utility,
    ) -> (Bucket, Recall);

    /// Key of the infoset containing `state`, given its legal actions.
    fn encode(&self, game: &G, state: &G::S, choices: &[G::A]) -> InfoKey {
        let (hand, history) = game.canonical(state);
        let (bucket, recall) = self.abstracted(&hand, &history, choices, game.mean());
        InfoKey::new(state.turn(), bucket, recall, choices.len())
    }
    /// Key of the infoset containing a non-terminal `state`.
    fn info_key(&self, game: &G, state: &G::S) -> Result<InfoKey> {
        match game.choices(state) {
            choices if choices.is_empty() => Err(CfrError::NoChoices),
            choices => Ok(self.encode(game, state, &choices)),
        }
    }
}
