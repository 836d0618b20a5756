use crate::*;
use itertools::Itertools;

/// Exact expected value of the average strategies.
///
/// Every ordered pair of disjoint hands is dealt once and the tree is
/// walked with both players following their average strategy. Nothing
/// is sampled and nothing is written: keys the store has never seen are
/// played uniformly, exactly as a freshly created infoset would be.
pub struct Evaluator<'a, G, A>
where
    G: Game,
    A: Abstraction<G>,
{
    game: &'a G,
    abstraction: &'a A,
    store: &'a InfosetStore,
}

impl<'a, G, A> Evaluator<'a, G, A>
where
    G: Game,
    A: Abstraction<G>,
{
    pub fn new(game: &'a G, abstraction: &'a A, store: &'a InfosetStore) -> Self {
        Self {
            game,
            abstraction,
            store,
        }
    }

    /// Expected utility for player 0, averaged uniformly over all deals.
    pub fn evaluate(&self) -> Result<Utility> {
        let deck = self.game.deck();
        let h = self.game.hand_size();
        let deals = partitions(deck.len(), h).ok_or_else(|| {
            CfrError::Rules(format!(
                "too many deals of two hands of {} from {} cards",
                h,
                deck.len()
            ))
        })?;
        if deals == 0 {
            return Err(CfrError::Rules(format!(
                "{} cards cannot deal two hands of {}",
                deck.len(),
                h
            )));
        }
        let mut total = 0.;
        for dealt in deck.iter().copied().combinations(2 * h) {
            for mut hero in dealt.iter().copied().combinations(h) {
                let mut villain = dealt
                    .iter()
                    .copied()
                    .filter(|card| !hero.contains(card))
                    .collect::<Vec<_>>();
                hero.sort();
                villain.sort();
                let ref root = self.game.deal([hero, villain]);
                total += self.expected(root)?;
            }
        }
        Ok(total / deals as Utility)
    }

    /// Value of `state` for its `turn()` under the average strategies.
    pub fn expected(&self, state: &G::S) -> Result<Utility> {
        if state.is_terminal() {
            return self.game.payoff(state);
        }
        let choices = self.game.choices(state);
        match choices.len() {
            0 => Err(CfrError::NoChoices),
            1 => {
                let ref child = self.game.apply(state, choices[0]);
                Ok(sign(state, child) * self.expected(child)?)
            }
            n => {
                let key = self.abstraction.encode(self.game, state, &choices);
                let policy = self.store.average(&key, n)?;
                let mut value = 0.;
                for (&action, &p) in choices.iter().zip(policy.iter()) {
                    let ref child = self.game.apply(state, action);
                    value += p * sign(state, child) * self.expected(child)?;
                }
                Ok(value)
            }
        }
    }
}

impl<'a, G, A> From<&'a Trainer<G, A>> for Evaluator<'a, G, A>
where
    G: Game,
    A: Abstraction<G>,
{
    fn from(trainer: &'a Trainer<G, A>) -> Self {
        Self::new(trainer.game(), trainer.abstraction(), trainer.store())
    }
}

impl<G, A> Trainer<G, A>
where
    G: Game,
    A: Abstraction<G>,
{
    /// Exact expected value for player 0 of the current average strategies.
    pub fn evaluate(&self) -> Result<Utility> {
        Evaluator::from(self).evaluate()
    }
}

/// Number of ordered deals of two disjoint `h`-card hands from `n` cards.
///
/// `None` when the count does not fit in a `usize`.
pub fn partitions(n: usize, h: usize) -> Option<usize> {
    if 2 * h > n {
        Some(0)
    } else {
        binomial(n, h)?.checked_mul(binomial(n - h, h)?)
    }
}

fn binomial(n: usize, k: usize) -> Option<usize> {
    (0..k.min(n - k)).try_fold(1usize, |c, i| c.checked_mul(n - i).map(|c| c / (i + 1)))
}
