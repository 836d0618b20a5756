use crate::*;
use rand::SeedableRng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;
use rand::rngs::SmallRng;

/// Monte Carlo CFR over a [`Game`] and an [`Abstraction`].
///
/// The trainer owns the game, the abstraction, the learned
/// [`InfosetStore`] and the random source. Every random draw (deals and
/// opponent actions) comes from the single seeded `rng`, so two trainers
/// built with the same seed and driven by the same call sequence end in
/// bit-identical stores.
///
/// # Training
///
/// - [`Trainer::train_chance`]: one sampled deal, both players updated
/// - [`Trainer::train_external`]: one walker at a time, opponent sampled
///
/// # Evaluation
///
/// - [`Trainer::evaluate`]: exact expected value of the average strategies
/// - [`Trainer::exploitability`]: best-response-by-training proxy
pub struct Trainer<G, A>
where
    G: Game,
    A: Abstraction<G>,
{
    game: G,
    abstraction: A,
    store: InfosetStore,
    rng: SmallRng,
    epochs: usize,
}

impl<G, A> Trainer<G, A>
where
    G: Game,
    A: Abstraction<G>,
{
    pub fn new(game: G, abstraction: A, seed: u64) -> Self {
        Self {
            game,
            abstraction,
            store: InfosetStore::default(),
            rng: SmallRng::seed_from_u64(seed),
            epochs: 0,
        }
    }

    pub fn game(&self) -> &G {
        &self.game
    }
    pub fn abstraction(&self) -> &A {
        &self.abstraction
    }
    pub fn store(&self) -> &InfosetStore {
        &self.store
    }
    /// Swap in a different store, e.g. one read back from disk.
    pub fn replace(&mut self, store: InfosetStore) -> InfosetStore {
        std::mem::replace(&mut self.store, store)
    }
    /// Training iterations completed so far.
    pub fn epochs(&self) -> usize {
        self.epochs
    }
    /// Number of infosets learned for each player.
    pub fn counts(&self) -> (usize, usize) {
        self.store.counts()
    }
    /// Key of the infoset containing a non-terminal `state`.
    pub fn info_key(&self, state: &G::S) -> Result<InfoKey> {
        self.abstraction.info_key(&self.game, state)
    }

    /// Train with the given scheme; see the scheme-specific entrypoints.
    pub fn train(&mut self, scheme: Scheme, n: usize) -> Result<Utility> {
        match scheme {
            Scheme::Chance => self.train_chance(n),
            Scheme::External => self.train_external(n),
        }
    }

    /// `n` chance-sampled iterations.
    ///
    /// Returns the mean root value for player 0 across iterations.
    pub fn train_chance(&mut self, n: usize) -> Result<Utility> {
        let mut total = 0.;
        for _ in 0..n {
            total += self.iterate(Sampling::Chance)?;
        }
        self.epochs += n;
        log::debug!("{:<32}{:<32}", "chance sampled iterations", n);
        Ok(mean(total, n))
    }

    /// `n` external-sampled iterations, each one traversal per walker.
    ///
    /// Returns the mean root value across all `N * n` traversals. A
    /// root value is from the walker's seat, so this mixes perspectives
    /// and is only a progress signal.
    pub fn train_external(&mut self, n: usize) -> Result<Utility> {
        let mut total = 0.;
        for _ in 0..n {
            for walker in 0..N {
                total += self.iterate(Sampling::External { walker })?;
            }
        }
        self.epochs += n;
        log::debug!("{:<32}{:<32}", "external sampled iterations", n);
        Ok(mean(total, N * n))
    }

    /// `n` external-sampled traversals updating `walker` only.
    pub(crate) fn respond(&mut self, walker: Player, n: usize) -> Result<()> {
        for _ in 0..n {
            self.iterate(Sampling::External { walker })?;
        }
        Ok(())
    }

    /// One traversal from a freshly sampled deal.
    fn iterate(&mut self, sampling: Sampling) -> Result<Utility> {
        let ref root = self.game.sample(&mut self.rng);
        self.traverse(root, [1.; N], sampling)
    }

    /// Value of `state` for its `turn()`, updating every explored infoset.
    ///
    /// `reach[p]` is player p's own contribution to the probability of
    /// reaching `state`. Explored players accumulate their strategy
    /// weighted by their own reach and their regrets weighted by the
    /// opponent's.
    fn traverse(
        &mut self,
        state: &G::S,
        reach: [Probability; N],
        sampling: Sampling,
    ) -> Result<Utility> {
        if state.is_terminal() {
            return self.game.payoff(state);
        }
        let choices = self.game.choices(state);
        match choices.len() {
            0 => Err(CfrError::NoChoices),
            1 => {
                let ref child = self.game.apply(state, choices[0]);
                Ok(sign(state, child) * self.traverse(child, reach, sampling)?)
            }
            n => {
                let player = state.turn();
                let key = self.abstraction.encode(&self.game, state, &choices);
                let slot = self.store.witness(key, n)?;
                let strategy = self.store.at(slot).current();
                if sampling.explores(player) {
                    self.store.at(slot).accumulate(reach[player], &strategy);
                    let mut values = Vec::with_capacity(n);
                    for (&action, &p) in choices.iter().zip(strategy.iter()) {
                        let ref child = self.game.apply(state, action);
                        let mut reach = reach;
                        reach[player] *= p;
                        values.push(sign(state, child) * self.traverse(child, reach, sampling)?);
                    }
                    let node = values
                        .iter()
                        .zip(strategy.iter())
                        .map(|(v, p)| v * p)
                        .sum::<Utility>();
                    let counterfactual = reach
                        .iter()
                        .enumerate()
                        .filter(|(p, _)| *p != player)
                        .map(|(_, r)| r)
                        .product::<Probability>();
                    self.store.at(slot).regret(counterfactual, &values, node);
                    Ok(node)
                } else {
                    let index = WeightedIndex::new(&strategy)?.sample(&mut self.rng);
                    let ref child = self.game.apply(state, choices[index]);
                    let mut reach = reach;
                    reach[player] *= strategy[index];
                    Ok(sign(state, child) * self.traverse(child, reach, sampling)?)
                }
            }
        }
    }
}

fn mean(total: Utility, n: usize) -> Utility {
    if n == 0 { 0. } else { total / n as Utility }
}

impl<G, A> std::fmt::Display for Trainer<G, A>
where
    G: Game,
    A: Abstraction<G>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (p1, p2) = self.counts();
        writeln!(f, "{:<32}{:<32}", "epochs", self.epochs)?;
        writeln!(f, "{:<32}{:<32}", "infosets (player 1)", p1)?;
        writeln!(f, "{:<32}{:<32}", "infosets (player 2)", p2)?;
        write!(f, "{}", self.store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kuhn(seed: u64) -> Trainer<Poker, Encoder> {
        Trainer::new(Poker::new(Rules::kuhn()).unwrap(), Encoder::Identity, seed)
    }

    #[test]
    fn zero_iterations_is_a_noop() {
        let mut trainer = kuhn(1);
        assert_eq!(trainer.train_chance(0).unwrap(), 0.);
        assert_eq!(trainer.train_external(0).unwrap(), 0.);
        assert!(trainer.store().is_empty());
        assert_eq!(trainer.epochs(), 0);
    }

    #[test]
    fn same_seed_same_store() {
        let mut a = kuhn(42);
        let mut b = kuhn(42);
        let ua = a.train_chance(300).unwrap();
        let ub = b.train_chance(300).unwrap();
        assert_eq!(ua.to_bits(), ub.to_bits());
        let ua = a.train_external(300).unwrap();
        let ub = b.train_external(300).unwrap();
        assert_eq!(ua.to_bits(), ub.to_bits());
        assert_eq!(a.store(), b.store());
    }

    #[test]
    fn kuhn_has_twelve_infosets() {
        let mut trainer = kuhn(7);
        trainer.train_chance(2_000).unwrap();
        assert_eq!(trainer.counts(), (6, 6));
    }

    #[test]
    fn external_sampling_converges_on_kuhn() {
        let mut trainer = kuhn(3);
        trainer.train_external(100_000).unwrap();
        let value = trainer.evaluate().unwrap();
        assert!(
            (value + 1. / 18.).abs() < 0.05,
            "kuhn value {} too far from -1/18",
            value
        );
    }

    #[test]
    fn chance_sampling_converges_on_kuhn() {
        let mut trainer = kuhn(5);
        trainer.train_chance(50_000).unwrap();
        let value = trainer.evaluate().unwrap();
        assert!(
            (value + 1. / 18.).abs() < 0.05,
            "kuhn value {} too far from -1/18",
            value
        );
    }

    #[test]
    fn forced_actions_keep_the_sign() {
        let plain = Poker::new(Rules::kuhn()).unwrap();
        let posted = Poker::new(Rules {
            post: true,
            ..Rules::kuhn()
        })
        .unwrap();
        let mut a = Trainer::new(plain, Encoder::Identity, 11);
        let mut b = Trainer::new(posted, Encoder::Identity, 11);
        assert_eq!(
            a.train_external(500).unwrap().to_bits(),
            b.train_external(500).unwrap().to_bits()
        );
        assert_eq!(a.counts(), b.counts());
        assert_eq!(
            a.evaluate().unwrap().to_bits(),
            b.evaluate().unwrap().to_bits()
        );
    }

    #[test]
    fn replace_swaps_the_store() {
        let mut trainer = kuhn(9);
        trainer.train_chance(100).unwrap();
        let learned = trainer.replace(InfosetStore::default());
        assert!(trainer.store().is_empty());
        trainer.replace(learned.clone());
        assert_eq!(trainer.store(), &learned);
    }

    /// A game that breaks its own contract at the root.
    #[derive(Debug, Clone, Copy)]
    enum Broken {
        Mute,
        Silent,
    }

    #[derive(Debug, Clone)]
    struct Stub(Broken);

    impl State for Stub {
        fn turn(&self) -> Player {
            0
        }
        fn is_terminal(&self) -> bool {
            matches!(self.0, Broken::Silent)
        }
    }

    impl Game for Broken {
        type S = Stub;
        type A = u8;
        type C = u8;
        fn sample<R>(&self, _: &mut R) -> Stub
        where
            R: rand::Rng + ?Sized,
        {
            Stub(*self)
        }
        fn deal(&self, _: [Vec<u8>; N]) -> Stub {
            Stub(*self)
        }
        fn choices(&self, _: &Stub) -> Vec<u8> {
            vec![]
        }
        fn apply(&self, state: &Stub, _: u8) -> Stub {
            state.clone()
        }
        fn payoff(&self, state: &Stub) -> Result<Utility> {
            match state.is_terminal() {
                true => Err(CfrError::NoPayoff),
                false => Err(CfrError::NotTerminal),
            }
        }
        fn canonical(&self, _: &Stub) -> (Vec<u8>, Vec<u8>) {
            (vec![], vec![])
        }
        fn deck(&self) -> Vec<u8> {
            vec![0, 1]
        }
        fn hand_size(&self) -> usize {
            1
        }
        fn mean(&self) -> Utility {
            0.
        }
    }

    struct Flat;
    impl Abstraction<Broken> for Flat {
        fn abstracted(&self, _: &[u8], _: &[u8], _: &[u8], _: Utility) -> (Bucket, Recall) {
            (Bucket::new(), Recall::new())
        }
    }

    #[test]
    fn contract_violations_are_reported() {
        let mut mute = Trainer::new(Broken::Mute, Flat, 0);
        assert!(matches!(mute.train_chance(1), Err(CfrError::NoChoices)));
        assert!(matches!(mute.evaluate(), Err(CfrError::NoChoices)));
        assert!(matches!(
            mute.info_key(&Stub(Broken::Mute)),
            Err(CfrError::NoChoices)
        ));
        let mut silent = Trainer::new(Broken::Silent, Flat, 0);
        assert!(matches!(silent.train_external(1), Err(CfrError::NoPayoff)));
        assert!(matches!(silent.evaluate(), Err(CfrError::NoPayoff)));
    }
}
