use crate::*;
use rand::seq::SliceRandom;

/// The reference game under a fixed set of [`Rules`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Poker {
    rules: Rules,
}

impl Poker {
    pub fn new(rules: Rules) -> Result<Self> {
        rules.validate()?;
        Ok(Self { rules })
    }
    pub fn rules(&self) -> &Rules {
        &self.rules
    }
}

impl TryFrom<Rules> for Poker {
    type Error = CfrError;
    fn try_from(rules: Rules) -> Result<Self> {
        Self::new(rules)
    }
}

impl Game for Poker {
    type S = Spot;
    type A = Edge;
    type C = Card;

    fn sample<R>(&self, rng: &mut R) -> Spot
    where
        R: rand::Rng + ?Sized,
    {
        let h = self.rules.hand_size;
        let mut deck = self.deck();
        deck.shuffle(rng);
        self.deal([deck[..h].to_vec(), deck[h..2 * h].to_vec()])
    }
    fn deal(&self, hands: [Vec<Card>; N]) -> Spot {
        Spot::new(hands, self.rules.ante)
    }
    fn choices(&self, spot: &Spot) -> Vec<Edge> {
        spot.choices(&self.rules)
    }
    fn apply(&self, spot: &Spot, edge: Edge) -> Spot {
        spot.apply(edge, &self.rules)
    }
    fn payoff(&self, spot: &Spot) -> Result<Utility> {
        match spot.is_terminal() {
            false => Err(CfrError::NotTerminal),
            true => spot.payoff().ok_or(CfrError::NoPayoff),
        }
    }
    fn canonical(&self, spot: &Spot) -> (Vec<Card>, Vec<Edge>) {
        (isomorphism(spot.hand(spot.turn())), spot.history().to_vec())
    }
    fn deck(&self) -> Vec<Card> {
        (0..self.rules.ranks)
            .flat_map(|rank| (0..self.rules.suits).map(move |suit| Card::new(rank, suit)))
            .collect()
    }
    fn hand_size(&self) -> usize {
        self.rules.hand_size
    }
    /// Expected rank sum of a uniformly dealt hand.
    fn mean(&self) -> Utility {
        self.rules.hand_size as Utility * (self.rules.ranks as Utility - 1.) / 2.
    }
}

/// Relabel suits in order of first appearance, scanning high rank first.
///
/// Hands that differ only by a permutation of suits usually collapse
/// to the same representative. Ties between equal ranks are broken by
/// the dealt suit, so a few isomorphic hands stay distinct.
pub fn isomorphism(hand: &[Card]) -> Vec<Card> {
    let mut order = hand.to_vec();
    order.sort_by(|a, b| b.rank().cmp(&a.rank()).then(a.suit().cmp(&b.suit())));
    let mut relabel = [None; MAX_SUITS as usize];
    let mut next = 0u8;
    for card in order.iter() {
        relabel[card.suit() as usize].get_or_insert_with(|| {
            next += 1;
            next - 1
        });
    }
    let mut canonical = order
        .iter()
        .map(|c| Card::new(c.rank(), relabel[c.suit() as usize].unwrap_or(c.suit())))
        .collect::<Vec<_>>();
    canonical.sort();
    canonical
}
