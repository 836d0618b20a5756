use crate::*;

/// A node of the betting round.
///
/// `turn` is the player to act, or once the hand is over, the player
/// whose point of view `payoff` is given from.
#[derive(Debug, Clone, PartialEq)]
pub struct Spot {
    turn: Player,
    hands: [Vec<Card>; N],
    history: Vec<Edge>,
    stakes: [Chips; N],
    raises: usize,
    terminal: bool,
    payoff: Option<Utility>,
}

impl Spot {
    /// Root of the betting round: both antes in, player 0 to act.
    pub fn new(mut hands: [Vec<Card>; N], ante: Chips) -> Self {
        hands.iter_mut().for_each(|hand| hand.sort());
        Self {
            turn: 0,
            hands,
            history: Vec::new(),
            stakes: [ante; N],
            raises: 0,
            terminal: false,
            payoff: None,
        }
    }

    pub fn hand(&self, player: Player) -> &[Card] {
        &self.hands[player]
    }
    pub fn history(&self) -> &[Edge] {
        &self.history
    }
    pub fn stakes(&self) -> &[Chips; N] {
        &self.stakes
    }
    pub fn payoff(&self) -> Option<Utility> {
        self.payoff
    }

    /// Last voluntary action, skipping forced posts.
    fn last(&self) -> Option<Edge> {
        self.history.iter().rev().copied().find(|e| !e.is_forced())
    }
    fn opponent(&self) -> Player {
        (self.turn + 1) % N
    }

    /// Legal actions under `rules`, in a fixed order.
    pub fn choices(&self, rules: &Rules) -> Vec<Edge> {
        if self.terminal {
            return vec![];
        }
        if rules.post && self.history.is_empty() {
            return vec![Edge::Post];
        }
        match self.last() {
            None | Some(Edge::Check) => vec![Edge::Check, Edge::Bet],
            Some(e) if e.is_aggro() && self.raises < rules.raises => {
                vec![Edge::Fold, Edge::Call, Edge::Raise]
            }
            Some(e) if e.is_aggro() => vec![Edge::Fold, Edge::Call],
            Some(_) => vec![],
        }
    }

    /// Successor after the acting player takes `edge`.
    pub fn apply(&self, edge: Edge, rules: &Rules) -> Self {
        debug_assert!(self.choices(rules).contains(&edge));
        let actor = self.turn;
        let other = self.opponent();
        let mut next = self.clone();
        next.history.push(edge);
        match edge {
            Edge::Post => return next,
            Edge::Check if self.last() == Some(Edge::Check) => next.terminal = true,
            Edge::Check => {}
            Edge::Bet => next.stakes[actor] += rules.bet,
            Edge::Raise => {
                next.stakes[actor] = self.stakes[other] + rules.bet;
                next.raises += 1;
            }
            Edge::Call => {
                next.stakes[actor] = self.stakes[other];
                next.terminal = true;
            }
            Edge::Fold => {
                next.turn = other;
                next.terminal = true;
                next.payoff = Some(self.stakes[actor] as Utility);
                return next;
            }
        }
        next.turn = other;
        if next.terminal {
            next.payoff = Some(next.showdown());
        }
        next
    }

    /// Chips won by `turn` when hands are compared.
    fn showdown(&self) -> Utility {
        let hero = Strength::from(self.hand(self.turn));
        let villain = Strength::from(self.hand(self.opponent()));
        match hero.cmp(&villain) {
            std::cmp::Ordering::Greater => self.stakes[self.opponent()] as Utility,
            std::cmp::Ordering::Less => -(self.stakes[self.turn] as Utility),
            std::cmp::Ordering::Equal => 0.,
        }
    }
}

impl State for Spot {
    fn turn(&self) -> Player {
        self.turn
    }
    fn is_terminal(&self) -> bool {
        self.terminal
    }
}

impl std::fmt::Display for Spot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for hand in self.hands.iter() {
            for card in hand {
                write!(f, "{}", card)?;
            }
            write!(f, " ")?;
        }
        for edge in self.history.iter() {
            write!(f, "{}", edge)?;
        }
        match self.payoff {
            Some(payoff) => write!(f, " => P{} {:+}", self.turn, payoff),
            None => write!(f, " @ P{}", self.turn),
        }
    }
}
