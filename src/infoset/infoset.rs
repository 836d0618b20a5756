use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Accumulated regrets and strategy weights of one information set.
///
/// Both vectors are sized once, at creation, to the number of legal
/// actions and never change length afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Infoset {
    regrets: Vec<Utility>,
    weights: Vec<Probability>,
}

impl Infoset {
    /// Fresh infoset with zeroed regrets and weights.
    pub fn new(n: usize) -> Self {
        Self {
            regrets: vec![0.; n],
            weights: vec![0.; n],
        }
    }
    /// Number of actions this infoset was sized for.
    pub fn len(&self) -> usize {
        self.regrets.len()
    }
    pub fn is_empty(&self) -> bool {
        self.regrets.is_empty()
    }
    /// Cumulative counterfactual regret per action.
    pub fn regrets(&self) -> &[Utility] {
        &self.regrets
    }
    /// Reach-weighted strategy sum per action.
    pub fn weights(&self) -> &[Probability] {
        &self.weights
    }

    /// Current strategy via regret matching.
    pub fn current(&self) -> Vec<Probability> {
        normalize(&self.regrets)
    }
    /// Long-run average strategy (the equilibrium approximation).
    pub fn average(&self) -> Vec<Probability> {
        normalize(&self.weights)
    }

    /// Add `reach * strategy` to the strategy sum.
    pub fn accumulate(&mut self, reach: Probability, strategy: &[Probability]) {
        debug_assert!(strategy.len() == self.weights.len());
        self.weights
            .iter_mut()
            .zip(strategy)
            .for_each(|(w, p)| *w += reach * p);
    }
    /// Add `reach * (value[a] - node)` to every action's regret.
    pub fn regret(&mut self, reach: Probability, values: &[Utility], node: Utility) {
        debug_assert!(values.len() == self.regrets.len());
        self.regrets
            .iter_mut()
            .zip(values)
            .inspect(|(_, v)| debug_assert!(!v.is_nan()))
            .for_each(|(r, v)| *r += reach * (v - node));
    }
}

impl From<(Vec<Utility>, Vec<Probability>)> for Infoset {
    fn from((regrets, weights): (Vec<Utility>, Vec<Probability>)) -> Self {
        debug_assert!(regrets.len() == weights.len());
        Self { regrets, weights }
    }
}

/// Regret matching over an arbitrary accumulator.
///
/// Positive parts are normalized to sum to one. When no entry is
/// positive the uniform distribution is returned instead.
pub fn normalize(values: &[f64]) -> Vec<Probability> {
    let denom = values.iter().map(|v| v.max(0.)).sum::<f64>();
    if denom > 0. {
        values.iter().map(|v| v.max(0.) / denom).collect()
    } else {
        vec![1. / values.len() as Probability; values.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn distribution(p: &[Probability]) {
        assert!(p.iter().all(|x| *x >= 0.), "negative entry in {:?}", p);
        let total = p.iter().sum::<Probability>();
        assert!((total - 1.).abs() < 1e-12, "sums to {} in {:?}", total, p);
    }

    #[test]
    fn zero_regrets_are_uniform() {
        let p = normalize(&[0., 0., 0.]);
        distribution(&p);
        assert!(p.iter().all(|x| (x - 1. / 3.).abs() < 1e-12));
    }

    #[test]
    fn negative_regrets_are_uniform() {
        let p = normalize(&[-1., -5., -0.25, -9.]);
        distribution(&p);
        assert!(p.iter().all(|x| (x - 0.25).abs() < 1e-12));
    }

    #[test]
    fn mixed_regrets_ignore_negatives() {
        let p = normalize(&[-3., 1., 3.]);
        distribution(&p);
        assert_eq!(p[0], 0.);
        assert!((p[1] - 0.25).abs() < 1e-12);
        assert!((p[2] - 0.75).abs() < 1e-12);
    }

    #[test]
    fn regret_update_is_counterfactual() {
        let mut infoset = Infoset::new(2);
        infoset.regret(0.5, &[2., -2.], 1.);
        assert_eq!(infoset.regrets(), &[0.5, -1.5]);
        assert_eq!(infoset.current(), vec![1., 0.]);
    }

    #[test]
    fn average_tracks_reach_weighted_sum() {
        let mut infoset = Infoset::new(2);
        infoset.accumulate(1.0, &[0.5, 0.5]);
        infoset.accumulate(0.5, &[1.0, 0.0]);
        assert_eq!(infoset.weights(), &[1.0, 0.5]);
        let avg = infoset.average();
        distribution(&avg);
        assert!((avg[0] - 2. / 3.).abs() < 1e-12);
    }

    #[test]
    fn untouched_average_is_uniform() {
        let infoset = Infoset::new(4);
        assert_eq!(infoset.average(), vec![0.25; 4]);
    }
}
