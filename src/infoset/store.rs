use crate::*;
use serde::Serialize;
use std::collections::BTreeMap;

/// Arena of information sets, created lazily by key.
///
/// The index maps each [`InfoKey`] to a slot in the arena, so the
/// traversal can hold a plain `usize` across recursive calls and come
/// back to the same infoset without a second key lookup.
///
/// The store is the entire learned state of a [`Trainer`]. Cloning it
/// is a full snapshot.
#[derive(Debug, Clone, Default)]
pub struct InfosetStore {
    index: BTreeMap<InfoKey, usize>,
    arena: Vec<Infoset>,
}

/// One row of a strategy dump.
#[derive(Debug, Clone, Serialize)]
pub struct Strategy<'a> {
    pub key: &'a InfoKey,
    pub average: Vec<Probability>,
}

impl InfosetStore {
    /// Get-or-create the infoset for `key`, sized to `n` actions.
    ///
    /// `n` must agree with the action count carried by the key, and a
    /// known key is never resized. Either mismatch is a contract
    /// violation of the game or abstraction and is reported.
    pub fn witness(&mut self, key: InfoKey, n: usize) -> Result<usize> {
        if key.choices() != n {
            return Err(dimension(&key, key.choices(), n));
        }
        match self.index.get(&key) {
            Some(&slot) => match self.arena[slot].len() {
                len if len == n => Ok(slot),
                len => Err(dimension(&key, len, n)),
            },
            None => {
                let slot = self.arena.len();
                self.arena.push(Infoset::new(n));
                self.index.insert(key, slot);
                Ok(slot)
            }
        }
    }
    /// Mutable access to a slot returned by [`InfosetStore::witness`].
    pub fn at(&mut self, slot: usize) -> &mut Infoset {
        &mut self.arena[slot]
    }
    /// Read-only lookup.
    pub fn get(&self, key: &InfoKey) -> Option<&Infoset> {
        self.index.get(key).map(|&slot| &self.arena[slot])
    }
    /// Average strategy at `key` without creating it.
    ///
    /// Unseen keys play uniformly, which is what a freshly created
    /// infoset would report.
    pub fn average(&self, key: &InfoKey, n: usize) -> Result<Vec<Probability>> {
        if key.choices() != n {
            return Err(dimension(key, key.choices(), n));
        }
        match self.get(key) {
            None => Ok(normalize(&vec![0.; n])),
            Some(infoset) if infoset.len() == n => Ok(infoset.average()),
            Some(infoset) => Err(dimension(key, infoset.len(), n)),
        }
    }
    /// Insert a fully formed infoset, as read back from a snapshot.
    pub(crate) fn restore(&mut self, key: InfoKey, infoset: Infoset) -> Result<()> {
        if key.choices() != infoset.len() {
            return Err(dimension(&key, key.choices(), infoset.len()));
        }
        if self.index.contains_key(&key) {
            return Err(CfrError::Corrupt(format!("duplicate key {}", key)));
        }
        self.index.insert(key, self.arena.len());
        self.arena.push(infoset);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }
    /// Infosets in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&InfoKey, &Infoset)> {
        self.index.iter().map(|(key, &slot)| (key, &self.arena[slot]))
    }
    /// Number of infosets belonging to each player.
    pub fn counts(&self) -> (usize, usize) {
        let p1 = self.index.keys().filter(|k| k.player() == 0).count();
        (p1, self.len() - p1)
    }
    /// Average strategies in key order, ready for serialization.
    pub fn strategies(&self) -> Vec<Strategy<'_>> {
        self.iter()
            .map(|(key, infoset)| Strategy {
                key,
                average: infoset.average(),
            })
            .collect()
    }
}

fn dimension(key: &InfoKey, expected: usize, found: usize) -> CfrError {
    CfrError::Dimension {
        key: key.to_string(),
        expected,
        found,
    }
}

/// Key-wise equality; arena order is an artifact of insertion history.
impl PartialEq for InfosetStore {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

#[rustfmt::skip]
impl std::fmt::Display for InfosetStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (key, infoset) in self.iter() {
            let average = infoset.average();
            let current = infoset.current();
            writeln!(f, "{}", key)?;
            for a in 0..infoset.len() {
                writeln!(
                    f,
                    "  {:>2} │ {:>+10.4} │ {:>10.4} │ {:>6.4} │ {:>6.4}",
                    a,
                    infoset.regrets()[a],
                    infoset.weights()[a],
                    current[a],
                    average[a],
                )?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(player: Player, tokens: &[u16], n: usize) -> InfoKey {
        InfoKey::new(player, tokens.iter().copied().collect(), vec![], n)
    }

    #[test]
    fn witness_creates_once() {
        let mut store = InfosetStore::default();
        let a = store.witness(key(0, &[1], 2), 2).unwrap();
        store.at(a).accumulate(1., &[1., 0.]);
        let b = store.witness(key(0, &[1], 2), 2).unwrap();
        assert_eq!(a, b);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&key(0, &[1], 2)).unwrap().weights(), &[1., 0.]);
    }

    #[test]
    fn witness_rejects_resize() {
        let mut store = InfosetStore::default();
        store.witness(key(1, &[2], 2), 2).unwrap();
        match store.witness(key(1, &[2], 2), 3) {
            Err(CfrError::Dimension { expected, found, .. }) => {
                assert_eq!(expected, 2);
                assert_eq!(found, 3);
            }
            other => panic!("expected dimension error, got {:?}", other),
        }
    }

    #[test]
    fn witness_rejects_count_disagreeing_with_key() {
        let mut store = InfosetStore::default();
        match store.witness(key(0, &[1], 2), 3) {
            Err(CfrError::Dimension { expected, found, .. }) => {
                assert_eq!(expected, 2);
                assert_eq!(found, 3);
            }
            other => panic!("expected dimension error, got {:?}", other),
        }
        assert!(store.is_empty());
    }

    #[test]
    fn restore_rejects_count_disagreeing_with_key() {
        let mut store = InfosetStore::default();
        assert!(matches!(
            store.restore(key(0, &[1], 2), Infoset::new(3)),
            Err(CfrError::Dimension { .. })
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn average_rejects_mismatched_count() {
        let mut store = InfosetStore::default();
        let slot = store.witness(key(1, &[2], 2), 2).unwrap();
        store.at(slot).accumulate(1., &[1., 0.]);
        match store.average(&key(1, &[2], 2), 3) {
            Err(CfrError::Dimension { expected, found, .. }) => {
                assert_eq!(expected, 2);
                assert_eq!(found, 3);
            }
            other => panic!("expected dimension error, got {:?}", other),
        }
        assert!(matches!(
            store.average(&key(0, &[9], 3), 2),
            Err(CfrError::Dimension { .. })
        ));
        assert_eq!(store.average(&key(1, &[2], 2), 2).unwrap(), vec![1., 0.]);
    }

    #[test]
    fn average_of_unseen_key_is_uniform_and_pure() {
        let store = InfosetStore::default();
        let p = store.average(&key(0, &[7], 3), 3).unwrap();
        assert_eq!(p.len(), 3);
        assert!(p.iter().all(|x| (x - 1. / 3.).abs() < 1e-12));
        assert!(store.is_empty());
    }

    #[test]
    fn counts_split_by_player() {
        let mut store = InfosetStore::default();
        store.witness(key(0, &[1], 2), 2).unwrap();
        store.witness(key(0, &[2], 2), 2).unwrap();
        store.witness(key(1, &[1], 2), 2).unwrap();
        assert_eq!(store.counts(), (2, 1));
    }

    #[test]
    fn equality_ignores_insertion_order() {
        let mut a = InfosetStore::default();
        let mut b = InfosetStore::default();
        a.witness(key(0, &[1], 2), 2).unwrap();
        a.witness(key(1, &[2], 2), 2).unwrap();
        b.witness(key(1, &[2], 2), 2).unwrap();
        b.witness(key(0, &[1], 2), 2).unwrap();
        assert_eq!(a, b);
        let slot = a.witness(key(0, &[1], 2), 2).unwrap();
        a.at(slot).regret(1., &[1., 0.], 0.);
        assert_ne!(a, b);
    }
}
