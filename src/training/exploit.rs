use crate::*;

impl<G, A> Trainer<G, A>
where
    G: Game,
    A: Abstraction<G>,
{
    /// Training-based proxy for exploitability.
    ///
    /// From the current store, player 0 alone is trained for `n`
    /// external-sampled traversals and the result evaluated as `b1`. The
    /// store is rolled back, player 1 alone is trained the same way and
    /// evaluated as `b2`. The store is rolled back again and `b1 - b2` is
    /// returned.
    ///
    /// This is not a true best response. It only shrinks as the average
    /// strategies approach equilibrium. The random source is advanced by
    /// both passes; the learned store is left exactly as it was, even
    /// when a pass fails.
    pub fn exploitability(&mut self, n: usize) -> Result<Utility> {
        let snapshot = self.store().clone();
        let b1 = self.respond(0, n).and_then(|_| self.evaluate());
        self.replace(snapshot.clone());
        let b1 = b1?;
        let b2 = self.respond(1, n).and_then(|_| self.evaluate());
        self.replace(snapshot);
        let b2 = b2?;
        log::debug!("{:<32}{:<32}", "best response (player 1)", b1);
        log::debug!("{:<32}{:<32}", "best response (player 2)", b2);
        Ok(b1 - b2)
    }
}
