use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Table configuration of the reference game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rules {
    pub suits: u8,
    pub ranks: u8,
    pub hand_size: usize,
    pub ante: Chips,
    pub bet: Chips,
    /// Raises allowed after the opening bet.
    pub raises: usize,
    /// Open with a forced [`Edge::Post`] by the first player.
    pub post: bool,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            suits: SUITS,
            ranks: RANKS,
            hand_size: HAND_SIZE,
            ante: ANTE,
            bet: BET,
            raises: MAX_RAISES,
            post: false,
        }
    }
}

impl Rules {
    /// One suit of three ranks, one card each.
    pub fn kuhn() -> Self {
        Self {
            suits: 1,
            ranks: 3,
            hand_size: 1,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.suits == 0 || self.suits > MAX_SUITS {
            return Err(CfrError::Rules(format!("suits must be in 1..={}", MAX_SUITS)));
        }
        if self.ranks == 0 || self.ranks > MAX_RANKS {
            return Err(CfrError::Rules(format!("ranks must be in 1..={}", MAX_RANKS)));
        }
        if self.hand_size == 0 {
            return Err(CfrError::Rules("hand size must be positive".into()));
        }
        if 2 * self.hand_size > self.suits as usize * self.ranks as usize {
            return Err(CfrError::Rules(format!(
                "{} cards cannot deal two hands of {}",
                self.suits as usize * self.ranks as usize,
                self.hand_size
            )));
        }
        if self.ante <= 0 || self.bet <= 0 {
            return Err(CfrError::Rules("ante and bet must be positive".into()));
        }
        Ok(())
    }
}
