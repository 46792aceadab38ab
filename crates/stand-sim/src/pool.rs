//! PLB capacity pool.

use crate::{SimError, SimResult};

/// Fixed-size pool of passenger-loading-bridge stands.
///
/// `available` stays in `0..=total`.  It moves by exactly one per claim or
/// release, and a move that would leave that range is an error, never a
/// clamp.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlbPool {
    total:     u32,
    available: u32,
}

impl PlbPool {
    /// A pool with every stand free.
    pub fn new(total: u32) -> Self {
        Self { total, available: total }
    }

    #[inline]
    pub fn total(&self) -> u32 {
        self.total
    }

    #[inline]
    pub fn available(&self) -> u32 {
        self.available
    }

    #[inline]
    pub fn occupied(&self) -> u32 {
        self.total - self.available
    }

    #[inline]
    pub fn has_free(&self) -> bool {
        self.available > 0
    }

    /// Take one stand.
    pub fn claim(&mut self) -> SimResult<()> {
        if self.available == 0 {
            return Err(SimError::PoolExhausted { total: self.total });
        }
        self.available -= 1;
        Ok(())
    }

    /// Give one stand back.
    pub fn release(&mut self) -> SimResult<()> {
        if self.available == self.total {
            return Err(SimError::PoolOverflow { total: self.total });
        }
        self.available += 1;
        Ok(())
    }
}
