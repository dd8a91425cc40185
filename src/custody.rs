//! Native-currency custody boundary.
//!
//! The ledger only books token balances; the currency itself sits with an
//! external custodian. This module defines that boundary plus an in-memory
//! treasury used by the replay binary, the benches and the tests.

use crate::ledger::{AccountId, Amount};
use tracing::debug;

/// Failure reported by a custodian asked to move native currency.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CustodyError {
    /// The custodian holds less native currency than the requested payout.
    #[error("custodian holds less native currency than requested")]
    Shortfall,

    /// The payout was refused for a custodian-specific reason.
    #[error("payout rejected: {0}")]
    Rejected(String),
}

/// External collaborator holding the native currency that backs the ledger.
///
/// `receive` books currency that has already arrived alongside a deposit and
/// cannot fail. `pay` moves currency back out to a holder and may fail; the
/// ledger treats a failed payout as a failure of the whole withdrawal.
pub trait Custodian {
    fn receive(&mut self, amount: Amount);

    fn pay(&mut self, to: &AccountId, amount: Amount) -> Result<(), CustodyError>;
}

/// In-memory custodian: a single pool of native currency.
///
/// Real deployments would put a payment rail or a chain client behind
/// [`Custodian`]; for replaying an operation log an owned pool is enough, and
/// it doubles as a cross-check on the ledger's custody mirror.
#[derive(Debug, Default)]
pub struct Treasury {
    pool: Amount,
}

impl Treasury {
    pub fn new() -> Self {
        Self::default()
    }

    /// Native currency currently on hand.
    pub fn balance(&self) -> Amount {
        self.pool
    }
}

impl Custodian for Treasury {
    fn receive(&mut self, amount: Amount) {
        self.pool += amount;
    }

    fn pay(&mut self, to: &AccountId, amount: Amount) -> Result<(), CustodyError> {
        if amount > self.pool {
            return Err(CustodyError::Shortfall);
        }

        self.pool -= amount;
        debug!(%to, %amount, "paid out native currency");
        Ok(())
    }
}
