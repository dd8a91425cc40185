use super::ledger::{Ledger, OperationError};
use super::{AccountId, Amount};

impl Ledger {
    /// Set aside part of the caller's available balance. Locked funds stay
    /// on the books and keep counting towards custody, but cannot be
    /// withdrawn or transferred until released.
    ///
    /// Repeated locks accumulate into a single pool; there is no
    /// per-lock bookkeeping to release individually.
    pub fn lock(&mut self, caller: &AccountId, amount: Amount) -> Result<(), OperationError> {
        if amount <= Amount::ZERO {
            return Err(OperationError::InvalidAmount);
        }

        let account = self
            .accounts
            .get_mut(caller)
            .ok_or(OperationError::InsufficientBalance)?;
        if amount > account.available {
            return Err(OperationError::InsufficientBalance);
        }

        let locked = account
            .locked
            .checked_add(amount)
            .ok_or(OperationError::Overflow)?;
        account.available -= amount;
        account.locked = locked;

        self.debug_assert_balanced();
        Ok(())
    }
}
