use super::ledger::{Ledger, OperationError};
use super::{AccountId, Amount};

impl Ledger {
    /// Credit `caller` with tokens for native currency already received, at
    /// the fixed 1:1 rate. The account comes into existence on its first
    /// deposit.
    ///
    /// Only the bookkeeping happens here; collecting the currency is the
    /// caller's business and must be settled before this is invoked.
    pub fn deposit(&mut self, caller: &AccountId, amount: Amount) -> Result<(), OperationError> {
        if amount <= Amount::ZERO {
            return Err(OperationError::InvalidAmount);
        }

        // Compute both credits before committing either, so an overflow
        // refuses the whole deposit with nothing touched.
        let custody = self
            .custody
            .checked_add(amount)
            .ok_or(OperationError::Overflow)?;

        let account = self.accounts.entry(caller.clone()).or_default();
        account.available = account
            .available
            .checked_add(amount)
            .ok_or(OperationError::Overflow)?;
        self.custody = custody;

        self.debug_assert_balanced();
        Ok(())
    }
}
