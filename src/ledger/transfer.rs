use super::ledger::{Ledger, OperationError};
use super::{AccountId, Amount};

impl Ledger {
    /// Reassign available balance from one holder to another. Claims change
    /// hands, currency does not, so the custody total stays put.
    ///
    /// `from` arrives here already authorized: whether a caller may move
    /// somebody else's balance is the surrounding interface's policy, not
    /// the ledger's.
    pub fn transfer(
        &mut self,
        from: &AccountId,
        to: &AccountId,
        amount: Amount,
    ) -> Result<(), OperationError> {
        if amount <= Amount::ZERO {
            return Err(OperationError::InvalidAmount);
        }

        let available = self
            .accounts
            .get(from)
            .map_or(Amount::ZERO, |account| account.available);
        if amount > available {
            return Err(OperationError::InsufficientBalance);
        }

        // A self-transfer already passed the balance check; moving funds
        // onto oneself changes nothing.
        if from == to {
            return Ok(());
        }

        let recipient = self.accounts.entry(to.clone()).or_default();
        recipient.available = recipient
            .available
            .checked_add(amount)
            .ok_or(OperationError::Overflow)?;

        // The sender exists: a positive amount just passed its available
        // check.
        self.accounts.entry(from.clone()).or_default().available -= amount;

        self.debug_assert_balanced();
        Ok(())
    }
}
