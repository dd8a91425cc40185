use super::ledger::{Ledger, OperationError};
use super::{AccountId, Amount};
use crate::custody::Custodian;

impl Ledger {
    /// Sell tokens back: debit `caller`'s available balance and have the
    /// custodian pay the same amount of native currency out to them.
    ///
    /// The debit lands before the custodian is invoked, so a collaborator
    /// that somehow called back into the ledger would already observe the
    /// withdrawal applied. If the payout fails the debit is restored: either
    /// both the balance and the currency move, or neither does.
    pub fn withdraw(
        &mut self,
        caller: &AccountId,
        amount: Amount,
        custodian: &mut impl Custodian,
    ) -> Result<(), OperationError> {
        if amount <= Amount::ZERO {
            return Err(OperationError::InvalidAmount);
        }

        // An account that never existed holds nothing to withdraw.
        let account = self
            .accounts
            .get_mut(caller)
            .ok_or(OperationError::InsufficientBalance)?;
        if amount > account.available {
            return Err(OperationError::InsufficientBalance);
        }

        account.available -= amount;
        self.custody -= amount;

        if let Err(err) = custodian.pay(caller, amount) {
            // Put the tokens back before reporting the failure.
            let account = self.accounts.entry(caller.clone()).or_default();
            account.available += amount;
            self.custody += amount;
            self.debug_assert_balanced();
            return Err(err.into());
        }

        self.debug_assert_balanced();
        Ok(())
    }
}
