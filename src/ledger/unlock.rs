use super::ledger::{Ledger, OperationError};
use super::{AccountId, Amount};

impl Ledger {
    /// Release the caller's entire locked pool back into their available
    /// balance. Partial release is not supported; the pool empties in one
    /// step and a second release fails until something is locked again.
    pub fn unlock_all(&mut self, caller: &AccountId) -> Result<(), OperationError> {
        let account = self
            .accounts
            .get_mut(caller)
            .ok_or(OperationError::NoLockedFunds)?;
        if account.locked <= Amount::ZERO {
            return Err(OperationError::NoLockedFunds);
        }

        let available = account
            .available
            .checked_add(account.locked)
            .ok_or(OperationError::Overflow)?;
        account.available = available;
        account.locked = Amount::ZERO;

        self.debug_assert_balanced();
        Ok(())
    }
}

#[cfg(test)]
mod unlock_tests {
    use crate::ledger::account::Account;
    use crate::ledger::ledger::{Ledger, OperationError};
    use crate::ledger::AccountId;

    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;

    fn id(name: &str) -> AccountId {
        name.to_string()
    }

    fn ledger_with(available: Decimal, locked: Decimal) -> Ledger {
        Ledger {
            accounts: HashMap::from([(id("alice"), Account { available, locked })]),
            custody: available + locked,
        }
    }

    #[test]
    fn test_unlock_releases_the_whole_pool() {
        let mut ledger = ledger_with(dec!(1.0), dec!(2.5));

        let got = ledger.unlock_all(&id("alice"));
        assert_eq!(Ok(()), got);
        assert_eq!(dec!(3.5), ledger.available_balance(&id("alice")));
        assert_eq!(
            Err(OperationError::NoLockedFunds),
            ledger.locked_amount(&id("alice"))
        );
        assert_eq!(dec!(3.5), ledger.custody_balance());
    }

    #[test]
    fn test_unlock_is_not_idempotent() {
        let mut ledger = ledger_with(dec!(0), dec!(4.0));

        assert_eq!(Ok(()), ledger.unlock_all(&id("alice")));
        assert_eq!(
            Err(OperationError::NoLockedFunds),
            ledger.unlock_all(&id("alice"))
        );
        assert_eq!(dec!(4.0), ledger.available_balance(&id("alice")));
    }

    #[test]
    fn test_unlock_with_nothing_locked() {
        let mut ledger = ledger_with(dec!(3.0), dec!(0));

        let got = ledger.unlock_all(&id("alice"));
        assert_eq!(Err(OperationError::NoLockedFunds), got);
        assert_eq!(dec!(3.0), ledger.available_balance(&id("alice")));
    }

    #[test]
    fn test_unlock_unknown_account() {
        let mut ledger = Ledger::new();

        let got = ledger.unlock_all(&id("ghost"));
        assert_eq!(Err(OperationError::NoLockedFunds), got);
        assert!(ledger.accounts.is_empty());
    }

    #[test]
    fn test_lock_unlock_round_trip() {
        let mut ledger = ledger_with(dec!(4.0), dec!(0));

        assert_eq!(Ok(()), ledger.lock(&id("alice"), dec!(1.5)));
        assert_eq!(Ok(()), ledger.lock(&id("alice"), dec!(0.5)));
        assert_eq!(Ok(()), ledger.unlock_all(&id("alice")));

        assert_eq!(dec!(4.0), ledger.available_balance(&id("alice")));
        assert_eq!(
            Err(OperationError::NoLockedFunds),
            ledger.locked_amount(&id("alice"))
        );
        assert_eq!(dec!(4.0), ledger.custody_balance());
    }

    #[test]
    fn test_unlock_overflowing_available_changes_nothing() {
        let mut ledger = Ledger {
            accounts: HashMap::from([(
                id("alice"),
                Account {
                    available: Decimal::MAX,
                    locked: dec!(1.0),
                },
            )]),
            custody: Decimal::MAX,
        };

        let got = ledger.unlock_all(&id("alice"));
        assert_eq!(Err(OperationError::Overflow), got);
        assert_eq!(Decimal::MAX, ledger.available_balance(&id("alice")));
        assert_eq!(Ok(dec!(1.0)), ledger.locked_amount(&id("alice")));
    }
}
