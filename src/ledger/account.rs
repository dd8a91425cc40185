use super::Amount;

/// Per-holder balance record: what the holder can spend right now, and what
/// they have set aside.
///
/// Both parts are token units backed 1:1 by native currency held in custody.
/// Accounts come into existence the first time they are credited; an account
/// that was never credited behaves exactly like this record with both parts
/// at zero, which is also why there is no "delete account" operation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Account {
    /// Token units the holder may spend, transfer or lock.
    pub available: Amount,

    /// Token units set aside, untouchable until released in one piece.
    pub locked: Amount,
}

impl Account {
    /// Everything the holder owns, spendable or not.
    pub fn total_holding(&self) -> Amount {
        self.available + self.locked
    }
}

#[cfg(test)]
mod tests {
    use super::Account;
    use rust_decimal_macros::dec;

    #[test]
    fn test_total_holding() {
        let account = Account {
            available: dec!(3.0),
            locked: dec!(1.5),
        };
        assert_eq!(dec!(4.5), account.total_holding());
    }

    #[test]
    fn test_default_is_zeroed() {
        let account = Account::default();
        assert_eq!(dec!(0), account.available);
        assert_eq!(dec!(0), account.locked);
        assert_eq!(dec!(0), account.total_holding());
    }
}
