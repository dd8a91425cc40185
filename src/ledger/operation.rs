use super::{AccountId, Amount};

#[derive(Debug, PartialEq)]
pub enum Kind {
    Deposit(Amount),             // Credit the available balance.
    Withdrawal(Amount),          // Debit the available balance and pay out.
    Transfer(AccountId, Amount), // Move available funds onto another account.
    Lock(Amount),                // Move funds from available to locked.
    Unlock,                      // Release the whole locked pool.
}

#[derive(Debug, PartialEq)]
pub struct Operation {
    pub(super) kind: Kind,
    pub(super) account: AccountId,
}

impl Operation {
    // new() quantizes every amount it accepts, so no operation can carry
    // more than 4 decimal places into the ledger.
    pub fn new(kind: Kind, account: AccountId) -> Self {
        let kind = match kind {
            Kind::Deposit(amount) => Kind::Deposit(amount.round_dp(super::DECIMAL_PRECISION)),
            Kind::Withdrawal(amount) => Kind::Withdrawal(amount.round_dp(super::DECIMAL_PRECISION)),
            Kind::Transfer(to, amount) => {
                Kind::Transfer(to, amount.round_dp(super::DECIMAL_PRECISION))
            }
            Kind::Lock(amount) => Kind::Lock(amount.round_dp(super::DECIMAL_PRECISION)),
            Kind::Unlock => Kind::Unlock,
        };

        Self { kind, account }
    }
}

#[test]
// Decimal precision is 4 places. Finer-grained amounts must not survive
// construction.
fn test_operation_decimal_precision() {
    use rust_decimal_macros::dec;

    for (raw_amount, want_amount) in vec![
        (dec!(2.0), dec!(2.0)),
        (dec!(0.999999), dec!(1.0)),
        (dec!(3.00004), dec!(3.0)),
        (dec!(0.1234), dec!(0.1234)),
        (dec!(9.87654), dec!(9.8765)),
        (dec!(1.23459), dec!(1.2346)),
    ] {
        let op = Operation::new(Kind::Withdrawal(raw_amount), "alice".to_string());
        assert_eq!(Kind::Withdrawal(want_amount), op.kind);
    }
}

#[test]
fn test_operation_every_kind_is_quantized() {
    use rust_decimal_macros::dec;

    let op = Operation::new(Kind::Deposit(dec!(5.55555)), "alice".to_string());
    assert_eq!(Kind::Deposit(dec!(5.5556)), op.kind);

    let op = Operation::new(
        Kind::Transfer("bob".to_string(), dec!(0.00006)),
        "alice".to_string(),
    );
    assert_eq!(Kind::Transfer("bob".to_string(), dec!(0.0001)), op.kind);

    let op = Operation::new(Kind::Lock(dec!(1.00009)), "alice".to_string());
    assert_eq!(Kind::Lock(dec!(1.0001)), op.kind);

    let op = Operation::new(Kind::Unlock, "alice".to_string());
    assert_eq!(Kind::Unlock, op.kind);
}
