use crate::ledger::{account::Account, AccountId, Amount};

use serde::Serialize;
use std::sync::mpsc::Receiver;

#[derive(Serialize)]
struct BalanceRecord {
    account: AccountId,
    available: Amount,
    locked: Amount,
    total: Amount,
}

impl BalanceRecord {
    fn new(account: AccountId, holding: &Account) -> Self {
        Self {
            account,
            available: holding.available,
            locked: holding.locked,
            total: holding.total_holding(),
        }
    }
}

// Writes the received balances to the given stream.
pub fn write(
    output_stream: impl std::io::Write,
    accounts: Receiver<(AccountId, Account)>,
) -> csv::Result<()> {
    let mut writer = csv::Writer::from_writer(output_stream);

    for (account_id, account) in accounts {
        let record = BalanceRecord::new(account_id, &account);
        writer.serialize(record)?;
    }

    Ok(())
}

#[cfg(test)]
mod write_tests {
    use crate::ledger::account::Account;

    use rust_decimal_macros::dec;
    use std::sync::mpsc;

    #[test]
    fn test_write_balances() {
        let (accounts_tx, accounts) = mpsc::channel();
        let mut output_stream = Vec::new();
        for (account_id, available, locked) in vec![
            ("alice", dec!(5.0), dec!(1.0)),
            ("bob", dec!(1.234), dec!(123.4)),
            ("carol", dec!(500.005), dec!(600.006)),
        ] {
            let account = Account { available, locked };
            accounts_tx
                .send((account_id.to_string(), account))
                .unwrap();
        }
        drop(accounts_tx);

        super::write(&mut output_stream, accounts).unwrap();

        let want = r#"account,available,locked,total
alice,5.0,1.0,6.0
bob,1.234,123.4,124.634
carol,500.005,600.006,1100.011
"#;
        assert_eq!(want.to_string(), String::from_utf8(output_stream).unwrap());
    }

    #[test]
    fn test_write_no_accounts() {
        let (accounts_tx, accounts) = mpsc::channel::<(super::AccountId, Account)>();
        drop(accounts_tx);

        let mut output_stream = Vec::new();
        super::write(&mut output_stream, accounts).unwrap();

        // Nothing to report, not even a header.
        assert_eq!("", String::from_utf8(output_stream).unwrap());
    }
}
