use super::account::Account;
use super::ledger::{Ledger, OperationError};
use super::operation::Operation;
use super::AccountId;
use crate::custody::Custodian;
use std::sync::mpsc::{self, Receiver, Sender};

pub fn process(
    operations: Receiver<Operation>,
    accounts_tx: Sender<(AccountId, Account)>,
    mut custodian: impl Custodian + Send + 'static,
) -> Receiver<OperationError> {
    let (tx, rx) = mpsc::channel();

    // We apply all operations in a new thread, to be able to stream
    // rejections as we go.
    std::thread::spawn(move || {
        let mut ledger = Ledger::new();

        for operation in operations {
            if let Err(err) = ledger.apply(&operation, &mut custodian) {
                tx.send(err).unwrap(); // Would only fail if the rx is disconnected, which should not happen here.
            };
        }

        for (account_id, account) in ledger.into_accounts() {
            accounts_tx.send((account_id, account)).unwrap(); // Would only fail if the rx is disconnected, which should not happen here.
        }
    });

    rx
}
