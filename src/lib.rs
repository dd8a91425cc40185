//! Replay a history of custody operations and keep every account's
//! available and locked balances consistent with the native currency held
//! in custody.
//!
//! The crate is built around [`Ledger`], a state machine that accepts one
//! operation at a time and refuses anything that would break custody
//! conservation. Around it sits a replay shell: [`input`] parses a CSV log
//! into operations and [`ledger::process`] applies them on a worker thread.
//! Once the log is exhausted, [`output`] writes the final balances back out.
//! [`run::run`] wires the whole pipeline together.

pub mod custody;
pub mod error_handler;
pub mod input;
pub mod ledger;
pub mod output;
pub mod run;

pub use custody::{Custodian, CustodyError, Treasury};
pub use ledger::ledger::{Ledger, OperationError};
pub use ledger::{AccountId, Amount};
