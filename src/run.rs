use crate::custody::Treasury;
use crate::error_handler;
use crate::input::parse;
use crate::ledger::process::process;
use crate::output;

use std::sync::mpsc;

/// Replay every operation read from `input` against a fresh ledger backed
/// by an empty treasury, then write the final balances to `output`.
///
/// Rejected rows and refused operations are logged, not fatal. The returned
/// error only covers broken I/O on either stream.
pub fn run(
    input: impl std::io::Read + Send + 'static,
    output: impl std::io::Write,
) -> anyhow::Result<()> {
    let (operations, input_errors) = parse(input);
    let (accounts_tx, accounts_rx) = mpsc::channel();

    let operation_errors = process(operations, accounts_tx, Treasury::new());
    let handles = error_handler::drain(input_errors, operation_errors);

    output::write(output, accounts_rx)?;

    for handle in handles {
        if handle.join().is_err() {
            anyhow::bail!("error drain thread panicked");
        }
    }

    Ok(())
}
