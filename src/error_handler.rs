use crate::{input, ledger::ledger::OperationError};

use std::sync::mpsc::Receiver;
use std::thread::JoinHandle;
use tracing::warn;

// Rejections do not stop a replay: bad rows and refused operations are
// logged here while the remaining operations keep applying. A caller that
// wants to react to them can consume the channels itself instead of handing
// them over.
pub fn drain(
    input_errors: Receiver<input::Error>,
    operation_errors: Receiver<OperationError>,
) -> Vec<JoinHandle<()>> {
    vec![
        std::thread::spawn(move || {
            for err in input_errors {
                warn!(%err, "discarded row");
            }
        }),
        std::thread::spawn(move || {
            for err in operation_errors {
                warn!(%err, "rejected operation");
            }
        }),
    ]
}
