pub mod account;
pub mod deposit;
pub mod ledger;
pub mod lock;
pub mod operation;
pub mod process;
pub mod transfer;
pub mod unlock;
pub mod withdraw;

// Named aliases don't buy any compiler checks, but they keep signatures
// readable: `HashMap<AccountId, Account>` says what it holds, while
// `HashMap<String, Account>` would need a comment. They also make swapping
// the identifier representation (say, a fixed-width address type) a one-line
// change. Identifiers are opaque to the ledger; it never inspects them.
pub type AccountId = String;

// Balances use a decimal library rather than a float, so custody arithmetic
// stays exact and the conservation checks can compare amounts directly.
pub type Amount = rust_decimal::Decimal;

// Wire amounts are quantized to this many decimal places when an Operation
// is built.
const DECIMAL_PRECISION: u32 = 4;
