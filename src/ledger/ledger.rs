use super::account::Account;
use super::operation::{Kind, Operation};
use super::{AccountId, Amount};
use crate::custody::{Custodian, CustodyError};
use std::collections::HashMap;

/// Ways the ledger can refuse an operation.
///
/// Note: I kept the variants free of context on purpose. Callers already know
/// which account and amount they asked about, and the flat shape keeps the
/// rejection stream cheap to compare in tests.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OperationError {
    /// A mutating operation was handed a zero or negative amount.
    #[error("amount must be strictly positive")]
    InvalidAmount,

    /// The available part of the balance is below the requested amount.
    /// Locked funds are never drawn on implicitly.
    #[error("insufficient available balance")]
    InsufficientBalance,

    /// Unlock, or the locked-balance query, on an account with nothing locked.
    #[error("no locked funds for this account")]
    NoLockedFunds,

    /// Crediting a balance would overflow the amount representation.
    #[error("balance arithmetic overflow")]
    Overflow,

    /// The custodian failed to pay the native currency out.
    #[error("payout failed: {0}")]
    Payout(#[from] CustodyError),
}

/// Owns every account plus a mirror of the native currency held in custody
/// for them.
///
/// The ledger is a plain value: whoever drives it (the worker thread in this
/// crate, an RPC handler elsewhere) passes it around explicitly, so the state
/// machine stays testable without a process-wide singleton. Each mutating
/// call is one atomic transition: preconditions are checked before anything
/// is touched, and fallible arithmetic is computed before it is committed, so
/// a refused operation leaves no trace.
#[derive(Debug)]
pub struct Ledger {
    pub(super) accounts: HashMap<AccountId, Account>,

    // Native currency held on behalf of all accounts, moved in lockstep with
    // deposits and withdrawals. Equal to the sum of all account holdings at
    // the fixed 1:1 rate whenever the ledger is consistent.
    pub(super) custody: Amount,
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            accounts: HashMap::new(),
            custody: Amount::ZERO,
        }
    }

    /// Spendable balance of `who`. Unknown identifiers read as zero, and
    /// asking never creates an entry, so read-only traffic cannot grow the
    /// store.
    pub fn available_balance(&self, who: &AccountId) -> Amount {
        self.accounts
            .get(who)
            .map_or(Amount::ZERO, |account| account.available)
    }

    /// Currently locked balance of `caller`.
    ///
    /// An account with nothing locked reports
    /// [`OperationError::NoLockedFunds`] rather than `Ok(0)`: callers probe
    /// this query to learn whether a release is still pending, and they rely
    /// on the failure.
    pub fn locked_amount(&self, caller: &AccountId) -> Result<Amount, OperationError> {
        match self.accounts.get(caller) {
            Some(account) if account.locked > Amount::ZERO => Ok(account.locked),
            _ => Err(OperationError::NoLockedFunds),
        }
    }

    /// Native currency the ledger holds on behalf of all accounts.
    pub fn custody_balance(&self) -> Amount {
        self.custody
    }

    /// Sum of every account's total holding. Matches
    /// [`custody_balance`](Self::custody_balance) whenever the ledger is
    /// consistent; the mutating operations debug-assert exactly that.
    pub fn total_holdings(&self) -> Amount {
        self.accounts.values().map(Account::total_holding).sum()
    }

    /// Consume the ledger and yield every account sorted by identifier, so
    /// downstream output is deterministic.
    pub fn into_accounts(self) -> Vec<(AccountId, Account)> {
        let mut accounts: Vec<_> = self.accounts.into_iter().collect();
        accounts.sort_by(|(left, _), (right, _)| left.cmp(right));
        accounts
    }

    /// Route one operation to the matching balance-sheet move.
    ///
    /// Deposits additionally notify the custodian: by the time a deposit
    /// request reaches the ledger the native currency has already arrived,
    /// so booking it and growing the pool belong to the same step.
    pub fn apply(
        &mut self,
        operation: &Operation,
        custodian: &mut impl Custodian,
    ) -> Result<(), OperationError> {
        match &operation.kind {
            Kind::Deposit(amount) => {
                self.deposit(&operation.account, *amount)?;
                custodian.receive(*amount);
                Ok(())
            }
            Kind::Withdrawal(amount) => self.withdraw(&operation.account, *amount, custodian),
            Kind::Transfer(to, amount) => self.transfer(&operation.account, to, *amount),
            Kind::Lock(amount) => self.lock(&operation.account, *amount),
            Kind::Unlock => self.unlock_all(&operation.account),
        }
    }

    // Custody must mirror the sum of holdings after every transition.
    pub(super) fn debug_assert_balanced(&self) {
        debug_assert_eq!(
            self.custody,
            self.total_holdings(),
            "custody mirror out of sync with account holdings"
        );
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}
