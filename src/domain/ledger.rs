use super::{Cents, Statement, format_cents};

/// Fallback per-withdrawal limit: R$ 500.00.
pub const DEFAULT_WITHDRAWAL_LIMIT: Cents = 50000;

/// Fallback cap on the number of withdrawals in a session.
pub const DEFAULT_MAX_WITHDRAWALS: u32 = 3;

/// A single running balance with its statement and withdrawal limits.
///
/// All mutation goes through [`Ledger::deposit`] and [`Ledger::withdraw`];
/// business-rule failures leave the balance, the withdrawal counter and the
/// statement untouched.
#[derive(Debug, Clone)]
pub struct Ledger {
    balance: Cents,
    limit: Cents,
    withdrawals: u32,
    max_withdrawals: u32,
    statement: Statement,
}

impl Ledger {
    /// Create an empty ledger with the given per-withdrawal limit and
    /// withdrawal cap.
    pub fn new(limit: Cents, max_withdrawals: u32) -> Self {
        Self {
            balance: 0,
            limit,
            withdrawals: 0,
            max_withdrawals,
            statement: Statement::new(),
        }
    }

    pub fn balance(&self) -> Cents {
        self.balance
    }

    pub fn limit(&self) -> Cents {
        self.limit
    }

    /// Withdrawals completed so far. Never reset: the cap covers the whole
    /// session, there is no day boundary.
    pub fn withdrawals(&self) -> u32 {
        self.withdrawals
    }

    pub fn max_withdrawals(&self) -> u32 {
        self.max_withdrawals
    }

    pub fn statement(&self) -> &Statement {
        &self.statement
    }

    /// Deposit `amount` into the ledger.
    ///
    /// Succeeds only for positive amounts; success appends one statement
    /// line.
    pub fn deposit(&mut self, amount: Cents) -> Result<(), OperationError> {
        if amount <= 0 {
            return Err(OperationError::InvalidAmount);
        }

        self.balance += amount;
        self.statement.record_deposit(amount);
        Ok(())
    }

    /// Withdraw `amount` from the ledger.
    ///
    /// The guards form an ordered chain and the first match wins. The order
    /// is significant: a request that exceeds both the balance and the
    /// per-withdrawal limit must be reported as insufficient funds, and a
    /// non-positive amount is only reported as invalid once every other
    /// guard has passed.
    pub fn withdraw(&mut self, amount: Cents) -> Result<(), OperationError> {
        if amount > self.balance {
            return Err(OperationError::InsufficientFunds {
                balance: self.balance,
                requested: amount,
            });
        }
        if amount > self.limit {
            return Err(OperationError::LimitExceeded {
                limit: self.limit,
                requested: amount,
            });
        }
        if self.withdrawals >= self.max_withdrawals {
            return Err(OperationError::TooManyWithdrawals {
                max: self.max_withdrawals,
            });
        }
        if amount <= 0 {
            return Err(OperationError::InvalidAmount);
        }

        self.balance -= amount;
        self.withdrawals += 1;
        self.statement.record_withdrawal(amount);
        Ok(())
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new(DEFAULT_WITHDRAWAL_LIMIT, DEFAULT_MAX_WITHDRAWALS)
    }
}

/// Business-rule failure of a deposit or withdrawal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationError {
    InvalidAmount,
    InsufficientFunds { balance: Cents, requested: Cents },
    LimitExceeded { limit: Cents, requested: Cents },
    TooManyWithdrawals { max: u32 },
}

impl std::fmt::Display for OperationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OperationError::InvalidAmount => {
                write!(f, "the amount provided is invalid")
            }
            OperationError::InsufficientFunds { balance, requested } => {
                write!(
                    f,
                    "insufficient balance: available R$ {}, requested R$ {}",
                    format_cents(*balance),
                    format_cents(*requested)
                )
            }
            OperationError::LimitExceeded { limit, requested } => {
                write!(
                    f,
                    "the amount R$ {} exceeds the per-withdrawal limit of R$ {}",
                    format_cents(*requested),
                    format_cents(*limit)
                )
            }
            OperationError::TooManyWithdrawals { max } => {
                write!(f, "maximum number of withdrawals reached ({})", max)
            }
        }
    }
}

impl std::error::Error for OperationError {}
