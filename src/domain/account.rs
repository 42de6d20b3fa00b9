use chrono::{DateTime, Utc};

use super::{Cents, Cpf, Ledger, OperationError};

/// Sequential account number, assigned by the registry on successful open.
pub type AccountNumber = u32;

/// Fixed code of the single modeled branch.
pub const DEFAULT_BRANCH: &str = "0001";

/// A bank account at the single modeled branch.
///
/// An account belongs to exactly one customer, referenced by CPF: the
/// registry owns the customer record, the account only keys into it. Once
/// opened, an account changes only through deposits and withdrawals on its
/// ledger.
#[derive(Debug, Clone)]
pub struct Account {
    pub number: AccountNumber,
    pub branch: String,
    pub holder: Cpf,
    pub ledger: Ledger,
    pub opened_at: DateTime<Utc>,
}

impl Account {
    /// Open an account with a zero balance and the given withdrawal rules.
    pub fn open(
        number: AccountNumber,
        branch: impl Into<String>,
        holder: impl Into<Cpf>,
        limit: Cents,
        max_withdrawals: u32,
    ) -> Self {
        Self {
            number,
            branch: branch.into(),
            holder: holder.into(),
            ledger: Ledger::new(limit, max_withdrawals),
            opened_at: Utc::now(),
        }
    }

    pub fn balance(&self) -> Cents {
        self.ledger.balance()
    }

    pub fn deposit(&mut self, amount: Cents) -> Result<(), OperationError> {
        self.ledger.deposit(amount)
    }

    pub fn withdraw(&mut self, amount: Cents) -> Result<(), OperationError> {
        self.ledger.withdraw(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DEFAULT_MAX_WITHDRAWALS, DEFAULT_WITHDRAWAL_LIMIT};

    fn open_account() -> Account {
        Account::open(
            1,
            DEFAULT_BRANCH,
            "12345678900",
            DEFAULT_WITHDRAWAL_LIMIT,
            DEFAULT_MAX_WITHDRAWALS,
        )
    }

    #[test]
    fn test_open_starts_empty() {
        let account = open_account();
        assert_eq!(account.balance(), 0);
        assert_eq!(account.branch, DEFAULT_BRANCH);
        assert!(account.ledger.statement().is_empty());
    }

    #[test]
    fn test_operations_go_through_the_ledger() {
        let mut account = open_account();
        account.deposit(50000).unwrap();
        account.withdraw(20000).unwrap();

        assert_eq!(account.balance(), 30000);
        assert_eq!(account.ledger.withdrawals(), 1);
        assert!(account.withdraw(40000).is_err());
    }
}
