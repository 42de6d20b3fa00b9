use chrono::NaiveDate;

use crate::domain::{
    Account, AccountNumber, Cents, Cpf, Customer, DEFAULT_BRANCH, DEFAULT_MAX_WITHDRAWALS,
    DEFAULT_WITHDRAWAL_LIMIT, Ledger,
};
use crate::storage::Registry;

use super::AppError;

/// Session-wide parameters: the branch code and the withdrawal rules every
/// ledger in this session is created with.
#[derive(Debug, Clone)]
pub struct BankConfig {
    pub branch: String,
    pub withdrawal_limit: Cents,
    pub max_withdrawals: u32,
}

impl Default for BankConfig {
    fn default() -> Self {
        Self {
            branch: DEFAULT_BRANCH.to_string(),
            withdrawal_limit: DEFAULT_WITHDRAWAL_LIMIT,
            max_withdrawals: DEFAULT_MAX_WITHDRAWALS,
        }
    }
}

/// Application service providing the teller operations.
/// This is the primary interface for any client (the interactive CLI today).
///
/// Deposits, withdrawals and the statement act on the session's working
/// ledger (the teller drawer); registry accounts carry their own ledgers
/// starting at zero.
pub struct BankService {
    config: BankConfig,
    registry: Registry,
    teller: Ledger,
}

/// Result of a completed deposit or withdrawal.
#[derive(Debug)]
pub struct Receipt {
    pub amount: Cents,
    pub balance: Cents,
}

/// Snapshot of the working ledger's statement for display.
#[derive(Debug)]
pub struct StatementView {
    pub lines: Vec<String>,
    pub balance: Cents,
}

/// Result of opening an account.
#[derive(Debug)]
pub struct AccountOpened {
    pub number: AccountNumber,
    pub branch: String,
    pub holder_name: String,
}

/// An account paired with its holder, for listing.
#[derive(Debug)]
pub struct AccountEntry<'a> {
    pub account: &'a Account,
    pub holder: &'a Customer,
}

/// Input for registering a customer.
#[derive(Debug)]
pub struct NewCustomer {
    pub cpf: Cpf,
    pub name: String,
    pub birth_date: NaiveDate,
    pub address: String,
}

impl BankService {
    /// Create a service with an empty registry and a fresh working ledger.
    pub fn new(config: BankConfig) -> Self {
        let teller = Ledger::new(config.withdrawal_limit, config.max_withdrawals);
        Self {
            config,
            registry: Registry::new(),
            teller,
        }
    }

    // ========================
    // Ledger operations
    // ========================

    /// Deposit into the working ledger.
    pub fn deposit(&mut self, amount: Cents) -> Result<Receipt, AppError> {
        self.teller.deposit(amount)?;
        Ok(Receipt {
            amount,
            balance: self.teller.balance(),
        })
    }

    /// Withdraw from the working ledger.
    pub fn withdraw(&mut self, amount: Cents) -> Result<Receipt, AppError> {
        self.teller.withdraw(amount)?;
        Ok(Receipt {
            amount,
            balance: self.teller.balance(),
        })
    }

    /// The working ledger's statement and current balance.
    pub fn statement(&self) -> StatementView {
        StatementView {
            lines: self.teller.statement().lines().to_vec(),
            balance: self.teller.balance(),
        }
    }

    // ========================
    // Customer operations
    // ========================

    /// Find a customer by CPF.
    pub fn find_customer(&self, cpf: &str) -> Option<&Customer> {
        self.registry.find_customer(cpf)
    }

    /// Number of registered customers.
    pub fn customer_count(&self) -> usize {
        self.registry.customer_count()
    }

    /// Register a new customer. The CPF must be unused.
    pub fn register_customer(&mut self, new: NewCustomer) -> Result<Customer, AppError> {
        if self.registry.find_customer(&new.cpf).is_some() {
            return Err(AppError::CustomerAlreadyExists(new.cpf));
        }

        let customer = Customer::new(new.cpf, new.name, new.birth_date, new.address);
        self.registry.add_customer(customer.clone());
        Ok(customer)
    }

    // ========================
    // Account operations
    // ========================

    /// Open an account for an existing customer.
    ///
    /// The lookup happens before anything is created: a failed open leaves
    /// the registry and the account-number sequence untouched.
    pub fn open_account(&mut self, cpf: &str) -> Result<AccountOpened, AppError> {
        let holder = self
            .registry
            .find_customer(cpf)
            .ok_or_else(|| AppError::CustomerNotFound(cpf.to_string()))?;
        let holder_name = holder.name.clone();

        let number = self.registry.open_account(
            cpf.to_string(),
            self.config.branch.clone(),
            self.config.withdrawal_limit,
            self.config.max_withdrawals,
        );

        Ok(AccountOpened {
            number,
            branch: self.config.branch.clone(),
            holder_name,
        })
    }

    /// Iterate all accounts with their holders, in opening order.
    ///
    /// Lazy and restartable: each call walks the registry afresh, nothing is
    /// mutated. Accounts whose holder record is missing cannot occur (opens
    /// require the lookup to succeed, customers are never removed).
    pub fn list_accounts(&self) -> impl Iterator<Item = AccountEntry<'_>> {
        self.registry.accounts().iter().filter_map(|account| {
            self.registry
                .find_customer(&account.holder)
                .map(|holder| AccountEntry { account, holder })
        })
    }
}
