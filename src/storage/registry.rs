use crate::domain::{Account, AccountNumber, Cents, Cpf, Customer};

/// In-memory store for customers and accounts.
///
/// The registry is a plain store: uniqueness and existence checks belong to
/// the application service, which always looks a customer up before adding
/// or linking. Nothing here persists beyond the process.
#[derive(Debug)]
pub struct Registry {
    customers: Vec<Customer>,
    accounts: Vec<Account>,
    next_account: AccountNumber,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    pub fn new() -> Self {
        Self {
            customers: Vec::new(),
            accounts: Vec::new(),
            next_account: 1,
        }
    }

    /// Find a customer by CPF. Linear scan, first match.
    pub fn find_customer(&self, cpf: &str) -> Option<&Customer> {
        self.customers.iter().find(|customer| customer.cpf == cpf)
    }

    /// Add a new customer record.
    pub fn add_customer(&mut self, customer: Customer) {
        self.customers.push(customer);
    }

    pub fn customer_count(&self) -> usize {
        self.customers.len()
    }

    /// The number the next successfully opened account will receive.
    pub fn next_account_number(&self) -> AccountNumber {
        self.next_account
    }

    /// Open an account for `holder` and assign the next sequence number.
    ///
    /// The counter advances here and only here, so a caller that fails its
    /// customer lookup never consumes a number.
    pub fn open_account(
        &mut self,
        holder: Cpf,
        branch: impl Into<String>,
        limit: Cents,
        max_withdrawals: u32,
    ) -> AccountNumber {
        let number = self.next_account;
        self.accounts
            .push(Account::open(number, branch, holder, limit, max_withdrawals));
        self.next_account += 1;
        number
    }

    /// All accounts, in opening order.
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }
}
