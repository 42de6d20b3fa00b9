use super::{Cents, format_cents};

/// Append-only log of an account's completed transactions.
///
/// Entries are plain formatted lines, one per successful deposit or
/// withdrawal. There are no structured transaction records: no timestamps,
/// no transaction ids, just text in completion order.
#[derive(Debug, Clone, Default)]
pub struct Statement {
    entries: Vec<String>,
}

impl Statement {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completed deposit.
    pub fn record_deposit(&mut self, amount: Cents) {
        self.entries.push(format!("Deposit: R$ {}", format_cents(amount)));
    }

    /// Record a completed withdrawal.
    pub fn record_withdrawal(&mut self, amount: Cents) {
        self.entries
            .push(format!("Withdrawal: R$ {}", format_cents(amount)));
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The recorded lines, oldest first.
    pub fn lines(&self) -> &[String] {
        &self.entries
    }
}
