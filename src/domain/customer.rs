use chrono::{DateTime, NaiveDate, Utc};

/// The unique tax id (CPF) keying a customer in the registry.
pub type Cpf = String;

/// A registered customer.
///
/// Customers are created once and never mutated or removed. One customer may
/// hold any number of accounts; accounts reference the customer by CPF.
#[derive(Debug, Clone)]
pub struct Customer {
    pub cpf: Cpf,
    pub name: String,
    pub birth_date: NaiveDate,
    /// Single formatted line: street, number - district - city/state
    pub address: String,
    pub created_at: DateTime<Utc>,
}

impl Customer {
    pub fn new(
        cpf: impl Into<Cpf>,
        name: impl Into<String>,
        birth_date: NaiveDate,
        address: impl Into<String>,
    ) -> Self {
        Self {
            cpf: cpf.into(),
            name: name.into(),
            birth_date,
            address: address.into(),
            created_at: Utc::now(),
        }
    }
}

/// Input format for birth dates, e.g. "21-03-1990".
pub const BIRTH_DATE_FORMAT: &str = "%d-%m-%Y";

/// Parse a birth date in `dd-mm-yyyy` form.
pub fn parse_birth_date(input: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(input.trim(), BIRTH_DATE_FORMAT)
}
