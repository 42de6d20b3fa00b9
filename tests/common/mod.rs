// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use chrono::NaiveDate;
use sportello::application::{BankConfig, BankService, NewCustomer};

/// Helper to create a test service with the default configuration
/// (branch 0001, limit R$ 500.00, 3 withdrawals).
pub fn test_service() -> BankService {
    BankService::new(BankConfig::default())
}

/// Helper to parse a birth date used by fixtures
pub fn birth_date(date_str: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date_str, "%d-%m-%Y").unwrap()
}

/// Build a registration input with fixed filler fields
pub fn new_customer(cpf: &str, name: &str) -> NewCustomer {
    NewCustomer {
        cpf: cpf.to_string(),
        name: name.to_string(),
        birth_date: birth_date("21-03-1990"),
        address: "Rua das Flores, 10 - Centro - Sao Paulo/SP".to_string(),
    }
}

/// Test fixture: standard customer setup
pub struct StandardCustomers;

impl StandardCustomers {
    /// Register two customers: Ana (CPF 11111111111) and Bruno (22222222222)
    pub fn register_basic(service: &mut BankService) {
        service
            .register_customer(new_customer("11111111111", "Ana Souza"))
            .expect("registering Ana");
        service
            .register_customer(new_customer("22222222222", "Bruno Lima"))
            .expect("registering Bruno");
    }
}
