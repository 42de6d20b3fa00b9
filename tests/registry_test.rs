mod common;

use anyhow::Result;
use common::{StandardCustomers, new_customer, test_service};
use sportello::application::AppError;

#[test]
fn test_register_and_find_customer() -> Result<()> {
    let mut service = test_service();
    StandardCustomers::register_basic(&mut service);

    let ana = service.find_customer("11111111111").expect("Ana exists");
    assert_eq!(ana.name, "Ana Souza");
    assert_eq!(ana.birth_date, common::birth_date("21-03-1990"));
    assert!(service.find_customer("99999999999").is_none());
    Ok(())
}

#[test]
fn test_duplicate_cpf_keeps_first_record() {
    let mut service = test_service();
    service
        .register_customer(new_customer("11111111111", "Ana Souza"))
        .unwrap();

    let err = service
        .register_customer(new_customer("11111111111", "Impostor"))
        .unwrap_err();
    assert!(matches!(err, AppError::CustomerAlreadyExists(_)));

    // The registry still holds exactly the first record.
    assert_eq!(service.customer_count(), 1);
    let found = service.find_customer("11111111111").unwrap();
    assert_eq!(found.name, "Ana Souza");
}

#[test]
fn test_failed_open_does_not_consume_a_number() {
    let mut service = test_service();
    StandardCustomers::register_basic(&mut service);

    let err = service.open_account("99999999999").unwrap_err();
    assert!(matches!(err, AppError::CustomerNotFound(_)));

    // The next successful open still gets number 1.
    let opened = service.open_account("11111111111").unwrap();
    assert_eq!(opened.number, 1);
}

#[test]
fn test_accounts_are_numbered_sequentially() {
    let mut service = test_service();
    StandardCustomers::register_basic(&mut service);

    assert_eq!(service.open_account("11111111111").unwrap().number, 1);
    assert_eq!(service.open_account("22222222222").unwrap().number, 2);
    assert_eq!(service.open_account("11111111111").unwrap().number, 3);
}

#[test]
fn test_open_links_the_exact_customer() {
    let mut service = test_service();
    StandardCustomers::register_basic(&mut service);

    let opened = service.open_account("22222222222").unwrap();
    assert_eq!(opened.holder_name, "Bruno Lima");
    assert_eq!(opened.branch, "0001");

    let entries: Vec<_> = service.list_accounts().collect();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].holder.cpf, "22222222222");
    assert_eq!(entries[0].account.holder, "22222222222");
    assert_eq!(entries[0].account.balance(), 0);
}

#[test]
fn test_listing_when_empty_yields_nothing() {
    let service = test_service();
    assert_eq!(service.list_accounts().count(), 0);
}

#[test]
fn test_one_customer_can_hold_many_accounts() {
    let mut service = test_service();
    StandardCustomers::register_basic(&mut service);

    service.open_account("11111111111").unwrap();
    service.open_account("11111111111").unwrap();

    let holders: Vec<_> = service
        .list_accounts()
        .map(|entry| entry.holder.name.clone())
        .collect();
    assert_eq!(holders, vec!["Ana Souza", "Ana Souza"]);
}
