use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;

use crate::application::{BankConfig, BankService, NewCustomer};
use crate::domain::{Cents, DEFAULT_BRANCH, format_cents, parse_birth_date, parse_cents};

/// Sportello - single-branch bank teller console
#[derive(Parser)]
#[command(name = "sportello")]
#[command(about = "An interactive teller console for a single-branch bank")]
#[command(version)]
pub struct Cli {
    /// Per-withdrawal limit (e.g., "500.00" or "500")
    #[arg(long, default_value = "500.00")]
    pub limit: String,

    /// Maximum number of withdrawals per session
    #[arg(long, default_value_t = 3)]
    pub max_withdrawals: u32,

    /// Branch code printed on account listings
    #[arg(long, default_value = DEFAULT_BRANCH)]
    pub branch: String,
}

const MENU: &str = "
[d]  Deposit
[w]  Withdraw
[s]  Statement
[nc] New customer
[na] New account
[la] List accounts
[q]  Quit
=> ";

impl Cli {
    pub fn run(self) -> Result<()> {
        let withdrawal_limit = parse_cents(&self.limit)
            .context("Invalid withdrawal limit. Use '500.00' or '500'")?;

        let config = BankConfig {
            branch: self.branch,
            withdrawal_limit,
            max_withdrawals: self.max_withdrawals,
        };
        let mut service = BankService::new(config);

        let stdin = io::stdin();
        let mut input = stdin.lock();

        loop {
            // EOF on stdin ends the session like an explicit quit.
            let Some(choice) = prompt(&mut input, MENU)? else {
                break;
            };

            match choice.as_str() {
                "d" => run_deposit(&mut service, &mut input)?,
                "w" => run_withdraw(&mut service, &mut input)?,
                "s" => run_statement(&service),
                "nc" => run_new_customer(&mut service, &mut input)?,
                "na" => run_new_account(&mut service, &mut input)?,
                "la" => run_list_accounts(&service),
                "q" => break,
                _ => println!("\nInvalid operation, please select one of the listed options."),
            }
        }

        println!("\nThank you for banking with us. Goodbye!");
        Ok(())
    }
}

/// Print `label`, flush, and read one trimmed line.
/// Returns `None` when stdin is exhausted.
fn prompt(input: &mut impl BufRead, label: &str) -> Result<Option<String>> {
    print!("{label}");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("Failed to read input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompt for a monetary amount; `None` means EOF or malformed input.
/// A malformed amount is reported here and never reaches the ledger.
fn prompt_amount(input: &mut impl BufRead, label: &str) -> Result<Option<Cents>> {
    let Some(raw) = prompt(input, label)? else {
        return Ok(None);
    };
    match parse_cents(&raw) {
        Ok(amount) => Ok(Some(amount)),
        Err(_) => {
            println!("\nInvalid amount format. Use '50.00' or '50'.");
            Ok(None)
        }
    }
}

fn run_deposit(service: &mut BankService, input: &mut impl BufRead) -> Result<()> {
    let Some(amount) = prompt_amount(input, "Amount to deposit: ")? else {
        return Ok(());
    };

    match service.deposit(amount) {
        Ok(receipt) => println!(
            "\n=== Deposit successful. Balance: R$ {} ===",
            format_cents(receipt.balance)
        ),
        Err(err) => println!("\nOperation failed: {err}."),
    }
    Ok(())
}

fn run_withdraw(service: &mut BankService, input: &mut impl BufRead) -> Result<()> {
    let Some(amount) = prompt_amount(input, "Amount to withdraw: ")? else {
        return Ok(());
    };

    match service.withdraw(amount) {
        Ok(receipt) => println!(
            "\n=== Withdrawal successful. Balance: R$ {} ===",
            format_cents(receipt.balance)
        ),
        Err(err) => println!("\nOperation failed: {err}."),
    }
    Ok(())
}

fn run_statement(service: &BankService) {
    let view = service.statement();

    println!("\n================ STATEMENT ================");
    if view.lines.is_empty() {
        println!("No transactions recorded.");
    } else {
        for line in &view.lines {
            println!("{line}");
        }
    }
    println!("\nBalance: R$ {}", format_cents(view.balance));
    println!("===========================================");
}

fn run_new_customer(service: &mut BankService, input: &mut impl BufRead) -> Result<()> {
    let Some(cpf) = prompt(input, "Enter the CPF (numbers only): ")? else {
        return Ok(());
    };

    // Bail out before asking for the remaining fields.
    if service.find_customer(&cpf).is_some() {
        println!("\nOperation failed: a customer with this CPF already exists.");
        return Ok(());
    }

    let Some(name) = prompt(input, "Enter the full name: ")? else {
        return Ok(());
    };
    let Some(raw_date) = prompt(input, "Enter the birth date (dd-mm-yyyy): ")? else {
        return Ok(());
    };
    let birth_date = match parse_birth_date(&raw_date) {
        Ok(date) => date,
        Err(_) => {
            println!("\nInvalid date format. Use dd-mm-yyyy, e.g. 21-03-1990.");
            return Ok(());
        }
    };

    let Some(street) = prompt(input, "Enter the street: ")? else {
        return Ok(());
    };
    let Some(number) = prompt(input, "Enter the house number: ")? else {
        return Ok(());
    };
    let Some(district) = prompt(input, "Enter the district: ")? else {
        return Ok(());
    };
    let Some(city) = prompt(input, "Enter the city/state (e.g. Sao Paulo/SP): ")? else {
        return Ok(());
    };
    let address = format!("{street}, {number} - {district} - {city}");

    match service.register_customer(NewCustomer {
        cpf,
        name,
        birth_date,
        address,
    }) {
        Ok(_) => println!("\n=== Customer registered successfully. ==="),
        Err(err) => println!("\nOperation failed: {err}."),
    }
    Ok(())
}

fn run_new_account(service: &mut BankService, input: &mut impl BufRead) -> Result<()> {
    let Some(cpf) = prompt(input, "Enter the holder's CPF: ")? else {
        return Ok(());
    };

    match service.open_account(&cpf) {
        Ok(opened) => println!(
            "\n=== Account {} created successfully for {}. ===",
            opened.number, opened.holder_name
        ),
        Err(err) => println!("\nOperation failed: {err}."),
    }
    Ok(())
}

fn run_list_accounts(service: &BankService) {
    if service.list_accounts().next().is_none() {
        println!("\nNo accounts registered.");
        return;
    }

    println!("\n============== ACCOUNTS ==============");
    for entry in service.list_accounts() {
        println!("Branch:  {}", entry.account.branch);
        println!("Account: {}", entry.account.number);
        println!("Holder:  {}", entry.holder.name);
        println!("--------------------------------------");
    }
}
