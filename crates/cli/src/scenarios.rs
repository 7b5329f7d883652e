//! The five demo sessions run by the `ledgerlab` binary.
//!
//! Domain failures are logged and the session carries on; only I/O failures
//! are returned.

use anyhow::Context;
use rust_decimal::Decimal;

use ledgerlab_accounting::{AccountNumber, Ledger, Settlement, Transaction, WithdrawalPolicy};
use ledgerlab_core::{DomainResult, Entity, PatientId, Repository};
use ledgerlab_grading::{import_lines, read_grades, write_results};
use ledgerlab_healthcare::{Patient, Prescription, PrescriptionBook};
use ledgerlab_inventory::{ElectronicItem, GroceryItem};
use ledgerlab_products::{Product, ShoppingCart};

use crate::config::{AppConfig, SAMPLE_GRADES};

pub fn finance() -> anyhow::Result<()> {
    let mut ledger = Ledger::default();
    let savings = AccountNumber::new("002")?;
    if let Err(error) = ledger.create_account(
        savings.clone(),
        "Student",
        Decimal::from(1000),
        WithdrawalPolicy::ReportAndIgnore,
    ) {
        tracing::error!(%error, "finance session aborted");
        return Ok(());
    }

    let batch = [
        Transaction::deposit(Decimal::from(100), "Groceries"),
        Transaction::withdrawal(Decimal::from(200), "Utilities"),
        Transaction::withdrawal(Decimal::from(50), "Entertainment"),
    ];
    for transaction in batch {
        let description = transaction.description().to_string();
        match ledger.process(&savings, transaction) {
            Ok(settlement) => {
                let outcome = describe(&settlement);
                tracing::info!(%description, %outcome, "transaction processed");
            }
            Err(error) => tracing::warn!(%description, %error, "transaction failed"),
        }
    }

    for account in ledger.accounts() {
        tracing::info!(
            account = %account.id(),
            kind = account.kind(),
            balance = %account.balance(),
            "{account}"
        );
    }

    let history = serde_json::to_string(ledger.history()).context("serializing history")?;
    tracing::info!(
        transactions = ledger.history().len(),
        %history,
        "finance session complete"
    );
    Ok(())
}

/// Operator-facing summary of a settlement.
pub fn describe(settlement: &Settlement) -> String {
    match settlement {
        Settlement::Deposited { balance } => format!("deposited; balance {balance:.2}"),
        Settlement::Withdrawn(outcome) if outcome.is_completed() => {
            "withdrawal successful".to_string()
        }
        Settlement::Withdrawn(_) => "insufficient funds".to_string(),
        Settlement::TransferRecorded => "transfer recorded".to_string(),
    }
}

pub fn inventory() {
    let mut electronics = Repository::new();
    let mut groceries = Repository::new();

    for (name, qty) in [("Laptop", 10), ("Smartphone", 20)] {
        match ElectronicItem::new(name, qty) {
            Ok(item) => electronics.add(item),
            Err(error) => tracing::warn!(item = name, %error, "item rejected"),
        }
    }
    for (name, qty) in [("Apples", 50), ("Bananas", -5)] {
        match GroceryItem::new(name, qty) {
            Ok(item) => groceries.add(item),
            Err(error) => tracing::warn!(item = name, %error, "item rejected"),
        }
    }

    for item in electronics.iter() {
        tracing::info!("{item}");
    }
    for item in groceries.iter() {
        tracing::info!("{item}");
    }
}

pub fn healthcare() {
    if let Err(error) = try_healthcare() {
        tracing::error!(%error, "healthcare session aborted");
    }
}

fn try_healthcare() -> DomainResult<()> {
    let mut patients = Repository::new();
    let mut book = PrescriptionBook::new();

    let ibrahim = Patient::new(PatientId::new(), "Ibrahim", 25)?;
    let ama = Patient::new(PatientId::new(), "Ama", 32)?;

    book.prescribe(
        *ibrahim.id(),
        Prescription::new("Paracetamol", 10, "2 tablets daily")?,
    );
    book.prescribe(
        *ibrahim.id(),
        Prescription::new("Vitamin C", 20, "1 tablet daily")?,
    );
    book.prescribe(
        *ama.id(),
        Prescription::new("Amoxicillin", 15, "1 capsule every 8 hours")?,
    );

    patients.add(ibrahim);
    patients.add(ama);

    for patient in patients.all() {
        tracing::info!("{patient}");
        let prescriptions = book.for_patient(patient.id());
        if prescriptions.is_empty() {
            tracing::info!(patient = patient.name(), "no prescriptions found");
        }
        for prescription in prescriptions {
            tracing::info!(patient = patient.name(), "{prescription}");
        }
    }
    Ok(())
}

pub fn grading(config: &AppConfig) -> anyhow::Result<()> {
    let report = match &config.grades_input {
        Some(path) => read_grades(path)?,
        None => import_lines(SAMPLE_GRADES),
    };

    write_results(&config.grades_output, &report.students)?;
    tracing::info!(
        output = %config.grades_output.display(),
        graded = report.students.len(),
        skipped = report.rejected.len(),
        "grading complete"
    );
    Ok(())
}

pub fn store() {
    let electronics = [
        ("Laptop", Decimal::from(4500), 1),
        ("Headphones", Decimal::from(300), 2),
    ];
    let groceries = [
        ("Rice", Decimal::from(50), 5),
        ("Milk", Decimal::from(15), 10),
    ];

    for (label, lines) in [("electronics", electronics), ("grocery", groceries)] {
        let mut cart: ShoppingCart = ShoppingCart::new();
        for (name, price, qty) in lines {
            match Product::new(name, price, qty) {
                Ok(product) => cart.add_item(product),
                Err(error) => tracing::warn!(product = name, %error, "product rejected"),
            }
        }
        match cart.total_cost() {
            Ok(total) => tracing::info!(cart = label, %total, "{cart}"),
            Err(error) => tracing::warn!(cart = label, %error, "cart total unavailable"),
        }
    }
}
