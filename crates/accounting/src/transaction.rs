use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use ledgerlab_core::{TransactionId, ValueObject};

use crate::account::AccountNumber;

/// Kind of monetary event; the key of the processor registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
    Transfer,
}

impl TransactionKind {
    pub const ALL: [TransactionKind; 3] = [
        TransactionKind::Deposit,
        TransactionKind::Withdrawal,
        TransactionKind::Transfer,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TransactionKind::Deposit => "deposit",
            TransactionKind::Withdrawal => "withdrawal",
            TransactionKind::Transfer => "transfer",
        }
    }
}

impl core::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable record of a monetary event.
///
/// Construction does not validate `amount`; the deposit or withdrawal that later
/// applies the transaction does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    id: TransactionId,
    amount: Decimal,
    kind: TransactionKind,
    occurred_at: DateTime<Utc>,
    description: String,
    counterparty: Option<AccountNumber>,
}

impl Transaction {
    pub fn new(amount: Decimal, kind: TransactionKind, description: impl Into<String>) -> Self {
        Self {
            id: TransactionId::new(),
            amount,
            kind,
            occurred_at: Utc::now(),
            description: description.into(),
            counterparty: None,
        }
    }

    pub fn deposit(amount: Decimal, description: impl Into<String>) -> Self {
        Self::new(amount, TransactionKind::Deposit, description)
    }

    pub fn withdrawal(amount: Decimal, description: impl Into<String>) -> Self {
        Self::new(amount, TransactionKind::Withdrawal, description)
    }

    pub fn transfer(
        amount: Decimal,
        counterparty: AccountNumber,
        description: impl Into<String>,
    ) -> Self {
        Self {
            counterparty: Some(counterparty),
            ..Self::new(amount, TransactionKind::Transfer, description)
        }
    }

    pub fn id(&self) -> TransactionId {
        self.id
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn counterparty(&self) -> Option<&AccountNumber> {
        self.counterparty.as_ref()
    }
}

impl ValueObject for Transaction {}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn construction_does_not_check_the_amount() {
        let tx = Transaction::deposit(dec!(-10), "refund reversal");
        assert_eq!(tx.amount(), dec!(-10));
        assert_eq!(tx.kind(), TransactionKind::Deposit);
    }

    #[test]
    fn transfer_carries_its_counterparty() {
        let to = AccountNumber::new("003").unwrap();
        let tx = Transaction::transfer(dec!(25), to.clone(), "rent split");
        assert_eq!(tx.counterparty(), Some(&to));
        assert_eq!(tx.kind(), TransactionKind::Transfer);
    }

    #[test]
    fn each_record_gets_its_own_id_and_timestamp() {
        let before = Utc::now();
        let first = Transaction::withdrawal(dec!(5), "snacks");
        let second = Transaction::withdrawal(dec!(5), "snacks");
        assert_ne!(first.id(), second.id());
        assert!(first.occurred_at() >= before);
    }

    #[test]
    fn kinds_display_lowercase() {
        assert_eq!(TransactionKind::Withdrawal.to_string(), "withdrawal");
    }
}
