//! Transaction processors and the kind-to-processor dispatch table.
//!
//! A processor announces (and may veto) a transaction. It never touches the
//! account balance; the ledger applies the financial effect afterwards.

use std::collections::HashMap;

use ledgerlab_core::{DomainError, DomainResult};

use crate::account::Account;
use crate::transaction::{Transaction, TransactionKind};

/// Handles one transaction kind.
///
/// Returning an error rejects the transaction before any balance change.
pub trait TransactionProcessor: Send + Sync {
    /// Stable processor name (used in logs).
    fn name(&self) -> &'static str;

    fn process(&self, account: &Account, transaction: &Transaction) -> DomainResult<()>;
}

/// Bank transfer rail.
#[derive(Debug, Default, Clone, Copy)]
pub struct BankTransferProcessor;

impl TransactionProcessor for BankTransferProcessor {
    fn name(&self) -> &'static str {
        "bank_transfer"
    }

    fn process(&self, account: &Account, transaction: &Transaction) -> DomainResult<()> {
        tracing::info!(
            processor = self.name(),
            account = %account.number(),
            amount = %transaction.amount(),
            description = transaction.description(),
            "processing bank transfer"
        );
        Ok(())
    }
}

/// Mobile money rail.
#[derive(Debug, Default, Clone, Copy)]
pub struct MobileMoneyProcessor;

impl TransactionProcessor for MobileMoneyProcessor {
    fn name(&self) -> &'static str {
        "mobile_money"
    }

    fn process(&self, account: &Account, transaction: &Transaction) -> DomainResult<()> {
        tracing::info!(
            processor = self.name(),
            account = %account.number(),
            amount = %transaction.amount(),
            description = transaction.description(),
            "processing mobile money payment"
        );
        Ok(())
    }
}

/// Crypto wallet rail.
#[derive(Debug, Default, Clone, Copy)]
pub struct WalletProcessor;

impl TransactionProcessor for WalletProcessor {
    fn name(&self) -> &'static str {
        "wallet"
    }

    fn process(&self, account: &Account, transaction: &Transaction) -> DomainResult<()> {
        tracing::info!(
            processor = self.name(),
            account = %account.number(),
            amount = %transaction.amount(),
            counterparty = transaction.counterparty().map(|c| c.as_str()),
            description = transaction.description(),
            "processing wallet payment"
        );
        Ok(())
    }
}

/// Dispatch table from transaction kind to processor.
///
/// Built once (consuming `register` calls) and read-only afterwards.
#[derive(Default)]
pub struct ProcessorRegistry {
    processors: HashMap<TransactionKind, Box<dyn TransactionProcessor>>,
}

impl ProcessorRegistry {
    /// Registry with no processors; every lookup fails until kinds are registered.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Deposit → mobile money, Withdrawal → bank transfer, Transfer → wallet.
    pub fn standard() -> Self {
        Self::empty()
            .register(TransactionKind::Deposit, MobileMoneyProcessor)
            .register(TransactionKind::Withdrawal, BankTransferProcessor)
            .register(TransactionKind::Transfer, WalletProcessor)
    }

    /// Bind `processor` to `kind`, replacing any earlier binding.
    pub fn register(
        mut self,
        kind: TransactionKind,
        processor: impl TransactionProcessor + 'static,
    ) -> Self {
        self.processors.insert(kind, Box::new(processor));
        self
    }

    pub fn resolve(&self, kind: TransactionKind) -> DomainResult<&dyn TransactionProcessor> {
        self.processors
            .get(&kind)
            .map(|p| p.as_ref())
            .ok_or_else(|| DomainError::unknown_kind(kind))
    }
}

impl core::fmt::Debug for ProcessorRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut map = f.debug_map();
        for kind in TransactionKind::ALL {
            if let Some(p) = self.processors.get(&kind) {
                map.entry(&kind, &p.name());
            }
        }
        map.finish()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::account::AccountNumber;
    use rust_decimal_macros::dec;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Processor that counts its invocations.
    #[derive(Clone, Default)]
    pub(crate) struct CountingProcessor {
        pub(crate) calls: Arc<AtomicUsize>,
    }

    impl CountingProcessor {
        pub(crate) fn count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl TransactionProcessor for CountingProcessor {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn process(&self, _account: &Account, _transaction: &Transaction) -> DomainResult<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    /// Processor that vetoes everything.
    pub(crate) struct RejectingProcessor;

    impl TransactionProcessor for RejectingProcessor {
        fn name(&self) -> &'static str {
            "rejecting"
        }

        fn process(&self, _account: &Account, _transaction: &Transaction) -> DomainResult<()> {
            Err(DomainError::validation("transaction", "rejected by processor"))
        }
    }

    fn account() -> Account {
        Account::checking(AccountNumber::new("001").unwrap(), "Student", dec!(100)).unwrap()
    }

    #[test]
    fn standard_registry_covers_every_kind() {
        let registry = ProcessorRegistry::standard();
        let names: Vec<_> = TransactionKind::ALL
            .into_iter()
            .map(|kind| registry.resolve(kind).unwrap().name())
            .collect();
        assert_eq!(names, ["mobile_money", "bank_transfer", "wallet"]);
    }

    #[test]
    fn missing_kind_is_unknown_transaction_kind() {
        let registry =
            ProcessorRegistry::empty().register(TransactionKind::Deposit, WalletProcessor);
        let err = registry.resolve(TransactionKind::Transfer).err().unwrap();
        assert_eq!(err, DomainError::UnknownTransactionKind("transfer".to_string()));
    }

    #[test]
    fn dispatch_reaches_only_the_registered_processor() {
        let deposits = CountingProcessor::default();
        let withdrawals = CountingProcessor::default();
        let registry = ProcessorRegistry::empty()
            .register(TransactionKind::Deposit, deposits.clone())
            .register(TransactionKind::Withdrawal, withdrawals.clone());

        let account = account();
        let tx = Transaction::deposit(dec!(10), "salary");
        registry
            .resolve(tx.kind())
            .unwrap()
            .process(&account, &tx)
            .unwrap();

        assert_eq!(deposits.count(), 1);
        assert_eq!(withdrawals.count(), 0);
    }

    #[test]
    fn register_replaces_existing_binding() {
        let registry = ProcessorRegistry::empty()
            .register(TransactionKind::Deposit, WalletProcessor)
            .register(TransactionKind::Deposit, BankTransferProcessor);
        assert_eq!(
            registry.resolve(TransactionKind::Deposit).unwrap().name(),
            "bank_transfer"
        );
        assert_eq!(format!("{registry:?}"), r#"{Deposit: "bank_transfer"}"#);
    }
}
