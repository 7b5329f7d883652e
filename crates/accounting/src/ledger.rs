use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use ledgerlab_core::{DomainError, DomainResult};

use crate::account::{Account, AccountNumber, WithdrawalOutcome, WithdrawalPolicy};
use crate::processor::ProcessorRegistry;
use crate::transaction::{Transaction, TransactionKind};

/// Financial effect of a processed transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum Settlement {
    Deposited { balance: Decimal },
    Withdrawn(WithdrawalOutcome),
    /// Transfers are announced and recorded; no balance moves.
    TransferRecorded,
}

/// Ledger application: owns the accounts, the processor registry and the
/// transaction history.
///
/// Every mutation goes through `&mut self`, so a ledger shared between threads
/// needs an outer lock (one writer at a time per ledger).
#[derive(Debug)]
pub struct Ledger {
    registry: ProcessorRegistry,
    accounts: BTreeMap<AccountNumber, Account>,
    history: Vec<Transaction>,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new(ProcessorRegistry::standard())
    }
}

impl Ledger {
    pub fn new(registry: ProcessorRegistry) -> Self {
        Self {
            registry,
            accounts: BTreeMap::new(),
            history: Vec::new(),
        }
    }

    /// Open an account; the number must not already exist in this ledger.
    pub fn create_account(
        &mut self,
        number: AccountNumber,
        owner: impl Into<String>,
        opening_balance: Decimal,
        policy: WithdrawalPolicy,
    ) -> DomainResult<&Account> {
        if self.accounts.contains_key(&number) {
            return Err(DomainError::conflict(format!(
                "account {number} already exists"
            )));
        }

        let account = Account::new(number.clone(), owner, opening_balance, policy)?;
        tracing::info!(
            account = %number,
            kind = account.kind(),
            opening_balance = %account.balance(),
            "account created"
        );
        Ok(self.accounts.entry(number).or_insert(account))
    }

    pub fn account(&self, number: &AccountNumber) -> DomainResult<&Account> {
        self.accounts
            .get(number)
            .ok_or_else(|| DomainError::account_not_found(number))
    }

    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }

    pub fn deposit(&mut self, number: &AccountNumber, amount: Decimal) -> DomainResult<Decimal> {
        self.account_mut(number)?.deposit(amount)
    }

    pub fn withdraw(
        &mut self,
        number: &AccountNumber,
        amount: Decimal,
    ) -> DomainResult<WithdrawalOutcome> {
        self.account_mut(number)?.withdraw(amount)
    }

    /// Dispatch `transaction` to its processor, then apply its balance effect.
    ///
    /// A missing processor, a missing account, or a processor veto aborts before
    /// anything changes. Once the processor has accepted, the transaction is
    /// recorded in the history whether or not the balance effect succeeds; a
    /// failed effect is still returned to the caller.
    pub fn process(
        &mut self,
        number: &AccountNumber,
        transaction: Transaction,
    ) -> DomainResult<Settlement> {
        let processor = self.registry.resolve(transaction.kind())?;
        let account = self
            .accounts
            .get_mut(number)
            .ok_or_else(|| DomainError::account_not_found(number))?;

        processor.process(account, &transaction)?;

        let settlement = match transaction.kind() {
            TransactionKind::Deposit => account
                .deposit(transaction.amount())
                .map(|balance| Settlement::Deposited { balance }),
            TransactionKind::Withdrawal => account
                .withdraw(transaction.amount())
                .map(Settlement::Withdrawn),
            TransactionKind::Transfer => match transaction.counterparty() {
                Some(to) => {
                    // TODO: two-account debit/credit once transfers settle between ledger accounts.
                    tracing::info!(
                        from = %number,
                        to = %to,
                        amount = %transaction.amount(),
                        "transfer recorded without balance effect"
                    );
                    Ok(Settlement::TransferRecorded)
                }
                None => Err(DomainError::validation(
                    "counterparty",
                    "required for transfers",
                )),
            },
        };

        if let Err(err) = &settlement {
            tracing::warn!(
                account = %number,
                transaction = %transaction.id(),
                kind = %transaction.kind(),
                error = %err,
                "balance effect failed"
            );
        }

        self.history.push(transaction);
        settlement
    }

    /// Every transaction accepted by a processor, in processing order.
    pub fn history(&self) -> &[Transaction] {
        &self.history
    }

    fn account_mut(&mut self, number: &AccountNumber) -> DomainResult<&mut Account> {
        self.accounts
            .get_mut(number)
            .ok_or_else(|| DomainError::account_not_found(number))
    }
}
