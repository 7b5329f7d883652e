//! Accounting module: accounts, transactions, processor dispatch and the ledger.
//!
//! Pure in-memory domain logic: no IO, no persistence. Diagnostics go through
//! `tracing`.

pub mod account;
pub mod ledger;
pub mod processor;
pub mod transaction;

pub use account::{Account, AccountNumber, WithdrawalOutcome, WithdrawalPolicy};
pub use ledger::{Ledger, Settlement};
pub use processor::{
    BankTransferProcessor, MobileMoneyProcessor, ProcessorRegistry, TransactionProcessor,
    WalletProcessor,
};
pub use transaction::{Transaction, TransactionKind};
