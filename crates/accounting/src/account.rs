use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use ledgerlab_core::{DomainError, DomainResult, Entity, Rule, non_blank};

/// Account number (unique within a ledger, immutable).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountNumber(String);

impl AccountNumber {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = non_blank("account_number", value)?;
        Ok(Self(value.trim().to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl core::str::FromStr for AccountNumber {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// How an account reacts to a withdrawal larger than its balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WithdrawalPolicy {
    /// Fail the operation with `InsufficientFunds`.
    Strict,
    /// Emit a warning, leave the balance untouched and report `Declined`.
    ReportAndIgnore,
}

impl WithdrawalPolicy {
    /// Product label of the account variant carrying this policy.
    pub fn account_kind(self) -> &'static str {
        match self {
            WithdrawalPolicy::Strict => "checking",
            WithdrawalPolicy::ReportAndIgnore => "savings",
        }
    }
}

/// Result of a withdrawal that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum WithdrawalOutcome {
    Completed { balance: Decimal },
    /// Only produced under `WithdrawalPolicy::ReportAndIgnore`.
    Declined {
        requested: Decimal,
        available: Decimal,
    },
}

impl WithdrawalOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, WithdrawalOutcome::Completed { .. })
    }
}

/// A single balance holder.
///
/// The balance is never negative and only changes through `deposit`/`withdraw`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    number: AccountNumber,
    owner: String,
    balance: Decimal,
    policy: WithdrawalPolicy,
}

impl Account {
    pub fn new(
        number: AccountNumber,
        owner: impl Into<String>,
        opening_balance: Decimal,
        policy: WithdrawalPolicy,
    ) -> DomainResult<Self> {
        let balance = Rule::NonNegative.check("opening_balance", opening_balance)?;
        Ok(Self {
            number,
            owner: owner.into(),
            balance,
            policy,
        })
    }

    /// Checking account: insufficient funds is an error.
    pub fn checking(
        number: AccountNumber,
        owner: impl Into<String>,
        opening_balance: Decimal,
    ) -> DomainResult<Self> {
        Self::new(number, owner, opening_balance, WithdrawalPolicy::Strict)
    }

    /// Savings account: insufficient funds is reported and ignored.
    pub fn savings(
        number: AccountNumber,
        owner: impl Into<String>,
        opening_balance: Decimal,
    ) -> DomainResult<Self> {
        Self::new(number, owner, opening_balance, WithdrawalPolicy::ReportAndIgnore)
    }

    pub fn number(&self) -> &AccountNumber {
        &self.number
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn policy(&self) -> WithdrawalPolicy {
        self.policy
    }

    pub fn kind(&self) -> &'static str {
        self.policy.account_kind()
    }

    /// Add a positive amount; returns the new balance.
    ///
    /// A deposit that would overflow the balance is rejected and leaves it unchanged.
    pub fn deposit(&mut self, amount: Decimal) -> DomainResult<Decimal> {
        let amount = Rule::Positive.check("deposit", amount)?;
        self.balance = self.balance.checked_add(amount).ok_or_else(|| {
            DomainError::validation("balance", format!("depositing {amount} would overflow"))
        })?;
        tracing::debug!(
            account = %self.number,
            %amount,
            balance = %self.balance,
            "deposit applied"
        );
        Ok(self.balance)
    }

    /// Subtract a positive amount, subject to the account's withdrawal policy.
    pub fn withdraw(&mut self, amount: Decimal) -> DomainResult<WithdrawalOutcome> {
        let amount = Rule::Positive.check("withdrawal", amount)?;

        if amount > self.balance {
            return match self.policy {
                WithdrawalPolicy::Strict => {
                    Err(DomainError::insufficient_funds(amount, self.balance))
                }
                WithdrawalPolicy::ReportAndIgnore => {
                    tracing::warn!(
                        account = %self.number,
                        requested = %amount,
                        available = %self.balance,
                        "insufficient funds; withdrawal declined"
                    );
                    Ok(WithdrawalOutcome::Declined {
                        requested: amount,
                        available: self.balance,
                    })
                }
            };
        }

        self.balance -= amount;
        tracing::info!(
            account = %self.number,
            kind = self.kind(),
            %amount,
            balance = %self.balance,
            "withdrawal successful"
        );
        Ok(WithdrawalOutcome::Completed {
            balance: self.balance,
        })
    }
}

impl Entity for Account {
    type Id = AccountNumber;

    fn id(&self) -> &Self::Id {
        &self.number
    }
}

impl core::fmt::Display for Account {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} ({}) - Balance: {:.2}",
            self.owner, self.number, self.balance
        )
    }
}
