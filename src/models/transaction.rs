//! Transaction model
//!
//! A transaction is one income or expense record. Imported records are kept
//! as close to the file as possible, so the id and kind are not validated.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::amount::Amount;
use super::date::EntryDate;

/// Category applied when none is given ("Other")
pub const DEFAULT_CATEGORY: &str = "기타";

/// Opaque transaction identifier
///
/// Unique by convention only: imports may bring in duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(String);

impl TransactionId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TransactionId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for TransactionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for TransactionId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whether money came in or went out
///
/// Unknown kinds from hand-edited files are preserved as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TransactionKind {
    Income,
    #[default]
    Expense,
    Other(String),
}

impl TransactionKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
            Self::Other(raw) => raw,
        }
    }

    pub fn is_income(&self) -> bool {
        matches!(self, Self::Income)
    }

    pub fn is_expense(&self) -> bool {
        matches!(self, Self::Expense)
    }
}

impl From<String> for TransactionKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "income" => Self::Income,
            "expense" => Self::Expense,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for TransactionKind {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<TransactionKind> for String {
    fn from(kind: TransactionKind) -> Self {
        match kind {
            TransactionKind::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

/// A single ledger record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Identifier, generated at creation
    pub id: TransactionId,

    /// Income or expense
    #[serde(rename = "type")]
    pub kind: TransactionKind,

    /// Non-negative amount; the effect is decided by `kind`
    pub amount: Amount,

    /// Free-form category label
    #[serde(default = "default_category")]
    pub category: String,

    /// Optional memo
    #[serde(default)]
    pub memo: String,

    /// Calendar date (`YYYY-MM-DD`)
    pub date: EntryDate,
}

impl Transaction {
    /// Create a new transaction with a fresh ID
    ///
    /// A blank category falls back to [`DEFAULT_CATEGORY`].
    pub fn new(
        kind: TransactionKind,
        amount: Amount,
        category: impl Into<String>,
        memo: impl Into<String>,
        date: EntryDate,
    ) -> Self {
        let category = category.into();
        Self {
            id: TransactionId::new(),
            kind,
            amount,
            category: if category.trim().is_empty() {
                default_category()
            } else {
                category
            },
            memo: memo.into(),
            date,
        }
    }

    /// Signed contribution to the category net: spending counts up,
    /// everything else counts down
    pub fn category_effect(&self) -> f64 {
        if self.kind.is_expense() {
            self.amount.value()
        } else {
            -self.amount.value()
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date, self.kind, self.category, self.amount
        )?;
        if !self.memo.is_empty() {
            write!(f, " ({})", self.memo)?;
        }
        Ok(())
    }
}
