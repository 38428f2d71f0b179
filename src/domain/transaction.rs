use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    Income,
    Expense,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    Paid,
    Pending,
}

/// One ledger entry. The amount is always non-negative; direction is carried
/// solely by `kind`. Entries are never deleted and only `mark_paid` mutates
/// them after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub date: NaiveDate,
    pub description: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub category: String,
    pub partner: String,
    pub status: TransactionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_casting_id: Option<Uuid>,
    #[serde(default)]
    pub is_recurrent: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Transaction {
    pub fn new(
        date: NaiveDate,
        description: impl Into<String>,
        amount: f64,
        kind: TransactionType,
        category: impl Into<String>,
        partner: impl Into<String>,
        status: TransactionStatus,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            description: description.into(),
            amount,
            kind,
            category: category.into(),
            partner: partner.into(),
            status,
            origin_casting_id: None,
            is_recurrent: false,
            notes: None,
        }
    }

    /// Pending income derived from an approved casting.
    pub fn pending_income(
        date: NaiveDate,
        description: impl Into<String>,
        amount: f64,
        category: impl Into<String>,
        partner: impl Into<String>,
        origin_casting_id: Uuid,
    ) -> Self {
        let mut txn = Self::new(
            date,
            description,
            amount,
            TransactionType::Income,
            category,
            partner,
            TransactionStatus::Pending,
        );
        txn.origin_casting_id = Some(origin_casting_id);
        txn
    }

    /// Manually entered expense, recorded as already paid.
    pub fn paid_expense(
        date: NaiveDate,
        description: impl Into<String>,
        amount: f64,
        category: impl Into<String>,
        partner: impl Into<String>,
    ) -> Self {
        Self::new(
            date,
            description,
            amount,
            TransactionType::Expense,
            category,
            partner,
            TransactionStatus::Paid,
        )
    }

    pub fn mark_paid(&mut self) {
        self.status = TransactionStatus::Paid;
    }

    /// Overdue is derived, never stored: pending income dated before `today`.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.kind == TransactionType::Income
            && self.status == TransactionStatus::Pending
            && self.date < today
    }
}
