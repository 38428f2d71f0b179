//! Period filtering and the aggregations behind every report view: dashboard
//! stats, ledger, consolidated monthly table, seasonality, and funnel counts.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::Serialize;

use crate::{
    dates::{self, PeriodSelector, YearFilter},
    domain::{Casting, CastingStatus, Transaction, TransactionStatus, TransactionType},
};

/// Year + sub-period selection applied to both collections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PeriodFilter {
    pub year: YearFilter,
    pub period: PeriodSelector,
}

impl PeriodFilter {
    pub fn new(year: YearFilter, period: PeriodSelector) -> Self {
        Self { year, period }
    }

    pub fn matches(&self, date: NaiveDate) -> bool {
        self.year.matches(dates::year_of(date))
            && self.period.contains(dates::month_index_of(date))
    }
}

/// Filtered ledger entries, most recent first.
pub fn filter_transactions(transactions: &[Transaction], filter: &PeriodFilter) -> Vec<Transaction> {
    let mut filtered: Vec<Transaction> = transactions
        .iter()
        .filter(|t| filter.matches(t.date))
        .cloned()
        .collect();
    filtered.sort_by(|a, b| b.date.cmp(&a.date));
    filtered
}

/// Filtered castings, most recent presentation date first.
pub fn filter_castings(castings: &[Casting], filter: &PeriodFilter) -> Vec<Casting> {
    let mut filtered: Vec<Casting> = castings
        .iter()
        .filter(|c| filter.matches(c.date_casting))
        .cloned()
        .collect();
    filtered.sort_by(|a, b| b.date_casting.cmp(&a.date_casting));
    filtered
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SummaryStats {
    pub total_income: f64,
    pub total_expense: f64,
    pub balance: f64,
    pub pending_income: f64,
    pub overdue_income: f64,
}

/// Cash-flow totals over an already-filtered transaction set. Paid entries
/// drive `total_income`/`total_expense`; pending income accumulates
/// separately, with the slice dated before `today` classified overdue.
pub fn summary_stats(transactions: &[Transaction], today: NaiveDate) -> SummaryStats {
    let mut stats = SummaryStats::default();
    for txn in transactions {
        match txn.kind {
            TransactionType::Income => match txn.status {
                TransactionStatus::Paid => stats.total_income += txn.amount,
                TransactionStatus::Pending => {
                    stats.pending_income += txn.amount;
                    if txn.date < today {
                        stats.overdue_income += txn.amount;
                    }
                }
            },
            TransactionType::Expense => {
                if txn.status == TransactionStatus::Paid {
                    stats.total_expense += txn.amount;
                }
            }
        }
    }
    stats.balance = stats.total_income - stats.total_expense;
    stats
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyBreakdown {
    /// 0-based calendar month.
    pub month: u32,
    pub name: &'static str,
    pub income_paid: f64,
    pub income_pending: f64,
    pub expense: f64,
    pub balance: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct GrandTotal {
    pub income_paid: f64,
    pub income_pending: f64,
    pub expense: f64,
    pub balance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsolidatedReport {
    pub months: Vec<MonthlyBreakdown>,
    pub total: GrandTotal,
}

/// Twelve-month breakdown of an already-filtered set, plus a grand-total row.
/// Balance per month counts pending income as expected inflow.
pub fn consolidated_monthly(transactions: &[Transaction]) -> ConsolidatedReport {
    let mut months = Vec::with_capacity(12);
    let mut total = GrandTotal::default();
    for month in 0u32..12 {
        let mut income_paid = 0.0;
        let mut income_pending = 0.0;
        let mut expense = 0.0;
        for txn in transactions
            .iter()
            .filter(|t| dates::month_index_of(t.date) == month)
        {
            match (txn.kind, txn.status) {
                (TransactionType::Income, TransactionStatus::Paid) => income_paid += txn.amount,
                (TransactionType::Income, TransactionStatus::Pending) => {
                    income_pending += txn.amount
                }
                (TransactionType::Expense, _) => expense += txn.amount,
            }
        }
        let balance = (income_paid + income_pending) - expense;
        total.income_paid += income_paid;
        total.income_pending += income_pending;
        total.expense += expense;
        total.balance += balance;
        months.push(MonthlyBreakdown {
            month,
            name: dates::month_name(month),
            income_paid,
            income_pending,
            expense,
            balance,
        });
    }
    ConsolidatedReport { months, total }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonalityPoint {
    pub month: u32,
    pub name: &'static str,
    pub income: f64,
}

/// Historical month performance: paid income summed across **all years**,
/// restricted to the months of the sub-period selector. Callers pass the
/// unfiltered collection — the year filter is ignored by design.
pub fn seasonality(transactions: &[Transaction], period: PeriodSelector) -> Vec<SeasonalityPoint> {
    let (start, end) = period.month_bounds();
    (start..=end)
        .map(|month| {
            let income = transactions
                .iter()
                .filter(|t| {
                    dates::month_index_of(t.date) == month
                        && t.kind == TransactionType::Income
                        && t.status == TransactionStatus::Paid
                })
                .map(|t| t.amount)
                .sum();
            SeasonalityPoint {
                month,
                name: dates::month_name(month),
                income,
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CastingStats {
    pub total: usize,
    pub approved: usize,
    pub edited: usize,
    pub not_approved: usize,
    /// Approved / total, in percent. Zero when there are no castings.
    pub conversion_rate: f64,
}

pub fn casting_stats(castings: &[Casting]) -> CastingStats {
    let total = castings.len();
    let approved = castings
        .iter()
        .filter(|c| c.status == CastingStatus::Approved)
        .count();
    let not_approved = castings
        .iter()
        .filter(|c| c.status == CastingStatus::NotApproved)
        .count();
    let edited = castings.iter().filter(|c| c.is_edited).count();
    let conversion_rate = if total == 0 {
        0.0
    } else {
        (approved as f64 / total as f64) * 100.0
    };
    CastingStats {
        total,
        approved,
        edited,
        not_approved,
        conversion_rate,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartnerStat {
    pub name: String,
    pub total_value: f64,
    pub count: usize,
    /// Approval rate of castings booked through this partner, when any exist.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_rate: Option<f64>,
}

/// Income grouped by partner, highest total first, enriched with the agency
/// approval rate where castings reference the partner.
pub fn partner_stats(transactions: &[Transaction], castings: &[Casting]) -> Vec<PartnerStat> {
    let mut stats: Vec<PartnerStat> = Vec::new();
    for txn in transactions
        .iter()
        .filter(|t| t.kind == TransactionType::Income)
    {
        match stats.iter().position(|s| s.name == txn.partner) {
            Some(index) => {
                stats[index].total_value += txn.amount;
                stats[index].count += 1;
            }
            None => stats.push(PartnerStat {
                name: txn.partner.clone(),
                total_value: txn.amount,
                count: 1,
                approval_rate: None,
            }),
        }
    }
    for stat in &mut stats {
        let booked: Vec<&Casting> = castings
            .iter()
            .filter(|c| c.agency == stat.name)
            .collect();
        if !booked.is_empty() {
            let approved = booked
                .iter()
                .filter(|c| c.status == CastingStatus::Approved)
                .count();
            stat.approval_rate = Some((approved as f64 / booked.len() as f64) * 100.0);
        }
    }
    stats.sort_by(|a, b| {
        b.total_value
            .partial_cmp(&a.total_value)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    stats
}

/// Distinct years present in either collection, newest first. The current
/// year is always offered so the filter never starts empty.
pub fn available_years(
    castings: &[Casting],
    transactions: &[Transaction],
    today: NaiveDate,
) -> Vec<i32> {
    let mut years = BTreeSet::new();
    years.insert(dates::year_of(today));
    for casting in castings {
        years.insert(dates::year_of(casting.date_casting));
    }
    for txn in transactions {
        years.insert(dates::year_of(txn.date));
    }
    years.into_iter().rev().collect()
}
