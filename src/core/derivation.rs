//! Converts a casting's transition into `approved` status into the pending
//! income entries the ledger expects.

use chrono::NaiveDate;

use crate::{
    dates,
    domain::{Casting, CastingStatus, Transaction, JOB_PAYMENT_TERM_DAYS, TEST_PAYMENT_TERM_DAYS},
};

pub const CATEGORY_JOB_FEE: &str = "Cachê Publicidade";
pub const CATEGORY_TEST_FEE: &str = "Cachê Teste";

/// True when `next` crosses into approved: a first save already approved, or
/// any edit whose stored predecessor was not approved. Re-saving a casting
/// that is already approved is not an edge, so nothing derives twice.
pub fn approval_edge(previous: Option<&Casting>, next: &Casting) -> bool {
    next.status == CastingStatus::Approved
        && previous.map_or(true, |prev| prev.status != CastingStatus::Approved)
}

/// Payment date for the job fee: the stored prediction/override when present,
/// otherwise last shoot day + 30. The fallback to `date_casting` covers a
/// casting saved without shoot days, which validation normally prevents.
fn job_payment_date(casting: &Casting) -> NaiveDate {
    if let Some(date) = casting.date_job_payment {
        return date;
    }
    let base = casting
        .last_shooting_date()
        .unwrap_or(casting.date_casting);
    dates::add_days(base, JOB_PAYMENT_TERM_DAYS)
}

fn test_payment_date(casting: &Casting) -> NaiveDate {
    if let Some(date) = casting.date_test_payment {
        return date;
    }
    let base = casting.date_test.unwrap_or(casting.date_casting);
    dates::add_days(base, TEST_PAYMENT_TERM_DAYS)
}

/// Transactions to append for a casting crossing the approval edge. The
/// stored payment dates are read as-is; they are never recomputed here, so a
/// user override made on the form is honored.
pub fn derive_transactions(casting: &Casting) -> Vec<Transaction> {
    let mut entries = vec![Transaction::pending_income(
        job_payment_date(casting),
        format!("Cachê Job: {}", casting.client),
        casting.fee_job,
        CATEGORY_JOB_FEE,
        casting.agency.clone(),
        casting.id,
    )];

    if casting.has_test_fee && casting.fee_test > 0.0 {
        entries.push(Transaction::pending_income(
            test_payment_date(casting),
            format!("Cachê Teste: {}", casting.client),
            casting.fee_test,
            CATEGORY_TEST_FEE,
            casting.agency.clone(),
            casting.id,
        ));
    }

    entries
}
