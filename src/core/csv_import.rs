//! Best-effort CSV import of ledger rows. Malformed lines are skipped, never
//! reported as errors.

use crate::{
    dates,
    domain::{Transaction, TransactionStatus, TransactionType},
};

/// Columns, positionally: date, description, amount, direction keyword,
/// category, partner, status keyword. A header row is auto-detected by
/// "date"/"data" in the first line. Rows with fewer than five columns, a
/// non-numeric amount, or an unparseable date are dropped silently.
pub fn parse(input: &str) -> Vec<Transaction> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input.as_bytes());

    let has_header = input
        .lines()
        .next()
        .map(|line| {
            let lowered = line.to_lowercase();
            lowered.contains("date") || lowered.contains("data")
        })
        .unwrap_or(false);

    let mut imported = Vec::new();
    for (index, record) in reader.records().enumerate() {
        if index == 0 && has_header {
            continue;
        }
        let record = match record {
            Ok(record) => record,
            Err(_) => continue,
        };
        if record.len() < 5 {
            continue;
        }
        let amount: f64 = match record.get(2).unwrap_or("").trim().parse() {
            Ok(value) => value,
            Err(_) => continue,
        };
        let date = match dates::parse_date(record.get(0).unwrap_or("").trim()) {
            Ok(date) => date,
            Err(_) => continue,
        };
        let description = record.get(1).unwrap_or("").trim().to_string();
        let kind = if record
            .get(3)
            .unwrap_or("")
            .trim()
            .to_lowercase()
            .contains("saída")
        {
            TransactionType::Expense
        } else {
            TransactionType::Income
        };
        let category = match record.get(4).map(str::trim) {
            Some(value) if !value.is_empty() => value.to_string(),
            _ => "Geral".to_string(),
        };
        let partner = match record.get(5).map(str::trim) {
            Some(value) if !value.is_empty() => value.to_string(),
            _ => "Desconhecido".to_string(),
        };
        let status = if record
            .get(6)
            .unwrap_or("")
            .trim()
            .to_lowercase()
            .contains("pendente")
        {
            TransactionStatus::Pending
        } else {
            TransactionStatus::Paid
        };

        imported.push(Transaction::new(
            date,
            description,
            amount.abs(),
            kind,
            category,
            partner,
            status,
        ));
    }
    imported
}
