use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{currency, dates};

/// Days between the last shoot day and the predicted job payment.
pub const JOB_PAYMENT_TERM_DAYS: i64 = 30;
/// Days between the test date and the predicted test-fee payment.
pub const TEST_PAYMENT_TERM_DAYS: i64 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CastingStatus {
    InProgress,
    Approved,
    NotApproved,
}

impl Default for CastingStatus {
    fn default() -> Self {
        CastingStatus::InProgress
    }
}

/// One audition/booking opportunity, tracked from presentation to payment.
///
/// `date_shooting` is an ordered, duplicate-free set; it must be non-empty
/// before a casting can be saved. Castings are never deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Casting {
    pub id: Uuid,
    pub client: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub production_company: Option<String>,
    pub agency: String,
    #[serde(default)]
    pub booker: String,
    #[serde(default)]
    pub exclusivity: String,
    #[serde(default)]
    pub usage_period: String,
    pub fee_job: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_job_payment: Option<NaiveDate>,
    pub has_test_fee: bool,
    #[serde(default)]
    pub fee_test: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_test_payment: Option<NaiveDate>,
    pub date_casting: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_test: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_callback: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_ppm: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_fitting: Option<NaiveDate>,
    pub date_shooting: Vec<NaiveDate>,
    pub status: CastingStatus,
    pub is_edited: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Casting {
    pub fn new(
        client: impl Into<String>,
        agency: impl Into<String>,
        date_casting: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            client: client.into(),
            production_company: None,
            agency: agency.into(),
            booker: String::new(),
            exclusivity: String::new(),
            usage_period: String::new(),
            fee_job: 0.0,
            date_job_payment: None,
            has_test_fee: false,
            fee_test: 0.0,
            date_test_payment: None,
            date_casting,
            date_test: None,
            date_callback: None,
            date_ppm: None,
            date_fitting: None,
            date_shooting: Vec::new(),
            status: CastingStatus::InProgress,
            is_edited: false,
            notes: None,
        }
    }

    /// Inserts a shoot date, silently rejecting duplicates. Refreshes the
    /// predicted job-payment date.
    pub fn add_shooting_date(&mut self, date: NaiveDate) -> bool {
        if self.date_shooting.contains(&date) {
            return false;
        }
        self.date_shooting.push(date);
        self.date_shooting.sort();
        self.refresh_job_payment_prediction();
        true
    }

    pub fn remove_shooting_date(&mut self, date: NaiveDate) {
        self.date_shooting.retain(|d| *d != date);
        self.refresh_job_payment_prediction();
    }

    /// Sets the test/selftape date and refreshes the predicted test payment.
    pub fn set_test_date(&mut self, date: Option<NaiveDate>) {
        self.date_test = date;
        if let Some(test) = date {
            self.date_test_payment = Some(dates::add_days(test, TEST_PAYMENT_TERM_DAYS));
        }
    }

    /// Coerces currency text into the gross job fee (lenient, never fails).
    pub fn set_fee_job_input(&mut self, input: &str) {
        self.fee_job = currency::parse_lenient(input);
    }

    pub fn set_fee_test_input(&mut self, input: &str) {
        self.fee_test = currency::parse_lenient(input);
    }

    pub fn last_shooting_date(&self) -> Option<NaiveDate> {
        self.date_shooting.iter().max().copied()
    }

    /// Recomputes `date_job_payment` from the latest shoot day. The value is a
    /// default the user may overwrite afterwards by assigning the field.
    pub fn refresh_job_payment_prediction(&mut self) {
        if let Some(last) = self.last_shooting_date() {
            self.date_job_payment = Some(dates::add_days(last, JOB_PAYMENT_TERM_DAYS));
        }
    }

    pub fn is_approved(&self) -> bool {
        self.status == CastingStatus::Approved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dates::parse_date;

    #[test]
    fn shooting_dates_stay_ordered_and_unique() {
        let mut casting = Casting::new("Filme Y", "Elenco Top", parse_date("2024-03-01").unwrap());
        assert!(casting.add_shooting_date(parse_date("2024-04-12").unwrap()));
        assert!(casting.add_shooting_date(parse_date("2024-04-10").unwrap()));
        assert!(!casting.add_shooting_date(parse_date("2024-04-10").unwrap()));
        assert_eq!(
            casting.date_shooting,
            vec![
                parse_date("2024-04-10").unwrap(),
                parse_date("2024-04-12").unwrap()
            ]
        );
    }

    #[test]
    fn adding_shoot_dates_predicts_job_payment() {
        let mut casting = Casting::new("Banco X", "Agência Models", parse_date("2024-02-10").unwrap());
        casting.add_shooting_date(parse_date("2024-02-20").unwrap());
        casting.add_shooting_date(parse_date("2024-02-21").unwrap());
        assert_eq!(casting.date_job_payment, Some(parse_date("2024-03-22").unwrap()));
    }

    #[test]
    fn test_date_predicts_test_payment() {
        let mut casting = Casting::new("Banco X", "Agência Models", parse_date("2024-02-10").unwrap());
        casting.set_test_date(Some(parse_date("2024-02-10").unwrap()));
        assert_eq!(casting.date_test_payment, Some(parse_date("2024-02-25").unwrap()));
    }

    #[test]
    fn fee_inputs_are_lenient() {
        let mut casting = Casting::new("Banco X", "Agência Models", parse_date("2024-02-10").unwrap());
        casting.set_fee_job_input("R$ 5000");
        assert_eq!(casting.fee_job, 5000.0);
        casting.set_fee_job_input("5000,50");
        assert_eq!(casting.fee_job, 5000.50);
        casting.set_fee_test_input("n/a");
        assert_eq!(casting.fee_test, 0.0);
    }
}
