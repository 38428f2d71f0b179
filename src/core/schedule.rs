//! Flattens castings into the dated events the production calendar shows.
//! Grid rendering is presentation's job; this is the data feed.

use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use crate::{
    currency,
    domain::{Casting, CastingStatus},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleEventKind {
    Fitting,
    Ppm,
    Shooting,
    JobPayment,
    TestPayment,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleEvent {
    pub date: NaiveDate,
    pub kind: ScheduleEventKind,
    pub casting_id: Uuid,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Every fitting, PPM, and shoot day is always listed. Payment predictions
/// only show once they are plausible: the job payment for approved or
/// callback castings, the test payment for anything not yet refused outright.
pub fn events_for(castings: &[Casting]) -> Vec<ScheduleEvent> {
    let mut events = Vec::new();
    for casting in castings {
        if let Some(date) = casting.date_fitting {
            events.push(ScheduleEvent {
                date,
                kind: ScheduleEventKind::Fitting,
                casting_id: casting.id,
                label: format!("Prova: {}", casting.client),
                detail: None,
            });
        }
        if let Some(date) = casting.date_ppm {
            events.push(ScheduleEvent {
                date,
                kind: ScheduleEventKind::Ppm,
                casting_id: casting.id,
                label: format!("PPM: {}", casting.client),
                detail: None,
            });
        }
        for date in &casting.date_shooting {
            events.push(ScheduleEvent {
                date: *date,
                kind: ScheduleEventKind::Shooting,
                casting_id: casting.id,
                label: format!("Gravação: {}", casting.client),
                detail: None,
            });
        }
        if let Some(date) = casting.date_job_payment {
            if casting.is_approved() || casting.is_edited {
                events.push(ScheduleEvent {
                    date,
                    kind: ScheduleEventKind::JobPayment,
                    casting_id: casting.id,
                    label: format!("$: {}", casting.client),
                    detail: Some(format!("R$ {}", currency::format_brl(casting.fee_job))),
                });
            }
        }
        if let Some(date) = casting.date_test_payment {
            let visible = casting.has_test_fee
                && (casting.is_approved()
                    || casting.is_edited
                    || casting.status == CastingStatus::InProgress);
            if visible {
                events.push(ScheduleEvent {
                    date,
                    kind: ScheduleEventKind::TestPayment,
                    casting_id: casting.id,
                    label: format!("$ Teste: {}", casting.client),
                    detail: Some(format!("R$ {}", currency::format_brl(casting.fee_test))),
                });
            }
        }
    }
    events.sort_by(|a, b| a.date.cmp(&b.date));
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dates::parse_date;

    fn d(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    #[test]
    fn production_dates_always_listed() {
        let mut casting = Casting::new("Banco X", "Agência Models", d("2024-02-10"));
        casting.date_fitting = Some(d("2024-02-15"));
        casting.date_ppm = Some(d("2024-02-18"));
        casting.date_shooting = vec![d("2024-02-20"), d("2024-02-21")];
        let events = events_for(&[casting]);
        assert_eq!(events.len(), 4);
        assert_eq!(events[0].kind, ScheduleEventKind::Fitting);
        assert_eq!(events[3].label, "Gravação: Banco X");
    }

    #[test]
    fn job_payment_hidden_until_approved_or_callback() {
        let mut casting = Casting::new("Banco X", "Agência Models", d("2024-02-10"));
        casting.fee_job = 5000.0;
        casting.add_shooting_date(d("2024-02-20"));
        assert!(events_for(std::slice::from_ref(&casting))
            .iter()
            .all(|e| e.kind != ScheduleEventKind::JobPayment));

        casting.status = CastingStatus::Approved;
        let events = events_for(&[casting]);
        let payment = events
            .iter()
            .find(|e| e.kind == ScheduleEventKind::JobPayment)
            .unwrap();
        assert_eq!(payment.date, d("2024-03-22"));
        assert_eq!(payment.detail.as_deref(), Some("R$ 5.000,00"));
    }

    #[test]
    fn test_payment_hidden_for_plain_refusals() {
        let mut casting = Casting::new("Cerveja", "Public Casting", d("2024-03-15"));
        casting.has_test_fee = true;
        casting.fee_test = 150.0;
        casting.set_test_date(Some(d("2024-03-16")));
        casting.status = CastingStatus::NotApproved;
        assert!(events_for(std::slice::from_ref(&casting))
            .iter()
            .all(|e| e.kind != ScheduleEventKind::TestPayment));

        casting.is_edited = true;
        assert!(events_for(&[casting])
            .iter()
            .any(|e| e.kind == ScheduleEventKind::TestPayment));
    }
}
