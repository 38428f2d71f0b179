//! Demo dataset installed on a first run with no stored data at all.

use chrono::NaiveDate;

use crate::{
    core::tracker::Tracker,
    domain::{Casting, CastingStatus, Transaction, TransactionStatus},
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Three castings across the funnel plus the ledger entries the approved one
/// would have generated, mirroring a realistic first month of use.
pub fn demo_tracker() -> Tracker {
    let mut banco = Casting::new("Comercial Banco X", "Agência Models", date(2024, 2, 10));
    banco.booker = "Ana".into();
    banco.exclusivity = "Bancos - 6 meses".into();
    banco.usage_period = "6 meses TV Aberta".into();
    banco.fee_job = 5000.0;
    banco.has_test_fee = true;
    banco.fee_test = 150.0;
    banco.date_test = Some(date(2024, 2, 10));
    banco.date_shooting = vec![date(2024, 2, 20), date(2024, 2, 21)];
    banco.status = CastingStatus::Approved;
    banco.is_edited = true;

    let mut serie = Casting::new("Série Streaming", "Elenco Top", date(2024, 3, 1));
    serie.booker = "Carlos".into();
    serie.exclusivity = "Não".into();
    serie.usage_period = "Obra completa".into();
    serie.fee_job = 12000.0;
    serie.date_test = Some(date(2024, 3, 2));
    serie.date_callback = Some(date(2024, 3, 5));
    serie.date_shooting = vec![date(2024, 4, 10)];
    serie.is_edited = true;

    let mut cerveja = Casting::new("Campanha Cerveja", "Public Casting", date(2024, 3, 15));
    cerveja.booker = "Mariana".into();
    cerveja.exclusivity = "Bebidas alcoólicas - 1 ano".into();
    cerveja.usage_period = "1 ano Digital".into();
    cerveja.fee_job = 8000.0;
    cerveja.has_test_fee = true;
    cerveja.date_test = Some(date(2024, 3, 16));
    cerveja.date_shooting = vec![date(2024, 3, 25)];
    cerveja.status = CastingStatus::NotApproved;

    // 30 days after the last shoot day
    let job_fee = Transaction::pending_income(
        date(2024, 3, 20),
        "Cachê Job: Banco X",
        5000.0,
        "Publicidade",
        "Agência Models",
        banco.id,
    );
    // 15 days after the test, already settled
    let mut test_fee = Transaction::pending_income(
        date(2024, 2, 25),
        "Cachê Teste: Banco X",
        150.0,
        "Cachê Teste",
        "Agência Models",
        banco.id,
    );
    test_fee.status = TransactionStatus::Paid;
    let uber = Transaction::paid_expense(
        date(2024, 2, 10),
        "Uber para Teste Banco X",
        45.90,
        "Transporte",
        "Uber",
    );
    let book = Transaction::paid_expense(
        date(2024, 1, 15),
        "Atualização de Book",
        800.0,
        "Material de Trabalho",
        "Fotógrafo João",
    );

    Tracker {
        castings: vec![banco, serie, cerveja],
        transactions: vec![job_fee, test_fee, uber, book],
    }
}
