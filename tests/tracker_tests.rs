use artfin_core::{
    core::{report, ExpenseInput, TrackerManager},
    dates::parse_date,
    domain::{Casting, CastingStatus, TransactionStatus, TransactionType},
    errors::ArtfinError,
    storage::JsonStorage,
};
use chrono::NaiveDate;
use std::path::Path;
use tempfile::tempdir;

fn d(s: &str) -> NaiveDate {
    parse_date(s).unwrap()
}

fn manager_in(base: &Path) -> TrackerManager {
    let storage = JsonStorage::new(Some(base.to_path_buf())).unwrap();
    let mut manager = TrackerManager::new(Box::new(storage));
    manager.load().unwrap();
    manager
}

fn banco_casting() -> Casting {
    let mut casting = Casting::new("Comercial Banco X", "Agência Models", d("2024-02-10"));
    casting.fee_job = 5000.0;
    casting.add_shooting_date(d("2024-02-20"));
    casting.add_shooting_date(d("2024-02-21"));
    casting
}

#[test]
fn approval_transition_derives_exactly_once() {
    let temp = tempdir().unwrap();
    let mut manager = manager_in(temp.path());

    let casting = banco_casting();
    let outcome = manager.save_casting(casting.clone(), None).expect("save");
    assert_eq!(outcome.derived_count, 0);
    assert!(manager.transactions().is_empty());

    let mut approved = casting.clone();
    approved.status = CastingStatus::Approved;
    let outcome = manager.save_casting(approved.clone(), None).expect("approve");
    assert_eq!(outcome.derived_count, 1);
    assert_eq!(manager.transactions().len(), 1);
    let entry = &manager.transactions()[0];
    assert_eq!(entry.amount, 5000.0);
    assert_eq!(entry.date, d("2024-03-22"));
    assert_eq!(entry.status, TransactionStatus::Pending);
    assert_eq!(entry.origin_casting_id, Some(casting.id));

    // re-saving while already approved must not derive again
    approved.fee_job = 9999.0;
    let outcome = manager.save_casting(approved, None).expect("re-save");
    assert_eq!(outcome.derived_count, 0);
    assert_eq!(manager.transactions().len(), 1);
}

#[test]
fn first_save_already_approved_emits_both_fees() {
    let temp = tempdir().unwrap();
    let mut manager = manager_in(temp.path());

    let mut casting = banco_casting();
    casting.status = CastingStatus::Approved;
    casting.has_test_fee = true;
    casting.fee_test = 150.0;
    casting.set_test_date(Some(d("2024-02-10")));
    let outcome = manager.save_casting(casting, None).expect("save");
    assert_eq!(outcome.derived_count, 2);
    assert_eq!(manager.transactions().len(), 2);
    // most-recent-first: job fee entry leads, test fee follows
    assert_eq!(manager.transactions()[0].category, "Cachê Publicidade");
    assert_eq!(manager.transactions()[1].category, "Cachê Teste");
    assert_eq!(manager.transactions()[1].date, d("2024-02-25"));
}

#[test]
fn empty_shoot_dates_reject_save_and_leave_state_untouched() {
    let temp = tempdir().unwrap();
    let mut manager = manager_in(temp.path());

    let mut casting = Casting::new("Filme Y", "Elenco Top", d("2024-03-01"));
    casting.status = CastingStatus::Approved;
    let err = manager.save_casting(casting, None).expect_err("must reject");
    assert!(matches!(err, ArtfinError::Validation(_)));
    assert!(manager.castings().is_empty());
    assert!(manager.transactions().is_empty());

    // nothing reached storage either
    let reloaded = manager_in(temp.path());
    assert!(reloaded.castings().is_empty());
}

#[test]
fn pending_shoot_date_input_is_merged_before_validation() {
    let temp = tempdir().unwrap();
    let mut manager = manager_in(temp.path());

    let casting = Casting::new("Filme Y", "Elenco Top", d("2024-03-01"));
    let outcome = manager
        .save_casting(casting, Some(d("2024-04-10")))
        .expect("pending date satisfies the requirement");
    let saved = manager
        .castings()
        .iter()
        .find(|c| c.id == outcome.casting_id)
        .unwrap();
    assert_eq!(saved.date_shooting, vec![d("2024-04-10")]);
    assert_eq!(saved.date_job_payment, Some(d("2024-05-10")));
}

#[test]
fn new_castings_prepend_and_edits_keep_position() {
    let temp = tempdir().unwrap();
    let mut manager = manager_in(temp.path());

    let first = banco_casting();
    manager.save_casting(first.clone(), None).unwrap();
    let mut second = Casting::new("Série Streaming", "Elenco Top", d("2024-03-01"));
    second.add_shooting_date(d("2024-04-10"));
    manager.save_casting(second, None).unwrap();
    assert_eq!(manager.castings()[0].client, "Série Streaming");

    let mut edited = first.clone();
    edited.booker = "Ana".into();
    manager.save_casting(edited, None).unwrap();
    assert_eq!(manager.castings()[1].client, "Comercial Banco X");
    assert_eq!(manager.castings()[1].booker, "Ana");
    assert_eq!(manager.castings().len(), 2);
}

#[test]
fn mark_paid_moves_income_out_of_pending() {
    let temp = tempdir().unwrap();
    let mut manager = manager_in(temp.path());

    let mut casting = banco_casting();
    casting.status = CastingStatus::Approved;
    manager.save_casting(casting, None).unwrap();
    let id = manager.transactions()[0].id;

    let today = d("2024-06-01");
    let stats = report::summary_stats(manager.transactions(), today);
    assert_eq!(stats.pending_income, 5000.0);
    assert_eq!(stats.overdue_income, 5000.0);
    assert_eq!(stats.total_income, 0.0);

    manager.mark_transaction_paid(id).unwrap();
    let stats = report::summary_stats(manager.transactions(), today);
    assert_eq!(stats.pending_income, 0.0);
    assert_eq!(stats.overdue_income, 0.0);
    assert_eq!(stats.total_income, 5000.0);
}

#[test]
fn mark_paid_rejects_unknown_id() {
    let temp = tempdir().unwrap();
    let mut manager = manager_in(temp.path());
    let err = manager
        .mark_transaction_paid(uuid::Uuid::new_v4())
        .expect_err("unknown id");
    assert!(matches!(err, ArtfinError::InvalidRef(_)));
}

#[test]
fn expense_amount_is_coerced_leniently() {
    let temp = tempdir().unwrap();
    let mut manager = manager_in(temp.path());

    manager
        .add_expense(ExpenseInput {
            description: "Uber para Teste".into(),
            amount: "R$ 45,90".into(),
            date: d("2024-02-10"),
            category: "Transporte".into(),
            is_recurrent: false,
        })
        .unwrap();
    manager
        .add_expense(ExpenseInput {
            description: "Curso".into(),
            amount: "não sei".into(),
            date: d("2024-02-12"),
            category: "Cursos / Workshops".into(),
            is_recurrent: true,
        })
        .unwrap();

    assert_eq!(manager.transactions()[1].amount, 45.90);
    assert_eq!(manager.transactions()[1].kind, TransactionType::Expense);
    assert_eq!(manager.transactions()[1].status, TransactionStatus::Paid);
    assert_eq!(manager.transactions()[1].partner, "Outros");
    assert_eq!(manager.transactions()[0].amount, 0.0);
    assert!(manager.transactions()[0].is_recurrent);
}

#[test]
fn seeding_runs_once_and_only_on_a_truly_empty_store() {
    let temp = tempdir().unwrap();
    let mut manager = manager_in(temp.path());

    assert!(manager.seed_if_empty().unwrap());
    assert_eq!(manager.castings().len(), 3);
    assert_eq!(manager.transactions().len(), 4);

    // seeded data was persisted immediately
    let reloaded = manager_in(temp.path());
    assert_eq!(reloaded.castings().len(), 3);
    assert_eq!(reloaded.transactions().len(), 4);

    // second call is a no-op
    assert!(!manager.seed_if_empty().unwrap());
    assert_eq!(manager.transactions().len(), 4);
}

#[test]
fn seeding_skipped_when_either_collection_has_data() {
    let temp = tempdir().unwrap();
    let mut manager = manager_in(temp.path());
    manager
        .add_expense(ExpenseInput {
            description: "Book".into(),
            amount: "800".into(),
            date: d("2024-01-15"),
            category: "Material de Trabalho".into(),
            is_recurrent: false,
        })
        .unwrap();

    assert!(!manager.seed_if_empty().unwrap());
    assert!(manager.castings().is_empty());
    assert_eq!(manager.transactions().len(), 1);
}

#[test]
fn csv_import_appends_to_the_ledger() {
    let temp = tempdir().unwrap();
    let mut manager = manager_in(temp.path());

    let input = "data,descrição,valor,tipo,categoria,parceiro,status\n\
                 2024-03-20,Cachê Job,5000,Entrada,Publicidade,Agência Models,Pendente\n\
                 linha,curta,demais\n\
                 2024-02-10,Uber,45.90,Saída,Transporte,Uber,Pago\n";
    let imported = manager.import_csv(input).unwrap();
    assert_eq!(imported, 2);
    assert_eq!(manager.transactions().len(), 2);

    let reloaded = manager_in(temp.path());
    assert_eq!(reloaded.transactions().len(), 2);
}

#[test]
fn every_mutation_persists_synchronously() {
    let temp = tempdir().unwrap();
    let mut manager = manager_in(temp.path());

    let mut casting = banco_casting();
    casting.status = CastingStatus::Approved;
    manager.save_casting(casting, None).unwrap();
    let id = manager.transactions()[0].id;
    manager.mark_transaction_paid(id).unwrap();

    let reloaded = manager_in(temp.path());
    assert_eq!(reloaded.castings().len(), 1);
    assert_eq!(reloaded.transactions().len(), 1);
    assert_eq!(reloaded.transactions()[0].status, TransactionStatus::Paid);
}
