//! Owned collections plus the mutation service that applies user actions and
//! persists the result synchronously after every successful change.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::{
    core::{csv_import, derivation, seed},
    currency,
    domain::{Casting, Transaction},
    errors::ArtfinError,
    storage::StorageBackend,
};

/// The two collections every view reads from. All state lives here; storage
/// only holds serialized snapshots of it.
#[derive(Debug, Clone, Default)]
pub struct Tracker {
    pub castings: Vec<Casting>,
    pub transactions: Vec<Transaction>,
}

/// Result of a casting save, reported back for user notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveOutcome {
    pub casting_id: Uuid,
    /// Transactions created by the approval derivation; zero when the save
    /// did not cross the approval edge.
    pub derived_count: usize,
}

/// Raw expense form payload. The amount arrives as the text the user typed
/// and is coerced leniently.
#[derive(Debug, Clone)]
pub struct ExpenseInput {
    pub description: String,
    pub amount: String,
    pub date: NaiveDate,
    pub category: String,
    pub is_recurrent: bool,
}

/// Facade that owns the collections, runs validations and derivations, and
/// hands snapshots to the storage collaborator.
pub struct TrackerManager {
    tracker: Tracker,
    storage: Box<dyn StorageBackend>,
}

impl TrackerManager {
    pub fn new(storage: Box<dyn StorageBackend>) -> Self {
        Self {
            tracker: Tracker::default(),
            storage,
        }
    }

    /// Loads both collections. Missing or corrupt blobs read as empty.
    pub fn load(&mut self) -> Result<(), ArtfinError> {
        self.tracker.castings = self.storage.load_castings()?;
        self.tracker.transactions = self.storage.load_transactions()?;
        Ok(())
    }

    pub fn tracker(&self) -> &Tracker {
        &self.tracker
    }

    pub fn castings(&self) -> &[Casting] {
        &self.tracker.castings
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.tracker.transactions
    }

    /// Creates or updates a casting. Any shoot date the user typed but had
    /// not added to the list yet is merged first; the save is rejected while
    /// the shoot-date list stays empty. Crossing into approved appends the
    /// derived pending income entries.
    pub fn save_casting(
        &mut self,
        mut casting: Casting,
        pending_shoot_date: Option<NaiveDate>,
    ) -> Result<SaveOutcome, ArtfinError> {
        if let Some(date) = pending_shoot_date {
            casting.add_shooting_date(date);
        }
        if casting.date_shooting.is_empty() {
            return Err(ArtfinError::Validation(
                "at least one shooting date is required".into(),
            ));
        }
        if casting.client.trim().is_empty() {
            return Err(ArtfinError::Validation("client is required".into()));
        }
        if casting.agency.trim().is_empty() {
            return Err(ArtfinError::Validation("agency is required".into()));
        }

        let previous = self
            .tracker
            .castings
            .iter()
            .find(|c| c.id == casting.id)
            .cloned();
        let derived = if derivation::approval_edge(previous.as_ref(), &casting) {
            derivation::derive_transactions(&casting)
        } else {
            Vec::new()
        };
        let derived_count = derived.len();
        let casting_id = casting.id;

        match self.tracker.castings.iter().position(|c| c.id == casting_id) {
            Some(index) => self.tracker.castings[index] = casting,
            None => self.tracker.castings.insert(0, casting),
        }
        for txn in derived.into_iter().rev() {
            self.tracker.transactions.insert(0, txn);
        }
        self.persist()?;
        tracing::info!(%casting_id, derived_count, "casting saved");
        Ok(SaveOutcome {
            casting_id,
            derived_count,
        })
    }

    /// Records a manual expense, already paid, partner defaulted as the
    /// expense form does.
    pub fn add_expense(&mut self, input: ExpenseInput) -> Result<Uuid, ArtfinError> {
        if input.description.trim().is_empty() {
            return Err(ArtfinError::Validation("description is required".into()));
        }
        let amount = currency::parse_lenient(&input.amount);
        let mut txn = Transaction::paid_expense(
            input.date,
            input.description,
            amount,
            input.category,
            "Outros",
        );
        txn.is_recurrent = input.is_recurrent;
        let id = txn.id;
        self.tracker.transactions.insert(0, txn);
        self.persist()?;
        Ok(id)
    }

    /// Flips a pending entry to paid. The only mutation a transaction
    /// supports after creation.
    pub fn mark_transaction_paid(&mut self, id: Uuid) -> Result<(), ArtfinError> {
        let txn = self
            .tracker
            .transactions
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| ArtfinError::InvalidRef(format!("unknown transaction `{}`", id)))?;
        txn.mark_paid();
        self.persist()
    }

    /// Best-effort CSV append; returns how many rows imported.
    pub fn import_csv(&mut self, input: &str) -> Result<usize, ArtfinError> {
        let imported = csv_import::parse(input);
        let count = imported.len();
        for txn in imported.into_iter().rev() {
            self.tracker.transactions.insert(0, txn);
        }
        self.persist()?;
        Ok(count)
    }

    /// Seeds the demo dataset on a truly first run. Skipped whenever either
    /// collection already has data.
    pub fn seed_if_empty(&mut self) -> Result<bool, ArtfinError> {
        if !self.tracker.castings.is_empty() || !self.tracker.transactions.is_empty() {
            return Ok(false);
        }
        self.tracker = seed::demo_tracker();
        self.persist()?;
        tracing::info!("seeded demo dataset");
        Ok(true)
    }

    fn persist(&self) -> Result<(), ArtfinError> {
        self.storage.save_castings(&self.tracker.castings)?;
        self.storage.save_transactions(&self.tracker.transactions)?;
        Ok(())
    }
}
