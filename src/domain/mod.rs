//! Domain entities for the casting pipeline and the financial ledger.

pub mod casting;
pub mod transaction;

pub use casting::{Casting, CastingStatus, JOB_PAYMENT_TERM_DAYS, TEST_PAYMENT_TERM_DAYS};
pub use transaction::{Transaction, TransactionStatus, TransactionType};
