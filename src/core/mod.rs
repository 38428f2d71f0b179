//! Business rules: derivation, reporting, and the mutation service.

pub mod csv_import;
pub mod derivation;
pub mod insights;
pub mod report;
pub mod schedule;
pub mod seed;
pub mod tracker;

pub use report::{
    CastingStats, ConsolidatedReport, GrandTotal, MonthlyBreakdown, PartnerStat, PeriodFilter,
    SeasonalityPoint, SummaryStats,
};
pub use tracker::{ExpenseInput, SaveOutcome, Tracker, TrackerManager};
