//! Decision engine for a clinician-facing VHF travel risk assessment.
//!
//! The crate owns the staged questionnaire state machine, country risk
//! classification, incubation-window arithmetic and outcome resolution.
//! Rendering, risk-table fetching/scraping and session storage are
//! collaborators: they hand in a resolved [`triage::reference::RiskTable`]
//! and user events, and consume review cards and resolutions.

pub mod config;
pub mod models;
pub mod triage;
