//! regbench: side-by-side benchmarking of off-the-shelf regression models.
//!
//! This crate fits a fixed (or caller-supplied) list of regression models on a
//! train/test split, tabulates RMSE and R-Squared per model, and renders the
//! top feature importances of tree/ensemble models as a horizontal bar chart.
//! All predictive computation is delegated to external backends (smartcore for
//! the classical estimators, gbdt for the boosted ensemble); this crate's own
//! logic is composition, scoring, and reporting.
//!
//! The design favors small, testable modules: scoring is a pure function from
//! candidates and a split to a structured result, and presentation (text
//! table, HTML report, plots) is handled by separate sinks.
pub mod comparison;
pub mod config;
pub mod data_handling;
pub mod error;
pub mod importance;
pub mod metrics;
pub mod models;
pub mod preprocessing;
pub mod report;
