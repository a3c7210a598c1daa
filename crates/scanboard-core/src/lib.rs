//! Core types and view aggregation for the scanboard findings dashboard.
//!
//! This crate provides the foundational pieces used across scanboard:
//!
//! - **Types**: strongly-typed findings, the severity filter, and the
//!   chart-ready [`ViewModel`]
//! - **Views**: [`compute_views`], the pure aggregation driving every chart
//! - **Errors**: closed-enumeration validation with [`DataQualityError`]
//!
//! # Example
//!
//! ```rust,ignore
//! use scanboard_core::{compute_views, SeverityFilter};
//!
//! let findings = scanboard_core::sample::findings();
//! let view = compute_views(&findings, SeverityFilter::All);
//! println!("{} checks, {} failing", view.kpis.total, view.kpis.fails);
//! ```

mod error;
pub mod sample;
pub mod types;
pub mod views;

pub use error::DataQualityError;
pub use types::*;
pub use views::{compute_kpis, compute_views, filter_findings};
