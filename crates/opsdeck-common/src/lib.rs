//! OpsDeck Common - Shared Model and View Logic
//!
//! Target-independent core of the OpsDeck operations dashboard. Everything the
//! web interface displays is shaped here: the sample inventory, the project and
//! resource filters, the transient project edit buffer, the session guard and
//! the telemetry series behind the charts.
//!
//! Key Features:
//! - Domain types for users, projects, cloud resources and middleware stats
//! - Static sample store with a pseudo-random telemetry generator
//! - Project search, resource tabbing and edit-buffer state machines
//! - Session guard over a pluggable storage backend
//! - SVG chart geometry and health-analysis prompt/response codec
//!
//! @version 0.1.0
//! @author AutomataNexus Development Team

pub mod analysis;
pub mod chart;
pub mod config;
pub mod edit;
pub mod error;
pub mod filter;
pub mod routes;
pub mod session;
pub mod store;
pub mod summary;
pub mod telemetry;
pub mod types;
pub mod utils;

pub use error::{DashboardError, Result};
pub use types::*;
