//! # insight-config
//!
//! TOML configuration for the Health Insights dashboard.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use std::path::Path;
//! use insight_config::DashboardConfig;
//!
//! let config = DashboardConfig::from_file(Path::new("insight.toml"))?;
//! ```
//!
//! The core needs no configuration at all: `DashboardConfig::default()` is a
//! complete, valid config. The file only tunes how the explanation
//! collaborator is reached and where the binaries send their logs.

pub mod loader;
pub mod settings;

pub use settings::{Backend, DashboardConfig, ExplanationSettings, LoggingSettings};

// ── Tests ─────────────────────────────────────────────────────────────────────
