//! # PlanPro - Local Task and Journal Tracker
//!
//! A command-line planner for a single user on a single machine. Each user
//! name owns one JSON document holding tasks, a free-text journal, and a
//! theme preference. Every command loads the whole document, applies one
//! change, writes the whole document back, and renders the affected views.
//!
//! ## Features
//!
//! - **Task Management**: Add, edit, toggle, and delete categorized tasks
//! - **Journal**: A per-user free-text journal, replaced wholesale on save
//! - **Planning Views**: Monthly calendar, upcoming tasks, progress chart
//! - **Backup & Restore**: JSON snapshots with field-by-field merging import
//! - **Theme**: Per-user theme with a global fallback before sign-in
//!
//! ## Usage
//!
//! ```rust,no_run
//! use planpro::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
pub mod storage;
