//! Core domain logic for smellpost
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (SmellReport, Chunk, IssueRequest)
//! - `services/` - Markdown rendering and publishing orchestration
//! - `ports/` - Trait definitions for report sources and issue trackers

pub mod models;
pub mod ports;
pub mod services;
