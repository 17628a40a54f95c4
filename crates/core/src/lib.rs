//! Challenge Review Core
//!
//! Foundational error types for the Challenge Review workspace. This crate has
//! zero dependencies on the classification or service layers.
//!
//! ## Module Organization
//!
//! - `error` - Core error types (`CoreError`, `CoreResult`)
//!
//! ## Design Principles
//!
//! 1. **Minimal dependencies (thiserror + serde_json)** - keeps build times minimal
//! 2. **Unidirectional dependency** - this crate depends on nothing else in the workspace

pub mod error;

// ── Error Types ────────────────────────────────────────────────────────
pub use error::{CoreError, CoreResult};
