//! Business Logic Services
//!
//! Service layer composing the pure classification and eligibility functions
//! for consumers that hold already-fetched challenge data.

pub mod review_access;

pub use review_access::ReviewAccess;
