//! Integration Tests Module
//!
//! End-to-end tests for the challenge-review workspace: classification over
//! realistic timeline and reviewer-config payloads feeding role eligibility
//! decisions through the `ReviewAccess` facade.

// Phase classification and role eligibility tests
mod eligibility_test;
