//! Integration tests across the roster store and the advisory engine
//!
//! This test suite validates:
//! - Worked assignment scenarios end to end through both store backends
//! - Status updates reaching the engine only after a reload
//! - Store failures surfacing as distinguishable errors

pub mod test_utils;

#[cfg(test)]
mod assignment_scenarios;

#[cfg(test)]
mod store_sync_tests;
