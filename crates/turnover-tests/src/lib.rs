//! Integration test crate for Turnover.
//!
//! This crate exists solely to hold cross-crate integration tests.
//! It depends on the turnover crates to verify they work together.

#[cfg(test)]
mod export;

#[cfg(test)]
mod pipeline;
