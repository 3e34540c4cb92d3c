//! Turnover Core - Foundation types for timeline interchange
//!
//! This crate provides the fundamental types used throughout Turnover:
//! - Time representation (RationalTime, Rate, FrameRate, TimeRange)
//! - The shared error type

pub mod error;
pub mod time;

pub use error::{Result, TurnoverError};
pub use time::{FrameRate, Rate, RationalTime, TimeRange};
