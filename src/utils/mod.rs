//! Utility functions
//!
//! Provides date formatting, logging, and input validation utilities.

pub mod datetime;
pub mod logging;
pub mod validation;
