//! Result type alias for Busplit
//!
//! This module provides a convenient Result type alias that uses BusplitError
//! as the error type.

use super::errors::BusplitError;

/// Result type alias for Busplit operations
///
/// This is a convenience type alias that uses `BusplitError` as the error type.
/// Use this throughout the codebase for fallible operations.
pub type Result<T> = std::result::Result<T, BusplitError>;
