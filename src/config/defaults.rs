// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.

// ==========================================================================
// Submission Defaults
// ==========================================================================

/// Delay before the simulated submission settles (in milliseconds).
pub const DEFAULT_SUBMIT_DELAY_MS: u64 = 1000;

/// Upper bound for the configurable submission delay (in milliseconds).
pub const MAX_SUBMIT_DELAY_MS: u64 = 10_000;

/// Probability that a simulated submission succeeds.
pub const DEFAULT_SUCCESS_PROBABILITY: f64 = 0.5;

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// How long a success toast stays visible (in seconds).
pub const DEFAULT_SUCCESS_TOAST_SECS: u64 = 2;

/// How long an error toast stays visible (in seconds).
pub const DEFAULT_ERROR_TOAST_SECS: u64 = 4;

/// Upper bound for any configurable toast duration (in seconds).
pub const MAX_TOAST_SECS: u64 = 60;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of diagnostic events kept in memory.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 1000;

/// Minimum diagnostics buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 100;

/// Maximum diagnostics buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10_000;
