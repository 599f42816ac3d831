// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`error`]: Domain error types ([`SubmitError`](error::SubmitError),
//!   [`ValidationError`](error::ValidationError))
//! - [`rating`]: Rating types ([`RatingId`](rating::RatingId),
//!   [`RatingOption`](rating::RatingOption), [`RatingSet`](rating::RatingSet))

pub mod error;
pub mod rating;
