// SPDX-License-Identifier: MPL-2.0
//! Rating submission port.
//!
//! This module defines the [`SubmissionPort`] trait: a single asynchronous
//! call that either accepts or rejects a rating. The shipped adapter is a
//! simulated coin flip ([`SimulatedSubmitter`]); a real network client can
//! implement the same trait without touching selection or view-state code.
//!
//! [`SimulatedSubmitter`]: crate::infrastructure::simulated::SimulatedSubmitter

use crate::domain::error::SubmitError;
use crate::domain::rating::RatingOption;
use futures_util::future::BoxFuture;
use std::sync::Arc;

/// Future returned by [`SubmissionPort::attempt_submit`].
pub type SubmissionFuture = BoxFuture<'static, Result<(), SubmitError>>;

/// Shared handle to a submission backend.
pub type SharedSubmitter = Arc<dyn SubmissionPort>;

/// Sends a rating somewhere and reports the outcome.
///
/// The returned future always settles; there is no cancellation.
pub trait SubmissionPort: Send + Sync {
    /// Attempts to submit `candidate`.
    ///
    /// # Errors
    ///
    /// Resolves to [`SubmitError::SimulatedFailure`] when the backend rejects
    /// the rating, or [`SubmitError::Unexpected`] for anything else.
    fn attempt_submit(&self, candidate: RatingOption) -> SubmissionFuture;
}
