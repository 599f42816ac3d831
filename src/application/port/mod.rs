// SPDX-License-Identifier: MPL-2.0
//! Port definitions implemented by infrastructure adapters.

pub mod submission;

pub use submission::{SharedSubmitter, SubmissionFuture, SubmissionPort};
