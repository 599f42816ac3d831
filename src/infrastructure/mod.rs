// SPDX-License-Identifier: MPL-2.0
//! Infrastructure adapters implementing application ports.
//!
//! - [`simulated`]: timer-backed random outcome for [`SubmissionPort`]
//!
//! [`SubmissionPort`]: crate::application::port::SubmissionPort

pub mod simulated;
