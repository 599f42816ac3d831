// SPDX-License-Identifier: MPL-2.0
//! `rating_card` is a small rating widget built with the Iced GUI framework.
//!
//! The user picks one of five scores, submits it to a simulated backend and
//! gets a thank-you panel on success or a toast on failure. Domain types and
//! the submission state machine are pure; the backend sits behind
//! [`application::port::SubmissionPort`].

#![doc(html_root_url = "https://docs.rs/rating_card/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;
