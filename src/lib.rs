// SPDX-License-Identifier: MPL-2.0
//! `vitrine` is a small marketing-site showcase built with the Iced GUI framework.
//!
//! It provides an image gallery with a lightbox overlay, a contact form with
//! a simulated submission, and a toast notification system with a timed
//! two-phase removal lifecycle.

#![doc(html_root_url = "https://docs.rs/vitrine/0.2.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod gallery_scanner;
pub mod ui;
