// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! This module provides a non-intrusive notification system following
//! toast/snackbar UX patterns. Notifications appear temporarily to inform
//! users about actions (form submission results, etc.) without blocking
//! interaction.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with its two-phase lifecycle
//! - [`manager`] - `Manager` owning the active set and scheduled transitions
//! - [`toast`] - Toast widget component for rendering notifications
//!
//! # Lifecycle
//!
//! Every notification walks `Visible -> Removing -> evicted`, driven by two
//! deadlines fixed when `show` is called: the visible duration (3s by
//! default) and a fixed 350ms removal animation. There is no cancellation
//! and no manual dismissal; each notification runs to eviction exactly once,
//! independently of any other.

mod manager;
mod notification;
mod toast;

pub use manager::Manager;
pub use notification::{
    Kind, Notification, NotificationId, Phase, DEFAULT_VISIBLE_DURATION, REMOVAL_ANIMATION,
};
pub use toast::Toast;
