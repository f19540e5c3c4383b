// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct, its `Kind`, and the
//! two-phase removal state machine every notification walks through:
//! `Visible -> Removing -> evicted`. Both transitions are driven by
//! deadlines fixed at creation; nothing can cancel or reorder them.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Fixed length of the removal animation between the `Removing` transition
/// and eviction from the active set.
pub const REMOVAL_ANIMATION: Duration = Duration::from_millis(350);

/// Default time a notification stays fully visible.
pub const DEFAULT_VISIBLE_DURATION: Duration = Duration::from_millis(3000);

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Kind determines visual styling only; every kind follows the same lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Kind {
    /// Positive confirmation (green accent).
    #[default]
    Success,
    /// Something went wrong (red accent).
    Error,
}

impl Kind {
    /// Returns the accent color for this kind.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Kind::Success => palette::SUCCESS_500,
            Kind::Error => palette::ERROR_500,
        }
    }
}

/// Lifecycle phase of a notification in the active set.
///
/// A notification that has been evicted no longer exists anywhere, so there
/// is no `Removed` variant: membership in the active set is the invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Rendered normally; waiting for the visible duration to elapse.
    Visible,
    /// Removal animation running; eviction is scheduled.
    Removing,
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    kind: Kind,
    message: String,
    phase: Phase,
    created_at: Instant,
    /// When the `Visible -> Removing` transition is due.
    remove_at: Instant,
    /// When eviction from the active set is due.
    purge_at: Instant,
}

impl Notification {
    /// Creates a new notification in the `Visible` phase with both removal
    /// deadlines derived from `now`.
    ///
    /// An empty or whitespace-only message is permitted and simply renders
    /// as an empty toast; content validation is the caller's concern.
    pub fn new(
        kind: Kind,
        message: impl Into<String>,
        visible_duration: Duration,
        now: Instant,
    ) -> Self {
        let remove_at = now + visible_duration;
        Self {
            id: NotificationId::new(),
            kind,
            message: message.into(),
            phase: Phase::Visible,
            created_at: now,
            remove_at,
            purge_at: remove_at + REMOVAL_ANIMATION,
        }
    }

    /// Creates a success notification with the default visible duration.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(
            Kind::Success,
            message,
            DEFAULT_VISIBLE_DURATION,
            Instant::now(),
        )
    }

    /// Creates an error notification with the default visible duration.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(
            Kind::Error,
            message,
            DEFAULT_VISIBLE_DURATION,
            Instant::now(),
        )
    }

    /// Returns the notification's unique ID.
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Returns the kind.
    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Returns the message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns when this notification was created.
    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Whether the `Visible -> Removing` transition is due at `now`.
    #[must_use]
    pub fn removal_due(&self, now: Instant) -> bool {
        self.phase == Phase::Visible && now >= self.remove_at
    }

    /// Whether eviction from the active set is due at `now`.
    #[must_use]
    pub fn purge_due(&self, now: Instant) -> bool {
        self.phase == Phase::Removing && now >= self.purge_at
    }

    /// Advances `Visible -> Removing`. The transition never reverses; calling
    /// this in any other phase is a no-op.
    pub(super) fn begin_removal(&mut self) {
        if self.phase == Phase::Visible {
            self.phase = Phase::Removing;
        }
    }
}
