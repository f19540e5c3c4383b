// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` owns the active set of toasts and drives their two scheduled
//! transitions. Each notification runs to eviction independently: showing a
//! new one never cancels, delays, or reorders the timers of existing ones,
//! so a burst of messages cannot starve earlier ones.

use super::notification::{Kind, Notification, NotificationId, DEFAULT_VISIBLE_DURATION};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Manages the active set of notifications in insertion order (oldest first).
#[derive(Debug)]
pub struct Manager {
    /// Active notifications: every entry is `Visible` or `Removing`.
    active: VecDeque<Notification>,
    /// Default visible duration for `show`/`success`/`error`.
    visible_duration: Duration,
}

impl Default for Manager {
    fn default() -> Self {
        Self {
            active: VecDeque::new(),
            visible_duration: DEFAULT_VISIBLE_DURATION,
        }
    }
}

impl Manager {
    /// Creates a new empty notification manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the default visible duration (from config).
    pub fn set_visible_duration(&mut self, duration: Duration) {
        self.visible_duration = duration;
    }

    /// Shows a notification and returns its id immediately.
    ///
    /// The notification is appended to the active set after any existing
    /// ones and transitions to `Removing` once the manager's default visible
    /// duration elapses.
    pub fn show(&mut self, message: impl Into<String>, kind: Kind) -> NotificationId {
        self.show_for(message, kind, self.visible_duration)
    }

    /// Shows a notification with an explicit visible duration.
    pub fn show_for(
        &mut self,
        message: impl Into<String>,
        kind: Kind,
        visible_duration: Duration,
    ) -> NotificationId {
        let notification = Notification::new(kind, message, visible_duration, Instant::now());
        let id = notification.id();
        self.active.push_back(notification);
        id
    }

    /// Sugar for `show(message, Kind::Success)`.
    pub fn success(&mut self, message: impl Into<String>) -> NotificationId {
        self.show(message, Kind::Success)
    }

    /// Sugar for `show(message, Kind::Error)`.
    pub fn error(&mut self, message: impl Into<String>) -> NotificationId {
        self.show(message, Kind::Error)
    }

    /// Appends an already-built notification. Used by tests that need full
    /// control over deadlines; insertion order is still preserved.
    pub fn push(&mut self, notification: Notification) -> NotificationId {
        let id = notification.id();
        self.active.push_back(notification);
        id
    }

    /// Advances the state machine using the current wall clock.
    ///
    /// Should be called periodically (e.g. every 100ms) while notifications
    /// are active.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    /// Advances the state machine to `now`.
    ///
    /// Notifications whose visible duration has elapsed transition to
    /// `Removing`; notifications whose removal animation has finished are
    /// evicted. A notification past both deadlines transitions and is
    /// evicted within the same call, so eviction happens exactly once and
    /// never before the visible duration has elapsed.
    pub fn tick_at(&mut self, now: Instant) {
        for notification in &mut self.active {
            if notification.removal_due(now) {
                notification.begin_removal();
            }
        }

        self.active.retain(|n| !n.purge_due(now));
    }

    /// Returns the active notifications, oldest first.
    pub fn active(&self) -> impl Iterator<Item = &Notification> {
        self.active.iter()
    }

    /// Returns the number of active notifications.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Returns whether any notification is active.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.active.is_empty()
    }

    /// Looks up an active notification by id.
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.active.iter().find(|n| n.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::notification::{Phase, REMOVAL_ANIMATION};

    const VISIBLE: Duration = Duration::from_millis(100);

    fn fixed_notification(kind: Kind, message: &str, now: Instant) -> Notification {
        Notification::new(kind, message, VISIBLE, now)
    }

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert_eq!(manager.active_count(), 0);
        assert!(!manager.has_notifications());
    }

    #[test]
    fn show_returns_fresh_id_and_notification_is_visible_immediately() {
        let mut manager = Manager::new();
        let first = manager.success("saved");
        let second = manager.error("failed");

        assert_ne!(first, second);
        assert_eq!(manager.active_count(), 2);
        assert_eq!(manager.get(first).unwrap().phase(), Phase::Visible);
        assert_eq!(manager.get(second).unwrap().phase(), Phase::Visible);
    }

    #[test]
    fn active_set_preserves_insertion_order() {
        let mut manager = Manager::new();
        manager.success("first");
        manager.error("second");
        manager.success("third");

        let messages: Vec<&str> = manager.active().map(|n| n.message()).collect();
        assert_eq!(messages, vec!["first", "second", "third"]);
    }

    #[test]
    fn tick_before_deadline_changes_nothing() {
        let now = Instant::now();
        let mut manager = Manager::new();
        let id = manager.push(fixed_notification(Kind::Success, "x", now));

        manager.tick_at(now + VISIBLE / 2);

        assert_eq!(manager.get(id).unwrap().phase(), Phase::Visible);
    }

    #[test]
    fn visible_duration_elapsing_starts_removal_without_eviction() {
        let now = Instant::now();
        let mut manager = Manager::new();
        let id = manager.push(fixed_notification(Kind::Success, "x", now));

        manager.tick_at(now + VISIBLE);

        let notification = manager.get(id).expect("still in active set");
        assert_eq!(notification.phase(), Phase::Removing);
    }

    #[test]
    fn removal_animation_elapsing_evicts() {
        let now = Instant::now();
        let mut manager = Manager::new();
        let id = manager.push(fixed_notification(Kind::Error, "x", now));

        manager.tick_at(now + VISIBLE);
        manager.tick_at(now + VISIBLE + REMOVAL_ANIMATION);

        assert!(manager.get(id).is_none());
        assert!(!manager.has_notifications());
    }

    #[test]
    fn late_tick_transitions_and_evicts_in_one_pass() {
        let now = Instant::now();
        let mut manager = Manager::new();
        manager.push(fixed_notification(Kind::Success, "x", now));

        // A single tick far past both deadlines still evicts exactly once.
        manager.tick_at(now + VISIBLE + REMOVAL_ANIMATION + Duration::from_secs(5));

        assert_eq!(manager.active_count(), 0);
    }

    #[test]
    fn notifications_have_independent_timers() {
        let now = Instant::now();
        let mut manager = Manager::new();
        let early = manager.push(fixed_notification(Kind::Success, "early", now));
        let late = manager.push(Notification::new(
            Kind::Success,
            "late",
            VISIBLE,
            now + Duration::from_millis(60),
        ));

        // The arrival of "late" must not delay or cancel "early".
        manager.tick_at(now + VISIBLE);
        assert_eq!(manager.get(early).unwrap().phase(), Phase::Removing);
        assert_eq!(manager.get(late).unwrap().phase(), Phase::Visible);

        manager.tick_at(now + VISIBLE + REMOVAL_ANIMATION);
        assert!(manager.get(early).is_none());
        assert_eq!(manager.get(late).unwrap().phase(), Phase::Removing);
    }

    #[test]
    fn burst_of_shows_yields_independent_simultaneous_notifications() {
        let mut manager = Manager::new();
        let ids: Vec<_> = (0..5)
            .map(|i| manager.success(format!("message {i}")))
            .collect();

        assert_eq!(manager.active_count(), 5);
        for window in ids.windows(2) {
            assert_ne!(window[0], window[1]);
        }
        assert!(manager
            .active()
            .all(|n| n.phase() == Phase::Visible));
    }

    #[test]
    fn eviction_happens_exactly_once() {
        let now = Instant::now();
        let mut manager = Manager::new();
        manager.push(fixed_notification(Kind::Success, "x", now));

        let end = now + VISIBLE + REMOVAL_ANIMATION;
        manager.tick_at(end);
        assert_eq!(manager.active_count(), 0);

        // Further ticks are no-ops.
        manager.tick_at(end + Duration::from_secs(1));
        assert_eq!(manager.active_count(), 0);
    }

    #[test]
    fn set_visible_duration_applies_to_subsequent_shows() {
        let mut manager = Manager::new();
        manager.set_visible_duration(Duration::from_millis(10));
        let before = Instant::now();
        let id = manager.success("quick");

        // Well within the default 3s but past the configured 10ms, and
        // still inside the removal animation window.
        manager.tick_at(before + Duration::from_millis(100));
        let notification = manager.get(id).expect("still animating out");
        assert_eq!(notification.phase(), Phase::Removing);
    }
}
