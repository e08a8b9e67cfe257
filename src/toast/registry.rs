//! The toast registry: active records, dismiss timers and change listeners.
//!
//! All mutation goes through [`ToastRegistry::add`], [`ToastRegistry::remove`]
//! and [`ToastRegistry::clear`]. Expiry is driven by the host loop calling
//! [`ToastRegistry::fire_due`]; a fired timer is just an idempotent `remove`,
//! so it does not matter whether the toast was already dismissed or cleared.

use std::fmt;
use std::time::Duration;

use ratatui::layout::Rect;

use super::timer::TimerQueue;
use super::toaster::Toaster;
use super::types::{Toast, ToastId, ToastKind};
use crate::clock::{Clock, SystemClock};
use crate::config::{ToastConfig, ToastPosition};
use crate::ui::placement::{self, PlacementStyle};

/// Handle returned by [`ToastRegistry::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&[Toast])>;

pub struct ToastRegistry<C: Clock = SystemClock> {
    config: ToastConfig,
    /// Active toasts in insertion order
    toasts: Vec<Toast>,
    timers: TimerQueue,
    next_id: u64,
    clock: C,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl ToastRegistry<SystemClock> {
    pub fn new(config: ToastConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl Default for ToastRegistry<SystemClock> {
    fn default() -> Self {
        Self::new(ToastConfig::default())
    }
}

impl<C: Clock> ToastRegistry<C> {
    pub fn with_clock(mut config: ToastConfig, clock: C) -> Self {
        config.validate();
        Self {
            config,
            toasts: Vec::new(),
            timers: TimerQueue::new(),
            next_id: 1,
            clock,
            listeners: Vec::new(),
            next_subscription: 1,
        }
    }

    pub fn config(&self) -> &ToastConfig {
        &self.config
    }

    /// Add a toast and return its id.
    ///
    /// `duration_ms` overrides the configured default; 0 makes the toast
    /// persistent. When the registry is at capacity the oldest toasts are
    /// dropped to make room.
    pub fn add(
        &mut self,
        kind: ToastKind,
        message: impl Into<String>,
        duration_ms: Option<u64>,
    ) -> ToastId {
        let id = ToastId::new(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);

        let duration_ms = duration_ms.unwrap_or(self.config.duration_ms);
        let created_at = self.clock.timestamp_millis();
        let toast = Toast::new(id, kind, message, duration_ms, created_at);
        tracing::debug!(%id, kind = %toast.kind, duration_ms, "toast added");

        if let Some(duration) = toast.duration() {
            // A deadline past what `Instant` can represent never arrives.
            match self.clock.now().checked_add(duration) {
                Some(deadline) => self.timers.schedule(id, deadline),
                None => {
                    tracing::debug!(%id, duration_ms, "dismiss delay out of range, keeping toast");
                }
            }
        }
        self.toasts.push(toast);
        self.trim_to_capacity();

        self.notify();
        id
    }

    fn trim_to_capacity(&mut self) {
        let max = self.config.max_toasts;
        if max == 0 || self.toasts.len() <= max {
            return;
        }

        let excess = self.toasts.len() - max;
        for evicted in self.toasts.drain(..excess) {
            self.timers.cancel(evicted.id);
            tracing::debug!(id = %evicted.id, max, "toast evicted to respect capacity");
        }
    }

    /// Remove a toast by id. Unknown ids are ignored.
    ///
    /// Returns `true` if a toast was removed.
    pub fn remove(&mut self, id: ToastId) -> bool {
        let removed = self.remove_quiet(id);
        if removed {
            self.notify();
        }
        removed
    }

    fn remove_quiet(&mut self, id: ToastId) -> bool {
        self.timers.cancel(id);
        match self.toasts.iter().position(|t| t.id == id) {
            Some(pos) => {
                self.toasts.remove(pos);
                tracing::trace!(%id, "toast removed");
                true
            }
            None => false,
        }
    }

    /// Remove every toast
    pub fn clear(&mut self) {
        if self.toasts.is_empty() && self.timers.is_empty() {
            return;
        }
        tracing::debug!(count = self.toasts.len(), "toasts cleared");
        self.toasts.clear();
        self.timers.cancel_all();
        self.notify();
    }

    /// Active toasts in insertion order
    pub fn read(&self) -> &[Toast] {
        &self.toasts
    }

    /// Active toasts in display order: the first entry sits closest to the
    /// anchor edge.
    pub fn display_order(&self) -> Vec<&Toast> {
        if self.config.newest_on_top {
            self.toasts.iter().rev().collect()
        } else {
            self.toasts.iter().collect()
        }
    }

    /// Screen rectangles for the visible toasts, in display order
    pub fn placements(&self, area: Rect, style: PlacementStyle) -> Vec<(ToastId, Rect)> {
        self.placements_at(self.config.position, area, style)
    }

    /// Like [`placements`](Self::placements), anchored at `position` instead
    /// of the configured one
    pub fn placements_at(
        &self,
        position: ToastPosition,
        area: Rect,
        style: PlacementStyle,
    ) -> Vec<(ToastId, Rect)> {
        let ids: Vec<ToastId> = self.display_order().iter().map(|t| t.id).collect();
        placement::stack(&ids, position, area, style)
    }

    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.toasts.iter().find(|t| t.id == id)
    }

    pub fn contains(&self, id: ToastId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Time left before `id` is dismissed automatically.
    ///
    /// `None` for persistent or unknown toasts.
    pub fn remaining(&self, id: ToastId) -> Option<Duration> {
        if !self.contains(id) {
            return None;
        }
        let deadline = self.timers.deadline(id)?;
        Some(deadline.saturating_duration_since(self.clock.now()))
    }

    /// Fire every timer that is due and return the ids it removed
    pub fn fire_due(&mut self) -> Vec<ToastId> {
        let now = self.clock.now();
        let removed: Vec<ToastId> = self
            .timers
            .pop_due(now)
            .into_iter()
            .filter(|&id| self.remove_quiet(id))
            .collect();

        if !removed.is_empty() {
            tracing::debug!(count = removed.len(), "toasts expired");
            self.notify();
        }
        removed
    }

    /// How long the host loop may wait before the next timer is due
    pub fn next_deadline(&self) -> Option<Duration> {
        let now = self.clock.now();
        self.timers.time_until_next(now)
    }

    /// Show a collaborator's failure as an error toast.
    ///
    /// Uses the alternate format so an `anyhow::Error` includes its causes.
    pub fn report_error<E>(&mut self, err: &E) -> ToastId
    where
        E: fmt::Display + ?Sized,
    {
        let message = format!("{err:#}");
        tracing::debug!(error = %message, "reporting failure as toast");
        self.add(ToastKind::Error, message, None)
    }

    /// Category shortcuts borrowed from this registry
    pub fn toaster(&mut self) -> Toaster<'_, C> {
        Toaster::new(self)
    }

    /// Call `listener` with the active toasts after every change
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&[Toast]) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns `true` if the subscription existed
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    fn notify(&mut self) {
        for (_, listener) in &mut self.listeners {
            listener(&self.toasts);
        }
    }
}

impl<C: Clock> fmt::Debug for ToastRegistry<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastRegistry")
            .field("config", &self.config)
            .field("toasts", &self.toasts)
            .field("pending_timers", &self.timers.len())
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}
