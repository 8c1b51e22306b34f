//! UI-facing orchestrator.
//!
//! Owns the live store, the undo history and the ambient editing state
//! (current date, active category, delete-mode selection, access lock),
//! translates user intents into reducer actions, and schedules debounced
//! persistence through the gateway. All state transitions happen on the
//! caller's thread, strictly one dispatch at a time.

use std::collections::{BTreeMap, BTreeSet};
use std::time::{Duration, Instant};

use chrono::{DateTime, Local, NaiveDate};

use crate::db::gateway::StoreGateway;
use crate::errors::{AppError, AppResult};
use crate::models::{Category, DayDocument, EquipmentItem, Inventory};
use crate::ui::messages::warning;
use crate::utils::id;

use super::action::Action;
use super::history::History;
use super::lock::AccessState;
use super::reducer::reduce;

/// Pause after the last change before the store is written back.
pub const SAVE_DEBOUNCE: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Request,
    Info,
}

/// Entry in the session notification feed, newest first.
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    pub timestamp: DateTime<Local>,
    pub kind: NotificationKind,
}

pub struct Session<G: StoreGateway> {
    gateway: G,
    store: Inventory,
    history: History,
    current_date: NaiveDate,
    active_category: Category,
    delete_mode: bool,
    selection: BTreeMap<Category, BTreeSet<String>>,
    access: AccessState,
    notifications: Vec<Notification>,
    pending_save: Option<Instant>,
    debounce: Duration,
    auto_save: bool,
    notifications_enabled: bool,
    device_name: String,
}

impl<G: StoreGateway> Session<G> {
    /// One-shot blocking load, then seed the current day. Missing or
    /// unreadable persisted data starts the session from an empty store.
    pub fn open(mut gateway: G, today: NaiveDate, now: Instant) -> AppResult<Self> {
        let store = gateway.load()?.unwrap_or_default();
        let mut session = Self {
            gateway,
            store,
            history: History::new(),
            current_date: today,
            active_category: Category::Box,
            delete_mode: false,
            selection: BTreeMap::new(),
            access: AccessState::Unlocked,
            notifications: Vec::new(),
            pending_save: None,
            debounce: SAVE_DEBOUNCE,
            auto_save: true,
            notifications_enabled: true,
            device_name: "Samsung Galaxy S24".to_string(),
        };
        session.ensure_day(now);
        Ok(session)
    }

    pub fn with_autosave(mut self, enabled: bool, debounce: Duration) -> Self {
        self.auto_save = enabled;
        self.debounce = debounce;
        self
    }

    pub fn with_device_name(mut self, name: impl Into<String>) -> Self {
        self.device_name = name.into();
        self
    }

    pub fn with_notifications(mut self, enabled: bool) -> Self {
        self.notifications_enabled = enabled;
        self
    }

    // ---------------------------
    // Read access
    // ---------------------------

    pub fn store(&self) -> &Inventory {
        &self.store
    }

    pub fn current_date(&self) -> NaiveDate {
        self.current_date
    }

    pub fn active_category(&self) -> Category {
        self.active_category
    }

    pub fn access(&self) -> AccessState {
        self.access
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn delete_mode(&self) -> bool {
        self.delete_mode
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn has_pending_save(&self) -> bool {
        self.pending_save.is_some()
    }

    /// The document under edit (current date), cloned for rendering.
    pub fn current_document(&self) -> DayDocument {
        self.store.document_for(self.current_date)
    }

    // ---------------------------
    // Navigation
    // ---------------------------

    pub fn set_date(&mut self, date: NaiveDate, now: Instant) {
        self.current_date = date;
        self.ensure_day(now);
    }

    pub fn set_active_category(&mut self, category: Category) {
        self.active_category = category;
    }

    fn ensure_day(&mut self, now: Instant) {
        if !self.store.contains(self.current_date) {
            self.dispatch(
                Action::EnsureDayData {
                    date: self.current_date,
                    document: DayDocument::seeded(),
                },
                now,
            );
        }
    }

    // ---------------------------
    // Dispatch / persistence
    // ---------------------------

    /// Apply an action, snapshotting the pre-mutation store first when the
    /// action is undoable.
    pub fn dispatch(&mut self, action: Action, now: Instant) {
        if action.is_undoable() {
            self.history.push(self.store.clone());
        }
        self.store = reduce(std::mem::take(&mut self.store), action);
        self.mark_dirty(now);
    }

    fn mark_dirty(&mut self, now: Instant) {
        if self.auto_save {
            // replacing the deadline is the cancellation: a superseded
            // timer cannot fire
            self.pending_save = Some(now + self.debounce);
        }
    }

    /// Advance timers: expire a pending authorization past its deadline
    /// and flush a due debounced save. Called between user inputs.
    pub fn tick(&mut self, now: Instant) {
        if self.access.poll_expired(now) {
            let message = format!(
                "Change request from device {} was not answered.",
                self.device_name
            );
            self.push_notification(NotificationKind::Request, "Request expired", message);
        }

        if let Some(deadline) = self.pending_save
            && now >= deadline
        {
            self.pending_save = None;
            if let Err(e) = self.gateway.save(&self.store) {
                warning(format!("Autosave failed (changes kept in memory): {e}"));
            }
        }
    }

    /// Write the store out immediately, cancelling any pending autosave.
    pub fn flush(&mut self) -> AppResult<()> {
        self.pending_save = None;
        self.gateway.save(&self.store)
    }

    // ---------------------------
    // Editing intents (lock-checked)
    // ---------------------------

    fn guard_editable(&self) -> AppResult<()> {
        if self.access.can_edit() {
            Ok(())
        } else {
            Err(AppError::LockedDevice)
        }
    }

    /// Append a blank input row to the active category and return its id.
    pub fn add_item(&mut self, now: Instant) -> AppResult<String> {
        self.guard_editable()?;
        let (date, category) = (self.current_date, self.active_category);
        self.dispatch(Action::AddItem { date, category }, now);
        self.store
            .day(date)
            .and_then(|doc| doc.items(category).last())
            .map(|item| item.id.clone())
            .ok_or_else(|| AppError::Other("added item not found in store".into()))
    }

    pub fn update_item(
        &mut self,
        category: Category,
        item: EquipmentItem,
        now: Instant,
    ) -> AppResult<()> {
        self.guard_editable()?;
        self.dispatch(
            Action::UpdateItem {
                date: self.current_date,
                category,
                item,
            },
            now,
        );
        Ok(())
    }

    pub fn delete_items(
        &mut self,
        category: Category,
        ids: BTreeSet<String>,
        now: Instant,
    ) -> AppResult<()> {
        self.guard_editable()?;
        self.dispatch(
            Action::DeleteItems {
                date: self.current_date,
                category,
                ids,
            },
            now,
        );
        Ok(())
    }

    /// Wipe everything, then re-seed the current day so the form stays
    /// usable. Recoverable only through the snapshot pushed by dispatch.
    pub fn clear_all(&mut self, now: Instant) -> AppResult<()> {
        self.guard_editable()?;
        self.dispatch(Action::ClearAllData, now);
        self.ensure_day(now);
        Ok(())
    }

    /// Restore the most recent snapshot. `Ok(false)` with an empty history.
    pub fn undo(&mut self, now: Instant) -> AppResult<bool> {
        self.guard_editable()?;
        match self.history.pop() {
            Some(snapshot) => {
                self.dispatch(Action::SetData(snapshot), now);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    // ---------------------------
    // Delete mode / selection
    // ---------------------------

    pub fn toggle_delete_mode(&mut self) -> AppResult<()> {
        self.guard_editable()?;
        self.delete_mode = !self.delete_mode;
        self.selection.clear();
        Ok(())
    }

    pub fn toggle_selected(&mut self, category: Category, item_id: &str) {
        let set = self.selection.entry(category).or_default();
        if !set.remove(item_id) {
            set.insert(item_id.to_string());
        }
    }

    pub fn selected_count(&self) -> usize {
        self.selection.values().map(BTreeSet::len).sum()
    }

    /// Delete every selected item (one dispatch per category, as separate
    /// undo steps), then leave delete mode. Returns how many were removed.
    pub fn delete_selected(&mut self, now: Instant) -> AppResult<usize> {
        self.guard_editable()?;
        let selection = std::mem::take(&mut self.selection);
        let mut removed = 0;
        for (category, ids) in selection {
            if ids.is_empty() {
                continue;
            }
            removed += ids.len();
            self.dispatch(
                Action::DeleteItems {
                    date: self.current_date,
                    category,
                    ids,
                },
                now,
            );
        }
        self.delete_mode = false;
        Ok(removed)
    }

    // ---------------------------
    // Authorization simulation
    // ---------------------------

    pub fn lock_device(&mut self) {
        self.access.lock();
    }

    /// Simulate asking the paired developer device for edit permission.
    pub fn request_unlock(&mut self, now: Instant) -> bool {
        self.access.request(now)
    }

    pub fn allow_request(&mut self) -> bool {
        let granted = self.access.allow();
        if granted {
            let message = format!("Device {} may edit temporarily.", self.device_name);
            self.push_notification(NotificationKind::Info, "Access granted", message);
        }
        granted
    }

    pub fn deny_request(&mut self) -> bool {
        self.access.deny()
    }

    pub fn device_name(&self) -> &str {
        &self.device_name
    }

    fn push_notification(&mut self, kind: NotificationKind, title: &str, message: String) {
        if !self.notifications_enabled {
            return;
        }
        self.notifications.insert(
            0,
            Notification {
                id: id::mint(),
                title: title.to_string(),
                message,
                timestamp: Local::now(),
                kind,
            },
        );
    }
}
