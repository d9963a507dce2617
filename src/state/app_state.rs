//! Application state management

use std::collections::{HashMap, VecDeque};

use chrono::Utc;

use crate::core::{
    ConfirmAction, ConnectionInfo, ContainerSummary, ImageSummary, InputPrompt, NetworkSummary,
    NotificationLevel, Tab, VolumeSummary,
};
use crate::state::DisplaySet;

/// Main application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    // Navigation
    pub current_tab: Tab,

    // Reconciled resource views, one per kind
    pub containers: DisplaySet<ContainerSummary>,
    pub images: DisplaySet<ImageSummary>,
    pub networks: DisplaySet<NetworkSummary>,
    pub volumes: DisplaySet<VolumeSummary>,

    // Per-tab filter text; owned by the view and passed into reconciliation
    filters: HashMap<Tab, String>,
    /// Whether keystrokes currently edit the filter box
    pub filter_editing: bool,

    // Connection
    pub docker_connected: bool,
    pub connection_info: ConnectionInfo,

    // Refresh scheduling
    pub auto_refresh: bool,

    // UI state
    pub show_help: bool,
    pub notifications: Vec<Notification>,
    /// Removals awaiting per-resource yes/no confirmation, front first
    pub confirm_queue: VecDeque<ConfirmAction>,
    pub input_prompt: Option<InputPrompt>,
}

/// Notification message
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: uuid::Uuid,
    pub message: String,
    pub level: NotificationLevel,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl AppState {
    /// Create new app state
    pub fn new() -> Self {
        Self {
            auto_refresh: true,
            ..Default::default()
        }
    }

    /// Add a notification
    pub fn add_notification(&mut self, message: impl Into<String>, level: NotificationLevel) {
        let notification = Notification {
            id: uuid::Uuid::new_v4(),
            message: message.into(),
            level,
            timestamp: Utc::now(),
        };
        self.notifications.push(notification);

        // Keep only last 10 notifications
        if self.notifications.len() > 10 {
            self.notifications.remove(0);
        }
    }

    /// Clear old notifications (older than threshold)
    pub fn clear_old_notifications(&mut self, max_age_seconds: i64) {
        let cutoff = Utc::now() - chrono::Duration::seconds(max_age_seconds);
        self.notifications.retain(|n| n.timestamp > cutoff);
    }

    /// The filter text for a tab
    pub fn filter(&self, tab: Tab) -> &str {
        self.filters.get(&tab).map(String::as_str).unwrap_or("")
    }

    /// Replace a tab's filter text and re-annotate that view's visibility
    pub fn set_filter(&mut self, tab: Tab, text: String) {
        match tab {
            Tab::Containers => self.containers.apply_filter(&text),
            Tab::Images => self.images.apply_filter(&text),
            Tab::Networks => self.networks.apply_filter(&text),
            Tab::Volumes => self.volumes.apply_filter(&text),
        }
        self.filters.insert(tab, text);
    }

    /// Fold a fresh container list into the displayed set
    pub fn reconcile_containers(&mut self, fresh: Vec<ContainerSummary>) {
        let filter = self.filter(Tab::Containers).to_string();
        self.containers.reconcile(fresh, &filter);
    }

    /// Fold a fresh image list into the displayed set
    pub fn reconcile_images(&mut self, fresh: Vec<ImageSummary>) {
        let filter = self.filter(Tab::Images).to_string();
        self.images.reconcile(fresh, &filter);
    }

    /// Fold a fresh network list into the displayed set
    pub fn reconcile_networks(&mut self, fresh: Vec<NetworkSummary>) {
        let filter = self.filter(Tab::Networks).to_string();
        self.networks.reconcile(fresh, &filter);
    }

    /// Fold a fresh volume list into the displayed set
    pub fn reconcile_volumes(&mut self, fresh: Vec<VolumeSummary>) {
        let filter = self.filter(Tab::Volumes).to_string();
        self.volumes.reconcile(fresh, &filter);
    }

    /// The keys an action on the current tab applies to
    pub fn action_targets(&self) -> Vec<String> {
        match self.current_tab {
            Tab::Containers => self.containers.action_targets(),
            Tab::Images => self.images.action_targets(),
            Tab::Networks => self.networks.action_targets(),
            Tab::Volumes => self.volumes.action_targets(),
        }
    }

    /// Set runtime connection status
    pub fn set_docker_connected(&mut self, connected: bool, info: ConnectionInfo) {
        self.docker_connected = connected;
        self.connection_info = info;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docker::test_support::container;

    #[test]
    fn test_app_state_default() {
        let state = AppState::new();
        assert_eq!(state.current_tab, Tab::Containers);
        assert!(state.containers.is_empty());
        assert!(!state.docker_connected);
        assert!(state.auto_refresh);
    }

    #[test]
    fn test_add_notification() {
        let mut state = AppState::new();
        state.add_notification("Test message", NotificationLevel::Info);

        assert_eq!(state.notifications.len(), 1);
        assert_eq!(state.notifications[0].message, "Test message");
    }

    #[test]
    fn test_notification_limit() {
        let mut state = AppState::new();

        for i in 0..15 {
            state.add_notification(format!("Message {}", i), NotificationLevel::Info);
        }

        // Should only keep last 10
        assert_eq!(state.notifications.len(), 10);
        assert_eq!(state.notifications[0].message, "Message 5");
    }

    #[test]
    fn test_filter_is_applied_during_reconcile() {
        let mut state = AppState::new();
        state.set_filter(Tab::Containers, "web".to_string());

        state.reconcile_containers(vec![
            container("a", "web", "Up 2 minutes"),
            container("b", "db", "Up 1 hour"),
        ]);

        assert_eq!(state.containers.visible_indices(), vec![0]);
    }

    #[test]
    fn test_filters_are_per_tab() {
        let mut state = AppState::new();
        state.set_filter(Tab::Containers, "web".to_string());

        assert_eq!(state.filter(Tab::Containers), "web");
        assert_eq!(state.filter(Tab::Volumes), "");
    }

    #[test]
    fn test_action_targets_follow_current_tab() {
        let mut state = AppState::new();
        state.reconcile_containers(vec![container("a", "web", "Up 2 minutes")]);

        state.current_tab = Tab::Containers;
        assert_eq!(state.action_targets(), vec!["a".to_string()]);

        state.current_tab = Tab::Volumes;
        assert!(state.action_targets().is_empty());
    }
}
