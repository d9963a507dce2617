//! Main application coordinator
//!
//! Owns the event loop: one control flow runs every list, reconcile and
//! dispatch call to completion, so passes for the same resource kind can
//! never interleave. A slow runtime command therefore delays the next
//! scheduled tick instead of overlapping it; that is an accepted
//! limitation of driving an external CLI without timeouts.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::oneshot;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::core::{
    ConnectionInfo, DockhandError, NotificationLevel, ResourceKind, RuntimeError, UiAction,
};
use crate::docker::{terminal as external_terminal, ContainerRuntime, DockerCli};
use crate::state::AppState;
use crate::ui::UiApp;

/// Maximum age of a notification before it is swept from the status area
const NOTIFICATION_MAX_AGE_SECONDS: i64 = 8;

/// Main application struct
pub struct App {
    config: Config,
    runtime: Arc<dyn ContainerRuntime>,
    ui: UiApp,
    /// Failure channels of detached terminal launches; each fires at most
    /// once and is consumed exactly once
    terminal_failures: Vec<oneshot::Receiver<String>>,
}

impl App {
    /// Create a new application instance backed by the CLI client
    pub async fn new(config: Config) -> Result<Self> {
        let runtime: Arc<dyn ContainerRuntime> = Arc::new(DockerCli::new(&config.docker));
        Ok(Self::with_runtime(config, runtime).await)
    }

    /// Create an application instance over any runtime implementation
    pub async fn with_runtime(config: Config, runtime: Arc<dyn ContainerRuntime>) -> Self {
        info!("Creating new App instance");

        let mut state = AppState::new();
        state.auto_refresh = config.general.auto_refresh;

        // Probe the runtime once so the header can show what we talk to
        match runtime.version().await {
            Ok(info) => state.set_docker_connected(true, info),
            Err(e) => {
                warn!("Could not reach the container runtime: {}", e);
                state.set_docker_connected(false, ConnectionInfo::default());
            }
        }

        Self {
            config,
            runtime,
            ui: UiApp::new(state),
            terminal_failures: Vec::new(),
        }
    }

    /// Read-only view of the application state
    pub fn state(&self) -> &AppState {
        &self.ui.state
    }

    /// Mutable view of the application state
    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.ui.state
    }

    /// Run the main application loop
    pub async fn run(&mut self) -> Result<()> {
        info!("Starting main application loop");

        let mut terminal = setup_terminal(self.config.ui.mouse_enabled)?;

        // Initial data load
        self.refresh_all().await;

        let result = self.run_event_loop(&mut terminal).await;

        restore_terminal(&mut terminal, self.config.ui.mouse_enabled)?;

        result
    }

    /// Run the event loop
    async fn run_event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> Result<()> {
        let tick_rate = Duration::from_millis(self.config.general.refresh_interval_ms);
        let mut last_tick = std::time::Instant::now();

        loop {
            terminal.draw(|f| self.ui.draw(f))?;

            // Handle events with timeout so ticks fire on schedule
            let timeout = tick_rate
                .checked_sub(last_tick.elapsed())
                .unwrap_or_else(|| Duration::from_secs(0));

            if crossterm::event::poll(timeout)? {
                let event = crossterm::event::read()?;
                if let Event::Key(_) | Event::Resize(_, _) = event {
                    self.ui.handle_event(event);
                }
            }

            // Execute whatever the key handlers queued up
            for action in self.ui.take_actions() {
                self.dispatch(action).await;
            }

            if self.ui.should_quit {
                info!("Quit signal received, exiting event loop");
                break;
            }

            // Periodic pass, only while the scheduler is running
            if last_tick.elapsed() >= tick_rate {
                if self.ui.state.auto_refresh {
                    self.refresh_all().await;
                }
                self.ui
                    .state
                    .clear_old_notifications(NOTIFICATION_MAX_AGE_SECONDS);
                last_tick = std::time::Instant::now();
            }

            self.poll_terminal_failures();
        }

        Ok(())
    }

    /// Execute one user action against the runtime, then refresh the
    /// affected kind. Failures are reported per resource; a failed
    /// command does not stop the rest of a multi-selection batch because
    /// every action arrives here individually.
    pub async fn dispatch(&mut self, action: UiAction) {
        debug!("Dispatching action: {:?}", action);

        let (result, kind) = match &action {
            UiAction::Refresh => {
                self.refresh_all().await;
                return;
            }
            UiAction::OpenTerminal(id) => {
                self.terminal_failures
                    .push(external_terminal::open_terminal(self.runtime.program(), id));
                return;
            }
            UiAction::OpenLogs(id) => {
                self.terminal_failures
                    .push(external_terminal::open_logs(self.runtime.program(), id));
                return;
            }
            UiAction::StartContainer(id) => (
                self.runtime
                    .start_container(id)
                    .await
                    .map(|_| format!("Started container {}", id)),
                ResourceKind::Containers,
            ),
            UiAction::StopContainer(id) => (
                self.runtime
                    .stop_container(id)
                    .await
                    .map(|_| format!("Stopped container {}", id)),
                ResourceKind::Containers,
            ),
            UiAction::RemoveContainer(id) => (
                self.runtime
                    .remove_container(id)
                    .await
                    .map(|_| format!("Removed container {}", id)),
                ResourceKind::Containers,
            ),
            UiAction::PullImage(reference) => (
                self.runtime
                    .pull_image(reference)
                    .await
                    .map(|_| format!("Pulled image '{}'", reference)),
                ResourceKind::Images,
            ),
            UiAction::RemoveImage(id) => (
                self.runtime
                    .remove_image(id)
                    .await
                    .map(|_| format!("Removed image {}", id)),
                ResourceKind::Images,
            ),
            UiAction::CreateNetwork(name) => (
                self.runtime
                    .create_network(name)
                    .await
                    .map(|_| format!("Created network '{}'", name)),
                ResourceKind::Networks,
            ),
            UiAction::RemoveNetwork(name) => (
                self.runtime
                    .remove_network(name)
                    .await
                    .map(|_| format!("Removed network '{}'", name)),
                ResourceKind::Networks,
            ),
            UiAction::CreateVolume(name) => (
                self.runtime
                    .create_volume(name)
                    .await
                    .map(|_| format!("Created volume '{}'", name)),
                ResourceKind::Volumes,
            ),
            UiAction::RemoveVolume(name) => (
                self.runtime
                    .remove_volume(name)
                    .await
                    .map(|_| format!("Removed volume '{}'", name)),
                ResourceKind::Volumes,
            ),
        };

        match result {
            Ok(message) => {
                self.ui
                    .state
                    .add_notification(message, NotificationLevel::Success);
            }
            Err(e) => {
                warn!("Dispatch failed: {}", e);
                self.ui
                    .state
                    .add_notification(e.user_message(), NotificationLevel::Error);
            }
        }

        self.refresh_kind(kind).await;
    }

    /// Refresh every resource kind once
    pub async fn refresh_all(&mut self) {
        debug!("Refreshing all resource kinds");
        self.refresh_kind(ResourceKind::Containers).await;
        self.refresh_kind(ResourceKind::Images).await;
        self.refresh_kind(ResourceKind::Networks).await;
        self.refresh_kind(ResourceKind::Volumes).await;
    }

    /// One list-then-reconcile pass for a single kind. On failure the
    /// previous display set stays in place untouched.
    pub async fn refresh_kind(&mut self, kind: ResourceKind) {
        let result = match kind {
            ResourceKind::Containers => self
                .runtime
                .list_containers()
                .await
                .map(|fresh| self.ui.state.reconcile_containers(fresh)),
            ResourceKind::Images => self
                .runtime
                .list_images()
                .await
                .map(|fresh| self.ui.state.reconcile_images(fresh)),
            ResourceKind::Networks => self
                .runtime
                .list_networks()
                .await
                .map(|fresh| self.ui.state.reconcile_networks(fresh)),
            ResourceKind::Volumes => self
                .runtime
                .list_volumes()
                .await
                .map(|fresh| self.ui.state.reconcile_volumes(fresh)),
        };

        match result {
            Ok(()) => {
                self.ui.state.docker_connected = true;
            }
            Err(e) => {
                warn!("Failed to refresh {}: {}", kind, e);
                if matches!(e, DockhandError::Runtime(RuntimeError::Unavailable(_))) {
                    self.ui.state.docker_connected = false;
                }
                self.ui.state.add_notification(
                    format!("Refreshing {} failed: {}", kind, e.user_message()),
                    NotificationLevel::Error,
                );
            }
        }
    }

    /// Drain finished terminal-launch failure channels
    fn poll_terminal_failures(&mut self) {
        let mut pending = Vec::new();
        for mut rx in self.terminal_failures.drain(..) {
            match rx.try_recv() {
                Ok(message) => {
                    self.ui
                        .state
                        .add_notification(message, NotificationLevel::Error);
                }
                Err(oneshot::error::TryRecvError::Empty) => pending.push(rx),
                Err(oneshot::error::TryRecvError::Closed) => {
                    // Launch succeeded; the sender was dropped without firing
                }
            }
        }
        self.terminal_failures = pending;
    }
}

/// Setup the terminal for TUI
fn setup_terminal(mouse: bool) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    info!("Setting up terminal");

    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    if mouse {
        crossterm::execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    } else {
        crossterm::execute!(stdout, EnterAlternateScreen)?;
    }

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore terminal to original state
fn restore_terminal(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mouse: bool,
) -> Result<()> {
    info!("Restoring terminal");

    terminal::disable_raw_mode()?;
    if mouse {
        crossterm::execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
    } else {
        crossterm::execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    }
    terminal.show_cursor()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docker::test_support::{container, MockCall, MockRuntime};

    #[tokio::test]
    async fn test_dispatch_start_refreshes_containers() {
        let mock = Arc::new(
            MockRuntime::new().with_containers(vec![container("abc", "web", "Up 2 minutes")]),
        );
        let mut app = App::with_runtime(Config::default(), mock.clone()).await;

        app.dispatch(UiAction::StartContainer("abc".to_string()))
            .await;

        assert!(mock.was_called(&MockCall::Start {
            id: "abc".to_string()
        }));
        // The dispatch triggered a list pass for the affected kind
        assert!(mock.was_called(&MockCall::List {
            kind: ResourceKind::Containers
        }));
        assert_eq!(app.state().containers.len(), 1);
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_previous_display_set() {
        let mock = Arc::new(
            MockRuntime::new().with_containers(vec![container("abc", "web", "Up 2 minutes")]),
        );
        let mut app = App::with_runtime(Config::default(), mock.clone()).await;
        app.refresh_kind(ResourceKind::Containers).await;
        assert_eq!(app.state().containers.len(), 1);

        mock.failing_lists
            .lock()
            .unwrap()
            .insert(ResourceKind::Containers);
        app.refresh_kind(ResourceKind::Containers).await;

        // Stale but consistent, never partially overwritten
        assert_eq!(app.state().containers.len(), 1);
        assert_eq!(app.state().containers.records()[0].id, "abc");
    }

    #[tokio::test]
    async fn test_failed_dispatch_surfaces_notification() {
        let mock = Arc::new(MockRuntime::new().fail_key("gone"));
        let mut app = App::with_runtime(Config::default(), mock.clone()).await;

        app.dispatch(UiAction::StartContainer("gone".to_string()))
            .await;

        let errors: Vec<_> = app
            .state()
            .notifications
            .iter()
            .filter(|n| n.level == NotificationLevel::Error)
            .collect();
        assert!(!errors.is_empty());
        assert!(errors[0].message.contains("gone"));
    }
}
