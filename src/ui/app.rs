//! UI Application logic

use std::collections::VecDeque;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;
use tracing::{debug, info};

use crate::core::{
    ConfirmAction, DockhandError, InputPrompt, InputPurpose, NotificationLevel, RuntimeError, Tab,
    UiAction,
};
use crate::state::AppState;
use crate::ui::components::{
    table_state_for, ContainerListWidget, ImageListWidget, NetworkListWidget, VolumeListWidget,
};

/// UI Application controller
pub struct UiApp {
    pub state: AppState,
    pub should_quit: bool,
    actions: VecDeque<UiAction>,
}

impl UiApp {
    /// Create a new UI app
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            should_quit: false,
            actions: VecDeque::new(),
        }
    }

    /// Drain the actions queued by key handlers
    pub fn take_actions(&mut self) -> Vec<UiAction> {
        self.actions.drain(..).collect()
    }

    fn push_action(&mut self, action: UiAction) {
        self.actions.push_back(action);
    }

    /// Handle a terminal event
    pub fn handle_event(&mut self, event: Event) {
        if let Event::Key(key_event) = event {
            self.handle_key_event(key_event);
        }
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Only handle key press events (not release or repeat)
        if key.kind != KeyEventKind::Press {
            return;
        }

        // Modal layers take the keyboard in priority order
        if !self.state.confirm_queue.is_empty() {
            return self.handle_confirm_key(key);
        }
        if self.state.input_prompt.is_some() {
            return self.handle_input_key(key);
        }
        if self.state.filter_editing {
            return self.handle_filter_key(key);
        }
        if self.state.show_help {
            self.state.show_help = false;
            return;
        }

        match key.code {
            // Quit
            KeyCode::Char('q') if key.modifiers.is_empty() => {
                info!("Quit key pressed");
                self.should_quit = true;
            }
            KeyCode::Char('c') if key.modifiers == KeyModifiers::CONTROL => {
                self.should_quit = true;
            }

            // Tab switching with number keys
            KeyCode::Char('1') => self.switch_tab(Tab::Containers),
            KeyCode::Char('2') => self.switch_tab(Tab::Images),
            KeyCode::Char('3') => self.switch_tab(Tab::Networks),
            KeyCode::Char('4') => self.switch_tab(Tab::Volumes),
            KeyCode::Right => self.next_tab(),
            KeyCode::Left => self.previous_tab(),

            // Cursor movement in the current list
            KeyCode::Down | KeyCode::Char('j') => self.cursor_down(),
            KeyCode::Up | KeyCode::Char('k') => self.cursor_up(),

            // Mark the cursor row
            KeyCode::Char(' ') => self.toggle_mark(),

            // Refresh scheduling
            KeyCode::Char('r') => self.push_action(UiAction::Refresh),
            KeyCode::Char('a') => self.toggle_auto_refresh(),

            // Filter entry
            KeyCode::Char('/') => self.state.filter_editing = true,

            // Tab-specific actions
            KeyCode::Char('s') => self.start_selected(),
            KeyCode::Char('x') => self.stop_selected(),
            KeyCode::Char('d') => self.remove_selected(),
            KeyCode::Char('t') | KeyCode::Enter => self.open_terminal_selected(),
            KeyCode::Char('l') => self.open_logs_selected(),
            KeyCode::Char('n') => self.create_on_tab(),
            KeyCode::Char('p') => self.pull_on_tab(),

            // Help
            KeyCode::Char('?') | KeyCode::Char('h') if key.modifiers.is_empty() => {
                self.state.show_help = !self.state.show_help;
            }

            _ => {
                debug!("Unhandled key: {:?}", key);
            }
        }
    }

    /// Keys while a removal confirmation is on screen
    fn handle_confirm_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                if let Some(confirm) = self.state.confirm_queue.pop_front() {
                    self.push_action(confirm.action);
                }
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                // Declining skips this resource silently; deliberate no-op
                self.state.confirm_queue.pop_front();
            }
            _ => {}
        }
    }

    /// Keys while an input prompt is on screen
    fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.state.input_prompt = None;
            }
            KeyCode::Enter => {
                if let Some(prompt) = self.state.input_prompt.take() {
                    let value = prompt.value.trim().to_string();
                    // An empty name cancels the dispatch entirely
                    if value.is_empty() {
                        return;
                    }
                    let action = match prompt.purpose {
                        InputPurpose::CreateNetwork => UiAction::CreateNetwork(value),
                        InputPurpose::CreateVolume => UiAction::CreateVolume(value),
                        InputPurpose::PullImage => UiAction::PullImage(value),
                    };
                    self.push_action(action);
                }
            }
            KeyCode::Backspace => {
                if let Some(prompt) = self.state.input_prompt.as_mut() {
                    prompt.value.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(prompt) = self.state.input_prompt.as_mut() {
                    prompt.value.push(c);
                }
            }
            _ => {}
        }
    }

    /// Keys while the filter box is focused
    fn handle_filter_key(&mut self, key: KeyEvent) {
        let tab = self.state.current_tab;
        match key.code {
            KeyCode::Esc | KeyCode::Enter => {
                self.state.filter_editing = false;
            }
            KeyCode::Backspace => {
                let mut text = self.state.filter(tab).to_string();
                text.pop();
                self.state.set_filter(tab, text);
            }
            KeyCode::Char(c) => {
                let mut text = self.state.filter(tab).to_string();
                text.push(c);
                self.state.set_filter(tab, text);
            }
            _ => {}
        }
    }

    /// Switch to a specific tab
    fn switch_tab(&mut self, tab: Tab) {
        if self.state.current_tab != tab {
            debug!("Switching to tab: {:?}", tab);
            self.state.current_tab = tab;
        }
    }

    /// Move to next tab (circular)
    fn next_tab(&mut self) {
        let tabs = Tab::all();
        let current_idx = tabs
            .iter()
            .position(|t| *t == self.state.current_tab)
            .unwrap_or(0);
        self.switch_tab(tabs[(current_idx + 1) % tabs.len()]);
    }

    /// Move to previous tab (circular)
    fn previous_tab(&mut self) {
        let tabs = Tab::all();
        let current_idx = tabs
            .iter()
            .position(|t| *t == self.state.current_tab)
            .unwrap_or(0);
        let prev_idx = if current_idx == 0 {
            tabs.len() - 1
        } else {
            current_idx - 1
        };
        self.switch_tab(tabs[prev_idx]);
    }

    fn cursor_down(&mut self) {
        match self.state.current_tab {
            Tab::Containers => self.state.containers.cursor_down(),
            Tab::Images => self.state.images.cursor_down(),
            Tab::Networks => self.state.networks.cursor_down(),
            Tab::Volumes => self.state.volumes.cursor_down(),
        }
    }

    fn cursor_up(&mut self) {
        match self.state.current_tab {
            Tab::Containers => self.state.containers.cursor_up(),
            Tab::Images => self.state.images.cursor_up(),
            Tab::Networks => self.state.networks.cursor_up(),
            Tab::Volumes => self.state.volumes.cursor_up(),
        }
    }

    fn toggle_mark(&mut self) {
        match self.state.current_tab {
            Tab::Containers => {
                if let Some(key) = self.state.containers.cursor_key().map(str::to_string) {
                    self.state.containers.toggle_selected(&key);
                }
            }
            Tab::Images => {
                if let Some(key) = self.state.images.cursor_key().map(str::to_string) {
                    self.state.images.toggle_selected(&key);
                }
            }
            Tab::Networks => {
                if let Some(key) = self.state.networks.cursor_key().map(str::to_string) {
                    self.state.networks.toggle_selected(&key);
                }
            }
            Tab::Volumes => {
                if let Some(key) = self.state.volumes.cursor_key().map(str::to_string) {
                    self.state.volumes.toggle_selected(&key);
                }
            }
        }
    }

    fn toggle_auto_refresh(&mut self) {
        self.state.auto_refresh = !self.state.auto_refresh;
        let message = if self.state.auto_refresh {
            "Auto-refresh resumed"
        } else {
            "Auto-refresh paused"
        };
        self.state
            .add_notification(message, NotificationLevel::Info);
    }

    /// Targets of a user action on the current tab, or a warning when
    /// nothing is selected
    fn targets_or_warn(&mut self) -> Vec<String> {
        let targets = self.state.action_targets();
        if targets.is_empty() {
            let err = DockhandError::Runtime(RuntimeError::NoSelection);
            self.state
                .add_notification(err.user_message(), NotificationLevel::Warning);
        }
        targets
    }

    fn start_selected(&mut self) {
        if self.state.current_tab != Tab::Containers {
            return;
        }
        for id in self.targets_or_warn() {
            self.push_action(UiAction::StartContainer(id));
        }
    }

    fn stop_selected(&mut self) {
        if self.state.current_tab != Tab::Containers {
            return;
        }
        for id in self.targets_or_warn() {
            self.push_action(UiAction::StopContainer(id));
        }
    }

    /// Queue a per-resource confirmation for every removal target
    fn remove_selected(&mut self) {
        let tab = self.state.current_tab;
        for key in self.targets_or_warn() {
            let (noun, action) = match tab {
                Tab::Containers => ("container", UiAction::RemoveContainer(key.clone())),
                Tab::Images => ("image", UiAction::RemoveImage(key.clone())),
                Tab::Networks => ("network", UiAction::RemoveNetwork(key.clone())),
                Tab::Volumes => ("volume", UiAction::RemoveVolume(key.clone())),
            };
            self.state.confirm_queue.push_back(ConfirmAction::new(
                format!("Are you sure you want to remove {} {}?", noun, key),
                action,
            ));
        }
    }

    fn open_terminal_selected(&mut self) {
        if self.state.current_tab != Tab::Containers {
            return;
        }
        if let Some(id) = self.targets_or_warn().into_iter().next() {
            self.push_action(UiAction::OpenTerminal(id));
        }
    }

    fn open_logs_selected(&mut self) {
        if self.state.current_tab != Tab::Containers {
            return;
        }
        if let Some(id) = self.targets_or_warn().into_iter().next() {
            self.push_action(UiAction::OpenLogs(id));
        }
    }

    fn create_on_tab(&mut self) {
        let purpose = match self.state.current_tab {
            Tab::Networks => InputPurpose::CreateNetwork,
            Tab::Volumes => InputPurpose::CreateVolume,
            _ => return,
        };
        self.state.input_prompt = Some(InputPrompt::new(purpose));
    }

    fn pull_on_tab(&mut self) {
        if self.state.current_tab != Tab::Images {
            return;
        }
        self.state.input_prompt = Some(InputPrompt::new(InputPurpose::PullImage));
    }

    /// Render the UI
    pub fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();

        let main_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Min(3),    // Main content
                Constraint::Length(1), // Notification line
                Constraint::Length(1), // Footer
            ])
            .split(area);

        self.render_header(frame, main_layout[0]);
        self.render_main_content(frame, main_layout[1]);
        self.render_notifications(frame, main_layout[2]);
        self.render_footer(frame, main_layout[3]);

        if self.state.show_help {
            self.render_help_overlay(frame, area);
        }
        if let Some(confirm) = self.state.confirm_queue.front() {
            render_confirm_overlay(frame, area, confirm);
        }
        if let Some(prompt) = &self.state.input_prompt {
            render_input_overlay(frame, area, prompt);
        }
    }

    /// Render the header
    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let status_indicator = if self.state.docker_connected {
            ("●", Color::Green)
        } else {
            ("○", Color::Red)
        };

        let refresh_label = if self.state.auto_refresh {
            Span::styled(" auto-refresh ", Style::default().fg(Color::Green))
        } else {
            Span::styled(" paused ", Style::default().fg(Color::Yellow))
        };

        let header_spans = vec![
            Span::styled(
                " Dockhand ",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("v{} ", env!("CARGO_PKG_VERSION")),
                Style::default().fg(Color::Gray),
            ),
            Span::raw("| "),
            Span::styled(
                self.state.current_tab.name(),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            Span::styled(status_indicator.0, Style::default().fg(status_indicator.1)),
            Span::styled(
                if self.state.docker_connected {
                    format!(" {} ", self.state.connection_info.version)
                } else {
                    " Disconnected ".to_string()
                },
                Style::default().fg(status_indicator.1),
            ),
            Span::raw("|"),
            refresh_label,
        ];

        frame.render_widget(
            Paragraph::new(Line::from(header_spans)).style(Style::default().bg(Color::Black)),
            area,
        );
    }

    /// Render the main content area
    fn render_main_content(&mut self, frame: &mut Frame, area: Rect) {
        let sidebar_width = (area.width / 5).clamp(12, 20);

        let content_layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(sidebar_width), Constraint::Min(0)])
            .split(area);

        self.render_sidebar(frame, content_layout[0]);

        let panel_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(content_layout[1]);

        self.render_filter_line(frame, panel_layout[0]);
        self.render_table(frame, panel_layout[1]);
    }

    /// Render the sidebar with tabs
    fn render_sidebar(&self, frame: &mut Frame, area: Rect) {
        let mut lines = vec![];

        for tab in Tab::all() {
            let is_selected = self.state.current_tab == *tab;
            let style = if is_selected {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };

            let line_text = if is_selected {
                format!("▶ {}:{}", tab.shortcut(), tab.name())
            } else {
                format!("  {}:{}", tab.shortcut(), tab.name())
            };

            lines.push(Line::from(Span::styled(line_text, style)));
        }

        let sidebar = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::RIGHT)
                .border_style(Color::DarkGray),
        );

        frame.render_widget(sidebar, area);
    }

    /// Render the filter entry line
    fn render_filter_line(&self, frame: &mut Frame, area: Rect) {
        let tab = self.state.current_tab;
        let filter = self.state.filter(tab);

        let (text, style) = if filter.is_empty() && !self.state.filter_editing {
            (
                format!(" /: search {}...", tab.name().to_lowercase()),
                Style::default().fg(Color::DarkGray),
            )
        } else if self.state.filter_editing {
            (
                format!(" /{}▏", filter),
                Style::default().fg(Color::Yellow),
            )
        } else {
            (format!(" /{}", filter), Style::default().fg(Color::Gray))
        };

        frame.render_widget(Paragraph::new(text).style(style), area);
    }

    /// Render the table for the current tab and persist its scroll offset
    fn render_table(&mut self, frame: &mut Frame, area: Rect) {
        match self.state.current_tab {
            Tab::Containers => {
                let mut table_state = table_state_for(&self.state.containers);
                let table = ContainerListWidget::new(&self.state.containers).build_table();
                frame.render_stateful_widget(table, area, &mut table_state);
                self.state.containers.scroll = table_state.offset();
            }
            Tab::Images => {
                let mut table_state = table_state_for(&self.state.images);
                let table = ImageListWidget::new(&self.state.images).build_table();
                frame.render_stateful_widget(table, area, &mut table_state);
                self.state.images.scroll = table_state.offset();
            }
            Tab::Networks => {
                let mut table_state = table_state_for(&self.state.networks);
                let table = NetworkListWidget::new(&self.state.networks).build_table();
                frame.render_stateful_widget(table, area, &mut table_state);
                self.state.networks.scroll = table_state.offset();
            }
            Tab::Volumes => {
                let mut table_state = table_state_for(&self.state.volumes);
                let table = VolumeListWidget::new(&self.state.volumes).build_table();
                frame.render_stateful_widget(table, area, &mut table_state);
                self.state.volumes.scroll = table_state.offset();
            }
        }
    }

    /// Render the most recent notification
    fn render_notifications(&self, frame: &mut Frame, area: Rect) {
        let Some(notification) = self.state.notifications.last() else {
            return;
        };

        let color = match notification.level {
            NotificationLevel::Info => Color::Gray,
            NotificationLevel::Success => Color::Green,
            NotificationLevel::Warning => Color::Yellow,
            NotificationLevel::Error => Color::Red,
        };

        let line = Line::from(vec![
            Span::styled(
                format!(" [{}] ", notification.level),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(notification.message.clone(), Style::default().fg(color)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }

    /// Render the footer
    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let help_text = match self.state.current_tab {
            Tab::Containers => {
                " [s]tart [x]stop [d]elete [t]erminal [l]ogs | [Space]:Mark [r]:Refresh [?]:Help [q]:Quit "
            }
            Tab::Images => " [p]ull [d]elete | [Space]:Mark [r]:Refresh [?]:Help [q]:Quit ",
            Tab::Networks | Tab::Volumes => {
                " [n]ew [d]elete | [Space]:Mark [r]:Refresh [?]:Help [q]:Quit "
            }
        };

        let footer =
            Paragraph::new(help_text).style(Style::default().fg(Color::Gray).bg(Color::Black));

        frame.render_widget(footer, area);
    }

    /// Render help overlay
    fn render_help_overlay(&self, frame: &mut Frame, area: Rect) {
        let popup_area = centered_rect(60, 70, area);
        frame.render_widget(Clear, popup_area);

        let help_text = r#"Keyboard Shortcuts

Navigation:
  Left / Right        Switch between tabs (circular)
  1 - 4               Jump directly to tab
  Up / Down or j / k  Move the cursor
  Space               Mark / unmark the cursor row
  /                   Edit the filter for this tab

Containers:
  s / x / d           Start / stop / remove
  t or Enter          Open a shell in an external terminal
  l                   Follow logs in an external terminal

Images:
  p / d               Pull / remove

Networks, Volumes:
  n / d               Create / remove

Global:
  r                   Refresh now
  a                   Pause or resume auto-refresh
  q or Ctrl+C         Quit
  ? or h              Toggle this help screen

Press any key to close this help...
"#;

        let help = Paragraph::new(help_text)
            .block(
                Block::default()
                    .title(" Help (Press any key to close) ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true });

        frame.render_widget(help, popup_area);
    }
}

/// Render the front of the confirmation queue
fn render_confirm_overlay(frame: &mut Frame, area: Rect, confirm: &ConfirmAction) {
    let popup_area = centered_rect(50, 20, area);
    frame.render_widget(Clear, popup_area);

    let text = format!("{}\n\n[y] Yes    [n] No", confirm.message);
    let dialog = Paragraph::new(text)
        .block(
            Block::default()
                .title(" Confirm Removal ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(dialog, popup_area);
}

/// Render an open input prompt
fn render_input_overlay(frame: &mut Frame, area: Rect, prompt: &InputPrompt) {
    let popup_area = centered_rect(50, 20, area);
    frame.render_widget(Clear, popup_area);

    let text = format!(
        "{}\n\n> {}▏\n\n[Enter] OK    [Esc] Cancel",
        prompt.purpose.prompt(),
        prompt.value
    );
    let dialog = Paragraph::new(text)
        .block(
            Block::default()
                .title(format!(" {} ", prompt.purpose.title()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(dialog, popup_area);
}

/// Calculate centered rectangle for popups
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
