//! Container list widget

use ratatui::{
    layout::Constraint,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Row, Table},
};

use crate::core::{ContainerState, ContainerSummary};
use crate::state::DisplaySet;

/// Widget for displaying the reconciled container list
pub struct ContainerListWidget<'a> {
    set: &'a DisplaySet<ContainerSummary>,
}

impl<'a> ContainerListWidget<'a> {
    pub fn new(set: &'a DisplaySet<ContainerSummary>) -> Self {
        Self { set }
    }

    /// Build the table widget over the visible rows
    pub fn build_table(&self) -> Table<'a> {
        let header = Row::new(vec!["", "ID", "NAME", "IMAGE", "STATUS", "PORTS"])
            .style(Style::default().add_modifier(Modifier::BOLD))
            .bottom_margin(0);

        let rows: Vec<Row> = self
            .set
            .visible_indices()
            .into_iter()
            .map(|i| {
                let c = &self.set.records()[i];
                let mark = if self.set.is_selected(&c.id) { "●" } else { " " };

                let (dot_color, text_color) = match c.state() {
                    ContainerState::Running => (Color::Green, Color::Green),
                    ContainerState::Stopped => (Color::Red, Color::Gray),
                };

                let status = Line::from(vec![
                    Span::styled("● ", Style::default().fg(dot_color)),
                    Span::styled(c.status.clone(), Style::default().fg(text_color)),
                ]);

                let ports = if c.ports.is_empty() {
                    "-".to_string()
                } else {
                    c.ports.clone()
                };

                Row::new(vec![
                    Line::from(mark),
                    Line::from(c.id.clone()),
                    Line::from(c.name.clone()),
                    Line::from(c.image.clone()),
                    status,
                    Line::from(ports),
                ])
            })
            .collect();

        Table::new(
            rows,
            [
                Constraint::Length(1),  // Mark
                Constraint::Length(12), // ID
                Constraint::Min(10),    // Name
                Constraint::Min(15),    // Image
                Constraint::Min(20),    // Status
                Constraint::Min(12),    // Ports
            ],
        )
        .header(header)
        .block(
            Block::default()
                .title(format!(" Containers ({}) ", self.set.len()))
                .borders(Borders::ALL),
        )
        .row_highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docker::test_support::container;

    #[test]
    fn test_table_renders_only_visible_rows() {
        let mut set = DisplaySet::new();
        set.reconcile(
            vec![
                container("abc123def456", "web", "Up 2 hours"),
                container("def789ghi012", "db", "Exited (0) 1 hour ago"),
            ],
            "web",
        );

        let widget = ContainerListWidget::new(&set);
        // One data row passes the filter; building must not panic
        let _ = widget.build_table();
        assert_eq!(set.visible_indices().len(), 1);
    }

    #[test]
    fn test_empty_set_builds_table() {
        let set = DisplaySet::new();
        let widget = ContainerListWidget::new(&set);
        let _ = widget.build_table();
    }
}
