//! Network list widget

use ratatui::{
    layout::Constraint,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Row, Table},
};

use crate::core::NetworkSummary;
use crate::state::DisplaySet;

/// Widget for displaying the reconciled network list
pub struct NetworkListWidget<'a> {
    set: &'a DisplaySet<NetworkSummary>,
}

impl<'a> NetworkListWidget<'a> {
    pub fn new(set: &'a DisplaySet<NetworkSummary>) -> Self {
        Self { set }
    }

    pub fn build_table(&self) -> Table<'a> {
        let header = Row::new(vec!["", "ID", "NAME", "DRIVER"])
            .style(Style::default().add_modifier(Modifier::BOLD))
            .bottom_margin(0);

        let rows: Vec<Row> = self
            .set
            .visible_indices()
            .into_iter()
            .map(|i| {
                let n = &self.set.records()[i];
                let mark = if self.set.is_selected(&n.id) { "●" } else { " " };

                Row::new(vec![
                    Line::from(mark),
                    Line::from(n.id.clone()),
                    Line::from(n.name.clone()),
                    Line::from(n.driver.clone()),
                ])
            })
            .collect();

        Table::new(
            rows,
            [
                Constraint::Length(1),  // Mark
                Constraint::Length(12), // ID
                Constraint::Min(15),    // Name
                Constraint::Min(10),    // Driver
            ],
        )
        .header(header)
        .block(
            Block::default()
                .title(format!(" Networks ({}) ", self.set.len()))
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

    #[test]
    fn test_build_table() {
        let mut set = DisplaySet::new();
        set.reconcile(
            vec![NetworkSummary {
                id: "n1a2b3".into(),
                name: "bridge".into(),
                driver: "bridge".into(),
            }],
            "",
        );

        let widget = NetworkListWidget::new(&set);
        let _ = widget.build_table();
    }
}
