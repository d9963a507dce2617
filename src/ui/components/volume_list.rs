//! Volume list widget

use ratatui::{
    layout::Constraint,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Row, Table},
};

use crate::core::VolumeSummary;
use crate::state::DisplaySet;

/// Widget for displaying the reconciled volume list
pub struct VolumeListWidget<'a> {
    set: &'a DisplaySet<VolumeSummary>,
}

impl<'a> VolumeListWidget<'a> {
    pub fn new(set: &'a DisplaySet<VolumeSummary>) -> Self {
        Self { set }
    }

    pub fn build_table(&self) -> Table<'a> {
        let header = Row::new(vec!["", "NAME", "DRIVER", "MOUNTPOINT"])
            .style(Style::default().add_modifier(Modifier::BOLD))
            .bottom_margin(0);

        let rows: Vec<Row> = self
            .set
            .visible_indices()
            .into_iter()
            .map(|i| {
                let v = &self.set.records()[i];
                let mark = if self.set.is_selected(&v.name) { "●" } else { " " };

                Row::new(vec![
                    Line::from(mark),
                    Line::from(v.name.clone()),
                    Line::from(v.driver.clone()),
                    Line::from(v.mountpoint.clone()),
                ])
            })
            .collect();

        Table::new(
            rows,
            [
                Constraint::Length(1),  // Mark
                Constraint::Min(15),    // Name
                Constraint::Length(10), // Driver
                Constraint::Min(25),    // Mountpoint
            ],
        )
        .header(header)
        .block(
            Block::default()
                .title(format!(" Volumes ({}) ", self.set.len()))
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
            vec![VolumeSummary {
                name: "data1".into(),
                driver: "local".into(),
                mountpoint: "/var/lib/docker/volumes/data1/_data".into(),
            }],
            "",
        );

        let widget = VolumeListWidget::new(&set);
        let _ = widget.build_table();
    }
}
