//! Image list widget

use ratatui::{
    layout::Constraint,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Row, Table},
};

use crate::core::ImageSummary;
use crate::state::DisplaySet;

/// Widget for displaying the reconciled image list
pub struct ImageListWidget<'a> {
    set: &'a DisplaySet<ImageSummary>,
}

impl<'a> ImageListWidget<'a> {
    pub fn new(set: &'a DisplaySet<ImageSummary>) -> Self {
        Self { set }
    }

    pub fn build_table(&self) -> Table<'a> {
        let header = Row::new(vec!["", "ID", "REPOSITORY", "TAG", "SIZE"])
            .style(Style::default().add_modifier(Modifier::BOLD))
            .bottom_margin(0);

        let rows: Vec<Row> = self
            .set
            .visible_indices()
            .into_iter()
            .map(|i| {
                let img = &self.set.records()[i];
                let mark = if self.set.is_selected(&img.id) { "●" } else { " " };

                Row::new(vec![
                    Line::from(mark),
                    Line::from(img.id.clone()),
                    Line::from(img.repository.clone()),
                    Line::from(img.tag.clone()),
                    Line::from(img.size.clone()),
                ])
            })
            .collect();

        Table::new(
            rows,
            [
                Constraint::Length(1),  // Mark
                Constraint::Length(12), // ID
                Constraint::Min(20),    // Repository
                Constraint::Min(10),    // Tag
                Constraint::Length(10), // Size
            ],
        )
        .header(header)
        .block(
            Block::default()
                .title(format!(" Images ({}) ", self.set.len()))
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
            vec![ImageSummary {
                id: "f2a1b3".into(),
                repository: "nginx".into(),
                tag: "latest".into(),
                size: "187MB".into(),
            }],
            "",
        );

        let widget = ImageListWidget::new(&set);
        let _ = widget.build_table();
        assert_eq!(set.visible_indices().len(), 1);
    }
}
