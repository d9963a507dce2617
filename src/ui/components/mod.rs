//! UI components

pub mod container_list;
pub mod image_list;
pub mod network_list;
pub mod volume_list;

use ratatui::widgets::TableState;

use crate::core::ResourceRecord;
use crate::state::DisplaySet;

pub use container_list::ContainerListWidget;
pub use image_list::ImageListWidget;
pub use network_list::NetworkListWidget;
pub use volume_list::VolumeListWidget;

/// Build the table state for a display set: the cursor mapped to its
/// position among visible rows, and the persisted scroll offset clamped
/// to the rendered row count.
pub fn table_state_for<R: ResourceRecord>(set: &DisplaySet<R>) -> TableState {
    let visible = set.visible_indices();
    let selected = set
        .cursor()
        .and_then(|c| visible.iter().position(|&i| i == c));
    let offset = set.scroll.min(visible.len().saturating_sub(1));

    let mut state = TableState::default();
    state.select(selected);
    *state.offset_mut() = offset;
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docker::test_support::container;

    #[test]
    fn test_table_state_maps_cursor_into_visible_rows() {
        let mut set = DisplaySet::new();
        set.reconcile(
            vec![
                container("a", "web", "Up 1 minute"),
                container("b", "db", "Up 1 minute"),
                container("c", "web2", "Up 1 minute"),
            ],
            "web",
        );
        set.cursor_down(); // cursor on "c", the second visible row

        let state = table_state_for(&set);
        assert_eq!(state.selected(), Some(1));
    }

    #[test]
    fn test_table_state_clamps_stale_scroll() {
        let mut set = DisplaySet::new();
        set.reconcile(vec![container("a", "web", "Up 1 minute")], "");
        set.scroll = 99;

        let state = table_state_for(&set);
        assert_eq!(state.offset(), 0);
    }
}
