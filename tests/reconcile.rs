//! Reconciliation properties exercised through the public API

use pretty_assertions::assert_eq;

use dockhand::core::{ContainerState, ContainerSummary, ResourceRecord};
use dockhand::docker::parse_container_output;
use dockhand::state::{matches_filter, DisplaySet};

fn container(id: &str, name: &str, status: &str) -> ContainerSummary {
    ContainerSummary {
        id: id.to_string(),
        name: name.to_string(),
        image: "nginx:latest".to_string(),
        status: status.to_string(),
        ports: String::new(),
    }
}

#[test]
fn parsed_line_reconciles_into_display_set() {
    let fresh = parse_container_output("abc123\tweb\tnginx\tUp 2 minutes\t80/tcp").unwrap();

    let mut set = DisplaySet::new();
    set.reconcile(fresh, "");

    assert_eq!(set.len(), 1);
    let c = &set.records()[0];
    assert_eq!(c.id, "abc123");
    assert_eq!(c.name, "web");
    assert_eq!(c.image, "nginx");
    assert_eq!(c.status, "Up 2 minutes");
    assert_eq!(c.ports, "80/tcp");
    assert_eq!(c.state(), ContainerState::Running);
}

#[test]
fn reconcile_twice_with_same_inputs_is_identical() {
    let mut set = DisplaySet::new();
    set.reconcile(
        vec![container("a", "web", "Up 1 minute"), container("b", "db", "Up 2 hours")],
        "",
    );
    set.toggle_selected("a");
    set.scroll = 3;

    let fresh = || {
        vec![
            container("a", "web", "Up 1 minute"),
            container("b", "db", "Up 2 hours"),
            container("c", "cache", "Exited (0) 1 hour ago"),
        ]
    };

    set.reconcile(fresh(), "up");
    let ids_first: Vec<_> = set.records().iter().map(|c| c.id.clone()).collect();
    let visible_first = set.visible_indices();
    let selected_first = set.selected_keys();
    let scroll_first = set.scroll;

    set.reconcile(fresh(), "up");
    let ids_second: Vec<_> = set.records().iter().map(|c| c.id.clone()).collect();

    assert_eq!(ids_first, ids_second);
    assert_eq!(visible_first, set.visible_indices());
    assert_eq!(selected_first, set.selected_keys());
    assert_eq!(scroll_first, set.scroll);
}

#[test]
fn selection_follows_keys_not_positions() {
    let mut set = DisplaySet::new();
    set.reconcile(
        vec![
            container("a", "web", "Up 1 minute"),
            container("b", "db", "Up 2 hours"),
            container("c", "cache", "Up 5 days"),
        ],
        "",
    );
    set.toggle_selected("b");
    set.toggle_selected("c");

    // "b" disappears, the others swap places
    set.reconcile(
        vec![container("c", "cache", "Up 5 days"), container("a", "web", "Up 1 minute")],
        "",
    );

    assert!(set.is_selected("c"));
    assert!(!set.is_selected("b"));
    assert_eq!(set.selected_keys(), vec!["c".to_string()]);
}

#[test]
fn filter_predicate_matches_any_field_case_insensitively() {
    let c = container("abc123", "Web-Frontend", "Up 2 minutes");

    assert!(matches_filter(&c, ""));
    assert!(matches_filter(&c, "web-front"));
    assert!(matches_filter(&c, "NGINX"));
    assert!(matches_filter(&c, "abc123"));
    assert!(matches_filter(&c, "up 2"));
    assert!(!matches_filter(&c, "postgres"));

    // Every field participates in matching
    for field in c.fields() {
        assert!(matches_filter(&c, &field.to_uppercase()));
    }
}

#[test]
fn visibility_is_an_annotation_not_a_mutation() {
    let mut set = DisplaySet::new();
    set.reconcile(
        vec![container("a", "web", "Up 1 minute"), container("b", "db", "Up 2 hours")],
        "web",
    );

    assert_eq!(set.len(), 2);
    assert_eq!(set.visible_indices(), vec![0]);

    set.apply_filter("");
    assert_eq!(set.visible_indices(), vec![0, 1]);
}

#[test]
fn scroll_offset_survives_content_shrinking() {
    let mut set = DisplaySet::new();
    set.reconcile(
        (0..50)
            .map(|i| container(&format!("id{}", i), &format!("c{}", i), "Up 1 minute"))
            .collect(),
        "",
    );
    set.scroll = 30;

    set.reconcile(vec![container("id0", "c0", "Up 1 minute")], "");

    // Carried verbatim; clamping is the renderer's job
    assert_eq!(set.scroll, 30);
}
