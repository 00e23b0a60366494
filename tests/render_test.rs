//! Whole-screen rendering with ratatui's TestBackend.

mod common;

use std::sync::Arc;

use ratatui::style::Modifier;
use todosync::app::{AppMessage, Focus};
use todosync::models::{StatusFilter, Todo};
use todosync::ui::theme::DARK;
use todosync::ui::{ClickAction, ThemeMode};

use common::{app_with, done, find_text, lines, render, screen_contains, todo, FailingGateway};

const WIDE: (u16, u16) = (100, 30);
const NARROW: (u16, u16) = (60, 30);

fn app_showing(todos: Option<Vec<Todo>>) -> todosync::app::App {
    let mut app = app_with(Arc::new(FailingGateway::loading()));
    if let Some(todos) = todos {
        app.handle_message(AppMessage::TodosUpdated { todos });
    }
    app
}

fn sample() -> Vec<Todo> {
    vec![
        todo("c", "Walk the dog", 3),
        done("b", "Buy milk", 2),
        todo("a", "Read a book", 1),
    ]
}

#[test]
fn test_loading_state() {
    let mut app = app_showing(None);
    let buf = render(&mut app, WIDE.0, WIDE.1);
    assert!(screen_contains(&buf, "Loading todos..."));
    assert!(screen_contains(&buf, "T O D O"));
    assert!(screen_contains(&buf, "Create a new todo..."));
    assert!(screen_contains(&buf, "Search todos..."));
    assert!(!screen_contains(&buf, "No todos yet"));
}

#[test]
fn test_empty_state() {
    let mut app = app_showing(Some(vec![]));
    let buf = render(&mut app, WIDE.0, WIDE.1);
    assert!(screen_contains(&buf, "No todos yet"));
    assert!(screen_contains(&buf, "Add a todo to get started!"));
    assert!(screen_contains(&buf, "0 items left"));
}

#[test]
fn test_no_search_match_state() {
    let mut app = app_showing(Some(sample()));
    app.search.insert_str("zebra");
    let buf = render(&mut app, WIDE.0, WIDE.1);
    assert!(screen_contains(&buf, "No todos match your search"));
    assert!(!screen_contains(&buf, "No todos yet"));
}

#[test]
fn test_populated_list() {
    let mut app = app_showing(Some(sample()));
    let buf = render(&mut app, WIDE.0, WIDE.1);

    let rows = lines(&buf);
    let walk = rows.iter().position(|l| l.contains("Walk the dog")).unwrap();
    let milk = rows.iter().position(|l| l.contains("Buy milk")).unwrap();
    let book = rows.iter().position(|l| l.contains("Read a book")).unwrap();
    assert!(walk < milk && milk < book, "list keeps backend order");

    // Counter covers the whole list, not the visible subset
    assert!(screen_contains(&buf, "2 items left"));
    assert!(rows[milk].contains("✓"));
    assert!(rows[walk].contains("◯"));

    let (x, y) = find_text(&buf, "Buy milk").unwrap();
    assert!(buf[(x, y)].modifier.contains(Modifier::CROSSED_OUT));
    let (x, y) = find_text(&buf, "Read a book").unwrap();
    assert!(!buf[(x, y)].modifier.contains(Modifier::CROSSED_OUT));
}

#[test]
fn test_filter_hides_rows_but_not_counter() {
    let mut app = app_showing(Some(sample()));
    app.set_filter(StatusFilter::Completed);
    let buf = render(&mut app, WIDE.0, WIDE.1);
    assert!(screen_contains(&buf, "Buy milk"));
    assert!(!screen_contains(&buf, "Walk the dog"));
    assert!(screen_contains(&buf, "2 items left"));
}

#[test]
fn test_expanded_tabs_share_one_row() {
    let mut app = app_showing(Some(sample()));
    let buf = render(&mut app, WIDE.0, WIDE.1);
    let rows = lines(&buf);
    let row = rows.iter().find(|l| l.contains("items left")).unwrap();
    assert!(row.contains("All"));
    assert!(row.contains("Active"));
    assert!(row.contains("Completed"));
    assert!(row.contains("Clear Completed"));
}

#[test]
fn test_short_terminal_keeps_expanded_tabs() {
    let mut app = app_showing(Some(sample()));

    // Two rows inside the list card: one todo row, then the tabs
    let buf = render(&mut app, 100, 14);
    let rows = lines(&buf);
    let tabs = rows.iter().position(|l| l.contains("items left")).unwrap();
    assert!(rows[tabs].contains("Active"));
    assert!(rows[tabs].contains("Clear Completed"));
    assert!(rows[tabs - 1].contains("Walk the dog"));

    let (x, y) = find_text(&buf, "Completed").unwrap();
    assert_eq!(
        app.hit_areas.hit_test(x, y),
        Some(ClickAction::SelectFilter(StatusFilter::Completed))
    );

    // One row: only the tabs remain
    let buf = render(&mut app, 100, 13);
    assert!(screen_contains(&buf, "items left"));
    assert!(!screen_contains(&buf, "Walk the dog"));
}

#[test]
fn test_compact_tabs_use_two_rows() {
    let mut app = app_showing(Some(sample()));
    let buf = render(&mut app, NARROW.0, NARROW.1);
    let rows = lines(&buf);
    let counter = rows.iter().position(|l| l.contains("items left")).unwrap();
    assert!(rows[counter].contains("Clear Completed"));
    assert!(!rows[counter].contains("Active"));
    assert!(rows[counter + 1].contains("All"));
    assert!(rows[counter + 1].contains("Active"));
}

#[test]
fn test_hit_areas_match_screen() {
    let mut app = app_showing(Some(sample()));
    let buf = render(&mut app, WIDE.0, WIDE.1);

    let (x, y) = find_text(&buf, "Walk the dog").unwrap();
    assert_eq!(
        app.hit_areas.hit_test(x, y),
        Some(ClickAction::EditTodo(todosync::models::TodoId::new("c")))
    );

    let (x, y) = find_text(&buf, "Active").unwrap();
    assert_eq!(
        app.hit_areas.hit_test(x, y),
        Some(ClickAction::SelectFilter(StatusFilter::Active))
    );

    let (x, y) = find_text(&buf, "Clear Completed").unwrap();
    assert_eq!(app.hit_areas.hit_test(x + 2, y), Some(ClickAction::ClearCompleted));

    // Delete affordance only on the selected row
    assert!(app.hit_areas.find(&ClickAction::DeleteTodo(todosync::models::TodoId::new("c"))).is_some());
    assert!(app.hit_areas.find(&ClickAction::DeleteTodo(todosync::models::TodoId::new("a"))).is_none());
}

#[test]
fn test_edit_row_shows_field_and_save() {
    let mut app = app_showing(Some(sample()));
    app.start_edit(&todosync::models::TodoId::new("a"));
    app.edit.as_mut().unwrap().draft.insert_str("!");
    let buf = render(&mut app, WIDE.0, WIDE.1);
    assert!(screen_contains(&buf, "Read a book!"));
    assert!(screen_contains(&buf, "Save"));
    assert!(app.hit_areas.find(&ClickAction::SaveEdit).is_some());
    assert_eq!(app.focus, Focus::List);
}

#[test]
fn test_alert_overlay_captures_clicks() {
    let mut app = app_showing(Some(sample()));
    app.alert = Some("Failed to delete todo".to_string());
    let buf = render(&mut app, WIDE.0, WIDE.1);

    assert!(screen_contains(&buf, "Error"));
    assert!(screen_contains(&buf, "Failed to delete todo"));
    assert!(screen_contains(&buf, "OK"));
    assert_eq!(app.hit_areas.len(), 1);
    assert_eq!(app.hit_areas.hit_test(0, 0), Some(ClickAction::DismissAlert));
}

#[test]
fn test_theme_toggle_glyph_and_palette() {
    let mut app = app_showing(Some(vec![]));
    let buf = render(&mut app, WIDE.0, WIDE.1);
    assert!(screen_contains(&buf, "☾"));

    app.theme.set(ThemeMode::Dark);
    let buf = render(&mut app, WIDE.0, WIDE.1);
    assert!(screen_contains(&buf, "☀"));
    assert!(!screen_contains(&buf, "☾"));
    // Bottom-left corner is plain page background
    assert_eq!(buf[(0, WIDE.1 - 1)].bg, DARK.background);
}

#[test]
fn test_tiny_terminal_does_not_panic() {
    let mut app = app_showing(Some(sample()));
    app.alert = Some("Failed to create todo".to_string());
    for (w, h) in [(1, 1), (10, 4), (20, 8), (79, 12)] {
        render(&mut app, w, h);
    }
}
