//! Keyboard-driven flows through the App against live gateways.

mod common;

use std::sync::Arc;
use std::time::Duration;

use common::*;
use crossterm::event::KeyCode;

use todosync::app::Focus;
use todosync::models::StatusFilter;

fn texts(app: &todosync::app::App) -> Vec<String> {
    app.visible().into_iter().map(|t| t.text).collect()
}

#[tokio::test]
async fn test_typing_and_enter_creates_todo() {
    let (mut app, store) = memory_app();
    app.start_sync();
    settle(&mut app, |app| app.todos.is_some()).await;
    assert!(app.visible().is_empty());

    type_text(&mut app, "  Buy milk  ");
    press(&mut app, KeyCode::Enter);
    settle(&mut app, |app| app.draft.is_empty() && texts(app) == ["Buy milk"]).await;

    assert_eq!(store.len(), 1);
    assert_eq!(store.get()[0].text, "Buy milk");
}

#[tokio::test]
async fn test_blank_draft_is_not_submitted() {
    let gateway = Arc::new(FailingGateway::with_todos(vec![]));
    let mut app = app_with(gateway.clone());

    type_text(&mut app, "   ");
    press(&mut app, KeyCode::Enter);
    tokio::time::sleep(Duration::from_millis(50)).await;
    app.pump_messages();

    assert_eq!(gateway.calls(), 0);
    assert!(app.alert.is_none());
    assert_eq!(app.draft.text(), "   ");
}

#[tokio::test]
async fn test_toggle_edit_delete_from_list() {
    let (mut app, store) = memory_app();
    store.create("Walk the dog").unwrap();
    app.start_sync();
    settle(&mut app, |app| app.visible().len() == 1).await;

    app.focus = Focus::List;
    press(&mut app, KeyCode::Char(' '));
    settle(&mut app, |app| app.visible().first().is_some_and(|t| t.completed)).await;

    // Completed rows do not open an editor
    press(&mut app, KeyCode::Enter);
    assert!(app.edit.is_none());

    press(&mut app, KeyCode::Char(' '));
    settle(&mut app, |app| app.visible().first().is_some_and(|t| !t.completed)).await;

    press(&mut app, KeyCode::Char('e'));
    assert!(app.edit.is_some());
    press(&mut app, KeyCode::End);
    type_text(&mut app, " twice");
    press(&mut app, KeyCode::Enter);
    settle(&mut app, |app| app.edit.is_none() && texts(app) == ["Walk the dog twice"]).await;

    press(&mut app, KeyCode::Char('d'));
    settle(&mut app, |app| app.visible().is_empty()).await;
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_escape_discards_edit() {
    let (mut app, store) = memory_app();
    store.create("Keep me").unwrap();
    app.start_sync();
    settle(&mut app, |app| app.visible().len() == 1).await;

    app.focus = Focus::List;
    press(&mut app, KeyCode::Enter);
    type_text(&mut app, "!!!");
    press(&mut app, KeyCode::Esc);

    assert!(app.edit.is_none());
    assert_eq!(store.get()[0].text, "Keep me");
}

#[tokio::test]
async fn test_blank_rename_is_not_submitted() {
    let gateway = Arc::new(FailingGateway::with_todos(vec![todo("a", "Keep me", 1)]));
    let mut app = app_with(gateway.clone());
    app.start_sync();
    settle(&mut app, |app| app.visible().len() == 1).await;

    app.focus = Focus::List;
    press(&mut app, KeyCode::Enter);
    for _ in 0.."Keep me".len() {
        press(&mut app, KeyCode::Backspace);
    }
    type_text(&mut app, "  ");
    press(&mut app, KeyCode::Enter);
    tokio::time::sleep(Duration::from_millis(50)).await;
    app.pump_messages();

    assert_eq!(gateway.calls(), 0);
    assert!(app.alert.is_none());
    let session = app.edit.as_ref().expect("session stays open");
    assert_eq!(session.draft.text(), "  ");
}

#[tokio::test]
async fn test_clear_completed_and_filters() {
    let (mut app, store) = memory_app();
    let a = store.create("A").unwrap();
    store.create("B").unwrap();
    store.update(&a, true).unwrap();
    app.start_sync();
    settle(&mut app, |app| app.visible().len() == 2).await;

    app.focus = Focus::List;
    press(&mut app, KeyCode::Char('2'));
    assert_eq!(app.filter, StatusFilter::Active);
    assert_eq!(texts(&app), ["B"]);

    press(&mut app, KeyCode::Char('3'));
    assert_eq!(texts(&app), ["A"]);

    press(&mut app, KeyCode::Char('C'));
    settle(&mut app, |app| app.visible().is_empty()).await;

    press(&mut app, KeyCode::Char('1'));
    assert_eq!(texts(&app), ["B"]);
}

#[tokio::test]
async fn test_search_narrows_visible_list() {
    let (mut app, store) = memory_app();
    store.create("Buy milk").unwrap();
    store.create("Walk the dog").unwrap();
    app.start_sync();
    settle(&mut app, |app| app.visible().len() == 2).await;

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus, Focus::Search);
    type_text(&mut app, "MILK");
    assert_eq!(texts(&app), ["Buy milk"]);

    app.handle_paste("\n");
    assert!(app.visible().is_empty());
}

#[tokio::test]
async fn test_failed_create_keeps_draft_and_alerts() {
    let gateway = Arc::new(FailingGateway::with_todos(vec![]));
    let mut app = app_with(gateway.clone());

    type_text(&mut app, "Buy milk");
    press(&mut app, KeyCode::Enter);
    settle(&mut app, |app| app.alert.is_some()).await;

    assert_eq!(app.alert.as_deref(), Some("Failed to create todo"));
    assert_eq!(app.draft.text(), "Buy milk");
    assert_eq!(gateway.calls(), 1);

    // The alert swallows other keys until dismissed
    type_text(&mut app, "x");
    assert_eq!(app.draft.text(), "Buy milk");
    press(&mut app, KeyCode::Esc);
    assert!(app.alert.is_none());
}

#[tokio::test]
async fn test_failed_rename_keeps_session() {
    let gateway = Arc::new(FailingGateway::with_todos(vec![todo("a", "Walk", 1)]));
    let mut app = app_with(gateway.clone());
    app.start_sync();
    settle(&mut app, |app| app.visible().len() == 1).await;

    app.focus = Focus::List;
    press(&mut app, KeyCode::Enter);
    type_text(&mut app, " more");
    press(&mut app, KeyCode::Enter);
    settle(&mut app, |app| app.alert.is_some()).await;

    assert_eq!(app.alert.as_deref(), Some("Failed to update todo"));
    let session = app.edit.as_ref().expect("session stays open");
    assert_eq!(session.draft.text(), "Walk more");
}

#[tokio::test]
async fn test_snapshot_drops_edit_of_vanished_todo() {
    let gateway = Arc::new(FailingGateway::with_todos(vec![
        todo("a", "A", 2),
        todo("b", "B", 1),
    ]));
    let mut app = app_with(gateway.clone());
    app.start_sync();
    settle(&mut app, |app| app.visible().len() == 2).await;

    app.focus = Focus::List;
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    assert!(app.edit.is_some());

    gateway.push(vec![todo("a", "A", 2)]);
    settle(&mut app, |app| app.visible().len() == 1).await;
    assert!(app.edit.is_none());
    assert_eq!(app.selected, 0);
}

#[tokio::test]
async fn test_loading_until_first_snapshot() {
    let gateway = Arc::new(FailingGateway::loading());
    let mut app = app_with(gateway.clone());
    app.start_sync();
    tokio::time::sleep(Duration::from_millis(20)).await;
    app.pump_messages();
    assert!(app.todos.is_none());

    gateway.push(vec![done("a", "A", 1)]);
    settle(&mut app, |app| app.todos.is_some()).await;
    assert_eq!(texts(&app), ["A"]);
}
