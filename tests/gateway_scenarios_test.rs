//! End-to-end behavior of the in-memory gateway and the filtering engine.

mod common;

use std::sync::Arc;

use todosync::adapters::MemoryGateway;
use todosync::domain::{items_left, visible};
use todosync::error::GatewayError;
use todosync::models::{StatusFilter, Todo, TodoId};
use todosync::store::TodoStore;
use todosync::traits::TodoGateway;
use todosync::ui::{ThemeMode, ThemeStore};

use common::{done, todo};

fn texts(todos: &[Todo]) -> Vec<&str> {
    todos.iter().map(|t| t.text.as_str()).collect()
}

fn gateway_with_fixed_clock() -> MemoryGateway {
    MemoryGateway::new(Arc::new(TodoStore::with_clock(|| 42)))
}

#[tokio::test]
async fn test_create_then_list() {
    let gateway = MemoryGateway::default();
    let mut query = gateway.list();
    assert_eq!(query.current(), Some(vec![]));

    let id = gateway.create("Buy milk").await.unwrap();
    let todos = query.wait_for(|t| t.len() == 1).await.unwrap();
    assert_eq!(todos[0].id, id);
    assert_eq!(todos[0].text, "Buy milk");
    assert!(!todos[0].completed);
}

#[tokio::test]
async fn test_same_millisecond_inserts_list_newest_first() {
    let gateway = gateway_with_fixed_clock();
    gateway.create("A").await.unwrap();
    gateway.create("B").await.unwrap();

    let todos = gateway.list().current().unwrap();
    assert_eq!(texts(&todos), vec!["B", "A"]);
}

#[tokio::test]
async fn test_buy_milk_scenario() {
    let gateway = MemoryGateway::default();
    let mut query = gateway.list();

    let id = gateway.create("Buy milk").await.unwrap();
    gateway.set_completion(&id, true).await.unwrap();
    let todos = query.wait_for(|t| t.iter().any(|t| t.completed)).await.unwrap();
    assert!(visible(&todos, "", StatusFilter::Active).is_empty());
    assert_eq!(texts(&visible(&todos, "", StatusFilter::Completed)), vec!["Buy milk"]);
    assert_eq!(items_left(&todos), 0);

    gateway.clear_completed().await.unwrap();
    let todos = query.wait_for(|t| t.is_empty()).await.unwrap();
    assert!(todos.is_empty());
}

#[tokio::test]
async fn test_clear_completed_keeps_incomplete() {
    let gateway = gateway_with_fixed_clock();
    let a = gateway.create("A").await.unwrap();
    gateway.create("B").await.unwrap();
    let c = gateway.create("C").await.unwrap();
    gateway.set_completion(&a, true).await.unwrap();
    gateway.set_completion(&c, true).await.unwrap();

    gateway.clear_completed().await.unwrap();
    let todos = gateway.list().current().unwrap();
    assert_eq!(texts(&todos), vec!["B"]);
    assert!(todos.iter().all(|t| !t.completed));
}

#[tokio::test]
async fn test_rename_and_delete() {
    let gateway = MemoryGateway::default();
    let id = gateway.create("Buy milk").await.unwrap();
    gateway.rename(&id, "Buy oat milk").await.unwrap();
    assert_eq!(gateway.list().current().unwrap()[0].text, "Buy oat milk");

    gateway.delete(&id).await.unwrap();
    assert_eq!(gateway.list().current(), Some(vec![]));
}

#[tokio::test]
async fn test_missing_id_is_rejected() {
    let gateway = MemoryGateway::default();
    let err = gateway.delete(&TodoId::new("gone")).await.unwrap_err();
    assert!(matches!(err, GatewayError::Rejected { ref path, .. } if path == "todos:remove"));
}

#[test]
fn test_visible_identity_and_idempotence() {
    let list = vec![
        todo("c", "Walk dog", 3),
        done("b", "Buy milk", 2),
        todo("a", "buy eggs", 1),
    ];

    // Identity: no search, all filter
    assert_eq!(visible(&list, "", StatusFilter::All), list);

    for filter in StatusFilter::ALL {
        for search in ["", "buy", "BUY", "dog", "zzz"] {
            let once = visible(&list, search, filter);
            assert_eq!(visible(&once, search, filter), once);
            for t in &once {
                assert!(filter.matches(t.completed));
                assert!(t.text.to_lowercase().contains(&search.to_lowercase()));
            }
        }
    }

    assert_eq!(
        texts(&visible(&list, "BUY", StatusFilter::All)),
        vec!["Buy milk", "buy eggs"]
    );
}

#[test]
fn test_theme_double_toggle() {
    let theme = ThemeStore::default();
    assert_eq!(theme.current(), ThemeMode::Light);
    theme.toggle();
    theme.toggle();
    assert_eq!(theme.current(), ThemeMode::Light);
}
