//! Hit area registry.

use ratatui::layout::Rect;

use crate::models::{StatusFilter, TodoId};

/// What a click on a registered area asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickAction {
    FocusNewTodo,
    AddTodo,
    FocusSearch,
    ToggleTodo(TodoId),
    /// Click on a todo's text: select it, and start editing if incomplete
    EditTodo(TodoId),
    /// Click inside the open edit field
    FocusEdit,
    SaveEdit,
    DeleteTodo(TodoId),
    SelectFilter(StatusFilter),
    ClearCompleted,
    ToggleTheme,
    DismissAlert,
}

impl ClickAction {
    /// Whether clicking this keeps an open edit session focused.
    pub fn keeps_edit_focus(&self) -> bool {
        matches!(self, ClickAction::FocusEdit | ClickAction::SaveEdit)
    }
}

/// A clickable region with an associated action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HitArea {
    pub rect: Rect,
    pub action: ClickAction,
}

impl HitArea {
    pub fn new(rect: Rect, action: ClickAction) -> Self {
        Self { rect, action }
    }

    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.rect.x
            && x < self.rect.x.saturating_add(self.rect.width)
            && y >= self.rect.y
            && y < self.rect.y.saturating_add(self.rect.height)
    }
}

/// Hit areas of the last rendered frame.
///
/// Cleared at the start of each render; areas registered later are on top.
#[derive(Debug, Default)]
pub struct HitAreaRegistry {
    areas: Vec<HitArea>,
}

impl HitAreaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.areas.clear();
    }

    /// Register an area. Empty rects are ignored.
    pub fn register(&mut self, rect: Rect, action: ClickAction) {
        if rect.width == 0 || rect.height == 0 {
            return;
        }
        self.areas.push(HitArea::new(rect, action));
    }

    /// Action of the topmost area containing the point.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<ClickAction> {
        self.areas
            .iter()
            .rev()
            .find(|area| area.contains(x, y))
            .map(|area| area.action.clone())
    }

    pub fn areas(&self) -> &[HitArea] {
        &self.areas
    }

    /// First registered area with the given action.
    pub fn find(&self, action: &ClickAction) -> Option<Rect> {
        self.areas
            .iter()
            .find(|area| &area.action == action)
            .map(|area| area.rect)
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}
