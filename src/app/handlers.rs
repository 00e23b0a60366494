//! Input and message handling for the App.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use super::{App, AppMessage, Focus};
use crate::domain::InputBuffer;
use crate::error::GatewayAction;
use crate::models::StatusFilter;
use crate::ui::ClickAction;

/// Apply a line-editing key to `buffer`. Returns whether the key was used.
fn edit_buffer(buffer: &mut InputBuffer, key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER) =>
        {
            buffer.insert_char(c)
        }
        KeyCode::Backspace => buffer.backspace(),
        KeyCode::Delete => buffer.delete(),
        KeyCode::Left => buffer.move_left(),
        KeyCode::Right => buffer.move_right(),
        KeyCode::Home => buffer.move_home(),
        KeyCode::End => buffer.move_end(),
        _ => return false,
    }
    true
}

impl App {
    /// Handle an incoming async message
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        match msg {
            AppMessage::TodosUpdated { todos } => {
                tracing::trace!(count = todos.len(), "snapshot received");
                let edited_gone = self
                    .edit
                    .as_ref()
                    .is_some_and(|session| !todos.iter().any(|t| session.is_for(&t.id)));
                if edited_gone {
                    self.edit = None;
                }
                self.todos = Some(todos);
                self.clamp_selection();
            }
            AppMessage::MutationCompleted { action, target } => match action {
                GatewayAction::Create => self.draft.clear(),
                GatewayAction::Rename | GatewayAction::Delete => {
                    let closes = match (&self.edit, &target) {
                        (Some(session), Some(id)) => session.is_for(id),
                        _ => false,
                    };
                    if closes {
                        self.edit = None;
                    }
                }
                GatewayAction::Toggle | GatewayAction::ClearCompleted => {}
            },
            AppMessage::MutationFailed { action, error } => {
                tracing::warn!(
                    action = action.as_str(),
                    code = error.error_code(),
                    retryable = error.is_retryable(),
                    error = %error,
                    "mutation failed"
                );
                self.alert = Some(action.failure_message().to_string());
            }
        }
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.mark_dirty();
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if ctrl && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q')) {
            self.should_quit = true;
            return;
        }

        // A pending alert captures all input until dismissed
        if self.alert.is_some() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                self.dismiss_alert();
            }
            return;
        }

        if ctrl && key.code == KeyCode::Char('t') {
            self.toggle_theme();
            return;
        }

        if self.edit.is_some() {
            self.handle_edit_key(key);
            return;
        }

        match key.code {
            KeyCode::Tab => {
                self.focus = self.focus.next();
                return;
            }
            KeyCode::BackTab => {
                self.focus = self.focus.previous();
                return;
            }
            _ => {}
        }

        match self.focus {
            Focus::NewTodo => {
                if key.code == KeyCode::Enter {
                    self.submit_new_todo();
                } else {
                    edit_buffer(&mut self.draft, &key);
                }
            }
            Focus::Search => {
                if key.code == KeyCode::Enter {
                    self.focus = Focus::List;
                } else if edit_buffer(&mut self.search, &key) {
                    self.clamp_selection();
                }
            }
            Focus::List => self.handle_list_key(key),
        }
    }

    fn handle_edit_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.commit_edit(),
            KeyCode::Esc => self.cancel_edit(),
            // Leaving the field is a blur: the draft is discarded
            KeyCode::Tab => {
                self.cancel_edit();
                self.focus = self.focus.next();
            }
            KeyCode::BackTab => {
                self.cancel_edit();
                self.focus = self.focus.previous();
            }
            KeyCode::Up | KeyCode::Down => {
                self.cancel_edit();
                self.move_selection(if key.code == KeyCode::Up { -1 } else { 1 });
            }
            _ => {
                if let Some(session) = self.edit.as_mut() {
                    edit_buffer(&mut session.draft, &key);
                }
            }
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(1),
            KeyCode::Left => self.set_filter(self.filter.previous()),
            KeyCode::Right => self.set_filter(self.filter.next()),
            KeyCode::Char('1') => self.set_filter(StatusFilter::All),
            KeyCode::Char('2') => self.set_filter(StatusFilter::Active),
            KeyCode::Char('3') => self.set_filter(StatusFilter::Completed),
            KeyCode::Char('C') => self.clear_completed(),
            KeyCode::Char(' ') => {
                if let Some(todo) = self.selected_todo() {
                    self.toggle_todo(&todo.id);
                }
            }
            KeyCode::Enter | KeyCode::Char('e') => {
                if let Some(todo) = self.selected_todo() {
                    self.start_edit(&todo.id);
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(todo) = self.selected_todo() {
                    self.delete_todo(&todo.id);
                }
            }
            _ => {}
        }
    }

    /// Insert pasted text into the focused input. Line breaks become spaces.
    pub fn handle_paste(&mut self, text: &str) {
        if self.alert.is_some() {
            return;
        }
        self.mark_dirty();
        let text = text.replace(['\r', '\n'], " ");
        if let Some(session) = self.edit.as_mut() {
            session.draft.insert_str(&text);
            return;
        }
        match self.focus {
            Focus::NewTodo => self.draft.insert_str(&text),
            Focus::Search => {
                self.search.insert_str(&text);
                self.clamp_selection();
            }
            Focus::List => {}
        }
    }

    /// Handle a mouse event against the hit areas of the last render
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let Some(action) = self.hit_areas.hit_test(mouse.column, mouse.row) else {
                    return;
                };
                self.mark_dirty();
                if self.alert.is_some() {
                    if action == ClickAction::DismissAlert {
                        self.dismiss_alert();
                    }
                    return;
                }
                if self.edit.is_some() && !action.keeps_edit_focus() {
                    self.cancel_edit();
                }
                self.handle_click(action);
            }
            MouseEventKind::ScrollUp | MouseEventKind::ScrollDown if self.alert.is_none() => {
                self.mark_dirty();
                self.cancel_edit();
                let delta = if mouse.kind == MouseEventKind::ScrollUp { -1 } else { 1 };
                self.move_selection(delta);
            }
            _ => {}
        }
    }

    /// Dispatch a resolved click
    pub fn handle_click(&mut self, action: ClickAction) {
        match action {
            ClickAction::FocusNewTodo => self.focus = Focus::NewTodo,
            ClickAction::AddTodo => {
                self.focus = Focus::NewTodo;
                self.submit_new_todo();
            }
            ClickAction::FocusSearch => self.focus = Focus::Search,
            ClickAction::ToggleTodo(id) => {
                self.focus = Focus::List;
                self.select_id(&id);
                self.toggle_todo(&id);
            }
            ClickAction::EditTodo(id) => {
                self.focus = Focus::List;
                self.select_id(&id);
                self.start_edit(&id);
            }
            ClickAction::FocusEdit => {}
            ClickAction::SaveEdit => self.commit_edit(),
            ClickAction::DeleteTodo(id) => self.delete_todo(&id),
            ClickAction::SelectFilter(filter) => self.set_filter(filter),
            ClickAction::ClearCompleted => self.clear_completed(),
            ClickAction::ToggleTheme => self.toggle_theme(),
            ClickAction::DismissAlert => self.dismiss_alert(),
        }
    }
}
