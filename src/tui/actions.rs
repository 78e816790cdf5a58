use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Focus};

/// Handle text editing operations on a buffer with UTF-8 aware cursor movement.
pub fn handle_text_input(buffer: &mut String, cursor: &mut usize, key: KeyEvent) {
    match key.code {
        KeyCode::Left => {
            if *cursor > 0 {
                let mut new_pos = *cursor - 1;
                while new_pos > 0 && !buffer.is_char_boundary(new_pos) {
                    new_pos -= 1;
                }
                *cursor = new_pos;
            }
        }
        KeyCode::Right => {
            if *cursor < buffer.len() {
                let mut new_pos = *cursor + 1;
                while new_pos < buffer.len() && !buffer.is_char_boundary(new_pos) {
                    new_pos += 1;
                }
                *cursor = new_pos;
            }
        }
        KeyCode::Home => {
            *cursor = buffer[..*cursor].rfind('\n').map(|i| i + 1).unwrap_or(0);
        }
        KeyCode::End => {
            *cursor = buffer[*cursor..]
                .find('\n')
                .map(|i| *cursor + i)
                .unwrap_or(buffer.len());
        }
        KeyCode::Backspace => {
            if *cursor > 0 {
                let mut del_start = *cursor - 1;
                while del_start > 0 && !buffer.is_char_boundary(del_start) {
                    del_start -= 1;
                }
                buffer.drain(del_start..*cursor);
                *cursor = del_start;
            }
        }
        KeyCode::Delete => {
            if *cursor < buffer.len() {
                let mut del_end = *cursor + 1;
                while del_end < buffer.len() && !buffer.is_char_boundary(del_end) {
                    del_end += 1;
                }
                buffer.drain(*cursor..del_end);
            }
        }
        KeyCode::Char(c) => {
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT {
                buffer.insert(*cursor, c);
                *cursor += c.len_utf8();
            }
        }
        _ => {}
    }
}

/// Something the user asked for, independent of the key that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Quit,
    ToggleFocus,
    SetMatrix,
    InsertNewline,
    SubmitOperation,
    Undo,
    Reset,
    OpenHelp,
}

/// Translate a key event to an action for the focused input.
///
/// Returns `None` for keys that should be treated as text editing.
pub fn translate(focus: Focus, key: KeyEvent) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('c') | KeyCode::Char('q') if ctrl => Some(Action::Quit),
        KeyCode::Char('z') if ctrl => Some(Action::Undo),
        KeyCode::Char('r') if ctrl => Some(Action::Reset),
        KeyCode::F(1) => Some(Action::OpenHelp),
        KeyCode::Tab | KeyCode::BackTab => Some(Action::ToggleFocus),
        KeyCode::Enter => match focus {
            Focus::MatrixInput
                if key
                    .modifiers
                    .intersects(KeyModifiers::SHIFT | KeyModifiers::ALT) =>
            {
                Some(Action::InsertNewline)
            }
            Focus::MatrixInput => Some(Action::SetMatrix),
            Focus::Operation => Some(Action::SubmitOperation),
        },
        _ => None,
    }
}

/// Result of applying an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApplyResult {
    Continue,
    Quit,
}

/// Apply an action to the application state.
///
/// Returns `ApplyResult::Quit` if the application should exit.
pub fn apply_action(app: &mut App, action: Action) -> ApplyResult {
    match action {
        Action::Quit => return ApplyResult::Quit,
        Action::ToggleFocus => app.toggle_focus(),
        Action::SetMatrix => app.set_matrix(),
        Action::InsertNewline => app.insert_newline(),
        Action::SubmitOperation => app.submit_operation(),
        Action::Undo => app.undo(),
        Action::Reset => app.reset(),
        Action::OpenHelp => app.open_help(),
    }
    ApplyResult::Continue
}

/// Route a text-editing key to the focused buffer.
pub fn handle_focused_text(app: &mut App, key: KeyEvent) {
    match app.focus {
        Focus::MatrixInput => handle_text_input(&mut app.matrix_input, &mut app.matrix_cursor, key),
        Focus::Operation => {
            handle_text_input(&mut app.operation_input, &mut app.operation_cursor, key)
        }
    }
}
