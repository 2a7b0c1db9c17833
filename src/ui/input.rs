use crate::ui::screen::{Edit, Screen};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Action to take after processing a key event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction<Msg> {
    /// Nothing changed.
    None,
    /// Focus or live input text changed; draw again.
    Redraw,
    /// Hand this intent to the runtime loop (the screen changed too).
    Dispatch(Msg),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Next,
    Previous,
    Activate,
    Quit,
}

/// A navigation key binding, also rendered as a footer hint.
#[derive(Debug)]
pub struct Binding {
    pub keys: &'static str,
    pub label: &'static str,
    codes: &'static [KeyCode],
    command: Command,
}

pub const BINDINGS: &[Binding] = &[
    Binding {
        keys: "Tab/↓",
        label: "Next",
        codes: &[KeyCode::Tab, KeyCode::Down],
        command: Command::Next,
    },
    Binding {
        keys: "Shift+Tab/↑",
        label: "Previous",
        codes: &[KeyCode::BackTab, KeyCode::Up],
        command: Command::Previous,
    },
    Binding {
        keys: "Enter",
        label: "Activate",
        codes: &[KeyCode::Enter],
        command: Command::Activate,
    },
    Binding {
        keys: "Esc",
        label: "Quit",
        codes: &[KeyCode::Esc],
        command: Command::Quit,
    },
];

fn command_for(code: KeyCode) -> Option<Command> {
    BINDINGS
        .iter()
        .find(|binding| binding.codes.contains(&code))
        .map(|binding| binding.command)
}

pub fn handle_key<Msg: Clone>(screen: &mut Screen<Msg>, key: KeyEvent) -> InputAction<Msg> {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    if is_ctrl_char(key, 'c') {
        return InputAction::Quit;
    }

    if let Some(command) = command_for(key.code) {
        return match command {
            Command::Next => {
                screen.focus_next();
                InputAction::Redraw
            }
            Command::Previous => {
                screen.focus_prev();
                InputAction::Redraw
            }
            Command::Activate => match screen.activate() {
                Some(msg) => InputAction::Dispatch(msg),
                None => InputAction::Redraw,
            },
            Command::Quit => InputAction::Quit,
        };
    }

    match key.code {
        KeyCode::Backspace => edited(screen.edit(Edit::Backspace)),
        KeyCode::Char(ch)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            edited(screen.edit(Edit::Insert(ch)))
        }
        _ => InputAction::None,
    }
}

fn edited<Msg>(msg: Option<Msg>) -> InputAction<Msg> {
    match msg {
        Some(msg) => InputAction::Dispatch(msg),
        None => InputAction::Redraw,
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
