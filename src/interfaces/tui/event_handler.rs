//! 按键映射
//!
//! 根据当前屏幕和焦点把按键转换为 Action，不修改任何状态

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::action::Action;
use super::app::{App, Focus, Screen};

pub fn map_key(app: &App, key: KeyEvent) -> Action {
    // Ctrl-C 在任何屏幕都直接退出
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    match app.screen {
        Screen::Main => map_main_key(app.form.focus(), key),
        Screen::Help => match key.code {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q') => {
                Action::CloseHelp
            }
            _ => Action::Noop,
        },
        Screen::Exiting => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => Action::ConfirmExit,
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Action::CancelExit,
            _ => Action::Noop,
        },
    }
}

fn map_main_key(focus: Focus, key: KeyEvent) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('y') => Action::Copy,
            _ => Action::Noop,
        };
    }

    match key.code {
        KeyCode::Tab => Action::FocusNext,
        KeyCode::BackTab => Action::FocusPrev,
        KeyCode::Esc => Action::RequestExit,
        KeyCode::F(1) => Action::ShowHelp,
        KeyCode::Up => Action::ScrollUp,
        KeyCode::Down => Action::ScrollDown,
        KeyCode::Enter => match focus {
            Focus::Copy => Action::Copy,
            _ => Action::Submit,
        },
        KeyCode::Backspace if focus.is_text_input() => Action::DeleteChar,
        KeyCode::Char(c) if focus.is_text_input() => Action::InputChar(c),
        KeyCode::Char(' ') => match focus {
            Focus::CustomCodeToggle => Action::ToggleCustomCode,
            Focus::Submit => Action::Submit,
            Focus::Copy => Action::Copy,
            _ => Action::Noop,
        },
        KeyCode::Char('?') => Action::ShowHelp,
        _ => Action::Noop,
    }
}
