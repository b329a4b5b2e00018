//! 键盘事件映射 (Input -> Action)
//!
//! 将按键事件转换为 Action

use crossterm::event::KeyCode;

use super::actions::Action;
use super::state::{App, AppMode};
use crate::models::Section;

/// 根据当前模式和按键获取对应的 Action
pub fn get_action(mode: AppMode, key: KeyCode) -> Option<Action> {
    match mode {
        AppMode::Browsing => match key {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::ScrollDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::ScrollUp),
            KeyCode::PageDown | KeyCode::Char(' ') => Some(Action::PageDown),
            KeyCode::PageUp => Some(Action::PageUp),
            KeyCode::Home | KeyCode::Char('g') => Some(Action::ScrollTop),
            KeyCode::End | KeyCode::Char('G') => Some(Action::ScrollBottom),
            KeyCode::Tab | KeyCode::Char('n') => Some(Action::NextSection),
            KeyCode::BackTab | KeyCode::Char('p') => Some(Action::PrevSection),
            KeyCode::Enter => Some(Action::GetInTouch),
            KeyCode::Char('m') => Some(Action::ToggleMenu),
            KeyCode::Char('t') => Some(Action::ToggleTheme),
            KeyCode::Char(c @ '1'..='7') => {
                let index = c as usize - '1' as usize;
                Section::ALL.get(index).copied().map(Action::JumpTo)
            }
            _ => None,
        },
        AppMode::Menu => match key {
            KeyCode::Esc | KeyCode::Char('m') => Some(Action::Cancel),
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::MenuDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::MenuUp),
            KeyCode::Enter => Some(Action::MenuSelect),
            KeyCode::Char('t') => Some(Action::ToggleTheme),
            _ => None,
        },
    }
}

/// 处理按键事件，返回是否退出
pub fn handle_key_event(app: &mut App, key: KeyCode) -> bool {
    match get_action(app.mode, key) {
        Some(action) => app.dispatch(action),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_browsing_keys() {
        assert_eq!(
            get_action(AppMode::Browsing, KeyCode::Char('q')),
            Some(Action::Quit)
        );
        assert_eq!(
            get_action(AppMode::Browsing, KeyCode::Char('t')),
            Some(Action::ToggleTheme)
        );
        assert_eq!(
            get_action(AppMode::Browsing, KeyCode::Char('3')),
            Some(Action::JumpTo(Section::Skills))
        );
        assert_eq!(get_action(AppMode::Browsing, KeyCode::Char('8')), None);
    }

    #[test]
    fn test_menu_keys_differ_from_browsing() {
        assert_eq!(
            get_action(AppMode::Menu, KeyCode::Char('j')),
            Some(Action::MenuDown)
        );
        assert_eq!(
            get_action(AppMode::Browsing, KeyCode::Char('j')),
            Some(Action::ScrollDown)
        );
        assert_eq!(
            get_action(AppMode::Menu, KeyCode::Enter),
            Some(Action::MenuSelect)
        );
        assert_eq!(get_action(AppMode::Menu, KeyCode::Esc), Some(Action::Cancel));
        assert_eq!(get_action(AppMode::Menu, KeyCode::Char('3')), None);
    }
}
