//! 业务逻辑处理 (Update/Dispatch)
//!
//! 包含核心的 dispatch 逻辑和导航、菜单、主题相关方法

use tracing::debug;

use super::actions::Action;
use super::state::{App, AppMode};
use crate::models::Section;

impl App {
    /// 核心逻辑分发，返回是否退出
    pub fn dispatch(&mut self, action: Action) -> bool {
        debug!(?action, "dispatch");
        match action {
            Action::Quit => return true,

            Action::ScrollUp => self.scroll_by(-1),
            Action::ScrollDown => self.scroll_by(1),
            Action::PageUp => self.scroll_by(-(self.page_step() as isize)),
            Action::PageDown => self.scroll_by(self.page_step() as isize),
            Action::ScrollTop => self.scroll = 0,
            Action::ScrollBottom => self.scroll = self.max_scroll(),

            Action::JumpTo(section) => self.scroll_to_section(section),
            Action::GetInTouch => self.scroll_to_section(Section::About),
            Action::NextSection => self.step_section(1),
            Action::PrevSection => self.step_section(-1),

            Action::ToggleMenu => self.toggle_menu(),
            Action::MenuUp => {
                self.menu_index = self.menu_index.saturating_sub(1);
            }
            Action::MenuDown => {
                if self.menu_index + 1 < Section::ALL.len() {
                    self.menu_index += 1;
                }
            }
            Action::MenuSelect => {
                let section = Section::ALL[self.menu_index.min(Section::ALL.len() - 1)];
                self.scroll_to_section(section);
            }

            Action::ToggleTheme => self.toggle_theme(),
            Action::Cancel => self.close_menu(),
        }
        false
    }

    // ============ 滚动相关 ============

    fn page_step(&self) -> usize {
        self.viewport_height.saturating_sub(1).max(1)
    }

    /// 相对滚动，限制在文档范围内
    pub fn scroll_by(&mut self, delta: isize) {
        let target = self.scroll.saturating_add_signed(delta);
        self.scroll = target.min(self.max_scroll());
    }

    /// 跳转到分区并关闭菜单
    pub fn scroll_to_section(&mut self, section: Section) {
        if let Some(line) = self.layout.anchor(section) {
            self.scroll = line.min(self.max_scroll());
        }
        self.close_menu();
        self.message = Some(format!("→ {}", section.label()));
    }

    fn step_section(&mut self, delta: isize) {
        let current = self.current_section();
        let index = Section::ALL
            .iter()
            .position(|s| *s == current)
            .unwrap_or(0);
        let target = index
            .saturating_add_signed(delta)
            .min(Section::ALL.len() - 1);
        self.scroll_to_section(Section::ALL[target]);
    }

    // ============ 菜单相关 ============

    pub fn toggle_menu(&mut self) {
        match self.mode {
            AppMode::Browsing => {
                self.mode = AppMode::Menu;
                self.menu_index = Section::ALL
                    .iter()
                    .position(|s| *s == self.current_section())
                    .unwrap_or(0);
            }
            AppMode::Menu => self.close_menu(),
        }
    }

    pub fn close_menu(&mut self) {
        self.mode = AppMode::Browsing;
    }

    // ============ 主题相关 ============

    pub fn toggle_theme(&mut self) {
        self.is_dark = !self.is_dark;
        self.message = Some(if self.is_dark {
            "Dark mode".to_string()
        } else {
            "Light mode".to_string()
        });
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::models::Profile;
    use crate::typewriter::clock::ManualClock;
    use crate::ui::state::PageLayout;

    fn app() -> App {
        let mut app =
            App::with_clock(Profile::default(), true, Rc::new(ManualClock::new())).unwrap();
        let anchors = Section::ALL
            .iter()
            .enumerate()
            .map(|(i, s)| (*s, i * 20))
            .collect();
        app.set_layout(
            PageLayout {
                height: 150,
                anchors,
            },
            30,
        );
        app
    }

    #[test]
    fn test_jump_sets_anchor_and_closes_menu() {
        let mut app = app();
        app.dispatch(Action::ToggleMenu);
        assert_eq!(app.mode, AppMode::Menu);

        app.dispatch(Action::JumpTo(Section::Experience));
        assert_eq!(app.scroll, 60);
        assert_eq!(app.mode, AppMode::Browsing);
        assert_eq!(app.current_section(), Section::Experience);
    }

    #[test]
    fn test_get_in_touch_goes_to_about() {
        let mut app = app();
        app.dispatch(Action::GetInTouch);
        assert_eq!(app.scroll, 20);
        assert_eq!(app.current_section(), Section::About);
    }

    #[test]
    fn test_jump_near_end_is_clamped() {
        let mut app = app();
        app.dispatch(Action::JumpTo(Section::Contact));
        assert_eq!(app.scroll, 120); // 150 - 30
    }

    #[test]
    fn test_scroll_clamped() {
        let mut app = app();
        app.dispatch(Action::ScrollUp);
        assert_eq!(app.scroll, 0);

        app.dispatch(Action::ScrollBottom);
        assert_eq!(app.scroll, 120);
        app.dispatch(Action::ScrollDown);
        assert_eq!(app.scroll, 120);

        app.dispatch(Action::PageUp);
        assert_eq!(app.scroll, 91);
        app.dispatch(Action::ScrollTop);
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn test_is_scrolled_threshold() {
        let mut app = app();
        assert!(!app.is_scrolled());
        app.scroll_by(2);
        assert!(!app.is_scrolled());
        app.scroll_by(1);
        assert!(app.is_scrolled());
    }

    #[test]
    fn test_menu_selection() {
        let mut app = app();
        app.dispatch(Action::JumpTo(Section::About));
        app.dispatch(Action::ToggleMenu);
        assert_eq!(app.menu_index, 1);

        app.dispatch(Action::MenuDown);
        app.dispatch(Action::MenuDown);
        app.dispatch(Action::MenuSelect);
        assert_eq!(app.current_section(), Section::Experience);
        assert_eq!(app.mode, AppMode::Browsing);

        app.dispatch(Action::ToggleMenu);
        for _ in 0..20 {
            app.dispatch(Action::MenuUp);
        }
        assert_eq!(app.menu_index, 0);
    }

    #[test]
    fn test_next_and_prev_section() {
        let mut app = app();
        app.dispatch(Action::NextSection);
        assert_eq!(app.current_section(), Section::About);
        app.dispatch(Action::NextSection);
        assert_eq!(app.current_section(), Section::Skills);
        app.dispatch(Action::PrevSection);
        assert_eq!(app.current_section(), Section::About);
        app.dispatch(Action::PrevSection);
        app.dispatch(Action::PrevSection);
        assert_eq!(app.current_section(), Section::Home);
    }

    #[test]
    fn test_toggle_theme() {
        let mut app = app();
        let dark = app.theme();
        app.dispatch(Action::ToggleTheme);
        assert!(!app.is_dark);
        assert_ne!(app.theme(), dark);
        app.dispatch(Action::ToggleTheme);
        assert_eq!(app.theme(), dark);
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        assert!(app.dispatch(Action::Quit));
        assert!(!app.dispatch(Action::ScrollDown));
    }
}
