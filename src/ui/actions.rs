//! Action 枚举定义 (Intent)
//!
//! 用户交互转化为明确的语义化 Action

use crate::models::Section;

/// 用户操作枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,

    // 滚动
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ScrollTop,
    ScrollBottom,

    // 导航
    JumpTo(Section),
    GetInTouch, // 英雄区按钮，跳到 About
    NextSection,
    PrevSection,

    // 菜单
    ToggleMenu,
    MenuUp,
    MenuDown,
    MenuSelect,

    ToggleTheme,
    Cancel, // Esc
}
