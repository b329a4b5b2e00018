//! 主题配色
//!
//! 深色 / 浅色两套调色板，所有视图组件都从这里取颜色。

use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub card_border: Color,
    pub card_hover_border: Color,
    pub accent: Color,
    pub highlight: Color,
    pub text: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub nav_background: Color,
    pub skill_bar: Color,
    pub skill_bar_background: Color,
    pub footer_background: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            background: Color::Rgb(17, 24, 39),
            card_border: Color::Rgb(55, 65, 81),
            card_hover_border: Color::Rgb(139, 92, 246),
            accent: Color::Rgb(167, 139, 250),
            highlight: Color::Rgb(244, 114, 182),
            text: Color::Rgb(255, 255, 255),
            text_secondary: Color::Rgb(209, 213, 219),
            text_muted: Color::Rgb(156, 163, 175),
            nav_background: Color::Rgb(31, 41, 55),
            skill_bar: Color::Rgb(139, 92, 246),
            skill_bar_background: Color::Rgb(55, 65, 81),
            footer_background: Color::Rgb(17, 24, 39),
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color::Rgb(254, 243, 199),
            card_border: Color::Rgb(229, 231, 235),
            card_hover_border: Color::Rgb(139, 92, 246),
            accent: Color::Rgb(124, 58, 237),
            highlight: Color::Rgb(219, 39, 119),
            text: Color::Rgb(17, 24, 39),
            text_secondary: Color::Rgb(55, 65, 81),
            text_muted: Color::Rgb(107, 114, 128),
            nav_background: Color::Rgb(255, 255, 255),
            skill_bar: Color::Rgb(124, 58, 237),
            skill_bar_background: Color::Rgb(229, 231, 235),
            footer_background: Color::Rgb(255, 255, 255),
        }
    }

    pub fn for_mode(is_dark: bool) -> Self {
        if is_dark { Self::dark() } else { Self::light() }
    }

    /// 切换按钮图标：深色下显示太阳，浅色下显示月亮
    pub fn toggle_icon(is_dark: bool) -> &'static str {
        if is_dark { "☀" } else { "☾" }
    }
}
