//! 通用 UI 组件
//!
//! 弹窗框架、分区标题、技能条等

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear},
};

use crate::models::Skill;
use crate::theme::Theme;

const SKILL_BAR_WIDTH: usize = 20;
const SKILL_NAME_WIDTH: usize = 16;

/// [组件] 弹窗基础框架
pub fn render_dialog_framework(frame: &mut Frame, area: Rect, title: &str, theme: &Theme) -> Rect {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.card_hover_border))
        .style(Style::default().bg(theme.nav_background).fg(theme.text));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// [组件] 居中的分区标题和分隔线
pub fn section_header(title: &str, theme: &Theme, width: u16) -> Vec<Line<'static>> {
    let rule_width = (width as usize).clamp(1, 40);
    vec![
        Line::default(),
        Line::styled(
            title.to_string(),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .centered(),
        Line::styled("─".repeat(rule_width), Style::default().fg(theme.card_border)).centered(),
        Line::default(),
    ]
}

/// [组件] 技能进度条：名称 + 条 + 百分比
pub fn skill_bar(skill: &Skill, theme: &Theme) -> Line<'static> {
    let percent = skill.percent() as usize;
    let filled = (percent * SKILL_BAR_WIDTH + 50) / 100;

    Line::from(vec![
        Span::styled(
            format!("  {:<width$} ", skill.name, width = SKILL_NAME_WIDTH),
            Style::default().fg(theme.text_secondary),
        ),
        Span::styled("█".repeat(filled), Style::default().fg(theme.skill_bar)),
        Span::styled(
            "░".repeat(SKILL_BAR_WIDTH - filled),
            Style::default().fg(theme.skill_bar_background),
        ),
        Span::styled(
            format!(" {:>3}%", percent),
            Style::default().fg(theme.text_muted),
        ),
    ])
}

/// [组件] 卡片标题行
pub fn card_title(title: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled("▍", Style::default().fg(theme.card_hover_border)),
        Span::styled(
            title.to_string(),
            Style::default()
                .fg(theme.text)
                .add_modifier(Modifier::BOLD),
        ),
    ])
}

/// [组件] 次要信息行，空字段会被跳过
pub fn meta_line(parts: &[&str], theme: &Theme) -> Line<'static> {
    let text = parts
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" · ");
    Line::styled(format!("  {}", text), Style::default().fg(theme.text_muted))
}

/// [组件] 正文段落
pub fn body(text: &str, theme: &Theme) -> Line<'static> {
    Line::styled(format!("  {}", text), Style::default().fg(theme.text_secondary))
}

/// [组件] 空分区占位
pub fn empty_placeholder(theme: &Theme) -> Line<'static> {
    Line::styled(
        "  (nothing here yet)",
        Style::default()
            .fg(theme.text_muted)
            .add_modifier(Modifier::ITALIC),
    )
}
