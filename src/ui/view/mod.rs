//! 视图层模块
//!
//! 包含主渲染入口和各种视图组件

pub mod components;
pub mod layouts;
pub mod page;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use super::state::{App, AppMode};
use crate::models::Section;
use crate::theme::Theme;
use components::render_dialog_framework;
use layouts::centered_rect;
use page::build_page;

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 导航栏
            Constraint::Min(5),    // 页面
            Constraint::Length(3), // 帮助
        ])
        .split(frame.area());

    render_page(frame, app, chunks[1]);
    render_navbar(frame, app, chunks[0]);
    render_help(frame, app, chunks[2]);

    if app.mode == AppMode::Menu {
        render_menu(frame, app);
    }
}

fn render_navbar(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();
    // 未滚动时导航栏透明
    let background = if app.is_scrolled() {
        theme.nav_background
    } else {
        theme.background
    };
    let current = app.current_section();

    let mut spans = vec![
        Span::styled(
            "Portfolio",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            Theme::toggle_icon(app.is_dark),
            Style::default().fg(theme.text),
        ),
        Span::raw("  "),
    ];
    for (i, section) in Section::ALL.iter().enumerate() {
        let style = if *section == current {
            Style::default()
                .fg(theme.highlight)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(theme.text_secondary)
        };
        spans.push(Span::styled(format!("{} {}", i + 1, section.label()), style));
        spans.push(Span::raw("  "));
    }
    let navbar = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(background))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(theme.card_border)),
        );
    frame.render_widget(navbar, area);
}

fn render_page(frame: &mut Frame, app: &mut App, area: Rect) {
    let theme = app.theme();
    let page = build_page(app, area.width);
    app.set_layout(page.layout, area.height as usize);

    let scroll = u16::try_from(app.scroll).unwrap_or(u16::MAX);
    let document = Paragraph::new(page.lines)
        .style(Style::default().bg(theme.background).fg(theme.text))
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(document, area);
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();
    let help_text = match app.mode {
        AppMode::Browsing => {
            "[j/k] scroll  [n/p] section  [1-7] jump  [m] menu  [t] theme  [q] quit"
        }
        AppMode::Menu => "[j/k] select  [Enter] go  [Esc] close",
    };

    let message = app.message.as_deref().unwrap_or("");
    let text = if message.is_empty() {
        help_text.to_string()
    } else {
        format!("{}  |  {}", help_text, message)
    };

    let help = Paragraph::new(text)
        .style(Style::default().fg(theme.text_muted).bg(theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.card_border)),
        );

    frame.render_widget(help, area);
}

fn render_menu(frame: &mut Frame, app: &App) {
    let theme = app.theme();
    let area = centered_rect(40, 50, frame.area());
    let inner = render_dialog_framework(frame, area, "Menu", &theme);

    let items: Vec<ListItem> = Section::ALL
        .iter()
        .map(|section| {
            ListItem::new(Line::styled(
                section.label(),
                Style::default().fg(theme.text_secondary),
            ))
        })
        .collect();

    let list = List::new(items).highlight_style(
        Style::default()
            .fg(theme.highlight)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED),
    );

    let mut state = ListState::default();
    state.select(Some(app.menu_index));

    frame.render_stateful_widget(list, inner, &mut state);
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::models::Profile;
    use crate::typewriter::clock::ManualClock;
    use crate::ui::actions::Action;

    fn app() -> App {
        App::with_clock(Profile::default(), true, Rc::new(ManualClock::new())).unwrap()
    }

    fn screen(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_render_records_layout() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut app = app();
        terminal.draw(|f| render(f, &mut app)).unwrap();

        assert_eq!(app.viewport_height, 18);
        assert_eq!(app.layout.anchors.len(), Section::ALL.len());
        assert!(screen(&terminal).contains("Portfolio"));
    }

    #[test]
    fn test_jump_after_render_uses_real_anchor() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut app = app();
        terminal.draw(|f| render(f, &mut app)).unwrap();

        app.dispatch(Action::JumpTo(Section::Skills));
        let anchor = app.layout.anchor(Section::Skills).unwrap();
        assert_eq!(app.scroll, anchor.min(app.max_scroll()));

        terminal.draw(|f| render(f, &mut app)).unwrap();
        assert!(screen(&terminal).contains("My Skills"));
    }

    #[test]
    fn test_render_menu_and_light_theme() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut app = app();
        app.dispatch(Action::ToggleTheme);
        app.dispatch(Action::ToggleMenu);
        terminal.draw(|f| render(f, &mut app)).unwrap();

        let text = screen(&terminal);
        assert!(text.contains("Menu"));
        assert!(text.contains("☾"));
    }

    #[test]
    fn test_render_tiny_terminal_does_not_panic() {
        let mut terminal = Terminal::new(TestBackend::new(10, 6)).unwrap();
        let mut app = app();
        app.dispatch(Action::ToggleMenu);
        terminal.draw(|f| render(f, &mut app)).unwrap();
    }
}
