//! 页面文档
//!
//! 把整个资料拼成一份长文档，同时记录每个分区的起始行（按折行后的行数计算）。

use chrono::{Datelike, Local};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::components::{
    body, card_title, empty_placeholder, meta_line, section_header, skill_bar,
};
use crate::models::{Profile, Section};
use crate::theme::Theme;
use crate::ui::state::{App, PageLayout};

pub struct Page {
    pub lines: Vec<Line<'static>>,
    pub layout: PageLayout,
}

/// 构建完整文档
pub fn build_page(app: &App, width: u16) -> Page {
    let theme = app.theme();
    let mut lines = Vec::new();
    let mut anchors = Vec::with_capacity(Section::ALL.len());
    let mut height = 0;

    for section in Section::ALL {
        let section_lines = match section {
            Section::Home => hero(app, &theme),
            _ => {
                let mut out = section_header(section.title(), &theme, width);
                if app.profile.is_empty_section(section) {
                    out.push(empty_placeholder(&theme));
                } else {
                    out.extend(section_body(&app.profile, section, &theme));
                }
                out
            }
        };

        anchors.push((section, height));
        height += wrapped_line_count(&section_lines, width);
        lines.extend(section_lines);
    }

    Page {
        lines,
        layout: PageLayout { height, anchors },
    }
}

/// 折行后的行数
pub fn wrapped_line_count(lines: &[Line], width: u16) -> usize {
    if lines.is_empty() {
        return 0;
    }
    Paragraph::new(lines.to_vec())
        .wrap(Wrap { trim: false })
        .line_count(width.max(1))
}

fn hero(app: &App, theme: &Theme) -> Vec<Line<'static>> {
    let cursor = if app.animation.cursor_visible() { "|" } else { " " };

    vec![
        Line::default(),
        Line::styled("Hello, I'm", Style::default().fg(theme.accent)).centered(),
        Line::styled(
            app.profile.name.clone(),
            Style::default()
                .fg(theme.text)
                .add_modifier(Modifier::BOLD),
        )
        .centered(),
        Line::from(vec![
            Span::styled("I'm a ", Style::default().fg(theme.text_secondary)),
            Span::styled(
                app.animation.display().to_string(),
                Style::default()
                    .fg(theme.highlight)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(cursor, Style::default().fg(theme.text)),
        ])
        .centered(),
        Line::default(),
        Line::styled(
            "[ Enter ] Get In Touch",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .centered(),
        Line::default(),
        Line::styled("⌄", Style::default().fg(theme.text_muted)).centered(),
    ]
}

fn section_body(profile: &Profile, section: Section, theme: &Theme) -> Vec<Line<'static>> {
    let mut out = Vec::new();
    match section {
        Section::Home => {}
        Section::About => {
            out.push(card_title("Who am I?", theme));
            for paragraph in &profile.about {
                out.push(body(paragraph, theme));
                out.push(Line::default());
            }
            for fact in &profile.facts {
                out.push(Line::from(vec![
                    Span::styled(
                        format!("  {}: ", fact.label),
                        Style::default()
                            .fg(theme.text)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(fact.value.clone(), Style::default().fg(theme.text_muted)),
                ]));
            }
        }
        Section::Skills => {
            out.extend(profile.skills.iter().map(|s| skill_bar(s, theme)));
        }
        Section::Experience => {
            for exp in &profile.experiences {
                out.push(card_title(&exp.title, theme));
                out.push(meta_line(
                    &[
                        exp.company.as_str(),
                        exp.location.as_str(),
                        exp.period.as_str(),
                    ],
                    theme,
                ));
                if !exp.description.is_empty() {
                    out.push(body(&exp.description, theme));
                }
                out.push(Line::default());
            }
        }
        Section::Projects => {
            for project in &profile.projects {
                out.push(card_title(&project.title, theme));
                if !project.description.is_empty() {
                    out.push(body(&project.description, theme));
                }
                if !project.tags.is_empty() {
                    let tags: Vec<Span> = project
                        .tags
                        .iter()
                        .flat_map(|tag| {
                            [
                                Span::raw(" "),
                                Span::styled(
                                    format!("[{}]", tag),
                                    Style::default().fg(theme.accent),
                                ),
                            ]
                        })
                        .collect();
                    let mut spans = vec![Span::raw(" ")];
                    spans.extend(tags);
                    out.push(Line::from(spans));
                }
                if let Some(link) = &project.live_link {
                    out.push(meta_line(&[format!("Live: {}", link).as_str()], theme));
                }
                if let Some(link) = &project.source_link {
                    out.push(meta_line(&[format!("Code: {}", link).as_str()], theme));
                }
                out.push(Line::default());
            }
        }
        Section::Education => {
            for edu in &profile.education {
                out.push(card_title(&edu.degree, theme));
                out.push(meta_line(
                    &[edu.institution.as_str(), edu.location.as_str()],
                    theme,
                ));
                if !edu.period.is_empty() {
                    out.push(meta_line(&[edu.period.as_str()], theme));
                }
                out.push(Line::default());
            }
        }
        Section::Contact => out = footer(profile, theme),
    }
    out
}

fn footer(profile: &Profile, theme: &Theme) -> Vec<Line<'static>> {
    let bg = Style::default().bg(theme.footer_background);
    let links = Section::ALL
        .iter()
        .map(|s| s.label())
        .collect::<Vec<_>>()
        .join(" · ");

    let mut out = vec![
        card_title(&profile.name, theme),
        body(&profile.tagline, theme),
        Line::default(),
        Line::styled(
            "  Quick Links",
            Style::default()
                .fg(theme.text)
                .add_modifier(Modifier::BOLD),
        ),
        meta_line(&[links.as_str()], theme),
        Line::default(),
    ];
    let contact = &profile.contact;
    for (icon, value) in [
        ("⌂", contact.location.as_str()),
        ("☎", contact.phone.as_str()),
        ("✉", contact.email.as_str()),
    ] {
        if !value.is_empty() {
            out.push(meta_line(&[format!("{} {}", icon, value).as_str()], theme));
        }
    }
    for social in &profile.socials {
        out.push(meta_line(&[social.label.as_str(), social.url.as_str()], theme));
    }
    out.push(Line::default());
    out.push(
        Line::styled(
            format!("© {} {}. All rights reserved.", Local::now().year(), profile.name),
            Style::default().fg(theme.text_muted),
        )
        .centered(),
    );
    out.into_iter().map(|line| line.patch_style(bg)).collect()
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::typewriter::clock::ManualClock;

    fn app(profile: Profile) -> App {
        App::with_clock(profile, true, Rc::new(ManualClock::new())).unwrap()
    }

    fn plain(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_anchors_are_increasing_and_cover_all_sections() {
        let page = build_page(&app(Profile::default()), 80);
        let anchors = &page.layout.anchors;
        assert_eq!(anchors.len(), Section::ALL.len());
        assert_eq!(anchors[0], (Section::Home, 0));
        assert!(anchors.windows(2).all(|w| w[0].1 < w[1].1));
        assert!(page.layout.height > anchors.last().unwrap().1);
    }

    #[test]
    fn test_narrow_width_adds_wrapped_rows() {
        let a = app(Profile::default());
        let wide = build_page(&a, 200).layout.height;
        let narrow = build_page(&a, 30).layout.height;
        assert!(narrow > wide);
    }

    #[test]
    fn test_anchor_points_at_section_title() {
        let a = app(Profile::default());
        let width = 500; // 足够宽，不折行
        let page = build_page(&a, width);
        let text = plain(&page.lines);
        let skills = page.layout.anchor(Section::Skills).unwrap();
        // 标题前有一个空行
        assert_eq!(text[skills + 1], "My Skills");
    }

    #[test]
    fn test_empty_sections_show_placeholder() {
        let profile = Profile {
            skills: Vec::new(),
            projects: Vec::new(),
            ..Profile::default()
        };
        let page = build_page(&app(profile), 80);
        let text = plain(&page.lines);
        assert_eq!(
            text.iter().filter(|l| l.contains("(nothing here yet)")).count(),
            2
        );
    }

    #[test]
    fn test_hero_shows_typed_text_and_cursor() {
        let page = build_page(&app(Profile::default()), 80);
        let text = plain(&page.lines);
        assert!(text.iter().any(|l| l == "I'm a |"));
    }

    #[test]
    fn test_footer_has_copyright() {
        let profile = Profile::default();
        let page = build_page(&app(profile.clone()), 80);
        let text = plain(&page.lines);
        let last = text.last().unwrap();
        assert!(last.starts_with("© "));
        assert!(last.contains(&profile.name));
    }
}
