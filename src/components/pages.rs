//! One view per [`Page`](crate::app::Page), plus line builders they share.
//!
//! Views lay their content out as pre-wrapped lines and hand them to a
//! [`PageView`](crate::components::PageView) for scrolling.

use ratatui::{
    style::{Style, Stylize},
    text::{Line, Span},
};

use crate::{theme::Theme, utils::wrap_words};

pub mod contact;
pub mod education;
pub mod experience;
pub mod home;
pub mod project_detail;
pub mod projects;
pub mod skills;

pub use contact::Contact;
pub use education::Education;
pub use experience::Experience;
pub use home::Home;
pub use project_detail::ProjectDetail;
pub use projects::Projects;
pub use skills::Skills;

fn page_title(
    eyebrow: &str,
    title: &str,
    subtitle: &str,
    width: usize,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::default(),
        Line::styled(eyebrow.to_uppercase(), Style::new().fg(theme.accent)),
        Line::styled(title.to_string(), Style::new().bold().fg(theme.heading_fg)),
    ];
    lines.extend(paragraph(subtitle, width, Style::new().fg(theme.muted_fg)));
    lines.push(Line::default());
    lines
}

fn section(title: &str, theme: &Theme) -> Vec<Line<'static>> {
    vec![
        Line::styled(title.to_string(), Style::new().bold().fg(theme.heading_fg)),
        Line::styled("━".repeat(Span::raw(title).width()), Style::new().fg(theme.accent_alt)),
    ]
}

fn paragraph(text: &str, width: usize, style: Style) -> Vec<Line<'static>> {
    wrap_words(text, width)
        .into_iter()
        .map(|line| Line::styled(line, style))
        .collect()
}

/// Wrapped text with `marker` on the first line and hanging indent after.
fn bullet(
    marker: &str,
    text: &str,
    width: usize,
    marker_style: Style,
    style: Style,
) -> Vec<Line<'static>> {
    let indent = Span::raw(marker).width() + 1;
    wrap_words(text, width.saturating_sub(indent))
        .into_iter()
        .enumerate()
        .map(|(index, line)| {
            let prefix = if index == 0 {
                Span::styled(format!("{marker} "), marker_style)
            } else {
                Span::raw(" ".repeat(indent))
            };
            Line::from(vec![prefix, Span::styled(line, style)])
        })
        .collect()
}

/// Tags as chips, wrapped onto as many lines as needed.
fn tags<S: AsRef<str>>(items: &[S], width: usize, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut used = 0;
    for item in items {
        let chip = Span::styled(
            format!(" {} ", item.as_ref()),
            Style::new().fg(theme.tag_fg).bg(theme.tag_bg),
        );
        let chip_width = chip.width() + 1;
        if used > 0 && used + chip_width > width {
            lines.push(Line::from(std::mem::take(&mut spans)));
            used = 0;
        }
        spans.push(chip);
        spans.push(Span::raw(" "));
        used += chip_width;
    }
    if !spans.is_empty() {
        lines.push(Line::from(spans));
    }
    lines
}

/// Horizontal bar filled to `level` percent.
fn level_bar(level: u8, width: usize, theme: &Theme) -> Line<'static> {
    let filled = (width * level.min(100) as usize) / 100;
    Line::from(vec![
        Span::styled("█".repeat(filled), Style::new().fg(theme.gauge_filled)),
        Span::styled("░".repeat(width - filled), Style::new().fg(theme.gauge_empty)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn bullet_indents_continuation_lines() {
        let lines = bullet("▸", "one two three four", 10, Style::new(), Style::new());
        let lines: Vec<String> = lines.iter().map(text).collect();
        assert_eq!(lines, vec!["▸ one two", "  three", "  four"]);
    }

    #[test]
    fn tags_wrap_to_width() {
        let theme = Theme::new();
        let lines = tags(&["React", "Node.js", "MongoDB"], 18, &theme);
        assert_eq!(lines.len(), 2);
        assert_eq!(text(&lines[0]), " React   Node.js  ");
        assert_eq!(text(&lines[1]), " MongoDB  ");
    }

    #[test]
    fn wide_characters_count_by_display_width() {
        let theme = Theme::new();
        let underline = &section("技能", &theme)[1];
        assert_eq!(text(underline), "━━━━");

        let lines = tags(&["日本語", "Rust"], 14, &theme);
        assert_eq!(lines.len(), 2);
        assert_eq!(text(&lines[0]), " 日本語  ");
    }

    #[test]
    fn level_bar_fills_proportionally() {
        let theme = Theme::new();
        assert_eq!(text(&level_bar(50, 10, &theme)), "█████░░░░░");
        assert_eq!(text(&level_bar(100, 4, &theme)), "████");
        assert_eq!(text(&level_bar(0, 4, &theme)), "░░░░");
    }
}
