use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Widget,
};

use super::{bullet, page_title, section};
use crate::{components::PageView, content::Role, theme::Theme};

pub const HEADING: &str = "Work Experience";

#[derive(Debug, Clone)]
pub struct Experience {
    roles: Vec<Role>,
    view: PageView,
    theme: Theme,
}

impl Experience {
    pub fn new(roles: Vec<Role>) -> Self {
        Self {
            roles,
            view: PageView::new(),
            theme: Theme::new(),
        }
    }

    pub fn view_mut(&mut self) -> &mut PageView {
        &mut self.view
    }

    fn lines(&self, width: usize) -> Vec<Line<'static>> {
        let theme = &self.theme;
        let mut lines = page_title(
            "Career",
            HEADING,
            "My professional journey and the roles that shaped my skills.",
            width,
            theme,
        );
        for role in &self.roles {
            lines.push(Line::from(vec![
                Span::styled("● ", Style::new().fg(theme.accent)),
                Span::styled(role.role.clone(), Style::new().bold().fg(theme.heading_fg)),
            ]));
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(role.company.clone(), Style::new().fg(theme.accent_alt)),
                Span::styled(format!("  ·  {}", role.period), Style::new().fg(theme.muted_fg)),
            ]));
            for highlight in &role.highlights {
                let mut item = bullet(
                    "▸",
                    highlight,
                    width.saturating_sub(2),
                    Style::new().fg(theme.accent),
                    Style::new().fg(theme.standard_fg),
                );
                for line in &mut item {
                    line.spans.insert(0, Span::raw("  "));
                }
                lines.extend(item);
            }
            lines.push(Line::default());
        }
        lines.extend(section("Interested in working together?", theme));
        lines.push(Line::styled(
            "Press (6) to open the contact page.",
            Style::new().fg(theme.muted_fg),
        ));
        lines
    }
}

impl Widget for &mut Experience {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = self.lines(PageView::content_width(area) as usize);
        self.view.render(lines, area, buf);
    }
}
