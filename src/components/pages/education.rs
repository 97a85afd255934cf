use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Widget,
};

use super::{bullet, page_title, paragraph, section, tags};
use crate::{components::PageView, content, theme::Theme};

pub const HEADING: &str = "Education & Certifications";

#[derive(Debug, Clone)]
pub struct Education {
    education: content::Education,
    view: PageView,
    theme: Theme,
}

impl Education {
    pub fn new(education: content::Education) -> Self {
        Self {
            education,
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
            "Learning",
            HEADING,
            "My academic background and continuous learning journey.",
            width,
            theme,
        );

        for school in &self.education.schools {
            lines.push(Line::styled(
                school.degree.clone(),
                Style::new().bold().fg(theme.heading_fg),
            ));
            lines.push(Line::from(vec![
                Span::styled(school.institution.clone(), Style::new().fg(theme.accent_alt)),
                Span::styled(format!("  ·  {}", school.period), Style::new().fg(theme.muted_fg)),
            ]));
            lines.push(Line::styled(
                format!(" {} ", school.status),
                Style::new().fg(theme.tag_fg).bg(theme.tag_bg),
            ));
            lines.extend(paragraph(
                &school.description,
                width,
                Style::new().fg(theme.muted_fg),
            ));
            for achievement in &school.achievements {
                lines.extend(bullet(
                    "★",
                    achievement,
                    width,
                    Style::new().fg(theme.accent),
                    Style::new().fg(theme.standard_fg),
                ));
            }
            lines.push(Line::default());
        }

        if !self.education.certifications.is_empty() {
            lines.extend(section("Certifications", theme));
            for certification in &self.education.certifications {
                lines.push(Line::from(vec![
                    Span::styled("✔ ", Style::new().fg(theme.accent)),
                    Span::styled(certification.title.clone(), Style::new().fg(theme.standard_fg)),
                ]));
                lines.push(Line::styled(
                    format!("  {} · {}", certification.issuer, certification.year),
                    Style::new().fg(theme.muted_fg),
                ));
            }
            lines.push(Line::default());
        }

        if !self.education.coursework.is_empty() {
            lines.extend(section("Relevant Coursework", theme));
            lines.extend(tags(&self.education.coursework, width, theme));
        }
        lines
    }
}

impl Widget for &mut Education {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = self.lines(PageView::content_width(area) as usize);
        self.view.render(lines, area, buf);
    }
}
