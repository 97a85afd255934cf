use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Widget,
};

use super::{page_title, paragraph, section, tags};
use crate::{components::PageView, content::Project, theme::Theme};

pub const HEADING: &str = "All Projects";

#[derive(Debug, Clone)]
pub struct Projects {
    projects: Vec<Project>,
    view: PageView,
    theme: Theme,
}

impl Projects {
    pub fn new(projects: Vec<Project>) -> Self {
        Self {
            projects,
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
            "Work",
            HEADING,
            "A collection of projects I've built, from web applications to developer tools.",
            width,
            theme,
        );
        for (index, project) in self.projects.iter().enumerate() {
            lines.push(Line::from(vec![
                Span::styled(format!("{:02} ", index + 1), Style::new().fg(theme.accent_alt)),
                Span::styled(project.title.clone(), Style::new().bold().fg(theme.heading_fg)),
            ]));
            lines.extend(paragraph(
                &project.description,
                width,
                Style::new().fg(theme.muted_fg),
            ));
            lines.extend(tags(&project.tech, width, theme));
            let links = [("Demo", &project.demo), ("Code", &project.repository)];
            for (label, link) in links {
                if let Some(link) = link {
                    lines.push(Line::from(vec![
                        Span::styled(format!("{label}: "), Style::new().fg(theme.muted_fg)),
                        Span::styled(link.clone(), Style::new().fg(theme.accent).underlined()),
                    ]));
                }
            }
            lines.push(Line::default());
        }
        lines.extend(section("More Projects Coming Soon", theme));
        lines.extend(paragraph(
            "I'm always working on something new. Check back soon for more.",
            width,
            Style::new().fg(theme.muted_fg),
        ));
        lines
    }
}

impl Widget for &mut Projects {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = self.lines(PageView::content_width(area) as usize);
        self.view.render(lines, area, buf);
    }
}
