use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use super::{level_bar, page_title, section, tags};
use crate::{components::PageView, content, theme::Theme};

pub const HEADING: &str = "Skills & Expertise";

const NAME_WIDTH: usize = 26;
const MAX_BAR_WIDTH: usize = 40;

#[derive(Debug, Clone)]
pub struct Skills {
    skills: content::Skills,
    view: PageView,
    theme: Theme,
}

impl Skills {
    pub fn new(skills: content::Skills) -> Self {
        Self {
            skills,
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
            "Toolbox",
            HEADING,
            "Technologies and tools I work with, and how comfortable I am with each.",
            width,
            theme,
        );

        // name column, bar, percentage
        let bar_width = width
            .saturating_sub(NAME_WIDTH + 6)
            .min(MAX_BAR_WIDTH)
            .max(1);
        for group in &self.skills.groups {
            lines.extend(section(&group.category, theme));
            for skill in &group.skills {
                let mut line = level_bar(skill.level, bar_width, theme);
                line.spans.insert(
                    0,
                    Span::styled(
                        format!("{:<NAME_WIDTH$}", skill.name),
                        Style::new().fg(theme.standard_fg),
                    ),
                );
                line.spans.push(Span::styled(
                    format!(" {:>3}%", skill.level),
                    Style::new().fg(theme.accent),
                ));
                lines.push(line);
            }
            lines.push(Line::default());
        }

        if !self.skills.soft.is_empty() {
            lines.extend(section("Soft Skills", theme));
            lines.extend(tags(&self.skills.soft, width, theme));
            lines.push(Line::default());
        }
        if !self.skills.learning.is_empty() {
            lines.extend(section("Currently Learning", theme));
            lines.extend(tags(&self.skills.learning, width, theme));
        }
        lines
    }
}

impl Widget for &mut Skills {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = self.lines(PageView::content_width(area) as usize);
        self.view.render(lines, area, buf);
    }
}
