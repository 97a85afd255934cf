use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Widget,
};

use super::{page_title, paragraph, section};
use crate::{components::PageView, content::ContactInfo, theme::Theme};

pub const HEADING: &str = "Get In Touch";

#[derive(Debug, Clone)]
pub struct Contact {
    contact: ContactInfo,
    view: PageView,
    theme: Theme,
}

impl Contact {
    pub fn new(contact: ContactInfo) -> Self {
        Self {
            contact,
            view: PageView::new(),
            theme: Theme::new(),
        }
    }

    pub fn email(&self) -> &str {
        &self.contact.email
    }

    pub fn view_mut(&mut self) -> &mut PageView {
        &mut self.view
    }

    fn lines(&self, width: usize) -> Vec<Line<'static>> {
        let theme = &self.theme;
        let contact = &self.contact;
        let mut lines = page_title(
            "Contact",
            HEADING,
            "Have a project in mind or want to collaborate? Feel free to reach out.",
            width,
            theme,
        );

        let field = |icon: &str, label: &str, value: &str| {
            Line::from(vec![
                Span::styled(format!("{icon} "), Style::new().fg(theme.accent)),
                Span::styled(format!("{label:<10}"), Style::new().fg(theme.muted_fg)),
                Span::styled(value.to_string(), Style::new().fg(theme.standard_fg)),
            ])
        };
        lines.extend(section("Contact Information", theme));
        let mut email = field("✉", "Email", &contact.email);
        email.spans.push(Span::styled(
            "  (y) copy",
            Style::new().fg(theme.button_keyboard_label),
        ));
        lines.push(email);
        lines.push(field("☎", "Phone", &contact.phone));
        lines.push(field("⌖", "Location", &contact.location));
        lines.push(Line::default());

        if !contact.socials.is_empty() {
            lines.extend(section("Connect With Me", theme));
            for social in &contact.socials {
                lines.push(Line::from(vec![
                    Span::styled(format!("{:<10}", social.label), Style::new().fg(theme.muted_fg)),
                    Span::styled(social.username.clone(), Style::new().fg(theme.standard_fg)),
                    Span::raw("  "),
                    Span::styled(social.link.clone(), Style::new().fg(theme.accent).underlined()),
                ]));
            }
            lines.push(Line::default());
        }

        lines.extend(section("Availability", theme));
        lines.extend(paragraph(
            &contact.availability,
            width,
            Style::new().fg(theme.muted_fg),
        ));
        lines
    }
}

impl Widget for &mut Contact {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = self.lines(PageView::content_width(area) as usize);
        self.view.render(lines, area, buf);
    }
}
