use crate::{app::Page, theme::Theme};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Style, Stylize},
    text::Line,
    widgets::{Paragraph, Widget},
};

const READY: &str = "Ready";
/// Ticks a status message stays before the bar falls back to `READY`.
pub const STATUS_TICKS: u16 = 40;

#[derive(Debug, Default, Clone)]
pub struct StatusBar {
    text: String,
    hint: &'static str,
    remaining: Option<u16>,
    theme: Theme,
}

impl StatusBar {
    pub fn new() -> Self {
        Self {
            text: READY.into(),
            hint: hint(Page::Home),
            remaining: None,
            theme: Theme::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_status(&mut self, message: String) {
        self.text = message;
        self.remaining = Some(STATUS_TICKS);
    }

    pub fn reset_status(&mut self) {
        self.text = READY.into();
        self.remaining = None;
    }

    /// Counts down the current message, true once it has expired.
    pub fn tick(&mut self) -> bool {
        match self.remaining {
            Some(ticks) if ticks > 1 => {
                self.remaining = Some(ticks - 1);
                false
            }
            Some(_) => {
                self.remaining = None;
                true
            }
            None => false,
        }
    }

    pub fn set_page(&mut self, page: Page) {
        self.hint = hint(page);
    }
}

fn hint(page: Page) -> &'static str {
    match page {
        Page::Home => "(v) View project  (F1) Help  (q) Quit ",
        Page::Contact => "(y) Copy email  (F1) Help  (q) Quit ",
        Page::ProjectDetail => "(←/→) Tabs  (Esc) Back  (F1) Help ",
        _ => "(↑/↓) Scroll  (F1) Help  (q) Quit ",
    }
}

impl Widget for &mut StatusBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let style = Style::default()
            .bg(theme.status_bar_bg)
            .fg(theme.status_bar_fg);
        Paragraph::new(Line::from(format!(" {}", self.text)))
            .style(style)
            .render(area, buf);
        Line::from(self.hint)
            .right_aligned()
            .fg(theme.muted_fg)
            .render(area, buf);
    }
}
