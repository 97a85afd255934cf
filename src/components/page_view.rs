use ratatui::{
    buffer::Buffer,
    layout::{Margin, Position, Rect},
    style::{Style, Stylize},
    text::Line,
    widgets::{
        Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget, Widget,
    },
};

use crate::{actions::ScrollAction, theme::Theme};

/// Scrollable body shared by all pages.
///
/// Pages hand over pre-wrapped lines, so content line `n` is always drawn on
/// screen row `n - offset`.
#[derive(Debug, Default, Clone)]
pub struct PageView {
    offset: u16,
    content_height: u16,
    viewport_height: u16,
    area: Option<Rect>,
    theme: Theme,
}

impl PageView {
    pub fn new() -> Self {
        Self {
            theme: Theme::new(),
            ..Self::default()
        }
    }

    pub fn offset(&self) -> u16 {
        self.offset
    }

    pub fn viewport_height(&self) -> u16 {
        self.viewport_height
    }

    pub fn area(&self) -> Option<Rect> {
        self.area
    }

    fn max_offset(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport_height)
    }

    pub fn scroll(&mut self, action: ScrollAction) {
        let page = self.viewport_height.saturating_sub(1).max(1);
        self.offset = match action {
            ScrollAction::Down => self.offset.saturating_add(1),
            ScrollAction::Up => self.offset.saturating_sub(1),
            ScrollAction::PageDown => self.offset.saturating_add(page),
            ScrollAction::PageUp => self.offset.saturating_sub(page),
            ScrollAction::Top => 0,
            ScrollAction::Bottom => self.max_offset(),
        }
        .min(self.max_offset());
    }

    pub fn scroll_to(&mut self, offset: u16) {
        self.offset = offset.min(self.max_offset());
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }

    /// Width available to content, leaving room for margins and scrollbar.
    pub fn content_width(area: Rect) -> u16 {
        area.width.saturating_sub(4)
    }

    /// Content line index under a screen position.
    pub fn line_at(&self, position: Position) -> Option<usize> {
        let area = self.area?;
        if !area.contains(position) {
            return None;
        }
        Some((position.y - area.y + self.offset) as usize)
    }

    pub fn render(&mut self, lines: Vec<Line<'_>>, area: Rect, buf: &mut Buffer) {
        self.area = Some(area);
        self.viewport_height = area.height;
        self.content_height = lines.len().min(u16::MAX as usize) as u16;
        self.offset = self.offset.min(self.max_offset());

        buf.set_style(area, Style::new().bg(self.theme.standard_bg));
        let text_area = area.inner(Margin::new(2, 0));
        Paragraph::new(lines)
            .scroll((self.offset, 0))
            .render(text_area, buf);

        if self.content_height > self.viewport_height {
            let mut state = ScrollbarState::new(self.max_offset() as usize)
                .position(self.offset as usize)
                .viewport_content_length(self.viewport_height as usize);
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(None)
                .end_symbol(None)
                .style(Style::new().fg(self.theme.scrollbar))
                .thumb_style(Style::new().fg(self.theme.accent).bold())
                .render(area, buf, &mut state);
        }
    }
}
