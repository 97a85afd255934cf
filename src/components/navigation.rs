use crate::{
    actions::{Action, NavigationAction},
    app::Page,
    components::{Button, MouseSupport},
    theme::Theme,
};
use ratatui::{
    buffer::Buffer,
    crossterm::event::MouseEvent,
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Widget,
};

const BRAND_WIDTH: u16 = 13;

#[derive(Debug, Default, Clone)]
pub struct Navigation<'a> {
    theme: Theme,
    area: Option<Rect>,
    brand_button: Button<'a>,
    page_buttons: Vec<(Page, Button<'a>)>,
}

impl Navigation<'_> {
    pub fn new() -> Self {
        let theme = Theme::new();
        let brand_button = Button::new("Portfolio".bold())
            .colors(
                theme.nav_brand_fg,
                theme.nav_bg,
                theme.accent_alt,
                theme.nav_bg,
                theme.nav_brand_fg,
            )
            .action_on_click(Action::Navigation(NavigationAction::GoTo(Page::Home)));
        let page_buttons = Page::NAVIGABLE
            .iter()
            .enumerate()
            .map(|(index, &page)| {
                let button = Button::new(page.label())
                    .keyboard_label(Span::from(format!("{}", index + 1)).fg(theme.muted_fg))
                    .action_on_click(Action::Navigation(NavigationAction::GoTo(page)));
                (page, button)
            })
            .collect();
        Self {
            theme,
            area: None,
            brand_button,
            page_buttons,
        }
    }

    /// Highlights the button of `page`, if it has one.
    pub fn set_current(&mut self, page: Page) {
        for (button_page, button) in &mut self.page_buttons {
            button.set_current(*button_page == page);
        }
    }

    pub fn current(&self) -> Option<Page> {
        self.page_buttons
            .iter()
            .find(|(_, button)| button.is_current())
            .map(|(page, _)| *page)
    }
}

impl Widget for &mut Navigation<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.area = Some(area);
        buf.set_style(area, Style::new().bg(self.theme.nav_bg));

        let brand_area = Rect {
            x: area.x + 1,
            width: BRAND_WIDTH.min(area.width.saturating_sub(1)),
            height: 1,
            ..area
        };
        self.brand_button.render(brand_area, buf);

        // Page links are right aligned
        let total: u16 = self
            .page_buttons
            .iter()
            .map(|(_, button)| button.dimensions.0 + 1)
            .sum();
        let mut x = area.right().saturating_sub(total).max(brand_area.right());
        for (_, button) in &mut self.page_buttons {
            let width = button.dimensions.0.min(area.right().saturating_sub(x));
            button.render(Rect::new(x, area.y, width, 1), buf);
            x = (x + width + 1).min(area.right());
        }

        // Divider
        if area.height > 1 {
            Line::from("─".repeat(area.width as usize))
                .fg(self.theme.card_border)
                .render(Rect::new(area.x, area.bottom() - 1, area.width, 1), buf);
        }
    }
}

impl MouseSupport for Navigation<'_> {
    fn handle_mouse_event(&mut self, event: MouseEvent) -> Option<Action> {
        let mut action = self.brand_button.handle_mouse_event(event);
        for (_, button) in &mut self.page_buttons {
            if let Some(latest_action) = button.handle_mouse_event(event) {
                action = Some(latest_action);
            }
        }
        action
    }

    fn get_area(&self) -> Option<Rect> {
        self.area
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_utils::buffer_text;
    use ratatui::crossterm::event::{KeyModifiers, MouseButton, MouseEventKind};

    #[test]
    fn renders_every_page_label() {
        let mut navigation = Navigation::new();
        let mut buf = Buffer::empty(Rect::new(0, 0, 100, 2));
        navigation.render(Rect::new(0, 0, 100, 2), &mut buf);
        let text = buffer_text(&buf);
        assert!(text.contains("Portfolio"));
        for page in Page::NAVIGABLE {
            assert!(text.contains(page.label()), "missing {}", page.label());
        }
    }

    #[test]
    fn only_the_current_page_is_highlighted() {
        let mut navigation = Navigation::new();
        navigation.set_current(Page::Skills);
        assert_eq!(navigation.current(), Some(Page::Skills));
        navigation.set_current(Page::ProjectDetail);
        assert_eq!(navigation.current(), None);
    }

    #[test]
    fn clicking_brand_goes_home() {
        let mut navigation = Navigation::new();
        let mut buf = Buffer::empty(Rect::new(0, 0, 100, 2));
        navigation.render(Rect::new(0, 0, 100, 2), &mut buf);
        let action = navigation.handle_mouse_event(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 3,
            row: 0,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(
            action,
            Some(Action::Navigation(NavigationAction::GoTo(Page::Home)))
        );
    }
}
