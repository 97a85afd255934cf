use ratatui::{
    buffer::Buffer,
    crossterm::event::MouseEvent,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Style, Stylize},
    symbols,
    text::Line,
    widgets::{Block, Clear, Padding, Paragraph, Widget, Wrap},
};

use crate::{
    actions::{Action, NavigationAction},
    components::{Button, MouseSupport},
    theme::Theme,
};

#[derive(Debug, Default, Clone)]
pub struct HelpPopup<'a> {
    area: Option<Rect>,
    theme: Theme,
    close_button: Button<'a>,
}

impl HelpPopup<'_> {
    pub fn new() -> Self {
        let theme = Theme::new();
        HelpPopup {
            area: None,
            theme,
            close_button: Button::new("Close".fg(theme.button_label))
                .keyboard_label("(Esc)".fg(theme.button_keyboard_label))
                .dimensions(13, 3)
                .padded()
                .colors(
                    theme.button_label,
                    theme.button_background,
                    theme.button_highlight,
                    theme.button_shadow,
                    theme.button_highlight,
                )
                .action_on_click(Action::Navigation(NavigationAction::Back)),
        }
    }
}

impl Widget for &mut HelpPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.area = Some(area);
        let theme = self.theme;

        let block = Block::bordered()
            .title(Line::from("Help").fg(theme.standard_fg).centered())
            .padding(Padding {
                left: 1,
                right: 1,
                top: 1,
                bottom: 0,
            })
            .bg(theme.card_bg)
            .border_set(symbols::border::ROUNDED)
            .border_style(Style::new().fg(theme.popup_border));
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(3)])
            .split(block.inner(area));
        Clear.render(area, buf);
        block.render(area, buf);

        let heading = |text: &'static str| Line::from(text.fg(theme.accent).italic());
        let entry = |text: &'static str| Line::from(text.fg(theme.standard_fg));
        let text = vec![
            heading("Pages"),
            Line::default(),
            entry("(1)-(6) Home, Experience, Education, Skills, Projects, Contact"),
            entry("(Tab), (⇧Tab) Next or previous page"),
            entry("(v), (↵) Open the featured project from Home"),
            entry("(y) Copy the email address on Contact"),
            Line::default(),
            heading("Scrolling"),
            Line::default(),
            entry("(↓), (↑), (j), (k) Scroll one line"),
            entry("(PgDn), (PgUp), (Space) Scroll one screen"),
            entry("(g), (G) Jump to top or bottom"),
            Line::default(),
            heading("Project"),
            Line::default(),
            entry("(←), (→), (h), (l) Switch showcase tab"),
            entry("(1)-(9) Jump to a showcase tab"),
            entry("(Esc), (⌫), (b) Back to Home"),
            Line::default(),
            entry("(F1), (?) Toggle this help    (q) Quit"),
            Line::default(),
            Line::from(
                "Clips play only while the showcase is on screen."
                    .fg(theme.muted_fg)
                    .italic(),
            ),
        ];
        Paragraph::new(text)
            .style(Style::new().fg(theme.standard_fg))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(layout[0], buf);

        let [button_area] = Layout::horizontal([Constraint::Length(13)])
            .flex(Flex::Center)
            .areas(layout[1]);
        self.close_button.render(button_area, buf);
    }
}

impl MouseSupport for HelpPopup<'_> {
    fn handle_mouse_event(&mut self, event: MouseEvent) -> Option<Action> {
        self.close_button
            .handle_mouse_event(event)
            .or(Some(Action::NoOp))
    }

    fn get_area(&self) -> Option<Rect> {
        self.area
    }
}
