use ratatui::{
    buffer::Buffer,
    crossterm::event::{MouseButton, MouseEvent, MouseEventKind},
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Widget,
};

use crate::{actions::Action, components::MouseSupport, theme::Theme};

#[derive(Debug, Default, Clone)]
pub struct Button<'a> {
    label: Line<'a>,
    keyboard_label: Line<'a>,
    mode: Mode,
    colors: Colors,
    state: State,
    current: bool,
    pub dimensions: (u16, u16),
    area: Option<Rect>,
    mouse_action: Option<Action>,
}

/// Mouse interaction state.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum State {
    #[default]
    Normal,
    Hovered,
    Pressed,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Single row, text only, underlined when current
    #[default]
    Link,
    /// Filled block with a shadow line underneath
    Padded,
}

#[derive(Debug, Default, Clone, Copy)]
struct Colors {
    label: Color,
    background: Color,
    highlight: Color,
    shadow: Color,
    current: Color,
}

impl<'a> Button<'a> {
    pub fn new<T: Into<Line<'a>>>(label: T) -> Self {
        let theme = Theme::new();
        let label: Line = label.into();
        Button {
            dimensions: (label.width() as u16 + 2, 1),
            label,
            keyboard_label: Line::default(),
            mode: Mode::default(),
            colors: Colors {
                label: theme.nav_label,
                background: theme.nav_bg,
                highlight: theme.heading_fg,
                shadow: theme.nav_bg,
                current: theme.nav_current,
            },
            state: State::Normal,
            current: false,
            area: None,
            mouse_action: None,
        }
    }

    pub fn keyboard_label<T: Into<Line<'a>>>(mut self, keyboard_label: T) -> Self {
        self.label.push_span(" ");
        self.keyboard_label = keyboard_label.into();
        self.dimensions.0 = (self.label.width() + self.keyboard_label.width()) as u16 + 2;
        self
    }

    pub const fn dimensions(mut self, width: u16, height: u16) -> Self {
        self.dimensions = (width, height);
        self
    }

    pub const fn padded(mut self) -> Self {
        self.mode = Mode::Padded;
        self
    }

    pub fn action_on_click(mut self, action: Action) -> Self {
        self.mouse_action = Some(action);
        self
    }

    pub const fn colors(
        mut self,
        label: Color,
        background: Color,
        highlight: Color,
        shadow: Color,
        current: Color,
    ) -> Self {
        self.colors = Colors {
            label,
            background,
            highlight,
            shadow,
            current,
        };
        self
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn is_current(&self) -> bool {
        self.current
    }

    /// Marks the button as the active choice of its group.
    pub fn set_current(&mut self, current: bool) {
        self.current = current;
    }

    pub fn reset(&mut self) {
        self.state = State::Normal;
    }

    /// (label, background) for the current state.
    fn palette(&self) -> (Color, Color) {
        let colors = self.colors;
        match (self.mode, self.current, self.state) {
            (Mode::Link, true, _) => (colors.current, colors.background),
            (Mode::Link, false, State::Normal) => (colors.label, colors.background),
            (Mode::Link, false, _) => (colors.highlight, colors.background),
            (Mode::Padded, true, _) => (colors.label, colors.current),
            (Mode::Padded, false, State::Normal) => (colors.label, colors.background),
            (Mode::Padded, false, State::Hovered) => (colors.label, colors.highlight),
            (Mode::Padded, false, State::Pressed) => (colors.label, colors.shadow),
        }
    }

    fn in_focus(&mut self, event: MouseEvent) -> Option<Action> {
        match event.kind {
            MouseEventKind::Moved => {
                self.state = State::Hovered;
                None
            }
            MouseEventKind::Down(MouseButton::Left) => {
                self.state = State::Pressed;
                self.mouse_action.clone()
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.state = State::Hovered;
                None
            }
            _ => None,
        }
    }
}

impl Widget for &mut Button<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.area = Some(area);
        if area.is_empty() {
            return;
        }
        let (label_color, background) = self.palette();
        buf.set_style(area, Style::new().bg(background));

        match self.mode {
            Mode::Link => (),
            Mode::Padded if area.height > 1 => {
                buf.set_string(
                    area.x,
                    area.bottom() - 1,
                    "▔".repeat(area.width as usize),
                    Style::new().fg(self.colors.shadow).bg(self.colors.background),
                );
            }
            Mode::Padded => (),
        }

        let mut label_style = Style::new().fg(label_color).bg(background);
        if self.current && self.mode == Mode::Link {
            label_style = label_style.add_modifier(Modifier::UNDERLINED | Modifier::BOLD);
        }
        let label_height = match self.mode {
            Mode::Padded => area.height.saturating_sub(1).max(1),
            Mode::Link => area.height,
        };
        let width = (self.label.width() + self.keyboard_label.width()) as u16;
        let x = area.x + area.width.saturating_sub(width) / 2;
        let y = area.y + label_height.saturating_sub(1) / 2;
        let (x, _) = buf.set_line(x, y, &self.label.clone().style(label_style), area.width);
        buf.set_line(
            x,
            y,
            &self.keyboard_label,
            area.right().saturating_sub(x),
        );
    }
}

impl MouseSupport for Button<'_> {
    fn handle_mouse_event(&mut self, event: MouseEvent) -> Option<Action> {
        let position = Position::new(event.column, event.row);
        match self.get_area() {
            Some(area) if area.contains(position) => self.in_focus(event),
            _ => {
                self.reset();
                None
            }
        }
    }

    fn get_area(&self) -> Option<Rect> {
        self.area
    }
}
