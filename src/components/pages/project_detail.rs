use ratatui::{
    buffer::Buffer,
    crossterm::event::{MouseButton, MouseEvent, MouseEventKind},
    layout::{Position, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Widget,
};

use super::{bullet, paragraph, section};
use crate::{
    actions::{Action, MediaAction, NavigationAction},
    components::{MouseSupport, PageView},
    config::MediaConfig,
    content::Showcase,
    media::{intersection_ratio, MediaElement, MediaTabs, PlaybackState, TerminalPlayer},
    theme::Theme,
};

pub const HEADING: &str = "Project Overview";

const TAB_GAP: u16 = 1;

/// Where the showcase landed in the last layout.
#[derive(Debug, Default, Clone, PartialEq)]
struct ShowcaseLayout {
    top: u16,
    height: u16,
    tab_row: usize,
    /// Column ranges of the tab labels, relative to the text area
    tab_columns: Vec<(u16, u16)>,
}

#[derive(Debug)]
pub struct ProjectDetail {
    showcase: Showcase,
    tabs: MediaTabs<TerminalPlayer>,
    layout: Option<ShowcaseLayout>,
    view: PageView,
    theme: Theme,
}

impl ProjectDetail {
    pub fn new(showcase: Showcase, media: &MediaConfig) -> Self {
        let tabs = MediaTabs::new(
            showcase.media.clone(),
            |descriptor| {
                TerminalPlayer::new(descriptor)
                    .muted(media.muted)
                    .policy(media.autoplay)
            },
            media.visibility_threshold,
        );
        Self {
            showcase,
            tabs,
            layout: None,
            view: PageView::new(),
            theme: Theme::new(),
        }
    }

    pub fn view_mut(&mut self) -> &mut PageView {
        &mut self.view
    }

    pub fn tabs(&self) -> &MediaTabs<TerminalPlayer> {
        &self.tabs
    }

    /// Called when the page becomes visible.
    pub fn mount(&mut self) {
        self.view.reset();
        self.layout = None;
        self.tabs.mount(None);
    }

    /// Called when another page replaces this one.
    pub fn unmount(&mut self) {
        self.tabs.unmount();
    }

    /// Fraction of the showcase inside the visible window, once laid out.
    pub fn showcase_ratio(&self) -> Option<f32> {
        let layout = self.layout.as_ref()?;
        Some(intersection_ratio(
            layout.top,
            layout.height,
            self.view.offset(),
            self.view.viewport_height(),
        ))
    }

    pub fn select(&mut self, action: MediaAction) -> bool {
        let ratio = self.showcase_ratio();
        match action {
            MediaAction::Select(index) => self.tabs.select(index, ratio),
            MediaAction::Next => self.tabs.select_next(ratio),
            MediaAction::Previous => self.tabs.select_previous(ratio),
        }
    }

    /// Checks visibility and advances playback.
    pub fn tick(&mut self) {
        if let Some(ratio) = self.showcase_ratio() {
            self.tabs.observe(ratio);
        }
        self.tabs.tick();
    }

    fn tab_bar(&self) -> (Line<'static>, Vec<(u16, u16)>) {
        let theme = &self.theme;
        let mut spans = Vec::new();
        let mut columns = Vec::new();
        let mut x = 0;
        for (index, descriptor) in self.tabs.descriptors().iter().enumerate() {
            let style = if index == self.tabs.active() {
                Style::new().bold().fg(theme.button_label).bg(theme.tab_current)
            } else {
                Style::new().fg(theme.muted_fg).bg(theme.tab_background)
            };
            let tab = Span::styled(format!(" {} {} ", index + 1, descriptor.name), style);
            let width = tab.width() as u16;
            spans.push(tab);
            spans.push(Span::raw(" ".repeat(TAB_GAP as usize)));
            columns.push((x, x + width));
            x += width + TAB_GAP;
        }
        (Line::from(spans), columns)
    }

    fn player_lines(&self, width: usize) -> Vec<Line<'static>> {
        let theme = &self.theme;
        let player = self.tabs.active_player();
        let inner = width.saturating_sub(2).max(4);
        let border = Style::new().fg(theme.card_border);
        let framed = |spans: Vec<Span<'static>>| {
            let used: usize = spans.iter().map(Span::width).sum();
            let mut line = vec![Span::styled("│", border)];
            line.extend(spans);
            line.push(Span::raw(" ".repeat(inner.saturating_sub(used))));
            line.push(Span::styled("│", border));
            Line::from(line)
        };

        let badge = match player.state() {
            PlaybackState::Playing { .. } => {
                Span::styled(" ● AUTO-PLAYING ", Style::new().bold().fg(theme.button_label).bg(theme.playing_badge))
            }
            PlaybackState::Paused { .. } => {
                Span::styled(" ❚❚ PAUSED ", Style::new().fg(theme.button_label).bg(theme.paused_badge))
            }
            PlaybackState::Stopped => {
                Span::styled(" ■ STOPPED ", Style::new().fg(theme.button_label).bg(theme.paused_badge))
            }
        };
        let track = inner.saturating_sub(4);
        let filled = (track as f64 * player.progress()).round() as usize;
        let marker = if player.is_playing() { "▶" } else { "❚❚" };

        vec![
            Line::styled(format!("┌{}┐", "─".repeat(inner)), border),
            framed(vec![Span::raw(" "), badge]),
            framed(vec![]),
            framed(vec![
                Span::styled(format!("   {marker}  "), Style::new().fg(theme.accent)),
                Span::styled(player.source().to_string(), Style::new().fg(theme.standard_fg)),
            ]),
            framed(vec![]),
            framed(vec![
                Span::raw("  "),
                Span::styled("━".repeat(filled), Style::new().fg(theme.gauge_filled)),
                Span::styled("─".repeat(track - filled.min(track)), Style::new().fg(theme.gauge_empty)),
            ]),
            Line::styled(format!("└{}┘", "─".repeat(inner)), border),
        ]
    }

    fn lines(&mut self, width: usize) -> Vec<Line<'static>> {
        let theme = self.theme;
        let showcase = &self.showcase;
        let mut lines = vec![
            Line::styled("← Back to Home (Esc)", Style::new().fg(theme.muted_fg)),
            Line::default(),
            Line::styled(showcase.category.to_uppercase(), Style::new().fg(theme.accent)),
            Line::styled(showcase.title.clone(), Style::new().bold().fg(theme.heading_fg)),
        ];
        for fact in &showcase.facts {
            lines.push(Line::from(vec![
                Span::styled(format!("{}: ", fact.label), Style::new().fg(theme.muted_fg)),
                Span::styled(fact.value.clone(), Style::new().fg(theme.standard_fg)),
            ]));
        }
        lines.push(Line::default());
        lines.extend(section(HEADING, &theme));
        lines.extend(paragraph(&showcase.overview, width, Style::new().fg(theme.muted_fg)));
        lines.push(Line::default());

        // Showcase section, observed for visibility
        let top = lines.len();
        lines.extend(section("Gameplay Showcase", &theme));
        lines.push(Line::styled(
            "Explore different aspects of the game",
            Style::new().fg(theme.muted_fg),
        ));
        lines.push(Line::default());
        let tab_row = lines.len();
        let (tab_bar, tab_columns) = self.tab_bar();
        lines.push(tab_bar);
        lines.push(Line::default());
        lines.extend(self.player_lines(width));
        lines.push(Line::default());
        let active = self.tabs.active_descriptor();
        lines.push(Line::styled(active.name.clone(), Style::new().bold().fg(theme.heading_fg)));
        lines.extend(paragraph(&active.description, width, Style::new().fg(theme.muted_fg)));
        let height = lines.len() - top;
        lines.push(Line::default());

        if !showcase.lessons.is_empty() {
            lines.extend(section("What I Learned From This Project", &theme));
            for lesson in &showcase.lessons {
                lines.push(Line::styled(lesson.title.clone(), Style::new().fg(theme.accent)));
                lines.extend(bullet(
                    " ",
                    &lesson.body,
                    width,
                    Style::new(),
                    Style::new().fg(theme.muted_fg),
                ));
                lines.push(Line::default());
            }
        }

        self.layout = Some(ShowcaseLayout {
            top: top as u16,
            height: height as u16,
            tab_row,
            tab_columns,
        });
        lines
    }
}

impl Widget for &mut ProjectDetail {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = self.lines(PageView::content_width(area) as usize);
        self.view.render(lines, area, buf);
    }
}

impl MouseSupport for ProjectDetail {
    fn handle_mouse_event(&mut self, event: MouseEvent) -> Option<Action> {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return None;
        }
        let position = Position::new(event.column, event.row);
        let line = self.view.line_at(position)?;
        if line == 0 {
            return Some(Action::Navigation(NavigationAction::Back));
        }
        let layout = self.layout.as_ref()?;
        if line != layout.tab_row {
            return None;
        }
        // Text starts after the page margin
        let column = event.column.checked_sub(self.view.area()?.x + 2)?;
        layout
            .tab_columns
            .iter()
            .position(|(start, end)| (*start..*end).contains(&column))
            .map(|index| Action::Media(MediaAction::Select(index)))
    }

    fn get_area(&self) -> Option<Rect> {
        self.view.area()
    }
}
