use ratatui::{
    buffer::Buffer,
    crossterm::event::{MouseButton, MouseEvent, MouseEventKind},
    layout::{Position, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Widget,
};

use super::{paragraph, section, tags};
use crate::{
    actions::{Action, NavigationAction},
    app::Page,
    components::{MouseSupport, PageView},
    content::{FeaturedProject, Profile},
    theme::Theme,
};

pub const HEADING: &str = "Welcome to my portfolio";

/// Rows of one featured card within the page content.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
struct CardRows {
    start: usize,
    end: usize,
    button: usize,
}

#[derive(Debug, Clone)]
pub struct Home {
    profile: Profile,
    featured: Vec<FeaturedProject>,
    hovered: Option<usize>,
    cards: Vec<CardRows>,
    view: PageView,
    theme: Theme,
}

impl Home {
    pub fn new(profile: Profile, featured: Vec<FeaturedProject>) -> Self {
        Self {
            profile,
            featured,
            hovered: None,
            cards: Vec::new(),
            view: PageView::new(),
            theme: Theme::new(),
        }
    }

    pub fn view_mut(&mut self) -> &mut PageView {
        &mut self.view
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn set_hovered(&mut self, hovered: Option<usize>) {
        self.hovered = hovered.filter(|index| *index < self.featured.len());
    }

    fn card_at(&self, line: usize) -> Option<(usize, CardRows)> {
        self.cards
            .iter()
            .copied()
            .enumerate()
            .find(|(_, rows)| (rows.start..rows.end).contains(&line))
    }

    fn lines(&mut self, width: usize) -> Vec<Line<'static>> {
        let theme = self.theme;
        let profile = &self.profile;
        let mut lines = vec![
            Line::default(),
            Line::styled(format!("✦ {HEADING}"), Style::new().fg(theme.accent)),
            Line::from(vec![
                Span::styled("Hi, I'm ", Style::new().bold().fg(theme.heading_fg)),
                Span::styled(profile.name.clone(), Style::new().bold().fg(theme.accent)),
            ]),
            Line::styled(profile.headline.clone(), Style::new().fg(theme.muted_fg)),
            Line::default(),
        ];
        lines.extend(paragraph(&profile.tagline, width, Style::new().fg(theme.muted_fg)));
        lines.push(Line::default());

        lines.extend(section("About Me", &theme));
        for about in &profile.about {
            lines.extend(paragraph(about, width, Style::new().fg(theme.standard_fg)));
            lines.push(Line::default());
        }
        if !profile.stats.is_empty() {
            let mut spans = Vec::new();
            for stat in &profile.stats {
                spans.push(Span::styled(
                    format!(" {} ", stat.value),
                    Style::new().bold().fg(theme.accent).bg(theme.card_bg),
                ));
                spans.push(Span::styled(
                    format!("{}   ", stat.label),
                    Style::new().fg(theme.muted_fg),
                ));
            }
            lines.push(Line::from(spans));
            lines.push(Line::default());
        }

        if !self.featured.is_empty() {
            lines.extend(section("Featured Projects", &theme));
            lines.push(Line::styled(
                "A selection of my recent work",
                Style::new().fg(theme.muted_fg),
            ));
            lines.push(Line::default());
        }

        self.cards.clear();
        let inner_width = width.saturating_sub(2);
        for (index, project) in self.featured.iter().enumerate() {
            let hovered = self.hovered == Some(index);
            let (border, background) = if hovered {
                (theme.card_hover_border, theme.card_hover_bg)
            } else {
                (theme.card_border, theme.card_bg)
            };
            let start = lines.len();
            let mut card = vec![
                Line::styled(project.category.to_uppercase(), Style::new().fg(theme.accent)),
                Line::styled(project.title.clone(), Style::new().bold().fg(theme.heading_fg)),
            ];
            card.extend(paragraph(
                &project.description,
                inner_width,
                Style::new().fg(theme.muted_fg),
            ));
            card.extend(tags(&project.tech, inner_width, &theme));
            // Hover swaps the still preview for the animation
            card.push(if hovered {
                Line::styled(
                    format!("▶ {}", project.animated_preview),
                    Style::new().fg(theme.accent),
                )
            } else {
                Line::styled(
                    format!("■ {}", project.still_preview),
                    Style::new().fg(theme.muted_fg),
                )
            });
            let button = start + card.len();
            card.push(Line::styled(
                " View Project → (v) ",
                Style::new()
                    .bold()
                    .fg(theme.button_label)
                    .bg(if hovered {
                        theme.button_highlight
                    } else {
                        theme.button_background
                    }),
            ));
            for mut line in card {
                line.spans.insert(0, Span::styled("▌ ", Style::new().fg(border)));
                lines.push(line.bg(background));
            }
            self.cards.push(CardRows {
                start,
                end: lines.len(),
                button,
            });
            lines.push(Line::default());
        }
        lines
    }
}

impl Widget for &mut Home {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = self.lines(PageView::content_width(area) as usize);
        self.view.render(lines, area, buf);
    }
}

impl MouseSupport for Home {
    fn handle_mouse_event(&mut self, event: MouseEvent) -> Option<Action> {
        let position = Position::new(event.column, event.row);
        let card = self
            .view
            .line_at(position)
            .and_then(|line| self.card_at(line).map(|card| (line, card)));
        match event.kind {
            MouseEventKind::Moved => {
                let hovered = card.map(|(_, (index, _))| index);
                (hovered != self.hovered).then_some(Action::Hover(hovered))
            }
            MouseEventKind::Down(MouseButton::Left) => match card {
                Some((line, (_, rows))) if line == rows.button => Some(Action::Navigation(
                    NavigationAction::GoTo(Page::ProjectDetail),
                )),
                _ => None,
            },
            _ => None,
        }
    }

    fn get_area(&self) -> Option<Rect> {
        self.view.area()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{components::test_utils::buffer_text, content::Content};
    use ratatui::crossterm::event::KeyModifiers;

    fn rendered_home() -> (Home, Buffer) {
        let content = Content::builtin().unwrap();
        let mut home = Home::new(content.profile, content.featured);
        let area = Rect::new(0, 0, 100, 200);
        let mut buf = Buffer::empty(area);
        home.render(area, &mut buf);
        (home, buf)
    }

    fn mouse(kind: MouseEventKind, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column: 10,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn renders_hero_and_every_featured_card() {
        let (home, buf) = rendered_home();
        let text = buffer_text(&buf);
        assert!(text.contains("Hi, I'm Anhadjot Chandi"));
        for project in &home.featured {
            assert!(text.contains(&project.title));
            assert!(text.contains(&project.still_preview));
        }
        assert_eq!(home.cards.len(), home.featured.len());
    }

    #[test]
    fn hovering_a_card_reports_it_once() {
        let (mut home, _) = rendered_home();
        let row = home.cards[1].start as u16;
        assert_eq!(
            home.handle_mouse_event(mouse(MouseEventKind::Moved, row)),
            Some(Action::Hover(Some(1)))
        );
        home.set_hovered(Some(1));
        assert_eq!(home.handle_mouse_event(mouse(MouseEventKind::Moved, row)), None);
        assert_eq!(
            home.handle_mouse_event(mouse(MouseEventKind::Moved, 0)),
            Some(Action::Hover(None))
        );
    }

    #[test]
    fn hovered_card_shows_animated_preview() {
        let (mut home, _) = rendered_home();
        home.set_hovered(Some(0));
        let area = Rect::new(0, 0, 100, 200);
        let mut buf = Buffer::empty(area);
        home.render(area, &mut buf);
        let text = buffer_text(&buf);
        assert!(text.contains(&home.featured[0].animated_preview));
        assert!(!text.contains(&home.featured[0].still_preview));
        assert!(text.contains(&home.featured[1].still_preview));
    }

    #[test]
    fn clicking_view_project_opens_detail() {
        let (mut home, _) = rendered_home();
        let button_row = home.cards[0].button as u16;
        assert_eq!(
            home.handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), button_row)),
            Some(Action::Navigation(NavigationAction::GoTo(Page::ProjectDetail)))
        );
        let title_row = home.cards[0].start as u16;
        assert_eq!(
            home.handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), title_row)),
            None
        );
    }

    #[test]
    fn hover_outside_featured_range_is_dropped() {
        let (mut home, _) = rendered_home();
        home.set_hovered(Some(99));
        assert_eq!(home.hovered(), None);
    }
}
