use anyhow::Result;
use log::debug;
use ratatui::{
    crossterm::event::{self, Event as TerminalEvent, KeyCode, KeyEvent, KeyEventKind, MouseEvent},
    DefaultTerminal,
};
use std::time::{Duration, Instant};

use crate::{
    actions::{Action, MediaAction, NavigationAction, ScrollAction},
    components::{Component, MouseSupport, Portfolio},
    config::Config,
    content::Content,
};

mod state;

pub use state::{OverlayState, Page, State};

pub struct App<'a> {
    running: bool,
    tick_rate: Duration,
    mouse: bool,
    portfolio: Portfolio<'a>,
}

impl App<'_> {
    pub fn new(content: Content, config: &Config, start: Page) -> Self {
        Self {
            running: false,
            tick_rate: config.tick_rate(),
            mouse: config.mouse,
            portfolio: Portfolio::new(content, config, start),
        }
    }

    pub fn mouse(mut self, mouse: bool) -> Self {
        self.mouse = mouse;
        self
    }

    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        self.running = true;
        let mut last_tick = Instant::now();
        // Application loop
        while self.running {
            terminal.draw(|frame| frame.render_widget(&mut self.portfolio, frame.area()))?;
            let timeout = self.tick_rate.saturating_sub(last_tick.elapsed());
            self.handle_events(timeout)?;
            if last_tick.elapsed() >= self.tick_rate {
                self.dispatch_action(Action::Tick)?;
                last_tick = Instant::now();
            }
        }
        Ok(())
    }

    fn handle_events(&mut self, timeout: Duration) -> Result<()> {
        if event::poll(timeout)? {
            match event::read()? {
                TerminalEvent::Key(event) if event.kind == KeyEventKind::Press => {
                    if let Some(action) = self.handle_key_event(event) {
                        self.dispatch_action(action)?;
                    }
                }
                TerminalEvent::Mouse(mouse_event) if self.mouse => {
                    if let Some(action) = self.handle_mouse_event(mouse_event) {
                        self.dispatch_action(action)?;
                    }
                }
                _ => (),
            }
        }
        Ok(())
    }

    fn handle_key_event(&self, key_event: KeyEvent) -> Option<Action> {
        match self.portfolio.app_state {
            State {
                overlay: OverlayState::Help,
                ..
            } => match key_event.code {
                KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') => {
                    Some(Action::Navigation(NavigationAction::Back))
                }
                KeyCode::Char('q') | KeyCode::Char('Q') => {
                    Some(Action::Navigation(NavigationAction::Quit))
                }
                _ => None,
            },
            State {
                page: Page::ProjectDetail,
                overlay: OverlayState::Inactive,
            } => match key_event.code {
                KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => {
                    Some(Action::Navigation(NavigationAction::Back))
                }
                KeyCode::Char('h') | KeyCode::Left => Some(Action::Media(MediaAction::Previous)),
                KeyCode::Char('l') | KeyCode::Right => Some(Action::Media(MediaAction::Next)),
                KeyCode::Char(key @ '1'..='9') => {
                    Some(Action::Media(MediaAction::Select(digit_index(key))))
                }
                code => common_key(code),
            },
            State {
                page,
                overlay: OverlayState::Inactive,
            } => match key_event.code {
                KeyCode::Char(key @ '1'..='6') => Some(Action::Navigation(NavigationAction::GoTo(
                    Page::NAVIGABLE[digit_index(key)],
                ))),
                KeyCode::Char('v') | KeyCode::Enter if page == Page::Home => Some(
                    Action::Navigation(NavigationAction::GoTo(Page::ProjectDetail)),
                ),
                KeyCode::Char('y') if page == Page::Contact => Some(Action::CopyEmail),
                code => common_key(code),
            },
        }
    }

    fn handle_mouse_event(&mut self, event: MouseEvent) -> Option<Action> {
        self.portfolio.handle_mouse_event(event)
    }

    fn dispatch_action(&mut self, action: Action) -> Result<()> {
        if action != Action::Tick {
            debug!("event=dispatch action={action:?}");
        }
        let mut next_action = self.portfolio.update(action.clone())?;
        while let Some(action) = next_action {
            next_action = self.portfolio.update(action)?;
        }

        let _ = self.update(action)?;

        Ok(())
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if let Action::Navigation(NavigationAction::Quit) = action {
            self.quit();
        }
        Ok(None)
    }

    fn quit(&mut self) {
        self.running = false;
    }
}

/// Zero-based index of a digit key, `'1'` being 0.
fn digit_index(key: char) -> usize {
    key.to_digit(10).map_or(0, |digit| digit.saturating_sub(1) as usize)
}

/// Keys that behave the same on every page.
fn common_key(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Char('j') | KeyCode::Down => Some(Action::Scroll(ScrollAction::Down)),
        KeyCode::Char('k') | KeyCode::Up => Some(Action::Scroll(ScrollAction::Up)),
        KeyCode::PageDown | KeyCode::Char(' ') => Some(Action::Scroll(ScrollAction::PageDown)),
        KeyCode::PageUp => Some(Action::Scroll(ScrollAction::PageUp)),
        KeyCode::Char('g') | KeyCode::Home => Some(Action::Scroll(ScrollAction::Top)),
        KeyCode::Char('G') | KeyCode::End => Some(Action::Scroll(ScrollAction::Bottom)),
        KeyCode::Tab => Some(Action::Navigation(NavigationAction::NextPage)),
        KeyCode::BackTab => Some(Action::Navigation(NavigationAction::PreviousPage)),
        KeyCode::F(1) | KeyCode::Char('?') => Some(Action::Navigation(NavigationAction::Help)),
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            Some(Action::Navigation(NavigationAction::Quit))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::crossterm::event::KeyModifiers;

    fn app(start: Page) -> App<'static> {
        App::new(Content::builtin().unwrap(), &Config::default(), start)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn digits_select_pages_outside_project_detail() {
        let app = app(Page::Home);
        assert_eq!(
            app.handle_key_event(key(KeyCode::Char('6'))),
            Some(Action::Navigation(NavigationAction::GoTo(Page::Contact)))
        );
        assert_eq!(app.handle_key_event(key(KeyCode::Char('7'))), None);
    }

    #[test]
    fn digits_select_tabs_on_project_detail() {
        let app = app(Page::ProjectDetail);
        assert_eq!(
            app.handle_key_event(key(KeyCode::Char('3'))),
            Some(Action::Media(MediaAction::Select(2)))
        );
        assert_eq!(
            app.handle_key_event(key(KeyCode::Esc)),
            Some(Action::Navigation(NavigationAction::Back))
        );
    }

    #[test]
    fn page_specific_keys() {
        let home = app(Page::Home);
        assert_eq!(
            home.handle_key_event(key(KeyCode::Enter)),
            Some(Action::Navigation(NavigationAction::GoTo(Page::ProjectDetail)))
        );
        assert_eq!(home.handle_key_event(key(KeyCode::Char('y'))), None);

        let contact = app(Page::Contact);
        assert_eq!(
            contact.handle_key_event(key(KeyCode::Char('y'))),
            Some(Action::CopyEmail)
        );
        assert_eq!(contact.handle_key_event(key(KeyCode::Enter)), None);
    }

    #[test]
    fn help_overlay_captures_keys() {
        let mut app = app(Page::Skills);
        app.dispatch_action(Action::Navigation(NavigationAction::Help))
            .unwrap();
        assert_eq!(app.handle_key_event(key(KeyCode::Char('j'))), None);
        assert_eq!(
            app.handle_key_event(key(KeyCode::Esc)),
            Some(Action::Navigation(NavigationAction::Back))
        );
    }

    #[test]
    fn quit_stops_the_loop() {
        let mut app = app(Page::Home);
        app.running = true;
        app.dispatch_action(Action::Navigation(NavigationAction::Quit))
            .unwrap();
        assert!(!app.running);
    }
}
