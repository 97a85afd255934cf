use anyhow::Result;
use log::{info, warn};
use ratatui::{
    buffer::Buffer,
    crossterm::event::{MouseEvent, MouseEventKind},
    layout::{Constraint, Direction, Layout, Margin, Rect},
    widgets::Widget,
};

use crate::{
    actions::{Action, NavigationAction, ScrollAction},
    app::{OverlayState, Page, State},
    components::{
        Component, Contact, Education, Experience, HelpPopup, Home, MouseSupport, Navigation,
        PageView, ProjectDetail, Projects, Skills, StatusBar,
    },
    config::Config,
    content::Content,
    utils,
};

/// Root component owning the page state and every page view.
pub struct Portfolio<'a> {
    area: Option<Rect>,
    navigation: Navigation<'a>,
    home: Home,
    experience: Experience,
    education: Education,
    skills: Skills,
    projects: Projects,
    contact: Contact,
    project_detail: ProjectDetail,
    help_popup: HelpPopup<'a>,
    status_bar: StatusBar,
    pub app_state: State,
}

impl Portfolio<'_> {
    pub fn new(content: Content, config: &Config, start: Page) -> Self {
        let mut portfolio = Self {
            area: None,
            navigation: Navigation::new(),
            home: Home::new(content.profile, content.featured),
            experience: Experience::new(content.experience),
            education: Education::new(content.education),
            skills: Skills::new(content.skills),
            projects: Projects::new(content.projects),
            contact: Contact::new(content.contact),
            project_detail: ProjectDetail::new(content.showcase, &config.media),
            help_popup: HelpPopup::new(),
            status_bar: StatusBar::new(),
            app_state: State::default(),
        };
        portfolio.set_page(start);
        portfolio
    }

    fn set_page(&mut self, page: Page) {
        let previous = self.app_state.page;
        if previous == Page::ProjectDetail && page != Page::ProjectDetail {
            self.project_detail.unmount();
        }
        if previous == Page::Home && page != Page::Home {
            self.home.set_hovered(None);
        }

        self.app_state.page = page;
        if page == Page::ProjectDetail {
            if previous != Page::ProjectDetail {
                self.project_detail.mount();
            }
        } else if page != previous {
            self.page_view_mut(page).reset();
        }
        self.navigation.set_current(page);
        self.status_bar.set_page(page);
        self.status_bar.reset_status();
        info!("event=page_change from={} to={}", previous.id(), page.id());
    }

    fn page_view_mut(&mut self, page: Page) -> &mut PageView {
        match page {
            Page::Home => self.home.view_mut(),
            Page::Experience => self.experience.view_mut(),
            Page::Education => self.education.view_mut(),
            Page::Skills => self.skills.view_mut(),
            Page::Projects => self.projects.view_mut(),
            Page::Contact => self.contact.view_mut(),
            Page::ProjectDetail => self.project_detail.view_mut(),
        }
    }

    fn copy_email(&self) -> Action {
        let email = self.contact.email();
        match utils::copy_to_clipboard(email) {
            Ok(()) => Action::SetStatus(format!("Copied {email} to clipboard")),
            Err(e) => {
                warn!("event=clipboard status=failed error={e}");
                Action::SetStatus(format!("✗ Clipboard error: {e}"))
            }
        }
    }

    fn render_page(&mut self, area: Rect, buf: &mut Buffer) {
        match self.app_state.page {
            Page::Home => self.home.render(area, buf),
            Page::Experience => self.experience.render(area, buf),
            Page::Education => self.education.render(area, buf),
            Page::Skills => self.skills.render(area, buf),
            Page::Projects => self.projects.render(area, buf),
            Page::Contact => self.contact.render(area, buf),
            Page::ProjectDetail => self.project_detail.render(area, buf),
        }
    }
}

impl Component for Portfolio<'_> {
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let action = match action {
            Action::Navigation(action) => match action {
                NavigationAction::GoTo(page) => {
                    self.set_page(page);
                    None
                }
                NavigationAction::NextPage => {
                    self.set_page(self.app_state.page.cycle(true));
                    None
                }
                NavigationAction::PreviousPage => {
                    self.set_page(self.app_state.page.cycle(false));
                    None
                }
                NavigationAction::Back => {
                    if self.app_state.overlay == OverlayState::Help {
                        self.app_state.overlay = OverlayState::Inactive;
                    } else if self.app_state.page == Page::ProjectDetail {
                        self.set_page(Page::Home);
                    }
                    None
                }
                NavigationAction::Help => {
                    self.app_state.overlay = match self.app_state.overlay {
                        OverlayState::Help => OverlayState::Inactive,
                        OverlayState::Inactive => OverlayState::Help,
                    };
                    None
                }
                NavigationAction::Quit => None,
            },
            Action::Scroll(action) => {
                let page = self.app_state.page;
                self.page_view_mut(page).scroll(action);
                None
            }
            Action::Media(action) => {
                if self.app_state.page == Page::ProjectDetail {
                    self.project_detail.select(action);
                }
                None
            }
            Action::Hover(card) => {
                self.home.set_hovered(card);
                None
            }
            Action::CopyEmail => Some(self.copy_email()),
            Action::SetStatus(message) => {
                self.status_bar.set_status(message);
                None
            }
            Action::ResetStatus => {
                self.status_bar.reset_status();
                None
            }
            Action::Tick => {
                if self.app_state.page == Page::ProjectDetail {
                    self.project_detail.tick();
                }
                self.status_bar.tick().then_some(Action::ResetStatus)
            }
            Action::NoOp => None,
        };
        Ok(action)
    }
}

impl Widget for &mut Portfolio<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.area = Some(area);

        // Layout
        if self.app_state.page.shows_navigation() {
            let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(2),
                    Constraint::Min(1),
                    Constraint::Length(1),
                ])
                .split(area);
            self.navigation.render(layout[0], buf);
            self.render_page(layout[1], buf);
            self.status_bar.render(layout[2], buf);
        } else {
            let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .split(area);
            self.render_page(layout[0], buf);
            self.status_bar.render(layout[1], buf);
        }

        // Help popup
        if self.app_state.overlay == OverlayState::Help {
            let popup_area = area.inner(Margin::new(6, 3));
            self.help_popup.render(popup_area, buf);
        }
    }
}

impl MouseSupport for Portfolio<'_> {
    fn handle_mouse_event(&mut self, event: MouseEvent) -> Option<Action> {
        if self.app_state.overlay == OverlayState::Help {
            return self.help_popup.handle_mouse_event(event);
        }
        match event.kind {
            MouseEventKind::ScrollDown => return Some(Action::Scroll(ScrollAction::Down)),
            MouseEventKind::ScrollUp => return Some(Action::Scroll(ScrollAction::Up)),
            _ => (),
        }

        let mut action = None;
        if self.app_state.page.shows_navigation() {
            action = self.navigation.handle_mouse_event(event);
        }
        let page_action = match self.app_state.page {
            Page::Home => self.home.handle_mouse_event(event),
            Page::ProjectDetail => self.project_detail.handle_mouse_event(event),
            _ => None,
        };
        page_action.or(action)
    }

    fn get_area(&self) -> Option<Rect> {
        self.area
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        actions::MediaAction,
        components::{
            pages::{contact, education, experience, home, project_detail, projects, skills},
            status_bar::STATUS_TICKS,
            test_utils::buffer_text,
        },
        media::MediaElement,
    };

    fn portfolio() -> Portfolio<'static> {
        let content = Content::builtin().unwrap();
        Portfolio::new(content, &Config::default(), Page::Home)
    }

    fn dispatch(portfolio: &mut Portfolio, action: Action) {
        let mut next_action = portfolio.update(action).unwrap();
        while let Some(action) = next_action {
            next_action = portfolio.update(action).unwrap();
        }
    }

    fn render(portfolio: &mut Portfolio, width: u16, height: u16) -> String {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        portfolio.render(area, &mut buf);
        buffer_text(&buf)
    }

    fn heading(page: Page) -> &'static str {
        match page {
            Page::Home => home::HEADING,
            Page::Experience => experience::HEADING,
            Page::Education => education::HEADING,
            Page::Skills => skills::HEADING,
            Page::Projects => projects::HEADING,
            Page::Contact => contact::HEADING,
            Page::ProjectDetail => project_detail::HEADING,
        }
    }

    fn playing(portfolio: &Portfolio) -> Vec<usize> {
        portfolio
            .project_detail
            .tabs()
            .players()
            .iter()
            .enumerate()
            .filter(|(_, player)| player.is_playing())
            .map(|(index, _)| index)
            .collect()
    }

    #[test]
    fn each_page_renders_only_its_own_view() {
        let mut portfolio = portfolio();
        for page in Page::ALL {
            dispatch(&mut portfolio, Action::Navigation(NavigationAction::GoTo(page)));
            assert_eq!(portfolio.app_state.page, page);
            let text = render(&mut portfolio, 100, 200);
            for other in Page::ALL {
                assert_eq!(
                    text.contains(heading(other)),
                    other == page,
                    "on {} looking for {}",
                    page.id(),
                    other.id()
                );
            }
        }
    }

    #[test]
    fn unknown_page_id_renders_home() {
        let mut portfolio = portfolio();
        dispatch(
            &mut portfolio,
            Action::Navigation(NavigationAction::GoTo(Page::Skills)),
        );
        let page = Page::from_id("blog");
        dispatch(&mut portfolio, Action::Navigation(NavigationAction::GoTo(page)));
        assert!(render(&mut portfolio, 100, 200).contains(home::HEADING));
    }

    #[test]
    fn contact_then_project_detail_scenario() {
        let mut portfolio = portfolio();
        assert_eq!(portfolio.app_state.page, Page::Home);

        dispatch(
            &mut portfolio,
            Action::Navigation(NavigationAction::GoTo(Page::Contact)),
        );
        let text = render(&mut portfolio, 100, 80);
        assert!(text.contains(contact::HEADING));
        assert!(text.lines().next().unwrap().contains("Portfolio"));
        assert_eq!(portfolio.navigation.current(), Some(Page::Contact));

        dispatch(
            &mut portfolio,
            Action::Navigation(NavigationAction::GoTo(Page::ProjectDetail)),
        );
        let text = render(&mut portfolio, 100, 80);
        assert!(text.contains(project_detail::HEADING));
        assert!(text.lines().next().unwrap().contains("Back to Home"));

        dispatch(&mut portfolio, Action::Tick);
        assert_eq!(playing(&portfolio), vec![0]);

        dispatch(&mut portfolio, Action::Media(MediaAction::Select(2)));
        assert_eq!(portfolio.project_detail.tabs().active(), 2);
        assert_eq!(playing(&portfolio), vec![2]);
    }

    #[test]
    fn back_from_project_detail_goes_home_and_pauses() {
        let mut portfolio = portfolio();
        dispatch(
            &mut portfolio,
            Action::Navigation(NavigationAction::GoTo(Page::ProjectDetail)),
        );
        render(&mut portfolio, 100, 80);
        dispatch(&mut portfolio, Action::Tick);
        assert_eq!(playing(&portfolio), vec![0]);

        dispatch(&mut portfolio, Action::Navigation(NavigationAction::Back));
        assert_eq!(portfolio.app_state.page, Page::Home);
        assert!(playing(&portfolio).is_empty());
        assert!(!portfolio.project_detail.tabs().is_observing());
    }

    #[test]
    fn help_overlay_toggles_and_back_closes_it() {
        let mut portfolio = portfolio();
        dispatch(&mut portfolio, Action::Navigation(NavigationAction::Help));
        assert_eq!(portfolio.app_state.overlay, OverlayState::Help);
        dispatch(&mut portfolio, Action::Navigation(NavigationAction::Back));
        assert_eq!(portfolio.app_state.overlay, OverlayState::Inactive);
        assert_eq!(portfolio.app_state.page, Page::Home);
    }

    #[test]
    fn media_actions_are_ignored_off_the_detail_page() {
        let mut portfolio = portfolio();
        dispatch(&mut portfolio, Action::Media(MediaAction::Select(3)));
        assert_eq!(portfolio.project_detail.tabs().active(), 0);
    }

    #[test]
    fn start_page_is_mounted() {
        let content = Content::builtin().unwrap();
        let mut portfolio = Portfolio::new(content, &Config::default(), Page::ProjectDetail);
        assert!(portfolio.project_detail.tabs().is_observing());
        render(&mut portfolio, 100, 80);
        dispatch(&mut portfolio, Action::Tick);
        assert_eq!(playing(&portfolio), vec![0]);
    }

    #[test]
    fn status_message_clears_after_ticks() {
        let mut portfolio = portfolio();
        dispatch(&mut portfolio, Action::SetStatus("Copied x".into()));
        for _ in 1..STATUS_TICKS {
            dispatch(&mut portfolio, Action::Tick);
        }
        assert_eq!(portfolio.status_bar.text(), "Copied x");
        assert_eq!(
            portfolio.update(Action::Tick).unwrap(),
            Some(Action::ResetStatus)
        );
        dispatch(&mut portfolio, Action::ResetStatus);
        assert_eq!(portfolio.status_bar.text(), "Ready");

        for _ in 0..1000 {
            dispatch(&mut portfolio, Action::Tick);
        }
        assert_eq!(portfolio.status_bar.text(), "Ready");
    }

    #[test]
    fn copy_email_reports_the_outcome() {
        let mut portfolio = portfolio();
        dispatch(
            &mut portfolio,
            Action::Navigation(NavigationAction::GoTo(Page::Contact)),
        );
        dispatch(&mut portfolio, Action::CopyEmail);
        let text = portfolio.status_bar.text();
        assert!(
            text.starts_with("Copied alex.rivera@email.com") || text.starts_with("✗ Clipboard error"),
            "unexpected status {text:?}"
        );
    }

    #[test]
    fn status_messages_reset_on_page_change() {
        let mut portfolio = portfolio();
        dispatch(&mut portfolio, Action::SetStatus("hello".into()));
        assert_eq!(portfolio.status_bar.text(), "hello");
        dispatch(&mut portfolio, Action::Navigation(NavigationAction::NextPage));
        assert_eq!(portfolio.app_state.page, Page::Experience);
        assert_eq!(portfolio.status_bar.text(), "Ready");
    }
}
