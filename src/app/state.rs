use log::warn;

#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct State {
    pub page: Page,
    pub overlay: OverlayState,
}

/// Top-level views of the portfolio.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    #[default]
    Home,
    Experience,
    Education,
    Skills,
    Projects,
    Contact,
    ProjectDetail,
}

impl Page {
    /// Pages listed in the navigation bar, in order.
    pub const NAVIGABLE: [Page; 6] = [
        Page::Home,
        Page::Experience,
        Page::Education,
        Page::Skills,
        Page::Projects,
        Page::Contact,
    ];

    pub const ALL: [Page; 7] = [
        Page::Home,
        Page::Experience,
        Page::Education,
        Page::Skills,
        Page::Projects,
        Page::Contact,
        Page::ProjectDetail,
    ];

    pub const fn id(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Experience => "experience",
            Page::Education => "education",
            Page::Skills => "skills",
            Page::Projects => "projects",
            Page::Contact => "contact",
            Page::ProjectDetail => "project-detail",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Experience => "Experience",
            Page::Education => "Education",
            Page::Skills => "Skills",
            Page::Projects => "Projects",
            Page::Contact => "Contact",
            Page::ProjectDetail => "Project",
        }
    }

    /// Parses a page id, unknown ids fall back to [`Page::Home`].
    pub fn from_id(id: &str) -> Page {
        Page::ALL
            .into_iter()
            .find(|page| page.id() == id)
            .unwrap_or_else(|| {
                warn!("event=page_lookup status=fallback id={id:?}");
                Page::Home
            })
    }

    pub const fn shows_navigation(self) -> bool {
        !matches!(self, Page::ProjectDetail)
    }

    /// Neighbour in the navigation bar, wrapping around.
    ///
    /// The project detail page is not in the bar and cycles from home.
    pub fn cycle(self, forward: bool) -> Page {
        let len = Page::NAVIGABLE.len();
        let index = Page::NAVIGABLE
            .iter()
            .position(|page| *page == self)
            .unwrap_or(0);
        let next = if forward {
            (index + 1) % len
        } else {
            (index + len - 1) % len
        };
        Page::NAVIGABLE[next]
    }
}

#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub enum OverlayState {
    #[default]
    Inactive,
    Help,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::from_id(page.id()), page);
        }
    }

    #[test]
    fn unknown_id_falls_back_to_home() {
        assert_eq!(Page::from_id("blog"), Page::Home);
        assert_eq!(Page::from_id(""), Page::Home);
        assert_eq!(Page::from_id("Contact"), Page::Home);
    }

    #[test]
    fn navigation_is_hidden_only_on_project_detail() {
        for page in Page::ALL {
            assert_eq!(page.shows_navigation(), page != Page::ProjectDetail);
        }
    }

    #[test]
    fn cycling_wraps_around_the_navigation_bar() {
        assert_eq!(Page::Home.cycle(true), Page::Experience);
        assert_eq!(Page::Contact.cycle(true), Page::Home);
        assert_eq!(Page::Home.cycle(false), Page::Contact);
        assert_eq!(Page::ProjectDetail.cycle(true), Page::Experience);
    }
}
