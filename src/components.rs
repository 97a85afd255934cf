use anyhow::Result;
use ratatui::{crossterm::event::MouseEvent, layout::Rect};

mod button;
mod help_popup;
mod navigation;
mod page_view;
mod pages;
mod portfolio;
mod status_bar;

use crate::actions::Action;
pub use button::Button;
pub use help_popup::HelpPopup;
pub use navigation::Navigation;
pub use page_view::PageView;
pub use pages::{Contact, Education, Experience, Home, ProjectDetail, Projects, Skills};
pub use portfolio::Portfolio;
pub use status_bar::StatusBar;

pub trait Component {
    fn update(&mut self, action: Action) -> Result<Option<Action>>;
}

pub trait MouseSupport {
    fn handle_mouse_event(&mut self, event: MouseEvent) -> Option<Action>;

    fn get_area(&self) -> Option<Rect>;
}

#[cfg(test)]
pub(crate) mod test_utils {
    use ratatui::buffer::Buffer;

    /// Buffer contents as text, one line per row.
    pub fn buffer_text(buf: &Buffer) -> String {
        let area = buf.area;
        let mut text = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                text.push_str(buf[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }
}
