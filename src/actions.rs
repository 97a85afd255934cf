use crate::app::Page;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Navigation(NavigationAction),
    Scroll(ScrollAction),
    Media(MediaAction),
    Hover(Option<usize>),
    CopyEmail,
    SetStatus(String),
    ResetStatus,
    Tick,
    NoOp,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NavigationAction {
    GoTo(Page),
    NextPage,
    PreviousPage,
    Back,
    Help,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollAction {
    Down,
    Up,
    PageDown,
    PageUp,
    Top,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MediaAction {
    Select(usize),
    Next,
    Previous,
}
