use ratatui::style::{palette::tailwind, Color};

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub standard_bg: Color,
    pub standard_fg: Color,
    pub muted_fg: Color,
    pub heading_fg: Color,
    pub accent: Color,
    pub accent_alt: Color,
    pub card_bg: Color,
    pub card_hover_bg: Color,
    pub card_border: Color,
    pub card_hover_border: Color,
    pub tag_fg: Color,
    pub tag_bg: Color,
    pub nav_bg: Color,
    pub nav_brand_fg: Color,
    pub nav_label: Color,
    pub nav_current: Color,
    pub button_label: Color,
    pub button_keyboard_label: Color,
    pub button_background: Color,
    pub button_highlight: Color,
    pub button_shadow: Color,
    pub tab_background: Color,
    pub tab_current: Color,
    pub gauge_filled: Color,
    pub gauge_empty: Color,
    pub playing_badge: Color,
    pub paused_badge: Color,
    pub status_bar_bg: Color,
    pub status_bar_fg: Color,
    pub popup_border: Color,
    pub scrollbar: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    pub const fn new() -> Self {
        Self {
            standard_bg: tailwind::ZINC.c950,
            standard_fg: tailwind::ZINC.c100,
            muted_fg: tailwind::ZINC.c400,
            heading_fg: tailwind::ZINC.c50,
            accent: tailwind::CYAN.c400,
            accent_alt: tailwind::BLUE.c400,
            card_bg: tailwind::ZINC.c900,
            card_hover_bg: tailwind::ZINC.c800,
            card_border: tailwind::ZINC.c700,
            card_hover_border: tailwind::CYAN.c500,
            tag_fg: tailwind::CYAN.c400,
            tag_bg: tailwind::ZINC.c800,
            nav_bg: tailwind::ZINC.c900,
            nav_brand_fg: tailwind::CYAN.c400,
            nav_label: tailwind::ZINC.c400,
            nav_current: tailwind::CYAN.c400,
            button_label: tailwind::ZINC.c50,
            button_keyboard_label: tailwind::CYAN.c200,
            button_background: tailwind::BLUE.c700,
            button_highlight: tailwind::CYAN.c600,
            button_shadow: tailwind::BLUE.c900,
            tab_background: tailwind::ZINC.c800,
            tab_current: tailwind::CYAN.c600,
            gauge_filled: tailwind::CYAN.c500,
            gauge_empty: tailwind::ZINC.c700,
            playing_badge: tailwind::RED.c500,
            paused_badge: tailwind::ZINC.c600,
            status_bar_bg: tailwind::ZINC.c800,
            status_bar_fg: tailwind::ZINC.c300,
            popup_border: tailwind::CYAN.c500,
            scrollbar: tailwind::ZINC.c600,
        }
    }
}
