/// Visibility change reported by a [`VisibilityObserver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crossing {
    Entered,
    Left,
}

/// Watches the intersection ratio of one section against a threshold.
///
/// The first observation after construction always reports, later ones only
/// when the ratio crosses the threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityObserver {
    threshold: f32,
    visible: Option<bool>,
}

impl VisibilityObserver {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            visible: None,
        }
    }

    pub fn is_visible(&self, ratio: f32) -> bool {
        ratio >= self.threshold
    }

    pub fn observe(&mut self, ratio: f32) -> Option<Crossing> {
        let visible = self.is_visible(ratio);
        if self.visible == Some(visible) {
            return None;
        }
        self.visible = Some(visible);
        if visible {
            Some(Crossing::Entered)
        } else {
            Some(Crossing::Left)
        }
    }
}

/// Fraction of the rows `section_top..section_top + section_height` that lie
/// inside the window `scroll..scroll + viewport_height`.
pub fn intersection_ratio(
    section_top: u16,
    section_height: u16,
    scroll: u16,
    viewport_height: u16,
) -> f32 {
    if section_height == 0 {
        return 0.0;
    }
    let section_end = section_top as u32 + section_height as u32;
    let viewport_end = scroll as u32 + viewport_height as u32;
    let start = (section_top as u32).max(scroll as u32);
    let end = section_end.min(viewport_end);
    let overlap = end.saturating_sub(start);
    overlap as f32 / section_height as f32
}
