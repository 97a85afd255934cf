use log::{debug, info};

use super::{Crossing, MediaDescriptor, MediaElement, VisibilityObserver};

/// Tab strip over a fixed list of media elements.
///
/// Exactly one element is active. Only the active element may play, and it
/// plays only while the showcase section is visible enough. The observer is
/// bound to the active tab and replaced whenever the tab changes.
#[derive(Debug)]
pub struct MediaTabs<P: MediaElement> {
    descriptors: Vec<MediaDescriptor>,
    players: Vec<P>,
    active: usize,
    threshold: f32,
    observer: Option<VisibilityObserver>,
}

impl<P: MediaElement> MediaTabs<P> {
    /// `descriptors` must not be empty, content loading guarantees this.
    pub fn new(
        descriptors: Vec<MediaDescriptor>,
        player: impl Fn(&MediaDescriptor) -> P,
        threshold: f32,
    ) -> Self {
        let players = descriptors.iter().map(player).collect();
        Self {
            descriptors,
            players,
            active: 0,
            threshold,
            observer: None,
        }
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn descriptors(&self) -> &[MediaDescriptor] {
        &self.descriptors
    }

    pub fn active_descriptor(&self) -> &MediaDescriptor {
        &self.descriptors[self.active]
    }

    pub fn players(&self) -> &[P] {
        &self.players
    }

    pub fn active_player(&self) -> &P {
        &self.players[self.active]
    }

    pub fn is_observing(&self) -> bool {
        self.observer.is_some()
    }

    /// Resets to the first tab and attaches a fresh observer.
    ///
    /// `ratio` is the current visibility of the showcase, if known.
    pub fn mount(&mut self, ratio: Option<f32>) {
        self.active = 0;
        self.activate(ratio);
    }

    /// Detaches the observer and pauses every element.
    pub fn unmount(&mut self) {
        self.observer = None;
        for player in &mut self.players {
            player.pause();
        }
    }

    /// Switches the active tab.
    ///
    /// Returns false and leaves everything untouched when `index` is out of
    /// range or already active.
    pub fn select(&mut self, index: usize, ratio: Option<f32>) -> bool {
        if index >= self.players.len() {
            debug!("event=tab_select status=ignored index={index} len={}", self.len());
            return false;
        }
        if index == self.active {
            return false;
        }
        self.active = index;
        self.activate(ratio);
        true
    }

    pub fn select_next(&mut self, ratio: Option<f32>) -> bool {
        self.select((self.active + 1) % self.len().max(1), ratio)
    }

    pub fn select_previous(&mut self, ratio: Option<f32>) -> bool {
        let len = self.len().max(1);
        self.select((self.active + len - 1) % len, ratio)
    }

    /// Feeds the current visibility of the showcase to the observer.
    pub fn observe(&mut self, ratio: f32) {
        let Some(observer) = self.observer.as_mut() else {
            return;
        };
        match observer.observe(ratio) {
            Some(Crossing::Entered) => self.play_active(),
            Some(Crossing::Left) => {
                debug!("event=media_pause tab={} ratio={ratio:.2}", self.active);
                self.players[self.active].pause();
            }
            None => (),
        }
    }

    pub fn tick(&mut self) {
        for player in &mut self.players {
            player.tick();
        }
    }

    fn activate(&mut self, ratio: Option<f32>) {
        let active = self.active;
        for (index, player) in self.players.iter_mut().enumerate() {
            if index != active {
                player.pause();
            }
        }

        let mut observer = VisibilityObserver::new(self.threshold);
        if let Some(ratio) = ratio {
            // Prime the new observer so it reports only later crossings
            let _ = observer.observe(ratio);
            if observer.is_visible(ratio) {
                self.play_active();
            }
        }
        self.observer = Some(observer);
    }

    fn play_active(&mut self) {
        let name = &self.descriptors[self.active].name;
        match self.players[self.active].play() {
            Ok(()) => debug!("event=media_play status=ok tab={} name={name}", self.active),
            Err(err) => info!("event=media_play status=prevented tab={} reason={err}", self.active),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlaybackError;

    #[derive(Debug, Default)]
    struct FakePlayer {
        playing: bool,
        reject: bool,
        play_calls: usize,
    }

    impl MediaElement for FakePlayer {
        fn play(&mut self) -> Result<(), PlaybackError> {
            self.play_calls += 1;
            if self.reject {
                return Err(PlaybackError::AutoplayBlocked {
                    source_path: "fake".into(),
                });
            }
            self.playing = true;
            Ok(())
        }

        fn pause(&mut self) {
            self.playing = false;
        }

        fn is_playing(&self) -> bool {
            self.playing
        }
    }

    fn descriptors(count: usize) -> Vec<MediaDescriptor> {
        (0..count)
            .map(|i| MediaDescriptor {
                name: format!("Clip {i}"),
                source: format!("/videos/clip_{i}.mp4"),
                description: String::new(),
            })
            .collect()
    }

    fn tabs(count: usize) -> MediaTabs<FakePlayer> {
        MediaTabs::new(descriptors(count), |_| FakePlayer::default(), 0.5)
    }

    fn playing(tabs: &MediaTabs<FakePlayer>) -> Vec<usize> {
        tabs.players()
            .iter()
            .enumerate()
            .filter(|(_, player)| player.is_playing())
            .map(|(index, _)| index)
            .collect()
    }

    #[test]
    fn only_selected_tab_plays_when_visible() {
        let mut tabs = tabs(4);
        tabs.mount(Some(1.0));
        assert_eq!(playing(&tabs), vec![0]);

        for index in [1, 2, 3, 0, 2] {
            assert!(tabs.select(index, Some(1.0)));
            assert_eq!(tabs.active(), index);
            assert_eq!(playing(&tabs), vec![index]);
        }
    }

    #[test]
    fn hidden_showcase_does_not_start_playback() {
        let mut tabs = tabs(4);
        tabs.mount(Some(0.2));
        assert!(tabs.select(2, Some(0.2)));
        assert!(playing(&tabs).is_empty());
        assert_eq!(tabs.players()[2].play_calls, 0);
    }

    #[test]
    fn unknown_visibility_defers_to_first_observation() {
        let mut tabs = tabs(3);
        tabs.mount(None);
        assert!(playing(&tabs).is_empty());
        tabs.observe(0.9);
        assert_eq!(playing(&tabs), vec![0]);
    }

    #[test]
    fn scrolling_out_and_back_pauses_and_resumes() {
        let mut tabs = tabs(4);
        tabs.mount(Some(1.0));
        tabs.select(1, Some(1.0));

        tabs.observe(0.3);
        assert!(playing(&tabs).is_empty());

        tabs.observe(0.4);
        assert!(playing(&tabs).is_empty());

        tabs.observe(0.5);
        assert_eq!(playing(&tabs), vec![1]);
    }

    #[test]
    fn observer_is_replaced_on_tab_change() {
        let mut tabs = tabs(2);
        tabs.mount(Some(1.0));
        tabs.observe(1.0);
        assert_eq!(tabs.players()[0].play_calls, 1);

        tabs.select(1, Some(1.0));
        // Primed with the current ratio, no duplicate start
        tabs.observe(1.0);
        assert_eq!(tabs.players()[1].play_calls, 1);
    }

    #[test]
    fn out_of_range_and_repeated_selection_are_ignored() {
        let mut tabs = tabs(4);
        tabs.mount(Some(1.0));
        assert!(!tabs.select(4, Some(1.0)));
        assert!(!tabs.select(usize::MAX, Some(1.0)));
        assert!(!tabs.select(0, Some(1.0)));
        assert_eq!(tabs.active(), 0);
        assert_eq!(tabs.players()[0].play_calls, 1);
    }

    #[test]
    fn rejected_playback_keeps_tab_state() {
        let mut tabs = MediaTabs::new(
            descriptors(4),
            |_| FakePlayer {
                reject: true,
                ..FakePlayer::default()
            },
            0.5,
        );
        tabs.mount(Some(1.0));
        assert!(tabs.select(2, Some(1.0)));
        assert_eq!(tabs.active(), 2);
        assert_eq!(tabs.players()[2].play_calls, 1);
        assert!(playing(&tabs).is_empty());

        tabs.observe(0.0);
        tabs.observe(1.0);
        assert_eq!(tabs.active(), 2);
        assert_eq!(tabs.players()[2].play_calls, 2);
    }

    #[test]
    fn unmount_pauses_everything_and_stops_observing() {
        let mut tabs = tabs(3);
        tabs.mount(Some(1.0));
        tabs.unmount();
        assert!(!tabs.is_observing());
        assert!(playing(&tabs).is_empty());

        tabs.observe(1.0);
        assert!(playing(&tabs).is_empty());
    }

    #[test]
    fn mount_resets_to_first_tab() {
        let mut tabs = tabs(3);
        tabs.mount(Some(1.0));
        tabs.select(2, Some(1.0));
        tabs.unmount();
        tabs.mount(Some(1.0));
        assert_eq!(tabs.active(), 0);
        assert_eq!(playing(&tabs), vec![0]);
    }

    #[test]
    fn cycling_wraps_around() {
        let mut tabs = tabs(3);
        tabs.mount(None);
        assert!(tabs.select_previous(None));
        assert_eq!(tabs.active(), 2);
        assert!(tabs.select_next(None));
        assert_eq!(tabs.active(), 0);
    }
}
