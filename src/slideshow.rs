use std::time::Duration;

use tracing::{debug, trace, warn};

use crate::constants::MIN_AUTOPLAY_INTERVAL;
use crate::engine::Navigate;
use crate::error::CarouselError;
use crate::ring;
use crate::state::Cursor;
use crate::timer::RecurringTimer;

/// What a manual step does to the autoplay phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ManualNavPolicy {
    /// The next tick lands where it would have without the manual step.
    #[default]
    KeepPhase,
    /// A manual step restarts the interval, so the new slide gets a full period.
    RestartTimer,
}

/// Owns the slideshow cursor and the autoplay timer over a fixed sequence.
///
/// The timer is armed only while `playing` is set and there are at least two
/// items, and it is re-created only when `(playing, interval, len)` actually
/// changes. Resuming after a pause starts a fresh period.
#[derive(Debug)]
pub struct SlideshowEngine<T> {
    items: Vec<T>,
    index: usize,
    playing: bool,
    interval: Duration,
    timer: Option<RecurringTimer>,
    manual_nav: ManualNavPolicy,
}

impl<T> SlideshowEngine<T> {
    pub fn new(items: Vec<T>, interval: Duration, playing: bool) -> Self {
        let mut engine = Self {
            items,
            index: 0,
            playing,
            interval: clamp_interval(interval),
            timer: None,
            manual_nav: ManualNavPolicy::default(),
        };
        engine.sync_timer();
        engine
    }

    pub fn with_manual_nav(mut self, policy: ManualNavPolicy) -> Self {
        self.manual_nav = policy;
        self
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&T> {
        self.items.get(self.index)
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_timer_armed(&self) -> bool {
        self.timer.is_some()
    }

    pub fn time_until_tick(&self) -> Option<Duration> {
        self.timer.as_ref().map(RecurringTimer::remaining)
    }

    pub fn cursor(&self) -> Cursor {
        Cursor {
            index: self.index,
            playing: self.playing,
        }
    }

    // --- Navigation and Play State ---

    pub fn goto(&mut self, target: usize) -> Result<(), CarouselError> {
        self.index = ring::checked_goto(target, self.items.len())?;
        self.after_manual_step();
        Ok(())
    }

    pub fn set_playing(&mut self, playing: bool) {
        if self.playing == playing {
            return;
        }
        self.playing = playing;
        self.sync_timer();
    }

    pub fn toggle_playing(&mut self) {
        self.set_playing(!self.playing);
    }

    /// Re-arms a running timer only when the interval really differs.
    pub fn set_interval(&mut self, interval: Duration) {
        let interval = clamp_interval(interval);
        if interval == self.interval {
            return;
        }
        self.interval = interval;
        if self.timer.is_some() {
            debug!(interval_ms = interval.as_millis() as u64, "autoplay timer re-armed");
            self.timer = Some(RecurringTimer::new(interval));
        }
    }

    // --- Timer ---

    /// Feeds one frame delta to the autoplay timer. Returns true if the index moved.
    pub fn update(&mut self, dt: Duration) -> bool {
        // Paused, or fewer than two items.
        let Some(timer) = self.timer.as_mut() else {
            return false;
        };
        // A long frame may cover several periods.
        let ticks = timer.update(dt);
        for _ in 0..ticks {
            self.on_tick();
        }
        ticks > 0
    }

    fn on_tick(&mut self) {
        self.index = ring::next(self.index, self.items.len());
        trace!(index = self.index, "autoplay tick");
    }

    fn after_manual_step(&mut self) {
        if self.manual_nav == ManualNavPolicy::RestartTimer {
            if let Some(timer) = self.timer.as_mut() {
                timer.reset();
            }
        }
    }

    fn sync_timer(&mut self) {
        let wanted = self.playing && self.items.len() > 1;
        // Only a change of state touches the timer; a running one keeps its phase.
        match (wanted, self.timer.is_some()) {
            (true, false) => {
                // Fresh period on every (re)start.
                debug!(interval_ms = self.interval.as_millis() as u64, "autoplay timer armed");
                self.timer = Some(RecurringTimer::new(self.interval));
            }
            (false, true) => {
                debug!("autoplay timer cancelled");
                self.timer = None;
            }
            _ => {}
        }
    }
}

impl<T> Navigate for SlideshowEngine<T> {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn position(&self) -> Option<usize> {
        (!self.items.is_empty()).then_some(self.index)
    }

    fn advance(&mut self) {
        if self.items.len() <= 1 {
            return;
        }
        self.index = ring::next(self.index, self.items.len());
        self.after_manual_step();
    }

    fn retreat(&mut self) {
        if self.items.len() <= 1 {
            return;
        }
        self.index = ring::prev(self.index, self.items.len());
        self.after_manual_step();
    }
}

fn clamp_interval(interval: Duration) -> Duration {
    if interval < MIN_AUTOPLAY_INTERVAL {
        warn!(
            requested_ms = interval.as_millis() as u64,
            min_ms = MIN_AUTOPLAY_INTERVAL.as_millis() as u64,
            "autoplay interval too short, clamping"
        );
        return MIN_AUTOPLAY_INTERVAL;
    }
    interval
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    const INTERVAL: Duration = Duration::from_millis(5000);

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn engine(len: usize, playing: bool) -> SlideshowEngine<usize> {
        SlideshowEngine::new((0..len).collect(), INTERVAL, playing)
    }

    #[test]
    fn starts_at_zero_with_initial_flag() {
        assert_eq!(engine(3, true).cursor(), Cursor { index: 0, playing: true });
        assert_eq!(engine(3, false).cursor(), Cursor { index: 0, playing: false });
    }

    #[test]
    fn one_advance_per_interval_while_playing() {
        let mut engine = engine(3, true);
        assert!(!engine.update(ms(4999)));
        assert_eq!(engine.index(), 0);
        assert!(engine.update(ms(1)));
        assert_eq!(engine.index(), 1);
        engine.update(INTERVAL);
        assert_eq!(engine.index(), 2);
        engine.update(INTERVAL);
        assert_eq!(engine.index(), 0);
    }

    #[test]
    fn no_tick_while_paused() {
        let mut engine = engine(3, false);
        assert!(!engine.is_timer_armed());
        assert!(!engine.update(ms(60_000)));
        assert_eq!(engine.index(), 0);
    }

    #[test]
    fn resume_restarts_the_period() {
        let mut engine = engine(3, true);
        engine.update(ms(4000));
        engine.set_playing(false);
        engine.set_playing(true);
        engine.update(ms(4999));
        assert_eq!(engine.index(), 0);
        engine.update(ms(1));
        assert_eq!(engine.index(), 1);
    }

    #[test]
    fn setting_the_same_flag_keeps_the_phase() {
        let mut engine = engine(3, true);
        engine.update(ms(4000));
        engine.set_playing(true);
        engine.update(ms(1000));
        assert_eq!(engine.index(), 1);
    }

    #[test_case(0 ; "empty")]
    #[test_case(1 ; "single item")]
    fn short_sequences_never_arm_or_move(len: usize) {
        let mut engine = engine(len, true);
        assert!(!engine.is_timer_armed());
        engine.advance();
        engine.retreat();
        engine.update(ms(60_000));
        assert_eq!(engine.index(), 0);
        assert!(engine.is_playing());
    }

    #[test]
    fn empty_sequence_has_nothing_to_show() {
        let mut engine = engine(0, true);
        assert_eq!(engine.current(), None);
        assert_eq!(engine.position(), None);
        assert_eq!(engine.counter(), None);
        assert_eq!(engine.goto(0), Err(CarouselError::OutOfRange { index: 0, len: 0 }));
    }

    #[test]
    fn goto_sets_exact_index() {
        let mut engine = engine(4, false);
        engine.goto(3).unwrap();
        assert_eq!(engine.index(), 3);
        assert_eq!(engine.current(), Some(&3));
    }

    #[test_case(4)]
    #[test_case(100)]
    fn goto_out_of_range_leaves_index(target: usize) {
        let mut engine = engine(4, false);
        engine.goto(2).unwrap();
        assert_eq!(
            engine.goto(target),
            Err(CarouselError::OutOfRange { index: target, len: 4 })
        );
        assert_eq!(engine.index(), 2);
    }

    #[test]
    fn manual_steps_keep_phase_by_default() {
        let mut engine = engine(5, true);
        engine.update(ms(3000));
        engine.advance();
        engine.update(ms(2000));
        assert_eq!(engine.index(), 2);
    }

    #[test]
    fn restart_policy_gives_manual_steps_a_full_period() {
        let mut engine = engine(5, true).with_manual_nav(ManualNavPolicy::RestartTimer);
        engine.update(ms(3000));
        engine.advance();
        engine.update(ms(4999));
        assert_eq!(engine.index(), 1);
        engine.update(ms(1));
        assert_eq!(engine.index(), 2);
    }

    #[test]
    fn retreat_wraps_and_toggle_flips() {
        let mut engine = engine(3, true);
        engine.retreat();
        assert_eq!(engine.index(), 2);
        engine.toggle_playing();
        assert!(!engine.is_playing());
        assert!(!engine.is_timer_armed());
    }

    #[test]
    fn interval_change_rearms_only_when_different() {
        let mut engine = engine(3, true);
        engine.update(ms(3000));
        engine.set_interval(INTERVAL);
        assert_eq!(engine.time_until_tick(), Some(ms(2000)));
        engine.set_interval(ms(1000));
        assert_eq!(engine.time_until_tick(), Some(ms(1000)));
    }

    #[test]
    fn too_short_interval_is_clamped() {
        let engine = SlideshowEngine::new(vec![1, 2], Duration::ZERO, true);
        assert_eq!(engine.interval(), MIN_AUTOPLAY_INTERVAL);
    }

    #[test]
    fn long_frame_catches_up() {
        let mut engine = engine(4, true);
        engine.update(ms(15_000));
        assert_eq!(engine.index(), 3);
    }
}
