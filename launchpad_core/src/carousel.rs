//! Testimonial rotation: an index cycler over a fixed number of slides.
//!
//! The auto-rotation timer and the manual controls feed the same transition
//! function. Manual navigation does not restart the timer; the next tick
//! still lands on its fixed schedule.

use std::time::Duration;

/// Default auto-rotation period.
pub const ROTATION_INTERVAL: Duration = Duration::from_millis(5_000);

/// Inputs to the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselEvent {
    /// Timer fired
    Tick,
    /// Right arrow
    Next,
    /// Left arrow
    Prev,
    /// Dot clicked
    Jump(usize),
}

/// Current slide out of `len`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CarouselState {
    index: usize,
    len: usize,
}

impl CarouselState {
    /// Start at the first of `len` slides.
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    /// Visible slide.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of slides.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when there is nothing to rotate.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True when `index` is the visible slide (dot highlighting).
    pub fn is_current(&self, index: usize) -> bool {
        !self.is_empty() && self.index == index
    }

    /// `(state, event) -> state`.
    ///
    /// ```rust
    /// use launchpad_core::carousel::{CarouselEvent, CarouselState};
    ///
    /// let state = CarouselState::new(3)
    ///     .apply(CarouselEvent::Tick)
    ///     .apply(CarouselEvent::Tick)
    ///     .apply(CarouselEvent::Tick);
    /// assert_eq!(state.index(), 0);
    /// ```
    pub fn apply(self, event: CarouselEvent) -> Self {
        if self.is_empty() {
            return self;
        }

        let index = match event {
            CarouselEvent::Tick | CarouselEvent::Next => (self.index + 1) % self.len,
            CarouselEvent::Prev => (self.index + self.len - 1) % self.len,
            CarouselEvent::Jump(requested) if requested < self.len => requested,
            CarouselEvent::Jump(requested) => {
                tracing::warn!(requested, len = self.len, "carousel jump out of range");
                return self;
            }
        };

        tracing::debug!(?event, from = self.index, to = index, "carousel moved");
        Self { index, ..self }
    }
}

/// Carousel plus the lifecycle of its auto-rotation timer.
///
/// Timer ticks only count while the rotation is armed. Once disarmed at
/// teardown, a late tick from a timer that was not cancelled in time is
/// dropped. Manual navigation works in either state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rotation {
    carousel: CarouselState,
    armed: bool,
}

impl Rotation {
    /// Disarmed rotation over `len` slides.
    pub fn new(len: usize) -> Self {
        Self {
            carousel: CarouselState::new(len),
            armed: false,
        }
    }

    /// Current carousel position.
    pub fn carousel(&self) -> CarouselState {
        self.carousel
    }

    /// True while timer ticks advance the carousel.
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Start accepting ticks. Returns false, and stays disarmed, when there
    /// is nothing to rotate, in which case no timer should be started.
    pub fn arm(&mut self) -> bool {
        self.armed = !self.carousel.is_empty();
        self.armed
    }

    /// Stop accepting ticks. Called when the timer is torn down.
    pub fn disarm(&mut self) {
        if self.armed {
            tracing::debug!("carousel rotation disarmed");
        }
        self.armed = false;
    }

    /// Like [`CarouselState::apply`], but a `Tick` is dropped while disarmed.
    pub fn apply(self, event: CarouselEvent) -> Self {
        if event == CarouselEvent::Tick && !self.armed {
            tracing::debug!("tick after rotation stopped, ignored");
            return self;
        }
        Self {
            carousel: self.carousel.apply(event),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run(state: CarouselState, events: &[CarouselEvent]) -> usize {
        events.iter().fold(state, |s, e| s.apply(*e)).index()
    }

    #[test]
    fn three_ticks_come_back_around() {
        let state = CarouselState::new(3);
        assert_eq!(run(state, &[CarouselEvent::Tick]), 1);
        assert_eq!(run(state, &[CarouselEvent::Tick; 2]), 2);
        assert_eq!(run(state, &[CarouselEvent::Tick; 3]), 0);
    }

    #[test]
    fn prev_from_first_wraps_to_last() {
        assert_eq!(CarouselState::new(3).apply(CarouselEvent::Prev).index(), 2);
    }

    #[test]
    fn next_and_prev_cancel_out() {
        let state = CarouselState::new(4).apply(CarouselEvent::Jump(2));
        assert_eq!(run(state, &[CarouselEvent::Next, CarouselEvent::Prev]), 2);
    }

    #[test]
    fn manual_moves_interleave_with_ticks() {
        let events = [
            CarouselEvent::Jump(2),
            CarouselEvent::Tick,
            CarouselEvent::Prev,
            CarouselEvent::Prev,
            CarouselEvent::Tick,
        ];
        assert_eq!(run(CarouselState::new(3), &events), 2);
    }

    #[test]
    fn out_of_range_jump_is_ignored() {
        let state = CarouselState::new(3).apply(CarouselEvent::Next);
        assert_eq!(state.apply(CarouselEvent::Jump(3)), state);
    }

    #[test]
    fn empty_carousel_never_moves() {
        let state = CarouselState::new(0);
        for event in [
            CarouselEvent::Tick,
            CarouselEvent::Next,
            CarouselEvent::Prev,
            CarouselEvent::Jump(0),
        ] {
            assert_eq!(state.apply(event), state);
        }
        assert!(!state.is_current(0));
    }

    #[test]
    fn single_slide_stays_put() {
        assert_eq!(run(CarouselState::new(1), &[CarouselEvent::Tick, CarouselEvent::Prev]), 0);
    }

    #[test]
    fn armed_rotation_follows_ticks() {
        let mut rotation = Rotation::new(3);
        assert!(rotation.arm());
        let rotation = rotation.apply(CarouselEvent::Tick).apply(CarouselEvent::Tick);
        assert_eq!(rotation.carousel().index(), 2);
    }

    #[test]
    fn ticks_after_teardown_leave_the_slide_alone() {
        let mut rotation = Rotation::new(3);
        rotation.arm();
        let mut rotation = rotation.apply(CarouselEvent::Tick);
        rotation.disarm();

        let after = (0..5).fold(rotation, |r, _| r.apply(CarouselEvent::Tick));
        assert_eq!(after, rotation);
        assert_eq!(after.carousel().index(), 1);
        assert!(!after.is_armed());
    }

    #[test]
    fn manual_moves_work_while_disarmed() {
        let rotation = Rotation::new(3)
            .apply(CarouselEvent::Next)
            .apply(CarouselEvent::Jump(0))
            .apply(CarouselEvent::Prev);
        assert_eq!(rotation.carousel().index(), 2);
    }

    #[test]
    fn empty_rotation_refuses_to_arm() {
        let mut rotation = Rotation::new(0);
        assert!(!rotation.arm());
        assert!(!rotation.is_armed());
    }
}
