use std::rc::Rc;

use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselAction {
    /// Autoplay timer fired.
    Tick,
    Next,
    Prev,
    GoTo(usize),
    Pause,
    Resume,
}

/// Index of the visible slide plus the hover-pause flag.
///
/// `index` is always `< len` (or `0` when there are no slides).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselState {
    len: usize,
    index: usize,
    paused: bool,
}

impl CarouselState {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0, paused: false }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether an autoplay interval should be running. The view keys its
    /// timer effect on this, so the interval is re-armed only when it flips.
    pub fn autoplay_armed(&self) -> bool {
        self.len > 0 && !self.paused
    }

    pub fn apply(self, action: CarouselAction) -> Self {
        if self.len == 0 {
            return self;
        }
        match action {
            CarouselAction::Tick if self.paused => self,
            CarouselAction::Tick | CarouselAction::Next => Self {
                index: (self.index + 1) % self.len,
                ..self
            },
            CarouselAction::Prev => Self {
                index: (self.index + self.len - 1) % self.len,
                ..self
            },
            CarouselAction::GoTo(k) if k < self.len => Self { index: k, ..self },
            CarouselAction::GoTo(_) => self,
            CarouselAction::Pause => Self { paused: true, ..self },
            CarouselAction::Resume => Self { paused: false, ..self },
        }
    }
}

impl Reducible for CarouselState {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = (*self).apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::TESTIMONIALS;

    fn run(state: CarouselState, actions: &[CarouselAction]) -> CarouselState {
        actions.iter().fold(state, |s, a| s.apply(*a))
    }

    #[test]
    fn starts_on_first_slide_unpaused() {
        let state = CarouselState::new(4);
        assert_eq!(state.index(), 0);
        assert!(state.autoplay_armed());
    }

    #[test]
    fn full_cycle_of_next_returns_to_start() {
        for start in 0..4 {
            let state = CarouselState::new(4).apply(CarouselAction::GoTo(start));
            let after = run(state, &[CarouselAction::Next; 4]);
            assert_eq!(after.index(), start);
        }
    }

    #[test]
    fn prev_wraps_to_last() {
        let state = CarouselState::new(4).apply(CarouselAction::Prev);
        assert_eq!(state.index(), 3);
        assert_eq!(state.apply(CarouselAction::Prev).index(), 2);
    }

    #[test]
    fn dot_jumps_directly_and_ignores_out_of_range() {
        let state = CarouselState::new(4).apply(CarouselAction::GoTo(2));
        assert_eq!(state.index(), 2);
        assert_eq!(state.apply(CarouselAction::GoTo(4)).index(), 2);
        assert_eq!(state.apply(CarouselAction::GoTo(usize::MAX)).index(), 2);
    }

    #[test]
    fn index_stays_in_range_for_mixed_sequences() {
        use CarouselAction::*;
        let actions = [Prev, Prev, GoTo(3), Next, Tick, Prev, Prev, Prev, Prev, Prev, GoTo(9), Next];
        let mut state = CarouselState::new(4);
        for action in actions.iter().cycle().take(200) {
            state = state.apply(*action);
            assert!(state.index() < 4);
        }
    }

    #[test]
    fn tick_is_ignored_while_paused() {
        let paused = CarouselState::new(4).apply(CarouselAction::Pause);
        assert_eq!(paused.apply(CarouselAction::Tick).index(), 0);

        let resumed = paused.apply(CarouselAction::Tick).apply(CarouselAction::Resume);
        assert_eq!(resumed.index(), 0);
        assert_eq!(resumed.apply(CarouselAction::Tick).index(), 1);
    }

    /// Replays actions the way the view drives them: a fresh interval
    /// whenever `autoplay_armed` flips on, ticks only from a live interval.
    fn drive(actions: &[CarouselAction]) -> (CarouselState, usize) {
        let mut state = CarouselState::new(4);
        let mut arms = usize::from(state.autoplay_armed());
        for action in actions {
            if *action == CarouselAction::Tick && !state.autoplay_armed() {
                continue;
            }
            let next = state.apply(*action);
            if next.autoplay_armed() && !state.autoplay_armed() {
                arms += 1;
            }
            state = next;
        }
        (state, arms)
    }

    #[test]
    fn resume_rearms_once_and_advances_once_per_tick() {
        use CarouselAction::*;
        let (state, arms) = drive(&[Pause, Tick, Tick, Resume, Tick]);
        assert_eq!(arms, 2);
        assert_eq!(state.index(), 1);

        let (state, arms) = drive(&[Tick, Pause, Resume, Pause, Resume, Tick]);
        assert_eq!(arms, 3);
        assert_eq!(state.index(), 2);
    }

    #[test]
    fn manual_navigation_keeps_the_running_timer() {
        use CarouselAction::*;
        let (state, arms) = drive(&[Next, Prev, GoTo(3), Next]);
        assert_eq!(arms, 1);
        assert_eq!(state.index(), 0);
        assert!(state.autoplay_armed());
        assert!(!CarouselState::new(0).autoplay_armed());
    }

    #[test]
    fn manual_controls_work_while_paused() {
        let state = CarouselState::new(4).apply(CarouselAction::Pause);
        assert_eq!(state.apply(CarouselAction::Next).index(), 1);
        assert_eq!(state.apply(CarouselAction::Prev).index(), 3);
        assert!(!state.apply(CarouselAction::Next).autoplay_armed());
    }

    #[test]
    fn empty_carousel_is_inert() {
        let state = run(
            CarouselState::new(0),
            &[CarouselAction::Next, CarouselAction::Prev, CarouselAction::Tick],
        );
        assert_eq!(state.index(), 0);
    }

    #[test]
    fn reducer_reuses_state_when_nothing_changes() {
        let state = Rc::new(CarouselState::new(4).apply(CarouselAction::Pause));
        let same = state.clone().reduce(CarouselAction::Tick);
        assert!(Rc::ptr_eq(&state, &same));
    }

    #[test]
    fn testimonials_wrap_around() {
        let mut state = CarouselState::new(TESTIMONIALS.len());
        assert_eq!(TESTIMONIALS[state.index()].author, "Sarah Chen");

        for _ in 0..3 {
            state = state.apply(CarouselAction::Next);
        }
        assert_eq!(TESTIMONIALS[state.index()].author, "David Park");

        state = state.apply(CarouselAction::Next);
        assert_eq!(TESTIMONIALS[state.index()].author, "Sarah Chen");
    }
}
