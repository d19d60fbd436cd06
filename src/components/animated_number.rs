use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::components::reveal::use_reveal_once;
use crate::config;

// Largest integration step. Frame deltas are split into steps this size.
const MAX_STEP_SECS: f64 = 1.0 / 240.0;
// A backgrounded tab can hand us a huge delta on return.
const MAX_FRAME_SECS: f64 = 0.1;

/// Damped spring chasing `target`, integrated with semi-implicit Euler.
#[derive(Clone, Debug, PartialEq)]
pub struct Spring {
    position: f64,
    velocity: f64,
    target: f64,
    stiffness: f64,
    damping: f64,
    mass: f64,
    settled: bool,
}

impl Spring {
    pub fn new(target: f64) -> Self {
        Self {
            position: 0.0,
            velocity: 0.0,
            target,
            stiffness: config::SPRING_STIFFNESS,
            damping: config::SPRING_DAMPING,
            mass: config::SPRING_MASS,
            settled: !target.is_finite() || target == 0.0,
        }
    }

    pub fn value(&self) -> f64 {
        if self.settled {
            self.target
        } else {
            self.position
        }
    }

    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// Advances the simulation by `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        let mut remaining = dt.clamp(0.0, MAX_FRAME_SECS);
        while !self.settled && remaining > 0.0 {
            let h = remaining.min(MAX_STEP_SECS);
            self.step(h);
            remaining -= h;
        }
    }

    fn step(&mut self, h: f64) {
        let displacement = self.position - self.target;
        let accel = (-self.stiffness * displacement - self.damping * self.velocity) / self.mass;
        self.velocity += accel * h;
        self.position += self.velocity * h;

        if (self.target - self.position).abs() < config::SPRING_REST_DELTA
            && self.velocity.abs() < config::SPRING_REST_SPEED
        {
            self.position = self.target;
            self.velocity = 0.0;
            self.settled = true;
        }
    }
}

/// Renders `value` the way the counter shows it: floored when there are no
/// decimals, fixed-point otherwise.
pub fn format_number(value: f64, decimals: usize, prefix: &str, suffix: &str) -> String {
    if decimals == 0 {
        format!("{}{}{}", prefix, value.floor(), suffix)
    } else {
        format!("{}{:.*}{}", prefix, decimals, value, suffix)
    }
}

#[derive(Properties, PartialEq)]
pub struct AnimatedNumberProps {
    pub value: f64,
    #[prop_or_default]
    pub prefix: AttrValue,
    #[prop_or_default]
    pub suffix: AttrValue,
    #[prop_or_default]
    pub decimals: usize,
}

#[function_component(AnimatedNumber)]
pub fn animated_number(props: &AnimatedNumberProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal_once(node.clone(), "0px");
    let display = use_state(|| 0.0_f64);

    {
        let display = display.clone();
        use_effect_with_deps(
            move |(revealed, target): &(bool, f64)| {
                let frame_loop = if *revealed {
                    FrameLoop::start(*target, display)
                } else {
                    None
                };
                move || drop(frame_loop)
            },
            (revealed, props.value),
        );
    }

    html! {
        <span ref={node} class="animated-number">
            {format_number(*display, props.decimals, &props.prefix, &props.suffix)}
        </span>
    }
}

type FrameCallback = Closure<dyn FnMut(f64)>;

/// requestAnimationFrame loop that feeds a spring into a state handle until
/// the spring settles. Dropping it cancels the pending frame.
struct FrameLoop {
    window: web_sys::Window,
    frame_id: Rc<Cell<Option<i32>>>,
    callback: Rc<RefCell<Option<FrameCallback>>>,
}

impl FrameLoop {
    fn start(target: f64, display: UseStateHandle<f64>) -> Option<Self> {
        let window = web_sys::window()?;
        let frame_id = Rc::new(Cell::new(None));
        let callback: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));

        let mut spring = Spring::new(target);
        let mut last_ts: Option<f64> = None;
        let next_window = window.clone();
        let next_id = frame_id.clone();
        let next_callback = callback.clone();

        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
            let dt = last_ts.map(|prev| (ts - prev) / 1000.0).unwrap_or(0.0);
            last_ts = Some(ts);
            spring.advance(dt);
            display.set(spring.value());

            if spring.is_settled() {
                debug!("Counter settled at {}", spring.value());
                next_id.set(None);
                return;
            }
            if let Some(cb) = next_callback.borrow().as_ref() {
                match next_window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    Ok(id) => next_id.set(Some(id)),
                    Err(_) => warn!("requestAnimationFrame failed, counter stopped"),
                }
            }
        }) as Box<dyn FnMut(f64)>));

        let first = callback
            .borrow()
            .as_ref()
            .map(|cb| window.request_animation_frame(cb.as_ref().unchecked_ref()));
        match first {
            Some(Ok(id)) => frame_id.set(Some(id)),
            _ => {
                warn!("requestAnimationFrame failed, counter stopped");
                callback.borrow_mut().take();
                return None;
            }
        }

        Some(Self { window, frame_id, callback })
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let Some(id) = self.frame_id.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        // The closure holds a handle to its own cell.
        self.callback.borrow_mut().take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settle(spring: &mut Spring) -> usize {
        let mut frames = 0;
        while !spring.is_settled() && frames < 60 * 30 {
            spring.advance(1.0 / 60.0);
            frames += 1;
        }
        frames
    }

    #[test]
    fn settles_exactly_on_target() {
        let mut spring = Spring::new(4.2);
        let frames = settle(&mut spring);
        assert!(spring.is_settled(), "still moving after {} frames", frames);
        assert_eq!(spring.value(), 4.2);
        assert_eq!(format_number(spring.value(), 1, "", "x"), "4.2x");
    }

    #[test]
    fn large_targets_settle_without_overshoot() {
        let mut spring = Spring::new(47.0);
        let mut peak = 0.0_f64;
        while !spring.is_settled() {
            spring.advance(1.0 / 60.0);
            peak = peak.max(spring.value());
        }
        assert!(peak <= 47.0 + config::SPRING_REST_DELTA);
        assert_eq!(format_number(spring.value(), 0, "", "%"), "47%");
    }

    #[test]
    fn counts_up_monotonically_from_zero() {
        let mut spring = Spring::new(15.0);
        assert_eq!(spring.value(), 0.0);
        let mut prev = 0.0;
        for _ in 0..30 {
            spring.advance(1.0 / 60.0);
            assert!(spring.value() >= prev);
            prev = spring.value();
        }
        assert!(prev > 0.0 && prev < 15.0);
    }

    #[test]
    fn huge_frame_gaps_are_clamped() {
        let mut a = Spring::new(32.0);
        let mut b = Spring::new(32.0);
        a.advance(5.0);
        b.advance(MAX_FRAME_SECS);
        assert_eq!(a, b);
    }

    #[test]
    fn non_finite_target_is_settled_immediately() {
        let spring = Spring::new(f64::NAN);
        assert!(spring.is_settled());
        assert_eq!(format_number(spring.value(), 1, "", "x"), "NaNx");
    }

    #[test]
    fn formatting() {
        assert_eq!(format_number(0.0, 1, "", "x"), "0.0x");
        assert_eq!(format_number(12.97, 0, "$", ""), "$12");
        assert_eq!(format_number(3.14159, 2, "~", "%"), "~3.14%");
    }
}
