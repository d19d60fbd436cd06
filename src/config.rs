use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Chatty locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Header switches to the blurred background past this many pixels.
pub const SCROLL_THRESHOLD_PX: f64 = 20.0;

/// Autoplay period of the testimonial carousel.
pub const CAROUSEL_INTERVAL_MS: u32 = 5000;

// Counter spring, same feel as the hero numbers in the mockups.
pub const SPRING_STIFFNESS: f64 = 50.0;
pub const SPRING_DAMPING: f64 = 20.0;
pub const SPRING_MASS: f64 = 1.0;
pub const SPRING_REST_DELTA: f64 = 0.01;
pub const SPRING_REST_SPEED: f64 = 0.01;

/// Sections reveal only once they are this far inside the viewport.
pub const SECTION_REVEAL_MARGIN: &str = "-100px";

/// Pointer offset (px from centre) that maps to the full hero tilt.
pub const TILT_RANGE_PX: f64 = 300.0;
pub const TILT_MAX_DEG: f64 = 5.0;
