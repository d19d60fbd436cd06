use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// One-shot "has been seen" flag. Once set it stays set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealLatch {
    seen: bool,
}

impl RevealLatch {
    /// Feeds one intersection reading. Returns true only on the reading
    /// that first flips the latch.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.seen || !intersecting {
            return false;
        }
        self.seen = true;
        true
    }
}

/// Class list for an element that fades in once its section is revealed.
pub fn reveal_classes(revealed: bool) -> Classes {
    classes!("reveal", revealed.then_some("is-visible"))
}

/// Inline style staggering a revealed child by `index` steps.
pub fn stagger(base_ms: u32, step_ms: u32, index: usize) -> String {
    format!("transition-delay: {}ms;", base_ms + step_ms * index as u32)
}

/// Watches `node` and returns true from the first render after it
/// intersected the viewport (shrunk by `root_margin`). Never reverts.
#[hook]
pub fn use_reveal_once(node: NodeRef, root_margin: &'static str) -> bool {
    let revealed = use_state(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let fallback = revealed.clone();
                let element = node.cast::<Element>();
                let mut latch = RevealLatch::default();

                let callback = Closure::wrap(Box::new(
                    move |entries: Array, observer: IntersectionObserver| {
                        let intersecting = entries
                            .iter()
                            .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                            .any(|entry| entry.is_intersecting());
                        if latch.observe(intersecting) {
                            debug!("Section revealed");
                            revealed.set(true);
                            observer.disconnect();
                        }
                    },
                )
                    as Box<dyn FnMut(Array, IntersectionObserver)>);

                let init = IntersectionObserverInit::new();
                init.set_root_margin(root_margin);

                let observer = match (
                    element,
                    IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init),
                ) {
                    (Some(element), Ok(observer)) => {
                        observer.observe(&element);
                        Some(observer)
                    }
                    (None, _) => {
                        warn!("Reveal target not mounted, showing content");
                        fallback.set(true);
                        None
                    }
                    (_, Err(_)) => {
                        warn!("IntersectionObserver unavailable, showing content");
                        fallback.set(true);
                        None
                    }
                };

                move || {
                    if let Some(observer) = observer {
                        observer.disconnect();
                    }
                    drop(callback);
                }
            },
            node,
        );
    }

    *revealed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_fires_once() {
        let mut latch = RevealLatch::default();
        assert!(!latch.observe(false));
        assert!(!latch.observe(false));
        assert!(latch.observe(true));
        assert!(!latch.observe(true));
        assert!(!latch.observe(false));
        assert!(!latch.observe(true));
    }

    #[test]
    fn stagger_delays() {
        assert_eq!(stagger(100, 100, 0), "transition-delay: 100ms;");
        assert_eq!(stagger(100, 100, 3), "transition-delay: 400ms;");
    }
}
