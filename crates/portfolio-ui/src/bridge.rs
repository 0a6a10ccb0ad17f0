//! Browser bridge.
//!
//! Window scroll listeners and viewport intersection observers are installed
//! through `document::eval` so the same code runs on the web and desktop
//! renderers. Each installation gets a [`ListenerKey`] and a
//! [`ScopedListener`] guard stored in the owning component's hooks; dropping
//! the guard (component unmount) removes the JavaScript side.

use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;
use portfolio_core::motion::MotionMode;
use portfolio_core::RevealLatch;

/// Name of the window-level registry holding teardown closures
const REGISTRY: &str = "__portfolioListeners";

/// Fraction of an element that must be visible to count as intersecting
const REVEAL_THRESHOLD: f64 = 0.15;

/// Animation frames to wait for an element to appear before giving up
const ATTACH_RETRIES: u32 = 10;

static NEXT_KEY: AtomicU64 = AtomicU64::new(1);

/// Identifies one installed listener, unique for the process lifetime
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct ListenerKey(u64);

impl ListenerKey {
    pub fn next() -> Self {
        Self(NEXT_KEY.fetch_add(1, Ordering::Relaxed))
    }

    /// Registry slot for this listener's teardown closure
    pub fn slot(&self) -> String {
        format!("listener-{}", self.0)
    }

    /// DOM id for an element observed under this key
    pub fn dom_id(&self) -> String {
        format!("reveal-{}", self.0)
    }
}

/// Removes a listener from the page when dropped
#[derive(Debug)]
pub struct ScopedListener {
    key: ListenerKey,
}

impl ScopedListener {
    fn new(key: ListenerKey) -> Self {
        Self { key }
    }
}

impl Drop for ScopedListener {
    fn drop(&mut self) {
        tracing::trace!(slot = %self.key.slot(), "releasing browser listener");
        let _ = document::eval(&teardown_script(self.key));
    }
}

fn scroll_script(key: ListenerKey) -> String {
    r#"
    const registry = (window.__REGISTRY__ = window.__REGISTRY__ || {});
    const report = () => dioxus.send(window.scrollY);
    window.addEventListener("scroll", report, { passive: true });
    registry["__SLOT__"] = () => window.removeEventListener("scroll", report);
    report();
    "#
    .replace("__REGISTRY__", REGISTRY)
    .replace("__SLOT__", &key.slot())
}

fn intersection_script(key: ListenerKey) -> String {
    r#"
    const registry = (window.__REGISTRY__ = window.__REGISTRY__ || {});
    const attach = (tries) => {
        const el = document.getElementById("__DOM_ID__");
        if (!el || typeof IntersectionObserver === "undefined") {
            if (!el && tries > 0) {
                requestAnimationFrame(() => attach(tries - 1));
            } else {
                dioxus.send(true);
            }
            return;
        }
        const observer = new IntersectionObserver((entries) => {
            if (entries.some((entry) => entry.isIntersecting)) {
                dioxus.send(true);
                observer.disconnect();
                delete registry["__SLOT__"];
            }
        }, { threshold: __THRESHOLD__ });
        registry["__SLOT__"] = () => observer.disconnect();
        observer.observe(el);
    };
    attach(__RETRIES__);
    "#
    .replace("__REGISTRY__", REGISTRY)
    .replace("__SLOT__", &key.slot())
    .replace("__DOM_ID__", &key.dom_id())
    .replace("__THRESHOLD__", &REVEAL_THRESHOLD.to_string())
    .replace("__RETRIES__", &ATTACH_RETRIES.to_string())
}

fn teardown_script(key: ListenerKey) -> String {
    r#"
    const registry = window.__REGISTRY__;
    if (registry && registry["__SLOT__"]) {
        registry["__SLOT__"]();
        delete registry["__SLOT__"];
    }
    "#
    .replace("__REGISTRY__", REGISTRY)
    .replace("__SLOT__", &key.slot())
}

/// Hook tracking the window's vertical scroll offset.
///
/// Starts at 0.0, updates on every scroll event. The listener is removed
/// when the calling component unmounts.
pub fn use_window_scroll() -> ReadOnlySignal<f64> {
    let key = use_hook(ListenerKey::next);
    let mut offset = use_signal(|| 0.0_f64);
    use_hook(move || Rc::new(ScopedListener::new(key)));

    use_effect(move || {
        spawn(async move {
            let mut eval = document::eval(&scroll_script(key));
            loop {
                match eval.recv::<f64>().await {
                    Ok(y) => offset.set(y),
                    Err(e) => {
                        tracing::warn!(slot = %key.slot(), "Scroll listener closed: {:?}", e);
                        break;
                    }
                }
            }
        });
    });

    ReadOnlySignal::new(offset)
}

/// Reveal state for one rendered element
#[derive(Clone, Copy, PartialEq)]
pub struct RevealHandle {
    key: ListenerKey,
    latch: Signal<RevealLatch>,
}

impl RevealHandle {
    /// The id the observed element must carry
    pub fn dom_id(&self) -> String {
        self.key.dom_id()
    }

    pub fn is_revealed(&self) -> bool {
        (self.latch)().is_revealed()
    }

    /// `base` plus the reveal classes for the current latch state
    pub fn class(&self, base: &str) -> String {
        reveal_class(base, self.is_revealed())
    }
}

/// Classes for a reveal element
pub fn reveal_class(base: &str, revealed: bool) -> String {
    let state = if revealed { "reveal revealed" } else { "reveal" };
    if base.is_empty() {
        state.to_string()
    } else {
        format!("{} {}", base, state)
    }
}

/// Inline custom properties driving the reveal transition
pub fn reveal_style(offset_px: u32, delay_ms: u64) -> String {
    format!("--reveal-offset: {}px; --reveal-delay: {}ms;", offset_px, delay_ms)
}

/// Hook giving the calling element a one-shot viewport latch.
///
/// Under [`MotionMode::Static`] (from context) the latch starts tripped and
/// no observer is installed. Otherwise an intersection observer watches the
/// element carrying [`RevealHandle::dom_id`]; the first intersecting reading
/// trips the latch and the observer disconnects itself. When the observer
/// cannot run or the element never mounts, the latch trips immediately.
pub fn use_reveal() -> RevealHandle {
    let mode = try_use_context::<MotionMode>().unwrap_or_default();
    let key = use_hook(ListenerKey::next);
    let mut latch = use_signal(|| RevealLatch::new(mode));
    let guard = use_hook(move || {
        (!mode.starts_revealed()).then(|| Rc::new(ScopedListener::new(key)))
    });

    use_effect(move || {
        if guard.is_none() || latch.peek().is_revealed() {
            return;
        }
        spawn(async move {
            let mut eval = document::eval(&intersection_script(key));
            let intersecting = match eval.recv::<bool>().await {
                Ok(intersecting) => intersecting,
                Err(e) => {
                    tracing::warn!(
                        id = %key.dom_id(),
                        "Viewport observer unavailable, showing content: {:?}",
                        e
                    );
                    true
                }
            };
            if latch.write().observe(intersecting) {
                tracing::debug!(id = %key.dom_id(), "revealed");
            }
        });
    });

    RevealHandle { key, latch }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_unique() {
        let a = ListenerKey::next();
        let b = ListenerKey::next();
        assert_ne!(a, b);
        assert_ne!(a.dom_id(), b.dom_id());
    }

    #[test]
    fn scripts_carry_their_slot() {
        let key = ListenerKey(7);
        assert!(scroll_script(key).contains("registry[\"listener-7\"]"));
        assert!(scroll_script(key).contains("window.__portfolioListeners"));
        let observe = intersection_script(key);
        assert!(observe.contains("getElementById(\"reveal-7\")"));
        assert!(observe.contains("threshold: 0.15"));
        assert!(observe.contains("attach(10)"));
        let placeholders = [
            "__REGISTRY__",
            "__SLOT__",
            "__DOM_ID__",
            "__THRESHOLD__",
            "__RETRIES__",
        ];
        for placeholder in placeholders {
            assert!(!observe.contains(placeholder), "unreplaced {placeholder}");
        }
        assert!(teardown_script(key).contains("delete registry[\"listener-7\"]"));
    }

    #[test]
    fn observer_script_reports_visible_when_it_cannot_observe() {
        let observe = intersection_script(ListenerKey(3));
        assert!(observe.contains("typeof IntersectionObserver === \"undefined\""));
        // Give-up branch and intersecting branch both report `true`
        assert_eq!(observe.matches("dioxus.send(true)").count(), 2);
    }

    #[test]
    fn reveal_classes() {
        assert_eq!(reveal_class("card", false), "card reveal");
        assert_eq!(reveal_class("card", true), "card reveal revealed");
        assert_eq!(reveal_class("", true), "reveal revealed");
    }

    #[test]
    fn reveal_style_sets_custom_properties() {
        assert_eq!(
            reveal_style(16, 150),
            "--reveal-offset: 16px; --reveal-delay: 150ms;"
        );
    }
}
