//! Scroll-driven page state.
//!
//! The page keeps two flags derived from the live scroll position: whether
//! the back-to-top button is shown and whether the hero banner is still on
//! screen. Both are recomputed from a fresh [`ScrollSample`] on mount and on
//! every window `scroll` event.

use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{ScrollBehavior, ScrollToOptions, Window};
use yew::prelude::*;

use crate::config::{HERO_SECTION_ID, TOP_ARROW_THRESHOLD_PX};

/// One reading of the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollSample {
    /// Vertical scroll offset of the document.
    pub offset: f64,
    /// Viewport-relative y of the hero section's bottom edge, `None` when
    /// the hero is not in the document.
    pub hero_bottom: Option<f64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageVisibility {
    pub top_arrow: bool,
    pub hero: bool,
}

impl Default for PageVisibility {
    fn default() -> Self {
        Self {
            top_arrow: false,
            hero: true,
        }
    }
}

impl PageVisibility {
    /// Applies a sample. A missing hero leaves `hero` as it was.
    pub fn observe(self, sample: ScrollSample) -> Self {
        Self {
            top_arrow: sample.offset > TOP_ARROW_THRESHOLD_PX,
            hero: sample.hero_bottom.map_or(self.hero, |bottom| bottom > 0.0),
        }
    }
}

impl Reducible for PageVisibility {
    type Action = ScrollSample;

    fn reduce(self: Rc<Self>, sample: ScrollSample) -> Rc<Self> {
        Rc::new(self.observe(sample))
    }
}

pub fn sample(window: &Window) -> ScrollSample {
    let offset = window.scroll_y().unwrap_or(0.0);
    let hero_bottom = window
        .document()
        .and_then(|document| document.get_element_by_id(HERO_SECTION_ID))
        .map(|hero| hero.get_bounding_client_rect().bottom());

    ScrollSample { offset, hero_bottom }
}

pub fn scroll_to_top(window: &Window) {
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// A window `scroll` listener that stays registered for as long as this
/// value is alive.
pub struct ScrollSubscription {
    window: Window,
    callback: Closure<dyn Fn()>,
}

impl ScrollSubscription {
    pub fn new<F>(window: Window, handler: F) -> Result<Self, JsValue>
    where
        F: Fn() + 'static,
    {
        let callback = Closure::<dyn Fn()>::new(handler);
        window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())?;
        debug!("Scroll listener registered");

        Ok(Self { window, callback })
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        if let Err(err) = self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref())
        {
            warn!("Failed to remove scroll listener: {:?}", err);
        } else {
            debug!("Scroll listener removed");
        }
    }
}

/// Tracks [`PageVisibility`] for the lifetime of the calling component.
#[hook]
pub fn use_page_visibility() -> PageVisibility {
    let visibility = use_reducer_eq(PageVisibility::default);

    {
        let dispatcher = visibility.dispatcher();
        use_effect_with_deps(
            move |_| {
                let subscription = web_sys::window().and_then(|window| {
                    let subscription = {
                        let window = window.clone();
                        let dispatcher = dispatcher.clone();
                        ScrollSubscription::new(window.clone(), move || {
                            dispatcher.dispatch(sample(&window));
                        })
                    };

                    // Initial check, the page may load already scrolled.
                    dispatcher.dispatch(sample(&window));

                    match subscription {
                        Ok(subscription) => Some(subscription),
                        Err(err) => {
                            warn!("Failed to register scroll listener: {:?}", err);
                            None
                        }
                    }
                });

                move || drop(subscription)
            },
            (),
        );
    }

    *visibility
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(offset: f64, hero_bottom: Option<f64>) -> ScrollSample {
        ScrollSample {
            offset,
            hero_bottom,
        }
    }

    #[test]
    fn top_arrow_threshold_is_exclusive() {
        let start = PageVisibility::default();
        assert!(!start.observe(at(0.0, None)).top_arrow);
        assert!(!start.observe(at(200.0, None)).top_arrow);
        assert!(start.observe(at(201.0, None)).top_arrow);
        assert!(start.observe(at(200.5, None)).top_arrow);
    }

    #[test]
    fn hero_follows_bottom_edge() {
        let start = PageVisibility::default();
        assert!(start.observe(at(0.0, Some(640.0))).hero);
        assert!(start.observe(at(639.0, Some(1.0))).hero);
        assert!(!start.observe(at(640.0, Some(0.0))).hero);
        assert!(!start.observe(at(900.0, Some(-260.0))).hero);
    }

    #[test]
    fn missing_hero_keeps_previous_value() {
        let hidden = PageVisibility {
            top_arrow: true,
            hero: false,
        };
        let next = hidden.observe(at(10.0, None));
        assert!(!next.hero);
        assert!(!next.top_arrow);

        let shown = PageVisibility::default().observe(at(500.0, None));
        assert!(shown.hero);
        assert!(shown.top_arrow);
    }

    #[test]
    fn scroll_down_and_back() {
        // Hero is 640px tall and starts at the top of the page.
        let hero_bottom = |offset: f64| Some(640.0 - offset);
        let mut state = PageVisibility::default().observe(at(0.0, hero_bottom(0.0)));
        assert_eq!(
            state,
            PageVisibility {
                top_arrow: false,
                hero: true
            }
        );

        state = state.observe(at(500.0, hero_bottom(500.0)));
        assert!(state.top_arrow);
        assert!(state.hero);

        state = state.observe(at(700.0, hero_bottom(700.0)));
        assert!(state.top_arrow);
        assert!(!state.hero);

        state = state.observe(at(0.0, hero_bottom(0.0)));
        assert_eq!(state, PageVisibility::default());
    }

    #[test]
    fn reducer_applies_samples_in_order() {
        let state = Rc::new(PageVisibility::default());
        let state = state.reduce(at(300.0, Some(-10.0)));
        let state = state.reduce(at(300.0, None));
        assert_eq!(
            *state,
            PageVisibility {
                top_arrow: true,
                hero: false
            }
        );
    }
}
