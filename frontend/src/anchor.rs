//! Smooth scrolling for same-page fragment links.
//!
//! Links are collected once when [`FragmentLinks::wire`] runs; anything
//! inserted into the document afterwards keeps the browser's instant jump.

use log::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, MouseEvent, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

pub const FRAGMENT_LINK_SELECTOR: &str = "a[href^='#']";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FragmentNavigation {
    Scrolled(String),
    MissingTarget(String),
    NotAFragment,
}

/// Element id referenced by `href`, if it is a non-empty fragment.
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

pub fn scroll_to_fragment(document: &Document, href: &str) -> FragmentNavigation {
    let id = match fragment_id(href) {
        Some(id) => id,
        None => return FragmentNavigation::NotAFragment,
    };

    match document.get_element_by_id(id) {
        Some(target) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            target.scroll_into_view_with_scroll_into_view_options(&options);
            FragmentNavigation::Scrolled(id.to_string())
        }
        None => FragmentNavigation::MissingTarget(id.to_string()),
    }
}

/// Click handlers attached to every fragment link present at wiring time.
/// Dropping this detaches them.
pub struct FragmentLinks {
    bindings: Vec<(Element, Closure<dyn Fn(MouseEvent)>)>,
}

impl FragmentLinks {
    pub fn wire(
        document: &Document,
        on_navigate: Callback<FragmentNavigation>,
    ) -> Result<Self, JsValue> {
        let links = document.query_selector_all(FRAGMENT_LINK_SELECTOR)?;
        // Drop detaches anything wired before an error.
        let mut wired = Self {
            bindings: Vec::with_capacity(links.length() as usize),
        };

        for index in 0..links.length() {
            let link = match links.item(index).and_then(|node| node.dyn_into::<Element>().ok()) {
                Some(link) => link,
                None => continue,
            };

            let callback = {
                let document = document.clone();
                let on_navigate = on_navigate.clone();
                Closure::<dyn Fn(MouseEvent)>::new(move |event: MouseEvent| {
                    event.prevent_default();
                    let href = event
                        .current_target()
                        .and_then(|target| target.dyn_into::<Element>().ok())
                        .and_then(|link| link.get_attribute("href"))
                        .unwrap_or_default();
                    on_navigate.emit(scroll_to_fragment(&document, &href));
                })
            };

            link.add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())?;
            wired.bindings.push((link, callback));
        }

        debug!("Wired {} fragment links", wired.len());
        Ok(wired)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl Drop for FragmentLinks {
    fn drop(&mut self) {
        for (link, callback) in &self.bindings {
            if let Err(err) =
                link.remove_event_listener_with_callback("click", callback.as_ref().unchecked_ref())
            {
                warn!("Failed to detach fragment link handler: {:?}", err);
            }
        }
    }
}

/// Wires the fragment links rendered by the calling component on mount.
#[hook]
pub fn use_fragment_links() {
    use_effect_with_deps(
        |_| {
            let on_navigate = Callback::from(|navigation: FragmentNavigation| match navigation {
                FragmentNavigation::Scrolled(id) => debug!("Scrolled to #{}", id),
                FragmentNavigation::MissingTarget(id) => debug!("No element for #{}", id),
                FragmentNavigation::NotAFragment => {}
            });

            let links = web_sys::window()
                .and_then(|window| window.document())
                .and_then(|document| match FragmentLinks::wire(&document, on_navigate) {
                    Ok(links) if links.is_empty() => {
                        debug!("No fragment links to wire");
                        None
                    }
                    Ok(links) => Some(links),
                    Err(err) => {
                        warn!("Failed to wire fragment links: {:?}", err);
                        None
                    }
                });

            move || drop(links)
        },
        (),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_id_strips_hash() {
        assert_eq!(fragment_id("#events"), Some("events"));
        assert_eq!(fragment_id("#hero"), Some("hero"));
    }

    #[test]
    fn bare_hash_and_other_hrefs_are_not_fragments() {
        assert_eq!(fragment_id("#"), None);
        assert_eq!(fragment_id(""), None);
        assert_eq!(fragment_id("/media"), None);
        assert_eq!(fragment_id("https://instagram.com"), None);
    }
}
