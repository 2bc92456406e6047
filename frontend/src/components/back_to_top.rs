use yew::prelude::*;

use crate::components::icons::ArrowUp;
use crate::scroll::scroll_to_top;

#[derive(Properties, PartialEq)]
pub struct BackToTopProps {
    pub visible: bool,
}

/// Floating button that smooth-scrolls the window back to the top.
/// Stays in the DOM while hidden so the fade-out can play.
#[function_component(BackToTop)]
pub fn back_to_top(props: &BackToTopProps) -> Html {
    let onclick = Callback::from(|_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            scroll_to_top(&window);
        }
    });

    html! {
        <>
            <button
                class={classes!("back-to-top", props.visible.then(|| "visible"))}
                aria-label="Back to top"
                aria-hidden={(!props.visible).to_string()}
                tabindex={if props.visible { "0" } else { "-1" }}
                {onclick}
            >
                <ArrowUp />
            </button>
            <style>
                {r#"
                .back-to-top {
                    position: fixed;
                    bottom: 1.5rem;
                    right: 1.5rem;
                    z-index: 50;
                    display: flex;
                    padding: 0.75rem;
                    border: none;
                    border-radius: 9999px;
                    background: #facc15;
                    color: #000;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.3);
                    cursor: pointer;
                    opacity: 0;
                    transform: translateY(50px);
                    pointer-events: none;
                    transition: opacity 0.4s ease, transform 0.4s ease, background 0.2s ease;
                }

                .back-to-top.visible {
                    opacity: 1;
                    transform: translateY(0);
                    pointer-events: auto;
                }

                .back-to-top:hover {
                    background: #fde047;
                }
                "#}
            </style>
        </>
    }
}
