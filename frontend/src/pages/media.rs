use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::reveal::Reveal;
use crate::config::asset_url;
use crate::content::{media_alt, MEDIA_IMAGES};
use crate::Route;

#[function_component(MediaPage)]
pub fn media_page() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="media-page">
            <Reveal>
                <h1>{"Media"}</h1>
                <p>{"Photos and videos will be available here after the tournament."}</p>
                <div class="media-page-grid">
                    { for MEDIA_IMAGES.iter().enumerate().map(|(i, image)| html! {
                        <img key={*image} src={asset_url(image)} alt={media_alt(i)} loading="lazy" />
                    }) }
                </div>
                <Link<Route> to={Route::Home} classes="accent-link">
                    {"← Back to the tournament"}
                </Link<Route>>
            </Reveal>
            <style>
                {r#"
                .media-page {
                    min-height: 100vh;
                    padding: 4rem 1rem;
                    text-align: center;
                    background: #111827;
                }

                .media-page-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(16rem, 1fr));
                    gap: 1rem;
                    margin: 2rem 0;
                }

                .media-page-grid img {
                    width: 100%;
                    height: 16rem;
                    object-fit: cover;
                    border-radius: 0.75rem;
                }
                "#}
            </style>
        </div>
    }
}
