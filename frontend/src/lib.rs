use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod anchor;
pub mod config;
pub mod content;
pub mod scroll;

pub mod components {
    pub mod back_to_top;
    pub mod icons;
    pub mod reveal;
}

pub mod pages {
    pub mod home;
    pub mod media;
    pub mod not_found;
}

use config::BASE_PATH;
use pages::{home::HomePage, media::MediaPage, not_found::NotFound};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/media")]
    Media,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <HomePage /> }
        }
        Route::Media => {
            info!("Rendering Media page");
            html! { <MediaPage /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter basename={BASE_PATH}>
            <div class="app">
                <Switch<Route> render={switch} />
            </div>
            <style>
                {r#"
                body {
                    margin: 0;
                    background: #000;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                }

                .app {
                    position: relative;
                    background: #000;
                    color: #fff;
                }

                .accent-link {
                    color: #facc15;
                    text-decoration: none;
                }

                .accent-link:hover {
                    text-decoration: underline;
                }

                .reveal {
                    animation: revealUp 0.8s ease-out both;
                }

                @keyframes revealUp {
                    from {
                        opacity: 0;
                        transform: translateY(50px);
                    }
                    to {
                        opacity: 1;
                        transform: translateY(0);
                    }
                }

                @media (prefers-reduced-motion: reduce) {
                    .reveal {
                        animation: none;
                    }
                }
                "#}
            </style>
        </BrowserRouter>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_map_to_paths() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/media"), Some(Route::Media));
        assert_eq!(Route::Media.to_path(), "/media");
    }
}
