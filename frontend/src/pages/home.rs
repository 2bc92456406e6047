use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::anchor::use_fragment_links;
use crate::components::back_to_top::BackToTop;
use crate::components::icons::{Facebook, Instagram, Twitter};
use crate::components::reveal::Reveal;
use crate::config::{asset_url, HERO_SECTION_ID, PAGE_TITLE};
use crate::content::{
    media_alt, sponsor_alt, Social, CONTACT_EMAIL, HERO_BACKGROUND, MEDIA_IMAGES, NAV_LINKS,
    SPONSOR_LOGOS,
};
use crate::scroll::use_page_visibility;
use crate::Route;

fn social_icon(social: Social) -> Html {
    match social {
        Social::Facebook => html! { <Facebook /> },
        Social::Instagram => html! { <Instagram /> },
        Social::Twitter => html! { <Twitter /> },
    }
}

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let visibility = use_page_visibility();
    use_fragment_links();

    use_effect_with_deps(
        |_| {
            if let Some(document) = web_sys::window().and_then(|window| window.document()) {
                document.set_title(PAGE_TITLE);
            }
            || ()
        },
        (),
    );

    let year = chrono::Local::now().year();

    html! {
        <div class="home-page">
            <nav class={classes!("site-nav", if visibility.hero { "over-hero" } else { "solid" })}>
                <h1 class="site-title">{"🏐 Beach Volley"}</h1>
                <div class="site-nav-links">
                    { for NAV_LINKS.iter().map(|link| html! {
                        <a key={link.target} href={link.href()} class="nav-link">{ link.label }</a>
                    }) }
                </div>
            </nav>

            <div id={HERO_SECTION_ID} class="hero">
                <div
                    class="hero-background"
                    style={format!("background-image: url('{}');", HERO_BACKGROUND)}
                ></div>
            </div>

            <section id="sponsors" class="section sponsors">
                <Reveal>
                    <div class="sponsor-row">
                        { for SPONSOR_LOGOS.iter().enumerate().map(|(i, logo)| html! {
                            <img key={*logo} src={asset_url(logo)} alt={sponsor_alt(i)} class="sponsor-logo" />
                        }) }
                    </div>
                </Reveal>
            </section>

            <section id="events" class="section">
                <Reveal>
                    <h2>{"Upcoming Events"}</h2>
                    <p class="lead">{"Stay tuned! Event schedule will be released soon."}</p>
                    <div class="event-card">
                        <h3>{"Main Event"}</h3>
                        <p>{"Date: TBD"}</p>
                        <p>{"Location: TBD"}</p>
                    </div>
                </Reveal>
            </section>

            <section id="gallery" class="section gallery">
                <Reveal>
                    <h2>{"Media Gallery"}</h2>
                    <p class="lead">{"Photos and videos will be available here after the tournament."}</p>
                    <div class="media-grid">
                        { for MEDIA_IMAGES.iter().enumerate().map(|(i, image)| html! {
                            <img key={*image} src={asset_url(image)} alt={media_alt(i)} class="media-tile" />
                        }) }
                    </div>
                    <Link<Route> to={Route::Media} classes="accent-link">
                        {"View All Media"}
                    </Link<Route>>
                </Reveal>
            </section>

            <section id="contact" class="section contact">
                <Reveal>
                    <h2>{"Contact Us"}</h2>
                    <p class="lead">{"For inquiries, sponsorships or volunteering, get in touch with us at:"}</p>
                    <p class="contact-email">{ CONTACT_EMAIL }</p>
                </Reveal>
            </section>

            <footer class="site-footer">
                <div class="social-links">
                    { for Social::ALL.iter().map(|social| html! {
                        <a
                            key={social.label()}
                            href={social.url()}
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label={social.label()}
                            class="social-link"
                        >
                            { social_icon(*social) }
                        </a>
                    }) }
                </div>
                <p>{format!("© {} Beach Volleyball Annual Tournament. All rights reserved.", year)}</p>
                <p class="footer-note">
                    {"Made with ❤️ for beach volleyball lovers. | "}
                    <a href={format!("#{}", HERO_SECTION_ID)} class="accent-link">{"Back to Top"}</a>
                </p>
            </footer>

            <BackToTop visible={visibility.top_arrow} />

            <style>
                {r#"
                .site-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    z-index: 50;
                    display: flex;
                    justify-content: center;
                    align-items: center;
                    padding: 1rem 2rem;
                    box-sizing: border-box;
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.3);
                    transition: background-color 0.5s ease;
                }

                .site-nav.over-hero {
                    background-color: rgba(0, 0, 0, 0.6);
                }

                .site-nav.solid {
                    background-color: #000;
                }

                .site-title {
                    margin: 0;
                    font-size: 1.25rem;
                    font-weight: 700;
                    text-align: center;
                }

                .site-nav-links {
                    position: absolute;
                    right: 2rem;
                    display: flex;
                    gap: 1.5rem;
                    font-size: 1.125rem;
                }

                .nav-link {
                    color: inherit;
                    text-decoration: none;
                }

                .nav-link:hover {
                    color: #facc15;
                }

                .hero {
                    position: relative;
                    height: 78vh;
                    width: 100%;
                    overflow: hidden;
                    padding-top: 4rem;
                    box-sizing: border-box;
                }

                .hero-background {
                    position: absolute;
                    top: 0;
                    left: 0;
                    width: 100%;
                    height: 100%;
                    background-repeat: no-repeat;
                    background-position: center;
                    background-size: contain;
                }

                .section {
                    padding: 4rem 1rem;
                    text-align: center;
                }

                .section h2 {
                    font-size: 2.25rem;
                    font-weight: 600;
                    margin: 0 0 1.5rem;
                }

                .lead {
                    font-size: 1.125rem;
                    margin-bottom: 2.5rem;
                }

                .sponsors {
                    background: rgba(255, 255, 255, 0.05);
                }

                .sponsor-row {
                    display: flex;
                    justify-content: center;
                    flex-wrap: wrap;
                    gap: 1.5rem;
                }

                .sponsor-logo {
                    width: 8rem;
                    height: 4rem;
                    object-fit: contain;
                    background: #fff;
                    border-radius: 0.5rem;
                    padding: 0.5rem;
                    box-sizing: border-box;
                }

                .event-card {
                    max-width: 36rem;
                    margin: 0 auto;
                    background: #fff;
                    color: #000;
                    padding: 1.5rem;
                    border-radius: 1rem;
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.4);
                }

                .event-card h3 {
                    margin: 0 0 0.5rem;
                    font-size: 1.25rem;
                }

                .gallery {
                    background: #111827;
                }

                .media-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1rem;
                    margin-bottom: 1.5rem;
                }

                .media-tile {
                    width: 100%;
                    height: 12rem;
                    object-fit: cover;
                    border-radius: 0.75rem;
                }

                .contact {
                    background: #000;
                }

                .contact-email {
                    color: #facc15;
                    font-size: 1.25rem;
                }

                .site-footer {
                    background: #030712;
                    color: #9ca3af;
                    padding: 2rem 1rem;
                    text-align: center;
                    font-size: 0.875rem;
                }

                .social-links {
                    display: flex;
                    justify-content: center;
                    gap: 1rem;
                    margin-bottom: 1rem;
                }

                .social-link {
                    color: inherit;
                }

                .social-link:hover {
                    color: #fff;
                }

                .footer-note {
                    margin-top: 0.5rem;
                }

                @media (max-width: 768px) {
                    .section h2 {
                        font-size: 1.875rem;
                    }

                    .media-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }

                    .site-nav {
                        justify-content: flex-start;
                    }

                    .site-nav-links {
                        right: 1rem;
                        gap: 1rem;
                        font-size: 1rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
