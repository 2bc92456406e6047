use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"Page not found"}</h1>
            <Link<Route> to={Route::Home} classes="accent-link">
                {"Back to the tournament"}
            </Link<Route>>
            <style>
                {r#"
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    align-items: center;
                    gap: 1rem;
                }
                "#}
            </style>
        </div>
    }
}
