use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <style>
                {r#"
                    .not-found {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 1.5rem;
                        background: var(--gradient-hero);
                    }
                    .not-found h1 { font-size: 6rem; font-weight: 700; }
                    .not-found a { color: var(--primary); }
                "#}
            </style>
            <h1 class="text-gradient">{"404"}</h1>
            <p class="muted">{"This page drifted out of orbit."}</p>
            <Link<Route> to={Route::Home}>{"Back home"}</Link<Route>>
        </div>
    }
}
