use std::rc::Rc;

use log::{error, info};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod dom;
mod hooks;
mod motion {
    pub mod cancel;
    pub mod ease;
    pub mod error;
    pub mod load_gate;
    pub mod props;
    pub mod schedule;
    pub mod sequencer;
    pub mod tracker;
    pub mod tween;
    pub mod visibility;
}
mod components {
    pub mod footer;
    pub mod glowing_orb;
    pub mod loading_screen;
    pub mod navigation;
}
mod pages {
    pub mod about;
    pub mod contact;
    pub mod hero;
    pub mod not_found;
    pub mod portfolio;
    pub mod projects;
}

use content::SiteContent;
use dom::MOTION_CSS;
use pages::{not_found::NotFound, portfolio::Portfolio};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

const THEME_CSS: &str = r#"
:root {
    --background: #0a0a12;
    --foreground: #f2f4ff;
    --muted: #1d1f2e;
    --muted-foreground: #9aa0b8;
    --border: rgba(255, 255, 255, 0.12);
    --primary: #00e5ff;
    --secondary: #b44dff;
    --accent: #ff3d9a;
    --gradient-primary: linear-gradient(135deg, var(--primary), var(--secondary));
    --gradient-hero: radial-gradient(ellipse at top, #16162a 0%, var(--background) 70%);
    --shadow-glow: 0 0 40px rgba(0, 229, 255, 0.35);
    --shadow-neon: 0 0 20px rgba(180, 77, 255, 0.45);
}
* { box-sizing: border-box; margin: 0; }
html { scroll-behavior: smooth; }
body {
    font-family: 'Inter', system-ui, sans-serif;
    background: var(--background);
    color: var(--foreground);
    overflow-x: hidden;
}
button { font: inherit; color: inherit; }
.muted { color: var(--muted-foreground); }
.small { font-size: 0.875rem; margin-top: 0.5rem; }
.text-gradient {
    background: var(--gradient-primary);
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}
.glow-text { text-shadow: 0 0 12px rgba(0, 229, 255, 0.6); }
.glass {
    background: rgba(255, 255, 255, 0.04);
    border: 1px solid var(--border);
    backdrop-filter: blur(12px);
}
.glass-card {
    background: rgba(255, 255, 255, 0.06);
    border: 1px solid var(--border);
    backdrop-filter: blur(20px);
    box-shadow: 0 8px 32px rgba(0, 0, 0, 0.35);
}
.page-section { padding: 8rem 4rem; background: var(--background); }
.section-inner { max-width: 80rem; margin: 0 auto; }
.section-inner.narrow { max-width: 64rem; }
.section-title { font-size: 3rem; font-weight: 700; text-align: center; margin-bottom: 2rem; }
.section-intro { font-size: 1.25rem; text-align: center; max-width: 48rem; margin: 0 auto 5rem; }
.glowing-orb { border-radius: 9999px; opacity: 0.2; filter: blur(4px); }
.orb-sm { width: 4rem; height: 4rem; }
.orb-md { width: 6rem; height: 6rem; }
.orb-lg { width: 8rem; height: 8rem; }
.glowing-orb.tone-primary { background: var(--primary); box-shadow: var(--shadow-neon); }
.glowing-orb.tone-secondary { background: var(--secondary); box-shadow: var(--shadow-neon); }
.glowing-orb.tone-accent { background: var(--accent); box-shadow: var(--shadow-glow); }
.tone-primary { color: var(--primary); }
.tone-secondary { color: var(--secondary); }
.tone-accent { color: var(--accent); }
@media (max-width: 768px) {
    .page-section { padding: 6rem 2rem; }
}
"#;

fn switch(routes: Route, content: Rc<SiteContent>) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering portfolio");
            html! { <Portfolio {content} /> }
        }
        Route::NotFound => {
            info!("Rendering not found page");
            html! { <NotFound /> }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub content: Rc<SiteContent>,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    let content = props.content.clone();
    html! {
        <BrowserRouter>
            <style>{ THEME_CSS }</style>
            <style>{ MOTION_CSS }</style>
            <Switch<Route> render={move |route| switch(route, content.clone())} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");
    tracing_wasm::set_as_global_default_with_config(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(config::trace_level())
            .build(),
    );

    let content = match content::load() {
        Ok(content) => content,
        Err(e) => {
            error!("Site content failed to load: {}", e);
            return;
        }
    };

    info!("Starting application");
    yew::Renderer::<App>::with_props(AppProps {
        content: Rc::new(content),
    })
    .render();
}
