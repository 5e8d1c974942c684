use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{error, info};
use web_sys::Element;
use yew::prelude::*;

use crate::config;
use crate::dom::{self, FrameLoop};
use crate::motion::load_gate::{GatePhase, LoadGate};
use crate::motion::props::Layer;

#[derive(Properties, PartialEq)]
pub struct LoadingScreenProps {
    pub brand: String,
    pub caption: String,
    pub on_complete: Callback<()>,
}

struct GateDriver {
    gate: Rc<RefCell<LoadGate>>,
    _frames: FrameLoop,
    _pending: Rc<RefCell<Option<Timeout>>>,
}

#[function_component(LoadingScreen)]
pub fn loading_screen(props: &LoadingScreenProps) -> Html {
    let root = use_node_ref();
    let driver = use_mut_ref(|| None::<GateDriver>);

    {
        let root = root.clone();
        let on_complete = props.on_complete.clone();
        let driver = driver.clone();
        use_effect_with_deps(
            move |_| {
                match LoadGate::new(config::LOADING) {
                    Ok(gate) => {
                        let gate = Rc::new(RefCell::new(gate));
                        let pending = Rc::new(RefCell::new(None::<Timeout>));
                        if let Some(el) = root.cast::<Element>() {
                            dom::paint(&el, gate.borrow().values(), Layer::Reveal);
                        }
                        let frames = {
                            let gate = gate.clone();
                            let pending = pending.clone();
                            FrameLoop::new(move |dt| {
                                let mut gate = gate.borrow_mut();
                                let phase = gate.tick(dt);
                                if let Some(el) = root.cast::<Element>() {
                                    dom::paint(&el, gate.values(), Layer::Reveal);
                                    if let Ok(Some(track)) = el.query_selector(".loader-track") {
                                        let _ = track.set_attribute(
                                            "aria-valuenow",
                                            &format!("{:.0}", gate.progress()),
                                        );
                                    }
                                }
                                if phase == Some(GatePhase::Ready) {
                                    info!("Loading finished");
                                    let on_complete = on_complete.clone();
                                    // Leave the frame callback before the parent swaps us out.
                                    *pending.borrow_mut() =
                                        Some(Timeout::new(0, move || on_complete.emit(())));
                                }
                                gate.is_running()
                            })
                        };
                        frames.wake();
                        *driver.borrow_mut() = Some(GateDriver {
                            gate,
                            _frames: frames,
                            _pending: pending,
                        });
                    }
                    Err(e) => {
                        error!("Loading timeline unavailable, skipping: {}", e);
                        on_complete.emit(());
                    }
                }
                move || {
                    if let Some(d) = driver.borrow_mut().take() {
                        d.gate.borrow_mut().cancel();
                    }
                }
            },
            (),
        );
    }

    html! {
        <div ref={root} class="loading-screen motion">
            <style>
                {r#"
                    .loading-screen {
                        position: fixed;
                        inset: 0;
                        z-index: 50;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: var(--gradient-hero);
                    }
                    .loading-screen .loader-inner {
                        text-align: center;
                    }
                    .loading-screen .loader-text {
                        margin-bottom: 2rem;
                    }
                    .loading-screen h1 {
                        font-size: 3.75rem;
                        font-weight: 700;
                        margin-bottom: 1rem;
                    }
                    .loading-screen .loader-track {
                        width: 20rem;
                        height: 0.25rem;
                        border-radius: 9999px;
                        background: var(--muted);
                        overflow: hidden;
                    }
                    .loading-screen .loader-bar {
                        width: 0%;
                        height: 100%;
                        border-radius: 9999px;
                        background: var(--gradient-primary);
                        box-shadow: var(--shadow-glow);
                    }
                "#}
            </style>
            <div class="loader-inner">
                <div class="loader-text motion">
                    <h1 class="text-gradient">{ &props.brand }</h1>
                    <p class="muted">{ &props.caption }</p>
                </div>
                <div class="loader-track" role="progressbar" aria-valuemin="0" aria-valuemax="100" aria-valuenow="0">
                    <div class="loader-bar"></div>
                </div>
            </div>
        </div>
    }
}
