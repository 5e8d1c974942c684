use std::cell::RefCell;
use std::rc::Rc;

use log::error;
use web_sys::Event;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::dom::{self, DomProbe, FrameLoop};
use crate::hooks::{use_reveal, use_tween};
use crate::motion::ease::Ease;
use crate::motion::props::{Layer, PropertySet};
use crate::motion::schedule::{AnimationStage, Target};
use crate::motion::sequencer::TriggerBinding;
use crate::motion::tracker::{Section, SectionTracker, Subscription};
use crate::motion::visibility::ScrollCoalescer;

#[derive(Properties, PartialEq)]
pub struct NavigationProps {
    pub brand: String,
    pub sections: Vec<Section>,
}

struct ScrollWatch {
    tracker: SectionTracker,
    scroll: ScrollCoalescer,
    probe: Option<DomProbe>,
}

impl ScrollWatch {
    fn evaluate(&self, scroll_y: f64) {
        if let Some(probe) = self.probe.as_ref() {
            self.tracker.on_scroll(scroll_y, probe);
        }
    }
}

struct TrackerHandle {
    watch: Rc<RefCell<ScrollWatch>>,
    frames: FrameLoop,
    _subscription: Subscription,
}

#[function_component(Navigation)]
pub fn navigation(props: &NavigationProps) -> Html {
    let nav_ref = use_node_ref();
    let drawer_ref = use_node_ref();
    let menu_open = use_state(|| false);
    let active = use_state(|| {
        props
            .sections
            .first()
            .map(|s| s.id.clone())
            .unwrap_or_default()
    });
    let handle = use_mut_ref(|| None::<TrackerHandle>);

    use_reveal(
        &nav_ref,
        TriggerBinding::on_mount().delay(config::INTRO_DELAY_SECS),
        vec![AnimationStage::reveal(
            Target::Root,
            PropertySet::new().opacity(0.0).y(-20.0),
            0.8,
        )],
    );

    let drawer = use_tween(
        &drawer_ref,
        Layer::Hover,
        PropertySet::new().x(config::MOBILE_DRAWER_WIDTH),
    );

    {
        let handle = handle.clone();
        let active = active.clone();
        let sections = props.sections.clone();
        use_effect_with_deps(
            move |_| {
                match SectionTracker::new(sections, config::ACTIVATION_MARGIN) {
                    Ok(tracker) => {
                        let subscription = tracker
                            .active()
                            .subscribe(move |id| active.set(id.to_string()));
                        let watch = Rc::new(RefCell::new(ScrollWatch {
                            tracker,
                            scroll: ScrollCoalescer::default(),
                            probe: DomProbe::new(),
                        }));
                        watch.borrow().evaluate(dom::scroll_y());
                        let frames = {
                            let watch = watch.clone();
                            FrameLoop::new(move |_| {
                                let mut watch = watch.borrow_mut();
                                if let Some(y) = watch.scroll.take() {
                                    watch.evaluate(y);
                                }
                                false
                            })
                        };
                        *handle.borrow_mut() = Some(TrackerHandle {
                            watch,
                            frames,
                            _subscription: subscription,
                        });
                    }
                    Err(e) => error!("Section tracking disabled: {}", e),
                }
                move || {
                    handle.borrow_mut().take();
                }
            },
            (),
        );
    }

    {
        let handle = handle.clone();
        use_event_with_window("scroll", move |_: Event| {
            if let Some(h) = handle.borrow().as_ref() {
                if h.watch.borrow_mut().scroll.offer(dom::scroll_y()) {
                    h.frames.wake();
                }
            }
        });
    }

    let set_menu = {
        let menu_open = menu_open.clone();
        let drawer = drawer.clone();
        Callback::from(move |open: bool| {
            let x = if open { 0.0 } else { config::MOBILE_DRAWER_WIDTH };
            drawer.to(PropertySet::new().x(x), config::DRAWER_SLIDE_SECS, Ease::Power2Out);
            menu_open.set(open);
        })
    };

    let toggle_menu = {
        let set_menu = set_menu.clone();
        let open = *menu_open;
        Callback::from(move |_: MouseEvent| set_menu.emit(!open))
    };

    let close_menu = {
        let set_menu = set_menu.clone();
        Callback::from(move |_: MouseEvent| set_menu.emit(false))
    };

    let nav_click = |index: usize, section: &Section| {
        let anchor = section.anchor.clone();
        let set_menu = set_menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            dom::scroll_to_anchor(&anchor, index == 0);
            set_menu.emit(false);
        })
    };

    let item_class = |section: &Section, base: &'static str| {
        classes!(base, (*active == section.id).then_some("active"))
    };

    html! {
        <>
            <style>
                {r#"
                    .site-nav {
                        position: sticky;
                        top: 0;
                        z-index: 40;
                        padding: 1.5rem 4rem;
                    }
                    .site-nav .nav-bar {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        padding: 1rem 1.5rem;
                        border-radius: 1rem;
                    }
                    .site-nav .nav-logo {
                        font-size: 1.5rem;
                        font-weight: 700;
                        cursor: pointer;
                    }
                    .site-nav .nav-items {
                        display: flex;
                        gap: 2rem;
                    }
                    .nav-item {
                        position: relative;
                        padding: 0.5rem 1rem;
                        border-radius: 0.5rem;
                        color: var(--muted-foreground);
                        background: none;
                        border: none;
                        cursor: pointer;
                        transition: color 0.3s, transform 0.3s;
                    }
                    .nav-item:hover {
                        color: var(--foreground);
                        transform: scale(1.05);
                    }
                    .nav-item.active {
                        color: var(--primary);
                    }
                    .site-nav .nav-item.active::after {
                        content: "";
                        position: absolute;
                        left: 0;
                        right: 0;
                        bottom: 0;
                        height: 2px;
                        background: var(--gradient-primary);
                    }
                    .burger-menu {
                        display: none;
                        padding: 0.5rem;
                        border-radius: 0.5rem;
                    }
                    .mobile-drawer {
                        position: fixed;
                        top: 0;
                        right: 0;
                        bottom: 0;
                        width: 20rem;
                        z-index: 50;
                        padding: 5rem 2rem 2rem;
                        --hover-x: 320px;
                    }
                    .mobile-drawer .nav-item {
                        display: block;
                        width: 100%;
                        text-align: left;
                        margin-bottom: 1.5rem;
                    }
                    .mobile-drawer .nav-item.active {
                        background: rgba(0, 255, 255, 0.1);
                    }
                    .drawer-overlay {
                        position: fixed;
                        inset: 0;
                        z-index: 40;
                        background: rgba(0, 0, 0, 0.8);
                        backdrop-filter: blur(4px);
                    }
                    @media (max-width: 768px) {
                        .site-nav { padding: 1.5rem 2rem; }
                        .site-nav .nav-items { display: none; }
                        .burger-menu { display: block; }
                    }
                    @media (min-width: 769px) {
                        .mobile-drawer, .drawer-overlay { display: none; }
                    }
                "#}
            </style>
            <nav ref={nav_ref} class="site-nav motion">
                <div class="nav-bar glass-card">
                    <div class="nav-logo text-gradient">{ &props.brand }</div>
                    <div class="nav-items">
                        { for props.sections.iter().enumerate().map(|(i, section)| html! {
                            <button
                                key={section.id.clone()}
                                class={item_class(section, "nav-item")}
                                onclick={nav_click(i, section)}
                            >
                                { &section.label }
                            </button>
                        }) }
                    </div>
                    <button class="burger-menu glass" onclick={toggle_menu}>
                        { if *menu_open { "✕" } else { "☰" } }
                    </button>
                </div>
            </nav>
            <div ref={drawer_ref} class="mobile-drawer glass-card motion">
                { for props.sections.iter().enumerate().map(|(i, section)| html! {
                    <button
                        key={section.id.clone()}
                        class={item_class(section, "nav-item")}
                        onclick={nav_click(i, section)}
                    >
                        { &section.label }
                    </button>
                }) }
            </div>
            if *menu_open {
                <div class="drawer-overlay" onclick={close_menu}></div>
            }
        </>
    }
}
