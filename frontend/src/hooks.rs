//! Yew hooks that drive the motion core from components.

use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use web_sys::{Element, Event, HtmlElement};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::dom::{self, FrameLoop};
use crate::motion::cancel::MotionRegistry;
use crate::motion::ease::Ease;
use crate::motion::props::{Layer, PropertySet};
use crate::motion::schedule::AnimationStage;
use crate::motion::sequencer::{RevealSequencer, Trigger, TriggerBinding};
use crate::motion::tween::{Animated, HoverTween, Tween};
use crate::motion::visibility::{ScrollCoalescer, Threshold, VisibilityEdge};

/// Shared by everything animated on the portfolio page.
#[derive(Clone, Debug, PartialEq)]
pub struct MotionContext {
    pub registry: MotionRegistry,
    /// Bumped whenever viewport geometry should be re-read.
    pub refresh_epoch: u32,
}

struct RevealDriver {
    root: NodeRef,
    sequencer: RevealSequencer,
    edge: VisibilityEdge,
    scroll: ScrollCoalescer,
}

impl RevealDriver {
    fn threshold(&self) -> Option<Threshold> {
        match &self.sequencer.binding().trigger {
            Trigger::Viewport(threshold) => Some(*threshold),
            Trigger::Mount => None,
        }
    }

    fn check_visibility(&mut self) {
        let Some(threshold) = self.threshold() else {
            return;
        };
        let entered = self.root.cast::<Element>().map(|el| {
            threshold.is_entered(dom::viewport_rect(&el), dom::viewport_height())
        });
        if let Some(crossing) = self.edge.observe(entered) {
            self.sequencer.apply(crossing);
        }
    }

    fn paint(&self) {
        if let Some(root) = self.root.cast::<Element>() {
            dom::paint(&root, self.sequencer.values(), Layer::Reveal);
        }
    }

    fn frame(&mut self, dt: f64) -> bool {
        if self.scroll.take().is_some() {
            self.check_visibility();
        }
        if self.sequencer.tick(dt) {
            self.paint();
        }
        self.sequencer.is_animating()
    }
}

struct RevealHandle {
    driver: Rc<RefCell<RevealDriver>>,
    frames: FrameLoop,
}

impl RevealHandle {
    fn wake_if_animating(&self) {
        if self.driver.borrow().sequencer.is_animating() {
            self.frames.wake();
        }
    }
}

/// Plays `stages` on the element behind `root` according to `binding`.
///
/// The sequence is built once, on mount; later values of `binding` and
/// `stages` are ignored. Viewport-bound sequences re-check visibility on
/// scroll (at most once per frame) and whenever the page refresh epoch moves.
/// If the stages are invalid the element is left in its resting state.
#[hook]
pub fn use_reveal(root: &NodeRef, binding: TriggerBinding, stages: Vec<AnimationStage>) {
    let ctx = use_context::<MotionContext>();
    let handle = use_mut_ref(|| None::<RevealHandle>);

    {
        let handle = handle.clone();
        let root = root.clone();
        let registry = ctx.as_ref().map(|c| c.registry.clone());
        use_effect_with_deps(
            move |_| {
                match RevealSequencer::bind(binding, stages) {
                    Ok(sequencer) => {
                        if let Some(registry) = registry {
                            registry.register(sequencer.cancel_token());
                        }
                        let driver = Rc::new(RefCell::new(RevealDriver {
                            root,
                            sequencer,
                            edge: VisibilityEdge::default(),
                            scroll: ScrollCoalescer::default(),
                        }));
                        let frames = {
                            let driver = driver.clone();
                            FrameLoop::new(move |dt| driver.borrow_mut().frame(dt))
                        };
                        {
                            let mut d = driver.borrow_mut();
                            d.paint();
                            if d.threshold().is_none() {
                                d.sequencer.start();
                            } else {
                                d.check_visibility();
                            }
                        }
                        let h = RevealHandle { driver, frames };
                        h.wake_if_animating();
                        *handle.borrow_mut() = Some(h);
                    }
                    Err(e) => warn!("reveal sequence skipped: {}", e),
                }
                move || {
                    if let Some(h) = handle.borrow_mut().take() {
                        h.driver.borrow_mut().sequencer.cancel();
                    }
                }
            },
            (),
        );
    }

    {
        let handle = handle.clone();
        use_event_with_window("scroll", move |_: Event| {
            if let Some(h) = handle.borrow().as_ref() {
                let offered = h.driver.borrow_mut().scroll.offer(dom::scroll_y());
                if offered && h.driver.borrow().threshold().is_some() {
                    h.frames.wake();
                }
            }
        });
    }

    {
        let epoch = ctx.map(|c| c.refresh_epoch).unwrap_or_default();
        use_effect_with_deps(
            move |_| {
                if let Some(h) = handle.borrow().as_ref() {
                    h.driver.borrow_mut().check_visibility();
                    h.wake_if_animating();
                }
                || ()
            },
            epoch,
        );
    }
}

/// Drives any [`Animated`] value onto one element's style layer.
struct TweenDriver<T: Animated> {
    anim: Rc<RefCell<T>>,
    frames: FrameLoop,
}

impl<T: Animated + 'static> TweenDriver<T> {
    fn new(node: NodeRef, layer: Layer, anim: T) -> Self {
        if let Some(el) = node.cast::<HtmlElement>() {
            dom::apply(&el, anim.current(), layer);
        }
        let anim = Rc::new(RefCell::new(anim));
        let frames = {
            let anim = anim.clone();
            FrameLoop::new(move |dt| {
                let mut anim = anim.borrow_mut();
                if anim.tick(dt) {
                    if let Some(el) = node.cast::<HtmlElement>() {
                        dom::apply(&el, anim.current(), layer);
                    }
                }
                anim.is_active()
            })
        };
        Self { anim, frames }
    }

    fn update(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.anim.borrow_mut());
        if self.anim.borrow().is_active() {
            self.frames.wake();
        }
    }
}

impl<T: Animated> Drop for TweenDriver<T> {
    fn drop(&mut self) {
        self.frames.cancel();
        self.anim.borrow_mut().cancel();
    }
}

#[derive(Clone, PartialEq)]
pub struct HoverHandlers {
    pub onmouseenter: Callback<MouseEvent>,
    pub onmouseleave: Callback<MouseEvent>,
}

/// Pointer enter/leave tween on the hover layer. Only transform properties
/// are accepted; anything else is logged and the element stays still.
#[hook]
pub fn use_hover(node: &NodeRef, hovered: PropertySet, duration: f64) -> HoverHandlers {
    let driver = use_mut_ref(|| None::<TweenDriver<HoverTween>>);

    {
        let driver = driver.clone();
        let node = node.clone();
        use_effect_with_deps(
            move |_| {
                match HoverTween::new(hovered, duration) {
                    Ok(tween) => {
                        *driver.borrow_mut() = Some(TweenDriver::new(node, Layer::Hover, tween));
                    }
                    Err(e) => warn!("hover disabled: {}", e),
                }
                move || {
                    driver.borrow_mut().take();
                }
            },
            (),
        );
    }

    let onmouseenter = {
        let driver = driver.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(d) = driver.borrow().as_ref() {
                d.update(HoverTween::enter);
            }
        })
    };
    let onmouseleave = Callback::from(move |_: MouseEvent| {
        if let Some(d) = driver.borrow().as_ref() {
            d.update(HoverTween::leave);
        }
    });

    HoverHandlers {
        onmouseenter,
        onmouseleave,
    }
}

#[derive(Clone)]
pub struct TweenHandle {
    driver: Rc<RefCell<Option<TweenDriver<Tween>>>>,
}

impl TweenHandle {
    pub fn to(&self, target: PropertySet, duration: f64, ease: Ease) {
        if let Some(d) = self.driver.borrow().as_ref() {
            d.update(|t| t.to(target, duration, ease));
        }
    }

    pub fn pulse(&self, target: PropertySet, duration: f64, times: u32) {
        if let Some(d) = self.driver.borrow().as_ref() {
            d.update(|t| t.pulse(target, duration, times));
        }
    }
}

/// An on-demand tween that starts at `initial` and moves when told to.
#[hook]
pub fn use_tween(node: &NodeRef, layer: Layer, initial: PropertySet) -> TweenHandle {
    let driver = use_mut_ref(|| None::<TweenDriver<Tween>>);

    {
        let driver = driver.clone();
        let node = node.clone();
        use_effect_with_deps(
            move |_| {
                *driver.borrow_mut() = Some(TweenDriver::new(node, layer, Tween::new(initial)));
                move || {
                    driver.borrow_mut().take();
                }
            },
            (),
        );
    }

    TweenHandle { driver }
}

/// Starts `tween` on mount and keeps it running until unmount.
#[hook]
pub fn use_looping(node: &NodeRef, tween: Tween) {
    let node = node.clone();
    use_effect_with_deps(
        move |_| {
            let driver = TweenDriver::new(node, Layer::Hover, tween);
            driver.frames.wake();
            move || drop(driver)
        },
        (),
    );
}
