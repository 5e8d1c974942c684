//! Binds the DOM-free motion core to the browser: style writes, layout reads,
//! smooth scrolling and the animation frame loop.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::config::MAX_FRAME_DELTA_SECS;
use crate::motion::props::{Layer, PropertySet};
use crate::motion::schedule::Target;
use crate::motion::visibility::{LayoutProbe, OffsetBox, ViewportRect};

/// Composes the reveal and hover layers into real CSS. The custom properties
/// are registered as non-inherited so nested animated elements do not pick up
/// their parent's values.
pub const MOTION_CSS: &str = r#"
@property --reveal-opacity { syntax: '<number>'; inherits: false; initial-value: 1; }
@property --reveal-blur { syntax: '<length>'; inherits: false; initial-value: 0px; }
@property --reveal-x { syntax: '<length>'; inherits: false; initial-value: 0px; }
@property --reveal-y { syntax: '<length>'; inherits: false; initial-value: 0px; }
@property --reveal-scale { syntax: '<number>'; inherits: false; initial-value: 1; }
@property --reveal-rotate { syntax: '<angle>'; inherits: false; initial-value: 0deg; }
@property --hover-x { syntax: '<length>'; inherits: false; initial-value: 0px; }
@property --hover-y { syntax: '<length>'; inherits: false; initial-value: 0px; }
@property --hover-scale { syntax: '<number>'; inherits: false; initial-value: 1; }
@property --hover-rotate { syntax: '<angle>'; inherits: false; initial-value: 0deg; }

.motion {
    opacity: var(--reveal-opacity, 1);
    filter: blur(var(--reveal-blur, 0px));
    transform:
        translate(
            calc(var(--reveal-x, 0px) + var(--hover-x, 0px)),
            calc(var(--reveal-y, 0px) + var(--hover-y, 0px))
        )
        scale(calc(var(--reveal-scale, 1) * var(--hover-scale, 1)))
        rotate(calc(var(--reveal-rotate, 0deg) + var(--hover-rotate, 0deg)));
    will-change: transform, opacity, filter;
}
"#;

/// Writes `props` to `el` as custom properties of `layer`.
pub fn apply(el: &HtmlElement, props: &PropertySet, layer: Layer) {
    let style = el.style();
    for (name, value) in props.css_declarations(layer) {
        let _ = style.set_property(&name, &value);
    }
}

pub fn resolve_target(root: &Element, target: &Target) -> Option<HtmlElement> {
    let el = match target {
        Target::Root => root.clone(),
        Target::Select(selector) => root.query_selector(selector).ok().flatten()?,
    };
    el.dyn_into::<HtmlElement>().ok()
}

/// Paints every target of a timeline. Targets that are not mounted are skipped.
pub fn paint<'a>(
    root: &Element,
    values: impl IntoIterator<Item = (&'a Target, &'a PropertySet)>,
    layer: Layer,
) {
    for (target, props) in values {
        if let Some(el) = resolve_target(root, target) {
            apply(&el, props, layer);
        }
    }
}

pub fn viewport_rect(el: &Element) -> ViewportRect {
    let rect = el.get_bounding_client_rect();
    ViewportRect {
        top: rect.top(),
        height: rect.height(),
    }
}

pub fn viewport_height() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Reads document offsets by element id.
pub struct DomProbe {
    document: Document,
}

impl DomProbe {
    pub fn new() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self { document })
    }
}

impl LayoutProbe for DomProbe {
    fn offset_box(&self, anchor: &str) -> Option<OffsetBox> {
        let el = self
            .document
            .get_element_by_id(anchor)?
            .dyn_into::<HtmlElement>()
            .ok()?;
        Some(OffsetBox {
            top: el.offset_top() as f64,
            height: el.offset_height() as f64,
        })
    }
}

/// Smoothly scrolls the anchor into view. `to_top` scrolls to the start of
/// the document instead.
pub fn scroll_to_anchor(anchor: &str, to_top: bool) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let target: Option<Element> = if to_top {
        document.body().map(Into::into)
    } else {
        document.get_element_by_id(anchor)
    };
    let Some(target) = target else {
        warn!("no element to scroll to for #{}", anchor);
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

struct FrameInner {
    handle: Cell<Option<i32>>,
    last: Cell<Option<f64>>,
    callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl FrameInner {
    fn request(&self) {
        if self.handle.get().is_some() {
            return;
        }
        let Some(window) = web_sys::window() else {
            return;
        };
        let callback = self.callback.borrow();
        let Some(callback) = callback.as_ref() else {
            return;
        };
        match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            Ok(handle) => self.handle.set(Some(handle)),
            Err(e) => warn!("requestAnimationFrame failed: {:?}", e),
        }
    }

    fn cancel(&self) {
        if let Some(handle) = self.handle.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(handle);
            }
        }
        self.last.set(None);
    }
}

/// `requestAnimationFrame` loop. The callback gets the seconds since the
/// previous frame, capped at `MAX_FRAME_DELTA_SECS`, and returns whether it
/// wants another frame. An idle loop is restarted with [`FrameLoop::wake`].
/// Dropping the loop cancels the pending frame.
pub struct FrameLoop {
    inner: Rc<FrameInner>,
}

impl FrameLoop {
    pub fn new(mut on_frame: impl FnMut(f64) -> bool + 'static) -> Self {
        let inner = Rc::new(FrameInner {
            handle: Cell::new(None),
            last: Cell::new(None),
            callback: RefCell::new(None),
        });
        let weak = Rc::downgrade(&inner);
        let callback = Closure::wrap(Box::new(move |now: f64| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            inner.handle.set(None);
            let dt = match inner.last.replace(Some(now)) {
                Some(prev) => ((now - prev) / 1000.0).clamp(0.0, MAX_FRAME_DELTA_SECS),
                None => 0.0,
            };
            if on_frame(dt) {
                inner.request();
            } else if inner.handle.get().is_none() {
                inner.last.set(None);
            }
        }) as Box<dyn FnMut(f64)>);
        *inner.callback.borrow_mut() = Some(callback);
        Self { inner }
    }

    pub fn wake(&self) {
        self.inner.request();
    }

    pub fn cancel(&self) {
        self.inner.cancel();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.inner.cancel();
    }
}
