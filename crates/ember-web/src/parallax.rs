use crate::constants::{FOG_A_SELECTOR, FOG_B_SELECTOR, LOGO_SELECTOR};
use crate::dom;
use crate::frame::FrameLoop;
use ember_core::{LayerOffset, ParallaxConfig, PointerTracker};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Decorative layers moved by the pointer. Any of them may be missing.
pub struct Layers {
    fog_a: Option<web::HtmlElement>,
    fog_b: Option<web::HtmlElement>,
    logo: Option<web::HtmlElement>,
}

impl Layers {
    pub fn find(document: &web::Document) -> Self {
        Self {
            fog_a: dom::query_html(document, FOG_A_SELECTOR),
            fog_b: dom::query_html(document, FOG_B_SELECTOR),
            logo: dom::query_html(document, LOGO_SELECTOR),
        }
    }

    fn each(&self) -> impl Iterator<Item = &web::HtmlElement> {
        [&self.fog_a, &self.fog_b, &self.logo]
            .into_iter()
            .filter_map(|l| l.as_ref())
    }

    pub fn apply(&self, cfg: &ParallaxConfig, pointer: ember_core::PointerState) {
        let frame = cfg.frame(pointer);
        set_transform(&self.fog_a, &frame.fog_a);
        set_transform(&self.fog_b, &frame.fog_b);
        set_transform(&self.logo, &frame.logo);
    }

    /// Reduced motion: stop the fog's CSS drift and leave transforms alone.
    pub fn freeze(&self) {
        for el in self.each() {
            dom::set_style(el, "animation", "none");
        }
    }
}

fn set_transform(layer: &Option<web::HtmlElement>, offset: &LayerOffset) {
    if let Some(el) = layer {
        dom::set_style(el, "transform", &offset.to_css());
    }
}

/// Runs for the lifetime of the page, independent of the canvas loop.
pub fn start_parallax(
    layers: Layers,
    cfg: ParallaxConfig,
    pointer: Rc<RefCell<PointerTracker>>,
) -> FrameLoop {
    let mut last = None;
    let frame_loop = FrameLoop::new(move |_ts| {
        let p = pointer.borrow().state();
        if last != Some(p) {
            layers.apply(&cfg, p);
            last = Some(p);
        }
        true
    });
    frame_loop.arm();
    frame_loop
}
