use crate::canvas::CanvasPainter;
use crate::dom;
use ember_core::{PointerTracker, Scene};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// A self-rescheduling `requestAnimationFrame` task.
///
/// The step closure returns whether it wants another frame; once it says no
/// the task stays idle until `arm` is called again. At most one frame is ever
/// pending.
#[derive(Clone)]
pub struct FrameLoop {
    tick: TickSlot,
    armed: Rc<Cell<bool>>,
}

impl FrameLoop {
    pub fn new(mut step: impl FnMut(f64) -> bool + 'static) -> Self {
        let tick: TickSlot = Rc::new(RefCell::new(None));
        let armed = Rc::new(Cell::new(false));
        let tick_clone = tick.clone();
        let armed_clone = armed.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
            armed_clone.set(false);
            if step(ts) {
                request(&tick_clone, &armed_clone);
            }
        }) as Box<dyn FnMut(f64)>));
        Self { tick, armed }
    }

    pub fn arm(&self) {
        request(&self.tick, &self.armed);
    }
}

fn request(tick: &TickSlot, armed: &Cell<bool>) {
    if armed.get() {
        return;
    }
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        if w.request_animation_frame(cb.as_ref().unchecked_ref()).is_ok() {
            armed.set(true);
        }
    }
}

pub struct FrameContext {
    pub scene: Rc<RefCell<Scene>>,
    pub pointer: Rc<RefCell<PointerTracker>>,
    pub painter: CanvasPainter,
}

impl FrameContext {
    pub fn frame(&mut self, now_ms: f64) -> bool {
        let pointer = self.pointer.borrow().state();
        self.scene
            .borrow_mut()
            .frame(now_ms, pointer, &mut self.painter)
    }
}

pub fn start_loop(frame_ctx: FrameContext) -> FrameLoop {
    let mut frame_ctx = frame_ctx;
    let frame_loop = FrameLoop::new(move |ts| frame_ctx.frame(ts));
    frame_loop.arm();
    frame_loop
}

/// Keep the scene sized to the viewport and paused while the tab is hidden.
pub fn wire_canvas_lifecycle(
    canvas: &web::HtmlCanvasElement,
    scene: Rc<RefCell<Scene>>,
    frame_loop: FrameLoop,
) {
    let Some(window) = web::window() else {
        return;
    };

    let canvas_resize = canvas.clone();
    let scene_resize = scene.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        let (w, h) = dom::sync_canvas_backing_size(&canvas_resize);
        scene_resize.borrow_mut().resize(w, h);
    }) as Box<dyn FnMut()>);
    let _ = window.add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    resize_closure.forget();

    let Some(document) = window.document() else {
        return;
    };
    let canvas_vis = canvas.clone();
    let doc_vis = document.clone();
    let visibility_closure = Closure::wrap(Box::new(move || {
        if doc_vis.hidden() {
            scene.borrow_mut().pause();
            return;
        }
        let (w, h) = dom::sync_canvas_backing_size(&canvas_vis);
        if scene.borrow_mut().resume(w, h) {
            frame_loop.arm();
        }
    }) as Box<dyn FnMut()>);
    let _ = document.add_event_listener_with_callback(
        "visibilitychange",
        visibility_closure.as_ref().unchecked_ref(),
    );
    visibility_closure.forget();
}
