use crate::audio::AmbiencePlayer;
use crate::dom;
use ember_core::PointerTracker;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Primary contact point of a pointer or touch event, client coordinates.
fn contact_point(ev: &web::Event) -> Option<Vec2> {
    if let Some(te) = ev.dyn_ref::<web::TouchEvent>() {
        return te
            .touches()
            .get(0)
            .map(|t| Vec2::new(t.client_x() as f32, t.client_y() as f32));
    }
    ev.dyn_ref::<web::MouseEvent>()
        .map(|me| Vec2::new(me.client_x() as f32, me.client_y() as f32))
}

/// Throttled pointer tracking for both the canvas glow and the parallax.
pub fn wire_pointer_tracking(pointer: Rc<RefCell<PointerTracker>>) {
    let Some(window) = web::window() else {
        return;
    };
    let target: &web::EventTarget = window.as_ref();
    for event in ["pointermove", "touchmove"] {
        let pointer = pointer.clone();
        dom::add_passive_listener(target, event, move |ev: web::Event| {
            let (w, h) = dom::viewport_size();
            pointer
                .borrow_mut()
                .on_move(dom::now_ms(), contact_point(&ev), Vec2::new(w, h));
        });
    }
}

/// The first click or pointer-down anywhere starts the ambience track.
pub fn wire_gestures(player: AmbiencePlayer) {
    let Some(window) = web::window() else {
        return;
    };
    let target: &web::EventTarget = window.as_ref();
    for event in ["click", "pointerdown"] {
        let player = player.clone();
        dom::add_passive_listener(target, event, move |_ev: web::Event| {
            player.on_gesture();
        });
    }
}
