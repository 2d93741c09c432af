use crate::audio::AmbiencePlayer;
use crate::dom;
use crate::toast::Toast;
use ember_core::keys::{KeyAction, KeywordListener, Keymap};
use ember_core::Scene;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct KeyboardWiring {
    /// Absent when the canvas is missing or the scene failed to start.
    pub scene: Option<Rc<RefCell<Scene>>>,
    pub ambience: AmbiencePlayer,
    pub toast: Toast,
    pub keymap: Keymap,
    pub keywords: KeywordListener,
}

fn apply_action(action: KeyAction, w: &KeyboardWiring) {
    log::info!("[keys] {}", action.describe());
    match action {
        KeyAction::ToggleAmbience => w.ambience.toggle(&w.toast),
        KeyAction::Greet => w.toast.show("Hello there. Thanks for looking closely.", Some(2600)),
        _ => {
            let Some(scene) = &w.scene else {
                return;
            };
            let message = scene.borrow_mut().apply_key(action, dom::now_ms());
            match message {
                Some(text) => w.toast.show(&text, None),
                None => w.toast.show("Animations are off", None),
            }
        }
    }
}

pub fn handle_keydown(ev: &web::KeyboardEvent, w: &mut KeyboardWiring) {
    if ev.ctrl_key() || ev.meta_key() || ev.alt_key() || dom::is_editable_target(ev) {
        return;
    }
    let key = ev.key();
    if let Some(action) = w.keywords.push(&key) {
        apply_action(action, w);
        return;
    }
    if let Some(action) = w.keymap.action_for_key(&key) {
        apply_action(action, w);
    }
}

pub fn wire_keyboard(mut wiring: KeyboardWiring) {
    if let Some(window) = web::window() {
        let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
            handle_keydown(&ev, &mut wiring);
        }) as Box<dyn FnMut(_)>);
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
