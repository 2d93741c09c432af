use crate::constants::{TOAST_ID, TOAST_VISIBLE_CLASS};
use crate::dom;
use ember_core::toast::ToastClock;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The page's single toast element. Cheap to clone; clones share state.
#[derive(Clone)]
pub struct Toast {
    el: Option<web::HtmlElement>,
    clock: Rc<RefCell<ToastClock>>,
    /// Timeout handle and generation of the scheduled hide.
    pending: Rc<Cell<Option<(i32, u64)>>>,
    /// One hide callback reused by every timeout.
    hide: Rc<Closure<dyn FnMut()>>,
}

impl Toast {
    pub fn find(document: &web::Document) -> Self {
        let el = document
            .get_element_by_id(TOAST_ID)
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
        if el.is_none() {
            log::debug!("[toast] no #{} element; toasts disabled", TOAST_ID);
        }
        let clock = Rc::new(RefCell::new(ToastClock::default()));
        let pending: Rc<Cell<Option<(i32, u64)>>> = Rc::new(Cell::new(None));

        let el_hide = el.clone();
        let clock_hide = clock.clone();
        let pending_hide = pending.clone();
        let hide = Closure::wrap(Box::new(move || {
            let Some((_, generation)) = pending_hide.take() else {
                return;
            };
            if clock_hide.borrow_mut().expire(generation) {
                if let Some(el) = &el_hide {
                    let _ = el.class_list().remove_1(TOAST_VISIBLE_CLASS);
                }
            }
        }) as Box<dyn FnMut()>);

        Self {
            el,
            clock,
            pending,
            hide: Rc::new(hide),
        }
    }

    pub fn show(&self, text: &str, duration_ms: Option<u32>) {
        let (Some(el), Some(window)) = (&self.el, web::window()) else {
            return;
        };
        el.set_text_content(Some(text));
        let _ = el.class_list().add_1(TOAST_VISIBLE_CLASS);

        let ticket = self.clock.borrow_mut().show(dom::now_ms(), duration_ms);
        if let Some((handle, _)) = self.pending.take() {
            window.clear_timeout_with_handle(handle);
        }

        let callback: &js_sys::Function = (*self.hide).as_ref().unchecked_ref();
        match window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback, ticket.duration_ms as i32)
        {
            Ok(handle) => self.pending.set(Some((handle, ticket.generation))),
            Err(e) => log::warn!("[toast] setTimeout failed: {:?}", e),
        }
    }
}
