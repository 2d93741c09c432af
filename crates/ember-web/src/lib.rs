#![cfg(target_arch = "wasm32")]
use ember_core::keys::{KeywordListener, Keymap};
use ember_core::{PointerTracker, Preset, Scene, SceneConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod canvas;
mod constants;
mod dom;
mod events;
mod frame;
mod parallax;
mod share;
mod text;
mod toast;

use constants::{CANVAS_ID, PRESET_ATTR};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ember-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn scene_config(canvas: &web::HtmlCanvasElement) -> SceneConfig {
    match canvas.get_attribute(PRESET_ATTR) {
        Some(name) => match name.parse::<Preset>() {
            Ok(preset) => SceneConfig::preset(preset),
            Err(e) => {
                log::warn!("[scene] {}; using default", e);
                SceneConfig::default()
            }
        },
        None => SceneConfig::default(),
    }
}

/// Canvas backdrop. Any failure here disables only the backdrop.
fn init_scene(
    document: &web::Document,
    pointer: &Rc<RefCell<PointerTracker>>,
    reduced_motion: bool,
) -> anyhow::Result<Rc<RefCell<Scene>>> {
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let config = scene_config(&canvas);
    let scene = Scene::create(config, StdRng::from_entropy(), reduced_motion)?;
    let scene = Rc::new(RefCell::new(scene));

    if reduced_motion {
        dom::set_style(&canvas, "display", "none");
        return Ok(scene);
    }

    let painter = canvas::CanvasPainter::from_canvas(&canvas)?;
    let (w, h) = dom::sync_canvas_backing_size(&canvas);
    let should_run = scene.borrow_mut().start(w, h);
    let frame_loop = frame::start_loop(frame::FrameContext {
        scene: scene.clone(),
        pointer: pointer.clone(),
        painter,
    });
    if !should_run {
        log::warn!("[scene] not started");
    }
    frame::wire_canvas_lifecycle(&canvas, scene.clone(), frame_loop);
    Ok(scene)
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let reduced_motion = dom::prefers_reduced_motion();
    let pointer = Rc::new(RefCell::new(PointerTracker::default()));
    events::wire_pointer_tracking(pointer.clone());

    let scene = match init_scene(&document, &pointer, reduced_motion) {
        Ok(scene) => Some(scene),
        Err(e) => {
            log::warn!("[scene] backdrop disabled: {:?}", e);
            None
        }
    };

    let layers = parallax::Layers::find(&document);
    if reduced_motion {
        layers.freeze();
    } else {
        let cfg = scene
            .as_ref()
            .map(|s| s.borrow().config().parallax)
            .unwrap_or_default();
        parallax::start_parallax(layers, cfg, pointer.clone());
    }

    text::start_text_effects(&document, reduced_motion);

    let toast = toast::Toast::find(&document);
    let ambience = audio::AmbiencePlayer::find(&document);
    events::wire_gestures(ambience.clone());
    events::wire_keyboard(events::KeyboardWiring {
        scene,
        ambience,
        toast: toast.clone(),
        keymap: Keymap::default(),
        keywords: KeywordListener::default(),
    });

    share::wire_copy_button(&document, toast.clone());
    share::wire_vcard_button(&document, toast.clone());
    share::wire_social_focus(&document, toast);

    log::info!("ember-web ready (reduced_motion={})", reduced_motion);
    Ok(())
}
