use crate::constants::{GLITCH_SELECTOR, MONOLOGUE_ID};
use crate::frame::FrameLoop;
use ember_core::text::{Glitch, Typewriter};
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::JsCast;
use web_sys as web;

struct GlitchTarget {
    el: web::Element,
    glitch: Glitch,
}

/// Typewriter on the monologue line and glitch bursts on `.glitch` labels,
/// driven by one frame task that stops once there is nothing left to do.
pub fn start_text_effects(document: &web::Document, reduced_motion: bool) -> Option<FrameLoop> {
    let mut typewriter = document.get_element_by_id(MONOLOGUE_ID).map(|el| {
        let text = el.text_content().unwrap_or_default();
        let mut tw = Typewriter::new(text.trim());
        if reduced_motion {
            tw.finish();
        }
        el.set_text_content(Some(&tw.visible()));
        (el, tw)
    });

    let mut glitches = Vec::new();
    if !reduced_motion {
        if let Ok(list) = document.query_selector_all(GLITCH_SELECTOR) {
            for i in 0..list.length() {
                let Some(el) = list.get(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
                    continue;
                };
                let text = el.text_content().unwrap_or_default();
                let _ = el.set_attribute("data-text", &text);
                glitches.push(GlitchTarget {
                    glitch: Glitch::new(&text),
                    el,
                });
            }
        }
    }

    let typing = typewriter.as_ref().is_some_and(|(_, tw)| !tw.is_done());
    if !typing && glitches.is_empty() {
        return None;
    }

    let mut rng = StdRng::from_entropy();
    let frame_loop = FrameLoop::new(move |now_ms| {
        let typed_out = match typewriter.as_mut() {
            Some((el, tw)) => {
                if tw.advance(now_ms) {
                    el.set_text_content(Some(&tw.visible()));
                }
                tw.is_done()
            }
            None => false,
        };
        if typed_out {
            typewriter = None;
        }
        for g in &mut glitches {
            if let Some(text) = g.glitch.frame(now_ms, &mut rng) {
                g.el.set_text_content(Some(&text));
            }
        }
        typewriter.is_some() || !glitches.is_empty()
    });
    frame_loop.arm();
    Some(frame_loop)
}
