use crate::constants::AMBIENCE_ID;
use crate::toast::Toast;
use ember_core::{Ambience, AmbienceCommand};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Looping ambience track behind the first user gesture.
#[derive(Clone)]
pub struct AmbiencePlayer {
    audio: Option<web::HtmlAudioElement>,
    state: Rc<RefCell<Ambience>>,
}

impl AmbiencePlayer {
    pub fn find(document: &web::Document) -> Self {
        let audio = document
            .get_element_by_id(AMBIENCE_ID)
            .and_then(|el| el.dyn_into::<web::HtmlAudioElement>().ok());
        Self {
            audio,
            state: Rc::new(RefCell::new(Ambience::default())),
        }
    }

    pub fn on_gesture(&self) {
        let cmd = self.state.borrow_mut().on_gesture();
        if let Some(cmd) = cmd {
            self.run(cmd, None);
        }
    }

    pub fn toggle(&self, toast: &Toast) {
        let cmd = self.state.borrow_mut().on_toggle();
        self.run(cmd, Some(toast.clone()));
    }

    fn run(&self, cmd: AmbienceCommand, toast: Option<Toast>) {
        let Some(audio) = &self.audio else {
            return;
        };
        match cmd {
            AmbienceCommand::Pause => {
                let _ = audio.pause();
                if let Some(t) = toast {
                    t.show("Ambience off", None);
                }
            }
            AmbienceCommand::Play { volume } => {
                audio.set_volume(volume);
                audio.set_loop(true);
                let promise = match audio.play() {
                    Ok(p) => p,
                    Err(e) => {
                        log::debug!("[ambience] play() threw: {:?}", e);
                        self.state.borrow_mut().on_play_result(false);
                        return;
                    }
                };
                let state = self.state.clone();
                spawn_local(async move {
                    let ok = JsFuture::from(promise).await.is_ok();
                    if !ok {
                        // Autoplay policy or missing media; stay silent.
                        log::debug!("[ambience] playback rejected");
                    }
                    state.borrow_mut().on_play_result(ok);
                    if let (true, Some(t)) = (ok, toast) {
                        t.show("Ambience on", None);
                    }
                });
            }
        }
    }
}
