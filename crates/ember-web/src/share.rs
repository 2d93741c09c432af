//! Copy-to-clipboard, vCard download and social-link focus toasts.

use crate::constants::*;
use crate::dom;
use crate::toast::Toast;
use ember_core::vcard::Contact;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// `navigator.clipboard.writeText`, looked up dynamically so browsers
/// without the async clipboard simply report failure.
async fn write_clipboard(text: &str) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let navigator: JsValue = window.navigator().into();
    let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    if clipboard.is_undefined() || clipboard.is_null() {
        anyhow::bail!("clipboard API unavailable");
    }
    let write_text = js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<js_sys::Function>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let promise = write_text
        .call1(&clipboard, &JsValue::from_str(text))
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<js_sys::Promise>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(())
}

pub fn wire_copy_button(document: &web::Document, toast: Toast) {
    let Some(el) = document.get_element_by_id(COPY_BUTTON_ID) else {
        return;
    };
    let text = el
        .get_attribute(COPY_ATTR)
        .or_else(|| el.text_content())
        .unwrap_or_default();
    dom::add_click_listener(document, COPY_BUTTON_ID, move || {
        let text = text.clone();
        let toast = toast.clone();
        spawn_local(async move {
            match write_clipboard(&text).await {
                Ok(()) => toast.show("Copied to clipboard", None),
                Err(e) => {
                    log::warn!("[share] copy failed: {:?}", e);
                    toast.show("Copy failed", None);
                }
            }
        });
    });
}

fn contact_from(el: &web::Element) -> Contact {
    let attr = |name: &str, fallback: &str| {
        el.get_attribute(name)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| fallback.to_string())
    };
    Contact {
        given_name: attr("data-given-name", VCARD_GIVEN_NAME),
        family_name: attr("data-family-name", VCARD_FAMILY_NAME),
        title: Some(attr("data-title", VCARD_TITLE)),
        org: el.get_attribute("data-org"),
        email: Some(attr("data-email", VCARD_EMAIL)),
        url: Some(attr("data-url", VCARD_URL)),
    }
}

fn download_text(
    document: &web::Document,
    file_name: &str,
    mime: &str,
    body: &str,
) -> anyhow::Result<()> {
    let parts = js_sys::Array::of1(&JsValue::from_str(body));
    let opts = web::BlobPropertyBag::new();
    opts.set_type(mime);
    let blob = web::Blob::new_with_str_sequence_and_options(&parts, &opts)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let url = web::Url::create_object_url_with_blob(&blob).map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let anchor = document
        .create_element("a")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlAnchorElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    // The download reads the URL asynchronously; revoke it a little later.
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let revoke = Closure::once_into_js(move || {
        let _ = web::Url::revoke_object_url(&url);
    });
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            revoke.unchecked_ref(),
            OBJECT_URL_REVOKE_MS,
        )
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(())
}

pub fn wire_vcard_button(document: &web::Document, toast: Toast) {
    let Some(el) = document.get_element_by_id(VCARD_BUTTON_ID) else {
        return;
    };
    let contact = contact_from(&el);
    let doc = document.clone();
    dom::add_click_listener(document, VCARD_BUTTON_ID, move || {
        let card = contact.to_vcard();
        match download_text(&doc, &contact.file_name(), "text/vcard", &card) {
            Ok(()) => toast.show("Contact card downloaded", None),
            Err(e) => {
                log::warn!("[share] vCard download failed: {:?}", e);
                toast.show("Download failed", None);
            }
        }
    });
}

/// Focusing a social link announces its label.
pub fn wire_social_focus(document: &web::Document, toast: Toast) {
    let Ok(list) = document.query_selector_all(SOCIAL_SELECTOR) else {
        return;
    };
    for i in 0..list.length() {
        let Some(el) = list.get(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
            continue;
        };
        let Some(label) = el.get_attribute("aria-label") else {
            continue;
        };
        let toast = toast.clone();
        let closure = Closure::wrap(Box::new(move || {
            toast.show(&label, None);
        }) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("focus", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
