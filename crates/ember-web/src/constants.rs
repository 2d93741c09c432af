// DOM hooks the page markup provides. All are optional except the canvas,
// and even a missing canvas only disables the backdrop.

pub const CANVAS_ID: &str = "bgCanvas";
pub const PRESET_ATTR: &str = "data-preset";

pub const FOG_A_SELECTOR: &str = ".fog-a";
pub const FOG_B_SELECTOR: &str = ".fog-b";
pub const LOGO_SELECTOR: &str = ".logo";

pub const TOAST_ID: &str = "toast";
pub const TOAST_VISIBLE_CLASS: &str = "show";

pub const AMBIENCE_ID: &str = "ambience";

pub const MONOLOGUE_ID: &str = "monologue";
pub const GLITCH_SELECTOR: &str = ".glitch";
pub const SOCIAL_SELECTOR: &str = ".social";

pub const COPY_BUTTON_ID: &str = "copy-handle";
pub const COPY_ATTR: &str = "data-copy";
pub const VCARD_BUTTON_ID: &str = "download-vcard";
pub const OBJECT_URL_REVOKE_MS: i32 = 1500;

// Card offered when the download button carries no data-* overrides.
pub const VCARD_GIVEN_NAME: &str = "Ember";
pub const VCARD_FAMILY_NAME: &str = "Studio";
pub const VCARD_TITLE: &str = "Creative Direction";
pub const VCARD_EMAIL: &str = "hello@ember.studio";
pub const VCARD_URL: &str = "https://ember.studio";
