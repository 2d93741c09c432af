pub mod keyboard;
pub mod pointer;

pub use keyboard::{wire_keyboard, KeyboardWiring};
pub use pointer::{wire_gestures, wire_pointer_tracking};
