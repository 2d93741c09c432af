pub mod ambience;
pub mod blobs;
pub mod config;
pub mod constants;
pub mod error;
pub mod glow;
pub mod grain;
pub mod keys;
pub mod lightning;
pub mod mist;
pub mod painter;
pub mod parallax;
pub mod pointer;
pub mod scene;
pub mod sparks;
pub mod text;
pub mod toast;
pub mod vcard;

pub use ambience::*;
pub use config::*;
pub use constants::*;
pub use error::*;
pub use painter::*;
pub use parallax::*;
pub use pointer::*;
pub use scene::*;
