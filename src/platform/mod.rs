//! Output directory layout
//!
//! Decides where each variant's artifacts land below the output base.
//! The default layout is `<os>/<abi>`; a platform extension file can
//! override it per OS or per OS/ABI pair.

mod extension;
mod layout;
mod path;

pub use extension::{EXTENSION_FILE, PlatformExtension, locate_extension_dir};
pub use layout::{DefaultLayout, SubdirectoryLayout};
pub use path::resolve_path;
