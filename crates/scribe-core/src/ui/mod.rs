//! Console output for tool banners and notices

mod display;

pub use display::{DisplayManager, nice_key};
