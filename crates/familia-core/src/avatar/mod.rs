//! Avatar customization: option catalogs, the persisted configuration and
//! the layered SVG renderer.

pub mod catalog;
pub mod color;
pub mod config;
pub mod render;

pub use color::adjust_brightness;
pub use config::{AvatarConfig, AvatarField};
pub use render::{AvatarImage, ExpressionStyle, Layer, LayerKind, render};
