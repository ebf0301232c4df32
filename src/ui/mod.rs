//! Terminal rendering.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → components → ANSI frame
//! ```
//!
//! - [`viewmodel`]: renderable snapshot types
//! - [`renderer`]: entry point
//! - [`components`]: per-region renderers and the frame layout
//! - [`helpers`]: canvas, truncation, wrapping, match highlighting
//! - [`theme`]: light and dark palettes

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render, render_to_string};
pub use theme::{Theme, ThemeSet};
pub use viewmodel::{FooterInfo, HeaderInfo, SectionBody, UIViewModel};
