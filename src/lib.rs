#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

//! A borderless application window with custom-drawn chrome: title bar,
//! 1-px border, client area, and a soft drop shadow. The layout engine
//! derives every chrome rectangle from the window's pixel size and display
//! scale; the hit classifier maps cursor positions back into chrome regions
//! so the OS can drive move/resize gestures natively.

pub mod app;
pub mod assets;
pub mod errors;
pub mod hit;
pub mod layout;
pub mod renderer;
pub mod theme;

pub use app::App;
pub use errors::{CasementError, Result};
pub use hit::{HitRegion, classify};
pub use layout::{Layout, Rect, ShadowMargins};
pub use theme::{Color, Palette, Theme, ThemeMode};
