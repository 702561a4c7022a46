//! Swagger UI rendering.
//!
//! The renderer is a seam: the route binder only knows `UiRenderer`.
//! `SwaggerUiRenderer` produces the stock Swagger UI page and init script
//! expected by the static bundle served next to them.

pub mod options;
pub mod renderer;
mod templates;

pub use options::UiOptions;
pub use renderer::{SwaggerUiRenderer, UiRenderer};
