//! Terminal UI primitives used by the interactive menu.

pub mod input;
mod renderer;
pub mod settings;

pub use renderer::Renderer;
