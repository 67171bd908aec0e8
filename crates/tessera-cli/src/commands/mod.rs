pub mod render;
pub mod renderers;
