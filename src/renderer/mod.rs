//! Rendering module
//!
//! Scene vertices are built on every platform from the app state; the WebGPU
//! pipeline uploads and draws them.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::build_frame;
pub use vertex::Vertex;
