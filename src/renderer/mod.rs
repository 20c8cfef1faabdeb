//! wgpu rendering module
//!
//! Frames are built on the CPU as colored triangle lists from a read-only
//! view of the game state, then uploaded and drawn in a single pass.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::build_frame;
pub use vertex::Vertex;
