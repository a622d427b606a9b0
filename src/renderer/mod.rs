//! Rendering module
//!
//! `scene` projects a snapshot into draw items; the WebGPU pipeline draws the
//! rectangles and the host overlay shows the text.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::{DrawItem, Rect, Scene, Text, TextRole, build_scene};
