pub mod code_fence;
pub mod marker;

pub use code_fence::{CodeFence, FenceSig};
pub use marker::{Marker, MarkerMatch};
