pub mod render;
pub mod submission;

pub use render::*;
pub use submission::*;
