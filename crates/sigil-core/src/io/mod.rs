pub mod artifact;
pub mod window;

pub use window::{FileWindows, SliceWindows, WindowSource};
