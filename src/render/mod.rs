pub mod skeleton;
#[cfg(feature = "desktop")]
pub mod window;

pub use skeleton::{HIGHLIGHT_COLOR, LANDMARK_COLOR, SKELETON_COLOR, SKELETON_CONNECTIONS};
#[cfg(feature = "desktop")]
pub use window::MinifbRenderer;
