#[cfg(feature = "desktop")]
pub mod detector;
pub mod extract;
pub mod landmark;
#[cfg(feature = "desktop")]
pub mod preprocess;

#[cfg(feature = "desktop")]
pub use detector::PoseDetector;
pub use extract::{pixel_frame, Detection, NormalizedLandmark};
pub use landmark::{Frame, Landmark, LandmarkIndex, Sequence};
#[cfg(feature = "desktop")]
pub use preprocess::preprocess_frame;
