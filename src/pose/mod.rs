pub mod frame;
pub mod ingest;
pub mod keypoint;

pub use frame::{Frame, VALUES_PER_FRAME};
pub use ingest::{load_frames, load_json};
pub use keypoint::{BodyPart, Keypoint};
