mod face_tag;

pub use face_tag::{FaceTagKey, FaceTagOutline, ResolveFaceTag};
