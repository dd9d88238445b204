pub mod snapshot;
pub mod transform;

pub use snapshot::ViewSnapshot;
pub use transform::ViewTransform;
