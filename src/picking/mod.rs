//! Pointer picking: rays from the camera through the cursor, and the
//! hover/select state machine built on them.

/// Rays and ray-shape intersection.
pub mod ray;
/// Hover and select state over a fixed set of targets.
pub mod targeting;

pub use ray::{Intersection, Ray};
pub use targeting::{
    InteractiveTarget, PointerTargeting, Selection, TargetingState,
};
