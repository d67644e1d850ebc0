//! Scene collaborator: the narrow interface the core uses to reach 3D
//! objects, plus a small in-memory implementation.
//!
//! The viewer never owns meshes, textures or materials. It refers to them
//! through [`ObjectId`] and [`MaterialId`] handles and asks the [`Scene`]
//! for world positions, ray hits and material swaps.

mod static_scene;

use glam::Vec3;
pub use static_scene::{SceneObject, Shape, StaticScene};

use crate::picking::{Intersection, Ray};

/// Handle to an object living in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub u32);

/// Handle to a material owned by the renderer.
///
/// Handles are created once at setup and reused, so hover feedback swaps
/// handles instead of building new materials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MaterialId(pub u32);

/// Operations the viewer needs from the host scene graph.
pub trait Scene {
    /// World-space position of an object's origin.
    fn world_position(&self, object: ObjectId) -> Option<Vec3>;

    /// Intersect `ray` with each of `objects`, nearest hit first.
    fn raycast(&self, ray: &Ray, objects: &[ObjectId]) -> Vec<Intersection>;

    /// Assign a material to an object. Unknown objects are ignored.
    fn set_material(&mut self, object: ObjectId, material: MaterialId);

    /// Material currently assigned to an object.
    fn material(&self, object: ObjectId) -> Option<MaterialId>;
}
