use glam::{Mat4, Vec2, Vec3};

use super::{MaterialId, ObjectId, Scene};
use crate::picking::{Intersection, Ray};

/// Pickable geometry in an object's local frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Flat rectangle in the local XY plane, pickable from both sides.
    Quad {
        /// Half width and half height.
        half_extents: Vec2,
    },
    /// Box centred on the local origin.
    Cuboid {
        /// Half size along each axis.
        half_extents: Vec3,
    },
}

impl Shape {
    /// Ray parameter of the first hit, with `ray` already in local space.
    fn intersect_local(&self, ray: &Ray) -> Option<f32> {
        match *self {
            Shape::Quad { half_extents } => {
                let t = ray.intersect_plane(Vec3::ZERO, Vec3::Z)?;
                let p = ray.at(t);
                (p.x.abs() <= half_extents.x && p.y.abs() <= half_extents.y)
                    .then_some(t)
            }
            Shape::Cuboid { half_extents } => {
                ray.intersect_centered_box(half_extents)
            }
        }
    }
}

/// A positioned, pickable object.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    /// Local-to-world transform.
    pub transform: Mat4,
    /// Pickable geometry.
    pub shape: Shape,
    /// Currently assigned material.
    pub material: MaterialId,
}

impl SceneObject {
    /// Object with the given geometry at `transform`.
    #[must_use]
    pub fn new(transform: Mat4, shape: Shape, material: MaterialId) -> Self {
        Self {
            transform,
            shape,
            material,
        }
    }

    fn intersect(&self, ray: &Ray) -> Option<f32> {
        let to_local = self.transform.inverse();
        if !to_local.is_finite() {
            return None;
        }
        self.shape.intersect_local(&ray.transformed(&to_local))
    }
}

/// Flat in-memory scene of quads and boxes.
///
/// Used by the headless walkthrough and tests; a real host adapts its own
/// scene graph to [`Scene`] instead.
#[derive(Debug, Default)]
pub struct StaticScene {
    /// Objects in insertion order.
    objects: Vec<(ObjectId, SceneObject)>,
    next_object_id: u32,
    /// Bumped on any mutation so a renderer can skip unchanged frames.
    generation: u64,
}

impl StaticScene {
    /// Create an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object and return its handle.
    pub fn add_object(&mut self, object: SceneObject) -> ObjectId {
        let id = ObjectId(self.next_object_id);
        self.next_object_id += 1;
        self.objects.push((id, object));
        self.generation += 1;
        id
    }

    /// Remove an object, returning it if it existed.
    pub fn remove_object(&mut self, id: ObjectId) -> Option<SceneObject> {
        let index = self.objects.iter().position(|(oid, _)| *oid == id)?;
        self.generation += 1;
        Some(self.objects.remove(index).1)
    }

    /// Look up an object.
    #[must_use]
    pub fn object(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects
            .iter()
            .find(|(oid, _)| *oid == id)
            .map(|(_, object)| object)
    }

    /// Mutable access to an object. Counts as a mutation only when the
    /// object exists.
    pub fn object_mut(&mut self, id: ObjectId) -> Option<&mut SceneObject> {
        let object = self
            .objects
            .iter_mut()
            .find(|(oid, _)| *oid == id)
            .map(|(_, object)| object)?;
        self.generation += 1;
        Some(object)
    }

    /// Number of objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the scene holds no objects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Mutation counter.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Scene for StaticScene {
    fn world_position(&self, object: ObjectId) -> Option<Vec3> {
        self.object(object)
            .map(|o| o.transform.w_axis.truncate())
    }

    fn raycast(&self, ray: &Ray, objects: &[ObjectId]) -> Vec<Intersection> {
        let mut hits: Vec<Intersection> = objects
            .iter()
            .filter_map(|&id| {
                let distance = self.object(id)?.intersect(ray)?;
                Some(Intersection {
                    object: id,
                    distance,
                    point: ray.at(distance),
                })
            })
            .collect();
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }

    fn set_material(&mut self, object: ObjectId, material: MaterialId) {
        if self.material(object).is_some_and(|m| m != material) {
            if let Some(o) = self.object_mut(object) {
                o.material = material;
            }
        }
    }

    fn material(&self, object: ObjectId) -> Option<MaterialId> {
        self.object(object).map(|o| o.material)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad_at(z: f32) -> SceneObject {
        SceneObject::new(
            Mat4::from_translation(Vec3::new(0.0, 0.0, z)),
            Shape::Quad {
                half_extents: Vec2::new(1.0, 1.0),
            },
            MaterialId(0),
        )
    }

    #[test]
    fn raycast_orders_nearest_first() {
        let mut scene = StaticScene::new();
        let far = scene.add_object(quad_at(-10.0));
        let near = scene.add_object(quad_at(-4.0));
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let hits = scene.raycast(&ray, &[far, near]);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].object, near);
        assert!((hits[0].distance - 4.0).abs() < 1e-5);
        assert_eq!(hits[1].object, far);
    }

    #[test]
    fn raycast_only_tests_listed_objects() {
        let mut scene = StaticScene::new();
        let a = scene.add_object(quad_at(-4.0));
        let _b = scene.add_object(quad_at(-6.0));
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let hits = scene.raycast(&ray, &[a]);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].object, a);
    }

    #[test]
    fn rotated_quad_is_missed_edge_on() {
        let mut scene = StaticScene::new();
        let id = scene.add_object(SceneObject::new(
            Mat4::from_rotation_y(std::f32::consts::FRAC_PI_2),
            Shape::Quad {
                half_extents: Vec2::new(1.0, 1.0),
            },
            MaterialId(0),
        ));
        // Quad now lies in the YZ plane; a ray along -Z grazes it.
        let along = Ray::new(Vec3::new(0.5, 0.0, 5.0), Vec3::NEG_Z);
        assert!(scene.raycast(&along, &[id]).is_empty());
        let across = Ray::new(Vec3::new(5.0, 0.0, 0.5), Vec3::NEG_X);
        assert_eq!(scene.raycast(&across, &[id]).len(), 1);
    }

    #[test]
    fn cuboid_hit_uses_front_face() {
        let mut scene = StaticScene::new();
        let id = scene.add_object(SceneObject::new(
            Mat4::from_translation(Vec3::new(0.0, 0.0, -5.0)),
            Shape::Cuboid {
                half_extents: Vec3::splat(0.5),
            },
            MaterialId(0),
        ));
        let hits = scene.raycast(&Ray::new(Vec3::ZERO, Vec3::NEG_Z), &[id]);
        assert!((hits[0].distance - 4.5).abs() < 1e-5);
        assert!((hits[0].point.z + 4.5).abs() < 1e-5);
    }

    #[test]
    fn materials_and_removal() {
        let mut scene = StaticScene::new();
        let id = scene.add_object(quad_at(-1.0));
        scene.set_material(id, MaterialId(7));
        assert_eq!(scene.material(id), Some(MaterialId(7)));
        assert_eq!(scene.world_position(id), Some(Vec3::new(0.0, 0.0, -1.0)));
        assert!(scene.remove_object(id).is_some());
        assert!(scene.is_empty());
        assert_eq!(scene.material(id), None);
        scene.set_material(id, MaterialId(1));
    }

    #[test]
    fn generation_counts_only_real_changes() {
        let mut scene = StaticScene::new();
        let id = scene.add_object(quad_at(-1.0));
        let start = scene.generation();

        scene.set_material(id, MaterialId(0));
        scene.set_material(ObjectId(99), MaterialId(3));
        assert!(scene.object_mut(ObjectId(99)).is_none());
        assert_eq!(scene.generation(), start);

        scene.set_material(id, MaterialId(3));
        assert_eq!(scene.generation(), start + 1);
    }
}
