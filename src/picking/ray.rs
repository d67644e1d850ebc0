use glam::{Mat4, Vec3};

use crate::scene::ObjectId;

/// A half-line used for pointer hit testing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Start point in world space.
    pub origin: Vec3,
    /// Unit direction.
    pub direction: Vec3,
}

impl Ray {
    /// Create a ray; `direction` is normalized (a zero vector stays zero
    /// and hits nothing).
    #[must_use]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Point at parameter `t` along the ray.
    #[must_use]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// The same ray expressed in another frame.
    ///
    /// The direction is transformed but not renormalized, so parameters
    /// measured in the new frame equal distances in the original one.
    #[must_use]
    pub fn transformed(&self, matrix: &Mat4) -> Self {
        Self {
            origin: matrix.transform_point3(self.origin),
            direction: matrix.transform_vector3(self.direction),
        }
    }

    /// Parameter where the ray crosses the plane through `point` with
    /// `normal`, if in front of the origin.
    #[must_use]
    pub fn intersect_plane(&self, point: Vec3, normal: Vec3) -> Option<f32> {
        let denom = normal.dot(self.direction);
        if denom.abs() < 1e-6 {
            return None;
        }
        let t = (point - self.origin).dot(normal) / denom;
        (t >= 0.0).then_some(t)
    }

    /// Slab test against an axis-aligned box centred at the origin.
    #[must_use]
    pub fn intersect_centered_box(&self, half_extents: Vec3) -> Option<f32> {
        let mut t_min = 0.0_f32;
        let mut t_max = f32::INFINITY;
        for axis in 0..3 {
            let origin = self.origin[axis];
            let dir = self.direction[axis];
            let half = half_extents[axis];
            if dir.abs() < 1e-8 {
                if origin.abs() > half {
                    return None;
                }
                continue;
            }
            let inv = 1.0 / dir;
            let (near, far) = {
                let a = (-half - origin) * inv;
                let b = (half - origin) * inv;
                if a < b { (a, b) } else { (b, a) }
            };
            t_min = t_min.max(near);
            t_max = t_max.min(far);
            if t_min > t_max {
                return None;
            }
        }
        Some(t_min)
    }
}

/// A ray hit against a scene object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    /// Object that was hit.
    pub object: ObjectId,
    /// Distance from the ray origin.
    pub distance: f32,
    /// World-space hit point.
    pub point: Vec3,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plane_behind_origin_is_missed() {
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        assert_eq!(ray.intersect_plane(Vec3::new(0.0, 0.0, -4.0), Vec3::Z), Some(4.0));
        assert_eq!(ray.intersect_plane(Vec3::new(0.0, 0.0, 4.0), Vec3::Z), None);
        assert_eq!(ray.intersect_plane(Vec3::new(0.0, 0.0, -4.0), Vec3::X), None);
    }

    #[test]
    fn box_hit_reports_entry_distance() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::NEG_Z);
        let t = ray.intersect_centered_box(Vec3::splat(1.0)).unwrap();
        assert!((t - 9.0).abs() < 1e-5);
        let miss = Ray::new(Vec3::new(3.0, 0.0, 10.0), Vec3::NEG_Z);
        assert!(miss.intersect_centered_box(Vec3::splat(1.0)).is_none());
    }

    #[test]
    fn transformed_ray_preserves_parameter() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::NEG_Z);
        let to_local = Mat4::from_scale(Vec3::splat(2.0)).inverse();
        let local = ray.transformed(&to_local);
        let t = local.intersect_plane(Vec3::ZERO, Vec3::Z).unwrap();
        assert!((ray.at(t) - Vec3::ZERO).length() < 1e-5);
    }
}
