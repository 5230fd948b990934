use cgmath::{Deg, Matrix4};
use vitrine_mesh::Vector3;

/// Smallest allowed scale component. Keeps geometry from collapsing or
/// turning inside out while a scale-down key is held.
pub const MIN_SCALE: f32 = 0.1;

/// Per-object placement: position in world units, rotation in degrees,
/// per-axis scale factors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vector3,
    pub rotation: Vector3,
    pub scale: Vector3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vector3::new(0.0, 0.0, 0.0),
            rotation: Vector3::new(0.0, 0.0, 0.0),
            scale: Vector3::new(1.0, 1.0, 1.0),
        }
    }
}

impl Transform {
    pub fn translate(&mut self, delta: Vector3) {
        self.position += delta;
    }

    /// Applies a rotation delta in degrees and wraps each axis back into
    /// (-360, 360). Wrapping rather than clamping preserves the sign of the
    /// accumulated angle.
    pub fn rotate(&mut self, delta: Vector3) {
        self.rotation += delta;
        self.rotation.x %= 360.0;
        self.rotation.y %= 360.0;
        self.rotation.z %= 360.0;
    }

    /// Applies a scale delta and floors each axis at [`MIN_SCALE`].
    pub fn rescale(&mut self, delta: Vector3) {
        self.scale += delta;
        self.scale.x = self.scale.x.max(MIN_SCALE);
        self.scale.y = self.scale.y.max(MIN_SCALE);
        self.scale.z = self.scale.z.max(MIN_SCALE);
    }

    /// Model matrix: translation, then rotation about X, Y, Z in that
    /// order, then scale.
    pub fn matrix(&self) -> Matrix4<f32> {
        Matrix4::from_translation(self.position)
            * Matrix4::from_angle_x(Deg(self.rotation.x))
            * Matrix4::from_angle_y(Deg(self.rotation.y))
            * Matrix4::from_angle_z(Deg(self.rotation.z))
            * Matrix4::from_nonuniform_scale(self.scale.x, self.scale.y, self.scale.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_wraps_and_keeps_sign() {
        let mut t = Transform::default();
        t.rotate(Vector3::new(350.0, 0.0, 0.0));
        t.rotate(Vector3::new(20.0, 0.0, 0.0));
        assert_eq!(t.rotation.x, 10.0);

        t.rotate(Vector3::new(-380.0, 0.0, 0.0));
        assert_eq!(t.rotation.x, -10.0);
    }

    #[test]
    fn rotation_always_stays_in_open_interval() {
        let mut t = Transform::default();
        for _ in 0..100 {
            t.rotate(Vector3::new(77.7, -133.3, 359.9));
            assert!(t.rotation.x > -360.0 && t.rotation.x < 360.0);
            assert!(t.rotation.y > -360.0 && t.rotation.y < 360.0);
            assert!(t.rotation.z > -360.0 && t.rotation.z < 360.0);
        }
    }

    #[test]
    fn scale_floors_at_minimum_per_axis() {
        let mut t = Transform::default();
        t.rescale(Vector3::new(-5.0, 0.5, 0.0));
        assert_eq!(t.scale.x, MIN_SCALE);
        assert_eq!(t.scale.y, 1.5);
        assert_eq!(t.scale.z, 1.0);

        // Once floored, growth resumes from the floor rather than from the
        // accumulated negative value.
        t.rescale(Vector3::new(0.2, 0.0, 0.0));
        assert!((t.scale.x - 0.3).abs() < 1e-6);
    }

    #[test]
    fn matrix_composes_translate_rotate_scale() {
        let t = Transform {
            position: Vector3::new(1.0, 2.0, 3.0),
            rotation: Vector3::new(30.0, 45.0, 60.0),
            scale: Vector3::new(2.0, 1.0, 0.5),
        };
        let expected = Matrix4::from_translation(Vector3::new(1.0, 2.0, 3.0))
            * Matrix4::from_angle_x(Deg(30.0))
            * Matrix4::from_angle_y(Deg(45.0))
            * Matrix4::from_angle_z(Deg(60.0))
            * Matrix4::from_nonuniform_scale(2.0, 1.0, 0.5);
        assert_eq!(t.matrix(), expected);
    }

    #[test]
    fn identity_transform_is_identity_matrix() {
        use cgmath::SquareMatrix;
        assert_eq!(Transform::default().matrix(), Matrix4::identity());
    }
}
