// This is needed because wgpu uses Direct-X style coordinates while cgmath
// uses OpenGL style coordinates.
//
// This matrix simply transforms the coordinates used by cgmath into the ones
// that wgpu need.
#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: cgmath::Matrix4<f32> = cgmath::Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.0,
    0.0, 0.0, 0.5, 1.0,
);

// One static white point light, shared by every object.
const LIGHT_POSITION: [f32; 3] = [5.0, 5.0, 5.0];
const LIGHT_COLOR: [f32; 3] = [1.0, 1.0, 1.0];

pub struct Camera {
    // Where the camera is located.
    eye: cgmath::Point3<f32>,
    // Where the camera is pointing.
    target: cgmath::Point3<f32>,
    // The orientation of the camera.
    up: cgmath::Vector3<f32>,
    // The aspect ratio of the scene (width:height).
    pub aspect: f32,
    // The horizontal field of view.
    fovy: f32,
    // Near and far clipping planes.
    znear: f32,
    zfar: f32,
}

impl Camera {
    /// A fixed camera a few units back on +Z, looking at the origin.
    pub fn new(aspect: f32) -> Self {
        Self {
            eye: (0.0, 0.0, 5.0).into(),
            target: (0.0, 0.0, 0.0).into(),
            up: cgmath::Vector3::unit_y(),
            aspect,
            fovy: 45.0,
            znear: 0.1,
            zfar: 100.0,
        }
    }

    fn build_view_projection_matrix(&self) -> cgmath::Matrix4<f32> {
        let view = cgmath::Matrix4::look_at_rh(self.eye, self.target, self.up);
        let proj = cgmath::perspective(cgmath::Deg(self.fovy), self.aspect, self.znear, self.zfar);
        OPENGL_TO_WGPU_MATRIX * proj * view
    }
}

// We need this for Rust to store our data correctly for the shaders.
#[repr(C)]
// This is so we can store this in a buffer.
#[derive(Debug, Copy, Clone, bytemuck_derive::Pod, bytemuck_derive::Zeroable)]
pub struct CameraUniform {
    // We can't use cgmath with bytemuck directly so we'll have
    // to convert the Matrix4 into a 4x4 f32 array.
    view_proj: [[f32; 4]; 4],
    light_pos: [f32; 3],
    _pad0: f32,
    light_color: [f32; 3],
    _pad1: f32,
}

impl CameraUniform {
    pub fn new() -> Self {
        use cgmath::SquareMatrix;
        Self {
            view_proj: cgmath::Matrix4::identity().into(),
            light_pos: LIGHT_POSITION,
            _pad0: 0.0,
            light_color: LIGHT_COLOR,
            _pad1: 0.0,
        }
    }

    /// Updates the view projection in our uniform buffer using the camera.
    pub fn update_view_proj(&mut self, camera: &Camera) {
        self.view_proj = camera.build_view_projection_matrix().into();
    }
}
