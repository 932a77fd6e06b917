use glam::{Mat4, Vec2};

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
}

/// Maps logical canvas pixels (origin top-left, +y down) to clip space.
pub struct ScreenCamera {
    pub viewport: Vec2,
}

impl ScreenCamera {
    pub fn new(logical_width: f32, logical_height: f32) -> Self {
        Self {
            viewport: Vec2::new(logical_width, logical_height),
        }
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::orthographic_rh(0.0, self.viewport.x, self.viewport.y, 0.0, -1.0, 1.0)
    }

    pub fn build_uniform(&self) -> CameraUniform {
        CameraUniform {
            view_proj: self.projection().to_cols_array_2d(),
        }
    }
}
