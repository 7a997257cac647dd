//! Camera that drifts toward the mouse pointer.

use macroquad::prelude::*;

/// Fraction of the remaining offset covered per frame.
pub const FOLLOW_EASING: f32 = 0.05;

/// Near clipping plane distance.
pub const Z_NEAR: f32 = 1.0;

/// Far clipping plane distance.
pub const Z_FAR: f32 = 10_000.0;

/// Perspective camera that eases toward the pointer and always looks at the target.
///
/// Only `x` and `y` follow the mouse; `z` keeps its starting value.
#[derive(Debug, Clone)]
pub struct FollowCamera {
    pub position: Vec3,
    pub target: Vec3,
    /// Vertical field of view, in radians.
    pub fovy: f32,
    pub easing: f32,
}

impl Default for FollowCamera {
    fn default() -> Self {
        Self::new(vec3(200.0, 200.0, 200.0))
    }
}

impl FollowCamera {
    /// Creates a camera at `position` looking at the origin with a 60° field of view.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            target: Vec3::ZERO,
            fovy: 60f32.to_radians(),
            easing: FOLLOW_EASING,
        }
    }

    /// Eases toward a pointer offset from the screen center, in pixels.
    ///
    /// Screen `y` grows downward, so it is negated to move the camera up.
    pub fn follow(&mut self, offset_x: f32, offset_y: f32) {
        self.position.x += (offset_x - self.position.x) * self.easing;
        self.position.y += (-offset_y - self.position.y) * self.easing;
    }

    /// Reads the mouse position and follows it.
    pub fn update(&mut self) {
        let (mx, my) = mouse_position();
        self.follow(mx - screen_width() / 2.0, my - screen_height() / 2.0);
    }

    /// Converts to macroquad's Camera3D for rendering.
    pub fn to_camera3d(&self) -> Camera3D {
        Camera3D {
            position: self.position,
            up: vec3(0.0, 1.0, 0.0),
            target: self.target,
            fovy: self.fovy,
            z_near: Z_NEAR,
            z_far: Z_FAR,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_the_diagonal() {
        let camera = FollowCamera::default();
        assert_eq!(camera.position, vec3(200.0, 200.0, 200.0));
        assert_eq!(camera.target, Vec3::ZERO);
    }

    #[test]
    fn camera3d_uses_fixed_clip_planes() {
        let camera = FollowCamera::default().to_camera3d();
        assert_eq!(camera.z_near, 1.0);
        assert_eq!(camera.z_far, 10_000.0);
        assert!((camera.fovy - 60f32.to_radians()).abs() < 1e-6);
        assert_eq!(camera.target, Vec3::ZERO);
    }

    #[test]
    fn follow_eases_toward_pointer() {
        let mut camera = FollowCamera::default();
        camera.follow(0.0, 0.0);
        // 200 + (0 - 200) * 0.05
        assert!((camera.position.x - 190.0).abs() < 1e-4);
        assert!((camera.position.y - 190.0).abs() < 1e-4);
        assert_eq!(camera.position.z, 200.0);
    }

    #[test]
    fn pointer_above_center_raises_camera() {
        let mut camera = FollowCamera::new(Vec3::ZERO);
        camera.follow(100.0, -100.0);
        assert!((camera.position.x - 5.0).abs() < 1e-4);
        assert!((camera.position.y - 5.0).abs() < 1e-4);
    }

    #[test]
    fn converges_on_fixed_pointer() {
        let mut camera = FollowCamera::default();
        for _ in 0..500 {
            camera.follow(40.0, 30.0);
        }
        assert!((camera.position.x - 40.0).abs() < 1e-2);
        assert!((camera.position.y + 30.0).abs() < 1e-2);
    }
}
