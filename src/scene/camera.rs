use glam::{Mat4, Vec3};
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub fov_y_radians: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    pub fn looking_at_origin(eye: Vec3, fov_y_degrees: f32) -> Self {
        Self {
            eye,
            fov_y_radians: fov_y_degrees.to_radians(),
            ..Self::default()
        }
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
    pub fn proj(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_y_radians, aspect, self.near, self.far)
    }
    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        self.proj(aspect) * self.view()
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, 5.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_y_radians: 75f32.to_radians(),
            near: 0.1,
            far: 1000.0,
        }
    }
}

/// Auto-rotating orbit around the target at a fixed polar angle.
///
/// No zoom or pan: the eye stays on a horizontal circle of `radius` at
/// `height`, starting on +Z at time zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitCamera {
    pub radius: f32,
    pub height: f32,
    pub angular_speed: f32,
}

impl OrbitCamera {
    /// `speed` of 1.0 is one revolution per minute.
    pub fn auto_rotate(radius: f32, height: f32, speed: f32) -> Self {
        Self {
            radius,
            height,
            angular_speed: speed * TAU / 60.0,
        }
    }

    pub fn eye_at(&self, time: f32) -> Vec3 {
        let angle = self.angular_speed * time;
        Vec3::new(
            angle.sin() * self.radius,
            self.height,
            angle.cos() * self.radius,
        )
    }

    pub fn apply(&self, camera: &mut Camera, time: f32) {
        camera.eye = camera.target + self.eye_at(time);
        camera.up = Vec3::Y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_proj_is_reasonable() {
        let cam = Camera::default();
        let vp = cam.view_proj(16.0 / 9.0);
        let id = vp * vp.inverse();
        assert!(id.abs_diff_eq(Mat4::IDENTITY, 1e-4));
    }

    #[test]
    fn orbit_starts_on_positive_z_and_keeps_radius() {
        let orbit = OrbitCamera::auto_rotate(15.0, 0.0, 0.5);
        assert!(orbit.eye_at(0.0).abs_diff_eq(Vec3::new(0.0, 0.0, 15.0), 1e-6));

        for t in [1.0, 17.5, 240.0] {
            let eye = orbit.eye_at(t);
            assert!((eye.length() - 15.0).abs() < 1e-3);
            assert_eq!(eye.y, 0.0);
        }
    }

    #[test]
    fn half_speed_takes_two_minutes_per_turn() {
        let orbit = OrbitCamera::auto_rotate(1.0, 0.0, 0.5);
        assert!(orbit.eye_at(60.0).abs_diff_eq(Vec3::new(0.0, 0.0, -1.0), 1e-4));
        assert!(orbit.eye_at(120.0).abs_diff_eq(Vec3::new(0.0, 0.0, 1.0), 1e-4));
    }
}
