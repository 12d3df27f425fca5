//! Closed-form oscillators.
//!
//! Every function here maps absolute elapsed seconds to a pose. Nothing is
//! accumulated between calls, so sampling at 30 Hz or 120 Hz (or sampling the
//! same instant twice) yields the same result for the same timestamp.

use crate::scene::components::{
    BasePose, BobAnimation, GroupAnimation, OrbitAnimation, SpinAnimation,
};
use crate::scene::descriptor::ShapeDescriptor;
use glam::{EulerRot, Quat, Vec3};

impl SpinAnimation {
    /// Euler XYZ angles grow linearly from zero; the spin replaces the
    /// rest rotation outright.
    pub fn new(angular_velocity: Vec3) -> Self {
        Self { angular_velocity }
    }

    /// Tumble on X and Y at the descriptor's angular speed.
    pub fn tumble(descriptor: &ShapeDescriptor) -> Self {
        let speed = descriptor.angular_speed;
        Self::new(Vec3::new(speed, speed, 0.0))
    }

    pub fn angles_at(&self, time: f32) -> Vec3 {
        self.angular_velocity * time
    }

    pub fn rotation_at(&self, time: f32) -> Quat {
        let a = self.angles_at(time);
        Quat::from_euler(EulerRot::XYZ, a.x, a.y, a.z)
    }
}

impl OrbitAnimation {
    /// Holds the descriptor on its circle slot with no drift.
    pub fn on_circle(descriptor: &ShapeDescriptor, center: Vec3) -> Self {
        let offset = descriptor.base_position - center;
        Self {
            center,
            radius: Vec3::new(offset.x, 0.0, offset.z).length(),
            base_angle: offset.z.atan2(offset.x),
            angular_speed: descriptor.angular_speed,
            frequency: 0.0,
            phase: descriptor.phase,
            radial_amplitude: 0.0,
            vertical_amplitude: 0.0,
        }
    }

    pub fn with_drift(mut self, frequency: f32, radial_amplitude: f32, vertical_amplitude: f32) -> Self {
        self.frequency = frequency;
        self.radial_amplitude = radial_amplitude;
        self.vertical_amplitude = vertical_amplitude;
        self
    }

    pub fn angle_at(&self, time: f32) -> f32 {
        self.base_angle + self.angular_speed * time
    }

    pub fn radius_at(&self, time: f32) -> f32 {
        self.radius + self.radial_amplitude * (time * self.frequency + self.phase).sin()
    }

    pub fn translation_at(&self, time: f32) -> Vec3 {
        let angle = self.angle_at(time);
        let radius = self.radius_at(time);
        let lift = self.vertical_amplitude * (2.0 * time * self.frequency + self.phase).sin();
        self.center + Vec3::new(angle.cos() * radius, lift, angle.sin() * radius)
    }

    /// Largest distance from the rest circle the drift can reach.
    pub fn envelope(&self) -> f32 {
        self.radial_amplitude.abs().max(self.vertical_amplitude.abs())
    }
}

impl BobAnimation {
    /// `index` desynchronises neighbouring objects.
    pub fn new(amplitude: f32, frequency: f32, index: usize) -> Self {
        Self {
            amplitude,
            frequency,
            offset: index as f32,
        }
    }

    pub fn offset_at(&self, time: f32) -> Vec3 {
        Vec3::Y * ((time * self.frequency + self.offset).sin() * self.amplitude)
    }
}

impl GroupAnimation {
    pub fn spin(angular_velocity: Vec3) -> Self {
        Self {
            angular_velocity,
            ..Self::default()
        }
    }

    pub fn sway(amplitude: Vec3, frequency: Vec3) -> Self {
        Self {
            sway_amplitude: amplitude,
            sway_frequency: frequency,
            angular_velocity: Vec3::ZERO,
        }
    }

    pub fn angles_at(&self, time: f32) -> Vec3 {
        let s = self.sway_frequency * time;
        self.sway_amplitude * Vec3::new(s.x.sin(), s.y.sin(), s.z.sin())
            + self.angular_velocity * time
    }

    pub fn rotation_at(&self, time: f32) -> Quat {
        let a = self.angles_at(time);
        Quat::from_euler(EulerRot::XYZ, a.x, a.y, a.z)
    }
}

/// Local translation and rotation of one object at `time`.
///
/// Orbit replaces the rest translation, bobbing is added on top of whichever
/// applies, and spin replaces the rest rotation.
pub fn pose_at(
    base: &BasePose,
    spin: Option<&SpinAnimation>,
    orbit: Option<&OrbitAnimation>,
    bob: Option<&BobAnimation>,
    time: f32,
) -> (Vec3, Quat) {
    let mut translation = orbit.map_or(base.translation, |orbit| orbit.translation_at(time));
    if let Some(bob) = bob {
        translation += bob.offset_at(time);
    }
    let rotation = spin.map_or(base.rotation, |spin| spin.rotation_at(time));
    (translation, rotation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::scene::descriptor::ShapeKind;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn rest() -> BasePose {
        BasePose {
            translation: Vec3::new(1.0, 2.0, 3.0),
            rotation: Quat::IDENTITY,
        }
    }

    #[test]
    fn spin_is_linear_in_time() {
        let spin = SpinAnimation::new(Vec3::new(0.1, 0.2, 0.0));
        assert_eq!(spin.rotation_at(0.0), Quat::IDENTITY);
        let a = spin.angles_at(10.0);
        assert!(a.abs_diff_eq(Vec3::new(1.0, 2.0, 0.0), 1e-6));
    }

    #[test]
    fn spin_overrides_the_rest_rotation() {
        let base = BasePose {
            translation: Vec3::ZERO,
            rotation: Quat::from_rotation_x(FRAC_PI_2),
        };
        let spin = SpinAnimation::new(Vec3::new(0.2, 0.0, 0.3));
        let (_, r) = pose_at(&base, Some(&spin), None, None, 0.0);
        assert_eq!(r, Quat::IDENTITY);
        let (_, r) = pose_at(&base, None, None, None, 0.0);
        assert_eq!(r, base.rotation);
    }

    #[test]
    fn orbit_rests_on_circle_slot() {
        let descriptor = ShapeDescriptor::new(
            ShapeKind::Sphere,
            0.5,
            Vec3::new(0.0, 0.0, -2.0),
            Color::WHITE,
        );
        let orbit = OrbitAnimation::on_circle(&descriptor, Vec3::ZERO);
        assert!((orbit.radius - 2.0).abs() < 1e-6);
        assert!(orbit
            .translation_at(0.0)
            .abs_diff_eq(descriptor.base_position, 1e-5));
        assert!(orbit.translation_at(123.0).abs_diff_eq(descriptor.base_position, 1e-5));
    }

    #[test]
    fn orbit_drift_stays_inside_envelope() {
        let descriptor = ShapeDescriptor::new(ShapeKind::Sphere, 0.5, Vec3::X * 2.0, Color::WHITE)
            .with_phase(3.0)
            .with_angular_speed(0.4);
        let orbit = OrbitAnimation::on_circle(&descriptor, Vec3::ZERO).with_drift(0.5, 0.6, 0.8);
        for step in 0..600 {
            let t = step as f32 * 0.1;
            let p = orbit.translation_at(t);
            let planar = Vec3::new(p.x, 0.0, p.z).length();
            assert!((planar - 2.0).abs() <= 0.6 + 1e-4);
            assert!(p.y.abs() <= 0.8 + 1e-4);
        }
        assert_eq!(orbit.envelope(), 0.8);
    }

    #[test]
    fn bob_uses_object_index_as_phase() {
        let bob = BobAnimation::new(0.12, 1.0, 2);
        let expected = (0.5f32 + 2.0).sin() * 0.12;
        assert!((bob.offset_at(0.5).y - expected).abs() < 1e-7);
        assert_eq!(bob.offset_at(0.5).x, 0.0);
    }

    #[test]
    fn group_sway_is_bounded_and_spin_is_linear() {
        let sway = GroupAnimation::sway(Vec3::new(0.2, 0.2, 0.0), Vec3::new(0.1, 0.2, 0.0));
        for step in 0..1000 {
            let a = sway.angles_at(step as f32 * 0.37);
            assert!(a.x.abs() <= 0.2 && a.y.abs() <= 0.2);
        }
        let spin = GroupAnimation::spin(Vec3::Y * 0.1);
        assert!((spin.angles_at(PI).y - 0.1 * PI).abs() < 1e-6);
    }

    #[test]
    fn pose_layers_bob_on_top_of_rest() {
        let bob = BobAnimation::new(1.0, 1.0, 0);
        let (t, r) = pose_at(&rest(), None, None, Some(&bob), FRAC_PI_2);
        assert!(t.abs_diff_eq(Vec3::new(1.0, 3.0, 3.0), 1e-6));
        assert_eq!(r, Quat::IDENTITY);
    }

    #[test]
    fn pose_without_animation_is_rest_pose() {
        let (t, r) = pose_at(&rest(), None, None, None, 42.0);
        assert_eq!(t, rest().translation);
        assert_eq!(r, rest().rotation);
    }
}
