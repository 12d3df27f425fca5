//! Procedural descriptor generation.
//!
//! Runs once per scene mount (or per config change), never per frame.
//! Count-driven output is random but reproducible for a given seed;
//! record-driven output is fully determined by the records.

use crate::color::Color;
use crate::error::{Result, SceneError};
use crate::scene::config::{validate_records, ItemRecord, SceneConfig};
use crate::scene::descriptor::{ShapeDescriptor, ShapeKind};
use glam::Vec3;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;

/// Volume and parameter ranges for count-driven (ambient) scenes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldLayout {
    /// Edge length of the cube the objects are scattered in.
    pub extent: f32,
    /// Added to every z so the field sits behind the focal plane.
    pub depth_bias: f32,
    pub min_size: f32,
    pub max_size: f32,
    pub saturation: f32,
    pub lightness: f32,
    pub max_angular_speed: f32,
}

impl FieldLayout {
    /// Rejects ranges the sampler cannot draw from. A zero
    /// `max_angular_speed` is allowed and means no spin.
    pub fn validate(&self) -> Result<()> {
        check_extent(self.extent)?;
        if !(self.min_size.is_finite() && self.min_size > 0.0) {
            return Err(invalid_layout("min_size", format!("must be positive, got {}", self.min_size)));
        }
        if !(self.max_size.is_finite() && self.max_size > self.min_size) {
            return Err(invalid_layout(
                "max_size",
                format!("must exceed min_size {}, got {}", self.min_size, self.max_size),
            ));
        }
        if !(self.max_angular_speed.is_finite() && self.max_angular_speed >= 0.0) {
            return Err(invalid_layout(
                "max_angular_speed",
                format!("must not be negative, got {}", self.max_angular_speed),
            ));
        }
        if !self.depth_bias.is_finite() {
            return Err(invalid_layout("depth_bias", "must be finite".into()));
        }
        Ok(())
    }
}

impl Default for FieldLayout {
    fn default() -> Self {
        Self {
            extent: 30.0,
            depth_bias: -10.0,
            min_size: 0.1,
            max_size: 0.4,
            saturation: 0.7,
            lightness: 0.5,
            // 0.02 rad per 60 Hz frame
            max_angular_speed: 1.2,
        }
    }
}

/// Circle placement for record-driven scenes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleLayout {
    pub center: Vec3,
    pub radius: f32,
    pub kind: ShapeKind,
    pub base_size: f32,
    /// `size = base_size + magnitude / divisor` when set.
    pub magnitude_divisor: Option<f32>,
    pub angular_speed: f32,
}

impl Default for CircleLayout {
    fn default() -> Self {
        Self {
            center: Vec3::ZERO,
            radius: 2.0,
            kind: ShapeKind::Sphere,
            base_size: 0.5,
            magnitude_divisor: None,
            angular_speed: 0.0,
        }
    }
}

impl CircleLayout {
    pub fn angle_of(index: usize, count: usize) -> f32 {
        if count == 0 {
            return 0.0;
        }
        TAU * index as f32 / count as f32
    }

    /// Position of slot `index` of `count`, in the XZ plane.
    pub fn position(&self, index: usize, count: usize) -> Vec3 {
        let angle = Self::angle_of(index, count);
        self.center + Vec3::new(angle.cos(), 0.0, angle.sin()) * self.radius
    }

    fn size_for(&self, magnitude: Option<f32>) -> f32 {
        match (self.magnitude_divisor, magnitude) {
            (Some(divisor), Some(magnitude)) if divisor > 0.0 => self.base_size + magnitude / divisor,
            _ => self.base_size,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SceneGenerator {
    pub field: FieldLayout,
    pub circle: CircleLayout,
}

impl SceneGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, field: FieldLayout) -> Self {
        self.field = field;
        self
    }

    pub fn with_circle(mut self, circle: CircleLayout) -> Self {
        self.circle = circle;
        self
    }

    /// Builds the descriptor sequence for `config`.
    ///
    /// All validation happens before the first descriptor is produced, so a
    /// configuration error never leaves a partial result behind.
    pub fn generate(&self, config: &SceneConfig, seed: Option<u64>) -> Result<Vec<ShapeDescriptor>> {
        match config {
            SceneConfig::Count(count) => {
                let count = checked_count(*count)?;
                self.field.validate()?;
                let mut rng = seeded_rng(seed);
                Ok(self.scatter(count, &mut rng))
            }
            SceneConfig::Records(records) => self.place_records(records),
        }
    }

    fn scatter(&self, count: usize, rng: &mut SmallRng) -> Vec<ShapeDescriptor> {
        let field = &self.field;
        let half = field.extent * 0.5;
        (0..count)
            .map(|_| {
                let kind = ShapeKind::ALL[rng.gen_range(0..ShapeKind::ALL.len())];
                let size = rng.gen_range(field.min_size..field.max_size);
                let base_position = Vec3::new(
                    rng.gen_range(-half..half),
                    rng.gen_range(-half..half),
                    rng.gen_range(-half..half) + field.depth_bias,
                );
                let color =
                    Color::from_hsl(rng.gen_range(0.0..360.0), field.saturation, field.lightness);
                ShapeDescriptor::new(kind, size, base_position, color)
                    .with_phase(rng.gen_range(0.0..TAU))
                    .with_angular_speed(if field.max_angular_speed > 0.0 {
                        rng.gen_range(0.0..field.max_angular_speed)
                    } else {
                        0.0
                    })
            })
            .collect()
    }

    fn place_records(&self, records: &[ItemRecord]) -> Result<Vec<ShapeDescriptor>> {
        let colors = validate_records(records)?;
        let count = records.len();
        Ok(records
            .iter()
            .zip(colors)
            .enumerate()
            .map(|(index, (record, color))| {
                let circle = &self.circle;
                ShapeDescriptor::new(
                    circle.kind,
                    circle.size_for(record.magnitude),
                    circle.position(index, count),
                    color,
                )
                .with_phase(index as f32)
                .with_angular_speed(circle.angular_speed)
            })
            .collect())
    }

    /// Fixed ring of `count` objects colored by stepping the hue.
    pub fn ring(
        &self,
        count: usize,
        hue_step_degrees: f32,
        saturation: f32,
        lightness: f32,
    ) -> Vec<ShapeDescriptor> {
        let circle = &self.circle;
        (0..count)
            .map(|index| {
                let hue = (hue_step_degrees * index as f32).rem_euclid(360.0);
                ShapeDescriptor::new(
                    circle.kind,
                    circle.base_size,
                    circle.position(index, count),
                    Color::from_hsl(hue, saturation, lightness),
                )
                .with_phase(index as f32)
                .with_angular_speed(circle.angular_speed)
            })
            .collect()
    }
}

/// Generates with the default layouts.
pub fn generate(config: &SceneConfig, seed: Option<u64>) -> Result<Vec<ShapeDescriptor>> {
    SceneGenerator::default().generate(config, seed)
}

/// Uniform points in a cube of edge `extent` centered on the origin.
pub fn particle_field(count: i64, extent: f32, seed: Option<u64>) -> Result<Vec<Vec3>> {
    let count = checked_count(count)?;
    check_extent(extent)?;
    let mut rng = seeded_rng(seed);
    let half = extent * 0.5;
    Ok((0..count)
        .map(|_| {
            Vec3::new(
                rng.gen_range(-half..half),
                rng.gen_range(-half..half),
                rng.gen_range(-half..half),
            )
        })
        .collect())
}

fn checked_count(count: i64) -> Result<usize> {
    usize::try_from(count).map_err(|_| SceneError::NegativeCount(count))
}

fn check_extent(extent: f32) -> Result<()> {
    if extent.is_finite() && extent > 0.0 {
        Ok(())
    } else {
        Err(invalid_layout("extent", format!("must be positive, got {}", extent)))
    }
}

fn invalid_layout(name: &'static str, reason: String) -> SceneError {
    SceneError::InvalidLayout { name, reason }
}

fn seeded_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    }
}
