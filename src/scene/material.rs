use crate::color::Color;
use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct MaterialFlags: u32 {
        const TRANSPARENT = 1 << 0;
        const WIREFRAME = 1 << 1;
        const ADDITIVE = 1 << 2;
        const UNLIT = 1 << 3;
    }
}

/// Animated vertex displacement the host applies in its shader. `speed`
/// scales the host's time input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Deformation {
    /// Noise displacement along the normal, `amount` in `0..=1`.
    Distort { amount: f32, speed: f32 },
    /// Sinusoidal sway along the surface.
    Wobble { factor: f32, speed: f32 },
}

/// Surface description handed to the host renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub base_color: Color,
    pub emissive: Color,
    pub emissive_intensity: f32,
    pub roughness: f32,
    pub metallic: f32,
    pub opacity: f32,
    pub flags: MaterialFlags,
    pub deformation: Option<Deformation>,
}

impl Material {
    pub fn new(color: Color) -> Self {
        Self {
            base_color: color,
            emissive: Color::BLACK,
            emissive_intensity: 0.0,
            roughness: 1.0,
            metallic: 0.0,
            opacity: 1.0,
            flags: MaterialFlags::empty(),
            deformation: None,
        }
    }

    pub fn white() -> Self {
        Self::new(Color::WHITE)
    }

    /// Glows in its own base color.
    pub fn with_emissive(mut self, intensity: f32) -> Self {
        self.emissive = self.base_color;
        self.emissive_intensity = intensity.max(0.0);
        self
    }

    pub fn with_roughness(mut self, roughness: f32) -> Self {
        self.roughness = roughness.clamp(0.0, 1.0);
        self
    }

    pub fn with_metallic(mut self, metallic: f32) -> Self {
        self.metallic = metallic.clamp(0.0, 1.0);
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self.flags
            .set(MaterialFlags::TRANSPARENT, self.opacity < 1.0);
        self
    }

    pub fn wireframe(mut self) -> Self {
        self.flags |= MaterialFlags::WIREFRAME;
        self
    }

    pub fn additive(mut self) -> Self {
        self.flags |= MaterialFlags::ADDITIVE | MaterialFlags::TRANSPARENT;
        self
    }

    pub fn unlit(mut self) -> Self {
        self.flags |= MaterialFlags::UNLIT;
        self
    }

    pub fn with_distort(mut self, amount: f32, speed: f32) -> Self {
        self.deformation = Some(Deformation::Distort {
            amount: amount.clamp(0.0, 1.0),
            speed: speed.max(0.0),
        });
        self
    }

    pub fn with_wobble(mut self, factor: f32, speed: f32) -> Self {
        self.deformation = Some(Deformation::Wobble {
            factor: factor.max(0.0),
            speed: speed.max(0.0),
        });
        self
    }

    pub fn is_transparent(&self) -> bool {
        self.flags.contains(MaterialFlags::TRANSPARENT)
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::white()
    }
}
