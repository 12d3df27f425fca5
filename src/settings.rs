use crate::error::{Result, SceneError};
use crate::scene::config::{validate_records, ItemRecord};
use log::{info, warn};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShowcaseSettings {
    #[serde(default)]
    pub hero: HeroSettings,
    #[serde(default)]
    pub ambient: AmbientSettings,
    #[serde(default)]
    pub skills: SkillSettings,
    #[serde(default = "ShowcaseSettings::default_projects")]
    pub projects: Vec<ItemRecord>,
    /// Lay every project out on one circle instead of one scene per project.
    #[serde(default)]
    pub gallery: bool,
}

impl Default for ShowcaseSettings {
    fn default() -> Self {
        Self {
            hero: HeroSettings::default(),
            ambient: AmbientSettings::default(),
            skills: SkillSettings::default(),
            projects: Self::default_projects(),
            gallery: false,
        }
    }
}

impl ShowcaseSettings {
    pub fn load() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            info!("Using default showcase settings for WebAssembly build");
            return Self::default();
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::load_from_path("showcase.json")
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Self {
        use std::fs;

        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(contents) => match Self::from_json_str(&contents) {
                Ok(settings) => {
                    info!("Loaded showcase settings from {:?}", path);
                    settings
                }
                Err(err) => {
                    warn!(
                        "Failed to parse {:?} ({}). Falling back to default showcase settings.",
                        path, err
                    );
                    ShowcaseSettings::default()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                info!(
                    "Showcase settings file {:?} not found. Using default settings.",
                    path
                );
                ShowcaseSettings::default()
            }
            Err(err) => {
                warn!(
                    "Failed to read {:?} ({}). Falling back to default showcase settings.",
                    path, err
                );
                ShowcaseSettings::default()
            }
        }
    }

    /// Parses and validates; cosmetic fields out of range fall back to their
    /// defaults. Counts and records are kept as given so mounting rejects them.
    pub fn from_json_str(contents: &str) -> Result<Self> {
        let settings: ShowcaseSettings = serde_json::from_str(contents)?;
        Ok(settings.validate())
    }

    fn validate(mut self) -> Self {
        if !(self.ambient.bob_amplitude.is_finite() && self.ambient.bob_amplitude >= 0.0) {
            warn!("Ambient bob amplitude must be a non-negative number. Using default value.");
            self.ambient.bob_amplitude = AmbientSettings::default_bob_amplitude();
        }

        if self.skills.radius.is_nan() || self.skills.radius <= 0.0 {
            warn!("Skill cloud radius must be greater than zero. Using default value.");
            self.skills.radius = SkillSettings::default_radius();
        }

        self
    }

    /// Checks counts and record lists the way the composers will at mount.
    pub fn check_records(&self) -> Result<()> {
        for count in [self.hero.particle_count, self.ambient.count] {
            if count < 0 {
                return Err(SceneError::NegativeCount(count));
            }
        }
        validate_records(&self.projects)?;
        validate_records(&self.skills.records)?;
        Ok(())
    }

    fn default_projects() -> Vec<ItemRecord> {
        vec![
            ItemRecord::new(1, "NEBULA", "Web Application")
                .with_accent("#ff6b6b")
                .with_technologies(["React", "Three.js", "TensorFlow", "Node.js"]),
            ItemRecord::new(2, "QUANTUM", "Interactive Installation")
                .with_accent("#4ecdc4")
                .with_technologies(["WebGL", "GSAP", "Web Audio API", "Next.js"]),
            ItemRecord::new(3, "INFINITY", "VR Experience")
                .with_accent("#a8e6cf")
                .with_technologies(["A-Frame", "Socket.io", "Express", "MongoDB"]),
            ItemRecord::new(4, "ECHO", "Creative Coding")
                .with_accent("#ffd93d")
                .with_technologies(["Three.js", "Web Audio API", "GLSL", "React"]),
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroSettings {
    #[serde(default = "HeroSettings::default_particle_count")]
    pub particle_count: i64,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "HeroSettings::default_orbit_camera")]
    pub orbit_camera: bool,
}

impl Default for HeroSettings {
    fn default() -> Self {
        Self {
            particle_count: Self::default_particle_count(),
            seed: None,
            orbit_camera: Self::default_orbit_camera(),
        }
    }
}

impl HeroSettings {
    const fn default_particle_count() -> i64 {
        1000
    }

    const fn default_orbit_camera() -> bool {
        true
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmbientSettings {
    #[serde(default = "AmbientSettings::default_count")]
    pub count: i64,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "AmbientSettings::default_bob_amplitude")]
    pub bob_amplitude: f32,
}

impl Default for AmbientSettings {
    fn default() -> Self {
        Self {
            count: Self::default_count(),
            seed: None,
            bob_amplitude: Self::default_bob_amplitude(),
        }
    }
}

impl AmbientSettings {
    const fn default_count() -> i64 {
        20
    }

    const fn default_bob_amplitude() -> f32 {
        0.12
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillSettings {
    #[serde(default = "SkillSettings::default_radius")]
    pub radius: f32,
    #[serde(default = "SkillSettings::default_records")]
    pub records: Vec<ItemRecord>,
}

impl Default for SkillSettings {
    fn default() -> Self {
        Self {
            radius: Self::default_radius(),
            records: Self::default_records(),
        }
    }
}

impl SkillSettings {
    const fn default_radius() -> f32 {
        2.0
    }

    fn default_records() -> Vec<ItemRecord> {
        [
            (1, "React", 95.0, "#61dafb"),
            (2, "Three.js", 90.0, "#ff6b6b"),
            (3, "WebGL", 85.0, "#4ecdc4"),
            (4, "GSAP", 88.0, "#a8e6cf"),
            (5, "Node.js", 82.0, "#ffd93d"),
            (6, "TypeScript", 87.0, "#6b5b95"),
        ]
        .into_iter()
        .map(|(id, name, level, color)| {
            ItemRecord::new(id, name, "skill")
                .with_accent(color)
                .with_magnitude(level)
        })
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_page_content() {
        let settings = ShowcaseSettings::default();
        assert_eq!(settings.projects.len(), 4);
        assert_eq!(settings.skills.records.len(), 6);
        assert_eq!(settings.ambient.count, 20);
        assert_eq!(settings.hero.particle_count, 1000);
        assert!(settings.check_records().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let settings = ShowcaseSettings::from_json_str(r#"{ "ambient": { "count": 50, "seed": 9 } }"#)
            .unwrap();
        assert_eq!(settings.ambient.count, 50);
        assert_eq!(settings.ambient.seed, Some(9));
        assert_eq!(settings.ambient.bob_amplitude, 0.12);
        assert_eq!(settings.projects.len(), 4);
    }

    #[test]
    fn invalid_values_fall_back() {
        let settings = ShowcaseSettings::from_json_str(
            r#"{ "ambient": { "bob_amplitude": -1.0 }, "skills": { "radius": 0.0 } }"#,
        )
        .unwrap();
        assert_eq!(settings.ambient.bob_amplitude, 0.12);
        assert_eq!(settings.skills.radius, 2.0);
    }

    #[test]
    fn negative_counts_survive_loading_and_fail_the_check() {
        let settings =
            ShowcaseSettings::from_json_str(r#"{ "ambient": { "count": -3 } }"#).unwrap();
        assert_eq!(settings.ambient.count, -3);
        assert!(matches!(
            settings.check_records(),
            Err(SceneError::NegativeCount(-3))
        ));

        let mut hero = ShowcaseSettings::default();
        hero.hero.particle_count = -1;
        assert!(matches!(
            hero.check_records(),
            Err(SceneError::NegativeCount(-1))
        ));
    }

    #[test]
    fn records_use_camel_case_fields() {
        let settings = ShowcaseSettings::from_json_str(
            r##"{ "projects": [ { "id": 7, "label": "ORBIT", "category": "Demo", "accentColor": "#00ff00" } ] }"##,
        )
        .unwrap();
        assert_eq!(settings.projects[0].accent_color.as_deref(), Some("#00ff00"));
        assert!(settings.projects[0].technologies.is_empty());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(ShowcaseSettings::from_json_str("{ not json").is_err());
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn missing_file_uses_defaults() {
        let settings = ShowcaseSettings::load_from_path("definitely/not/here/showcase.json");
        assert_eq!(settings.ambient.count, 20);
    }
}
