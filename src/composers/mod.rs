//! The four showcase scenes.
//!
//! A composer validates its inputs and generates descriptors before it
//! spawns anything, so a configuration error leaves the scene empty.

pub mod ambient;
pub mod hero;
pub mod showcase;
pub mod skills;

pub use ambient::AmbientComposer;
pub use hero::HeroComposer;
pub use showcase::{ProjectComposer, ProjectGallery};
pub use skills::SkillsComposer;

use crate::color::Color;
use crate::error::{Result, SceneError};
use crate::scene::components::{AmbientLight, PointLight};
use crate::scene::Scene;
use crate::settings::ShowcaseSettings;
use glam::Vec3;

pub trait SceneComposer {
    fn name(&self) -> &str;

    /// Adds lights, camera, fixtures and generated objects to `scene`.
    fn compose(&self, scene: &mut Scene) -> Result<()>;
}

/// Builds one scene from several composers layered into the same world.
///
/// The scene is ticked once at time zero so world transforms are valid
/// before the first frame.
pub fn mount(name: &str, composers: &[Box<dyn SceneComposer>]) -> Result<Scene> {
    let mut scene = Scene::new(name);
    for composer in composers {
        log::debug!("Composing '{}' into '{}'", composer.name(), name);
        composer.compose(&mut scene)?;
    }
    scene.tick(0.0);
    log::info!(
        "Mounted scene '{}': {} animated objects, {} entities",
        name,
        scene.object_count(),
        scene.world.len()
    );
    Ok(scene)
}

/// Sections of the page that host a live scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShowcaseScene {
    /// Hero centerpiece with the floating shapes around it.
    Hero,
    Project(usize),
    /// Every project on one circle.
    Gallery,
    Skills,
}

impl ShowcaseScene {
    /// Sections in page order for the given settings.
    pub fn sections(settings: &ShowcaseSettings) -> Vec<ShowcaseScene> {
        let mut sections = vec![ShowcaseScene::Hero];
        if settings.gallery {
            sections.push(ShowcaseScene::Gallery);
        } else {
            sections.extend((0..settings.projects.len()).map(ShowcaseScene::Project));
        }
        sections.push(ShowcaseScene::Skills);
        sections
    }

    pub fn name(&self, settings: &ShowcaseSettings) -> String {
        match self {
            ShowcaseScene::Hero => "hero".to_string(),
            ShowcaseScene::Project(index) => settings
                .projects
                .get(*index)
                .map(|record| format!("project:{}", record.label))
                .unwrap_or_else(|| format!("project:{}", index)),
            ShowcaseScene::Gallery => "gallery".to_string(),
            ShowcaseScene::Skills => "skills".to_string(),
        }
    }

    pub fn composers(&self, settings: &ShowcaseSettings) -> Result<Vec<Box<dyn SceneComposer>>> {
        let composers: Vec<Box<dyn SceneComposer>> = match self {
            ShowcaseScene::Hero => vec![
                Box::new(HeroComposer::new(&settings.hero)),
                Box::new(AmbientComposer::new(&settings.ambient)),
            ],
            ShowcaseScene::Project(index) => {
                let record = settings.projects.get(*index).ok_or(SceneError::UnknownProject {
                    index: *index,
                    available: settings.projects.len(),
                })?;
                vec![Box::new(ProjectComposer::new(record.clone()))]
            }
            ShowcaseScene::Gallery => vec![Box::new(ProjectGallery::new(settings.projects.clone()))],
            ShowcaseScene::Skills => vec![Box::new(SkillsComposer::new(&settings.skills))],
        };
        Ok(composers)
    }

    pub fn mount(&self, settings: &ShowcaseSettings) -> Result<Scene> {
        let composers = self.composers(settings)?;
        mount(&self.name(settings), &composers)
    }
}

/// Ambient fill plus a white point light up and to the right; shared by the
/// project and skill sections.
pub(crate) fn add_section_lights(scene: &mut Scene) {
    scene.add_ambient_light(AmbientLight {
        color: Color::WHITE,
        intensity: 0.5,
    });
    scene.add_point_light(
        PointLight {
            color: Color::WHITE,
            intensity: 1.0,
        },
        Vec3::new(10.0, 10.0, 10.0),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::config::ItemRecord;

    #[test]
    fn sections_follow_gallery_setting() {
        let mut settings = ShowcaseSettings::default();
        assert_eq!(
            ShowcaseScene::sections(&settings),
            vec![
                ShowcaseScene::Hero,
                ShowcaseScene::Project(0),
                ShowcaseScene::Project(1),
                ShowcaseScene::Project(2),
                ShowcaseScene::Project(3),
                ShowcaseScene::Skills,
            ]
        );

        settings.gallery = true;
        assert_eq!(
            ShowcaseScene::sections(&settings),
            vec![ShowcaseScene::Hero, ShowcaseScene::Gallery, ShowcaseScene::Skills]
        );
    }

    #[test]
    fn unknown_project_is_rejected() {
        let settings = ShowcaseSettings::default();
        let err = ShowcaseScene::Project(9).mount(&settings).err().unwrap();
        assert!(matches!(err, SceneError::UnknownProject { index: 9, available: 4 }));
    }

    #[test]
    fn failed_composer_mounts_nothing() {
        let mut settings = ShowcaseSettings::default();
        settings.skills.records.push(ItemRecord::new(99, "Rust", "skill"));
        let err = ShowcaseScene::Skills.mount(&settings).err().unwrap();
        assert!(err.is_configuration_error());
    }

    #[test]
    fn project_names_use_labels() {
        let settings = ShowcaseSettings::default();
        assert_eq!(ShowcaseScene::Project(1).name(&settings), "project:QUANTUM");
    }
}
