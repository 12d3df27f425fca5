// app.rs
// Host-side driver: owns every mounted scene and its clock.

use crate::composers::ShowcaseScene;
use crate::error::Result;
use crate::scene::Scene;
use crate::settings::ShowcaseSettings;
use crate::time::{Instant, SceneClock};

/// A scene plus the clock that feeds it elapsed time.
pub struct MountedScene {
    pub section: ShowcaseScene,
    pub scene: Scene,
    clock: SceneClock,
    visible: bool,
}

impl MountedScene {
    pub fn new(section: ShowcaseScene, scene: Scene) -> Self {
        Self {
            section,
            scene,
            clock: SceneClock::new(),
            visible: true,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn clock(&self) -> &SceneClock {
        &self.clock
    }
}

pub struct ShowcaseApp {
    scenes: Vec<MountedScene>,
}

impl ShowcaseApp {
    /// Mounts every section the settings describe. Fails on the first scene
    /// whose configuration is invalid; nothing is kept from a failed mount.
    pub fn from_settings(settings: &ShowcaseSettings) -> Result<Self> {
        settings.check_records()?;
        let mut scenes = Vec::new();
        for section in ShowcaseScene::sections(settings) {
            let scene = section.mount(settings)?;
            scenes.push(MountedScene::new(section, scene));
        }
        log::info!("Showcase ready with {} scenes", scenes.len());
        Ok(Self { scenes })
    }

    pub fn scenes(&self) -> &[MountedScene] {
        &self.scenes
    }

    pub fn scene(&self, section: ShowcaseScene) -> Option<&Scene> {
        self.scenes
            .iter()
            .find(|mounted| mounted.section == section)
            .map(|mounted| &mounted.scene)
    }

    /// Samples each visible scene's clock at `now` and ticks it.
    pub fn frame(&mut self, now: Instant) {
        for mounted in self.scenes.iter_mut().filter(|m| m.visible) {
            let elapsed = mounted.clock.sample(now);
            mounted.scene.tick(elapsed);
        }
    }

    /// Ticks every visible scene at the same elapsed time, bypassing the
    /// clocks. Used by headless runs and tests.
    pub fn tick_at(&mut self, elapsed: f64) {
        for mounted in self.scenes.iter_mut().filter(|m| m.visible) {
            mounted.scene.tick(elapsed);
        }
    }

    /// Hidden scenes stop ticking and their clocks pause, so they resume
    /// without a jump.
    pub fn set_visible(&mut self, section: ShowcaseScene, visible: bool, now: Instant) {
        let Some(mounted) = self.scenes.iter_mut().find(|m| m.section == section) else {
            log::warn!("No mounted scene for {:?}", section);
            return;
        };
        if mounted.visible == visible {
            return;
        }
        mounted.visible = visible;
        if visible {
            mounted.clock.resume(now);
        } else {
            mounted.clock.pause(now);
        }
        log::debug!("Scene {:?} visible: {}", section, visible);
    }

    /// Tears down one scene; returns the number of entities released.
    pub fn unmount(&mut self, section: ShowcaseScene) -> usize {
        let Some(position) = self.scenes.iter().position(|m| m.section == section) else {
            return 0;
        };
        let mut mounted = self.scenes.remove(position);
        mounted.scene.teardown()
    }

    /// Tears down every scene.
    pub fn shutdown(&mut self) -> usize {
        self.scenes
            .drain(..)
            .map(|mut mounted| mounted.scene.teardown())
            .sum()
    }

    pub fn log_summary(&self) {
        for mounted in &self.scenes {
            mounted.scene.log_summary();
        }
    }
}
