pub mod app;
pub mod asset;
pub mod color;
pub mod composers;
pub mod error;
pub mod geometry;
pub mod scene;
pub mod settings;
pub mod time;

pub use app::ShowcaseApp;
pub use composers::{SceneComposer, ShowcaseScene};
pub use error::{Result, SceneError};
pub use settings::ShowcaseSettings;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
pub fn init_logging() {
    // Set panic hook to get better error messages
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));
    let _ = console_log::init_with_level(log::Level::Info);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging() {
    let _ = env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .try_init();
}

/// Mounts every section and drives it at `rate_hz` for `seconds` of scene
/// time without a render surface.
pub fn run_headless(settings: &ShowcaseSettings, seconds: f64, rate_hz: f64) -> Result<ShowcaseApp> {
    let mut app = ShowcaseApp::from_settings(settings)?;

    let frames = (seconds * rate_hz).max(0.0).round() as u64;
    log::info!(
        "Driving {} scenes for {:.1}s at {} Hz ({} frames)",
        app.scenes().len(),
        seconds,
        rate_hz,
        frames
    );
    for frame in 0..=frames {
        app.tick_at(frame as f64 / rate_hz);
    }

    app.log_summary();
    Ok(app)
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    init_logging();
    log::info!("Starting showcase scenes - WebAssembly");
}

/// Page-side handle; the host calls `frame` from its animation loop.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub struct WebShowcase {
    app: ShowcaseApp,
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl WebShowcase {
    #[wasm_bindgen(constructor)]
    pub fn new(settings_json: Option<String>) -> std::result::Result<WebShowcase, JsValue> {
        let settings = match settings_json {
            Some(json) => ShowcaseSettings::from_json_str(&json)
                .map_err(|err| JsValue::from_str(&err.to_string()))?,
            None => ShowcaseSettings::load(),
        };
        let app = ShowcaseApp::from_settings(&settings)
            .map_err(|err| JsValue::from_str(&err.to_string()))?;
        Ok(Self { app })
    }

    pub fn frame(&mut self) {
        self.app.frame(time::Instant::now());
    }

    pub fn scene_count(&self) -> usize {
        self.app.scenes().len()
    }
}
