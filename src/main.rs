use showcase_scenes::{init_logging, run_headless, ShowcaseSettings};

const RUN_SECONDS: f64 = 5.0;
const FRAME_RATE: f64 = 60.0;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    init_logging();

    let settings = match std::env::args().nth(1) {
        Some(path) => ShowcaseSettings::load_from_path(path),
        None => ShowcaseSettings::load(),
    };

    match run_headless(&settings, RUN_SECONDS, FRAME_RATE) {
        Ok(mut app) => {
            let released = app.shutdown();
            log::info!("Shutdown complete, {} entities released", released);
        }
        Err(err) => {
            log::error!("Showcase failed to mount: {}", err);
            std::process::exit(1);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {}
