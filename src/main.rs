//! Warp Climb entry point
//!
//! Browser: builds the DOM scene and runs the game loop on
//! `requestAnimationFrame`. Native: plays a scripted headless session and
//! prints the final state.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{KeyboardEvent, PointerEvent};

    use warp_climb::assets::{AssetKind, AssetManifest};
    use warp_climb::audio::AudioManager;
    use warp_climb::consts::SIM_DT;
    use warp_climb::platform::WebEngine;
    use warp_climb::sim::SessionState;
    use warp_climb::{Game, Settings};

    /// Browser game: the driver plus frame timing
    struct App {
        game: Game<WebEngine>,
        settings: Settings,
        last_time: f64,
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Warp Climb starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let settings = Settings::load();
        let manifest = AssetManifest::for_profile(&settings.profile);
        let audio = AudioManager::new(&manifest, &settings);

        // Images load lazily through the DOM; audio elements must exist up front
        if let Err(e) = manifest.verify(|kind, key| kind != AssetKind::Audio || audio.has(key)) {
            log::error!("Asset loading failed: {e}");
            return;
        }

        let engine = match WebEngine::new(&document, manifest, audio, &SessionState::new()) {
            Ok(engine) => engine,
            Err(e) => {
                log::error!("Failed to build scene: {:?}", e);
                return;
            }
        };

        let app = Rc::new(RefCell::new(App {
            game: Game::new(engine, settings.profile),
            settings,
            last_time: 0.0,
        }));

        setup_input_handlers(app.clone());
        setup_mute_on_blur(app.clone());

        request_animation_frame(app);

        log::info!("Warp Climb running!");
    }

    fn set_key(app: &Rc<RefCell<App>>, code: &str, down: bool) {
        let mut a = app.borrow_mut();
        let input = &mut a.game.input;
        match code {
            "ArrowLeft" => input.left = down,
            "ArrowRight" => input.right = down,
            "ArrowUp" => input.up = down,
            _ => {}
        }
    }

    fn setup_input_handlers(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();

        for (name, down) in [("keydown", true), ("keyup", false)] {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                set_key(&app, &event.code(), down);
            });
            let _ = window.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Pointer release restarts under the click profile
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: PointerEvent| {
                app.borrow_mut().game.input.pointer_up = true;
            });
            let _ =
                window.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_mute_on_blur(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();

        for (name, muted) in [("blur", true), ("focus", false)] {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                let mut a = app.borrow_mut();
                if a.settings.mute_on_blur {
                    let muted = muted || a.settings.muted;
                    a.game.engine.audio.set_muted(muted);
                    log::info!("Audio muted: {}", muted);
                }
                // Keys released while unfocused never fire keyup
                if muted {
                    a.game.input = Default::default();
                }
            });
            let _ = window.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        {
            let mut a = app.borrow_mut();

            // Calculate delta time
            let dt = if a.last_time > 0.0 {
                ((time - a.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            a.last_time = time;

            a.game.update(dt);
            let App { game, .. } = &*a;
            game.engine.render(&game.state);
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use warp_climb::engine::HeadlessEngine;
    use warp_climb::{Game, Settings};

    env_logger::init();
    log::info!("Warp Climb (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("reading settings file {path}"))?;
            Settings::from_json(&json).with_context(|| format!("parsing settings file {path}"))?
        }
        None => Settings::default(),
    };

    let mut game = Game::new(HeadlessEngine::new(), settings.profile);
    let ticks = run_script(&mut game);

    log::info!(
        "Finished after {} ticks: {:?}, score {}",
        ticks,
        game.state.outcome(),
        game.state.score
    );
    println!("{}", serde_json::to_string_pretty(&game.state)?);
    Ok(())
}

/// Scripted key presses: (left, right, ticks held)
#[cfg(not(target_arch = "wasm32"))]
const SCRIPT: &[(bool, bool, u32)] = &[
    (false, true, 20),
    (false, false, 10),
    (true, false, 35),
    (false, false, 6),
    (false, true, 40),
    (false, false, 8),
    (true, false, 60),
];

/// Play the script until it runs out or the session ends
#[cfg(not(target_arch = "wasm32"))]
fn run_script(game: &mut warp_climb::Game<warp_climb::engine::HeadlessEngine>) -> u32 {
    let mut ticks = 0;
    for &(left, right, hold) in SCRIPT {
        game.input.left = left;
        game.input.right = right;
        for _ in 0..hold {
            game.step();
            ticks += 1;
            if game.state.game_over() {
                return ticks;
            }
        }
    }
    ticks
}
