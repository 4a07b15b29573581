//! Cat Catch entry point
//!
//! Handles platform-specific initialization and runs the game loop.

use cat_catch::sim::GameEvent;

/// Log a simulation event at the level it deserves
fn log_event(event: &GameEvent) {
    match event {
        GameEvent::CatSpawned { .. } | GameEvent::CatExpired { .. } => {
            log::trace!("{:?}", event)
        }
        GameEvent::CatCaught { kind, delta, .. } => log::debug!("Caught {:?} ({:+})", kind, delta),
        GameEvent::SpeedUp { level } => log::info!("Speed up! (level {})", level),
        GameEvent::GameOver {
            score,
            new_high_score,
        } => {
            if *new_high_score {
                log::info!("Final score {} - new high score!", score);
            } else {
                log::info!("Final score {}", score);
            }
        }
        GameEvent::Started | GameEvent::Restarted => log::debug!("{:?}", event),
    }
}

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{FocusEvent, HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use cat_catch::Settings;
    use cat_catch::platform;
    use cat_catch::renderer::{Canvas2dRenderer, DomHud, HudMirror, RenderSink};
    use cat_catch::sim::{GameState, KeySampler, TickInput, frame};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        renderer: Canvas2dRenderer,
        hud: DomHud,
        mirror: HudMirror,
        keys: KeySampler,
        input: TickInput,
    }

    impl Game {
        /// Advance one display frame
        fn update(&mut self, now_ms: f64) {
            self.input.keys = self.keys.held();
            frame(&mut self.state, &self.input, now_ms);

            // Clear one-shot inputs after processing
            self.input.start = false;
            self.input.restart = false;

            for event in self.state.drain_events() {
                super::log_event(&event);
            }
        }

        /// Render the current frame and mirror the HUD
        fn render(&mut self, now_ms: f64) {
            if let Err(e) = self.renderer.render(&self.state, now_ms) {
                log::warn!("Render error: {:?}", e);
            }
            self.mirror.sync(&self.state, &mut self.hud);
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Cat Catch starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .ok_or_else(|| JsValue::from_str("no #gameCanvas"))?
            .dyn_into()?;

        let settings = Settings::load();
        let seed = platform::run_seed(settings.seed);
        let state = GameState::new(seed, settings.mode, settings.tuning());
        log::info!("Game initialized with seed: {}", seed);

        let game = Rc::new(RefCell::new(Game {
            state,
            renderer: Canvas2dRenderer::new(&canvas)?,
            hud: DomHud::new(&document),
            mirror: HudMirror::new(),
            keys: KeySampler::new(),
            input: TickInput::default(),
        }));

        setup_input_handlers(&window, game.clone())?;
        setup_buttons(&document, &canvas, game.clone())?;

        // Render from the start; the simulation idles until Start
        request_animation_frame(game)?;

        log::info!("Cat Catch running!");
        Ok(())
    }

    fn setup_input_handlers(window: &web_sys::Window, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                let key = event.key();
                if g.keys.key_down(&key) {
                    // Stop arrows scrolling the page
                    event.prevent_default();
                    return;
                }
                match key.as_str() {
                    "Enter" => g.input.start = true,
                    "i" | "I" => {
                        g.input.autopilot = !g.input.autopilot;
                        log::info!("Autopilot: {}", g.input.autopilot);
                    }
                    _ => {}
                }
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Key up
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().keys.key_up(&event.key());
            });
            window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Window blur drops held keys, the key-ups will never arrive
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: FocusEvent| {
                game.borrow_mut().keys.clear();
            });
            window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn setup_buttons(
        document: &web_sys::Document,
        canvas: &HtmlCanvasElement,
        game: Rc<RefCell<Game>>,
    ) -> Result<(), JsValue> {
        for (id, restart) in [("startBtn", false), ("restartBtn", true)] {
            let Some(btn) = document.get_element_by_id(id) else {
                log::warn!("Button #{} not found", id);
                continue;
            };

            let game = game.clone();
            let canvas = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut g = game.borrow_mut();
                if restart {
                    g.input.restart = true;
                } else {
                    g.input.start = true;
                }
                // Keyboard controls work straight away
                if let Err(e) = canvas.focus() {
                    log::warn!("Failed to focus canvas: {:?}", e);
                }
            });
            btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        window.request_animation_frame(closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            let now = platform::now_ms();
            g.update(now);
            g.render(now);
        }

        // Keep rendering in every phase so the game over overlay persists
        if let Err(e) = request_animation_frame(game) {
            log::error!("Failed to schedule frame: {:?}", e);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_game::run() {
        log::error!("Startup failed: {:?}", e);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Frames per simulated second in the headless demo
#[cfg(not(target_arch = "wasm32"))]
const DEMO_FPS: f64 = 60.0;

/// Play rounds on autopilot against a simulated clock and print each final frame
#[cfg(not(target_arch = "wasm32"))]
fn run_headless(settings: &cat_catch::Settings, rounds: u32) {
    use cat_catch::platform;
    use cat_catch::renderer::{AsciiRenderer, HudMirror, LogHud, RenderSink};
    use cat_catch::sim::{GamePhase, GameState, TickInput, frame};

    let seed = platform::run_seed(settings.seed);
    let mut state = GameState::new(seed, settings.mode, settings.tuning());
    let mut renderer = AsciiRenderer::default();
    let mut hud = LogHud;
    let mut mirror = HudMirror::new();
    log::info!("Headless {} session, seed {}", settings.mode.as_str(), seed);

    let frame_ms = 1000.0 / DEMO_FPS;
    let mut now = platform::now_ms();

    for round in 1..=rounds {
        let mut input = TickInput {
            start: true,
            autopilot: true,
            ..Default::default()
        };

        loop {
            frame(&mut state, &input, now);
            input.start = false;
            for event in state.drain_events() {
                log_event(&event);
            }
            let Ok(()) = renderer.render(&state, now);
            mirror.sync(&state, &mut hud);

            if state.phase == GamePhase::GameOver {
                break;
            }
            now += frame_ms;
        }

        println!("--- Round {} ---", round);
        println!("{}", renderer.frame());
    }

    println!("--- Session leaderboard ---");
    for (rank, entry) in state.high_scores.entries.iter().enumerate() {
        println!("{:>2}. {:>4}  ({})", rank + 1, entry.score, entry.mode.as_str());
    }
    println!("High score: {}", state.high_scores.best());
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Cat Catch (native) starting...");
    log::info!("Native mode plays on autopilot - run with `trunk serve` for the web version");

    let settings = cat_catch::Settings::load();
    run_headless(&settings, 2);
}
