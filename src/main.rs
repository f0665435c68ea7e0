//! Bubble Pop entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, MouseEvent, TouchEvent};

    use glam::Vec2;

    use bubble_pop::consts::SIM_DT;
    use bubble_pop::renderer::{RenderState, build_frame};
    use bubble_pop::{App, Autoplay, GameConfig, Screen};

    /// HUD label element IDs, in `Stats::hud_lines` order
    const HUD_IDS: [&str; 4] = ["hud-time", "hud-speed", "hud-hits", "hud-lives"];
    /// Summary label element IDs, in `Stats::summary_lines` order
    const SUMMARY_IDS: [&str; 6] = [
        "summary-title",
        "summary-time",
        "summary-hits",
        "summary-accuracy",
        "summary-speed",
        "summary-prompt",
    ];

    /// Game instance holding all state
    struct Game {
        app: App,
        render_state: Option<RenderState>,
        last_time: f64,
        /// Screen shown on the previous frame (for DOM toggles)
        last_screen: Screen,
        /// Loop stops once the exit screen has been shown
        stopped: bool,
    }

    impl Game {
        fn new(app: App) -> Self {
            Self {
                app,
                render_state: None,
                last_time: 0.0,
                last_screen: Screen::Playing,
                stopped: false,
            }
        }

        /// Convert canvas CSS pixels to logical game pixels
        fn to_game_coords(&self, canvas: &HtmlCanvasElement, x: f32, y: f32) -> Vec2 {
            let config = self.app.config();
            let w = canvas.client_width().max(1) as f32;
            let h = canvas.client_height().max(1) as f32;
            Vec2::new(x * config.screen_w / w, y * config.screen_h / h)
        }

        /// Run one simulation frame
        fn update(&mut self, dt: f32) {
            // Large gaps (tab in background) count as a single frame
            let dt = dt.clamp(0.0, 0.1);
            if let Err(e) = self.app.frame(dt) {
                log::error!("Frame rejected: {}", e);
                self.app.on_close();
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            let vertices = build_frame(&self.app);
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&vertices) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Update HUD and summary elements in DOM
        fn update_hud(&mut self, document: &Document) {
            let stats = self.app.stats();
            let screen = self.app.screen();

            if screen == Screen::Playing {
                for (id, text) in HUD_IDS.iter().zip(stats.hud_lines()) {
                    if let Some(el) = document.get_element_by_id(id) {
                        el.set_text_content(Some(&text));
                    }
                }
            }

            if screen == self.last_screen {
                return;
            }
            self.last_screen = screen;

            match screen {
                Screen::Playing => {}
                Screen::Summary => {
                    for (id, text) in SUMMARY_IDS.iter().zip(stats.summary_lines()) {
                        if let Some(el) = document.get_element_by_id(id) {
                            el.set_text_content(Some(&text));
                        }
                    }
                    set_hidden(document, "hud", true);
                    set_hidden(document, "game-over", false);
                }
                Screen::Exited => {
                    set_hidden(document, "hud", true);
                    set_hidden(document, "game-over", true);
                    set_hidden(document, "canvas", true);
                    set_hidden(document, "goodbye", false);
                    self.stopped = true;
                    log::info!("Bubble Pop stopped (exit code {})", self.app.exit_code());
                }
            }
        }
    }

    fn set_hidden(document: &Document, id: &str, hidden: bool) {
        if let Some(el) = document.get_element_by_id(id) {
            let _ = el.set_attribute("class", if hidden { "hidden" } else { "" });
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Bubble Pop starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // Hide loading indicator
        set_hidden(&document, "loading", true);

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let config = GameConfig::load();
        let seed = config.seed.unwrap_or(js_sys::Date::now() as u64);
        let logical_size = (config.screen_w, config.screen_h);

        // Backing store at device resolution, drawn in logical coordinates
        let dpr = window.device_pixel_ratio();
        let width = (config.screen_w as f64 * dpr) as u32;
        let height = (config.screen_h as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let app = match App::new(config, seed) {
            Ok(app) => app,
            Err(e) => {
                log::error!("Cannot start: {}", e);
                return;
            }
        };
        let game = Rc::new(RefCell::new(Game::new(app)));

        log::info!("Game initialized with seed: {}", seed);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        match RenderState::new(surface, &adapter, width, height, logical_size).await {
            Ok(render_state) => game.borrow_mut().render_state = Some(render_state),
            Err(e) => log::error!("Failed to create device: {}", e),
        }

        setup_input_handlers(&canvas, game.clone());

        set_hidden(&document, "hud", false);

        // Start game loop
        request_animation_frame(game);

        log::info!("Bubble Pop running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Mouse click
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut g = game.borrow_mut();
                let pos =
                    g.to_game_coords(&canvas_clone, event.offset_x() as f32, event.offset_y() as f32);
                g.app.on_click(pos);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start counts as a click
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.changed_touches().get(0) {
                    let mut g = game.borrow_mut();
                    let rect = canvas_clone.get_bounding_client_rect();
                    let x = touch.client_x() as f32 - rect.left() as f32;
                    let y = touch.client_y() as f32 - rect.top() as f32;
                    let pos = g.to_game_coords(&canvas_clone, x, y);
                    g.app.on_click(pos);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard
        {
            let window = web_sys::window().unwrap();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "i" | "I" if g.app.screen() == Screen::Playing => {
                        let enabled = !g.app.autoplay_enabled();
                        g.app.set_autoplay(enabled.then(|| Autoplay::new(20)));
                        log::info!("Autoplay: {}", enabled);
                    }
                    _ => g.app.on_key(),
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let stopped = {
            let mut g = game.borrow_mut();

            // Calculate delta time
            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt);
            g.render();
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                g.update_hud(&document);
            }
            g.stopped
        };

        if !stopped {
            request_animation_frame(game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

/// Simulated seconds before the headless demo gives up
#[cfg(not(target_arch = "wasm32"))]
const DEMO_MAX_SECS: f32 = 600.0;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use bubble_pop::consts::SIM_DT;
    use bubble_pop::{App, Autoplay, GameConfig, Screen};

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Bubble Pop (native) starting...");
    log::info!("Native mode runs a headless autoplay demo - run with `trunk serve` to play");

    let config = GameConfig::load();
    let seed = config.seed.unwrap_or_else(clock_seed);
    log::info!("Demo seed: {}", seed);

    let mut app = match App::new(config, seed) {
        Ok(app) => app,
        Err(e) => {
            log::error!("Cannot start: {}", e);
            std::process::exit(1);
        }
    };
    // Clicks slower than the spawn cadence so the demo eventually runs out of lives
    app.set_autoplay(Some(Autoplay::new(24)));

    let max_frames = (DEMO_MAX_SECS / SIM_DT) as u32;
    let report_every = (5.0 / SIM_DT) as u32;
    for frame in 1..=max_frames {
        if let Err(e) = app.frame(SIM_DT) {
            log::error!("Frame rejected: {}", e);
            break;
        }
        if app.screen() != Screen::Playing {
            break;
        }
        if frame % report_every == 0 {
            log::info!("{}", app.stats().hud_lines().join("  "));
        }
    }

    if app.screen() == Screen::Summary {
        println!();
        for line in app.stats().summary_lines() {
            println!("{}", line);
        }
        // Stand-in for the player's key press on the summary screen
        app.on_key();
    } else {
        app.on_close();
    }

    std::process::exit(app.exit_code());
}

#[cfg(not(target_arch = "wasm32"))]
fn clock_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
