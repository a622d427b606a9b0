//! Flappy Gate entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent};

    use flappy_gate::Settings;
    use flappy_gate::consts::SIM_DT;
    use flappy_gate::platform::{HostEvent, command_for};
    use flappy_gate::renderer::{RenderState, Scene, TextRole, build_scene};
    use flappy_gate::sim::{FrameDriver, TickEvent};

    /// Game instance holding all state
    struct Game {
        driver: FrameDriver,
        render_state: Option<RenderState>,
        last_time: f64,
    }

    impl Game {
        fn new(settings: Settings, seed: u64) -> Self {
            Self {
                driver: FrameDriver::new(settings, seed),
                render_state: None,
                last_time: 0.0,
            }
        }

        /// Queue the command for a host event (applied on the next frame)
        fn handle(&mut self, event: HostEvent) {
            if let Some(command) = command_for(&event) {
                self.driver.push(command);
            }
        }

        /// Run simulation ticks
        fn update(&mut self, dt: f32) {
            let report = self.driver.frame(dt);
            if report.events.contains(&TickEvent::GameOver) {
                log::info!("Game over - score {}", self.driver.state().score);
            }
        }

        /// Render the current frame
        fn render(&mut self, scene: &Scene) {
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(scene) {
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
    }

    /// DOM element that shows the text of a given role
    fn element_id(role: TextRole) -> &'static str {
        match role {
            TextRole::Score => "hud-score",
            TextRole::GameOver => "game-over",
            TextRole::RestartPrompt => "restart-prompt",
        }
    }

    /// Position and fill the HUD text overlay, hiding roles absent from the scene
    fn update_hud(scene: &Scene, canvas: &HtmlCanvasElement) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let sx = canvas.client_width() as f32 / scene.width;
        let sy = canvas.client_height() as f32 / scene.height;

        for role in [TextRole::Score, TextRole::GameOver, TextRole::RestartPrompt] {
            let Some(el) = document.get_element_by_id(element_id(role)) else {
                continue;
            };
            match scene.texts().find(|t| t.role == role) {
                Some(text) => {
                    let [r, g, b, _] = text.color;
                    let style = format!(
                        "position:absolute;left:{}px;top:{}px;font:{}px Arial;color:rgb({},{},{})",
                        text.x * sx,
                        (text.y - text.size) * sy,
                        text.size * sy,
                        (r * 255.0) as u8,
                        (g * 255.0) as u8,
                        (b * 255.0) as u8,
                    );
                    let _ = el.set_attribute("style", &style);
                    let _ = el.set_attribute("class", "");
                    if el.text_content().as_deref() != Some(text.content.as_str()) {
                        el.set_text_content(Some(&text.content));
                    }
                }
                None => {
                    let _ = el.set_attribute("class", "hidden");
                }
            }
        }
    }

    pub async fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Flappy Gate starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or("no canvas")?
            .dyn_into()?;

        // Set canvas size
        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        // Initialize game
        let settings = Settings::load();
        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(settings, seed)));

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height)
            .await
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        game.borrow_mut().render_state = Some(render_state);

        // Set up input handlers
        setup_input_handlers(&canvas, game.clone())?;

        // Show HUD
        if let Some(hud) = document.get_element_by_id("hud") {
            let _ = hud.set_attribute("class", "");
        }

        // Start game loop
        request_animation_frame(game, canvas);

        log::info!("Flappy Gate running!");
        Ok(())
    }

    fn setup_input_handlers(
        canvas: &HtmlCanvasElement,
        game: Rc<RefCell<Game>>,
    ) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;

        // Keyboard
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if event.code() == "Space" {
                    event.prevent_default(); // Keep the page from scrolling
                }
                game.borrow_mut().handle(HostEvent::KeyDown(event.code()));
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Touch start (impulse)
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                game.borrow_mut().handle(HostEvent::TouchStart);
            });
            canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Touch move - never scroll the page while playing
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
            });
            canvas
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Touch end (restart when over)
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                game.borrow_mut().handle(HostEvent::TouchEnd);
            });
            canvas
                .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Mouse click
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().handle(HostEvent::MouseDown);
            });
            canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>, canvas: HtmlCanvasElement) {
        let Some(window) = web_sys::window() else {
            log::error!("No window; stopping game loop");
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, canvas, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, canvas: HtmlCanvasElement, time: f64) {
        {
            let mut g = game.borrow_mut();

            // Calculate delta time
            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt);
            let scene = build_scene(&g.driver.snapshot());
            g.render(&scene);
            update_hud(&scene, &canvas);
        }

        request_animation_frame(game, canvas);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run().await
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use flappy_gate::Settings;
    use flappy_gate::sim::{Command, FrameDriver, TickEvent};

    env_logger::init();
    log::info!("Flappy Gate (native) starting...");
    log::info!("Native mode runs headless - run with `trunk serve` for the web version");

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let mut driver = FrameDriver::new(Settings::load(), seed);

    // One minute of simulated play with a simple autopilot
    const MAX_TICKS: u32 = 60 * 60;
    let mut ticks = 0;
    while ticks < MAX_TICKS {
        if autopilot_wants_impulse(&driver) {
            driver.push(Command::Impulse);
        }
        let report = driver.step();
        ticks += report.ticks;
        if report.events.contains(&TickEvent::GameOver) {
            break;
        }
    }

    let snapshot = driver.snapshot();
    log::info!(
        "Headless run finished after {} ticks: score {}, game over: {}",
        ticks,
        snapshot.score,
        snapshot.is_game_over
    );
    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize snapshot: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Flap when falling below the middle of the next gap (or of the field)
#[cfg(not(target_arch = "wasm32"))]
fn autopilot_wants_impulse(driver: &flappy_gate::sim::FrameDriver) -> bool {
    let state = driver.state();
    let sprite = &state.sprite;
    let field_height = state.settings.field_height;

    let target = state
        .obstacles
        .iter()
        .find(|o| o.right() > sprite.pos.x)
        .map(|o| (o.top + o.bottom.min(field_height)) / 2.0)
        .unwrap_or(field_height / 2.0);

    sprite.vel > 0.0 && sprite.pos.y + sprite.height / 2.0 > target + sprite.height
}
