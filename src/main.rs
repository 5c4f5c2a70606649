//! Pin Orbit entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent, TouchEvent};

    use pin_orbit::Game;
    use pin_orbit::consts::SIM_DT;
    use pin_orbit::persistence::LocalStorageStore;
    use pin_orbit::renderer::{Frame, RenderError, RenderState};
    use pin_orbit::tuning::Tuning;

    /// Browser-side wrapper: game plus GPU state and frame timing
    struct App {
        game: Game<LocalStorageStore>,
        render_state: Option<RenderState>,
        last_time: f64,
    }

    impl App {
        /// Render the current frame
        fn render(&mut self, frame: &Frame) {
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(frame) {
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

    /// Update HUD elements in DOM
    fn update_hud(frame: &Frame) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if let Some(el) = document.get_element_by_id("hud-score") {
            if el.text_content().as_deref() != Some(frame.hud.score.as_str()) {
                el.set_text_content(Some(&frame.hud.score));
            }
        }
        if let Some(el) = document.get_element_by_id("hud-best") {
            if el.text_content().as_deref() != Some(frame.hud.best.as_str()) {
                el.set_text_content(Some(&frame.hud.best));
            }
        }
    }

    /// Place HUD rows at their canvas heights (percent of the canvas)
    fn place_hud(document: &web_sys::Document, tuning: &Tuning) {
        for (id, y) in [("hud-score", tuning.score_y), ("hud-best", tuning.best_score_y)] {
            if let Some(el) = document
                .get_element_by_id(id)
                .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
            {
                let top = format!("{}%", y / tuning.height * 100.0);
                let _ = el.style().set_property("top", &top);
            }
        }
    }

    async fn init_gpu(
        canvas: &HtmlCanvasElement,
        tuning: &Tuning,
        width: u32,
        height: u32,
    ) -> Result<RenderState, RenderError> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        RenderState::new(surface, &adapter, width, height, (tuning.width, tuning.height)).await
    }

    pub async fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        log::info!("Pin Orbit starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or("no canvas")?
            .dyn_into()?;

        let seed = js_sys::Date::now() as u64;
        let game = Game::new(seed, LocalStorageStore::new("pin_orbit_"));
        let tuning = game.state.tuning.clone();
        place_hud(&document, &tuning);

        // Backing store at device resolution, logical size fixed by CSS
        let dpr = window.device_pixel_ratio();
        let width = (f64::from(tuning.width) * dpr) as u32;
        let height = (f64::from(tuning.height) * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let render_state = match init_gpu(&canvas, &tuning, width, height).await {
            Ok(state) => Some(state),
            Err(e) => {
                log::error!("WebGPU unavailable: {}", e);
                None
            }
        };

        let app = Rc::new(RefCell::new(App {
            game,
            render_state,
            last_time: 0.0,
        }));

        setup_input_handlers(&canvas, app.clone());

        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        request_animation_frame(app);
        log::info!("Pin Orbit running!");
        Ok(())
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        // Mouse click
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                event.prevent_default();
                app.borrow_mut().game.click();
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                app.borrow_mut().game.click();
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        {
            let mut a = app.borrow_mut();

            let dt = if a.last_time > 0.0 {
                ((time - a.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            a.last_time = time;

            a.game.update(dt);
            let frame = a.game.frame();
            a.render(&frame);
            update_hud(&frame);
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run().await
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use pin_orbit::Game;
    use pin_orbit::consts::SIM_DT;
    use pin_orbit::persistence::MemoryStore;

    env_logger::init();
    log::info!("Pin Orbit (native) starting...");
    log::info!("Native mode runs a headless demo - run with `trunk serve` for the web version");

    // Throw a pin every half second for twenty simulated seconds
    let mut game = Game::new(0x5eed, MemoryStore::new());
    let frames = (20.0 / SIM_DT) as u32;
    for frame in 0..frames {
        if frame % 30 == 0 {
            game.click();
        }
        game.update(SIM_DT);
    }

    println!(
        "Demo finished: {} pins thrown, score {}, best {}",
        game.state.pins_thrown,
        game.scores.current(),
        game.scores.best()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
