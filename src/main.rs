//! Flappy Craft entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent,
    };

    use flappy_craft::flavor::{
        FlavorText, StaticFlavor, boss_announcement, status_banner, wants_lore,
    };
    use flappy_craft::renderer::build_frame;
    use flappy_craft::sim::{Biome, Engine, EngineObserver};
    use flappy_craft::{BestScore, FrameHandle, FrameScheduler, Settings, SimulationClock};

    type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

    /// requestAnimationFrame-backed scheduler
    struct BrowserScheduler {
        window: web_sys::Window,
        callback: FrameCallback,
    }

    impl FrameScheduler for BrowserScheduler {
        fn request_frame(&mut self) -> Option<FrameHandle> {
            let callback = self.callback.borrow();
            let cb = callback.as_ref()?;
            match self.window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                Ok(id) => Some(FrameHandle(id)),
                Err(err) => {
                    log::error!("requestAnimationFrame failed: {:?}", err);
                    None
                }
            }
        }

        fn cancel_frame(&mut self, handle: FrameHandle) {
            let _ = self.window.cancel_animation_frame(handle.0);
        }
    }

    /// Page-side reactions to engine signals
    #[derive(Default)]
    struct PageObserver {
        best: BestScore,
        last_score: u32,
        message: String,
        biome_changed: Option<Biome>,
    }

    impl EngineObserver for PageObserver {
        fn on_score_update(&mut self, score: u32) {
            self.last_score = score;
            if let Some(line) = boss_announcement(score) {
                self.message = line.to_string();
            }
        }

        fn on_biome_change(&mut self, biome: Biome) {
            self.biome_changed = Some(biome);
        }

        fn on_game_over(&mut self, final_score: u32) {
            if self.best.record(final_score) {
                self.best.save();
            }
            self.message = StaticFlavor.death_message(final_score);
            log::info!("Game over: {} (best {})", final_score, self.best.best());
        }
    }

    type Clock = SimulationClock<BrowserScheduler, PageObserver>;

    fn draw(ctx: &CanvasRenderingContext2d, clock: &Clock) {
        let snapshot = clock.snapshot();
        for quad in build_frame(&snapshot) {
            let [r, g, b, a] = quad.color;
            ctx.set_fill_style_str(&format!(
                "rgba({},{},{},{})",
                (r * 255.0) as u8,
                (g * 255.0) as u8,
                (b * 255.0) as u8,
                a
            ));
            let [x, y] = quad.position;
            let [w, h] = quad.size;
            if quad.rotation != 0.0 {
                ctx.save();
                let _ = ctx.translate((x + w / 2.0) as f64, (y + h / 2.0) as f64);
                let _ = ctx.rotate(quad.rotation as f64);
                ctx.fill_rect((-w / 2.0) as f64, (-h / 2.0) as f64, w as f64, h as f64);
                ctx.restore();
            } else {
                ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
            }
        }

        // HUD
        let observer = clock.observer();
        let width = snapshot.layout.width() as f64;
        ctx.set_fill_style_str("#ffffff");
        ctx.set_font("bold 28px monospace");
        let _ = ctx.fill_text(&observer.last_score.to_string(), width / 2.0, 50.0);
        ctx.set_font("14px monospace");
        let _ = ctx.fill_text(&format!("BEST {}", observer.best.best()), 20.0, 30.0);
        if let Some(banner) = status_banner(&snapshot) {
            let _ = ctx.fill_text(banner, 20.0, 80.0);
        }
        if !observer.message.is_empty() {
            let _ = ctx.fill_text(&observer.message, 20.0, 105.0);
        }
    }

    /// Space, click and tap: impulse while running, (re)start otherwise
    fn press(clock: &Rc<RefCell<Clock>>, settings: &Settings) {
        let mut c = clock.borrow_mut();
        if c.is_running() {
            c.trigger_impulse();
            return;
        }
        c.observer_mut().last_score = 0;
        c.observer_mut().message.clear();
        if let Err(err) = c.start(settings.to_start_params()) {
            log::error!("Cannot start: {}", err);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Flappy Craft starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");
        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no #canvas element")
            .dyn_into()
            .expect("#canvas is not a canvas");
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let settings = Settings::default();
        canvas.set_width(settings.layout.width() as u32);
        canvas.set_height(settings.layout.height() as u32);

        let callback: FrameCallback = Rc::new(RefCell::new(None));
        let seed = js_sys::Date::now() as u64;
        let observer = PageObserver {
            best: BestScore::load(),
            ..Default::default()
        };
        let clock: Rc<RefCell<Clock>> = Rc::new(RefCell::new(SimulationClock::new(
            Engine::new(settings.layout, seed),
            BrowserScheduler {
                window: window.clone(),
                callback: callback.clone(),
            },
            observer,
        )));

        // Frame loop
        {
            let clock = clock.clone();
            let ctx = ctx.clone();
            *callback.borrow_mut() = Some(Closure::new(move |_time: f64| {
                let mut c = clock.borrow_mut();
                if let Some(handle) = c.pending_frame() {
                    c.on_frame(handle);
                }
                if let Some(biome) = c.observer_mut().biome_changed.take() {
                    if wants_lore(&c.snapshot()) {
                        let lore = StaticFlavor.biome_lore(biome);
                        c.observer_mut().message = lore;
                    }
                }
                draw(&ctx, &c);
            }));
        }

        // Keyboard
        {
            let clock = clock.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if event.code() == "Space" {
                    event.prevent_default();
                    press(&clock, &settings);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse
        {
            let clock = clock.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                press(&clock, &settings);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch
        {
            let clock = clock.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                press(&clock, &settings);
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        draw(&ctx, &clock.borrow());
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use flappy_craft::flavor::{FlavorText, StaticFlavor, boss_announcement};
    use flappy_craft::sim::{Engine, GameEvent, GamePhase};
    use flappy_craft::{BestScore, Settings};

    env_logger::init();
    log::info!("Flappy Craft (native) starting...");
    log::info!("Native mode runs a headless autopilot demo - use the wasm build to play");

    let mut settings = Settings::default();
    settings.set_skin(flappy_craft::sim::Skin::Chicken);
    settings.set_autopilot(true);

    let mut engine = Engine::new(settings.layout, rand::random::<u64>());
    if let Err(err) = engine.start(settings.to_start_params()) {
        log::error!("Cannot start demo: {}", err);
        std::process::exit(1);
    }

    // Five minutes of frames at 60 Hz
    const MAX_FRAMES: u32 = 60 * 60 * 5;
    for _ in 0..MAX_FRAMES {
        for event in engine.tick() {
            match event {
                GameEvent::ScoreUpdated(score) => {
                    if let Some(line) = boss_announcement(score) {
                        println!("{}", line);
                    }
                }
                GameEvent::BiomeChanged(biome) => println!("{}", StaticFlavor.biome_lore(biome)),
                GameEvent::GameOver { final_score } => {
                    println!("{}", StaticFlavor.death_message(final_score));
                }
                _ => {}
            }
        }
        if engine.phase() != GamePhase::Active {
            break;
        }
    }

    let mut best = BestScore::load();
    best.record(engine.score());
    best.save();
    println!("Demo finished with score {} (best {})", engine.score(), best.best());
}
