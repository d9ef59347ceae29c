//! Math Snake entry point
//!
//! Handles platform-specific initialization and drives the game timer.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, HtmlInputElement, KeyboardEvent, MouseEvent};

    use math_snake::persistence::{LocalStorage, MemoryStorage, Storage};
    use math_snake::platform::WebDisplay;
    use math_snake::platform::web::ids;
    use math_snake::renderer::{RenderError, RenderState};
    use math_snake::sim::{AnswerOutcome, Direction, Grid};
    use math_snake::{Game, LoopControl};

    type WebGame = Game<WebDisplay, Box<dyn Storage>>;

    /// Game instance plus the interval driving it
    struct Shell {
        game: WebGame,
        window: web_sys::Window,
        /// Interval callback, created once and reused across restarts
        tick_fn: Option<js_sys::Function>,
        /// Active interval handle
        interval: Option<i32>,
    }

    impl Shell {
        fn start_timer(&mut self) {
            self.stop_timer();
            let Some(tick_fn) = &self.tick_fn else {
                log::error!("Timer callback not installed");
                return;
            };
            let period = self.game.settings().tick_interval_ms as i32;
            match self
                .window
                .set_interval_with_callback_and_timeout_and_arguments_0(tick_fn, period)
            {
                Ok(handle) => self.interval = Some(handle),
                Err(e) => log::error!("Failed to start timer: {:?}", e),
            }
        }

        fn stop_timer(&mut self) {
            if let Some(handle) = self.interval.take() {
                self.window.clear_interval_with_handle(handle);
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Math Snake starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let storage: Box<dyn Storage> = match LocalStorage::open() {
            Ok(storage) => Box::new(storage),
            Err(e) => {
                log::warn!("{}; scores will not persist", e);
                Box::new(MemoryStorage::new())
            }
        };

        let seed = js_sys::Date::now() as u64;
        let game = Game::new(
            seed,
            WebDisplay::new(window.clone(), document.clone()),
            storage,
        );
        log::info!("Game initialized with seed: {}", seed);

        let (width, height) = game.settings().canvas_size();
        let grid = game.settings().grid();

        let shell = Rc::new(RefCell::new(Shell {
            game,
            window: window.clone(),
            tick_fn: None,
            interval: None,
        }));

        let canvas: HtmlCanvasElement = document
            .get_element_by_id(ids::CANVAS)
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        canvas.set_width(width);
        canvas.set_height(height);

        match init_renderer(canvas, width, height, grid).await {
            Ok(render_state) => {
                shell
                    .borrow_mut()
                    .game
                    .display_mut()
                    .attach_renderer(render_state);
            }
            Err(e) => log::error!("Rendering disabled: {}", e),
        }

        setup_timer(shell.clone());
        setup_keyboard(shell.clone(), &document);
        setup_start_button(shell.clone(), &document);
        setup_answer_button(shell.clone(), &document);
        setup_restart_button(shell, &document);

        log::info!("Math Snake ready");
    }

    async fn init_renderer(
        canvas: HtmlCanvasElement,
        width: u32,
        height: u32,
        grid: Grid,
    ) -> Result<RenderState, RenderError> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        RenderState::new(surface, &adapter, width, height, grid).await
    }

    fn input_value(document: &Document, id: &str) -> String {
        document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            .map(|input| input.value())
            .unwrap_or_default()
    }

    fn setup_timer(shell: Rc<RefCell<Shell>>) {
        let tick_shell = shell.clone();
        let closure = Closure::<dyn FnMut()>::new(move || {
            // Skip the period if a modal alert still holds the game
            let Ok(mut s) = tick_shell.try_borrow_mut() else {
                return;
            };
            if s.game.on_timer() == LoopControl::Stop {
                s.stop_timer();
            }
        });
        shell.borrow_mut().tick_fn = Some(closure.as_ref().unchecked_ref::<js_sys::Function>().clone());
        closure.forget();
    }

    fn setup_keyboard(shell: Rc<RefCell<Shell>>, document: &Document) {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            if let Some(direction) = Direction::from_key(&event.key()) {
                // Arrow keys would otherwise scroll the page
                event.prevent_default();
                if let Ok(mut s) = shell.try_borrow_mut() {
                    s.game.on_direction(direction);
                }
            }
        });
        let _ = document
            .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_start_button(shell: Rc<RefCell<Shell>>, document: &Document) {
        let Some(btn) = document.get_element_by_id(ids::START_BUTTON) else {
            log::warn!("Missing element #{}", ids::START_BUTTON);
            return;
        };
        let doc = document.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            let name = input_value(&doc, ids::PLAYER_NAME);
            let mut s = shell.borrow_mut();
            match s.game.start(&name) {
                Ok(LoopControl::Continue) => s.start_timer(),
                Ok(LoopControl::Stop) => {}
                Err(e) => log::info!("Start refused: {}", e),
            }
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_answer_button(shell: Rc<RefCell<Shell>>, document: &Document) {
        let Some(btn) = document.get_element_by_id(ids::SUBMIT_ANSWER) else {
            log::warn!("Missing element #{}", ids::SUBMIT_ANSWER);
            return;
        };
        let doc = document.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            let raw = input_value(&doc, ids::ANSWER_INPUT);
            let mut s = shell.borrow_mut();
            if s.game.submit_answer(&raw) == AnswerOutcome::OutOfLives {
                s.stop_timer();
            }
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_restart_button(shell: Rc<RefCell<Shell>>, document: &Document) {
        let Some(btn) = document.get_element_by_id(ids::RESTART_BUTTON) else {
            log::warn!("Missing element #{}", ids::RESTART_BUTTON);
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            let mut s = shell.borrow_mut();
            match s.game.restart() {
                Ok(LoopControl::Continue) => s.start_timer(),
                Ok(LoopControl::Stop) => {}
                Err(e) => log::warn!("Restart refused: {}", e),
            }
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();

    log::info!("Math Snake (native) starting...");
    log::info!("Native mode has no window - run with `trunk serve` for the web version");

    headless_demo();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Play one run with a greedy autopilot that always answers correctly
#[cfg(not(target_arch = "wasm32"))]
fn headless_demo() {
    use math_snake::platform::LogDisplay;
    use math_snake::sim::Direction;
    use math_snake::{Game, LoopControl, MemoryStorage};

    const MAX_TICKS: u32 = 2_000;

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mut game = Game::new(seed, LogDisplay::new(), MemoryStorage::new());
    if let Err(e) = game.start("native") {
        log::error!("Could not start: {}", e);
        return;
    }

    for _ in 0..MAX_TICKS {
        if game.state().is_paused() {
            if let Some(answer) = game.state().question.as_ref().map(|q| q.answer()) {
                game.submit_answer(&answer.to_string());
            }
        }

        let state = game.state();
        let to_apple = state.apple - state.snake.head();
        let wanted = if to_apple.x > 0 {
            Direction::Right
        } else if to_apple.x < 0 {
            Direction::Left
        } else if to_apple.y > 0 {
            Direction::Down
        } else {
            Direction::Up
        };
        game.on_direction(wanted);

        if game.on_timer() == LoopControl::Stop {
            break;
        }
    }

    println!(
        "Run finished after {} ticks with {} correct answers",
        game.state().time_ticks,
        game.state().score.correct_answers
    );
}
