//! Shuttle Rally entry point
//!
//! Browser: DOM host driven by an interval timer and `mousemove`.
//! Native: headless demo session played by the autoplayer, printed as text.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, MouseEvent};

    use shuttle_rally::platform::{AreaInput, FixedTicker, TickSource};
    use shuttle_rally::renderer::{Frame, Presenter};
    use shuttle_rally::{GameLoop, Settings};

    const AREA_STYLE: &str = "position: relative; width: 320px; height: 320px; \
        background: #bfdbfe; border: 4px solid #3b82f6; border-radius: 8px; overflow: hidden;";
    const SHUTTLE_STYLE: &str = "position: absolute; font-size: 20px; \
        transform: translate(-50%, -50%);";
    const RACKET_STYLE: &str = "position: absolute; bottom: 10%; width: 48px; height: 16px; \
        background: lightblue; border: 1px solid black; border-radius: 50%; \
        transform: translateX(-50%);";
    const OVERLAY_STYLE: &str = "position: absolute; inset: 0; align-items: center; \
        justify-content: center; flex-direction: column; color: white; \
        background: rgba(0, 0, 0, 0.5);";

    /// Draws frames by positioning DOM elements
    struct DomPresenter {
        shuttle: Element,
        racket: Element,
        score: Element,
        overlay: Element,
        final_score: Element,
        restart_requested: Rc<Cell<bool>>,
    }

    impl Presenter for DomPresenter {
        fn present(&mut self, frame: &Frame) {
            // The end screen replaces the court pieces
            let pieces = if frame.shows_court() { "block" } else { "none" };
            let _ = self.shuttle.set_attribute(
                "style",
                &format!(
                    "{} left: {}%; top: {}%; display: {};",
                    SHUTTLE_STYLE, frame.shuttle.x, frame.shuttle.y, pieces
                ),
            );
            let _ = self.racket.set_attribute(
                "style",
                &format!("{} left: {}%; display: {};", RACKET_STYLE, frame.racket_x, pieces),
            );
            self.score
                .set_text_content(Some(&format!("Score: {}", frame.score)));

            let display = if frame.is_over { "flex" } else { "none" };
            let _ = self
                .overlay
                .set_attribute("style", &format!("{} display: {};", OVERLAY_STYLE, display));
            if frame.is_over {
                self.final_score
                    .set_text_content(Some(&format!("Final score: {}", frame.score)));
            }
        }

        fn take_restart_request(&mut self) -> bool {
            self.restart_requested.replace(false)
        }
    }

    /// Game plus the browser resources driving it
    struct Host {
        game: GameLoop<FixedTicker>,
        presenter: DomPresenter,
        area: Element,
        interval: Option<i32>,
        tick_fn: Option<js_sys::Function>,
    }

    impl Host {
        fn on_tick(&mut self) {
            let period = self.game.ticker().period_ms();
            self.game.pump(period);
            self.render();
        }

        fn on_pointer(&mut self, client_x: f32) {
            let rect = self.area.get_bounding_client_rect();
            let input = AreaInput::new(rect.left() as f32, rect.width() as f32);
            self.game.pointer_moved_raw(&input, client_x);
            self.render();
        }

        fn render(&mut self) {
            self.game.present(&mut self.presenter);
            self.sync_interval();
        }

        /// Keep the browser interval armed exactly while the game is ticking
        fn sync_interval(&mut self) {
            let Some(window) = web_sys::window() else {
                return;
            };

            match (self.game.is_ticking(), self.interval) {
                (true, None) => {
                    if let Some(tick_fn) = &self.tick_fn {
                        let period = self.game.ticker().period_ms() as i32;
                        match window
                            .set_interval_with_callback_and_timeout_and_arguments_0(tick_fn, period)
                        {
                            Ok(handle) => self.interval = Some(handle),
                            Err(e) => log::error!("Failed to start tick interval: {:?}", e),
                        }
                    }
                }
                (false, Some(handle)) => {
                    window.clear_interval_with_handle(handle);
                    self.interval = None;
                    log::info!("Tick interval stopped");
                }
                _ => {}
            }
        }
    }

    fn styled(document: &Document, tag: &str, style: &str) -> Result<Element, JsValue> {
        let el = document.create_element(tag)?;
        el.set_attribute("style", style)?;
        Ok(el)
    }

    /// Build the page: title, score, play area, end screen and hint
    fn build_dom(
        document: &Document,
        restart_requested: Rc<Cell<bool>>,
    ) -> Result<(DomPresenter, Element, Element), JsValue> {
        let body = document.body().ok_or_else(|| JsValue::from_str("no body"))?;

        let root = styled(
            document,
            "div",
            "display: flex; flex-direction: column; align-items: center; \
             justify-content: center; height: 100vh; background: #dcfce7; \
             font-family: sans-serif;",
        )?;
        let title = styled(document, "h1", "font-size: 30px; margin-bottom: 16px;")?;
        title.set_text_content(Some("Badminton"));
        let score = styled(document, "div", "font-weight: bold; margin-bottom: 16px;")?;
        let area = styled(document, "div", AREA_STYLE)?;
        let shuttle = styled(document, "div", SHUTTLE_STYLE)?;
        shuttle.set_text_content(Some("\u{1F3F8}"));
        let racket = styled(document, "div", RACKET_STYLE)?;

        let overlay = styled(document, "div", OVERLAY_STYLE)?;
        let heading = styled(document, "p", "font-size: 20px; font-weight: bold;")?;
        heading.set_text_content(Some("Game Over!"));
        let final_score = styled(document, "p", "margin-bottom: 16px;")?;
        let restart = styled(
            document,
            "button",
            "padding: 8px 16px; background: #3b82f6; color: white; \
             border: none; border-radius: 4px; cursor: pointer;",
        )?;
        restart.set_text_content(Some("Play again"));

        let hint = styled(document, "p", "margin-top: 16px; font-size: 14px;")?;
        hint.set_text_content(Some("Move the mouse to steer the racket!"));

        overlay.append_child(&heading)?;
        overlay.append_child(&final_score)?;
        overlay.append_child(&restart)?;
        area.append_child(&shuttle)?;
        area.append_child(&racket)?;
        area.append_child(&overlay)?;
        root.append_child(&title)?;
        root.append_child(&score)?;
        root.append_child(&area)?;
        root.append_child(&hint)?;
        body.append_child(&root)?;

        let presenter = DomPresenter {
            shuttle,
            racket,
            score,
            overlay,
            final_score,
            restart_requested,
        };
        Ok((presenter, area, restart))
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Shuttle Rally starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let settings = Settings::load();
        let seed = settings.seed.unwrap_or(js_sys::Date::now() as u64);

        let restart_requested = Rc::new(Cell::new(false));
        let (presenter, area, restart_btn) =
            build_dom(&document, restart_requested.clone()).expect("Failed to build page");

        let ticker = FixedTicker::new(settings.tick_period_ms, settings.max_substeps);
        let host = Rc::new(RefCell::new(Host {
            game: GameLoop::new(ticker, seed),
            presenter,
            area,
            interval: None,
            tick_fn: None,
        }));

        // Tick callback, armed and cleared by the host
        {
            let host_clone = host.clone();
            let closure = Closure::<dyn FnMut()>::new(move || {
                host_clone.borrow_mut().on_tick();
            });
            let tick_fn = closure.as_ref().unchecked_ref::<js_sys::Function>().clone();
            host.borrow_mut().tick_fn = Some(tick_fn);
            closure.forget();
        }

        // Pointer: listen on the whole document, normalize against the play area
        {
            let host = host.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                host.borrow_mut().on_pointer(event.client_x() as f32);
            });
            if let Err(e) = document
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())
            {
                log::error!("Failed to listen for mousemove: {:?}", e);
            }
            closure.forget();
        }

        // Restart button feeds the presenter's restart hook
        {
            let host = host.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                restart_requested.set(true);
                host.borrow_mut().render();
            });
            if let Err(e) = restart_btn
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
            {
                log::error!("Failed to listen for restart clicks: {:?}", e);
            }
            closure.forget();
        }

        host.borrow_mut().render();
        log::info!("Shuttle Rally running with seed {}", seed);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use shuttle_rally::platform::{FixedTicker, TickSource};
    use shuttle_rally::renderer::TextPresenter;
    use shuttle_rally::sim::{GameEvent, demo_target};
    use shuttle_rally::{GameLoop, Settings};

    env_logger::init();
    log::info!("Shuttle Rally (native) starting...");
    log::info!("Playing a headless demo session - run with `trunk serve` for the web version");

    let settings = Settings::load();
    let seed = settings.seed.unwrap_or_else(rand::random);

    let ticker = FixedTicker::new(settings.tick_period_ms, settings.max_substeps);
    let mut game = GameLoop::new(ticker, seed);
    let mut presenter = TextPresenter::default();
    let period = game.ticker().period_ms();

    while game.is_ticking() && game.snapshot().ticks < settings.demo_max_ticks {
        let target = demo_target(&game.snapshot(), settings.demo_lag);
        game.pointer_moved(target);

        for event in game.pump(period) {
            if let GameEvent::Hit { .. } = event {
                game.present(&mut presenter);
                println!("{}", presenter.output());
            }
        }
    }

    game.present(&mut presenter);
    println!("{}", presenter.output());

    let state = game.snapshot();
    if !state.is_over {
        log::info!("Demo stopped after {} ticks", state.ticks);
    }
    log::info!("Final score: {}", state.score);
}
