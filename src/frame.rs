use crate::app::App;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Frames slower than this are logged at debug level.
const SLOW_FRAME_MS: f32 = 100.0;

pub struct FrameContext {
    pub app: Rc<RefCell<App>>,
    pub canvas: web::HtmlCanvasElement,
    pub ctx2d: web::CanvasRenderingContext2d,
    pub started: Instant,
    pub last_instant: Instant,
    pub last_cursor: &'static str,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        let dt_ms = dt.as_secs_f32() * 1000.0;
        if dt_ms > SLOW_FRAME_MS {
            log::debug!("[frame] slow frame {:.0} ms", dt_ms);
        }

        let mut app = self.app.borrow_mut();
        // Input has already been applied by the event handlers.
        app.tick(now.duration_since(self.started).as_secs_f64() * 1000.0);

        let dpr = web::window()
            .map(|w| w.device_pixel_ratio())
            .unwrap_or(1.0);
        app.scene
            .draw(&self.ctx2d, &app.wheel.session, &app.theme, dpr);

        let cursor = app.cursor();
        if cursor != self.last_cursor {
            _ = self.canvas.style().set_property("cursor", cursor);
            self.last_cursor = cursor;
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
