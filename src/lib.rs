#![cfg(target_arch = "wasm32")]
use awop_core::{Dataset, Session, Viewport, Wheel};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod app;
mod constants;
mod dom;
mod events;
mod frame;
mod keys;
mod panel;
mod render;
mod storage;
mod theme;

use constants::CANVAS_ID;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("awop-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("#{} is not a canvas: {:?}", CANVAS_ID, e))?;
    let ctx2d = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let (css_w, css_h) = dom::sync_canvas_backing_size(&canvas);
    let dataset = Dataset::default();
    let theme = theme::Theme::from_css(&dataset);
    let mut session = Session::from_dataset(dataset, Viewport::new(css_w as f32, css_h as f32));
    session.palette = theme.palette;

    let mut view = panel::DomPanelView::new(document.clone(), theme.clone());
    view.build_filter(&session)?;
    let backend = storage::BrowserBackend::new(window.clone());

    let mut wheel = Wheel::new(session, backend, view);
    let source = wheel.startup();
    log::info!(
        "[wheel] {} tokens in {} categories, score {} ({:?})",
        wheel.session.token_count(),
        wheel.session.category_count(),
        wheel.session.score().total,
        source
    );

    let app = Rc::new(RefCell::new(app::App::new(wheel, theme)));
    events::wire_all(&app, &window, &document, &canvas);

    let now = Instant::now();
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        app,
        canvas,
        ctx2d,
        started: now,
        last_instant: now,
        last_cursor: "",
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
