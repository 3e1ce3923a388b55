use crate::app::App;
use crate::constants::*;
use crate::dom;
use awop_core::gesture::{starts_grab, PanelMetrics};
use awop_core::PanelKind;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

fn metrics(panel: &web::HtmlElement, window: &web::Window) -> PanelMetrics {
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or_default();
    PanelMetrics {
        offset_height: panel.offset_height() as f32,
        scroll_top: panel.scroll_top() as f32,
        scroll_height: panel.scroll_height() as f32,
        client_height: panel.client_height() as f32,
        viewport_height: viewport_height as f32,
    }
}

fn first_touch(list: &web::TouchList) -> Option<Vec2> {
    list.get(0)
        .map(|t| Vec2::new(t.client_x() as f32, t.client_y() as f32))
}

fn on_grab_bar(
    ev: &web::TouchEvent,
    document: &web::Document,
    kind: PanelKind,
    bar_id: &str,
    pos: Vec2,
) -> bool {
    let bar_bottom = document
        .get_element_by_id(bar_id)
        .map(|bar| bar.get_bounding_client_rect().bottom() as f32);
    starts_grab(kind, dom::target_within(ev, GRAB_BAR_SELECTOR), pos.y, bar_bottom)
}

fn wire_panel(
    app: &Rc<RefCell<App>>,
    window: &web::Window,
    document: &web::Document,
    kind: PanelKind,
    panel_id: &'static str,
    bar_id: &'static str,
) {
    let Ok(panel) = dom::by_id(document, panel_id) else {
        log::warn!("[panel] no #{}; swipes disabled", panel_id);
        return;
    };
    {
        let app = app.clone();
        let (p, w, d) = (panel.clone(), window.clone(), document.clone());
        dom::listen(&panel, "touchstart", true, move |ev: web::TouchEvent| {
            let Some(pos) = first_touch(&ev.touches()) else {
                return;
            };
            let grab = on_grab_bar(&ev, &d, kind, bar_id, pos);
            app.borrow_mut()
                .panel_touch_start(kind, pos, grab, &metrics(&p, &w));
        });
    }
    {
        let app = app.clone();
        let (p, w) = (panel.clone(), window.clone());
        dom::listen(&panel, "touchmove", false, move |ev: web::TouchEvent| {
            let Some(pos) = first_touch(&ev.touches()) else {
                return;
            };
            if app.borrow_mut().panel_touch_move(kind, pos, &metrics(&p, &w)) {
                ev.prevent_default();
            }
        });
    }
    {
        let app = app.clone();
        let (p, w) = (panel.clone(), window.clone());
        dom::listen(&panel, "touchend", true, move |ev: web::TouchEvent| {
            let Some(pos) = first_touch(&ev.changed_touches()) else {
                return;
            };
            app.borrow_mut()
                .panel_touch_end(kind, pos, &metrics(&p, &w));
        });
    }
}

pub fn wire(app: &Rc<RefCell<App>>, window: &web::Window, document: &web::Document) {
    wire_panel(app, window, document, PanelKind::Detail, INFO_PANEL_ID, INFO_GRAB_BAR_ID);
    wire_panel(app, window, document, PanelKind::Help, DEFAULT_PANEL_ID, HELP_GRAB_BAR_ID);

    // Spectrum rows are rebuilt on every focus change, so listen on the list.
    if let Some(list) = document.get_element_by_id(SPECTRUM_ITEMS_ID) {
        let app = app.clone();
        dom::listen(&list, "click", true, move |ev: web::MouseEvent| {
            let band = ev
                .target()
                .and_then(|t| t.dyn_into::<web::Element>().ok())
                .and_then(|el| el.closest(&format!("[{}]", BAND_ATTR)).ok().flatten())
                .and_then(|row| row.get_attribute(BAND_ATTR))
                .and_then(|b| b.parse().ok());
            let mut app = app.borrow_mut();
            if let (Some(band), Some(token)) = (band, app.session().focus()) {
                log::info!("[panel] set {} to {}", token, band);
                app.wheel
                    .dispatch_one(awop_core::Action::SetBand { token, band });
            }
        });
    }
}
