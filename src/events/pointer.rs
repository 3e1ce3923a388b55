use crate::app::App;
use crate::dom;
use awop_core::Viewport;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire(app: &Rc<RefCell<App>>, window: &web::Window, canvas: &web::HtmlCanvasElement) {
    {
        let app = app.clone();
        let c = canvas.clone();
        dom::listen(canvas, "mousedown", true, move |ev: web::MouseEvent| {
            if ev.button() != 0 {
                return;
            }
            let pos = dom::local_px(&c, ev.client_x(), ev.client_y());
            app.borrow_mut().mouse_down(pos);
        });
    }
    {
        let app = app.clone();
        let c = canvas.clone();
        dom::listen(window, "mousemove", true, move |ev: web::MouseEvent| {
            let pos = dom::local_px(&c, ev.client_x(), ev.client_y());
            let over_canvas = ev
                .target()
                .and_then(|t| t.dyn_into::<web::HtmlCanvasElement>().ok())
                .is_some_and(|t| t == c);
            app.borrow_mut().mouse_move(pos, over_canvas);
        });
    }
    {
        let app = app.clone();
        let c = canvas.clone();
        dom::listen(window, "mouseup", true, move |ev: web::MouseEvent| {
            let pos = dom::local_px(&c, ev.client_x(), ev.client_y());
            app.borrow_mut().mouse_up(pos);
        });
    }
    {
        let app = app.clone();
        dom::listen(canvas, "wheel", false, move |ev: web::WheelEvent| {
            ev.prevent_default();
            app.borrow_mut().scroll(ev.delta_y() as f32);
        });
    }
}

/// Keep the backing store at CSS size × devicePixelRatio and the camera in
/// step with the viewport.
pub fn wire_resize(app: &Rc<RefCell<App>>, window: &web::Window, canvas: &web::HtmlCanvasElement) {
    let app = app.clone();
    let c = canvas.clone();
    dom::listen(window, "resize", true, move |_: web::Event| {
        let (w, h) = dom::sync_canvas_backing_size(&c);
        app.borrow_mut()
            .resize(Viewport::new(w as f32, h as f32));
    });
}
