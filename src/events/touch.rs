use crate::app::App;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

// Canvas touch listeners are non-passive: preventing the default stops page
// scrolling and the synthetic mouse events that would follow a tap.
pub fn wire(app: &Rc<RefCell<App>>, canvas: &web::HtmlCanvasElement) {
    {
        let app = app.clone();
        let c = canvas.clone();
        dom::listen(canvas, "touchstart", false, move |ev: web::TouchEvent| {
            ev.prevent_default();
            let touches = dom::touch_points(&ev.touches(), &c);
            app.borrow_mut().touch_start(&touches);
        });
    }
    {
        let app = app.clone();
        let c = canvas.clone();
        dom::listen(canvas, "touchmove", false, move |ev: web::TouchEvent| {
            ev.prevent_default();
            let touches = dom::touch_points(&ev.touches(), &c);
            app.borrow_mut().touch_move(&touches);
        });
    }
    {
        let app = app.clone();
        let c = canvas.clone();
        dom::listen(canvas, "touchend", false, move |ev: web::TouchEvent| {
            ev.prevent_default();
            let remaining = dom::touch_points(&ev.touches(), &c);
            let lifted = dom::touch_points(&ev.changed_touches(), &c).first().copied();
            app.borrow_mut().touch_end(&remaining, lifted);
        });
    }
    {
        let app = app.clone();
        dom::listen(canvas, "touchcancel", true, move |_: web::TouchEvent| {
            log::debug!("[touch] cancel");
            app.borrow_mut().touch_cancel();
        });
    }
}
