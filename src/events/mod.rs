//! DOM and canvas event wiring. Handlers only translate browser events into
//! calls on [`App`]; all interaction rules live in the core gesture machines.

mod controls;
mod keyboard;
mod panel;
mod pointer;
mod touch;

use crate::app::App;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn wire_all(
    app: &Rc<RefCell<App>>,
    window: &web::Window,
    document: &web::Document,
    canvas: &web::HtmlCanvasElement,
) {
    pointer::wire(app, window, canvas);
    touch::wire(app, canvas);
    panel::wire(app, window, document);
    controls::wire(app, document);
    keyboard::wire(app, window);
    pointer::wire_resize(app, window, canvas);
}
