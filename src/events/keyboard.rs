use crate::app::App;
use crate::dom;
use crate::keys::actions_for_key;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn wire(app: &Rc<RefCell<App>>, window: &web::Window) {
    let app = app.clone();
    dom::listen(window, "keydown", true, move |ev: web::KeyboardEvent| {
        if ev.repeat() && ev.key() == "Escape" {
            return;
        }
        let mut app = app.borrow_mut();
        let actions = actions_for_key(&ev.key(), app.session().focus().is_some());
        if !actions.is_empty() {
            log::debug!("[keys] {}", ev.key());
            app.wheel.dispatch(actions);
        }
    });
}
