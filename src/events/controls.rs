use crate::app::App;
use crate::constants::*;
use crate::dom;
use crate::panel::DomPanelView;
use awop_core::panel::CategoryTooltip;
use awop_core::Action;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

fn target_element(ev: &web::Event) -> Option<web::Element> {
    ev.target().and_then(|t| t.dyn_into::<web::Element>().ok())
}

fn dispatch_on_click(app: &Rc<RefCell<App>>, document: &web::Document, id: &str, action: Action) {
    let app = app.clone();
    dom::add_click_listener(document, id, move |_| {
        app.borrow_mut().wheel.dispatch_one(action.clone());
    });
}

pub fn wire(app: &Rc<RefCell<App>>, document: &web::Document) {
    dispatch_on_click(app, document, PREV_BUTTON_ID, Action::Navigate(-1));
    dispatch_on_click(app, document, NEXT_BUTTON_ID, Action::Navigate(1));
    dispatch_on_click(app, document, BURGER_ID, Action::ToggleHelp);
    {
        let app = app.clone();
        dom::add_click_listener(document, RESET_BUTTON_ID, move |_| {
            app.borrow_mut().wheel.reset();
        });
    }
    wire_filter(app, document);
    wire_outside_click(app, document);
}

/// Category buttons are created at start-up; one delegated listener per
/// event on their container.
fn wire_filter(app: &Rc<RefCell<App>>, document: &web::Document) {
    let Some(container) = document.get_element_by_id(FILTER_CONTAINER_ID) else {
        log::warn!("[filter] no #{}", FILTER_CONTAINER_ID);
        return;
    };
    {
        let app = app.clone();
        dom::listen(&container, "click", true, move |ev: web::MouseEvent| {
            let Some(category) = target_element(&ev).and_then(|el| DomPanelView::category_of(&el))
            else {
                return;
            };
            let mut app = app.borrow_mut();
            let changes = app.wheel.dispatch_one(Action::ToggleCategory(category));
            log::info!("[filter] toggled category {} (focus cleared: {})", category, changes.focus);
        });
    }
    {
        let app = app.clone();
        dom::listen(&container, "mouseover", true, move |ev: web::MouseEvent| {
            let Some(el) = target_element(&ev) else {
                return;
            };
            let Some(category) = DomPanelView::category_of(&el) else {
                return;
            };
            let app = app.borrow();
            if let Some(state) = app.session().categories().get(category) {
                let tooltip = CategoryTooltip::for_category(app.session().dataset(), &state.name);
                app.wheel.view().show_tooltip(&tooltip, &el);
            }
        });
    }
    {
        let app = app.clone();
        dom::listen(&container, "mouseout", true, move |_: web::MouseEvent| {
            app.borrow().wheel.view().hide_tooltip();
        });
    }
}

/// On narrow layouts, a click anywhere outside the help panel and its burger
/// closes the help panel.
fn wire_outside_click(app: &Rc<RefCell<App>>, document: &web::Document) {
    let app = app.clone();
    dom::listen(document, "click", true, move |ev: web::MouseEvent| {
        let inside = dom::target_within(&ev, &format!("#{}", DEFAULT_PANEL_ID))
            || dom::target_within(&ev, &format!("#{}", BURGER_ID));
        if inside {
            return;
        }
        let mut app = app.borrow_mut();
        if app.session().is_narrow() && app.session().panels.help_open {
            app.wheel.dispatch_one(Action::DismissHelp);
        }
    });
}
