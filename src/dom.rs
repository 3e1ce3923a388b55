use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("#{} is not an HtmlElement: {:?}", id, e))
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut(web::MouseEvent) + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| handler(ev))
            as Box<dyn FnMut(web::MouseEvent)>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        log::warn!("[dom] no #{} to attach a click handler to", element_id);
    }
}

/// Attach `handler` for `event` on `target`. Non-passive listeners may call
/// `prevent_default`.
pub fn listen<E>(
    target: &web::EventTarget,
    event: &str,
    passive: bool,
    mut handler: impl FnMut(E) + 'static,
) where
    E: JsCast + 'static,
{
    let closure = Closure::wrap(Box::new(move |ev: web::Event| handler(ev.unchecked_into::<E>()))
        as Box<dyn FnMut(web::Event)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(passive);
    _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}

/// Client coordinates relative to `el`'s top-left corner, in CSS px.
pub fn local_px(el: &web::Element, client_x: i32, client_y: i32) -> glam::Vec2 {
    let rect = el.get_bounding_client_rect();
    glam::Vec2::new(
        (client_x as f64 - rect.left()) as f32,
        (client_y as f64 - rect.top()) as f32,
    )
}

/// Every touch in `list`, relative to `el`.
pub fn touch_points(list: &web::TouchList, el: &web::Element) -> smallvec::SmallVec<[glam::Vec2; 4]> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|t| local_px(el, t.client_x(), t.client_y()))
        .collect()
}

pub fn set_text(document: &web::Document, id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

pub fn set_class(el: &web::Element, class: &str, on: bool) {
    _ = el.class_list().toggle_with_force(class, on);
}

pub fn set_class_by_id(document: &web::Document, id: &str, class: &str, on: bool) {
    if let Some(el) = document.get_element_by_id(id) {
        set_class(&el, class, on);
    }
}

pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

/// Value of a CSS custom property on `:root`, if set and non-empty.
pub fn css_var(name: &str) -> Option<String> {
    let window = web::window()?;
    let root = window.document()?.document_element()?;
    let style = window.get_computed_style(&root).ok()??;
    let value = style.get_property_value(name).ok()?;
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// True when the event target sits inside an element matching `selector`.
pub fn target_within(ev: &web::Event, selector: &str) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .and_then(|el| el.closest(selector).ok().flatten())
        .is_some()
}

/// Match the canvas backing store to its CSS size times devicePixelRatio.
/// Returns the CSS size.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> (f64, f64) {
    let rect = canvas.get_bounding_client_rect();
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
    (rect.width(), rect.height())
}
