use crate::constants::*;
use crate::dom;
use crate::theme::Theme;
use awop_core::panel::{category_buttons, CategoryTooltip, DetailModel, PanelDisplay, PanelView};
use awop_core::score::ScoreSummary;
use awop_core::session::{PanelLayout, Session};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Writes panel view models into the page.
pub struct DomPanelView {
    document: web::Document,
    theme: Theme,
    category_buttons: Vec<(String, web::Element)>,
}

impl DomPanelView {
    pub fn new(document: web::Document, theme: Theme) -> Self {
        Self {
            document,
            theme,
            category_buttons: Vec::new(),
        }
    }

    /// Create one filter button per category plus the reset button.
    pub fn build_filter(&mut self, session: &Session) -> anyhow::Result<()> {
        let container = dom::by_id(&self.document, FILTER_CONTAINER_ID)?;
        for b in category_buttons(session) {
            let btn = self
                .document
                .create_element("button")
                .map_err(|e| anyhow::anyhow!("create button: {:?}", e))?;
            btn.set_class_name("category-btn");
            dom::set_class(&btn, ACTIVE_CLASS, b.active);
            btn.set_text_content(Some(&b.name));
            _ = btn.set_attribute(CATEGORY_ATTR, &b.index.to_string());
            if let Some(html) = btn.dyn_ref::<web::HtmlElement>() {
                dom::set_style(html, "background-color", self.theme.category_color(&b.name));
            }
            _ = container.append_child(&btn);
            self.category_buttons.push((b.name, btn));
        }

        let reset = self
            .document
            .create_element("button")
            .map_err(|e| anyhow::anyhow!("create button: {:?}", e))?;
        reset.set_class_name("reset-btn");
        reset.set_id(RESET_BUTTON_ID);
        reset.set_text_content(Some("Reset All"));
        _ = container.append_child(&reset);
        log::info!("[panel] built {} category buttons", self.category_buttons.len());
        Ok(())
    }

    /// Category button under the given element, as a category index.
    pub fn category_of(el: &web::Element) -> Option<usize> {
        el.closest(".category-btn")
            .ok()
            .flatten()?
            .get_attribute(CATEGORY_ATTR)?
            .parse()
            .ok()
    }

    pub fn show_tooltip(&self, tooltip: &CategoryTooltip, anchor: &web::Element) {
        dom::set_text(&self.document, TOOLTIP_TITLE_ID, &tooltip.title);
        if let Ok(title) = dom::by_id(&self.document, TOOLTIP_TITLE_ID) {
            dom::set_style(&title, "color", self.theme.category_color(&tooltip.title));
        }
        dom::set_text(&self.document, TOOLTIP_DESCRIPTION_ID, tooltip.description);
        dom::set_text(&self.document, TOOLTIP_ITEMS_ID, &tooltip.includes);
        if let Ok(el) = dom::by_id(&self.document, TOOLTIP_ID) {
            let rect = anchor.get_bounding_client_rect();
            dom::set_style(&el, "left", &format!("{}px", rect.right() + 10.0));
            dom::set_style(&el, "top", &format!("{}px", rect.top()));
            dom::set_class(&el, VISIBLE_CLASS, true);
        }
    }

    pub fn hide_tooltip(&self) {
        dom::set_class_by_id(&self.document, TOOLTIP_ID, VISIBLE_CLASS, false);
    }

    fn fill_detail(&self, detail: &DetailModel) {
        let doc = &self.document;
        dom::set_text(doc, PANEL_TITLE_ID, &detail.title);
        dom::set_text(doc, PANEL_CATEGORY_ID, &detail.category);
        if let Ok(badge) = dom::by_id(doc, PANEL_CATEGORY_ID) {
            dom::set_style(&badge, "background-color", self.theme.category_color(&detail.category));
        }
        dom::set_text(doc, PANEL_DESCRIPTION_ID, detail.description);

        if let Some(law) = detail.legal {
            if let Some(el) = doc.get_element_by_id(PANEL_LAW_ID) {
                el.set_class_name(&format!("uk-law {}", law.status.as_str()));
            }
            dom::set_text(doc, LAW_ICON_ID, law.status.icon());
            dom::set_text(doc, LAW_TITLE_ID, law.title);
            dom::set_text(doc, LAW_TEXT_ID, law.text);
        }

        if let Some(list) = doc.get_element_by_id(SPECTRUM_ITEMS_ID) {
            list.set_text_content(None);
            for item in &detail.spectrum {
                let Ok(row) = doc.create_element("div") else {
                    continue;
                };
                row.set_class_name(&format!("spectrum-item {}", item.band.as_str()));
                dom::set_class(&row, SELECTED_CLASS, item.selected);
                _ = row.set_attribute(BAND_ATTR, item.band.as_str());
                if let Ok(points) = doc.create_element("div") {
                    points.set_class_name("spectrum-points");
                    points.set_text_content(Some(&item.points_label));
                    _ = row.append_child(&points);
                }
                _ = row.append_with_str_1(item.text);
                _ = list.append_child(&row);
            }
        }

        dom::set_text(doc, NAV_COUNTER_ID, &detail.nav_counter);
        for id in [PREV_BUTTON_ID, NEXT_BUTTON_ID] {
            if let Some(btn) = doc
                .get_element_by_id(id)
                .and_then(|e| e.dyn_into::<web::HtmlButtonElement>().ok())
            {
                btn.set_disabled(!detail.nav_enabled);
            }
        }
    }
}

impl PanelView for DomPanelView {
    fn focus_changed(&mut self, detail: Option<&DetailModel>, _display: PanelDisplay) {
        if let Some(detail) = detail {
            self.fill_detail(detail);
        }
    }

    fn visibility_changed(&mut self, category: &str, visible: bool) {
        if let Some((_, btn)) = self.category_buttons.iter().find(|(n, _)| n == category) {
            dom::set_class(btn, ACTIVE_CLASS, visible);
        }
    }

    fn score_changed(&mut self, score: &ScoreSummary) {
        let doc = &self.document;
        dom::set_text(doc, SCORE_VALUE_ID, &score.total.to_string());
        if let Ok(value) = dom::by_id(doc, SCORE_VALUE_ID) {
            dom::set_style(&value, "color", &score.color.to_hex());
        }
        if let Ok(fill) = dom::by_id(doc, SCORE_FILL_ID) {
            dom::set_style(&fill, "width", &format!("{}%", score.percent));
        }
    }

    fn layout_changed(&mut self, layout: &PanelLayout, display: PanelDisplay) {
        let doc = &self.document;
        let detail = display == PanelDisplay::Detail;
        dom::set_class_by_id(doc, INFO_PANEL_ID, VISIBLE_CLASS, detail);
        dom::set_class_by_id(doc, INFO_PANEL_ID, EXPANDED_CLASS, detail && layout.detail_expanded);
        dom::set_class_by_id(doc, DEFAULT_PANEL_ID, HIDDEN_CLASS, detail);
        dom::set_class_by_id(doc, DEFAULT_PANEL_ID, VISIBLE_CLASS, layout.help_open && !detail);
        dom::set_class_by_id(doc, BURGER_ID, ACTIVE_CLASS, layout.help_open && !detail);

        for (id, height) in [
            (INFO_PANEL_ID, layout.detail_height),
            (DEFAULT_PANEL_ID, layout.help_height),
        ] {
            if let Ok(el) = dom::by_id(doc, id) {
                match height {
                    Some(h) => dom::set_style(&el, "height", &format!("{h}px")),
                    None => {
                        _ = el.style().remove_property("height");
                    }
                }
            }
        }
    }

    fn reset(&mut self) {
        self.hide_tooltip();
    }
}
