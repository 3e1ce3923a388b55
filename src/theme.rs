use crate::constants::{SCORE_MAX_VAR, SCORE_MID_VAR, SCORE_MIN_VAR};
use crate::dom;
use awop_core::content::{slugify, Dataset, UNKNOWN_CATEGORY_COLOR};
use awop_core::score::ScorePalette;
use fnv::FnvHashMap;

/// Colors resolved once from CSS custom properties, falling back to the
/// dataset defaults.
#[derive(Clone, Debug)]
pub struct Theme {
    category_colors: FnvHashMap<String, String>,
    pub palette: ScorePalette,
}

impl Theme {
    pub fn from_css(dataset: &Dataset) -> Self {
        let category_colors = dataset
            .categories
            .iter()
            .map(|c| {
                let color = dom::css_var(&format!("--cat-{}", slugify(c.name)))
                    .unwrap_or_else(|| c.color.to_string());
                (c.name.to_string(), color)
            })
            .collect();
        let css = |name: &str| dom::css_var(name).unwrap_or_default();
        let palette = ScorePalette::from_hex_or_default(
            &css(SCORE_MIN_VAR),
            &css(SCORE_MID_VAR),
            &css(SCORE_MAX_VAR),
        );
        Self {
            category_colors,
            palette,
        }
    }

    pub fn category_color(&self, category: &str) -> &str {
        self.category_colors
            .get(category)
            .map(String::as_str)
            .unwrap_or(UNKNOWN_CATEGORY_COLOR)
    }
}
