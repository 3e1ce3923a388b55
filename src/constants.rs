// Front-end constants: DOM ids, storage key, label styling and canvas colors.
// Interaction and scene tuning lives in `awop_core::constants`.

// Persistence
pub const STORAGE_KEY: &str = "wheelOfPrivilege_selections";

// Canvas and overlays
pub const CANVAS_ID: &str = "wheel-canvas";
pub const SCORE_VALUE_ID: &str = "score-value";
pub const SCORE_FILL_ID: &str = "score-fill";
pub const FILTER_CONTAINER_ID: &str = "category-filter";
pub const RESET_BUTTON_ID: &str = "reset-btn";
pub const TOOLTIP_ID: &str = "category-tooltip";
pub const TOOLTIP_TITLE_ID: &str = "tooltip-title";
pub const TOOLTIP_DESCRIPTION_ID: &str = "tooltip-description";
pub const TOOLTIP_ITEMS_ID: &str = "tooltip-items";

// Detail ("info") panel
pub const INFO_PANEL_ID: &str = "info-panel";
pub const INFO_GRAB_BAR_ID: &str = "info-panel-grab-bar";
pub const PANEL_TITLE_ID: &str = "panel-title";
pub const PANEL_CATEGORY_ID: &str = "panel-category";
pub const PANEL_DESCRIPTION_ID: &str = "panel-description";
pub const PANEL_LAW_ID: &str = "panel-uk-law";
pub const LAW_ICON_ID: &str = "uk-law-icon";
pub const LAW_TITLE_ID: &str = "uk-law-title";
pub const LAW_TEXT_ID: &str = "uk-law-text";
pub const SPECTRUM_ITEMS_ID: &str = "spectrum-items";
pub const NAV_COUNTER_ID: &str = "nav-counter";
pub const PREV_BUTTON_ID: &str = "prev-btn";
pub const NEXT_BUTTON_ID: &str = "next-btn";

// Help ("default") panel
pub const DEFAULT_PANEL_ID: &str = "default-panel";
pub const HELP_GRAB_BAR_ID: &str = "mobile-panel-grab-bar";
pub const BURGER_ID: &str = "burger-menu";

// CSS hooks
pub const VISIBLE_CLASS: &str = "visible";
pub const HIDDEN_CLASS: &str = "hidden";
pub const ACTIVE_CLASS: &str = "active";
pub const EXPANDED_CLASS: &str = "expanded";
pub const SELECTED_CLASS: &str = "selected";
pub const GRAB_BAR_SELECTOR: &str = ".grab-bar";
pub const BAND_ATTR: &str = "data-band";
pub const CATEGORY_ATTR: &str = "data-category";
pub const SCORE_MIN_VAR: &str = "--color-score-min";
pub const SCORE_MID_VAR: &str = "--color-score-mid";
pub const SCORE_MAX_VAR: &str = "--color-score-max";

// Labels (world units are converted through the projected token scale)
pub const LABEL_FONT_FAMILY: &str = "Segoe UI, sans-serif";
pub const NAME_FONT_PX: f64 = 13.0;
pub const STATUS_FONT_PX: f64 = 11.0;
pub const LABEL_MAX_WIDTH_PX: f64 = 140.0;
pub const STATUS_LABEL_OFFSET_Y: f32 = 0.75;
pub const LABEL_SHADOW_COLOR: &str = "rgba(0,0,0,0.8)";
pub const LABEL_SHADOW_OFFSET: f64 = 1.5;

// Ring strokes
pub const RING_LINE_WIDTH_PX: f64 = 2.0;
pub const RING_SEGMENTS: usize = 100;
pub const RING_ALPHA: f64 = 0.6;
