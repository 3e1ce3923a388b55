//! Mutable wheel state: tokens, category filters, focus, the live drag, the
//! camera and scene rotation.
//!
//! Token-level setters are plain mutations. Orchestration concerns (persisting,
//! panel refresh) live in [`crate::wheel::Wheel`], which feeds actions through
//! [`Session::apply`] and reacts to the returned [`Changes`].

use crate::action::{Action, PanelKind};
use crate::band::{Band, RingRadii};
use crate::camera::{optimal_distance, Camera};
use crate::constants::{MEDIUM_VIEWPORT_MAX_WIDTH, MOBILE_PANEL_OFFSET_Y};
use crate::content::Dataset;
use crate::geometry::Viewport;
use crate::persist::Snapshot;
use crate::rotation::SceneRotation;
use crate::score::{summarize, ScorePalette, ScoreSummary};
use crate::token::{Token, TokenId};
use crate::visual::{TokenFlags, VisualTargets};
use fnv::FnvHashMap;
use smallvec::SmallVec;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryState {
    pub name: String,
    pub visible: bool,
}

/// A token currently owned by a drag gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActiveDrag {
    pub token: TokenId,
    pub radius: f32,
}

/// Mobile panel layout, owned by the session so gestures can change it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PanelLayout {
    pub help_open: bool,
    pub detail_expanded: bool,
    /// Explicit heights from a grab-bar drag; `None` means the CSS default.
    pub detail_height: Option<f32>,
    pub help_height: Option<f32>,
}

/// What one batch of actions changed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Changes {
    pub bands: bool,
    /// Categories whose visibility flipped, in the order they changed.
    pub categories: SmallVec<[usize; 8]>,
    pub focus: bool,
    /// The focused token's band changed (its panel content is stale).
    pub focused_band: bool,
    pub layout: bool,
    pub camera: bool,
    pub reset: bool,
}

impl Changes {
    /// Band or visibility changes must be written through to both stores.
    pub fn needs_persist(&self) -> bool {
        self.bands || !self.categories.is_empty()
    }

    pub fn needs_detail_refresh(&self) -> bool {
        self.focus || self.focused_band
    }

    pub fn is_empty(&self) -> bool {
        *self == Changes::default()
    }

    pub fn merge(&mut self, other: Changes) {
        self.bands |= other.bands;
        for c in other.categories {
            if !self.categories.contains(&c) {
                self.categories.push(c);
            }
        }
        self.focus |= other.focus;
        self.focused_band |= other.focused_band;
        self.layout |= other.layout;
        self.camera |= other.camera;
        self.reset |= other.reset;
    }
}

#[derive(Clone, Debug)]
pub struct Session {
    dataset: Dataset,
    tokens: Vec<Token>,
    categories: Vec<CategoryState>,
    by_name: FnvHashMap<String, TokenId>,
    focus: Option<TokenId>,
    drag: Option<ActiveDrag>,
    pub camera: Camera,
    pub rotation: SceneRotation,
    pub panels: PanelLayout,
    pub viewport: Viewport,
    pub radii: RingRadii,
    pub palette: ScorePalette,
}

impl Session {
    /// Tokens laid out by category order, every category visible.
    pub fn from_dataset(dataset: Dataset, viewport: Viewport) -> Self {
        let ordered = dataset.layout_order();
        let total = ordered.len();
        let tokens: Vec<Token> = ordered
            .iter()
            .enumerate()
            .map(|(slot, axis)| Token::from_content(axis, slot, total))
            .collect();
        let by_name = tokens
            .iter()
            .enumerate()
            .map(|(id, t)| (t.name().to_string(), id))
            .collect();
        let categories = dataset
            .categories
            .iter()
            .map(|c| CategoryState {
                name: c.name.to_string(),
                visible: true,
            })
            .collect();
        for t in &tokens {
            if dataset.category(t.category()).is_none() {
                log::warn!(
                    "[session] token {:?} has unknown category {:?}",
                    t.name(),
                    t.category()
                );
            }
        }
        Self {
            dataset,
            tokens,
            categories,
            by_name,
            focus: None,
            drag: None,
            camera: Camera::on_z_axis(optimal_distance(viewport.width), viewport.aspect()),
            rotation: SceneRotation::default(),
            panels: PanelLayout::default(),
            viewport,
            radii: RingRadii::default(),
            palette: ScorePalette::default(),
        }
    }

    #[inline]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    #[inline]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn token(&self, id: TokenId) -> Option<&Token> {
        self.tokens.get(id)
    }

    pub fn token_id(&self, name: &str) -> Option<TokenId> {
        self.by_name.get(name).copied()
    }

    #[inline]
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn categories(&self) -> &[CategoryState] {
        &self.categories
    }

    #[inline]
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    pub fn is_category_visible(&self, category: usize) -> bool {
        self.categories.get(category).is_some_and(|c| c.visible)
    }

    #[inline]
    pub fn focus(&self) -> Option<TokenId> {
        self.focus
    }

    #[inline]
    pub fn is_focused(&self, id: TokenId) -> bool {
        self.focus == Some(id)
    }

    #[inline]
    pub fn drag(&self) -> Option<ActiveDrag> {
        self.drag
    }

    pub fn score(&self) -> ScoreSummary {
        summarize(&self.tokens, &self.palette)
    }

    /// Plain band mutation. Returns whether it changed.
    pub fn set_band(&mut self, id: TokenId, band: Band) -> bool {
        self.tokens.get_mut(id).is_some_and(|t| t.set_band(band))
    }

    /// Show or hide every token of a category. Hiding the focused token's
    /// category also clears focus.
    pub fn set_category_visible(&mut self, category: usize, visible: bool) -> Changes {
        let mut changes = Changes::default();
        let Some(state) = self.categories.get_mut(category) else {
            return changes;
        };
        if state.visible == visible {
            return changes;
        }
        state.visible = visible;
        let name = state.name.clone();
        for t in self.tokens.iter_mut().filter(|t| t.category() == name) {
            t.set_category_visible(visible);
        }
        changes.categories.push(category);
        log::debug!("[filter] {} -> {}", name, if visible { "shown" } else { "hidden" });

        if !visible {
            if let Some(focused) = self.focus {
                if self.tokens[focused].category() == name {
                    self.focus = None;
                    changes.focus = true;
                }
            }
        }
        changes
    }

    pub fn focus_token(&mut self, id: TokenId) -> bool {
        if id >= self.tokens.len() || self.focus == Some(id) {
            return false;
        }
        self.focus = Some(id);
        true
    }

    pub fn toggle_focus(&mut self, id: TokenId) -> bool {
        if self.focus == Some(id) {
            self.clear_focus()
        } else {
            self.focus_token(id)
        }
    }

    pub fn clear_focus(&mut self) -> bool {
        self.focus.take().is_some()
    }

    /// Move focus by `step` in creation order, wrapping. No-op without focus.
    pub fn navigate(&mut self, step: i32) -> bool {
        let (Some(current), n) = (self.focus, self.tokens.len()) else {
            return false;
        };
        if n == 0 {
            return false;
        }
        let next = (current as i64 + step as i64).rem_euclid(n as i64) as usize;
        self.focus_token(next)
    }

    pub fn nav_enabled(&self) -> bool {
        !self.tokens.is_empty()
    }

    /// Everything inner, every category visible, no focus.
    pub fn reset(&mut self) -> Changes {
        let mut changes = Changes {
            reset: true,
            ..Changes::default()
        };
        for t in &mut self.tokens {
            t.set_band(Band::Inner);
            t.set_category_visible(true);
        }
        for (i, c) in self.categories.iter_mut().enumerate() {
            if !c.visible {
                c.visible = true;
                changes.categories.push(i);
            }
        }
        self.drag = None;
        changes.focus = self.clear_focus();
        // Always rewrite persisted state, even if nothing moved.
        changes.bands = true;
        changes
    }

    /// Apply one action and report what changed.
    pub fn apply(&mut self, action: &Action) -> Changes {
        let mut changes = Changes::default();
        match *action {
            Action::BeginTokenDrag(token) => {
                if let Some(t) = self.tokens.get(token) {
                    let radius = self.radii.radius(t.band());
                    self.drag = Some(ActiveDrag { token, radius });
                }
            }
            Action::DragToken { token, radius } => {
                if let Some(drag) = self.drag.as_mut().filter(|d| d.token == token) {
                    drag.radius = radius;
                }
            }
            Action::CancelTokenDrag(token) => {
                if self.drag.is_some_and(|d| d.token == token) {
                    self.drag = None;
                }
            }
            Action::DropToken { token, band } => {
                if self.drag.is_some_and(|d| d.token == token) {
                    self.drag = None;
                }
                changes.merge(self.band_changes(token, band));
            }
            Action::SetBand { token, band } => changes.merge(self.band_changes(token, band)),
            Action::ToggleFocus(token) => {
                changes.focus = self.toggle_focus(token);
                if changes.focus && self.focus.is_some() {
                    changes.layout |= self.close_help();
                }
            }
            Action::Focus(token) => {
                changes.focus = self.focus_token(token);
                if changes.focus {
                    changes.layout |= self.close_help();
                }
            }
            Action::ClearFocus => changes.focus = self.clear_focus(),
            Action::Navigate(step) => changes.focus = self.navigate(step),
            Action::SetCategoryVisible { category, visible } => {
                changes.merge(self.set_category_visible(category, visible));
            }
            Action::ToggleCategory(category) => {
                if let Some(visible) = self.categories.get(category).map(|c| c.visible) {
                    changes.merge(self.set_category_visible(category, !visible));
                }
            }
            Action::Reset => changes.merge(self.reset()),
            Action::SetRotationVelocity(v) => self.rotation.set_velocity(v),
            Action::Zoom(delta) => {
                let before = self.camera.distance();
                self.camera.zoom_by(delta);
                changes.camera = self.camera.distance() != before;
            }
            Action::ToggleHelp => {
                self.panels.help_open = !self.panels.help_open;
                self.panels.help_height = None;
                changes.layout = true;
                if self.panels.help_open {
                    changes.focus = self.clear_focus();
                }
            }
            Action::DismissHelp => changes.layout = self.close_help(),
            Action::ExpandPanel => {
                changes.layout = !self.panels.detail_expanded;
                self.panels.detail_expanded = true;
            }
            Action::CollapsePanel => {
                changes.layout =
                    self.panels.detail_expanded || self.panels.detail_height.is_some();
                self.panels.detail_expanded = false;
                self.panels.detail_height = None;
            }
            Action::ResizePanel { panel, height } => {
                if height.is_finite() {
                    match panel {
                        PanelKind::Detail => self.panels.detail_height = Some(height),
                        PanelKind::Help => self.panels.help_height = Some(height),
                    }
                    changes.layout = true;
                }
            }
            Action::Resize(viewport) => {
                let was_narrow = self.is_narrow();
                self.resize(viewport);
                changes.camera = true;
                changes.layout = self.is_narrow() != was_narrow;
            }
        }
        changes
    }

    fn band_changes(&mut self, token: TokenId, band: Band) -> Changes {
        let mut changes = Changes::default();
        if self.set_band(token, band) {
            log::debug!("[session] token {} -> {}", token, band);
            changes.bands = true;
            changes.focused_band = self.focus == Some(token);
        }
        changes
    }

    fn close_help(&mut self) -> bool {
        let was_open = self.panels.help_open;
        self.panels.help_open = false;
        self.panels.help_height = None;
        was_open
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            bands: self.tokens.iter().map(Token::band).collect(),
            categories_visible: self.categories.iter().map(|c| c.visible).collect(),
        }
    }

    /// Replace bands and visibility wholesale. The snapshot must already be
    /// validated against this session's counts; mismatched lengths are ignored.
    pub fn apply_snapshot(&mut self, snapshot: &Snapshot) -> bool {
        if snapshot.bands.len() != self.tokens.len()
            || snapshot.categories_visible.len() != self.categories.len()
        {
            log::warn!("[session] snapshot does not match the token/category counts");
            return false;
        }
        for (t, &band) in self.tokens.iter_mut().zip(&snapshot.bands) {
            t.set_band(band);
        }
        for (i, &visible) in snapshot.categories_visible.iter().enumerate() {
            _ = self.set_category_visible(i, visible);
        }
        true
    }

    /// Apply name-keyed bands from the store; unknown names are skipped.
    /// Returns how many tokens were updated.
    pub fn apply_store_selections(&mut self, selections: &FnvHashMap<String, Band>) -> usize {
        let mut applied = 0;
        for (name, &band) in selections {
            match self.by_name.get(name.as_str()) {
                Some(&id) => {
                    self.tokens[id].set_band(band);
                    applied += 1;
                }
                None => log::debug!("[persist] ignoring unknown token {:?}", name),
            }
        }
        applied
    }

    /// `(name, band)` pairs in creation order, as written to the store.
    pub fn store_entries(&self) -> impl Iterator<Item = (&str, Band)> + '_ {
        self.tokens.iter().map(|t| (t.name(), t.band()))
    }

    /// Render targets for one token. `hovered` comes from the renderer's hit
    /// test and only counts while nothing is focused or dragged.
    pub fn visual_targets(&self, id: TokenId, hovered: bool) -> Option<VisualTargets> {
        let token = self.tokens.get(id)?;
        let drag = self.drag.filter(|d| d.token == id);
        let radius = drag
            .map(|d| d.radius)
            .unwrap_or_else(|| self.radii.radius(token.band()));
        let flags = TokenFlags {
            focused: self.is_focused(id),
            dragged: drag.is_some(),
            hovered,
            category_visible: token.is_category_visible(),
            interaction_locked: self.focus.is_some() || self.drag.is_some(),
        };
        Some(VisualTargets::for_token(radius, flags))
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.camera.set_aspect(viewport.aspect());
        self.camera.set_distance(optimal_distance(viewport.width));
    }

    #[inline]
    pub fn is_narrow(&self) -> bool {
        self.viewport.width <= MEDIUM_VIEWPORT_MAX_WIDTH
    }

    /// Vertical scene shift: narrow layouts lift the wheel above the open
    /// detail panel.
    pub fn scene_offset_y(&self) -> f32 {
        if self.is_narrow() && self.focus.is_some() {
            MOBILE_PANEL_OFFSET_Y
        } else {
            0.0
        }
    }
}
