//! What the DOM panels should show, derived from the session.
//!
//! The core never touches the DOM. It builds plain view models and hands them
//! to a [`PanelView`] implementation.

use crate::band::Band;
use crate::content::{slugify, Dataset, LegalProtection, UNKNOWN_CATEGORY_COLOR, UNKNOWN_CATEGORY_LABEL};
use crate::score::ScoreSummary;
use crate::session::{PanelLayout, Session};
use crate::token::TokenId;

/// DOM collaborator driven by [`crate::wheel::Wheel`].
pub trait PanelView {
    /// Focus moved (or the focused token's content changed). `None` hides
    /// the detail panel.
    fn focus_changed(&mut self, detail: Option<&DetailModel>, display: PanelDisplay);
    fn visibility_changed(&mut self, category: &str, visible: bool);
    fn score_changed(&mut self, score: &ScoreSummary);
    fn layout_changed(&mut self, layout: &PanelLayout, display: PanelDisplay);
    /// Called once after a reset, before the individual change hooks.
    fn reset(&mut self) {}
}

/// Which side panel is on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelDisplay {
    Detail,
    Help,
    None,
}

impl PanelDisplay {
    /// Focus always wins. Wide layouts fall back to the help panel; narrow
    /// ones only show it when opened from the burger button.
    pub fn resolve(focused: bool, help_open: bool, narrow: bool) -> Self {
        if focused {
            PanelDisplay::Detail
        } else if help_open || !narrow {
            PanelDisplay::Help
        } else {
            PanelDisplay::None
        }
    }

    pub fn for_session(session: &Session) -> Self {
        Self::resolve(
            session.focus().is_some(),
            session.panels.help_open,
            session.is_narrow(),
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SpectrumItem {
    pub band: Band,
    /// `"1 point"`, `"2 points"`, `"3 points"`.
    pub points_label: String,
    pub text: &'static str,
    pub selected: bool,
}

#[derive(Clone, Debug)]
pub struct DetailModel {
    pub token: TokenId,
    pub title: String,
    pub category: String,
    pub category_color: &'static str,
    pub description: &'static str,
    pub legal: Option<LegalProtection>,
    /// Outer, middle, inner.
    pub spectrum: Vec<SpectrumItem>,
    /// `"<index+1> / <count>"`.
    pub nav_counter: String,
    pub nav_enabled: bool,
}

impl DetailModel {
    pub fn for_token(session: &Session, id: TokenId) -> Option<Self> {
        let token = session.token(id)?;
        let dataset = session.dataset();
        let axis = dataset.axis(token.name());
        let category = dataset
            .category(token.category())
            .map(|c| c.name)
            .unwrap_or(UNKNOWN_CATEGORY_LABEL);
        let spectrum = Band::OUTWARD_IN
            .iter()
            .map(|&band| SpectrumItem {
                band,
                points_label: points_label(band.points()),
                text: axis.map(|a| a.spectrum.label(band)).unwrap_or(""),
                selected: token.band() == band,
            })
            .collect();
        Some(Self {
            token: id,
            title: token.name().to_string(),
            category: category.to_string(),
            category_color: dataset.category_color(token.category()),
            description: axis.map(|a| a.description).unwrap_or(""),
            legal: axis.map(|a| a.protection),
            spectrum,
            nav_counter: format!("{} / {}", id + 1, session.token_count()),
            nav_enabled: session.nav_enabled(),
        })
    }

    pub fn for_focus(session: &Session) -> Option<Self> {
        session.focus().and_then(|id| Self::for_token(session, id))
    }
}

fn points_label(points: u32) -> String {
    if points == 1 {
        "1 point".to_string()
    } else {
        format!("{points} points")
    }
}

/// A category filter button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryButton {
    pub index: usize,
    pub name: String,
    /// `--cat-<slug>` theme variable consulted before `color`.
    pub css_var: String,
    pub color: &'static str,
    pub active: bool,
}

pub fn category_buttons(session: &Session) -> Vec<CategoryButton> {
    session
        .categories()
        .iter()
        .enumerate()
        .map(|(index, c)| CategoryButton {
            index,
            name: c.name.clone(),
            css_var: format!("--cat-{}", slugify(&c.name)),
            color: session.dataset().category_color(&c.name),
            active: c.visible,
        })
        .collect()
}

/// Hover tooltip for a category button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryTooltip {
    pub title: String,
    pub color: &'static str,
    pub description: &'static str,
    /// `"Includes: a, b, c"`.
    pub includes: String,
}

impl CategoryTooltip {
    pub fn for_category(dataset: &Dataset, name: &str) -> Self {
        match dataset.category(name) {
            Some(c) => Self {
                title: c.name.to_string(),
                color: c.color,
                description: c.description,
                includes: format!("Includes: {}", dataset.axes_in(name).join(", ")),
            },
            None => Self {
                title: UNKNOWN_CATEGORY_LABEL.to_string(),
                color: UNKNOWN_CATEGORY_COLOR,
                description: "",
                includes: String::new(),
            },
        }
    }
}
