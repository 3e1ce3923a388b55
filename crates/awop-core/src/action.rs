//! Commands produced by gesture machines and UI controls, applied to the
//! session by [`crate::wheel::Wheel::dispatch`].

use crate::band::Band;
use crate::geometry::Viewport;
use crate::token::TokenId;
use glam::Vec2;
use smallvec::SmallVec;

/// Which mobile panel a panel action targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelKind {
    /// Token detail panel.
    Detail,
    /// Default "how to use" panel.
    Help,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// A token was grabbed; it takes the drag scale until released.
    BeginTokenDrag(TokenId),
    /// Live radius of the grabbed token.
    DragToken { token: TokenId, radius: f32 },
    /// Release without a band change (tap, or preempted by another gesture).
    CancelTokenDrag(TokenId),
    /// Completed drag: snap to `band` (persisting).
    DropToken { token: TokenId, band: Band },
    /// Persisting band change from a UI control.
    SetBand { token: TokenId, band: Band },
    ToggleFocus(TokenId),
    Focus(TokenId),
    ClearFocus,
    /// Move focus by `±n` in creation order, wrapping.
    Navigate(i32),
    SetCategoryVisible { category: usize, visible: bool },
    ToggleCategory(usize),
    /// Everything inner, every category visible, no focus.
    Reset,
    SetRotationVelocity(Vec2),
    /// Camera distance change; positive zooms out.
    Zoom(f32),
    ToggleHelp,
    DismissHelp,
    ExpandPanel,
    CollapsePanel,
    ResizePanel { panel: PanelKind, height: f32 },
    /// New drawing surface size; refits the camera.
    Resize(Viewport),
}

pub type Actions = SmallVec<[Action; 4]>;
