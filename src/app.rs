use crate::panel::DomPanelView;
use crate::render::Scene;
use crate::storage::BrowserBackend;
use crate::theme::Theme;
use awop_core::gesture::{
    wheel_zoom, GestureContext, GestureTuning, PanelMetrics, PanelSwipeMachine, PointerMachine,
    TokenHit, TouchMachine,
};
use awop_core::{Action, Actions, Changes, PanelKind, Session, TokenId, Viewport, Wheel};
use glam::Vec2;

/// Every gesture machine the page drives.
pub struct Gestures {
    pub mouse: PointerMachine,
    pub touch: TouchMachine,
    pub detail: PanelSwipeMachine,
    pub help: PanelSwipeMachine,
}

impl Gestures {
    pub fn new(tuning: GestureTuning) -> Self {
        Self {
            mouse: PointerMachine::mouse(&tuning),
            touch: TouchMachine::new(&tuning),
            detail: PanelSwipeMachine::new(PanelKind::Detail, tuning),
            help: PanelSwipeMachine::new(PanelKind::Help, tuning),
        }
    }

    pub fn is_active(&self) -> bool {
        self.mouse.is_active() || self.touch.is_active()
    }

    pub fn is_rotating(&self) -> bool {
        self.mouse.is_rotating() || self.touch.is_rotating()
    }
}

/// Page state shared by every event handler and the frame loop.
pub struct App {
    pub wheel: Wheel<BrowserBackend, DomPanelView>,
    pub scene: Scene,
    pub theme: Theme,
    pub tuning: GestureTuning,
    pub gestures: Gestures,
    /// Last mouse position over the canvas, for hover picking.
    pub pointer: Option<Vec2>,
    pub hover: Option<TokenId>,
}

impl App {
    pub fn new(wheel: Wheel<BrowserBackend, DomPanelView>, theme: Theme) -> Self {
        let tuning = GestureTuning::default();
        Self {
            scene: Scene::new(&wheel.session),
            wheel,
            theme,
            tuning,
            gestures: Gestures::new(tuning),
            pointer: None,
            hover: None,
        }
    }

    #[inline]
    pub fn session(&self) -> &Session {
        &self.wheel.session
    }

    pub fn pick(&self, pos: Vec2) -> Option<TokenHit> {
        self.scene.pick(&self.wheel.session, pos)
    }

    /// Run one gesture step against the current camera and dispatch whatever
    /// it produced as a single batch.
    fn run<F>(&mut self, f: F) -> Changes
    where
        F: FnOnce(&mut Gestures, &GestureContext<'_>) -> Actions,
    {
        let actions = {
            let s = &self.wheel.session;
            let ctx = GestureContext::new(&s.camera, s.viewport, s.radii);
            f(&mut self.gestures, &ctx)
        };
        if actions.is_empty() {
            return Changes::default();
        }
        self.wheel.dispatch(actions)
    }

    pub fn mouse_down(&mut self, pos: Vec2) {
        let hit = self.pick(pos);
        if let Some(h) = hit {
            log::debug!("[mouse] press on token {}", h.token);
        }
        self.run(|g, ctx| g.mouse.press(pos, hit, ctx));
    }

    /// Moves are tracked page-wide so drags survive leaving the canvas; only
    /// moves over the canvas count for hover.
    pub fn mouse_move(&mut self, pos: Vec2, over_canvas: bool) {
        self.pointer = over_canvas.then_some(pos);
        if self.gestures.mouse.is_active() {
            self.run(|g, ctx| g.mouse.move_to(pos, ctx));
        }
    }

    pub fn mouse_up(&mut self, pos: Vec2) {
        if self.gestures.mouse.is_active() {
            self.run(|g, ctx| g.mouse.release(pos, ctx));
        }
    }

    pub fn scroll(&mut self, delta_y: f32) {
        let action = wheel_zoom(delta_y, &self.tuning);
        self.wheel.dispatch_one(action);
    }

    /// `touches` are all fingers still down, in canvas CSS px.
    pub fn touch_start(&mut self, touches: &[Vec2]) {
        let hit = match touches {
            [only] => self.pick(*only),
            _ => None,
        };
        self.run(|g, ctx| g.touch.start(touches, hit, ctx));
    }

    pub fn touch_move(&mut self, touches: &[Vec2]) {
        self.run(|g, ctx| g.touch.move_to(touches, ctx));
    }

    pub fn touch_end(&mut self, remaining: &[Vec2], lifted: Option<Vec2>) {
        self.run(|g, ctx| g.touch.end(remaining, lifted, ctx));
    }

    pub fn touch_cancel(&mut self) {
        let actions = self.gestures.touch.cancel();
        self.wheel.dispatch(actions);
    }

    fn swipe(&mut self, kind: PanelKind) -> &mut PanelSwipeMachine {
        match kind {
            PanelKind::Detail => &mut self.gestures.detail,
            PanelKind::Help => &mut self.gestures.help,
        }
    }

    pub fn panel_touch_start(
        &mut self,
        kind: PanelKind,
        pos: Vec2,
        on_grab_bar: bool,
        metrics: &PanelMetrics,
    ) {
        self.swipe(kind).touch_start(pos, on_grab_bar, metrics);
    }

    /// Returns true while a grab bar drag owns the gesture, so the caller can
    /// stop the page from scrolling.
    pub fn panel_touch_move(&mut self, kind: PanelKind, pos: Vec2, metrics: &PanelMetrics) -> bool {
        let actions = self.swipe(kind).touch_move(pos, metrics);
        let grabbing = !actions.is_empty();
        self.wheel.dispatch(actions);
        grabbing
    }

    pub fn panel_touch_end(&mut self, kind: PanelKind, pos: Vec2, metrics: &PanelMetrics) {
        let focused = self.wheel.session.focus().is_some();
        let actions = self.swipe(kind).touch_end(pos, metrics, focused);
        self.wheel.dispatch(actions);
    }

    /// Crossing the narrow breakpoint republishes the panel layout.
    pub fn resize(&mut self, viewport: Viewport) {
        self.wheel.dispatch_one(Action::Resize(viewport));
        log::info!(
            "[resize] {}x{} camera z {:.1}",
            viewport.width,
            viewport.height,
            self.wheel.session.camera.distance()
        );
    }

    /// One animation frame: rotation momentum, hover, easing.
    pub fn tick(&mut self, time_ms: f64) {
        let focused = self.wheel.session.focus().is_some();
        self.wheel
            .session
            .rotation
            .tick(self.gestures.is_active(), focused);

        self.hover = if self.gestures.is_active() {
            None
        } else {
            self.pointer.and_then(|p| self.pick(p)).map(|h| h.token)
        };
        self.scene.step(&self.wheel.session, self.hover, time_ms);
    }

    /// CSS cursor for the canvas.
    pub fn cursor(&self) -> &'static str {
        if self.gestures.mouse.dragged_token().is_some() || self.gestures.is_rotating() {
            "grabbing"
        } else if self.hover.is_some() {
            "pointer"
        } else {
            "grab"
        }
    }
}
