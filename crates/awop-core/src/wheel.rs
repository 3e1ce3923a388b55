//! Orchestration: applies action batches to the session, then writes through
//! persistence and refreshes the panels once per batch.

use crate::action::Action;
use crate::persist::{persist, restore, sync_hash, LoadSource, PersistenceBackend};
use crate::panel::{DetailModel, PanelDisplay, PanelView};
use crate::session::{Changes, Session};

pub struct Wheel<B: PersistenceBackend, V: PanelView> {
    pub session: Session,
    backend: B,
    view: V,
}

impl<B: PersistenceBackend, V: PanelView> Wheel<B, V> {
    pub fn new(session: Session, backend: B, view: V) -> Self {
        Self {
            session,
            backend,
            view,
        }
    }

    #[inline]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    #[inline]
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Restore persisted state, normalise the URL hash and paint every panel.
    /// The store is left untouched until the first band change.
    pub fn startup(&mut self) -> LoadSource {
        let source = restore(&mut self.session, &self.backend);
        sync_hash(&self.session, &mut self.backend);

        let display = PanelDisplay::for_session(&self.session);
        for c in self.session.categories() {
            self.view.visibility_changed(&c.name, c.visible);
        }
        self.view.score_changed(&self.session.score());
        self.view
            .focus_changed(DetailModel::for_focus(&self.session).as_ref(), display);
        self.view.layout_changed(&self.session.panels, display);
        source
    }

    /// Apply a batch of actions as one unit: at most one persistence write and
    /// one refresh of each affected panel.
    pub fn dispatch<I>(&mut self, actions: I) -> Changes
    where
        I: IntoIterator<Item = Action>,
    {
        let mut changes = Changes::default();
        for action in actions {
            changes.merge(self.session.apply(&action));
        }
        self.publish(&changes);
        changes
    }

    pub fn dispatch_one(&mut self, action: Action) -> Changes {
        self.dispatch(std::iter::once(action))
    }

    /// Everything inner, every category visible, no focus; one combined write.
    pub fn reset(&mut self) -> Changes {
        log::info!("[wheel] reset");
        self.dispatch_one(Action::Reset)
    }

    fn publish(&mut self, changes: &Changes) {
        if changes.is_empty() {
            return;
        }
        if changes.needs_persist() {
            persist(&self.session, &mut self.backend);
        }
        if changes.reset {
            self.view.reset();
        }
        for &i in &changes.categories {
            if let Some(c) = self.session.categories().get(i) {
                self.view.visibility_changed(&c.name, c.visible);
            }
        }
        if changes.bands {
            self.view.score_changed(&self.session.score());
        }
        let display = PanelDisplay::for_session(&self.session);
        if changes.needs_detail_refresh() {
            self.view
                .focus_changed(DetailModel::for_focus(&self.session).as_ref(), display);
        }
        if changes.layout || changes.focus {
            self.view.layout_changed(&self.session.panels, display);
        }
    }
}
