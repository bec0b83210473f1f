//! A small in-memory [`Host`] for unit tests.

use core::cell::Cell;

use crate::{Host, Point, Rect, Size, ViewId};

/// How the mock target answers a size query.
#[derive(Debug, Clone, Copy)]
pub enum Probe {
    /// Always the same size.
    Fixed(Size),
    /// Whatever it is offered.
    Echo,
}

impl Probe {
    pub const fn fixed(width: f32, height: f32) -> Self {
        Self::Fixed(Size::new(width, height))
    }

    pub const fn echo() -> Self {
        Self::Echo
    }
}

#[derive(Debug)]
struct MockView {
    parent: Option<ViewId>,
    frame: Rect,
    hidden: Cell<bool>,
    probe: Probe,
}

/// View 0 is the negotiator's own view, view 1 its target.
#[derive(Debug)]
pub struct MockHost {
    views: Vec<MockView>,
    attached: bool,
    calls: Cell<usize>,
    last_proposal: Cell<Option<Size>>,
}

pub fn probe_host(probe: Probe) -> MockHost {
    MockHost {
        views: vec![
            MockView {
                parent: None,
                frame: Rect::from_xywh(0.0, 0.0, 300.0, 100.0),
                hidden: Cell::new(false),
                probe: Probe::fixed(0.0, 0.0),
            },
            MockView {
                parent: Some(ViewId::new(0)),
                frame: Rect::default(),
                hidden: Cell::new(false),
                probe,
            },
        ],
        attached: false,
        calls: Cell::new(0),
        last_proposal: Cell::new(None),
    }
}

impl MockHost {
    pub const fn target(&self) -> ViewId {
        ViewId::new(1)
    }

    pub fn add_view(&mut self, parent: Option<ViewId>, frame: Rect) -> ViewId {
        self.views.push(MockView {
            parent,
            frame,
            hidden: Cell::new(false),
            probe: Probe::fixed(0.0, 0.0),
        });
        ViewId::new(self.views.len() - 1)
    }

    pub fn reparent(&mut self, view: ViewId, parent: Option<ViewId>) {
        self.views[view.index()].parent = parent;
    }

    pub fn set_target_hidden(&self, hidden: bool) {
        self.views[1].hidden.set(hidden);
    }

    pub fn set_root_hidden(&self, hidden: bool) {
        self.views[0].hidden.set(hidden);
    }

    pub const fn set_attached(&mut self, attached: bool) {
        self.attached = attached;
    }

    pub fn frame_of(&self, view: ViewId) -> Rect {
        self.views[view.index()].frame
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn last_proposal(&self) -> Option<Size> {
        self.last_proposal.get()
    }
}

impl Host for MockHost {
    fn contains(&self, view: ViewId) -> bool {
        view.index() < self.views.len()
    }

    fn parent(&self, view: ViewId) -> Option<ViewId> {
        self.views[view.index()].parent
    }

    fn is_hidden(&self, view: ViewId) -> bool {
        self.views[view.index()].hidden.get()
    }

    fn frame(&self, view: ViewId) -> Rect {
        self.views[view.index()].frame
    }

    fn size_that_fits(&self, view: ViewId, proposal: Size) -> Size {
        self.calls.set(self.calls.get() + 1);
        self.last_proposal.set(Some(proposal));
        match self.views[view.index()].probe {
            Probe::Fixed(size) => size,
            Probe::Echo => proposal,
        }
    }

    fn set_frame(&mut self, view: ViewId, frame: Rect) {
        if frame.validate().is_ok() {
            self.views[view.index()].frame = frame;
        }
    }

    fn request_layout(&mut self, _view: ViewId) {}

    fn surface_origin(&self, view: ViewId) -> Option<Point> {
        if !self.attached {
            return None;
        }
        let mut origin = Point::zero();
        let mut current = Some(view);
        while let Some(id) = current {
            origin = origin.offset(self.frame(id).origin());
            current = self.parent(id);
        }
        Some(origin)
    }
}
