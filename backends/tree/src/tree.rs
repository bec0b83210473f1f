//! Arena storing views, their frames and their negotiators.

use core::fmt;

use boxwright_color::{ColorChooser, PaletteCycle, Srgb};
use boxwright_core::{Host, LayoutCtx, Point, Rect, Size, ViewId};
use boxwright_layout::FrameNegotiator;
use tracing::{debug, trace};

use crate::{Content, TreeError};

/// What a view does during layout.
#[derive(Debug)]
pub enum Node {
    /// A leaf answering size queries.
    Content(Box<dyn Content>),
    /// A frame negotiator laying out a single target.
    Negotiator(FrameNegotiator),
    /// A grouping view whose children are positioned by hand. Takes whatever
    /// it is offered.
    Container,
}

impl Node {
    /// Wraps a leaf.
    #[must_use]
    pub fn content(content: impl Content + 'static) -> Self {
        Self::Content(Box::new(content))
    }

    /// Wraps a negotiator.
    #[must_use]
    pub const fn negotiator(negotiator: FrameNegotiator) -> Self {
        Self::Negotiator(negotiator)
    }
}

#[derive(Debug)]
struct NodeEntry {
    parent: Option<ViewId>,
    children: Vec<ViewId>,
    node: Node,
    frame: Rect,
    hidden: bool,
}

impl NodeEntry {
    fn new(node: Node, parent: Option<ViewId>) -> Self {
        Self {
            parent,
            children: Vec::new(),
            node,
            frame: Rect::default(),
            hidden: false,
        }
    }
}

/// Arena holding a view hierarchy.
///
/// Slots of removed views are never reused, so a stale [`ViewId`] stays stale.
/// Negotiators whose layout is out of date are queued as dirty until a
/// [`LayoutEngine`](crate::LayoutEngine) drains them.
pub struct ViewTree {
    nodes: Vec<Option<NodeEntry>>,
    root: Option<ViewId>,
    dirty: Vec<ViewId>,
    attached: bool,
    colors: Box<dyn ColorChooser>,
}

impl fmt::Debug for ViewTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewTree")
            .field("nodes", &self.nodes)
            .field("root", &self.root)
            .field("dirty", &self.dirty)
            .field("attached", &self.attached)
            .finish_non_exhaustive()
    }
}

impl Default for ViewTree {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewTree {
    /// Creates an empty tree that colors debug outlines from the default
    /// palette.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
            dirty: Vec::new(),
            attached: false,
            colors: Box::new(PaletteCycle::new()),
        }
    }

    /// Replaces the chooser handing out debug outline colors to negotiators
    /// inserted from now on.
    #[must_use]
    pub fn with_color_chooser(mut self, chooser: impl ColorChooser + 'static) -> Self {
        self.colors = Box::new(chooser);
        self
    }

    // ------------------------------------------------------------------
    // Structure
    // ------------------------------------------------------------------

    /// Replaces the root view, removing any existing views.
    ///
    /// A root negotiator cannot target itself. Such a target is dropped.
    pub fn replace_root(&mut self, mut node: Node) -> ViewId {
        self.nodes.iter_mut().for_each(|slot| *slot = None);
        self.dirty.clear();

        let id = ViewId::new(self.nodes.len());
        if let Node::Negotiator(negotiator) = &mut node {
            if negotiator.target() == Some(id) {
                debug!(view = ?id, "root negotiator cannot target itself");
                negotiator.set_target(None);
            }
        }
        let root = self.push_entry(NodeEntry::new(node, None));
        self.root = Some(root);
        self.mark_dirty(root);
        root
    }

    /// Adds a child under `parent`.
    ///
    /// # Errors
    ///
    /// [`TreeError::UnknownView`] if `parent` is not in the tree and
    /// [`TreeError::CyclicTarget`] if `node` is a negotiator whose target
    /// would end up laying out the new view itself.
    pub fn insert_child(&mut self, parent: ViewId, node: Node) -> Result<ViewId, TreeError> {
        if !self.contains(parent) {
            return Err(TreeError::UnknownView(parent));
        }
        let target = match &node {
            Node::Negotiator(negotiator) => negotiator.target(),
            _ => None,
        };
        if let Some(target) = target {
            self.check_target(ViewId::new(self.nodes.len()), Some(parent), target)?;
        }
        let id = self.push_entry(NodeEntry::new(node, Some(parent)));
        if let Some(entry) = self.entry_mut(parent) {
            entry.children.push(id);
        }
        if matches!(self.node(id), Some(Node::Negotiator(_))) {
            self.mark_dirty(id);
        }
        Ok(id)
    }

    /// Adds a child under the negotiator at `negotiator` and makes it that
    /// negotiator's target.
    ///
    /// # Errors
    ///
    /// [`TreeError::UnknownView`] if `negotiator` is not in the tree and
    /// [`TreeError::NotANegotiator`] if it holds something else.
    /// [`TreeError::CyclicTarget`] if `node` is a negotiator whose targets
    /// lead back to `negotiator`; nothing is inserted then.
    pub fn insert_target(&mut self, negotiator: ViewId, node: Node) -> Result<ViewId, TreeError> {
        match self.node(negotiator) {
            None => return Err(TreeError::UnknownView(negotiator)),
            Some(Node::Negotiator(_)) => {}
            Some(_) => return Err(TreeError::NotANegotiator(negotiator)),
        }
        let target = self.insert_child(negotiator, node)?;
        if let Err(error) = self.configure(negotiator, |n| n.set_target(Some(target))) {
            self.remove(target)?;
            return Err(error);
        }
        Ok(target)
    }

    /// Removes `view` and everything below it.
    ///
    /// Negotiators targeting a removed view keep the stale id and lay out as
    /// if they had no target.
    ///
    /// # Errors
    ///
    /// [`TreeError::UnknownView`] if `view` is not in the tree.
    pub fn remove(&mut self, view: ViewId) -> Result<(), TreeError> {
        let parent = self.entry(view).ok_or(TreeError::UnknownView(view))?.parent;

        let mut removed = Vec::new();
        let mut pending = vec![view];
        while let Some(id) = pending.pop() {
            if let Some(entry) = self.nodes.get_mut(id.index()).and_then(Option::take) {
                pending.extend(entry.children);
                removed.push(id);
            }
        }

        if let Some(entry) = parent.and_then(|parent| self.entry_mut(parent)) {
            entry.children.retain(|child| *child != view);
        }
        if self.root == Some(view) {
            self.root = None;
        }
        let nodes = &self.nodes;
        self.dirty
            .retain(|id| nodes.get(id.index()).is_some_and(Option::is_some));

        for id in &removed {
            for owner in self.owners(*id) {
                self.invalidate(owner);
            }
        }
        debug!(?view, count = removed.len(), "views removed");
        Ok(())
    }

    /// Returns the root view, if one exists.
    #[must_use]
    pub const fn root(&self) -> Option<ViewId> {
        self.root
    }

    /// Returns the children of `view`.
    #[must_use]
    pub fn children(&self, view: ViewId) -> &[ViewId] {
        self.entry(view)
            .map_or(&[], |entry| entry.children.as_slice())
    }

    /// Returns the node stored at `view`.
    #[must_use]
    pub fn node(&self, view: ViewId) -> Option<&Node> {
        self.entry(view).map(|entry| &entry.node)
    }

    /// Returns the negotiator stored at `view`.
    #[must_use]
    pub fn negotiator(&self, view: ViewId) -> Option<&FrameNegotiator> {
        match self.node(view)? {
            Node::Negotiator(negotiator) => Some(negotiator),
            _ => None,
        }
    }

    /// Returns the number of live views.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.iter().flatten().count()
    }

    /// Returns true when the tree holds no views.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.iter().all(Option::is_none)
    }

    // ------------------------------------------------------------------
    // Mutation
    // ------------------------------------------------------------------

    /// Runs `configure` against the negotiator at `view` and schedules the
    /// affected negotiators for layout.
    ///
    /// # Errors
    ///
    /// [`TreeError::UnknownView`] if `view` is not in the tree,
    /// [`TreeError::NotANegotiator`] if it holds something else and
    /// [`TreeError::CyclicTarget`] if the new target is `view`, one of its
    /// ancestors, or a negotiator whose chain of targets leads back to
    /// `view`. The previous target is restored; other changes are kept.
    pub fn configure(
        &mut self,
        view: ViewId,
        configure: impl FnOnce(&mut FrameNegotiator),
    ) -> Result<(), TreeError> {
        let previous = match self.entry_mut(view).map(|entry| &mut entry.node) {
            None => return Err(TreeError::UnknownView(view)),
            Some(Node::Negotiator(negotiator)) => {
                let previous = negotiator.target();
                configure(negotiator);
                previous
            }
            Some(_) => return Err(TreeError::NotANegotiator(view)),
        };

        let target = self.negotiator(view).and_then(FrameNegotiator::target);
        let checked = match target {
            Some(target) if Some(target) != previous => {
                self.check_target(view, self.parent(view), target)
            }
            _ => Ok(()),
        };
        if checked.is_err() {
            if let Some(Node::Negotiator(negotiator)) =
                self.entry_mut(view).map(|entry| &mut entry.node)
            {
                negotiator.set_target(previous);
            }
        }
        self.invalidate(view);
        checked
    }

    /// Hides or shows `view`.
    ///
    /// # Errors
    ///
    /// [`TreeError::UnknownView`] if `view` is not in the tree.
    pub fn set_hidden(&mut self, view: ViewId, hidden: bool) -> Result<(), TreeError> {
        let entry = self.entry_mut(view).ok_or(TreeError::UnknownView(view))?;
        if entry.hidden != hidden {
            entry.hidden = hidden;
            self.invalidate(view);
        }
        Ok(())
    }

    /// Whether the tree is attached to a rendering surface.
    #[must_use]
    pub const fn is_attached(&self) -> bool {
        self.attached
    }

    /// Attaches the tree to, or detaches it from, a rendering surface.
    ///
    /// While attached, coordinate translation uses absolute surface origins
    /// instead of walking ancestors.
    pub fn set_attached(&mut self, attached: bool) {
        if self.attached != attached {
            debug!(attached, "surface attachment changed");
            self.attached = attached;
        }
    }

    /// Marks `view` as out of date.
    ///
    /// The negotiator at `view`, if any, drops its measurement cache and is
    /// queued. Every negotiator targeting `view` is invalidated the same way,
    /// and so on up the chain of owners.
    pub fn invalidate(&mut self, view: ViewId) {
        let mut visited = Vec::new();
        let mut pending = vec![view];
        while let Some(id) = pending.pop() {
            if visited.contains(&id) {
                continue;
            }
            visited.push(id);

            if let Some(Node::Negotiator(negotiator)) =
                self.entry_mut(id).map(|entry| &mut entry.node)
            {
                negotiator.invalidate();
                self.mark_dirty(id);
            }
            pending.extend(self.owners(id));
        }
    }

    /// Assigns a frame to `view`.
    ///
    /// Returns whether the frame changed. When it did, a negotiator at `view`
    /// is queued for layout along with its target, if that is a negotiator
    /// too. So is every negotiator whose translation into its target's space
    /// runs through `view`.
    ///
    /// # Errors
    ///
    /// [`TreeError::UnknownView`] if `view` is not in the tree and
    /// [`TreeError::InvalidGeometry`] if `frame` fails
    /// [`Rect::validate`]. The previous frame is kept in both cases.
    pub fn try_set_frame(&mut self, view: ViewId, frame: Rect) -> Result<bool, TreeError> {
        if !self.contains(view) {
            return Err(TreeError::UnknownView(view));
        }
        frame.validate()?;

        let Some(entry) = self.entry_mut(view) else {
            return Err(TreeError::UnknownView(view));
        };
        if entry.frame == frame {
            return Ok(false);
        }
        entry.frame = frame;
        let is_negotiator = matches!(entry.node, Node::Negotiator(_));
        trace!(?view, ?frame, "frame assigned");

        if is_negotiator {
            self.mark_dirty(view);
            let target = self.negotiator(view).and_then(FrameNegotiator::target);
            if let Some(target) = target.filter(|target| self.negotiator(*target).is_some()) {
                self.mark_dirty(target);
            }
        }
        for dependent in self.translated_through(view) {
            self.mark_dirty(dependent);
        }
        Ok(true)
    }

    // ------------------------------------------------------------------
    // Dirty queue
    // ------------------------------------------------------------------

    /// Queues `view` for the next layout pass.
    pub fn mark_dirty(&mut self, view: ViewId) {
        if !self.dirty.contains(&view) {
            self.dirty.push(view);
        }
    }

    /// Returns true when views are waiting for layout.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        !self.dirty.is_empty()
    }

    /// Drains the queue, shallowest views first.
    pub fn drain_dirty(&mut self) -> Vec<ViewId> {
        let mut dirty = core::mem::take(&mut self.dirty);
        dirty.sort_by_key(|view| self.depth(*view));
        dirty
    }

    // ------------------------------------------------------------------
    // Debugging
    // ------------------------------------------------------------------

    /// Lists the outline of every visible negotiator that asks for one, in
    /// root coordinates.
    #[must_use]
    pub fn debug_outlines(&self) -> Vec<(ViewId, Rect, Srgb)> {
        self.entries()
            .filter_map(|(id, entry)| {
                let Node::Negotiator(negotiator) = &entry.node else {
                    return None;
                };
                if !negotiator.shows_debug_outline() || !self.is_visible(id) {
                    return None;
                }
                let origin = self.absolute_origin(id)?;
                Some((
                    id,
                    Rect::new(origin, entry.frame.size()),
                    negotiator.debug_color(),
                ))
            })
            .collect()
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn push_entry(&mut self, mut entry: NodeEntry) -> ViewId {
        if let Node::Negotiator(negotiator) = &mut entry.node {
            negotiator.choose_debug_color(&mut *self.colors);
        }
        let id = ViewId::new(self.nodes.len());
        self.nodes.push(Some(entry));
        id
    }

    fn entry(&self, view: ViewId) -> Option<&NodeEntry> {
        self.nodes.get(view.index()).and_then(Option::as_ref)
    }

    fn entry_mut(&mut self, view: ViewId) -> Option<&mut NodeEntry> {
        self.nodes.get_mut(view.index()).and_then(Option::as_mut)
    }

    fn entries(&self) -> impl Iterator<Item = (ViewId, &NodeEntry)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| Some((ViewId::new(index), entry.as_ref()?)))
    }

    /// Negotiators whose target is `view`.
    fn owners(&self, view: ViewId) -> Vec<ViewId> {
        self.entries()
            .filter_map(|(id, entry)| match &entry.node {
                Node::Negotiator(negotiator) if negotiator.target() == Some(view) => Some(id),
                _ => None,
            })
            .collect()
    }

    /// Negotiators other than `view` with `view` on exactly one side of the
    /// path to their target's parent.
    fn translated_through(&self, view: ViewId) -> Vec<ViewId> {
        self.entries()
            .filter_map(|(id, entry)| match &entry.node {
                Node::Negotiator(negotiator) if id != view => {
                    let target_parent = self.entry(negotiator.target()?)?.parent;
                    let above_negotiator = self.ancestors(id).any(|a| a == view);
                    let above_target = target_parent
                        .is_some_and(|parent| self.ancestors(parent).any(|a| a == view));
                    (above_negotiator != above_target).then_some(id)
                }
                _ => None,
            })
            .collect()
    }

    /// Refuses a `target` for the negotiator at `negotiator` (child of
    /// `parent`) that would make measuring recurse forever.
    fn check_target(
        &self,
        negotiator: ViewId,
        parent: Option<ViewId>,
        target: ViewId,
    ) -> Result<(), TreeError> {
        let cyclic = target == negotiator
            || parent.is_some_and(|parent| self.ancestors(parent).any(|id| id == target))
            || self.targets_lead_to(target, negotiator);
        if cyclic {
            debug!(?negotiator, ?target, "cyclic target refused");
            return Err(TreeError::CyclicTarget { negotiator, target });
        }
        Ok(())
    }

    /// Whether following targets from `from` reaches `to`.
    fn targets_lead_to(&self, from: ViewId, to: ViewId) -> bool {
        let mut visited = Vec::new();
        let mut next = Some(from);
        while let Some(id) = next {
            if id == to {
                return true;
            }
            if visited.contains(&id) {
                return false;
            }
            visited.push(id);
            next = self.negotiator(id).and_then(FrameNegotiator::target);
        }
        false
    }

    fn ancestors(&self, view: ViewId) -> impl Iterator<Item = ViewId> + '_ {
        core::iter::successors(Some(view), |id| self.entry(*id)?.parent)
    }

    fn depth(&self, view: ViewId) -> usize {
        self.ancestors(view).count()
    }

    fn is_visible(&self, view: ViewId) -> bool {
        self.ancestors(view)
            .all(|id| self.entry(id).is_some_and(|entry| !entry.hidden))
    }

    /// Origin of `view`'s own coordinate space in root coordinates.
    fn absolute_origin(&self, view: ViewId) -> Option<Point> {
        self.ancestors(view).try_fold(Point::zero(), |origin, id| {
            Some(origin.offset(self.entry(id)?.frame.origin()))
        })
    }
}

impl Host for ViewTree {
    fn contains(&self, view: ViewId) -> bool {
        self.entry(view).is_some()
    }

    fn parent(&self, view: ViewId) -> Option<ViewId> {
        self.entry(view)?.parent
    }

    fn is_hidden(&self, view: ViewId) -> bool {
        self.entry(view).is_some_and(|entry| entry.hidden)
    }

    fn frame(&self, view: ViewId) -> Rect {
        self.entry(view).map(|entry| entry.frame).unwrap_or_default()
    }

    fn size_that_fits(&self, view: ViewId, proposal: Size) -> Size {
        let Some(entry) = self.entry(view) else {
            return Size::zero();
        };
        let size = match &entry.node {
            Node::Content(content) => content.size_that_fits(proposal),
            Node::Negotiator(negotiator) => negotiator.measure(LayoutCtx::new(self, view), proposal),
            Node::Container => proposal,
        };
        trace!(?view, ?proposal, ?size, "measured");
        size
    }

    fn set_frame(&mut self, view: ViewId, frame: Rect) {
        if let Err(error) = self.try_set_frame(view, frame) {
            debug!(?view, ?frame, %error, "frame rejected");
        }
    }

    fn request_layout(&mut self, view: ViewId) {
        self.invalidate(view);
    }

    fn surface_origin(&self, view: ViewId) -> Option<Point> {
        if self.attached {
            self.absolute_origin(view)
        } else {
            None
        }
    }
}
