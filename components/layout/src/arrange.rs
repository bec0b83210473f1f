//! Second pass: where the target goes.

use crate::{
    AxisAlignment, Axes, FrameNegotiator, Host, LayoutCtx, Point, Rect, Size, ViewId,
    resolve_axis,
};

/// A resolved target frame, ready to be written to the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// The view being placed.
    pub target: ViewId,
    /// Its new frame, in its parent's coordinate space.
    pub frame: Rect,
}

impl Placement {
    /// Writes the frame onto the target.
    pub fn commit<H: Host + ?Sized>(self, host: &mut H) {
        host.set_frame(self.target, self.frame);
    }
}

impl FrameNegotiator {
    /// Computes where the target goes inside `container`, which is in the
    /// negotiator's own coordinate space.
    ///
    /// Returns `None` when there is nothing to place: no live target, a hidden
    /// target, a hidden negotiator, or a container without positive area.
    /// The frame in the returned [`Placement`] is already translated into the
    /// target's parent's space.
    pub fn place<H: Host + ?Sized>(
        &self,
        cx: LayoutCtx<'_, H>,
        container: Rect,
    ) -> Option<Placement> {
        let host = cx.host();
        let target = self.live_target(host)?;
        if host.is_hidden(target) || Self::is_self_hidden(cx) {
            return None;
        }
        if !(container.width() > 0.0 && container.height() > 0.0) {
            return None;
        }

        let inner = container.inset_by(&self.config.edge_insets);
        let content = if self.needs_content_size() {
            self.content_size_that_fits(cx, inner.size())
        } else {
            Size::zero()
        };

        let local = self.resolve_frame(inner, content);
        let frame = if host.parent(target) == Some(cx.view()) {
            local
        } else {
            Self::translate(cx, target, local)
        };
        Some(Placement { target, frame })
    }

    /// Places the target inside `container` and commits the result.
    ///
    /// Returns true if a frame was assigned.
    pub fn arrange<H: Host + ?Sized>(&self, host: &mut H, view: ViewId, container: Rect) -> bool {
        let Some(placement) = self.place(LayoutCtx::new(&*host, view), container) else {
            return false;
        };
        placement.commit(host);
        true
    }

    /// Resolves both axes for `content` inside the already-inset `inner`
    /// rectangle and snaps the result to whole points.
    #[must_use]
    pub fn resolve_frame(&self, inner: Rect, content: Size) -> Rect {
        let growing = self.config.allow_growing;
        let shrinking = self.config.allow_shrinking;

        let (x, width) = resolve_axis(
            AxisAlignment::from(self.config.horizontal_alignment),
            inner.x(),
            inner.width(),
            content.width,
            growing.contains(Axes::HORIZONTAL),
            shrinking.contains(Axes::HORIZONTAL),
        );
        let (y, height) = resolve_axis(
            AxisAlignment::from(self.config.vertical_alignment),
            inner.y(),
            inner.height(),
            content.height,
            growing.contains(Axes::VERTICAL),
            shrinking.contains(Axes::VERTICAL),
        );

        Rect::new(Point::new(x, y), Size::new(width, height)).integral()
    }

    /// Moves `frame` from the negotiator's space into the space of the
    /// target's parent. A target with no parent, or one the host cannot relate
    /// to the negotiator, keeps the untranslated frame.
    fn translate<H: Host + ?Sized>(cx: LayoutCtx<'_, H>, target: ViewId, frame: Rect) -> Rect {
        cx.host()
            .parent(target)
            .and_then(|parent| cx.host().convert_rect(frame, cx.view(), parent))
            .unwrap_or(frame)
    }

    /// Returns true when neither axis is stretched, i.e. when the target's
    /// intrinsic size matters to placement at all.
    #[must_use]
    pub const fn needs_content_size(&self) -> bool {
        !self.config.alignment().is_fill()
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::{Probe, probe_host};
    use crate::{
        Alignment, Axes, EdgeInsets, FrameNegotiator, HorizontalAlignment, LayoutCtx, Rect, Size,
        VerticalAlignment, ViewId,
    };

    const ROOT: ViewId = ViewId::new(0);

    #[test]
    fn test_fill_uses_inner_rect() {
        let mut host = probe_host(Probe::fixed(5.0, 5.0));
        let negotiator = FrameNegotiator::new()
            .with_target(host.target())
            .insets(EdgeInsets::new(1.0, 2.0, 3.0, 4.0))
            .aligned(Alignment::FILL);

        assert!(negotiator.arrange(&mut host, ROOT, Rect::from_xywh(0.0, 0.0, 100.0, 50.0)));
        assert_eq!(
            host.frame_of(host.target()),
            Rect::from_xywh(2.0, 1.0, 94.0, 46.0)
        );
        assert_eq!(host.calls(), 0);
    }

    #[test]
    fn test_corner_alignments() {
        let host = probe_host(Probe::fixed(30.0, 20.0));
        let container = Rect::from_xywh(0.0, 0.0, 100.0, 100.0);
        let cases = [
            (Alignment::TOP_LEFT, Rect::from_xywh(0.0, 0.0, 30.0, 20.0)),
            (Alignment::TOP_RIGHT, Rect::from_xywh(70.0, 0.0, 30.0, 20.0)),
            (Alignment::BOTTOM_LEFT, Rect::from_xywh(0.0, 80.0, 30.0, 20.0)),
            (Alignment::BOTTOM_RIGHT, Rect::from_xywh(70.0, 80.0, 30.0, 20.0)),
            (Alignment::CENTER, Rect::from_xywh(35.0, 40.0, 30.0, 20.0)),
        ];
        for (alignment, expected) in cases {
            let negotiator = FrameNegotiator::new()
                .with_target(host.target())
                .aligned(alignment);
            let placement = negotiator
                .place(LayoutCtx::new(&host, ROOT), container)
                .expect("visible target");
            assert_eq!(placement.frame, expected, "{alignment:?}");
        }
    }

    #[test]
    fn test_growing_and_shrinking() {
        let host = probe_host(Probe::fixed(30.0, 300.0));
        let negotiator = FrameNegotiator::new()
            .with_target(host.target())
            .aligned(Alignment::TOP_LEFT)
            .growing(Axes::HORIZONTAL)
            .shrinking(Axes::VERTICAL);
        let placement = negotiator
            .place(LayoutCtx::new(&host, ROOT), Rect::from_xywh(0.0, 0.0, 100.0, 100.0))
            .expect("visible target");
        assert_eq!(placement.frame, Rect::from_xywh(0.0, 0.0, 100.0, 100.0));
    }

    #[test]
    fn test_overflow_without_permissions() {
        let host = probe_host(Probe::fixed(300.0, 20.0));
        let negotiator = FrameNegotiator::new()
            .with_target(host.target())
            .aligned(Alignment::LEFT);
        let placement = negotiator
            .place(LayoutCtx::new(&host, ROOT), Rect::from_xywh(0.0, 0.0, 100.0, 100.0))
            .expect("visible target");
        assert_eq!(placement.frame.width(), 300.0);
    }

    #[test]
    fn test_fit_centers_both_ways() {
        let host = probe_host(Probe::fixed(140.0, 40.0));
        let negotiator = FrameNegotiator::new()
            .with_target(host.target())
            .aligned(Alignment::FIT);
        let placement = negotiator
            .place(LayoutCtx::new(&host, ROOT), Rect::from_xywh(0.0, 0.0, 100.0, 100.0))
            .expect("visible target");
        assert_eq!(placement.frame, Rect::from_xywh(0.0, 30.0, 100.0, 40.0));
    }

    #[test]
    fn test_mixed_axes() {
        let host = probe_host(Probe::fixed(50.0, 50.0));
        let negotiator = FrameNegotiator::new()
            .with_target(host.target())
            .insets(10.0)
            .configure(|n| {
                n.set_horizontal_alignment(HorizontalAlignment::Right);
                n.set_vertical_alignment(VerticalAlignment::Fill);
            });
        let placement = negotiator
            .place(LayoutCtx::new(&host, ROOT), Rect::from_xywh(0.0, 0.0, 300.0, 100.0))
            .expect("visible target");
        assert_eq!(placement.frame, Rect::from_xywh(240.0, 10.0, 50.0, 80.0));
    }

    #[test]
    fn test_fractional_result_is_snapped() {
        let host = probe_host(Probe::fixed(15.0, 15.0));
        let negotiator = FrameNegotiator::new().with_target(host.target());
        let placement = negotiator
            .place(LayoutCtx::new(&host, ROOT), Rect::from_xywh(0.0, 0.0, 100.0, 100.0))
            .expect("visible target");
        // centered at 42.5 -> [42, 58)
        assert_eq!(placement.frame, Rect::from_xywh(42.0, 42.0, 16.0, 16.0));
    }

    #[test]
    fn test_degenerate_container_is_ignored() {
        let mut host = probe_host(Probe::fixed(15.0, 15.0));
        let before = host.frame_of(host.target());
        let negotiator = FrameNegotiator::new().with_target(host.target());
        assert!(!negotiator.arrange(&mut host, ROOT, Rect::from_xywh(0.0, 0.0, 0.0, 100.0)));
        assert!(!negotiator.arrange(&mut host, ROOT, Rect::from_xywh(0.0, 0.0, 100.0, f32::NAN)));
        assert_eq!(host.frame_of(host.target()), before);
    }

    #[test]
    fn test_hidden_target_is_never_placed() {
        let host = probe_host(Probe::fixed(15.0, 15.0));
        host.set_target_hidden(true);
        let negotiator = FrameNegotiator::new()
            .with_target(host.target())
            .configure(|n| n.set_ignore_hidden_target(false));
        assert!(
            negotiator
                .place(LayoutCtx::new(&host, ROOT), Rect::from_xywh(0.0, 0.0, 100.0, 100.0))
                .is_none()
        );
    }

    #[test]
    fn test_indirect_target_is_translated() {
        // root(0) -> target(1) is replaced by: root(0) -> holder(2) -> target(1)
        let mut host = probe_host(Probe::fixed(20.0, 20.0));
        let holder = host.add_view(Some(ROOT), Rect::from_xywh(30.0, 40.0, 200.0, 200.0));
        host.reparent(host.target(), Some(holder));

        let negotiator = FrameNegotiator::new()
            .with_target(host.target())
            .aligned(Alignment::TOP_LEFT)
            .insets(EdgeInsets::new(5.0, 5.0, 0.0, 0.0));
        let placement = negotiator
            .place(LayoutCtx::new(&host, ROOT), Rect::from_xywh(0.0, 0.0, 100.0, 100.0))
            .expect("visible target");
        assert_eq!(placement.frame, Rect::from_xywh(-25.0, -35.0, 20.0, 20.0));

        placement.commit(&mut host);
        assert_eq!(host.frame_of(host.target()), placement.frame);
    }

    #[test]
    fn test_indirect_target_on_surface_matches_walk() {
        let mut host = probe_host(Probe::fixed(20.0, 20.0));
        let holder = host.add_view(Some(ROOT), Rect::from_xywh(30.0, 40.0, 200.0, 200.0));
        host.reparent(host.target(), Some(holder));
        let negotiator = FrameNegotiator::new().with_target(host.target());
        let container = Rect::from_xywh(0.0, 0.0, 100.0, 100.0);

        let walked = negotiator.place(LayoutCtx::new(&host, ROOT), container);
        host.set_attached(true);
        let converted = negotiator.place(LayoutCtx::new(&host, ROOT), container);
        assert_eq!(walked, converted);
    }

    #[test]
    fn test_needs_content_size() {
        let negotiator = FrameNegotiator::new().aligned(Alignment::FILL);
        assert!(!negotiator.needs_content_size());
        let negotiator = negotiator.configure(|n| n.set_vertical_alignment(VerticalAlignment::Top));
        assert!(negotiator.needs_content_size());
        let frame = negotiator.resolve_frame(Rect::from_size(Size::new(10.0, 10.0)), Size::zero());
        assert_eq!(frame, Rect::from_xywh(0.0, 0.0, 10.0, 0.0));
    }
}
