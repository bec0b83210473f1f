//! First pass: how much room the target wants.

use crate::{FrameNegotiator, Host, LayoutCtx, Size};

impl FrameNegotiator {
    /// Returns the size this negotiator wants when offered `available`.
    ///
    /// Zero when there is nothing to lay out: no target, a hidden target that
    /// is ignored, or a hidden negotiator. A fixed size (min equal to max,
    /// both positive) is returned as is, ignoring the ratio, the insets and the
    /// offer. Otherwise the content is measured inside the insets (or derived
    /// from the width via the height ratio), clamped, padded back out on every
    /// axis that has content, and capped at `available`.
    pub fn measure<H: Host + ?Sized>(&self, cx: LayoutCtx<'_, H>, available: Size) -> Size {
        let host = cx.host();
        let Some(target) = self.live_target(host) else {
            return Size::zero();
        };
        if (self.config.ignore_hidden_target && host.is_hidden(target))
            || Self::is_self_hidden(cx)
        {
            return Size::zero();
        }

        if let Some(fixed) = self.config.fixed_size() {
            return fixed;
        }

        let available = available.non_negative();
        let insets = self.config.edge_insets;
        let content = available.inset(&insets);

        let desired = if self.config.height_ratio > 0.0 {
            Size::new(content.width, content.width * self.config.height_ratio)
        } else {
            self.content_size_that_fits(cx, content)
        };

        self.config
            .clamp(desired)
            .non_negative()
            .outset_nonzero(&insets)
            .min(available)
    }

    /// Measures the target alone for a content-area candidate size.
    ///
    /// Asks the host for the target's intrinsic size (through the cache when
    /// enabled) and applies the min/max clamps. An infinite intrinsic extent
    /// means the target takes whatever it is offered on that axis.
    pub fn content_size_that_fits<H: Host + ?Sized>(
        &self,
        cx: LayoutCtx<'_, H>,
        proposal: Size,
    ) -> Size {
        let host = cx.host();
        let Some(target) = self.live_target(host) else {
            return Size::zero();
        };

        let measured = self.memoized(target, proposal, || {
            let intrinsic = host.size_that_fits(target, proposal);
            let resolve = |extent: f32, offered: f32| {
                if extent.is_infinite() && offered.is_finite() {
                    offered
                } else {
                    extent
                }
            };
            let intrinsic = Size::new(
                resolve(intrinsic.width, proposal.width),
                resolve(intrinsic.height, proposal.height),
            );
            self.config.clamp(intrinsic.non_negative())
        });
        measured.non_negative()
    }
}
