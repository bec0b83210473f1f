//! Property-based laws of measure and arrange.
//!
//! 1. A fixed size is returned for any offer.
//! 2. The measured size never exceeds the offer.
//! 3. An active min size is always honored when there is room for it.
//! 4. With a height ratio, height is width times the ratio.
//! 5. Fill places the target exactly on the inner rectangle.
//! 6. Fit without growth stays inside the inner rectangle and centered.
//! 7. The content size stays between an active min and a max above it.

use boxwright_layout::{
    Alignment, EdgeInsets, FrameNegotiator, Host, LayoutCtx, Rect, Size, ViewId,
};
use proptest::prelude::*;

const ROOT: ViewId = ViewId::new(0);
const TARGET: ViewId = ViewId::new(1);

/// Negotiator view 0 with a single child 1 of a fixed intrinsic size.
struct Pair {
    intrinsic: Size,
    frames: [Rect; 2],
}

impl Pair {
    fn new(intrinsic: Size) -> Self {
        Self {
            intrinsic,
            frames: [Rect::default(); 2],
        }
    }
}

impl Host for Pair {
    fn contains(&self, view: ViewId) -> bool {
        view.index() < 2
    }

    fn parent(&self, view: ViewId) -> Option<ViewId> {
        (view == TARGET).then_some(ROOT)
    }

    fn is_hidden(&self, _view: ViewId) -> bool {
        false
    }

    fn frame(&self, view: ViewId) -> Rect {
        self.frames[view.index()]
    }

    fn size_that_fits(&self, _view: ViewId, _proposal: Size) -> Size {
        self.intrinsic
    }

    fn set_frame(&mut self, view: ViewId, frame: Rect) {
        self.frames[view.index()] = frame;
    }

    fn request_layout(&mut self, _view: ViewId) {}
}

// ── Helpers ─────────────────────────────────────────────────────────────

fn extent() -> impl Strategy<Value = f32> {
    (0u16..=2000).prop_map(f32::from)
}

fn size_strategy() -> impl Strategy<Value = Size> {
    (extent(), extent()).prop_map(|(w, h)| Size::new(w, h))
}

fn insets_strategy() -> impl Strategy<Value = EdgeInsets> {
    (0u8..=40, 0u8..=40, 0u8..=40, 0u8..=40).prop_map(|(t, l, b, r)| {
        EdgeInsets::new(f32::from(t), f32::from(l), f32::from(b), f32::from(r))
    })
}

fn container_strategy() -> impl Strategy<Value = Rect> {
    (0u16..=500, 0u16..=500, 1u16..=1000, 1u16..=1000).prop_map(|(x, y, w, h)| {
        Rect::from_xywh(f32::from(x), f32::from(y), f32::from(w), f32::from(h))
    })
}

fn measure(negotiator: &FrameNegotiator, host: &Pair, available: Size) -> Size {
    negotiator.measure(LayoutCtx::new(host, ROOT), available)
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Fixed size
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn fixed_size_ignores_offer(
        fixed in (1u16..=500, 1u16..=500),
        available in size_strategy(),
        intrinsic in size_strategy(),
        insets in insets_strategy(),
    ) {
        let fixed = Size::new(f32::from(fixed.0), f32::from(fixed.1));
        let host = Pair::new(intrinsic);
        let negotiator = FrameNegotiator::new()
            .with_target(TARGET)
            .insets(insets)
            .fixed(fixed);
        prop_assert_eq!(measure(&negotiator, &host, available), fixed);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Never more than offered
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn measure_fits_offer(
        available in size_strategy(),
        intrinsic in size_strategy(),
        insets in insets_strategy(),
        min in size_strategy(),
    ) {
        let host = Pair::new(intrinsic);
        let negotiator = FrameNegotiator::new()
            .with_target(TARGET)
            .insets(insets)
            .min(min);
        let size = measure(&negotiator, &host, available);
        prop_assert!(size.width <= available.width, "{:?} > {:?}", size, available);
        prop_assert!(size.height <= available.height, "{:?} > {:?}", size, available);
        prop_assert!(size.width >= 0.0 && size.height >= 0.0);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Min clamp
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn min_is_honored_with_room(
        min in (1u16..=300, 1u16..=300),
        intrinsic in size_strategy(),
        insets in insets_strategy(),
    ) {
        let min = Size::new(f32::from(min.0), f32::from(min.1));
        let host = Pair::new(intrinsic);
        let negotiator = FrameNegotiator::new()
            .with_target(TARGET)
            .insets(insets)
            .min(min);
        let size = measure(&negotiator, &host, Size::new(f32::INFINITY, f32::INFINITY));
        prop_assert!(size.width >= min.width + insets.horizontal());
        prop_assert!(size.height >= min.height + insets.vertical());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Height ratio
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn height_follows_ratio(
        width in 1u16..=1000,
        ratio in prop_oneof![Just(0.25f32), Just(0.5), Just(1.0), Just(2.0)],
        intrinsic in size_strategy(),
    ) {
        let width = f32::from(width);
        let host = Pair::new(intrinsic);
        let negotiator = FrameNegotiator::new().with_target(TARGET).ratio(ratio);
        let size = measure(&negotiator, &host, Size::new(width, f32::INFINITY));
        prop_assert_eq!(size, Size::new(width, width * ratio));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Fill
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn fill_matches_inner(
        container in container_strategy(),
        insets in insets_strategy(),
        intrinsic in size_strategy(),
    ) {
        let mut host = Pair::new(intrinsic);
        let negotiator = FrameNegotiator::new()
            .with_target(TARGET)
            .insets(insets)
            .aligned(Alignment::FILL);
        prop_assert!(negotiator.arrange(&mut host, ROOT, container));
        prop_assert_eq!(host.frame(TARGET), container.inset_by(&insets).integral());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Fit
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn fit_stays_inside_and_centered(
        container in container_strategy(),
        intrinsic in size_strategy(),
    ) {
        let host = Pair::new(intrinsic);
        let negotiator = FrameNegotiator::new()
            .with_target(TARGET)
            .aligned(Alignment::FIT);
        let placement = negotiator
            .place(LayoutCtx::new(&host, ROOT), container)
            .expect("visible target");
        let frame = placement.frame;

        prop_assert!(frame.x() >= container.x().floor());
        prop_assert!(frame.max_x() <= container.max_x().ceil());
        prop_assert!(frame.y() >= container.y().floor());
        prop_assert!(frame.max_y() <= container.max_y().ceil());

        let left = frame.x() - container.x();
        let right = container.max_x() - frame.max_x();
        prop_assert!((left - right).abs() <= 1.0, "{:?} in {:?}", frame, container);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. Content clamp
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn content_size_within_min_and_max(
        min in (0u16..=300, 0u16..=300),
        extra in (0u16..=300, 0u16..=300),
        proposal in size_strategy(),
        intrinsic in size_strategy(),
    ) {
        let min = Size::new(f32::from(min.0), f32::from(min.1));
        let max = Size::new(
            (min.width + f32::from(extra.0)).max(1.0),
            (min.height + f32::from(extra.1)).max(1.0),
        );
        let host = Pair::new(intrinsic);
        let negotiator = FrameNegotiator::new()
            .with_target(TARGET)
            .min(min)
            .max(max);
        let size = negotiator.content_size_that_fits(LayoutCtx::new(&host, ROOT), proposal);
        prop_assert!(size.width >= min.width && size.width <= max.width, "{:?}", size);
        prop_assert!(size.height >= min.height && size.height <= max.height, "{:?}", size);
    }
}
