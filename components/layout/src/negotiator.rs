//! The frame negotiator: one box, one target.

use core::cell::RefCell;

use boxwright_color::{ColorChooser, PALETTE, Srgb};

use crate::{
    Alignment, Axes, EdgeInsets, FrameConfig, Host, HorizontalAlignment, LayoutCtx, Size,
    VerticalAlignment, ViewId,
    cache::{CacheStats, SizeCache},
};

/// Sizes and positions a single target view inside its own frame.
///
/// The negotiator does not own the target; it only remembers its [`ViewId`]
/// and reaches it through a [`Host`]. A target that has been removed from the
/// host behaves exactly like no target at all.
///
/// Layout is two passes:
///
/// 1. [`measure`](Self::measure) reports how much room the target wants.
/// 2. [`place`](Self::place) / [`arrange`](Self::arrange) positions the
///    target inside the final container rectangle.
///
/// Every configuration change clears the measurement cache.
#[derive(Debug)]
pub struct FrameNegotiator {
    pub(crate) target: Option<ViewId>,
    pub(crate) config: FrameConfig,
    pub(crate) cache: RefCell<SizeCache>,
    debug_color: Srgb,
}

impl Default for FrameNegotiator {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameNegotiator {
    /// Creates an empty negotiator with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(FrameConfig::default())
    }

    /// Creates an empty negotiator with `config`.
    #[must_use]
    pub fn with_config(config: FrameConfig) -> Self {
        Self {
            target: None,
            config,
            cache: RefCell::new(SizeCache::new()),
            debug_color: PALETTE[0],
        }
    }

    /// Runs `configure` against this negotiator, for one-shot setup.
    #[must_use]
    pub fn configure(mut self, configure: impl FnOnce(&mut Self)) -> Self {
        configure(&mut self);
        self
    }

    /// Drops every cached measurement. Call it when the target's intrinsic
    /// size changed behind the negotiator's back.
    pub fn invalidate(&mut self) {
        self.cache.get_mut().clear();
    }

    // ------------------------------------------------------------------
    // Target
    // ------------------------------------------------------------------

    /// The target's id, whether or not the host still has it.
    #[must_use]
    pub const fn target(&self) -> Option<ViewId> {
        self.target
    }

    /// Replaces the target. `None` detaches it.
    pub fn set_target(&mut self, target: Option<ViewId>) {
        if self.target != target {
            self.target = target;
            self.invalidate();
        }
    }

    /// Sets the target, builder style.
    #[must_use]
    pub fn with_target(mut self, target: ViewId) -> Self {
        self.set_target(Some(target));
        self
    }

    /// The target, if the host still has it.
    pub(crate) fn live_target<H: Host + ?Sized>(&self, host: &H) -> Option<ViewId> {
        self.target.filter(|target| host.contains(*target))
    }

    /// Returns true when no target takes part in layout: there is none, the
    /// host dropped it, or it is hidden and hidden targets are ignored.
    pub fn is_empty<H: Host + ?Sized>(&self, host: &H) -> bool {
        self.live_target(host).is_none_or(|target| {
            self.config.ignore_hidden_target && host.is_hidden(target)
        })
    }

    // ------------------------------------------------------------------
    // Configuration
    // ------------------------------------------------------------------

    /// The whole configuration.
    #[must_use]
    pub const fn config(&self) -> &FrameConfig {
        &self.config
    }

    /// Replaces the whole configuration.
    pub fn set_config(&mut self, config: FrameConfig) {
        self.config = config;
        self.invalidate();
    }

    /// Space removed from every edge.
    #[must_use]
    pub const fn edge_insets(&self) -> EdgeInsets {
        self.config.edge_insets
    }

    /// Sets the edge insets.
    pub fn set_edge_insets(&mut self, insets: impl Into<EdgeInsets>) {
        self.config.edge_insets = insets.into();
        self.invalidate();
    }

    /// Lower content clamp.
    #[must_use]
    pub const fn min_size(&self) -> Size {
        self.config.min_size
    }

    /// Sets the lower content clamp.
    pub fn set_min_size(&mut self, size: Size) {
        self.config.min_size = size;
        self.invalidate();
    }

    /// Upper content clamp.
    #[must_use]
    pub const fn max_size(&self) -> Size {
        self.config.max_size
    }

    /// Sets the upper content clamp.
    pub fn set_max_size(&mut self, size: Size) {
        self.config.max_size = size;
        self.invalidate();
    }

    /// The fixed size, if min and max pin one.
    #[must_use]
    pub fn fixed_size(&self) -> Option<Size> {
        self.config.fixed_size()
    }

    /// Pins the measured size: sets both clamps to `size`.
    pub fn set_fixed_size(&mut self, size: Size) {
        self.config.min_size = size;
        self.config.max_size = size;
        self.invalidate();
    }

    /// Height-to-width ratio; zero when unused.
    #[must_use]
    pub const fn height_ratio(&self) -> f32 {
        self.config.height_ratio
    }

    /// Sets the height-to-width ratio. Values ≤ 0 disable it.
    pub fn set_height_ratio(&mut self, ratio: f32) {
        self.config.height_ratio = ratio;
        self.invalidate();
    }

    /// Both alignment policies.
    #[must_use]
    pub const fn alignment(&self) -> Alignment {
        self.config.alignment()
    }

    /// Sets both alignment policies.
    pub fn set_alignment(&mut self, alignment: Alignment) {
        self.config.horizontal_alignment = alignment.horizontal;
        self.config.vertical_alignment = alignment.vertical;
        self.invalidate();
    }

    /// Sets the x axis policy.
    pub fn set_horizontal_alignment(&mut self, alignment: HorizontalAlignment) {
        self.config.horizontal_alignment = alignment;
        self.invalidate();
    }

    /// Sets the y axis policy.
    pub fn set_vertical_alignment(&mut self, alignment: VerticalAlignment) {
        self.config.vertical_alignment = alignment;
        self.invalidate();
    }

    /// Axes on which content may grow past the inner rectangle.
    #[must_use]
    pub const fn allow_growing(&self) -> Axes {
        self.config.allow_growing
    }

    /// Sets the growth permissions.
    pub fn set_allow_growing(&mut self, axes: Axes) {
        self.config.allow_growing = axes;
        self.invalidate();
    }

    /// Axes on which content may shrink below the inner rectangle.
    #[must_use]
    pub const fn allow_shrinking(&self) -> Axes {
        self.config.allow_shrinking
    }

    /// Sets the shrink permissions.
    pub fn set_allow_shrinking(&mut self, axes: Axes) {
        self.config.allow_shrinking = axes;
        self.invalidate();
    }

    /// Whether a hidden target is treated as absent.
    #[must_use]
    pub const fn ignores_hidden_target(&self) -> bool {
        self.config.ignore_hidden_target
    }

    /// Sets whether a hidden target is treated as absent.
    pub fn set_ignore_hidden_target(&mut self, ignore: bool) {
        self.config.ignore_hidden_target = ignore;
        self.invalidate();
    }

    /// Whether content measurements are memoized.
    #[must_use]
    pub const fn cache_enabled(&self) -> bool {
        self.config.cache_enabled
    }

    /// Enables or disables memoization.
    pub fn set_cache_enabled(&mut self, enabled: bool) {
        self.config.cache_enabled = enabled;
        self.invalidate();
    }

    /// Counters of the measurement cache.
    #[must_use]
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.borrow().stats()
    }

    // ------------------------------------------------------------------
    // Debug outline
    // ------------------------------------------------------------------

    /// Whether the host should outline this negotiator.
    #[must_use]
    pub const fn shows_debug_outline(&self) -> bool {
        self.config.show_debug_outline
    }

    /// Turns the debug outline on or off. Does not affect layout.
    pub const fn set_show_debug_outline(&mut self, show: bool) {
        self.config.show_debug_outline = show;
    }

    /// Color of the debug outline.
    #[must_use]
    pub const fn debug_color(&self) -> Srgb {
        self.debug_color
    }

    /// Sets the debug outline color.
    pub const fn set_debug_color(&mut self, color: Srgb) {
        self.debug_color = color;
    }

    /// Picks the debug outline color from `chooser`.
    pub fn choose_debug_color(&mut self, chooser: &mut (impl ColorChooser + ?Sized)) {
        self.debug_color = chooser.choose();
    }

    // ------------------------------------------------------------------
    // Builder
    // ------------------------------------------------------------------

    /// Sets the edge insets, builder style.
    #[must_use]
    pub fn insets(mut self, insets: impl Into<EdgeInsets>) -> Self {
        self.set_edge_insets(insets);
        self
    }

    /// Sets both alignment policies, builder style.
    #[must_use]
    pub fn aligned(mut self, alignment: Alignment) -> Self {
        self.set_alignment(alignment);
        self
    }

    /// Sets the lower clamp, builder style.
    #[must_use]
    pub fn min(mut self, size: Size) -> Self {
        self.set_min_size(size);
        self
    }

    /// Sets the upper clamp, builder style.
    #[must_use]
    pub fn max(mut self, size: Size) -> Self {
        self.set_max_size(size);
        self
    }

    /// Pins the size, builder style.
    #[must_use]
    pub fn fixed(mut self, size: Size) -> Self {
        self.set_fixed_size(size);
        self
    }

    /// Sets the height ratio, builder style.
    #[must_use]
    pub fn ratio(mut self, ratio: f32) -> Self {
        self.set_height_ratio(ratio);
        self
    }

    /// Sets growth permissions, builder style.
    #[must_use]
    pub fn growing(mut self, axes: Axes) -> Self {
        self.set_allow_growing(axes);
        self
    }

    /// Sets shrink permissions, builder style.
    #[must_use]
    pub fn shrinking(mut self, axes: Axes) -> Self {
        self.set_allow_shrinking(axes);
        self
    }

    /// Enables memoization, builder style.
    #[must_use]
    pub fn cached(mut self) -> Self {
        self.set_cache_enabled(true);
        self
    }

    // ------------------------------------------------------------------
    // Shared by measure and arrange
    // ------------------------------------------------------------------

    /// Runs `measure` through the cache when it is enabled.
    pub(crate) fn memoized(
        &self,
        target: ViewId,
        candidate: Size,
        measure: impl FnOnce() -> Size,
    ) -> Size {
        if !self.config.cache_enabled {
            return measure();
        }
        if let Some(hit) = self.cache.borrow_mut().lookup(target, candidate) {
            return hit;
        }
        let size = measure();
        self.cache.borrow_mut().store(target, candidate, size);
        size
    }

    /// Whether the negotiator's own view is hidden in this pass.
    pub(crate) fn is_self_hidden<H: Host + ?Sized>(cx: LayoutCtx<'_, H>) -> bool {
        cx.host().contains(cx.view()) && cx.is_hidden()
    }
}
