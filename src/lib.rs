#![doc = include_str!("../README.md")]

pub mod debug;

#[doc(inline)]
pub use boxwright_color as color;
#[doc(inline)]
pub use boxwright_layout as layout;
#[doc(inline)]
pub use boxwright_tree as tree;

#[doc(inline)]
pub use boxwright_layout::{
    Alignment, Axes, FrameConfig, FrameNegotiator, Host, HorizontalAlignment, LayoutCtx,
    Placement, VerticalAlignment, ViewId,
};
#[doc(inline)]
pub use boxwright_tree::{LayoutEngine, Node, TreeError, ViewTree};

pub mod prelude {
    //! A collection of commonly used types for easy importing.
    //!
    //! ```rust
    //! use boxwright::prelude::*;
    //!
    //! let negotiator = FrameNegotiator::new().insets(8.0).aligned(Alignment::TOP_LEFT);
    //! assert_eq!(negotiator.edge_insets(), EdgeInsets::all(8.0));
    //! ```
    pub use boxwright_core::{EdgeInsets, GeometryError, Point, Rect, Size};
    pub use boxwright_layout::{
        Alignment, Axes, FrameConfig, FrameNegotiator, Host, HorizontalAlignment, LayoutCtx,
        VerticalAlignment, ViewId,
    };
    pub use boxwright_tree::{Content, Flexible, LayoutEngine, Measured, Node, ViewTree};
}
