//! Development helpers for hosts embedding `boxwright`.
//!
//! Layout crates are silent on their own; the view tree reports passes,
//! placements and rejected frames through `tracing`. Install a subscriber with
//! [`logging::install`] to see them.

pub mod logging;
