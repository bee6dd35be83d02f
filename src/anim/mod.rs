//! A small tween engine: easing curves, a label-addressable timeline and the
//! mapping from page scroll onto timeline time.

pub mod ease;
pub mod props;
pub mod scroll;
pub mod timeline;
