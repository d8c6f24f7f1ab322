//! Command implementations for trellis

pub mod bench;
pub mod dispatch;
pub mod helpers;
pub mod load;
pub mod mst;
pub mod path;
