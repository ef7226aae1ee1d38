//! Plate rendering.
//!
//! Separation of an image into ink buckets, recomposition of the buckets
//! into flat plates, the 2x2 poster grid and the XPM writer.

mod composite;
mod filter;
mod grid;
mod plate;
mod separate;
mod xpm;

pub use composite::overlay;
pub use filter::{close_to, close_to_uniform, isolate_channel, Channel};
pub use grid::tile_grid;
pub use plate::Pipeline;
pub use separate::{count_opaque, separate, Separator, ThresholdMode};
pub use xpm::encode_xpm;
