pub mod buffer;
pub mod compact;
pub mod fill;
pub mod predicate;
pub mod scan;
pub mod shape;
pub mod timing;

pub use buffer::{alloc_buffer, as_buffer, observe, read_buffer, Buffer};
pub use compact::compact;
pub use fill::{fill, fill_with, FillPattern};
pub use predicate::{mask_for_ratio, predicate};
pub use scan::{scan, scan2d, scan_from};
pub use shape::{Shape, ShapeError};
pub use timing::BenchTimer;
