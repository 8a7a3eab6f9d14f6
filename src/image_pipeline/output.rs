pub mod standard_writer;
pub mod types;
pub mod writer;


pub use standard_writer::StandardRasterWriter;
pub use types::{OutputFormat, TiffCompression};
pub use writer::RasterWriter;
