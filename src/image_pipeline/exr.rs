pub mod exr_reader;
pub mod reader;

pub use exr_reader::ExrReader;
pub use reader::RasterDecoder;
