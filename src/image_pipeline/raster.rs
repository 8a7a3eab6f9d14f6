pub mod types;

pub use types::RasterBuffer;
