use std::io::Write;

use crate::image_pipeline::common::config::ConversionConfig;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::raster::types::RasterBuffer;

pub trait RasterWriter {
    /// Encode `image` into the configured container and write it to
    /// `output`, returning the number of bytes written.
    fn write(
        &self,
        image: &RasterBuffer,
        output: &mut dyn Write,
        config: &ConversionConfig,
    ) -> Result<u64>;
}
