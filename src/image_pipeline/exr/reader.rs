use std::path::Path;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::raster::types::RasterBuffer;

pub trait RasterDecoder {
    fn decode(&self, path: &Path) -> Result<RasterBuffer>;
}
