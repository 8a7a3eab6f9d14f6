pub mod hdr_convert;
pub mod timing;


pub use hdr_convert::{ConversionRecord, HdrConversionPipeline};
pub use timing::{PipelineTimings, StepTiming, Timer};
