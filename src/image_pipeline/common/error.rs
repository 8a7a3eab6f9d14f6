use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Failed to decode EXR image: {0}")]
    DecodeError(String),

    #[error("Tone mapping failed: {0}")]
    ToneMapError(String),

    #[error("Resampling failed: {0}")]
    ResampleError(String),

    #[error("Failed to encode output image: {0}")]
    EncodeError(String),

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to write stats report: {0}")]
    ReportError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ConversionError {
    /// Stable short tag for stats report lines.
    pub fn kind(&self) -> &'static str {
        match self {
            ConversionError::DecodeError(_) => "decode",
            ConversionError::ToneMapError(_) => "tonemap",
            ConversionError::ResampleError(_) => "resample",
            ConversionError::EncodeError(_) => "encode",
            ConversionError::InvalidDimensions(_, _) => "dimensions",
            ConversionError::InvalidConfig(_) => "config",
            ConversionError::ReportError(_) => "report",
            ConversionError::IoError(_) => "io",
        }
    }
}

pub type Result<T> = std::result::Result<T, ConversionError>;
