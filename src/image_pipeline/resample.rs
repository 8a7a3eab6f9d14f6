pub mod engine;
pub mod kernel;

#[cfg(test)]
mod tests;

pub use engine::resample;
pub use kernel::ResamplingKernel;
