pub mod mapper;


pub use mapper::{apply_gamma, prepare_display_referred, tone_map};
