pub mod sample;
pub mod types;

pub use sample::generate_sample_weather;
