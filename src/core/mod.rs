pub mod encoder;

pub use encoder::EnvEncoder;
