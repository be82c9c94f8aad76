pub mod normalizer;

pub use normalizer::ChineseNormalizer;

/// Tag the normalizer is registered under
pub const LANGUAGE: &str = "zh-CN";
