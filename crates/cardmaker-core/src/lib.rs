pub mod dictionary;
pub mod language;
pub mod preprocess;
pub mod types;

pub use dictionary::{DefinitionLookup, ResolveError, StoreError};
pub use language::{LanguageTag, NormalizerRegistry, TextNormalizer};
pub use preprocess::{PassthroughNormalizer, PatternNormalizer};
pub use types::{AnkiRow, AssetKind, GeneratedAsset, WordLine};
