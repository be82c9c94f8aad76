pub mod builder;
pub mod error;
pub mod loaders;
pub mod resolver;
pub mod store;

pub use builder::{BuildReport, build_store, default_store_path};
pub use error::DictionaryError;
pub use loaders::xml::{EntryFormat, RawEntry, parse_entries};
pub use resolver::DefinitionResolver;
pub use store::SqliteStore;
