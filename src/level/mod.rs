mod catalog;
mod definition;

pub use catalog::{DecodeMode, LevelCatalog};
pub use definition::LevelDefinition;
