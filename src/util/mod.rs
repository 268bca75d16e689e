pub mod assets;
pub mod format;
pub mod persistence;
pub mod version;
