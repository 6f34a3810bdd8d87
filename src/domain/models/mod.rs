// Domain models (business entities)
// Pure Rust, no framework dependencies

pub mod entry;

pub use entry::MenuEntry;
