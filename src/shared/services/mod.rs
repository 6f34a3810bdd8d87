pub mod menu_source;

pub use menu_source::MenuSource;
