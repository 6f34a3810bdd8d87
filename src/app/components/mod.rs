pub mod data_menu;

pub use data_menu::DataMenu;
