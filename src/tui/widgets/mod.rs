pub mod help;
pub mod palette_view;
pub mod root;
pub mod shades;
