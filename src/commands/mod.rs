pub mod rename;
pub mod show;
