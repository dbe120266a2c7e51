//! Settings configuration types

mod gui;
mod polling;
mod server;

pub use gui::GuiSettings;
pub use polling::PollingSettings;
pub use server::ServerSettings;
