//! Native dashboard window.
//!
//! Paints the [`Dashboard`](crate::dashboard::Dashboard) state every frame and
//! hands user input back to it. Backend calls run on a tokio runtime owned
//! by the runner; the window only ever reads snapshots.

mod app;
mod chat;
mod lists;
mod prompt;
mod runner;
mod theme;
mod toast;

pub use app::DashboardApp;
pub use runner::run_gui;
