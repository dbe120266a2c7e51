//! Echo Deck - a native dashboard for the Echo assistant backend
//!
//! Four panels over one HTTP API: chat, projects, tasks and memories. The
//! lists are periodically re-fetched and fully rebuilt; a cross-kind
//! selection drives batch deletes.
//!
//! ## Layers
//!
//! - [`api`]: the [`Backend`](api::Backend) seam and its HTTP transport
//! - [`reconcile`] + [`view`]: sequenced fetch results rendered into row models
//! - [`dashboard`]: owned state plus the controllers that mutate the server
//! - [`scheduler`]: per-kind polling timers
//! - [`gui`]: the egui window painting it all

pub mod api;
pub mod config;
pub mod confirm;
pub mod dashboard;
pub mod domain;
pub mod gui;
pub mod reconcile;
pub mod scheduler;
pub mod selection;
pub mod session;
pub mod view;

pub use domain::*;
