//! Application layer coordinating state, events and actions.
//!
//! This layer sits between the terminal driver (`main.rs`) and the catalog
//! engine. Data flows one way:
//!
//! ```text
//! User Input → Event → handle_event → Facet/Cart transitions → Actions
//!                                          ↓
//!                         compute_viewmodel → render
//! ```
//!
//! # Modules
//!
//! - [`actions`]: side effects returned by the handler
//! - [`banner`]: hero banner carousel
//! - [`commands`]: text command parsing for the shell
//! - [`handler`]: event processing
//! - [`modes`]: the page currently shown
//! - [`routes`]: URL parsing
//! - [`state`]: session state container
//! - [`view`]: view model computation

pub mod actions;
pub mod banner;
pub mod commands;
pub mod handler;
pub mod modes;
pub mod routes;
pub mod state;
pub mod view;

pub use actions::Action;
pub use banner::{Banner, BannerCarousel};
pub use commands::{parse_command, Command, CommandError};
pub use handler::{handle_event, Event};
pub use modes::Page;
pub use routes::Route;
pub use state::{AppState, StoreSettings};
