//! Side effects requested by the event handler.
//!
//! [`handle_event`](crate::app::handle_event) only mutates [`AppState`](crate::app::AppState);
//! anything that reaches outside of it (the address bar, a notice popup,
//! leaving the program) is returned as an [`Action`] for the driver to carry
//! out, in order.
//!
//! # Architecture
//!
//! Every handled event yields `(should_render, Vec<Action>)`. The terminal
//! driver in `main.rs` walks the actions before redrawing: `PushUrl` is
//! logged as the new location, `Notify` is printed under the frame and
//! `Quit` ends the loop.
//!
//! # Example
//!
//! ```
//! use hellowshop::{handle_event, initialize, Action, Config, Event};
//!
//! let mut state = initialize(&Config::default())?;
//! let (render, actions) = handle_event(&mut state, &Event::Navigate("/cart".into()))?;
//!
//! assert!(render);
//! assert_eq!(actions, vec![Action::PushUrl("/cart".into())]);
//! # Ok::<(), hellowshop::StorefrontError>(())
//! ```

/// Commands for the driver.
///
/// Produced by the event handler, executed by the driver. None of them
/// change application state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Reflect the new location, e.g. in the address bar or prompt.
    ///
    /// Carries a canonical path from [`Route::to_path`](crate::app::Route::to_path),
    /// so query values are percent-encoded.
    PushUrl(String),

    /// Show a one-off message to the user.
    ///
    /// Used for cart feedback, unknown product ids and the simulated
    /// checkout.
    Notify(String),

    /// Leave the storefront.
    ///
    /// Sent for `quit`; the driver leaves its input loop.
    Quit,
}
