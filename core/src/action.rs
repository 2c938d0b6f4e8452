//! Action vocabulary
//!
//! Actions are named, side-effect-free descriptors of "something happened or
//! was requested". Each action exposes a *kind*: a copyable tag drawn from a
//! closed enumeration whose `Display` form is the stable wire identifier
//! (`GET_DEVICES_LIST`, `LOGOUT`, ...) used for routing and logging.
//!
//! Routing itself happens through exhaustive `match` on the action enums; the
//! kind exists so that [`Logic`](crate::logic::Logic) units can be registered
//! against exactly one trigger and so logs carry a readable name.

use std::fmt::{Debug, Display};

/// An action routed through reducers and logic units.
///
/// # Example
///
/// ```
/// use console_store_core::action::Action;
/// use std::fmt;
///
/// #[derive(Clone, Debug)]
/// enum PingAction {
///     Ping,
///     Pong,
/// }
///
/// #[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// enum PingKind {
///     Ping,
///     Pong,
/// }
///
/// impl fmt::Display for PingKind {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         match self {
///             Self::Ping => f.write_str("PING"),
///             Self::Pong => f.write_str("PONG"),
///         }
///     }
/// }
///
/// impl Action for PingAction {
///     type Kind = PingKind;
///
///     fn kind(&self) -> PingKind {
///         match self {
///             Self::Ping => PingKind::Ping,
///             Self::Pong => PingKind::Pong,
///         }
///     }
/// }
///
/// assert_eq!(PingAction::Pong.kind().to_string(), "PONG");
/// ```
pub trait Action: Clone + Send + 'static {
    /// Closed enumeration of kinds for this action type
    type Kind: Copy + Eq + Debug + Display + Send + Sync + 'static;

    /// The kind tag of this action
    fn kind(&self) -> Self::Kind;
}
