/// Format registry layer: handler contract, registration, lookup, dispatch.
pub mod dispatch;
pub mod entries;
pub mod errors;
pub mod handler;
pub mod suggest;

pub use dispatch::Dispatcher;
pub use entries::{FormatRegistry, RESERVED_NAMES};
pub use errors::{FormatError, Result};
pub use handler::{Document, FormatHandler};
