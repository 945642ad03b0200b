//! User-facing message templates.
//!
//! Templates are sent verbatim; placeholder expansion (`{error_colour}` and
//! friends) belongs to the host's message pipeline. Config can override the
//! defaults per command section.

/// Config key for the message sent when a named player has no record.
pub const NOT_FOUND_KEY: &str = "not_found";

/// Config key for the message sent when a view couldn't be opened.
pub const OPEN_ERROR_KEY: &str = "error";

/// Default for [`NOT_FOUND_KEY`].
pub const DEFAULT_NOT_FOUND: &str = "{error_colour}Player could not be found.";

/// Default for [`OPEN_ERROR_KEY`].
pub const DEFAULT_OPEN_ERROR: &str = "{error_colour}Error occurred when opening inventory.";

/// Sent in response to a command word with no registered handler.
pub const UNKNOWN_COMMAND: &str = "{error_colour}Unknown command.";
