// Library exports for inf2theme

pub mod config;
pub mod error;
pub mod inf;
pub mod logging;
pub mod model;
pub mod pipeline;

pub use config::Config;
pub use error::{Error, SyntaxError};
pub use inf::{Descriptor, StringTable};
pub use logging::{LogRecord, LogSink, Severity};
pub use model::{CursorEntry, CursorRole, CursorRoleSet, ThemeDescriptor};
pub use pipeline::{convert, convert_descriptor};
