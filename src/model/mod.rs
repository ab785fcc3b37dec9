pub mod roles;
pub mod theme;

pub use roles::{CursorRole, CursorRoleSet};
pub use theme::{CursorEntry, THEME_VERSION, ThemeDescriptor};
