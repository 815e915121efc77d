//! Console front desk: numbered menu over any line-based reader/writer.

pub mod menu;
pub mod render;
pub mod session;

pub use menu::{MenuAction, MenuEntry, MENU};
pub use session::Console;
