pub mod page;
pub mod pointer;

pub use page::{wire_back_to_top, wire_mobile_menu, wire_scroll_state, wire_tabs, wire_theme_toggle};
pub use pointer::wire_cursor;
