pub mod item_input;

pub use item_input::{ItemInput, PageWindow, DEFAULT_PAGE_LIMIT};
