//! Capture module - headless Chrome session and section screenshots

pub mod browser;
pub mod sections;

pub use browser::BrowserSession;
pub use sections::{capture_sections, FOOTER_SELECTORS, HEADER_SELECTORS};
