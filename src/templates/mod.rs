pub mod components;
pub mod layouts;
pub mod pages;
pub mod text;

// Re-exports for convenience
pub use components::{filter_panel, results_panel};
pub use layouts::desktop::desktop_layout;
