//! Output module for wrapper messages.
//!
//! Provides:
//! - Colored error and warning messages
//! - The examples screen
//! - A spinner for slow startup work

pub mod console;
pub mod progress;

pub use console::{examples_text, print_error, print_examples, print_warning};
pub use progress::create_spinner;
