pub mod about;
pub mod calculator;
pub mod sensitivity;
pub mod theory;

use crate::components::Component;

/// Trait for full screen views
pub trait Screen: Component {
    /// Get the screen title
    fn title(&self) -> &str;
}
