//! Page navigation port.

use crate::error::NavigationError;

/// Switches the user to another page.
pub trait Navigator: Send + Sync {
    /// Fails when the target page is unavailable.
    fn switch_page(&self, target: &str) -> Result<(), NavigationError>;
}
