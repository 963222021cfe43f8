//! Navigator over a fixed set of pages.

use parking_lot::RwLock;
use tracing::debug;

use crate::error::NavigationError;
use crate::port::outbound::Navigator;

/// Knows which pages exist and remembers the last one switched to.
#[derive(Debug, Default)]
pub struct PageNavigator {
    pages: Vec<String>,
    current: RwLock<Option<String>>,
}

impl PageNavigator {
    pub fn new<I, S>(pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            pages: pages.into_iter().map(Into::into).collect(),
            current: RwLock::new(None),
        }
    }

    #[must_use]
    pub fn current(&self) -> Option<String> {
        self.current.read().clone()
    }

    #[must_use]
    pub fn has_page(&self, target: &str) -> bool {
        self.pages.iter().any(|page| page == target)
    }
}

impl Navigator for PageNavigator {
    fn switch_page(&self, target: &str) -> Result<(), NavigationError> {
        if !self.has_page(target) {
            return Err(NavigationError::UnknownPage {
                target: target.to_string(),
            });
        }
        debug!(page = target, "Switching page");
        *self.current.write() = Some(target.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn switches_to_registered_page() {
        let nav = PageNavigator::new(["dashboards", "services"]);
        nav.switch_page("dashboards").unwrap();
        assert_eq!(nav.current().as_deref(), Some("dashboards"));
    }

    #[test]
    fn unknown_page_fails_and_stays_put() {
        let nav = PageNavigator::new(["services"]);
        let err = nav.switch_page("dashboards").unwrap_err();
        assert_eq!(
            err,
            NavigationError::UnknownPage {
                target: "dashboards".into()
            }
        );
        assert_eq!(nav.current(), None);
    }
}
