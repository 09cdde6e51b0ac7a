//! Navigation contract between the signup core and the surface that hosts it.

use std::{
    fmt,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Welcome,
    Login,
    Signup,
    Home,
    About,
    Admin,
}

impl Page {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Welcome => "welcome",
            Self::Login => "login",
            Self::Signup => "signup",
            Self::Home => "home",
            Self::About => "about",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Implemented by the page router.
pub trait Navigator: Send + Sync {
    /// Called once after the session has been persisted.
    fn signup_succeeded(&self);

    /// Called when the user chooses to leave the signup page.
    fn navigate(&self, page: Page);
}

/// Liveness flag for the surface that started a submission. Clones share the
/// flag, so the surface keeps one handle and the orchestrator another.
#[derive(Clone, Debug)]
pub struct SurfaceHandle {
    mounted: Arc<AtomicBool>,
}

impl Default for SurfaceHandle {
    fn default() -> Self {
        Self {
            mounted: Arc::new(AtomicBool::new(true)),
        }
    }
}

impl SurfaceHandle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the surface as torn down; pending callbacks are dropped.
    pub fn unmount(&self) {
        self.mounted.store(false, Ordering::SeqCst);
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmount_is_shared_between_clones() {
        let surface = SurfaceHandle::new();
        let held = surface.clone();
        assert!(held.is_mounted());
        surface.unmount();
        assert!(!held.is_mounted());
    }

    #[test]
    fn page_names() {
        assert_eq!(Page::Login.to_string(), "login");
        assert_eq!(Page::Welcome.as_str(), "welcome");
    }
}
