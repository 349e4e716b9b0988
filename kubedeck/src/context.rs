//! Shared page-title and namespace state.
//!
//! The header banner and the namespace selector both read this context while
//! the active resource page writes it, so it is the one piece of state shared
//! across independently rendered components. It is an explicit, owned object
//! with a provider lifecycle rather than a process-wide global: the app
//! mounts it once at startup and every access before that (or after teardown)
//! fails loudly.

use crate::errors::{Error, Result};

pub const ALL_NAMESPACES: &str = "All Namespaces";

/// The namespaces offered by the selector. Purely cosmetic — the selection is
/// displayed in the header but intentionally not wired into row filtering.
pub const NAMESPACES: &[&str] = &[
    ALL_NAMESPACES,
    "default",
    "kube-system",
    "production",
    "staging",
    "development",
    "monitoring",
];

#[derive(Debug, Clone, Default)]
pub struct TitleState {
    pub title: String,
    pub description: Option<String>,
    pub count: Option<usize>,
    pub namespace: String,
}

/// Provider-scoped title/namespace context.
///
/// `mount` initializes the state, `unmount` tears it down. All getters and
/// setters return [`Error::TitleProviderMissing`] outside that window.
#[derive(Debug, Default)]
pub struct TitleContext {
    state: Option<TitleState>,
}

impl TitleContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initializes the provider scope. Title, description and count start
    /// empty; the namespace starts at [`ALL_NAMESPACES`].
    pub fn mount(&mut self) {
        self.state = Some(TitleState {
            namespace: ALL_NAMESPACES.to_string(),
            ..TitleState::default()
        });
    }

    /// Tears the provider scope down; subsequent access fails loudly.
    pub fn unmount(&mut self) {
        self.state = None;
    }

    pub fn is_mounted(&self) -> bool {
        self.state.is_some()
    }

    pub fn read(&self) -> Result<&TitleState> {
        self.state.as_ref().ok_or(Error::TitleProviderMissing)
    }

    fn write(&mut self) -> Result<&mut TitleState> {
        self.state.as_mut().ok_or(Error::TitleProviderMissing)
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> Result<()> {
        self.write()?.title = title.into();
        Ok(())
    }

    pub fn set_description(&mut self, description: Option<String>) -> Result<()> {
        self.write()?.description = description;
        Ok(())
    }

    pub fn set_count(&mut self, count: Option<usize>) -> Result<()> {
        self.write()?.count = count;
        Ok(())
    }

    /// The namespace has its own lifecycle: pages never reset it, only the
    /// selector (or provider teardown) changes it.
    pub fn set_namespace(&mut self, namespace: impl Into<String>) -> Result<()> {
        self.write()?.namespace = namespace.into();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_outside_provider_fails() {
        let mut ctx = TitleContext::new();
        assert!(matches!(ctx.read(), Err(Error::TitleProviderMissing)));
        assert!(matches!(
            ctx.set_title("Pods"),
            Err(Error::TitleProviderMissing)
        ));

        ctx.mount();
        ctx.unmount();
        assert!(matches!(ctx.read(), Err(Error::TitleProviderMissing)));
    }

    #[test]
    fn test_mount_defaults() {
        let mut ctx = TitleContext::new();
        ctx.mount();

        let state = ctx.read().unwrap();
        assert_eq!(state.title, "");
        assert_eq!(state.description, None);
        assert_eq!(state.count, None);
        assert_eq!(state.namespace, ALL_NAMESPACES);
    }

    #[test]
    fn test_setters_round_trip() {
        let mut ctx = TitleContext::new();
        ctx.mount();

        ctx.set_title("Pods").unwrap();
        ctx.set_description(Some("View pods".into())).unwrap();
        ctx.set_count(Some(15)).unwrap();
        ctx.set_namespace("production").unwrap();

        let state = ctx.read().unwrap();
        assert_eq!(state.title, "Pods");
        assert_eq!(state.description.as_deref(), Some("View pods"));
        assert_eq!(state.count, Some(15));
        assert_eq!(state.namespace, "production");
    }

    #[test]
    fn test_namespace_survives_page_reset() {
        let mut ctx = TitleContext::new();
        ctx.mount();
        ctx.set_namespace("staging").unwrap();

        // What a page wrapper does on unmount: clear its own fields only.
        ctx.set_title("").unwrap();
        ctx.set_description(None).unwrap();
        ctx.set_count(None).unwrap();

        assert_eq!(ctx.read().unwrap().namespace, "staging");
    }
}
