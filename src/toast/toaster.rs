use super::registry::ToastRegistry;
use super::types::{Toast, ToastId, ToastKind};
use crate::clock::Clock;

/// Category shortcuts over a borrowed [`ToastRegistry`]
pub struct Toaster<'a, C: Clock> {
    registry: &'a mut ToastRegistry<C>,
}

impl<'a, C: Clock> Toaster<'a, C> {
    pub(crate) fn new(registry: &'a mut ToastRegistry<C>) -> Self {
        Self { registry }
    }

    pub fn success(&mut self, message: impl Into<String>, duration_ms: Option<u64>) -> ToastId {
        self.registry.add(ToastKind::Success, message, duration_ms)
    }

    pub fn error(&mut self, message: impl Into<String>, duration_ms: Option<u64>) -> ToastId {
        self.registry.add(ToastKind::Error, message, duration_ms)
    }

    pub fn warning(&mut self, message: impl Into<String>, duration_ms: Option<u64>) -> ToastId {
        self.registry.add(ToastKind::Warning, message, duration_ms)
    }

    pub fn info(&mut self, message: impl Into<String>, duration_ms: Option<u64>) -> ToastId {
        self.registry.add(ToastKind::Info, message, duration_ms)
    }

    pub fn custom(
        &mut self,
        category: impl Into<String>,
        message: impl Into<String>,
        duration_ms: Option<u64>,
    ) -> ToastId {
        self.registry
            .add(ToastKind::Custom(category.into()), message, duration_ms)
    }

    pub fn dismiss(&mut self, id: ToastId) -> bool {
        self.registry.remove(id)
    }

    pub fn clear(&mut self) {
        self.registry.clear();
    }

    pub fn toasts(&self) -> &[Toast] {
        self.registry.read()
    }
}

#[cfg(test)]
mod tests {
    use crate::clock::ManualClock;
    use crate::config::ToastConfig;
    use crate::toast::{ToastKind, ToastRegistry};

    #[test]
    fn shortcuts_add_matching_categories() {
        let mut reg = ToastRegistry::with_clock(ToastConfig::default(), ManualClock::new());
        let mut toast = reg.toaster();
        toast.success("saved", None);
        toast.error("failed", None);
        toast.warning("careful", None);
        toast.info("fyi", None);
        toast.custom("deploy", "shipped", Some(0));

        let kinds: Vec<ToastKind> = toast.toasts().iter().map(|t| t.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![
                ToastKind::Success,
                ToastKind::Error,
                ToastKind::Warning,
                ToastKind::Info,
                ToastKind::Custom("deploy".into()),
            ]
        );
    }

    #[test]
    fn dismiss_and_clear_go_through_registry() {
        let mut reg = ToastRegistry::with_clock(
            ToastConfig::default().with_max_toasts(0),
            ManualClock::new(),
        );
        let mut toast = reg.toaster();
        let id = toast.info("one", None);
        toast.info("two", None);

        assert!(toast.dismiss(id));
        assert!(!toast.dismiss(id));
        assert_eq!(toast.toasts().len(), 1);

        toast.clear();
        assert!(toast.toasts().is_empty());
        assert!(reg.is_empty());
    }
}
