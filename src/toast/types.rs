use std::fmt;
use std::time::Duration;

/// Identifier of a toast, unique within the registry that created it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl ToastId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
    /// Application-defined category, styled by the renderer
    Custom(String),
}

impl ToastKind {
    /// Category name as used by renderers and config files
    pub fn name(&self) -> &str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Warning => "warning",
            ToastKind::Info => "info",
            ToastKind::Custom(name) => name,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, ToastKind::Custom(_))
    }
}

impl fmt::Display for ToastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An active notification record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub kind: ToastKind,
    pub message: String,
    /// Auto-dismiss delay in milliseconds; 0 keeps the toast until dismissed
    pub duration_ms: u64,
    /// Wall-clock creation time (Unix millis)
    pub created_at: i64,
}

impl Toast {
    pub(crate) fn new(
        id: ToastId,
        kind: ToastKind,
        message: impl Into<String>,
        duration_ms: u64,
        created_at: i64,
    ) -> Self {
        Self {
            id,
            kind,
            message: message.into(),
            duration_ms,
            created_at,
        }
    }

    pub fn is_persistent(&self) -> bool {
        self.duration_ms == 0
    }

    pub fn duration(&self) -> Option<Duration> {
        (!self.is_persistent()).then(|| Duration::from_millis(self.duration_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_name_matches_category() {
        assert_eq!(ToastKind::Success.name(), "success");
        assert_eq!(ToastKind::Error.name(), "error");
        assert_eq!(ToastKind::Warning.name(), "warning");
        assert_eq!(ToastKind::Info.name(), "info");
        assert_eq!(ToastKind::Custom("deploy".into()).name(), "deploy");
        assert!(ToastKind::Custom("deploy".into()).is_custom());
        assert!(!ToastKind::Info.is_custom());
    }

    #[test]
    fn zero_duration_is_persistent() {
        let toast = Toast::new(ToastId::new(1), ToastKind::Info, "hello", 0, 0);
        assert!(toast.is_persistent());
        assert_eq!(toast.duration(), None);

        let toast = Toast::new(ToastId::new(2), ToastKind::Info, "hello", 1500, 0);
        assert!(!toast.is_persistent());
        assert_eq!(toast.duration(), Some(Duration::from_millis(1500)));
    }

    #[test]
    fn id_displays_with_prefix() {
        assert_eq!(ToastId::new(7).to_string(), "toast-7");
        assert_eq!(ToastId::new(7).as_u64(), 7);
    }
}
