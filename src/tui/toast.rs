use std::time::{Duration, Instant};

/// How long a toast stays visible
pub const TOAST_DURATION: Duration = Duration::from_millis(1200);

/// Kind of a toast notice, mapped to a status-row color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
    Error,
}

/// A transient status-row notice
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub created_at: Instant,
}

impl Toast {
    pub fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Toast {
            message: message.into(),
            kind,
            created_at: Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= TOAST_DURATION
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_toast_is_not_expired() {
        let toast = Toast::new(ToastKind::Success, "Todo added successfully!");
        assert!(!toast.is_expired());
        assert_eq!(toast.kind, ToastKind::Success);
    }

    #[test]
    fn backdated_toast_expires() {
        let mut toast = Toast::new(ToastKind::Error, "Todo deleted!");
        toast.created_at = Instant::now() - TOAST_DURATION * 2;
        assert!(toast.is_expired());
    }
}
