use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn duration(self) -> Duration {
        match self {
            Self::Success => Duration::from_millis(2000),
            Self::Error => Duration::from_millis(4000),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub kind: ToastKind,
    pub message: String,
}

/// Notifications currently on screen, oldest first.
#[derive(Debug, Clone, Default)]
pub struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let mut queue = ToastQueue::default();
        let ok = queue.push(ToastKind::Success, "sent");
        let err = queue.push(ToastKind::Error, "failed");
        assert_ne!(ok, err);
        assert_eq!(queue.toasts().len(), 2);

        assert!(queue.dismiss(ok));
        assert!(!queue.dismiss(ok));
        assert_eq!(queue.toasts()[0].message, "failed");
    }

    #[test]
    fn test_error_toasts_stay_longer() {
        assert!(ToastKind::Error.duration() > ToastKind::Success.duration());
    }
}
