use std::collections::VecDeque;
use std::sync::Mutex;

use tracing::debug;

use shared_models::Toast;

/// Sink for transient user notifications.
pub trait Notifier: Send + Sync {
    fn notify(&self, toast: Toast);
}

/// In-memory toast queue drained by the presentation layer after each action.
#[derive(Debug, Default)]
pub struct ToastQueue {
    pending: Mutex<VecDeque<Toast>>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drain(&self) -> Vec<Toast> {
        match self.pending.lock() {
            Ok(mut pending) => pending.drain(..).collect(),
            Err(poisoned) => poisoned.into_inner().drain(..).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.pending.lock().map(|p| p.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn last(&self) -> Option<Toast> {
        self.pending.lock().ok().and_then(|p| p.back().cloned())
    }
}

impl Notifier for ToastQueue {
    fn notify(&self, toast: Toast) {
        debug!("Toast queued: {}", toast);
        match self.pending.lock() {
            Ok(mut pending) => pending.push_back(toast),
            Err(poisoned) => poisoned.into_inner().push_back(toast),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_models::ToastKind;

    #[test]
    fn test_drain_empties_queue_in_order() {
        let queue = ToastQueue::new();
        queue.notify(Toast::success("Saved"));
        queue.notify(Toast::error("Failed"));

        assert_eq!(queue.len(), 2);
        assert_eq!(queue.last().unwrap().kind, ToastKind::Error);

        let drained = queue.drain();
        assert_eq!(drained[0].message, "Saved");
        assert_eq!(drained[1].message, "Failed");
        assert!(queue.is_empty());
    }
}
