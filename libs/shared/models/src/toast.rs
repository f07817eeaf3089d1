use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: ToastKind::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: ToastKind::Error, message: message.into() }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self { kind: ToastKind::Info, message: message.into() }
    }

    pub fn is_error(&self) -> bool {
        self.kind == ToastKind::Error
    }
}

impl fmt::Display for Toast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = match self.kind {
            ToastKind::Success => "✓",
            ToastKind::Error => "✗",
            ToastKind::Info => "i",
        };
        write!(f, "[{}] {}", marker, self.message)
    }
}
