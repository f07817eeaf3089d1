pub mod context;
pub mod form;
pub mod section;
pub mod test_utils;
pub mod toast;

pub use context::SectionContext;
pub use section::SectionState;
pub use toast::{Notifier, ToastQueue};
