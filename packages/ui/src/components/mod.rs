//! Small building blocks shared by every view.

mod button;
pub use button::{Button, ButtonVariant};

mod input;
pub use input::{Input, Label};

mod modal;
pub use modal::{ConfirmDialog, ModalOverlay};

mod pagination;
pub use pagination::{Pager, Pagination};

mod toast;
pub use toast::{use_toast, ToastKind, ToastProvider, ToastStyle, Toasts};
