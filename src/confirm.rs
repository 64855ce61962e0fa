use rfd::{MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};

/// A yes/no decision point.
/// The caller blocks until the answer is known.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

/// Native dialog shown by the operating system
pub struct NativeConfirm;

impl Confirm for NativeConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        let result = MessageDialog::new()
            .set_level(MessageLevel::Warning)
            .set_title("Book Shelf")
            .set_description(prompt)
            .set_buttons(MessageButtons::YesNo)
            .show();

        matches!(result, MessageDialogResult::Yes)
    }
}
