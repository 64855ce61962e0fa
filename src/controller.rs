/// Application controller
///
/// Owns the library, the shelf and the entry form, and is the only place
/// where user actions turn into library mutations. Every mutation is
/// followed by exactly one full shelf render before control returns.

use tracing::{debug, info};

use crate::confirm::Confirm;
use crate::state::data::BookId;
use crate::state::form::{EntryForm, Field, ValidationError};
use crate::state::library::Library;
use crate::ui::card::CardAction;
use crate::ui::shelf::Shelf;

/// Visibility of the entry modal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

/// Result of a form submission
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The modal was not open
    Ignored,
    /// A field failed validation; nothing was added
    Invalid(ValidationError),
    /// The book was added and the shelf re-rendered
    Added(BookId),
}

pub struct Controller {
    library: Library,
    shelf: Shelf,
    form: EntryForm,
    modal: ModalState,
    error: Option<ValidationError>,
}

impl Controller {
    /// Take ownership of the library and render it for the first time
    pub fn new(library: Library) -> Self {
        let mut shelf = Shelf::new();
        shelf.render_all(&library);
        info!("Shelf ready with {} books", library.len());

        Self {
            library,
            shelf,
            form: EntryForm::default(),
            modal: ModalState::Closed,
            error: None,
        }
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    pub fn shelf(&self) -> &Shelf {
        &self.shelf
    }

    pub fn form(&self) -> &EntryForm {
        &self.form
    }

    pub fn modal(&self) -> ModalState {
        self.modal
    }

    /// Message of the last failed submission, if any
    pub fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    /// Show the entry modal. The library is untouched.
    pub fn open_entry(&mut self) {
        self.modal = ModalState::Open;
        self.error = None;
    }

    /// Hide the entry modal and reset the form
    pub fn close_entry(&mut self) {
        self.modal = ModalState::Closed;
        self.form.reset();
        self.error = None;
    }

    /// Update a form input. Editing the offending field clears its error.
    pub fn edit_field(&mut self, field: Field, value: String) {
        self.form.set(field, value);
        if self.error.as_ref().is_some_and(|error| error.field == field) {
            self.error = None;
        }
    }

    /// Validate the form and add the book.
    /// Validation failures are reported on the offending field, never propagated.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.modal != ModalState::Open {
            return SubmitOutcome::Ignored;
        }

        let book = match self.form.validate() {
            Ok(book) => book,
            Err(error) => {
                debug!(field = ?error.field, kind = ?error.kind, "submission blocked");
                self.error = Some(error.clone());
                return SubmitOutcome::Invalid(error);
            }
        };

        self.close_entry();
        let id = self
            .library
            .add_book(book.title, book.author, book.img_src, book.tags, false);
        self.shelf.render_all(&self.library);
        info!(%id, "Book added to shelf");

        SubmitOutcome::Added(id)
    }

    /// Route a card toolbar action.
    /// Returns true when the library changed. Stale ids are ignored.
    pub fn handle_card_action(
        &mut self,
        id: BookId,
        action: CardAction,
        confirm: &dyn Confirm,
    ) -> bool {
        let Some(book) = self.library.find_book(id) else {
            debug!(%id, ?action, "action on unknown book ignored");
            return false;
        };

        match action {
            CardAction::Delete => {
                let prompt = format!("Are you sure you want to delete \"{}\"?", book.title);
                if !confirm.confirm(&prompt) {
                    debug!(%id, "delete cancelled");
                    return false;
                }
                self.library.remove_book(id);
                info!(%id, "Book deleted");
            }
            CardAction::ToggleStatus => {
                self.library.toggle_read_status(id);
            }
        }

        self.shelf.render_all(&self.library);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Confirm double with a fixed answer that remembers every prompt
    struct RecordingConfirm {
        answer: bool,
        prompts: RefCell<Vec<String>>,
    }

    impl RecordingConfirm {
        fn answering(answer: bool) -> Self {
            Self {
                answer,
                prompts: RefCell::new(Vec::new()),
            }
        }
    }

    impl Confirm for RecordingConfirm {
        fn confirm(&self, prompt: &str) -> bool {
            self.prompts.borrow_mut().push(prompt.to_string());
            self.answer
        }
    }

    fn fill(controller: &mut Controller, title: &str, author: &str, thumbnail: &str, tags: &str) {
        controller.edit_field(Field::Title, title.to_string());
        controller.edit_field(Field::Author, author.to_string());
        controller.edit_field(Field::Thumbnail, thumbnail.to_string());
        controller.edit_field(Field::Tags, tags.to_string());
    }

    #[test]
    fn test_seed_scenario() {
        let controller = Controller::new(Library::with_seed_books());
        assert_eq!(controller.library().len(), 3);
        assert_eq!(controller.shelf().len(), 3);
        assert_eq!(controller.shelf().cards()[0].title, "So Good They Can't Ignore You");
        assert!(controller.library().iter().all(|book| !book.have_read));
        assert_eq!(controller.modal(), ModalState::Closed);
    }

    #[test]
    fn test_valid_submission_adds_book_and_renders_once() {
        let mut controller = Controller::new(Library::with_seed_books());
        let renders = controller.shelf().render_count();

        controller.open_entry();
        fill(&mut controller, "X", "Y", "", "a,b");
        let SubmitOutcome::Added(id) = controller.submit() else {
            panic!("submission should succeed");
        };

        let book = controller.library().find_book(id).unwrap();
        assert!(!book.have_read);
        assert_eq!(book.tags, vec!["a", "b"]);
        assert_eq!(controller.shelf().render_count(), renders + 1);
        assert_eq!(controller.shelf().len(), 4);
        assert_eq!(controller.shelf().cards()[0].book_id, id);

        assert_eq!(controller.modal(), ModalState::Closed);
        assert_eq!(controller.form(), &EntryForm::default());
    }

    #[test]
    fn test_empty_title_blocks_submission() {
        let mut controller = Controller::new(Library::with_seed_books());
        let renders = controller.shelf().render_count();

        controller.open_entry();
        fill(&mut controller, "", "Y", "", "");
        let SubmitOutcome::Invalid(error) = controller.submit() else {
            panic!("submission should be blocked");
        };

        assert_eq!(error.field, Field::Title);
        assert_eq!(controller.error(), Some(&error));
        assert_eq!(controller.library().len(), 3);
        assert_eq!(controller.shelf().render_count(), renders);
        // The modal stays open with the typed values intact
        assert_eq!(controller.modal(), ModalState::Open);
        assert_eq!(controller.form().author, "Y");
    }

    #[test]
    fn test_editing_offending_field_clears_error() {
        let mut controller = Controller::new(Library::new());
        controller.open_entry();
        fill(&mut controller, "", "Y", "", "");
        controller.submit();

        controller.edit_field(Field::Author, "Z".into());
        assert!(controller.error().is_some());
        controller.edit_field(Field::Title, "T".into());
        assert!(controller.error().is_none());
    }

    #[test]
    fn test_submit_while_closed_is_ignored() {
        let mut controller = Controller::new(Library::new());
        fill(&mut controller, "X", "Y", "", "");
        assert_eq!(controller.submit(), SubmitOutcome::Ignored);
        assert!(controller.library().is_empty());
    }

    #[test]
    fn test_close_resets_form() {
        let mut controller = Controller::new(Library::new());
        controller.open_entry();
        fill(&mut controller, "X", "Y", "https://example.com/x.png", "a");
        controller.close_entry();

        assert_eq!(controller.modal(), ModalState::Closed);
        assert_eq!(controller.form(), &EntryForm::default());
        assert!(controller.library().is_empty());
    }

    #[test]
    fn test_declined_delete_changes_nothing() {
        let mut controller = Controller::new(Library::with_seed_books());
        let id = controller.shelf().cards()[1].book_id;
        let renders = controller.shelf().render_count();
        let confirm = RecordingConfirm::answering(false);

        assert!(!controller.handle_card_action(id, CardAction::Delete, &confirm));

        assert_eq!(controller.library().len(), 3);
        assert!(controller.shelf().card(id).is_some());
        assert_eq!(controller.shelf().render_count(), renders);
        assert_eq!(
            confirm.prompts.borrow().as_slice(),
            ["Are you sure you want to delete \"Atomic Habits\"?"]
        );
    }

    #[test]
    fn test_accepted_delete_removes_book_and_card() {
        let mut controller = Controller::new(Library::with_seed_books());
        let id = controller.shelf().cards()[0].book_id;
        let confirm = RecordingConfirm::answering(true);

        assert!(controller.handle_card_action(id, CardAction::Delete, &confirm));

        assert_eq!(controller.library().len(), 2);
        assert_eq!(controller.shelf().len(), 2);
        assert!(controller.shelf().card(id).is_none());
        assert!(controller.library().find_book(id).is_none());
    }

    #[test]
    fn test_toggle_needs_no_confirmation() {
        let mut controller = Controller::new(Library::with_seed_books());
        let id = controller.shelf().cards()[2].book_id;
        let confirm = RecordingConfirm::answering(false);

        assert!(controller.handle_card_action(id, CardAction::ToggleStatus, &confirm));
        assert!(controller.shelf().card(id).unwrap().have_read);
        assert!(controller.library().find_book(id).unwrap().have_read);

        assert!(controller.handle_card_action(id, CardAction::ToggleStatus, &confirm));
        assert!(!controller.shelf().card(id).unwrap().have_read);
        assert!(confirm.prompts.borrow().is_empty());
    }

    #[test]
    fn test_stale_id_is_ignored() {
        let mut controller = Controller::new(Library::with_seed_books());
        let renders = controller.shelf().render_count();
        let confirm = RecordingConfirm::answering(true);

        assert!(!controller.handle_card_action(BookId::new(), CardAction::Delete, &confirm));
        assert!(!controller.handle_card_action(BookId::new(), CardAction::ToggleStatus, &confirm));

        assert_eq!(controller.library().len(), 3);
        assert_eq!(controller.shelf().render_count(), renders);
        assert!(confirm.prompts.borrow().is_empty());
    }
}
