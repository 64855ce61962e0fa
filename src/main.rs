use iced::widget::{button, column, container, horizontal_space, row, text};
use iced::{Alignment, Element, Length, Task, Theme};
use std::path::PathBuf;
use tracing::info;

mod config;
mod confirm;
mod controller;
mod logging;
mod state;
mod thumbnail;
mod ui;

use config::AppConfig;
use confirm::NativeConfirm;
use controller::{Controller, ModalState, SubmitOutcome};
use state::data::BookId;
use state::form::Field;
use state::library::Library;
use thumbnail::{ThumbnailCache, ThumbnailError};
use ui::card::CardAction;

/// Main application state
struct BookShelf {
    /// Library, shelf and entry form
    controller: Controller,
    /// Thumbnails requested this session, keyed by source
    thumbnails: ThumbnailCache,
    config: AppConfig,
    confirm: NativeConfirm,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User clicked "Add book"
    OpenEntry,
    /// User dismissed the entry modal
    CloseEntry,
    /// User typed into a form input
    FieldChanged(Field, String),
    /// User submitted the entry form
    Submit,
    /// User pressed a toolbar button on a card
    Card(BookId, CardAction),
    /// Background thumbnail load finished
    ThumbnailLoaded(String, Result<PathBuf, ThumbnailError>),
}

impl BookShelf {
    /// Create a new instance of the application
    fn new(config: AppConfig) -> (Self, Task<Message>) {
        let library = if config.seed_library {
            Library::with_seed_books()
        } else {
            Library::new()
        };

        let mut app = BookShelf {
            controller: Controller::new(library),
            thumbnails: ThumbnailCache::new(),
            config,
            confirm: NativeConfirm,
        };

        let task = app.request_thumbnails();
        (app, task)
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::OpenEntry => {
                self.controller.open_entry();
                Task::none()
            }
            Message::CloseEntry => {
                self.controller.close_entry();
                Task::none()
            }
            Message::FieldChanged(field, value) => {
                self.controller.edit_field(field, value);
                Task::none()
            }
            Message::Submit => match self.controller.submit() {
                SubmitOutcome::Added(_) => self.request_thumbnails(),
                SubmitOutcome::Invalid(_) | SubmitOutcome::Ignored => Task::none(),
            },
            Message::Card(id, action) => {
                // Blocks on the native dialog for deletes, as a synchronous decision point
                self.controller.handle_card_action(id, action, &self.confirm);
                Task::none()
            }
            Message::ThumbnailLoaded(src, result) => {
                self.thumbnails.finish(src, result);
                Task::none()
            }
        }
    }

    /// Start loading any thumbnail on the shelf that has not been requested yet
    fn request_thumbnails(&mut self) -> Task<Message> {
        if !self.config.load_thumbnails {
            return Task::none();
        }

        let size = self.config.thumbnail_size;
        let mut tasks = Vec::new();

        for card in self.controller.shelf().cards() {
            let Some(thumbnail) = &card.thumbnail else {
                continue;
            };
            if !self.thumbnails.request(&thumbnail.src) {
                continue;
            }

            let src = thumbnail.src.clone();
            tasks.push(Task::perform(
                thumbnail::load_thumbnail(src.clone(), size),
                move |result| Message::ThumbnailLoaded(src.clone(), result),
            ));
        }

        Task::batch(tasks)
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let library = self.controller.library();
        let summary = format!(
            "{} books, {} read",
            library.len(),
            library.read_count()
        );

        let header = row![
            text("Book Shelf").size(32),
            horizontal_space(),
            text(summary).size(14),
            button("Add book")
                .on_press(Message::OpenEntry)
                .padding(10),
        ]
        .spacing(20)
        .padding(20)
        .align_y(Alignment::Center);

        let base = container(column![
            header,
            self.controller.shelf().view(&self.thumbnails),
        ])
        .width(Length::Fill)
        .height(Length::Fill);

        match self.controller.modal() {
            ModalState::Open => ui::modal::modal(
                base,
                ui::modal::entry_form(self.controller.form(), self.controller.error()),
                Message::CloseEntry,
            ),
            ModalState::Closed => base.into(),
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        self.config.theme.to_theme()
    }
}

fn main() -> iced::Result {
    let loaded = AppConfig::load();
    logging::configure_logging(&loaded.config.log_filter);
    info!("Starting Book Shelf v{}", env!("CARGO_PKG_VERSION"));
    loaded.report();
    let config = loaded.config;

    iced::application(
        "Book Shelf",
        BookShelf::update,
        BookShelf::view,
    )
    .theme(BookShelf::theme)
    .centered()
    .run_with(move || BookShelf::new(config))
}
