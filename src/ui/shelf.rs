use iced::widget::{center, container, scrollable, text};
use iced::{Element, Length};
use iced_aw::Wrap;
use std::collections::HashMap;
use tracing::debug;

use super::card::{self, build_card, CardView};
use crate::state::data::BookId;
use crate::state::library::Library;
use crate::thumbnail::ThumbnailCache;
use crate::Message;

/// The rendered shelf: one card per book, newest first.
///
/// Cards are rebuilt from scratch on every `render_all`. The side map from
/// book id to card position replaces any view handle on the book itself.
#[derive(Debug, Default)]
pub struct Shelf {
    cards: Vec<CardView>,
    index: HashMap<BookId, usize>,
    render_count: usize,
}

impl Shelf {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the shelf and rebuild every card from the library
    pub fn render_all(&mut self, library: &Library) {
        self.cards.clear();
        self.index.clear();

        for book in library.iter_newest_first() {
            self.index.insert(book.id, self.cards.len());
            self.cards.push(build_card(book));
        }

        self.render_count += 1;
        debug!(cards = self.cards.len(), renders = self.render_count, "shelf rendered");
    }

    /// Card currently shown for a book
    pub fn card(&self, id: BookId) -> Option<&CardView> {
        self.index.get(&id).map(|&position| &self.cards[position])
    }

    /// Cards in display order
    pub fn cards(&self) -> &[CardView] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// How many times the shelf has been rebuilt
    pub fn render_count(&self) -> usize {
        self.render_count
    }

    pub fn view<'a>(&'a self, thumbnails: &'a ThumbnailCache) -> Element<'a, Message> {
        if self.cards.is_empty() {
            return center(text("Your shelf is empty. Add a book to get started.").size(18)).into();
        }

        let cards: Vec<Element<Message>> = self
            .cards
            .iter()
            .map(|card| card::view(card, thumbnails))
            .collect();

        scrollable(container(Wrap::with_elements(cards).spacing(16.0).line_spacing(16.0)).padding(24))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}
