/// Book cards
///
/// A card is built in two steps: `build_card` turns a Book into a plain
/// `CardView` (what the shelf keeps and compares), and `view`
/// turns a `CardView` into iced widgets.

use chrono::{DateTime, Utc};
use iced::widget::{button, canvas, column, container, horizontal_space, image, row, text, Column};
use iced::{Alignment, Element, Length};
use iced_aw::Wrap;

use crate::state::data::{Book, BookId};
use crate::thumbnail::{ThumbnailCache, ThumbnailState};
use crate::ui::icon::TrashIcon;
use crate::Message;

const CARD_WIDTH: f32 = 220.0;
const THUMBNAIL_HEIGHT: f32 = 260.0;

/// Actions exposed on each card's toolbar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    Delete,
    ToggleStatus,
}

impl CardAction {
    /// Toolbar order
    pub const TOOLBAR: [CardAction; 2] = [CardAction::Delete, CardAction::ToggleStatus];
}

/// Thumbnail shown at the top of a card
#[derive(Debug, Clone, PartialEq)]
pub struct Thumbnail {
    pub src: String,
    pub alt: String,
}

/// Structural representation of one card
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    /// Owning book; every action on the card is routed with it
    pub book_id: BookId,
    pub thumbnail: Option<Thumbnail>,
    pub title: String,
    pub author: String,
    /// Trimmed, non-empty tags
    pub tags: Vec<String>,
    pub have_read: bool,
    pub added_at: DateTime<Utc>,
    pub actions: [CardAction; 2],
}

impl CardView {
    /// Label of the read-status indicator
    pub fn status_label(&self) -> &'static str {
        if self.have_read {
            "Read"
        } else {
            "Not read"
        }
    }
}

/// Build the card for a book
pub fn build_card(book: &Book) -> CardView {
    let thumbnail = book.has_thumbnail().then(|| Thumbnail {
        src: book.img_src.clone(),
        alt: format!("Image of the book - {}", book.title),
    });

    let tags = book
        .tags
        .iter()
        .map(|tag| tag.trim())
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect();

    CardView {
        book_id: book.id,
        thumbnail,
        title: book.title.clone(),
        author: book.author.clone(),
        tags,
        have_read: book.have_read,
        added_at: book.added_at,
        actions: CardAction::TOOLBAR,
    }
}

/// Render a card into widgets
pub fn view<'a>(card: &'a CardView, thumbnails: &'a ThumbnailCache) -> Element<'a, Message> {
    let mut content: Column<Message> = Column::new().spacing(8).width(Length::Fixed(CARD_WIDTH));

    if let Some(thumbnail) = &card.thumbnail {
        let picture: Element<Message> = match thumbnails.get(&thumbnail.src) {
            Some(ThumbnailState::Ready(handle)) => image(handle.clone())
                .width(Length::Fill)
                .height(Length::Fixed(THUMBNAIL_HEIGHT))
                .into(),
            Some(ThumbnailState::Loading) => placeholder("Loading cover..."),
            Some(ThumbnailState::Failed(_)) | None => placeholder(&thumbnail.alt),
        };
        content = content.push(picture);
    }

    content = content
        .push(text(&card.title).size(20))
        .push(text(&card.author).size(14).style(text::secondary))
        .push(text(format!("Added {}", card.added_at.format("%b %e, %Y"))).size(11));

    if !card.tags.is_empty() {
        let chips: Vec<Element<Message>> = card
            .tags
            .iter()
            .map(|tag| {
                container(text(tag).size(12))
                    .padding([2, 8])
                    .style(container::rounded_box)
                    .into()
            })
            .collect();
        content = content.push(Wrap::with_elements(chips).spacing(4.0).line_spacing(4.0));
    }

    let toolbar = row(card.actions.iter().map(|action| toolbar_button(card, *action)))
        .spacing(8)
        .align_y(Alignment::Center);
    content = content.push(toolbar);

    container(content)
        .padding(12)
        .style(container::bordered_box)
        .into()
}

fn toolbar_button(card: &CardView, action: CardAction) -> Element<'_, Message> {
    let message = Message::Card(card.book_id, action);
    match action {
        CardAction::Delete => row![
            button(canvas(TrashIcon).width(Length::Fixed(18.0)).height(Length::Fixed(18.0)))
                .on_press(message)
                .padding(6)
                .style(button::danger),
            horizontal_space(),
        ]
        .width(Length::Fill)
        .into(),
        CardAction::ToggleStatus => button(text(card.status_label()).size(14))
            .on_press(message)
            .style(if card.have_read {
                button::success
            } else {
                button::secondary
            })
            .into(),
    }
}

fn placeholder(label: &str) -> Element<'_, Message> {
    container(column![text(label).size(12)].align_x(Alignment::Center))
        .width(Length::Fill)
        .height(Length::Fixed(THUMBNAIL_HEIGHT))
        .center_x(Length::Fill)
        .center_y(Length::Fixed(THUMBNAIL_HEIGHT))
        .style(container::rounded_box)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_without_thumbnail() {
        let book = Book::new("Dune", "Frank Herbert", "", vec![], false);
        let card = build_card(&book);

        assert_eq!(card.book_id, book.id);
        assert!(card.thumbnail.is_none());
        assert_eq!(card.title, "Dune");
        assert_eq!(card.author, "Frank Herbert");
        assert_eq!(card.status_label(), "Not read");
        assert_eq!(card.actions, [CardAction::Delete, CardAction::ToggleStatus]);
    }

    #[test]
    fn test_card_thumbnail_alt_text() {
        let book = Book::new("Dune", "Frank Herbert", "https://example.com/dune.jpg", vec![], true);
        let card = build_card(&book);

        let thumbnail = card.thumbnail.unwrap();
        assert_eq!(thumbnail.src, "https://example.com/dune.jpg");
        assert_eq!(thumbnail.alt, "Image of the book - Dune");
        assert!(card.have_read);
    }

    #[test]
    fn test_card_drops_blank_tags() {
        let tags = vec!["  Fiction ".to_string(), "   ".to_string(), "Drama".to_string()];
        let book = Book::new("Dune", "Frank Herbert", "", tags, false);

        assert_eq!(build_card(&book).tags, vec!["Fiction", "Drama"]);
    }
}
