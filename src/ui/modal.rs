/// Entry modal: an overlay holding the add-book form
use iced::widget::{
    button, center, column, container, horizontal_space, mouse_area, opaque, row, stack, text,
    text_input, Column,
};
use iced::{Color, Element, Length};

use crate::state::form::{EntryForm, Field, ValidationError};
use crate::Message;

/// Show `content` above `base`, dimming the background.
/// Clicking the backdrop publishes `on_blur`.
pub fn modal<'a, M>(
    base: impl Into<Element<'a, M>>,
    content: impl Into<Element<'a, M>>,
    on_blur: M,
) -> Element<'a, M>
where
    M: Clone + 'a,
{
    stack![
        base.into(),
        opaque(
            mouse_area(center(opaque(content)).style(|_theme| container::Style {
                background: Some(
                    Color {
                        a: 0.8,
                        ..Color::BLACK
                    }
                    .into(),
                ),
                ..container::Style::default()
            }))
            .on_press(on_blur)
        )
    ]
    .into()
}

fn placeholder(field: Field) -> &'static str {
    match field {
        Field::Title => "Atomic Habits",
        Field::Author => "James Clear",
        Field::Thumbnail => "https://example.com/cover.jpg",
        Field::Tags => "Habits, Self help",
    }
}

/// The add-book form. A validation error is shown under its own field only.
pub fn entry_form<'a>(
    form: &'a EntryForm,
    error: Option<&'a ValidationError>,
) -> Element<'a, Message> {
    let mut fields: Column<Message> = Column::new().spacing(12);

    for field in Field::ALL {
        let input = text_input(placeholder(field), form.value(field))
            .on_input(move |value| Message::FieldChanged(field, value))
            .on_submit(Message::Submit)
            .padding(8);

        let mut entry = column![text(field.label()).size(14), input].spacing(4);
        if let Some(error) = error.filter(|error| error.field == field) {
            entry = entry.push(text(&error.message).size(12).style(text::danger));
        }
        fields = fields.push(entry);
    }

    let actions = row![
        horizontal_space(),
        button("Cancel")
            .on_press(Message::CloseEntry)
            .style(button::secondary),
        button("Add book").on_press(Message::Submit),
    ]
    .spacing(8);

    container(column![text("Add a book").size(24), fields, actions].spacing(20))
        .width(Length::Fixed(420.0))
        .padding(24)
        .style(container::rounded_box)
        .into()
}
