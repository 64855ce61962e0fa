/// Trash can glyph for the card delete button, drawn on a canvas
use iced::widget::canvas::{self, Path};
use iced::{mouse, Point, Rectangle, Renderer, Theme};

/// Side of the square design box the outlines are expressed in
const VIEW_BOX: f32 = 24.0;

/// Can body and lid outlines, in view-box units
const OUTLINES: [[(f32, f32); 4]; 2] = [
    [(6.0, 7.0), (18.0, 7.0), (17.0, 21.0), (7.0, 21.0)],
    [(9.0, 4.0), (15.0, 4.0), (16.0, 6.0), (8.0, 6.0)],
];

#[derive(Debug, Clone, Copy, Default)]
pub struct TrashIcon;

impl TrashIcon {
    /// Map the outlines into `bounds`, centred and uniformly scaled
    fn outlines(bounds: Rectangle) -> [[Point; 4]; 2] {
        let scale = bounds.width.min(bounds.height) / VIEW_BOX;
        let dx = (bounds.width - VIEW_BOX * scale) / 2.0;
        let dy = (bounds.height - VIEW_BOX * scale) / 2.0;

        OUTLINES.map(|outline| outline.map(|(x, y)| Point::new(dx + x * scale, dy + y * scale)))
    }
}

impl<Message> canvas::Program<Message> for TrashIcon {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let color = theme.palette().text;

        for outline in Self::outlines(bounds) {
            let path = Path::new(|builder| {
                builder.move_to(outline[0]);
                for point in &outline[1..] {
                    builder.line_to(*point);
                }
                builder.close();
            });
            frame.fill(&path, color);
        }

        vec![frame.into_geometry()]
    }
}
