/// User interface module
///
/// - `shelf.rs` - the card grid, rebuilt after every library change
/// - `card.rs` - structural card model and its widgets
/// - `modal.rs` - the add-book overlay and form
/// - `icon.rs` - canvas-drawn icons

pub mod card;
pub mod icon;
pub mod modal;
pub mod shelf;
