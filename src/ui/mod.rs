/// User interface module
///
/// - grid.rs: the two-column scrollable image grid
/// - modal.rs: the detail overlay for the selected image
/// - scroll.rs: the infinite scroll trigger

pub mod grid;
pub mod modal;
pub mod scroll;
