pub mod colors;
pub mod formatting;
pub mod path;
pub mod table;

pub use formatting::{frames_label, group_thousands, percent};
