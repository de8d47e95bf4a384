//! Reusable presentational components

mod animated_text;
mod button;
mod entrance;
mod icon;
mod remote_image;
mod reveal;
mod script;
mod star;

pub use animated_text::*;
pub use button::*;
pub use entrance::*;
pub use icon::*;
pub use remote_image::*;
pub use reveal::*;
pub use script::*;
pub use star::*;
