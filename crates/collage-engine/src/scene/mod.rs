//! Retained scene model.
//!
//! Responsibilities:
//! - geometry leaves (`Path`, `Shape`) and their constructors
//! - styling (`LineStyle`, `FillStyle`, `Text`)
//! - the form tree (`Form`, `FormStyle`) and the elements that host it (`Element`)
//!
//! Everything here is an immutable value. Combinators return new values and
//! never touch their inputs, so a finished tree can be shared across threads
//! and walked concurrently without locking.

mod element;
mod fill;
mod form;
mod line;
mod path;
mod shape;
mod text;

pub use element::{Collage, Element, Image};
pub use fill::FillStyle;
pub use form::{Form, FormStyle, ShapeStyle};
pub use line::{LineCap, LineJoin, LineStyle};
pub use path::Path;
pub use shape::{Shape, ELLIPSE_STEPS};
pub use text::{FontStyle, FontWeight, Text, TextLine, DEFAULT_TEXT_HEIGHT};
