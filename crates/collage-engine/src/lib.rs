//! Collage engine crate.
//!
//! A retained 2D scene model: forms (shapes, paths, embedded elements and
//! groups) with local transforms, composed into fixed-size collages. The
//! `render` module flattens a scene into paint-ordered draw items with fully
//! composed transforms; rasterization is left to the consumer.
//!
//! ```
//! use collage_engine::coords::Vec2;
//! use collage_engine::paint::Color;
//! use collage_engine::render::flatten;
//! use collage_engine::scene::{Element, Form, Shape};
//!
//! let scene = Element::centered_collage(
//!     200.0,
//!     200.0,
//!     vec![Form::filled(Color::black(), Shape::circle(10.0)).move_by(Vec2::new(20.0, 0.0))],
//! );
//! let list = flatten(&scene);
//! assert_eq!(list.items()[0].anchor(), Vec2::new(120.0, 100.0));
//! ```

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
