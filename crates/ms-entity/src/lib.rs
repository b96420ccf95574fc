//! `ms-entity`: Structure-of-Arrays entity storage.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`shape`]    | `Shape` glyph pair and the shared glyph constants          |
//! | [`drawer`]   | `Drawer`: the two-method render capability                |
//! | [`store`]    | `EntityStore` (SoA arrays), `EntityState`                  |
//!
//! # Per-entity state machine
//!
//! ```text
//! Idle ──assign_route(non-empty)──▶ Moving ──cursor reaches end──▶ Idle
//! ```
//!
//! `Idle` is both the initial state and a recurring one; entities are never
//! removed.

pub mod drawer;
pub mod shape;
pub mod store;


pub use drawer::Drawer;
pub use shape::Shape;
pub use store::{EntityState, EntityStore};
