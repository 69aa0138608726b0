//! Core types and traits for the Appton site engine.
//!
//! This crate provides the foundation the page sections are built on:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Color representation: [`Color`] with WCAG contrast calculations
//! - Layout constraints: [`Constraints`]
//! - Input events: [`Event`], [`MouseButton`], [`Key`]
//! - The [`Widget`] lifecycle (measure, layout, paint, event)
//! - Draw primitives: [`DrawCommand`] and the recording [`DrawList`]
//! - Application state: [`State`] and [`Command`]

mod animation;
mod color;
mod constraints;
mod draw;
mod event;
mod geometry;
mod state;
mod theme;
pub mod widget;

pub use animation::{Easing, FloatVariant};
pub use color::{Color, ColorParseError};
pub use constraints::Constraints;
pub use draw::{DrawCommand, DrawList};
pub use event::{Event, Key, MouseButton};
pub use geometry::{Point, Rect, Size};
pub use state::{Command, State};
pub use theme::Theme;
pub use widget::{
    AccessibleRole, Canvas, FontWeight, LayoutResult, TextAlign, TextStyle, TypeId, Widget,
    WidgetId,
};
