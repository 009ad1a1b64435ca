//! Core types and traits for the Tessera list toolkit.
//!
//! This crate provides the primitives the list engine draws with:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Color representation: [`Color`]
//! - Rasters and display lists: [`Bitmap`], [`DrawCommand`], [`RecordingCanvas`]
//! - The rendering seam: [`Canvas`]
//! - Input: [`Event`], [`MouseButton`]
//! - Observable ordered collections: [`ObservableVec`]

pub mod canvas;
mod collection;
mod color;
pub mod draw;
mod event;
mod geometry;
pub mod raster;
mod text;
pub mod widget;

pub use canvas::RecordingCanvas;
pub use collection::{IndexOutOfRange, ListAction, ListChanged, ObservableVec};
pub use color::{Color, ColorParseError};
pub use draw::DrawCommand;
pub use event::{Event, MouseButton};
pub use geometry::{Point, Rect, Size};
pub use raster::Bitmap;
pub use text::{FontStyle, FontWeight, HorAlign, TextAlign, TextAlignment, TextStyle, VerAlign};
pub use widget::{Canvas, LayoutResult, Widget};
