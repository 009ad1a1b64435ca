//! Templated list widget for the Tessera UI toolkit.
//!
//! A [`ListView`] draws [`Row`]s through shared [`RowTemplate`]s. Each
//! template paints a cached gradient background, then its cells, then an
//! optional border. Rows scroll by dragging and toggle selection on tap.

pub mod cell;
pub mod config;
pub mod error;
pub mod gradient;
pub mod list;
pub mod row;
pub mod template;

pub use cell::{CellData, CellKind, CellSpec, DataBinding, ImageTextCell, TextCell};
pub use config::{
    CellConfig, CellKindConfig, FontConfig, GradientConfig, ListConfig, TemplateConfig,
};
pub use error::ListError;
pub use gradient::GradientCache;
pub use list::{ListScrolled, ListView, SelectionChanged};
pub use row::{effective_template, CellValue, Row, RowId};
pub use template::{RowTemplate, TemplateRef};
