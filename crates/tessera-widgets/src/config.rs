//! YAML configuration for lists and their templates.
//!
//! ```
//! use tessera_widgets::ListConfig;
//!
//! let list = ListConfig::load(
//!     "separator_size: 2\ntemplate_default: 0\ntemplates:\n  - height: 30\n",
//! )
//! .unwrap();
//! assert_eq!(list.separator_size(), 2);
//! assert_eq!(list.templates().len(), 1);
//! ```

use crate::cell::{CellKind, CellSpec, DataBinding, ImageTextCell, TextCell};
use crate::error::ListError;
use crate::list::ListView;
use crate::template::RowTemplate;
use serde::{Deserialize, Serialize};
use tessera_core::{Color, FontStyle, FontWeight, HorAlign, Rect, TextStyle, VerAlign};

/// List settings and templates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    /// Gap between rows
    pub separator_size: i32,
    /// Allow several selected rows
    pub multi_select: bool,
    /// Tap/drag threshold in pixels
    pub touch_sensitivity: i32,
    /// Viewport background
    pub back_color: Color,
    /// Template given to new rows
    pub template_default: Option<usize>,
    /// Template given to new rows for their selected state
    pub template_selected: Option<usize>,
    /// Row templates, in order
    pub templates: Vec<TemplateConfig>,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            separator_size: 0,
            multi_select: false,
            touch_sensitivity: 10,
            back_color: Color::GRAY,
            template_default: None,
            template_selected: None,
            templates: Vec::new(),
        }
    }
}

impl ListConfig {
    /// Parse a configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::Config`] for malformed YAML, unknown cell kinds
    /// or unparseable colors.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ListError> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Serialize to YAML.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::Config`] if serialization fails.
    pub fn to_yaml_string(&self) -> Result<String, ListError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Parse a document and build the list it describes.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::Config`] when the document does not parse.
    pub fn load(yaml: &str) -> Result<ListView, ListError> {
        Ok(Self::from_yaml_str(yaml)?.build())
    }

    /// Create a list with these settings and templates.
    #[must_use]
    pub fn build(&self) -> ListView {
        let mut list = ListView::new();
        self.apply(&mut list);
        list
    }

    /// Apply settings to an existing list and append the templates.
    ///
    /// Out-of-range template indices are kept; they only take effect once
    /// enough templates exist.
    pub fn apply(&self, list: &mut ListView) {
        list.set_separator_size(self.separator_size);
        list.set_multi_select(self.multi_select);
        list.set_touch_sensitivity(self.touch_sensitivity);
        list.set_back_color(self.back_color);
        list.set_template_index_default(self.template_default);
        list.set_template_index_selected(self.template_selected);
        for template in &self.templates {
            list.push_template(template.to_template());
        }
        tracing::debug!(templates = self.templates.len(), "applied list config");
    }
}

/// Gradient colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradientConfig {
    /// Top color
    pub start: Color,
    /// Bottom color
    pub end: Color,
}

impl Default for GradientConfig {
    fn default() -> Self {
        Self {
            start: Color::LIGHT_BLUE,
            end: Color::TEAL,
        }
    }
}

/// One row template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Row height
    pub height: i32,
    /// Background gradient
    pub gradient: GradientConfig,
    /// Border color
    pub border_color: Color,
    /// Border width
    pub border_size: i32,
    /// Cells, in order
    pub cells: Vec<CellConfig>,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            height: 40,
            gradient: GradientConfig::default(),
            border_color: Color::BLACK,
            border_size: 0,
            cells: Vec::new(),
        }
    }
}

impl TemplateConfig {
    /// Build the template.
    #[must_use]
    pub fn to_template(&self) -> RowTemplate {
        self.cells.iter().fold(
            RowTemplate::new()
                .height(self.height)
                .gradient(self.gradient.start, self.gradient.end)
                .border(self.border_color, self.border_size),
            |template, cell| template.cell(cell.to_cell()),
        )
    }
}

/// Cell variant selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellKindConfig {
    /// Background and border only
    Base,
    /// Text cell
    #[default]
    Text,
    /// Image and text cell
    ImageText,
}

/// Font settings for text cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// Family name
    pub family: String,
    /// Size in points
    pub size: f32,
    /// Weight
    pub weight: FontWeight,
    /// Style
    pub style: FontStyle,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            family: "Tahoma".to_string(),
            size: 10.0,
            weight: FontWeight::Normal,
            style: FontStyle::Normal,
        }
    }
}

/// One cell definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CellConfig {
    /// Variant
    pub kind: CellKindConfig,
    /// Display name
    pub name: String,
    /// `[x, y, width, height]` relative to the row
    pub bounds: [i32; 4],
    /// `-1` positional, `-2` constant, `n >= 0` slot
    pub data_index: DataBinding,
    /// Background color
    pub back_color: Color,
    /// Border color
    pub border_color: Color,
    /// Border width
    pub border_size: i32,
    /// Constant text
    pub text: String,
    /// Font
    pub font: FontConfig,
    /// Text color
    pub fore_color: Color,
    /// Horizontal text placement
    pub align_horizontal: HorAlign,
    /// Vertical text placement
    pub align_vertical: VerAlign,
    /// `[x, y, width, height]` of the picture, image+text cells only
    pub image_bounds: [i32; 4],
}

impl Default for CellConfig {
    fn default() -> Self {
        let text = TextCell::default();
        Self {
            kind: CellKindConfig::default(),
            name: "rowCell".to_string(),
            bounds: [0, 0, 100, 20],
            data_index: DataBinding::Positional,
            back_color: Color::TRANSPARENT,
            border_color: Color::TEAL,
            border_size: 0,
            text: text.text,
            font: FontConfig::default(),
            fore_color: text.style.color,
            align_horizontal: text.align_horizontal,
            align_vertical: text.align_vertical,
            image_bounds: [0, 0, 0, 0],
        }
    }
}

impl CellConfig {
    fn text_cell(&self) -> TextCell {
        TextCell {
            style: TextStyle {
                family: self.font.family.clone(),
                size: self.font.size,
                color: self.fore_color,
                weight: self.font.weight,
                style: self.font.style,
            },
            text: self.text.clone(),
            align_horizontal: self.align_horizontal,
            align_vertical: self.align_vertical,
        }
    }

    /// Build the cell.
    #[must_use]
    pub fn to_cell(&self) -> CellSpec {
        let kind = match self.kind {
            CellKindConfig::Base => CellKind::Base,
            CellKindConfig::Text => CellKind::Text(self.text_cell()),
            CellKindConfig::ImageText => {
                let mut cell = ImageTextCell::with_text(self.text_cell());
                cell.set_image_bounds(Rect::from(self.image_bounds));
                CellKind::ImageText(cell)
            }
        };
        CellSpec {
            name: self.name.clone(),
            bounds: Rect::from(self.bounds),
            data_index: self.data_index,
            back_color: self.back_color,
            border_color: self.border_color,
            border_size: self.border_size,
            kind,
        }
    }
}
