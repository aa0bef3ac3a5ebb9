pub mod color;
pub mod config;
pub mod document;
pub mod error;
pub mod model;

pub use color::{Color, parse_color};
pub use config::AnnotatorConfig;
pub use document::AnnotationDocument;
pub use error::{InkError, Result};
pub use model::{MIN_STROKE_POINTS, Point, Stroke, ToolKind};
