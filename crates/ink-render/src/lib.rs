pub mod paint;
pub mod primitives;
pub mod svg;

pub use primitives::{
    Primitive, RenderOptions, StrokeBatch, project_points, project_stroke, render,
};
