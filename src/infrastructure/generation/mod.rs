//! Generation infrastructure implementations

pub mod helpers;
pub mod template_renderer;

pub use helpers::{FILTERS, HelperRegistry, TESTERS};
pub use template_renderer::{
    DEFAULT_TYPE_TEMPLATE, TemplateEngine, TemplateEngineBuilder, TeraTypeRenderer,
};
