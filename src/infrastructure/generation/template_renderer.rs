//! Tera-based template engine with the helpers bound

use std::path::Path;
use std::sync::{Arc, Weak};

use once_cell::sync::OnceCell;
use serde_json::Value as JsonValue;
use tera::{Context, Tera};

use crate::core::{Error, HelperConfig, Result};
use crate::generation::{GenerationError, TypeRenderer};
use crate::infrastructure::generation::HelperRegistry;

/// Template the composite helpers render each member with
pub const DEFAULT_TYPE_TEMPLATE: &str = "type";

/// Renders composite members through the engine's own `type` template.
///
/// Holds a weak handle to the engine it is registered in, which is filled in
/// once the engine is built; the engine owns the only strong handle.
pub struct TeraTypeRenderer {
    engine: Weak<OnceCell<Tera>>,
    template: String,
}

impl TeraTypeRenderer {
    fn new(engine: Weak<OnceCell<Tera>>, template: impl Into<String>) -> Self {
        Self {
            engine,
            template: template.into(),
        }
    }
}

impl TypeRenderer for TeraTypeRenderer {
    fn render_type(&self, context: &JsonValue) -> std::result::Result<String, GenerationError> {
        let engine = self
            .engine
            .upgrade()
            .ok_or_else(|| GenerationError::TypeRender("template engine was dropped".to_string()))?;
        let tera = engine
            .get()
            .ok_or_else(|| GenerationError::TypeRender("template engine is not built".to_string()))?;

        if !tera.get_template_names().any(|name| name == self.template) {
            return Err(GenerationError::MissingTemplate(self.template.clone()));
        }

        let context = Context::from_serialize(context)
            .map_err(|e| GenerationError::TypeRender(describe(&e)))?;
        tera.render(&self.template, &context)
            .map_err(|e| GenerationError::TypeRender(describe(&e)))
    }
}

/// Flattens a tera error and its causes into one line
fn describe(err: &tera::Error) -> String {
    let mut message = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = std::error::Error::source(cause);
    }
    message
}

/// Collects templates before the helpers are bound
pub struct TemplateEngineBuilder {
    tera: Tera,
    config: HelperConfig,
    type_template: String,
}

impl TemplateEngineBuilder {
    fn new(config: HelperConfig) -> Self {
        let mut tera = Tera::default();
        // generated TypeScript must never be HTML-escaped
        tera.autoescape_on(vec![]);
        Self {
            tera,
            config,
            type_template: DEFAULT_TYPE_TEMPLATE.to_string(),
        }
    }

    pub fn add_raw_template(mut self, name: &str, content: &str) -> Result<Self> {
        self.tera.add_raw_template(name, content)?;
        Ok(self)
    }

    pub fn add_template_file(
        mut self,
        path: impl AsRef<Path>,
        name: Option<&str>,
    ) -> Result<Self> {
        self.tera.add_template_file(path, name)?;
        Ok(self)
    }

    /// Adds every file directly inside `dir`, named by its file stem, so
    /// `partials/type.tera` becomes the template `type`.
    pub fn add_partials_dir(mut self, dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let mut files = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_file() {
                files.push(path);
            }
        }
        files.sort();

        for path in files {
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                tracing::warn!(path = %path.display(), "skipping partial with non UTF-8 name");
                continue;
            };
            let stem = stem.to_string();
            tracing::debug!(name = %stem, path = %path.display(), "adding partial");
            self.tera.add_template_file(&path, Some(&stem))?;
        }
        Ok(self)
    }

    /// Name of the template the composite helpers render members with
    pub fn type_template(mut self, name: impl Into<String>) -> Self {
        self.type_template = name.into();
        self
    }

    /// Bind the helpers and freeze the engine
    pub fn build(self) -> Result<TemplateEngine> {
        let TemplateEngineBuilder {
            mut tera,
            config,
            type_template,
        } = self;

        let slot = Arc::new(OnceCell::new());
        let renderer = TeraTypeRenderer::new(Arc::downgrade(&slot), type_template.as_str());
        let registry = HelperRegistry::new(config, Arc::new(renderer));
        registry.register(&mut tera);

        if !tera.get_template_names().any(|name| name == type_template) {
            tracing::warn!(
                template = %type_template,
                "type template is not registered; union and intersection will fail"
            );
        }
        tracing::debug!(
            templates = tera.get_template_names().count(),
            "template engine built"
        );

        slot.set(tera)
            .map_err(|_| Error::config("template engine was already built"))?;

        Ok(TemplateEngine {
            tera: slot,
            registry,
        })
    }
}

/// A tera instance with every helper bound, ready to render
pub struct TemplateEngine {
    tera: Arc<OnceCell<Tera>>,
    registry: HelperRegistry,
}

impl TemplateEngine {
    pub fn builder(config: HelperConfig) -> TemplateEngineBuilder {
        TemplateEngineBuilder::new(config)
    }

    pub fn config(&self) -> &HelperConfig {
        self.registry.config()
    }

    pub fn registry(&self) -> &HelperRegistry {
        &self.registry
    }

    fn tera(&self) -> Result<&Tera> {
        self.tera
            .get()
            .ok_or_else(|| Error::config("template engine is not built"))
    }

    pub fn template_names(&self) -> Result<Vec<String>> {
        let mut names: Vec<String> = self
            .tera()?
            .get_template_names()
            .map(str::to_string)
            .collect();
        names.sort();
        Ok(names)
    }

    pub fn render(&self, name: &str, context: &Context) -> Result<String> {
        Ok(self.tera()?.render(name, context)?)
    }

    /// Render with a JSON object as the context
    pub fn render_value(&self, name: &str, context: &JsonValue) -> Result<String> {
        let context = Context::from_serialize(context)?;
        self.render(name, &context)
    }
}
