//! Template bundles: read-only sources of raw template bodies.
//!
//! The engine never reads templates from the invoking user's filesystem.
//! Production builds use [`EmbeddedTemplates`], compiled into the binary;
//! tests can swap in [`MemoryTemplates`].

use std::borrow::Cow;
use std::collections::BTreeMap;

use rust_embed::RustEmbed;

use crate::error::ScaffoldError;

/// A read-only source of template bodies keyed by identifier.
pub trait TemplateBundle: Send + Sync {
    /// Raw body of the template `id`, or `None` if the bundle lacks it.
    fn template(&self, id: &str) -> Option<Cow<'static, str>>;

    /// Every identifier the bundle carries, sorted.
    fn identifiers(&self) -> Vec<String>;
}

#[derive(RustEmbed)]
#[folder = "templates/"]
struct Assets;

/// Templates embedded into the binary at build time.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTemplates;

impl TemplateBundle for EmbeddedTemplates {
    fn template(&self, id: &str) -> Option<Cow<'static, str>> {
        let file = Assets::get(id)?;
        let body = match file.data {
            Cow::Borrowed(bytes) => std::str::from_utf8(bytes).ok().map(Cow::Borrowed),
            Cow::Owned(bytes) => String::from_utf8(bytes).ok().map(Cow::Owned),
        };
        if body.is_none() {
            tracing::warn!(template = id, "embedded template is not valid UTF-8");
        }
        body
    }

    fn identifiers(&self) -> Vec<String> {
        let mut ids: Vec<String> = Assets::iter().map(|p| p.into_owned()).collect();
        ids.sort();
        ids
    }
}

/// In-memory bundle, mainly for fixtures.
#[derive(Debug, Clone, Default)]
pub struct MemoryTemplates {
    templates: BTreeMap<String, String>,
}

impl MemoryTemplates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, id: impl Into<String>, body: impl Into<String>) -> Self {
        self.templates.insert(id.into(), body.into());
        self
    }
}

impl TemplateBundle for MemoryTemplates {
    fn template(&self, id: &str) -> Option<Cow<'static, str>> {
        self.templates.get(id).map(|b| Cow::Owned(b.clone()))
    }

    fn identifiers(&self) -> Vec<String> {
        self.templates.keys().cloned().collect()
    }
}

/// Lookup front-end over a bundle.
pub struct TemplateRegistry {
    bundle: Box<dyn TemplateBundle>,
}

impl TemplateRegistry {
    pub fn new(bundle: impl TemplateBundle + 'static) -> Self {
        Self {
            bundle: Box::new(bundle),
        }
    }

    /// Registry over the templates compiled into goforge.
    pub fn embedded() -> Self {
        Self::new(EmbeddedTemplates)
    }

    /// Raw body for `id`, or [`ScaffoldError::TemplateNotFound`].
    pub fn lookup(&self, id: &str) -> Result<Cow<'static, str>, ScaffoldError> {
        self.bundle
            .template(id)
            .ok_or_else(|| ScaffoldError::TemplateNotFound(id.to_string()))
    }

    pub fn identifiers(&self) -> Vec<String> {
        self.bundle.identifiers()
    }
}

impl std::fmt::Debug for TemplateRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateRegistry")
            .field("templates", &self.bundle.identifiers())
            .finish()
    }
}
