use crate::item::ModelRef;

pub const DEFAULT_MODEL_PATH_TEMPLATE: &str = "/models/{type}.glb";
const TYPE_PLACEHOLDER: &str = "{type}";

/// Maps a furniture type tag to whatever handle the external model loader expects.
///
/// Resolution never fails here; a missing model surfaces in the loader.
pub trait ModelResolver {
    fn resolve(&self, type_tag: &str) -> ModelRef;
}

impl<F> ModelResolver for F
where
    F: Fn(&str) -> ModelRef,
{
    fn resolve(&self, type_tag: &str) -> ModelRef {
        self(type_tag)
    }
}

/// Substitutes the type tag into a path template such as `/models/{type}.glb`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelPathTemplate {
    template: String,
}

impl ModelPathTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        let template = template.into();
        if !template.contains(TYPE_PLACEHOLDER) {
            tracing::warn!(
                target: "assets",
                "model path template '{template}' has no {TYPE_PLACEHOLDER} placeholder; every type resolves to the same model"
            );
        }
        Self { template }
    }

    pub fn template(&self) -> &str {
        &self.template
    }
}

impl Default for ModelPathTemplate {
    fn default() -> Self {
        Self { template: DEFAULT_MODEL_PATH_TEMPLATE.to_string() }
    }
}

impl ModelResolver for ModelPathTemplate {
    fn resolve(&self, type_tag: &str) -> ModelRef {
        ModelRef::new(self.template.replace(TYPE_PLACEHOLDER, type_tag))
    }
}
