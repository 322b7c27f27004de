//! The validated description of one rule to scaffold.

use crate::error::{GeneratorError, Result};
use crate::value::Configuration;
use heck::{ToKebabCase, ToLowerCamelCase};
use serde::Deserialize;
use std::borrow::Cow;
use std::collections::HashSet;

/// A companion file shipped next to the rule's test fixtures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtraFile {
    name: String,
    content: String,
}

impl ExtraFile {
    #[must_use]
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self { name: name.into(), content: content.into() }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// An immutable, validated rule recipe. Construct it with [`Recipe::builder`].
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    package: String,
    category: String,
    name: String,
    description: String,
    code_before: String,
    code_after: String,
    node_types: Vec<String>,
    resources: Vec<String>,
    configuration: Configuration,
    extra_file: Option<ExtraFile>,
}

impl Recipe {
    #[must_use]
    pub fn builder() -> RecipeBuilder {
        RecipeBuilder::default()
    }

    #[must_use]
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Kebab-case form of the package, used as a directory segment.
    #[must_use]
    pub fn package_directory(&self) -> String {
        self.package.to_kebab_case()
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn code_before(&self) -> &str {
        &self.code_before
    }

    #[must_use]
    pub fn code_after(&self) -> &str {
        &self.code_after
    }

    /// Fully-qualified node class names, without a leading backslash.
    #[must_use]
    pub fn node_types(&self) -> &[String] {
        &self.node_types
    }

    #[must_use]
    pub fn resources(&self) -> &[String] {
        &self.resources
    }

    #[must_use]
    pub const fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    #[must_use]
    pub const fn extra_file(&self) -> Option<&ExtraFile> {
        self.extra_file.as_ref()
    }
}

/// Collects recipe fields and validates them on [`RecipeBuilder::build`].
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct RecipeBuilder {
    package: Option<String>,
    category: Option<String>,
    name: Option<String>,
    description: String,
    code_before: String,
    code_after: String,
    node_types: Vec<String>,
    resources: Vec<String>,
    configuration: Configuration,
    extra_file: Option<ExtraFile>,
}

impl RecipeBuilder {
    pub fn package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn code_before(mut self, code: impl Into<String>) -> Self {
        self.code_before = code.into();
        self
    }

    pub fn code_after(mut self, code: impl Into<String>) -> Self {
        self.code_after = code.into();
        self
    }

    pub fn node_type(mut self, node_type: impl Into<String>) -> Self {
        self.node_types.push(node_type.into());
        self
    }

    pub fn node_types<S: Into<String>>(mut self, node_types: impl IntoIterator<Item = S>) -> Self {
        self.node_types.extend(node_types.into_iter().map(Into::into));
        self
    }

    pub fn resource(mut self, resource: impl Into<String>) -> Self {
        self.resources.push(resource.into());
        self
    }

    pub fn resources<S: Into<String>>(mut self, resources: impl IntoIterator<Item = S>) -> Self {
        self.resources.extend(resources.into_iter().map(Into::into));
        self
    }

    pub fn configuration(mut self, configuration: Configuration) -> Self {
        self.configuration = configuration;
        self
    }

    pub fn extra_file(mut self, name: impl Into<String>, content: impl Into<String>) -> Self {
        self.extra_file = Some(ExtraFile::new(name, content));
        self
    }

    /// Validates the collected fields.
    ///
    /// # Errors
    /// - [`GeneratorError::MissingData`] naming every blank identity field.
    /// - [`GeneratorError::InvalidRecipe`] for malformed identifiers, node types,
    ///   configuration keys or extra file names.
    pub fn build(self) -> Result<Recipe> {
        let Self {
            package,
            category,
            name,
            description,
            code_before,
            code_after,
            node_types,
            resources,
            configuration,
            extra_file,
        } = self;

        let identity = [("package", package), ("category", category), ("name", name)];
        let missing: Vec<_> = identity
            .iter()
            .filter(|(_, value)| value.as_deref().is_none_or(|v| v.trim().is_empty()))
            .map(|(field, _)| format!("\"{field}\""))
            .collect();
        if !missing.is_empty() {
            return Err(GeneratorError::MissingData {
                message: format!("Recipe fields {} are missing", missing.join(", ")).into(),
                context: None,
            });
        }

        let [package, category, name] =
            identity.map(|(_, value)| value.unwrap_or_default().trim().to_owned());
        for (field, value) in [("package", &package), ("category", &category), ("name", &name)] {
            if !is_identifier(value) {
                return Err(invalid(format!("{field} \"{value}\" is not a valid PHP identifier")));
            }
        }

        let node_types = validate_node_types(node_types)?;
        validate_configuration_keys(&configuration)?;
        if let Some(extra_file) = &extra_file
            && extra_file.name.trim().is_empty()
        {
            return Err(invalid("extra file name is blank"));
        }

        Ok(Recipe {
            package,
            category,
            name,
            description,
            code_before,
            code_after,
            node_types,
            resources,
            configuration,
            extra_file,
        })
    }
}

fn invalid(message: impl Into<String>) -> GeneratorError {
    GeneratorError::InvalidRecipe { message: Cow::Owned(message.into()), context: None }
}

fn validate_node_types(node_types: Vec<String>) -> Result<Vec<String>> {
    if node_types.is_empty() {
        return Err(invalid("at least one node type is required"));
    }

    node_types
        .into_iter()
        .map(|node_type| {
            let class_name = node_type.trim().trim_start_matches('\\');
            if class_name.split('\\').all(is_identifier) {
                Ok(class_name.to_owned())
            } else {
                Err(invalid(format!("node type \"{node_type}\" is not a class name")))
            }
        })
        .collect()
}

fn validate_configuration_keys(configuration: &Configuration) -> Result<()> {
    let mut constants = HashSet::new();
    let mut properties = HashSet::new();

    for key in configuration.keys() {
        let constant = key.to_uppercase();
        if !is_identifier(&constant) {
            return Err(invalid(format!("configuration key \"{key}\" is not a valid constant name")));
        }
        if !constants.insert(constant) || !properties.insert(key.to_lower_camel_case()) {
            return Err(invalid(format!("configuration key \"{key}\" collides with another key")));
        }
    }

    Ok(())
}

/// PHP label: a letter, underscore or non-ASCII byte, then the same or digits.
fn is_identifier(value: &str) -> bool {
    let mut chars = value.chars();
    chars.next().is_some_and(|first| first == '_' || first.is_ascii_alphabetic() || !first.is_ascii())
        && chars.all(|c| c == '_' || c.is_ascii_alphanumeric() || !c.is_ascii())
}

/// On-disk form of a recipe.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecipeDefinition {
    pub package: Option<String>,
    pub category: Option<String>,
    pub name: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub code_before: String,
    #[serde(default)]
    pub code_after: String,
    #[serde(default)]
    pub node_types: Vec<String>,
    #[serde(default)]
    pub resources: Vec<String>,
    #[serde(default)]
    pub configuration: Configuration,
    #[serde(default)]
    pub extra_file: Option<ExtraFileDefinition>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExtraFileDefinition {
    pub name: String,
    #[serde(default)]
    pub content: String,
}

impl TryFrom<RecipeDefinition> for Recipe {
    type Error = GeneratorError;

    fn try_from(definition: RecipeDefinition) -> Result<Self> {
        let mut builder = Self::builder()
            .description(definition.description)
            .code_before(definition.code_before)
            .code_after(definition.code_after)
            .node_types(definition.node_types)
            .resources(definition.resources)
            .configuration(definition.configuration);

        if let Some(package) = definition.package {
            builder = builder.package(package);
        }
        if let Some(category) = definition.category {
            builder = builder.category(category);
        }
        if let Some(name) = definition.name {
            builder = builder.name(name);
        }
        if let Some(extra_file) = definition.extra_file {
            builder = builder.extra_file(extra_file.name, extra_file.content);
        }

        builder.build()
    }
}
