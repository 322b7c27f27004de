//! # Rule Generator
//!
//! Scaffolding support for new code-transformation rules. A [`Recipe`] describes the rule
//! (identity, samples, node types, configuration), a [`PlaceholderDeriver`] turns it into a
//! [`PlaceholderMap`], [`template::render`] fills rule templates from the map, and
//! [`append_rule_registration`] adds the rule to a shared set file exactly once.
//!
//! ## Example
//!
//! ```rust
//! use rgen_generator::{Placeholder, PlaceholderDeriver, Recipe, template};
//!
//! let recipe = Recipe::builder()
//!     .package("Php80")
//!     .category("Enum")
//!     .name("ClassConstantToEnumRector")
//!     .node_type(r"PhpParser\Node\Stmt\Class_")
//!     .build()?;
//!
//! let placeholders = PlaceholderDeriver::default().derive(&recipe);
//! assert_eq!(placeholders.get(Placeholder::NodeTypesPhp), Some(r"[\PhpParser\Node\Stmt\Class_::class]"));
//!
//! let rendered = template::render("final class __Name__ extends AbstractRector", &placeholders);
//! assert_eq!(rendered, "final class ClassConstantToEnumRector extends AbstractRector");
//! # Ok::<(), rgen_generator::GeneratorError>(())
//! ```

pub mod configuration;
mod error;
mod fs;
mod placeholder;
mod recipe;
mod registration;
pub mod sample;
mod settings;
pub mod template;
mod value;
mod variables;

pub use crate::configuration::ClassRef;
pub use crate::error::{GeneratorError, GeneratorErrorExt, Result};
pub use crate::placeholder::{Placeholder, PlaceholderMap};
pub use crate::recipe::{ExtraFile, ExtraFileDefinition, Recipe, RecipeBuilder, RecipeDefinition};
pub use crate::registration::{
    Patched, Registration, append_rule_registration, ensure_required_keys, patch_registration_text,
    registration_statement,
};
pub use crate::settings::{
    DEFAULT_SETTINGS_FILE, ENV_PREFIX, LoggingSettings, RegistrationSettings, Settings, load_settings,
};
pub use crate::value::{ConfigValue, Configuration, Scalar};
pub use crate::variables::{DEFAULT_RULE_FQN_PATTERN, PlaceholderDeriver};
