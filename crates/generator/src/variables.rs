//! Derivation of the complete placeholder map from a [`Recipe`].

use crate::configuration::{self, ClassRef};
use crate::placeholder::{Placeholder, PlaceholderMap};
use crate::recipe::Recipe;
use crate::sample;
use crate::template;
use rgen_php::{ArrayItem, Expr, Printer};
use tracing::debug;

/// Fully-qualified rule class name, expressed over identity placeholders.
pub const DEFAULT_RULE_FQN_PATTERN: &str = r"Rector\__Package__\Rector\__Category__\__Name__";

/// Turns recipes into placeholder maps.
///
/// Derivation is pure: the same recipe always yields the same map, and the printed PHP
/// fragments are byte-stable across runs.
#[derive(Debug, Clone)]
pub struct PlaceholderDeriver {
    fqn_pattern: String,
    printer: Printer,
}

impl Default for PlaceholderDeriver {
    fn default() -> Self {
        Self::new(DEFAULT_RULE_FQN_PATTERN)
    }
}

impl PlaceholderDeriver {
    #[must_use]
    pub fn new(fqn_pattern: impl Into<String>) -> Self {
        Self { fqn_pattern: fqn_pattern.into(), printer: Printer::default() }
    }

    #[must_use]
    pub fn fqn_pattern(&self) -> &str {
        &self.fqn_pattern
    }

    /// The rule's fully-qualified class name rendered against `placeholders`.
    #[must_use]
    pub fn rule_fqn(&self, placeholders: &PlaceholderMap) -> String {
        template::render(&self.fqn_pattern, placeholders)
    }

    /// Builds every placeholder the recipe supports.
    ///
    /// The base tokens are always present, configuration tokens only for a non-empty
    /// configuration, and extra-file tokens only when the recipe carries an extra file.
    #[must_use]
    pub fn derive(&self, recipe: &Recipe) -> PlaceholderMap {
        let mut placeholders = PlaceholderMap::new();

        placeholders.insert(Placeholder::Package, recipe.package());
        placeholders.insert(Placeholder::PackageDirectory, recipe.package_directory());
        placeholders.insert(Placeholder::Category, recipe.category());
        placeholders.insert(Placeholder::Description, recipe.description());
        placeholders.insert(Placeholder::Name, recipe.name());

        placeholders.insert(Placeholder::CodeBefore, sample::canonical(recipe.code_before()));
        placeholders.insert(Placeholder::CodeBeforeExample, sample::example(recipe.code_before()));
        placeholders.insert(Placeholder::CodeAfter, sample::canonical(recipe.code_after()));
        placeholders.insert(Placeholder::CodeAfterExample, sample::example(recipe.code_after()));

        placeholders.insert(Placeholder::Resources, resources_block(recipe.resources()));

        let configuration = recipe.configuration();
        if !configuration.is_empty() {
            let owner = ClassRef::FullyQualified(self.rule_fqn(&placeholders));
            debug!(options = configuration.len(), rule = ?owner, "Deriving configuration placeholders");

            placeholders.insert(
                Placeholder::TestRuleConfiguration,
                self.printer.print_expr(&configuration::rule_configuration(&owner, configuration)),
            );
            placeholders.insert(
                Placeholder::RuleConfiguration,
                self.printer
                    .print_expr(&configuration::rule_configuration(&ClassRef::SelfRef, configuration)),
            );
            placeholders.insert(
                Placeholder::ConfigurationProperties,
                self.printer.print_members(&configuration::properties(configuration)),
            );
            placeholders.insert(
                Placeholder::ConfigurationConstants,
                self.printer.print_members(&configuration::constants(configuration)),
            );
            placeholders.insert(
                Placeholder::ConfigureClassMethod,
                self.printer.print_method(&configuration::configure_method(configuration)),
            );
        }

        if let Some(extra_file) = recipe.extra_file() {
            placeholders.insert(Placeholder::ExtraFileName, extra_file.name());
            placeholders.insert(Placeholder::ExtraFileContent, sample::canonical(extra_file.content()));
            placeholders
                .insert(Placeholder::ExtraFileContentExample, sample::example(extra_file.content()));
        }

        let node_types = recipe.node_types();
        let references =
            node_types.iter().map(|node_type| ArrayItem::new(Expr::class_reference(node_type))).collect();
        placeholders.insert(Placeholder::NodeTypesPhp, self.printer.print_expr(&Expr::Array(references)));
        placeholders.insert(Placeholder::NodeTypesDoc, node_types_doc(node_types));

        debug!(rule = recipe.name(), placeholders = placeholders.len(), "Placeholders derived");
        placeholders
    }
}

fn resources_block(resources: &[String]) -> String {
    if resources.is_empty() {
        return String::new();
    }

    let mut block: String = resources.iter().map(|resource| format!(" * @see {resource}\n")).collect();
    block.push_str(" *");
    block
}

fn node_types_doc(node_types: &[String]) -> String {
    node_types.iter().map(|node_type| format!("\\{node_type}")).collect::<Vec<_>>().join("|")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resources_block() {
        assert_eq!(resources_block(&[]), "");
        assert_eq!(
            resources_block(&["https://wiki.php.net/rfc/enumerations".to_owned(), "https://3v4l.org".to_owned()]),
            " * @see https://wiki.php.net/rfc/enumerations\n * @see https://3v4l.org\n *"
        );
    }

    #[test]
    fn test_node_types_doc() {
        let node_types = ["PhpParser\\Node\\Stmt\\Class_".to_owned(), "PhpParser\\Node\\Expr".to_owned()];
        assert_eq!(node_types_doc(&node_types), "\\PhpParser\\Node\\Stmt\\Class_|\\PhpParser\\Node\\Expr");
    }

    #[test]
    fn test_rule_fqn_uses_pattern() {
        let placeholders: PlaceholderMap = [
            (Placeholder::Package, "Php80"),
            (Placeholder::Category, "Enum"),
            (Placeholder::Name, "SomeRector"),
        ]
        .into_iter()
        .collect();

        assert_eq!(PlaceholderDeriver::default().rule_fqn(&placeholders), "Rector\\Php80\\Rector\\Enum\\SomeRector");
        assert_eq!(
            PlaceholderDeriver::new(r"Acme\__Name__").rule_fqn(&placeholders),
            "Acme\\SomeRector"
        );
    }
}
