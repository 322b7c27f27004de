//! Builds the PHP nodes behind the configuration placeholders.
//!
//! Every recipe option `key` maps to three names that must stay in lockstep:
//!
//! | Role     | Derivation                  | `old_to_new` example |
//! |----------|-----------------------------|----------------------|
//! | constant | upper case                  | `OLD_TO_NEW`         |
//! | property | lower camel case            | `oldToNew`           |
//! | value    | example value as PHP literal| `['a' => 'b']`       |

use crate::value::{ConfigValue, Configuration, Scalar};
use heck::ToLowerCamelCase;
use rgen_php::{
    ArrayItem, ClassConst, ClassMember, ClassMethod, DocComment, Expr, Literal, Name, Param,
    Property, Stmt, TypeHint,
};

const CONFIGURATION_PARAM: &str = "configuration";

/// Owner of the option constants in a rule-configuration array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassRef {
    /// `self::KEY`, used inside the rule class.
    SelfRef,
    /// `\Fully\Qualified\Rule::KEY`, used from test configuration.
    FullyQualified(String),
}

impl ClassRef {
    fn name(&self) -> Name {
        match self {
            Self::SelfRef => Name::self_ref(),
            Self::FullyQualified(fqn) => Name::fully_qualified(fqn),
        }
    }
}

#[must_use]
pub fn const_name(key: &str) -> String {
    key.to_uppercase()
}

#[must_use]
pub fn property_name(key: &str) -> String {
    key.to_lower_camel_case()
}

/// Converts an example value into a PHP literal expression, recursing into arrays.
#[must_use]
pub fn value_expr(value: &ConfigValue) -> Expr {
    match value {
        ConfigValue::Scalar(scalar) => Expr::Literal(scalar_literal(scalar)),
        ConfigValue::List(items) => {
            Expr::Array(items.iter().map(|item| ArrayItem::new(value_expr(item))).collect())
        },
        ConfigValue::Map(entries) => Expr::Array(
            entries
                .iter()
                .map(|(key, item)| ArrayItem::keyed(Expr::string(key), value_expr(item)))
                .collect(),
        ),
    }
}

fn scalar_literal(scalar: &Scalar) -> Literal {
    match scalar {
        Scalar::Null => Literal::Null,
        Scalar::Bool(v) => Literal::Bool(*v),
        Scalar::Int(v) => Literal::Int(*v),
        Scalar::Float(v) => Literal::Float(*v),
        Scalar::String(v) => Literal::String(v.clone()),
    }
}

/// `[Owner::KEY => value, ...]` in option order.
#[must_use]
pub fn rule_configuration(owner: &ClassRef, configuration: &Configuration) -> Expr {
    let class = owner.name();
    Expr::Array(
        configuration
            .iter()
            .map(|(key, value)| {
                ArrayItem::keyed(Expr::class_const(class.clone(), const_name(key)), value_expr(value))
            })
            .collect(),
    )
}

/// One typed private property per option, defaulting to the zero value of its type.
#[must_use]
pub fn properties(configuration: &Configuration) -> Vec<ClassMember> {
    configuration
        .iter()
        .map(|(key, value)| {
            let (type_hint, default) = property_shape(value);
            let property =
                Property::private(property_name(key)).typed(type_hint).with_default(default);
            let property = if value.is_array() {
                property.with_doc(DocComment::line("@var mixed[]"))
            } else {
                property
            };
            property.into()
        })
        .collect()
}

fn property_shape(value: &ConfigValue) -> (TypeHint, Expr) {
    match value {
        ConfigValue::List(_) | ConfigValue::Map(_) => (TypeHint::Array, Expr::Array(Vec::new())),
        ConfigValue::Scalar(Scalar::String(_)) => (TypeHint::String, Expr::string("")),
        ConfigValue::Scalar(Scalar::Int(_)) => (TypeHint::Int, Expr::int(0)),
        ConfigValue::Scalar(Scalar::Float(_)) => {
            (TypeHint::Float, Expr::Literal(Literal::Float(0.0)))
        },
        ConfigValue::Scalar(Scalar::Bool(_)) => {
            (TypeHint::Bool, Expr::Literal(Literal::Bool(false)))
        },
        ConfigValue::Scalar(Scalar::Null) => (TypeHint::Mixed, Expr::null()),
    }
}

/// `public const KEY = 'KEY';` per option.
#[must_use]
pub fn constants(configuration: &Configuration) -> Vec<ClassMember> {
    configuration
        .keys()
        .map(|key| {
            let name = const_name(key);
            ClassConst::public(name.clone(), Expr::string(name))
                .with_doc(DocComment::line("@var string"))
                .into()
        })
        .collect()
}

/// `configure(array $configuration): void` assigning each option with a fallback to its
/// current value.
#[must_use]
pub fn configure_method(configuration: &Configuration) -> ClassMethod {
    let body = configuration
        .keys()
        .map(|key| {
            let property = Expr::this_property(property_name(key));
            let lookup = Expr::dim_fetch(
                Expr::variable(CONFIGURATION_PARAM),
                Expr::class_const(Name::self_ref(), const_name(key)),
            );
            Stmt::Expression(Expr::assign(property.clone(), Expr::coalesce(lookup, property)))
        })
        .collect();

    ClassMethod::public("configure")
        .with_param(Param::typed(TypeHint::Array, CONFIGURATION_PARAM))
        .returns(TypeHint::Void)
        .with_body(body)
        .with_doc(DocComment::line(format!("@param array<string, mixed> ${CONFIGURATION_PARAM}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rgen_php::Printer;

    fn configuration() -> Configuration {
        [
            ("old_to_new", ConfigValue::map([("Foo", ConfigValue::from("Bar"))])),
            ("limit", ConfigValue::from(3_i64)),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_names() {
        assert_eq!(const_name("old_to_new"), "OLD_TO_NEW");
        assert_eq!(property_name("old_to_new"), "oldToNew");
        assert_eq!(property_name("limit"), "limit");
    }

    #[test]
    fn test_rule_configuration_for_both_owners() {
        let printer = Printer::default();
        assert_eq!(
            printer.print_expr(&rule_configuration(&ClassRef::SelfRef, &configuration())),
            "[self::OLD_TO_NEW => ['Foo' => 'Bar'], self::LIMIT => 3]"
        );
        assert_eq!(
            printer.print_expr(&rule_configuration(
                &ClassRef::FullyQualified("Rector\\Php80\\Rector\\Enum\\SomeRector".into()),
                &configuration()
            )),
            "[\\Rector\\Php80\\Rector\\Enum\\SomeRector::OLD_TO_NEW => ['Foo' => 'Bar'], \
             \\Rector\\Php80\\Rector\\Enum\\SomeRector::LIMIT => 3]"
        );
    }

    #[test]
    fn test_list_values_have_no_keys() {
        let value = ConfigValue::list([ConfigValue::from("a"), ConfigValue::from(true)]);
        assert_eq!(Printer::default().print_expr(&value_expr(&value)), "['a', true]");
    }

    #[test]
    fn test_properties_follow_value_shape() {
        let configuration: Configuration = [
            ("map", ConfigValue::map([("k", ConfigValue::from(1_i64))])),
            ("text", ConfigValue::from("x")),
            ("ratio", ConfigValue::from(0.5_f64)),
            ("flag", ConfigValue::from(true)),
            ("anything", ConfigValue::Scalar(Scalar::Null)),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            Printer::default().print_members(&properties(&configuration)),
            "/**\n * @var mixed[]\n */\nprivate array $map = [];\n\
             private string $text = '';\n\
             private float $ratio = 0.0;\n\
             private bool $flag = false;\n\
             private mixed $anything = null;"
        );
    }

    #[test]
    fn test_constants_equal_their_names() {
        assert_eq!(
            Printer::default().print_members(&constants(&configuration())),
            "/**\n * @var string\n */\npublic const OLD_TO_NEW = 'OLD_TO_NEW';\n\
             /**\n * @var string\n */\npublic const LIMIT = 'LIMIT';"
        );
    }

    #[test]
    fn test_configure_method() {
        assert_eq!(
            Printer::default().print_method(&configure_method(&configuration())),
            "/**\n * @param array<string, mixed> $configuration\n */\n\
             public function configure(array $configuration): void\n{\n    \
             $this->oldToNew = $configuration[self::OLD_TO_NEW] ?? $this->oldToNew;\n    \
             $this->limit = $configuration[self::LIMIT] ?? $this->limit;\n}"
        );
    }
}
