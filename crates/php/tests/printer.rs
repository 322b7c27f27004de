use proptest::prelude::*;
use rgen_php::{
    ArrayItem, ClassConst, ClassMember, ClassMethod, DocComment, Expr, Literal, Name, Param,
    Printer, Property, Stmt, TypeHint,
};

#[test]
fn node_type_references_print_as_class_constants() {
    let array = Expr::Array(vec![
        ArrayItem::new(Expr::class_reference("PhpParser\\Node\\Expr\\FuncCall")),
        ArrayItem::new(Expr::class_reference("\\PhpParser\\Node\\Stmt\\Class_")),
    ]);

    assert_eq!(
        Printer::default().print_expr(&array),
        "[\\PhpParser\\Node\\Expr\\FuncCall::class, \\PhpParser\\Node\\Stmt\\Class_::class]"
    );
}

#[test]
fn nested_arrays_print_on_one_line() {
    let array = Expr::Array(vec![ArrayItem::keyed(
        Expr::class_const(Name::fully_qualified("Rector\\Php80\\Rector\\Enum\\SomeRector"), "MAP"),
        Expr::Array(vec![
            ArrayItem::keyed(Expr::string("old"), Expr::string("new")),
            ArrayItem::keyed(Expr::string("flags"), Expr::Array(vec![
                ArrayItem::new(Expr::Literal(Literal::Bool(true))),
                ArrayItem::new(Expr::null()),
                ArrayItem::new(Expr::Literal(Literal::Float(1.5))),
                ArrayItem::new(Expr::int(-2)),
            ])),
        ]),
    )]);

    assert_eq!(
        Printer::default().print_expr(&array),
        "[\\Rector\\Php80\\Rector\\Enum\\SomeRector::MAP => ['old' => 'new', 'flags' => [true, null, 1.5, -2]]]"
    );
}

#[test]
fn empty_array_prints_brackets() {
    assert_eq!(Printer::default().print_expr(&Expr::Array(Vec::new())), "[]");
}

#[test]
fn members_are_separated_by_single_newline() {
    let members: Vec<ClassMember> = vec![
        ClassConst::public("TYPES", Expr::string("TYPES"))
            .with_doc(DocComment::line("@var string"))
            .into(),
        Property::private("types")
            .typed(TypeHint::Array)
            .with_default(Expr::Array(Vec::new()))
            .into(),
    ];

    let expected = "/**\n * @var string\n */\npublic const TYPES = 'TYPES';\nprivate array $types = [];";
    assert_eq!(Printer::default().print_members(&members), expected);
}

#[test]
fn configure_method_prints_doc_signature_and_body() {
    let assign = Expr::assign(
        Expr::this_property("types"),
        Expr::coalesce(
            Expr::dim_fetch(Expr::variable("configuration"), Expr::class_const(Name::self_ref(), "TYPES")),
            Expr::this_property("types"),
        ),
    );
    let method = ClassMethod::public("configure")
        .with_param(Param::typed(TypeHint::Array, "configuration"))
        .returns(TypeHint::Void)
        .with_body(vec![Stmt::Expression(assign)])
        .with_doc(DocComment::line("@param array<string, mixed> $configuration"));

    let expected = "\
/**
 * @param array<string, mixed> $configuration
 */
public function configure(array $configuration): void
{
    $this->types = $configuration[self::TYPES] ?? $this->types;
}";
    assert_eq!(Printer::default().print_method(&method), expected);
}

fn unescape_single_quoted(printed: &str) -> String {
    let inner = &printed[1..printed.len() - 1];
    let mut out = String::new();
    let mut chars = inner.chars();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            if let Some(next) = chars.next() {
                out.push(next);
            }
        } else {
            out.push(ch);
        }
    }
    out
}

proptest! {
    #[test]
    fn string_literals_read_back_as_original(value in "\\PC*") {
        let printed = Printer::default().print_expr(&Expr::string(value.clone()));
        prop_assert!(printed.starts_with('\'') && printed.ends_with('\''));
        prop_assert_eq!(unescape_single_quoted(&printed), value);
    }

    #[test]
    fn printing_is_deterministic(keys in proptest::collection::vec("[a-z]{1,8}", 0..6)) {
        let array = Expr::Array(
            keys.iter().map(|k| ArrayItem::keyed(Expr::string(k.clone()), Expr::int(1))).collect(),
        );
        let printer = Printer::default();
        prop_assert_eq!(printer.print_expr(&array), printer.print_expr(&array.clone()));
    }
}
