/// The class part of a `Class::CONSTANT` fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Name {
    /// Printed verbatim, e.g. `self` or `static`.
    Relative(String),
    /// Printed with a leading backslash.
    FullyQualified(String),
}

impl Name {
    /// The `self` keyword.
    #[must_use]
    pub fn self_ref() -> Self {
        Self::Relative("self".to_owned())
    }

    /// A fully-qualified class name; a leading backslash in `name` is ignored.
    #[must_use]
    pub fn fully_qualified(name: impl AsRef<str>) -> Self {
        Self::FullyQualified(name.as_ref().trim_start_matches('\\').to_owned())
    }
}

/// Scalar literal values.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

/// One `key => value` (or bare `value`) entry of an array literal.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayItem {
    pub key: Option<Expr>,
    pub value: Expr,
}

impl ArrayItem {
    #[must_use]
    pub const fn new(value: Expr) -> Self {
        Self { key: None, value }
    }

    #[must_use]
    pub const fn keyed(key: Expr, value: Expr) -> Self {
        Self { key: Some(key), value }
    }
}

/// PHP expressions.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(Literal),
    /// Short-syntax array literal: `[...]`.
    Array(Vec<ArrayItem>),
    /// `Class::CONSTANT`, including the `Class::class` form.
    ClassConstFetch { class: Name, constant: String },
    /// `$name`
    Variable(String),
    /// `$object->property`
    PropertyFetch { object: Box<Self>, property: String },
    /// `$array[dim]`
    ArrayDimFetch { array: Box<Self>, dim: Box<Self> },
    /// `left ?? right`
    Coalesce { left: Box<Self>, right: Box<Self> },
    /// `target = value`
    Assign { target: Box<Self>, value: Box<Self> },
}

impl Expr {
    #[must_use]
    pub fn string(value: impl Into<String>) -> Self {
        Self::Literal(Literal::String(value.into()))
    }

    #[must_use]
    pub const fn int(value: i64) -> Self {
        Self::Literal(Literal::Int(value))
    }

    #[must_use]
    pub const fn null() -> Self {
        Self::Literal(Literal::Null)
    }

    #[must_use]
    pub fn class_const(class: Name, constant: impl Into<String>) -> Self {
        Self::ClassConstFetch { class, constant: constant.into() }
    }

    /// `\Fully\Qualified::class`
    #[must_use]
    pub fn class_reference(class_name: impl AsRef<str>) -> Self {
        Self::class_const(Name::fully_qualified(class_name), "class")
    }

    #[must_use]
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    /// `$this->property`
    #[must_use]
    pub fn this_property(property: impl Into<String>) -> Self {
        Self::PropertyFetch { object: Box::new(Self::variable("this")), property: property.into() }
    }

    #[must_use]
    pub fn dim_fetch(array: Self, dim: Self) -> Self {
        Self::ArrayDimFetch { array: Box::new(array), dim: Box::new(dim) }
    }

    #[must_use]
    pub fn coalesce(left: Self, right: Self) -> Self {
        Self::Coalesce { left: Box::new(left), right: Box::new(right) }
    }

    #[must_use]
    pub fn assign(target: Self, value: Self) -> Self {
        Self::Assign { target: Box::new(target), value: Box::new(value) }
    }
}

/// Statements allowed inside a generated method body.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Expression(Expr),
}

/// Declared types for properties, parameters and return values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeHint {
    Array,
    String,
    Int,
    Float,
    Bool,
    Mixed,
    Void,
}

impl TypeHint {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Array => "array",
            Self::String => "string",
            Self::Int => "int",
            Self::Float => "float",
            Self::Bool => "bool",
            Self::Mixed => "mixed",
            Self::Void => "void",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
}

impl Visibility {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Private => "private",
        }
    }
}

/// A `/** ... */` block; each entry is one line without the leading ` * `.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DocComment(pub Vec<String>);

impl DocComment {
    #[must_use]
    pub fn line(line: impl Into<String>) -> Self {
        Self(vec![line.into()])
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub visibility: Visibility,
    pub type_hint: Option<TypeHint>,
    pub name: String,
    pub default: Option<Expr>,
    pub doc: Option<DocComment>,
}

impl Property {
    #[must_use]
    pub fn private(name: impl Into<String>) -> Self {
        Self {
            visibility: Visibility::Private,
            type_hint: None,
            name: name.into(),
            default: None,
            doc: None,
        }
    }

    #[must_use]
    pub const fn typed(mut self, type_hint: TypeHint) -> Self {
        self.type_hint = Some(type_hint);
        self
    }

    #[must_use]
    pub fn with_default(mut self, default: Expr) -> Self {
        self.default = Some(default);
        self
    }

    #[must_use]
    pub fn with_doc(mut self, doc: DocComment) -> Self {
        self.doc = Some(doc);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassConst {
    pub visibility: Visibility,
    pub name: String,
    pub value: Expr,
    pub doc: Option<DocComment>,
}

impl ClassConst {
    #[must_use]
    pub fn public(name: impl Into<String>, value: Expr) -> Self {
        Self { visibility: Visibility::Public, name: name.into(), value, doc: None }
    }

    #[must_use]
    pub fn with_doc(mut self, doc: DocComment) -> Self {
        self.doc = Some(doc);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub type_hint: Option<TypeHint>,
    pub name: String,
}

impl Param {
    #[must_use]
    pub fn typed(type_hint: TypeHint, name: impl Into<String>) -> Self {
        Self { type_hint: Some(type_hint), name: name.into() }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassMethod {
    pub visibility: Visibility,
    pub name: String,
    pub params: Vec<Param>,
    pub return_type: Option<TypeHint>,
    pub body: Vec<Stmt>,
    pub doc: Option<DocComment>,
}

impl ClassMethod {
    #[must_use]
    pub fn public(name: impl Into<String>) -> Self {
        Self {
            visibility: Visibility::Public,
            name: name.into(),
            params: Vec::new(),
            return_type: None,
            body: Vec::new(),
            doc: None,
        }
    }

    #[must_use]
    pub fn with_param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    #[must_use]
    pub const fn returns(mut self, type_hint: TypeHint) -> Self {
        self.return_type = Some(type_hint);
        self
    }

    #[must_use]
    pub fn with_body(mut self, body: Vec<Stmt>) -> Self {
        self.body = body;
        self
    }

    #[must_use]
    pub fn with_doc(mut self, doc: DocComment) -> Self {
        self.doc = Some(doc);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ClassMember {
    Property(Property),
    Const(ClassConst),
    Method(ClassMethod),
}

impl From<Property> for ClassMember {
    fn from(property: Property) -> Self {
        Self::Property(property)
    }
}

impl From<ClassConst> for ClassMember {
    fn from(constant: ClassConst) -> Self {
        Self::Const(constant)
    }
}

impl From<ClassMethod> for ClassMember {
    fn from(method: ClassMethod) -> Self {
        Self::Method(method)
    }
}
