use std::fmt::Display;

/// Kind tag carried by every intrinsic type.
///
/// The tag always agrees with the `Type` variant that holds it, but it is
/// stored and compared on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntrinsicKind {
    Integer,
    Real,
    Complex,
    Character,
    Logical,
}

impl IntrinsicKind {
    pub fn name(&self) -> &'static str {
        match self {
            IntrinsicKind::Integer => "integer",
            IntrinsicKind::Real => "real",
            IntrinsicKind::Complex => "complex",
            IntrinsicKind::Character => "character",
            IntrinsicKind::Logical => "logical",
        }
    }
}

impl Display for IntrinsicKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Payload of the intrinsic `Type` variants.
///
/// Only the `Type` constructors build one, so the kind never disagrees
/// with the variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Intrinsic {
    kind: IntrinsicKind,
}

impl Intrinsic {
    pub fn kind(&self) -> IntrinsicKind {
        self.kind
    }
}

/// A user defined, non-intrinsic type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DerivedType {
    name: String,
}

impl DerivedType {
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// An array of `element` with the given rank and per-dimension extents.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArrayType {
    element: Box<Type>,
    rank: usize,
    shape: Vec<usize>,
}

impl ArrayType {
    pub fn element(&self) -> &Type {
        &self.element
    }

    pub fn rank(&self) -> usize {
        self.rank
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }
}

/// A resolved type.
///
/// Equality and hashing are structural: the variant must match first, then
/// every field is compared recursively. Two separately built values of the
/// same shape are interchangeable, including as map keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    Integer(Intrinsic),
    Real(Intrinsic),
    Complex(Intrinsic),
    Character(Intrinsic),
    Logical(Intrinsic),
    Derived(DerivedType),
    Array(ArrayType),
}

impl Type {
    pub fn integer() -> Self {
        Type::Integer(Intrinsic { kind: IntrinsicKind::Integer })
    }

    pub fn real() -> Self {
        Type::Real(Intrinsic { kind: IntrinsicKind::Real })
    }

    pub fn complex() -> Self {
        Type::Complex(Intrinsic { kind: IntrinsicKind::Complex })
    }

    pub fn character() -> Self {
        Type::Character(Intrinsic { kind: IntrinsicKind::Character })
    }

    pub fn logical() -> Self {
        Type::Logical(Intrinsic { kind: IntrinsicKind::Logical })
    }

    pub fn derived(name: impl Into<String>) -> Self {
        Type::Derived(DerivedType { name: name.into() })
    }

    pub fn array(element: Type, rank: usize, shape: Vec<usize>) -> Self {
        Type::Array(ArrayType {
            element: Box::new(element),
            rank,
            shape,
        })
    }

    /// Returns the kind tag for intrinsic types, `None` otherwise.
    pub fn intrinsic_kind(&self) -> Option<IntrinsicKind> {
        match self {
            Type::Integer(intrinsic)
            | Type::Real(intrinsic)
            | Type::Complex(intrinsic)
            | Type::Character(intrinsic)
            | Type::Logical(intrinsic) => Some(intrinsic.kind()),
            Type::Derived(_) | Type::Array(_) => None,
        }
    }

    pub fn is_intrinsic(&self) -> bool {
        self.intrinsic_kind().is_some()
    }

    pub fn is_logical(&self) -> bool {
        matches!(self, Type::Logical(_))
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Type::Integer(intrinsic)
            | Type::Real(intrinsic)
            | Type::Complex(intrinsic)
            | Type::Character(intrinsic)
            | Type::Logical(intrinsic) => write!(f, "{}", intrinsic.kind()),
            Type::Derived(derived) => write!(f, "type({})", derived.name()),
            Type::Array(array) => {
                let extents = array
                    .shape()
                    .iter()
                    .map(|extent| extent.to_string())
                    .collect::<Vec<String>>()
                    .join(", ");
                write!(f, "{}({})", array.element(), extents)
            }
        }
    }
}
