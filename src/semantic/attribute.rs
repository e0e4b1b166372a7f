//! Resolved attribute instances as supplied by the semantic-analysis host.

use std::fmt;

use crate::semantic::symbol::ParameterInfo;

/// A compile-time constant supplied to an attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum ConstantValue {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Char(char),
    String(String),
    /// A type reference, as display text.
    Type(String),
    /// An enum constant, carried as its underlying value.
    Enum { type_name: String, value: i64 },
    Array(Vec<ConstantValue>),
}

impl ConstantValue {
    pub fn is_null(&self) -> bool {
        matches!(self, ConstantValue::Null)
    }
}

impl fmt::Display for ConstantValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstantValue::Null => f.write_str("null"),
            ConstantValue::Bool(value) => f.write_str(if *value { "True" } else { "False" }),
            ConstantValue::Int(value) => write!(f, "{value}"),
            ConstantValue::UInt(value) => write!(f, "{value}"),
            ConstantValue::Float(value) => write!(f, "{value}"),
            ConstantValue::Char(value) => write!(f, "{value}"),
            ConstantValue::String(value) => f.write_str(value),
            ConstantValue::Type(display) => f.write_str(display),
            ConstantValue::Enum { value, .. } => write!(f, "{value}"),
            ConstantValue::Array(items) => {
                f.write_str("{")?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("}")
            }
        }
    }
}

/// A constant together with the display text of its declared type.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedConstant {
    pub type_name: String,
    pub value: ConstantValue,
}

impl TypedConstant {
    pub fn new(type_name: impl Into<String>, value: ConstantValue) -> Self {
        Self {
            type_name: type_name.into(),
            value,
        }
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self::new("string", ConstantValue::String(value.into()))
    }

    pub fn int(value: i64) -> Self {
        Self::new("int", ConstantValue::Int(value))
    }

    pub fn bool(value: bool) -> Self {
        Self::new("bool", ConstantValue::Bool(value))
    }

    pub fn null(type_name: impl Into<String>) -> Self {
        Self::new(type_name, ConstantValue::Null)
    }

    /// Textual form of the value, `None` for null.
    pub fn text(&self) -> Option<String> {
        if self.value.is_null() {
            None
        } else {
            Some(self.value.to_string())
        }
    }
}

/// The attribute's declaring type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeClass {
    pub name: String,
    pub type_parameters: Vec<String>,
    /// Display text of the type bound to each type parameter, same order.
    pub type_arguments: Vec<String>,
}

impl AttributeClass {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_parameters: Vec::new(),
            type_arguments: Vec::new(),
        }
    }

    pub fn with_type_argument(
        mut self,
        parameter: impl Into<String>,
        argument: impl Into<String>,
    ) -> Self {
        self.type_parameters.push(parameter.into());
        self.type_arguments.push(argument.into());
        self
    }

    pub fn is_generic(&self) -> bool {
        !self.type_parameters.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AttributeConstructor {
    pub parameters: Vec<ParameterInfo>,
}

impl AttributeConstructor {
    pub fn new(parameters: Vec<ParameterInfo>) -> Self {
        Self { parameters }
    }
}

/// One attribute application, with whatever the host could resolve.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AttributeInstance {
    pub attribute_class: Option<AttributeClass>,
    pub constructor: Option<AttributeConstructor>,
    /// Supplied values, positionally matching the constructor parameters.
    pub constructor_arguments: Vec<TypedConstant>,
    /// Property/field initializers in use-site order.
    pub named_arguments: Vec<(String, TypedConstant)>,
}

impl AttributeInstance {
    pub fn new(attribute_class: AttributeClass, constructor: AttributeConstructor) -> Self {
        Self {
            attribute_class: Some(attribute_class),
            constructor: Some(constructor),
            constructor_arguments: Vec::new(),
            named_arguments: Vec::new(),
        }
    }

    pub fn with_constructor_argument(mut self, value: TypedConstant) -> Self {
        self.constructor_arguments.push(value);
        self
    }

    pub fn with_named_argument(mut self, name: impl Into<String>, value: TypedConstant) -> Self {
        self.named_arguments.push((name.into(), value));
        self
    }
}
