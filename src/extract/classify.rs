//! Declaration classification.

use crate::errors::UnsupportedSymbolError;
use crate::model::DeclarationKind;
use crate::semantic::{SemanticSymbol, SymbolShape, TypeKind};

/// Maps a resolved type or method symbol to its declaration kind.
///
/// Rules, first match wins:
///
/// | shape                       | kind           |
/// |-----------------------------|----------------|
/// | method                      | `Method`       |
/// | reference type, interface   | `Interface`    |
/// | reference type, record      | `Record`       |
/// | reference type              | `Class`        |
/// | value type, record          | `RecordStruct` |
/// | value type                  | `Struct`       |
///
/// Enums, delegates, arrays, type parameters, error types, namespaces and
/// every other shape are rejected; there is no fallback kind.
pub fn classify(symbol: &SemanticSymbol) -> Result<DeclarationKind, UnsupportedSymbolError> {
    match &symbol.shape {
        SymbolShape::Method { .. } => Ok(DeclarationKind::Method),
        SymbolShape::NamedType {
            type_kind,
            is_record,
        } => classify_type(*type_kind, *is_record)
            .ok_or_else(|| UnsupportedSymbolError::new(&symbol.name, symbol.shape.to_string())),
        _ => Err(UnsupportedSymbolError::new(
            &symbol.name,
            symbol.shape.to_string(),
        )),
    }
}

fn classify_type(type_kind: TypeKind, is_record: bool) -> Option<DeclarationKind> {
    match type_kind {
        TypeKind::Interface => Some(DeclarationKind::Interface),
        TypeKind::Class if is_record => Some(DeclarationKind::Record),
        TypeKind::Class => Some(DeclarationKind::Class),
        TypeKind::Struct if is_record => Some(DeclarationKind::RecordStruct),
        TypeKind::Struct => Some(DeclarationKind::Struct),
        // enums and delegates included
        _ => None,
    }
}
