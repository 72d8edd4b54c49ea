//! Data model for parsed documentation — format-agnostic.

/// Return type marker used for struct records.
pub const STRUCT_MARKER: &str = "struct";

/// Documentation extracted from one comment block.
///
/// Every field is optional so a block that could not be parsed (`None`) stays
/// distinguishable from one that parsed to nothing (e.g. `Some(vec![])` for a
/// function without parameters).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DocRecord {
    /// Comment lines with the `//` marker and surrounding whitespace removed
    pub description: Option<Vec<String>>,
    /// Function or struct name
    pub name: Option<String>,
    /// Parameter declarations (functions) or field declarations (structs)
    pub parameters: Option<Vec<String>>,
    /// Declared return type, or [`STRUCT_MARKER`] for structs
    pub return_type: Option<String>,
}

impl DocRecord {
    pub fn is_struct(&self) -> bool {
        self.return_type.as_deref() == Some(STRUCT_MARKER)
    }

    /// True when a name could be extracted from the definition.
    pub fn is_complete(&self) -> bool {
        self.name.is_some()
    }
}
