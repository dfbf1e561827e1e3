//! Schema-to-property adaptation.

use cgen_codegen::{PropertyDescriptor, from_property};
use cgen_ir::Schema;

use crate::CTypes;

/// Build the descriptor of one model property.
///
/// Base extraction only flags inline enums. A property whose schema is a
/// reference to an enum schema is flagged here as well, so templates can
/// branch on enum-typed members either way.
pub fn adapt_property(
    types: &CTypes<'_>,
    name: &str,
    schema: &Schema,
    required: bool,
) -> PropertyDescriptor {
    let mut property = from_property(types.naming(), types, name, schema, required);
    if types
        .schemas()
        .referenced_schema(schema)
        .is_some_and(Schema::is_enum)
    {
        property.is_enum = true;
    }
    property
}
