use crate::ast;
use crate::collect::ScalarPath;
use crate::path::ResolvedPath;
use crate::scalars::ScalarRegistry;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::TypeAnnotation;

/// Finds every position within an operation's variables object that holds a
/// value of a registered scalar type.
///
/// Only the variable definitions of the document's operations are visited
/// (document order, then declaration order):
///
/// * A variable whose type is a registered scalar yields `[variable]`.
/// * A variable whose type is an input object yields `[variable, field]` for
///   each of the input object's fields (declaration order) whose type is a
///   registered scalar. Input objects nested within that input object are
///   not expanded.
///
/// List wrappers are transparent here: the patcher distributes over any list
/// it meets at a path position.
pub fn collect_variable_paths(
    document: &ast::query::Document,
    schema: &Schema,
    scalars: &ScalarRegistry,
) -> Vec<ScalarPath> {
    let mut paths = vec![];

    for def in &document.definitions {
        let ast::query::Definition::Operation(op_def) = def else {
            continue;
        };

        for var_def in variable_definitions(op_def) {
            collect_variable(var_def, schema, scalars, &mut paths);
        }
    }

    log::debug!("collected {} scalar variable path(s)", paths.len());
    paths
}

fn collect_variable(
    var_def: &ast::query::VariableDefinition,
    schema: &Schema,
    scalars: &ScalarRegistry,
    paths: &mut Vec<ScalarPath>,
) {
    let annotation = TypeAnnotation::from_ast_type(&var_def.var_type);
    let Some(var_type) = schema.resolve_annotation(&annotation) else {
        log::warn!(
            "variable `${}` is declared with the unknown type `{}`; skipping it",
            var_def.name,
            annotation.innermost_named_type_annotation().graphql_type_name(),
        );
        return;
    };

    if let GraphQLType::InputObject(input_obj) = var_type {
        for (field_name, field) in input_obj.fields() {
            let field_type = schema.resolve_annotation(field.type_annotation());
            if let Some(scalar_name) = field_type.and_then(
                |type_| scalars.mapped_scalar_name(type_),
            ) {
                push_path(paths, scalar_name, [var_def.name.as_str(), field_name.as_str()]);
            }
        }
    } else if let Some(scalar_name) = scalars.mapped_scalar_name(var_type) {
        push_path(paths, scalar_name, [var_def.name.as_str()]);
    }
}

fn push_path<'a>(
    paths: &mut Vec<ScalarPath>,
    scalar_name: &str,
    segments: impl IntoIterator<Item = &'a str>,
) {
    let path: ResolvedPath = segments.into_iter().collect();
    log::trace!("variable path `{path}` holds a `{scalar_name}`");
    paths.push(ScalarPath::new(scalar_name, path));
}

fn variable_definitions(
    op_def: &ast::query::OperationDefinition,
) -> &[ast::query::VariableDefinition] {
    match op_def {
        ast::query::OperationDefinition::Mutation(mutation) =>
            &mutation.variable_definitions,
        ast::query::OperationDefinition::Query(query) =>
            &query.variable_definitions,
        ast::query::OperationDefinition::SelectionSet(_) =>
            &[],
        ast::query::OperationDefinition::Subscription(subscription) =>
            &subscription.variable_definitions,
    }
}
