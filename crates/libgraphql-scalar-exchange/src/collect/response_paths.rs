use crate::ast;
use crate::collect::ResponsePaths;
use crate::collect::ScalarNodePath;
use crate::OperationKind;
use crate::path::NodePath;
use crate::scalars::ScalarRegistry;
use crate::schema::Schema;
use crate::types::GraphQLType;

/// Finds every position within an operation's response data that holds a
/// value of a registered scalar type, along with the position of every
/// fragment spread in the document.
///
/// Operation definitions are typed against the schema's root type for their
/// kind and start at the empty path. Fragment definitions are typed against
/// their type condition and start at a [`PathSegment::Fragment`] marker which
/// [`ResponsePaths::resolve()`] later substitutes with the spread position.
///
/// Fields contribute their response key (alias, else name). Inline fragments
/// contribute nothing to the path but narrow the parent type to their type
/// condition. Fields the schema does not know contribute no scalar paths for
/// their subtree, though fragment spreads within them are still recorded.
///
/// [`PathSegment::Fragment`]: crate::path::PathSegment::Fragment
pub fn collect_response_paths(
    document: &ast::query::Document,
    schema: &Schema,
    scalars: &ScalarRegistry,
) -> ResponsePaths {
    let mut collector = ResponsePathCollector {
        output: ResponsePaths::default(),
        scalars,
        schema,
    };

    for def in &document.definitions {
        match def {
            ast::query::Definition::Operation(op_def) => {
                let kind = OperationKind::of(op_def);
                let root_type = schema.root_operation_type(kind);
                if root_type.is_none() {
                    log::warn!(
                        "the schema defines no {kind} root type; response \
                        scalars of this operation will not be mapped",
                    );
                }
                collector.visit_selection_set(
                    operation_selection_set(op_def),
                    root_type,
                    &NodePath::new(),
                );
            },

            ast::query::Definition::Fragment(frag_def) => {
                let ast::query::TypeCondition::On(type_name) = &frag_def.type_condition;
                collector.visit_selection_set(
                    &frag_def.selection_set,
                    schema.lookup_type(type_name),
                    &NodePath::fragment_root(frag_def.name.as_str()),
                );
            },
        }
    }

    log::debug!(
        "collected {} scalar response path(s) and {} fragment position(s)",
        collector.output.scalars.len(),
        collector.output.fragments.len(),
    );
    collector.output
}

struct ResponsePathCollector<'a> {
    output: ResponsePaths,
    scalars: &'a ScalarRegistry,
    schema: &'a Schema,
}
impl<'a> ResponsePathCollector<'a> {
    fn visit_field(
        &mut self,
        field: &ast::query::Field,
        parent_type: Option<&'a GraphQLType>,
        parent_path: &NodePath,
    ) {
        let response_key = field.alias.as_deref().unwrap_or(field.name.as_str());
        let path = parent_path.field_child(response_key);

        let schema = self.schema;
        let field_type = parent_type.and_then(|parent_type| {
            let annotation = schema.field_type_annotation(parent_type, &field.name);
            if annotation.is_none() {
                log::trace!(
                    "`{}` has no field named `{}`; skipping `{path}`",
                    parent_type.name(),
                    field.name,
                );
            }
            annotation.and_then(|annot| schema.resolve_annotation(annot))
        });

        if let Some(scalar_name) = field_type.and_then(
            |type_| self.scalars.mapped_scalar_name(type_),
        ) {
            log::trace!("response path `{path}` holds a `{scalar_name}`");
            self.output.scalars.push(ScalarNodePath {
                scalar_name: scalar_name.to_string(),
                path: path.clone(),
            });
        }

        if !field.selection_set.items.is_empty() {
            self.visit_selection_set(&field.selection_set, field_type, &path);
        }
    }

    fn visit_selection_set(
        &mut self,
        selection_set: &ast::query::SelectionSet,
        parent_type: Option<&'a GraphQLType>,
        path: &NodePath,
    ) {
        for selection in &selection_set.items {
            match selection {
                ast::query::Selection::Field(field) =>
                    self.visit_field(field, parent_type, path),

                ast::query::Selection::FragmentSpread(spread) => {
                    let previous = self.output.fragments.record(
                        spread.fragment_name.as_str(),
                        path.clone(),
                    );
                    if let Some(previous) = previous.filter(|prev| prev != path) {
                        log::warn!(
                            "fragment `{}` is spread at both `{previous}` and \
                            `{path}`; only `{path}` will be mapped",
                            spread.fragment_name,
                        );
                    }
                },

                ast::query::Selection::InlineFragment(inline_frag) => {
                    let narrowed_type = match &inline_frag.type_condition {
                        Some(ast::query::TypeCondition::On(type_name)) =>
                            self.schema.lookup_type(type_name),
                        None => parent_type,
                    };
                    self.visit_selection_set(
                        &inline_frag.selection_set,
                        narrowed_type,
                        path,
                    );
                },
            }
        }
    }
}

fn operation_selection_set(
    op_def: &ast::query::OperationDefinition,
) -> &ast::query::SelectionSet {
    match op_def {
        ast::query::OperationDefinition::Mutation(mutation) =>
            &mutation.selection_set,
        ast::query::OperationDefinition::Query(query) =>
            &query.selection_set,
        ast::query::OperationDefinition::SelectionSet(selection_set) =>
            selection_set,
        ast::query::OperationDefinition::Subscription(subscription) =>
            &subscription.selection_set,
    }
}
