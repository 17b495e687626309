use serde_json::Value;

/// Applies `transform` to every value found at `path` within `root` and
/// returns the rewritten tree.
///
/// * Arrays met anywhere along the path are distributed over: the rest of
///   the path is applied to each element independently.
/// * A null, absent, or scalar value before the last segment leaves that
///   branch unchanged. Paths never create structure.
/// * At the last segment, null values are skipped, so `transform` is never
///   called with [`Value::Null`].
/// * An empty `path` applies `transform` to `root` itself.
///
/// `root` is taken by value. Values off the path are moved into the result
/// untouched; only the spine leading to each rewritten value is rebuilt.
///
/// ```
/// use libgraphql_scalar_exchange::path::patch_value;
/// use serde_json::json;
///
/// let data = json!({"a": [{"b": 1}, {"b": 2}], "c": 3});
/// let path = vec!["a".to_string(), "b".to_string()];
/// let patched = patch_value(data, &path, &|v| json!(v.as_i64().unwrap() * 10));
///
/// assert_eq!(patched, json!({"a": [{"b": 10}, {"b": 20}], "c": 3}));
/// ```
pub fn patch_value<F>(root: Value, path: &[String], transform: &F) -> Value
where
    F: Fn(Value) -> Value + ?Sized,
{
    let Some((key, rest)) = path.split_first() else {
        return transform_leaf(root, transform);
    };

    match root {
        Value::Array(items) => Value::Array(
            items.into_iter()
                .map(|item| patch_value(item, path, transform))
                .collect(),
        ),

        Value::Object(mut fields) => {
            // Avoid re-inserting (and thus re-ordering) anything when the key
            // is missing or null.
            match fields.get_mut(key) {
                Some(child) if !child.is_null() => {
                    let taken = child.take();
                    *child = patch_value(taken, rest, transform);
                },
                _ => log::trace!("no value at `{key}`, leaving branch untouched"),
            }
            Value::Object(fields)
        },

        leaf @ (Value::Null
            | Value::Bool(_)
            | Value::Number(_)
            | Value::String(_)) => leaf,
    }
}

fn transform_leaf<F>(value: Value, transform: &F) -> Value
where
    F: Fn(Value) -> Value + ?Sized,
{
    match value {
        Value::Null => Value::Null,
        Value::Array(items) => Value::Array(
            items.into_iter()
                .map(|item| transform_leaf(item, transform))
                .collect(),
        ),
        other => transform(other),
    }
}
