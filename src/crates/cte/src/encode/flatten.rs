//! Depth-first flattening of a value tree into environment pairs

use crate::encode::keys::KeyBuilder;
use crate::encode::primitives::encode_scalar;
use crate::types::{Collision, ConvertOptions, CteError, CteResult, EnvPair, Flattened};
use crate::value::{Path, PathSegment, Value};
use std::collections::HashMap;
use tracing::{debug, trace};

/// Flatten a document into `(key, value)` pairs in traversal order.
///
/// Object fields are visited in document order and array elements in index
/// order. When two paths normalize to the same key the first one wins and
/// the later one is recorded as a [`Collision`].
pub fn flatten(root: &Value, options: &ConvertOptions) -> CteResult<Flattened> {
    options.validate()?;

    if root.is_scalar() {
        return Err(CteError::UnsupportedRoot { kind: root.kind() });
    }

    let mut flattener = Flattener::new(options);
    flattener.visit(root)?;
    let flattened = flattener.finish();

    debug!(
        pairs = flattened.pairs.len(),
        collisions = flattened.collisions.len(),
        "Flattened document"
    );
    Ok(flattened)
}

struct Flattener<'a> {
    keys: KeyBuilder<'a>,
    max_depth: usize,
    path: Path,
    pairs: Vec<EnvPair>,
    // Path each emitted pair came from, parallel to `pairs`
    origins: Vec<Path>,
    seen: HashMap<String, usize>,
    collisions: Vec<Collision>,
}

impl<'a> Flattener<'a> {
    fn new(options: &'a ConvertOptions) -> Self {
        Self {
            keys: KeyBuilder::new(options),
            max_depth: options.max_depth,
            path: Path::root(),
            pairs: Vec::new(),
            origins: Vec::new(),
            seen: HashMap::new(),
            collisions: Vec::new(),
        }
    }

    fn visit(&mut self, value: &Value) -> CteResult<()> {
        match value {
            Value::Object(fields) => {
                for (name, child) in fields {
                    self.descend(PathSegment::Field(name.clone()), child)?;
                }
                Ok(())
            }
            Value::Array(items) => {
                for (index, child) in items.iter().enumerate() {
                    self.descend(PathSegment::Index(index), child)?;
                }
                Ok(())
            }
            scalar => match encode_scalar(scalar) {
                Some(text) => self.leaf(text),
                None => Ok(()),
            },
        }
    }

    fn descend(&mut self, segment: PathSegment, child: &Value) -> CteResult<()> {
        self.path.push(segment);
        if self.path.len() > self.max_depth {
            return Err(CteError::DepthExceeded {
                path: self.path.clone(),
                limit: self.max_depth,
            });
        }
        self.visit(child)?;
        self.path.pop();
        Ok(())
    }

    fn leaf(&mut self, value: String) -> CteResult<()> {
        let key = self.keys.build(&self.path)?;

        if let Some(&index) = self.seen.get(&key) {
            trace!(key = %key, path = %self.path, "Dropping colliding key");
            self.collisions.push(Collision {
                key,
                kept_path: self.origins[index].clone(),
                dropped_path: self.path.clone(),
            });
            return Ok(());
        }

        self.seen.insert(key.clone(), self.pairs.len());
        self.origins.push(self.path.clone());
        self.pairs.push(EnvPair { key, value });
        Ok(())
    }

    fn finish(self) -> Flattened {
        Flattened {
            pairs: self.pairs,
            collisions: self.collisions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ErrorKind;

    fn pairs(flattened: &Flattened) -> Vec<(&str, &str)> {
        flattened
            .pairs
            .iter()
            .map(|p| (p.key.as_str(), p.value.as_str()))
            .collect()
    }

    #[test]
    fn test_flatten_nested_object() {
        let root = Value::object([(
            "app",
            Value::object([("name", Value::from("test")), ("port", Value::Int(8080))]),
        )]);
        let options = ConvertOptions::default().with_prefix("TEST_");
        let result = flatten(&root, &options).unwrap();
        assert_eq!(
            pairs(&result),
            vec![("TEST_APP_NAME", "test"), ("TEST_APP_PORT", "8080")]
        );
        assert!(result.collisions.is_empty());
    }

    #[test]
    fn test_flatten_preserves_document_order() {
        let root = Value::object([
            ("zeta", Value::Int(1)),
            ("alpha", Value::Int(2)),
            ("mid", Value::Int(3)),
        ]);
        let result = flatten(&root, &ConvertOptions::default()).unwrap();
        assert_eq!(pairs(&result), vec![("ZETA", "1"), ("ALPHA", "2"), ("MID", "3")]);
    }

    #[test]
    fn test_flatten_arrays() {
        let root = Value::object([
            ("servers", Value::from(vec!["a", "b"])),
            (
                "pools",
                Value::Array(vec![Value::object([("host", Value::from("h1"))])]),
            ),
        ]);
        let result = flatten(&root, &ConvertOptions::default()).unwrap();
        assert_eq!(
            pairs(&result),
            vec![("SERVERS_0", "a"), ("SERVERS_1", "b"), ("POOLS_0_HOST", "h1")]
        );
    }

    #[test]
    fn test_flatten_array_root() {
        let root = Value::from(vec!["x", "y"]);
        let result = flatten(&root, &ConvertOptions::default()).unwrap();
        assert_eq!(pairs(&result), vec![("_0", "x"), ("_1", "y")]);
    }

    #[test]
    fn test_flatten_null_and_empty_containers() {
        let root = Value::object([
            ("a", Value::Null),
            ("b", Value::Object(vec![])),
            ("c", Value::Array(vec![])),
        ]);
        let result = flatten(&root, &ConvertOptions::default()).unwrap();
        assert_eq!(pairs(&result), vec![("A", "")]);
    }

    #[test]
    fn test_flatten_leaves_use_value_serializer() {
        let scalars = [
            Value::Null,
            Value::Bool(true),
            Value::Int(-42),
            Value::Float(1e16),
            Value::Float(0.5),
            Value::Float(f64::NEG_INFINITY),
            Value::from("plain text"),
        ];
        let root = Value::Array(scalars.to_vec());
        let result = flatten(&root, &ConvertOptions::default()).unwrap();

        let values: Vec<&str> = result.pairs.iter().map(|p| p.value.as_str()).collect();
        assert_eq!(values, vec!["", "true", "-42", "1e16", "0.5", "-inf", "plain text"]);
        for (pair, scalar) in result.pairs.iter().zip(&scalars) {
            assert_eq!(Some(pair.value.clone()), encode_scalar(scalar));
        }
    }

    #[test]
    fn test_flatten_collision_keeps_first() {
        let root = Value::object([
            ("foo-bar", Value::from("first")),
            ("foo_bar", Value::from("second")),
        ]);
        let result = flatten(&root, &ConvertOptions::default()).unwrap();
        assert_eq!(pairs(&result), vec![("FOO_BAR", "first")]);
        assert_eq!(result.collisions.len(), 1);

        let collision = &result.collisions[0];
        assert_eq!(collision.key, "FOO_BAR");
        assert_eq!(collision.kept_path.to_string(), "foo-bar");
        assert_eq!(collision.dropped_path.to_string(), "foo_bar");
    }

    #[test]
    fn test_flatten_collision_across_nesting() {
        let root = Value::object([
            ("a", Value::object([("b", Value::Int(1))])),
            ("a_b", Value::Int(2)),
        ]);
        let result = flatten(&root, &ConvertOptions::default()).unwrap();
        assert_eq!(pairs(&result), vec![("A_B", "1")]);
        assert_eq!(result.collisions[0].dropped_path.to_string(), "a_b");
    }

    #[test]
    fn test_flatten_rejects_scalar_root() {
        for root in [Value::Null, Value::Int(1), Value::from("x")] {
            let err = flatten(&root, &ConvertOptions::default()).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::UnsupportedRoot);
        }
    }

    #[test]
    fn test_flatten_depth_limit() {
        let mut value = Value::Int(1);
        for _ in 0..5 {
            value = Value::object([("n", value)]);
        }

        let ok = flatten(&value, &ConvertOptions::default().with_max_depth(5)).unwrap();
        assert_eq!(pairs(&ok), vec![("N_N_N_N_N", "1")]);

        let err = flatten(&value, &ConvertOptions::default().with_max_depth(4)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DepthExceeded);
        assert_eq!(err.path().unwrap().to_string(), "n.n.n.n.n");
    }

    #[test]
    fn test_flatten_validates_options() {
        let root = Value::object([("a", Value::Int(1))]);
        let err = flatten(&root, &ConvertOptions::default().with_prefix("A B")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidPrefix);
    }
}
