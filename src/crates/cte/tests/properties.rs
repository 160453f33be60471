//! Property tests for flattening, normalization and escaping

use cte::{convert, emit, flatten, normalize_key, parse_assignments, ConvertOptions, EnvPair, Value};
use proptest::prelude::*;

fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        any::<f64>().prop_map(Value::Float),
        ".{0,12}".prop_map(Value::String),
    ]
}

fn arb_container(inner: BoxedStrategy<Value>) -> impl Strategy<Value = Value> {
    prop_oneof![
        prop::collection::vec(inner.clone(), 0..5).prop_map(Value::Array),
        prop::collection::vec(("[a-zA-Z0-9_.-]{0,8}", inner), 0..5).prop_map(Value::object),
    ]
}

fn arb_root() -> impl Strategy<Value = Value> {
    let tree = arb_scalar().prop_recursive(4, 48, 5, |inner| arb_container(inner.boxed()));
    arb_container(tree.boxed())
}

proptest! {
    #[test]
    fn conversion_is_deterministic(root in arb_root()) {
        let first = convert(&root, None).unwrap();
        let second = convert(&root, None).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn emitted_lines_read_back_exactly(root in arb_root()) {
        let options = ConvertOptions::default();
        let flattened = flatten(&root, &options).unwrap();
        let output = emit(&flattened.pairs, false);
        let parsed = parse_assignments(&output).unwrap();
        prop_assert_eq!(parsed, flattened.pairs);
    }

    #[test]
    fn any_string_value_round_trips(value in any::<String>()) {
        let pair = EnvPair::new("VALUE", value);
        let output = emit(std::slice::from_ref(&pair), false);
        prop_assert!(output.ends_with('\n'));
        let parsed = parse_assignments(&output).unwrap();
        prop_assert_eq!(parsed, vec![pair]);
    }

    #[test]
    fn normalization_is_idempotent(raw in any::<String>(), uppercase in any::<bool>()) {
        let once = normalize_key(&raw, uppercase);
        prop_assert_eq!(normalize_key(&once, uppercase), once);
    }

    #[test]
    fn document_order_is_preserved(names in prop::collection::hash_set("[a-z]{1,8}", 1..12)) {
        let names: Vec<String> = names.into_iter().collect();
        let root = Value::object(names.iter().map(|n| (n.clone(), Value::Int(1))));
        let converted = convert(&root, None).unwrap();

        let keys: Vec<String> = converted
            .output
            .lines()
            .map(|line| line.split('=').next().unwrap().to_string())
            .collect();
        let expected: Vec<String> = names.iter().map(|n| n.to_ascii_uppercase()).collect();
        prop_assert_eq!(keys, expected);
        prop_assert!(converted.collisions.is_empty());
    }
}
