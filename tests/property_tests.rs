use proptest::prelude::*;
use squish::{
    dense_squish, imperfect_squish, sparse_squish, squish, squish_list, squish_object,
    SquishError, SquishableRecord, Value,
};

fn any_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(Value::Int),
        any::<f64>().prop_map(Value::Float),
        any::<bool>().prop_map(Value::Bool),
        "\\PC*".prop_map(Value::Text),
    ]
}

fn any_text() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z ]{0,12}").unwrap()
}

proptest! {
    #[test]
    fn test_squish_is_plain_concatenation(a in any_value(), b in any_value()) {
        prop_assert_eq!(squish(&a, &b), format!("{}{}", a, b));
    }

    #[test]
    fn test_dense_squish_strips_spaces_before_joining(a in any_value(), b in any_value()) {
        let expected = a.to_string().replace(' ', "") + &b.to_string().replace(' ', "");
        let dense = dense_squish(&a, &b);
        prop_assert!(!dense.contains(' '));
        prop_assert_eq!(dense, expected);
    }

    #[test]
    fn test_sparse_squish_inserts_one_space(a in any_value(), b in any_value()) {
        let rendered_a = a.to_string();
        let sparse = sparse_squish(&a, &b);
        prop_assert_eq!(sparse.len(), squish(&a, &b).len() + 1);
        prop_assert_eq!(&sparse[rendered_a.len()..rendered_a.len() + 1], " ");
        prop_assert_eq!(sparse, format!("{} {}", a, b));
    }

    #[test]
    fn test_squish_list_concatenates_in_order(values in prop::collection::vec(any_value(), 0..8)) {
        let expected: String = values.iter().map(ToString::to_string).collect();
        prop_assert_eq!(squish_list(&values), expected);
    }

    #[test]
    fn test_squish_object_matches_squish_list(
        a in any_value(),
        b in any_value(),
        c in any_value(),
    ) {
        let record = SquishableRecord::new(a.clone(), b.clone(), c.clone());
        prop_assert_eq!(squish_object(&record), squish_list([a, b, c]));
    }

    #[test]
    fn test_imperfect_squish_adds_integers(
        a in -1_000_000_000_000i64..1_000_000_000_000,
        b in -1_000_000_000_000i64..1_000_000_000_000,
    ) {
        prop_assert_eq!(imperfect_squish(a, b), Ok(Value::Int(a + b)));
    }

    #[test]
    fn test_imperfect_squish_adds_bools_as_integers(
        flag in any::<bool>(),
        n in -1_000_000_000_000i64..1_000_000_000_000,
    ) {
        prop_assert_eq!(imperfect_squish(flag, n), Ok(Value::Int(n + i64::from(flag))));
    }

    #[test]
    fn test_imperfect_squish_on_text_matches_squish(a in any_text(), b in any_text()) {
        let expected = squish(&a, &b);
        prop_assert_eq!(imperfect_squish(a, b), Ok(Value::Text(expected)));
    }

    #[test]
    fn test_imperfect_squish_rejects_number_and_text(n in any::<i64>(), s in any_text()) {
        let is_unsupported = matches!(
            imperfect_squish(n, s.as_str()),
            Err(SquishError::UnsupportedOperands { .. })
        );
        prop_assert!(is_unsupported);
        let is_unsupported = matches!(
            imperfect_squish(s, n),
            Err(SquishError::UnsupportedOperands { .. })
        );
        prop_assert!(is_unsupported);
    }
}
