//! Property tests for config parsing and merging

use super::*;
use proptest::prelude::*;

fn value_strategy() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        (-1.0e12f64..1.0e12).prop_map(Value::Float),
        "[ -~]{0,20}".prop_map(Value::Str),
        "[a-z][a-z0-9_.]{0,15}".prop_map(|p| Value::interp(&p)),
    ];
    leaf.prop_recursive(2, 8, 4, |inner| {
        prop::collection::vec(inner, 0..4).prop_map(Value::List)
    })
}

fn key_strategy() -> impl Strategy<Value = String> {
    "@?[a-zA-Z_][a-zA-Z0-9_]{0,12}"
}

fn section_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,8}(\\.[a-z][a-z0-9_]{0,8}){0,2}"
}

fn config_strategy() -> impl Strategy<Value = Config> {
    prop::collection::btree_map(
        section_strategy(),
        prop::collection::btree_map(key_strategy(), value_strategy(), 0..5),
        1..6,
    )
    .prop_map(|sections| {
        let mut config = Config::new();
        for (path, table) in sections {
            config.insert_section(path, table.into_iter().collect());
        }
        config
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_value_round_trips(value in value_strategy()) {
        let text = value.to_string();
        let parsed = Value::parse(&text);
        prop_assert!(parsed.is_ok(), "failed to re-parse {text}");
        prop_assert_eq!(parsed.unwrap(), value);
    }

    #[test]
    fn prop_config_round_trips(config in config_strategy()) {
        let text = config.to_string();
        let parsed: Config = text.parse().unwrap();
        prop_assert_eq!(&parsed, &config);
        prop_assert_eq!(parsed.to_string(), text);
    }

    #[test]
    fn prop_merge_with_self_is_identity(config in config_strategy()) {
        prop_assert_eq!(config.merge(&config), config);
    }

    #[test]
    fn prop_fill_missing_is_idempotent(
        mut config in config_strategy(),
        defaults in config_strategy()
    ) {
        config.fill_missing(&defaults);
        let once = config.clone();
        config.fill_missing(&defaults);
        prop_assert_eq!(config, once);
    }

    #[test]
    fn prop_fill_missing_keeps_existing_values(
        mut config in config_strategy(),
        defaults in config_strategy()
    ) {
        let original = config.clone();
        config.fill_missing(&defaults);
        for (path, table) in original.sections() {
            for (key, value) in table {
                prop_assert_eq!(config.get(path, key), Some(value));
            }
        }
    }
}
