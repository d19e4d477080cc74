/// Properties of the transform checked over a grid of inputs
use crate::case_loader::{decode, to_multimap};
use query_links::{Override, Overrides, QueryParams, query_transform};

const PARAMS: &[&str] = &[
    "",
    "a=5",
    "foo=1&bar=2",
    "title=test1&page=1",
    "driver=1&driver=2&page=3",
    "q=Model+S&country=%C3%A9tats&empty=",
    "k=1&k=2&k=3&other=x+y",
];

fn override_sets() -> Vec<Overrides> {
    vec![
        Overrides::new(),
        Overrides::new().set("page", 2),
        Overrides::new().set("foo", "baz").set("new", 7),
        Overrides::new().set("k", "only").set("driver", "9"),
        Overrides::new().set("title", "a b&c").set("q", "%"),
    ]
}

fn removal_sets() -> Vec<Overrides> {
    vec![
        Overrides::new().remove("a"),
        Overrides::new().remove("page").set("title", "x"),
        Overrides::new().remove("k").remove("missing"),
        Overrides::new().set("driver", 1).remove("driver"),
    ]
}

#[test]
fn test_set_keys_take_override_value_and_others_are_unchanged() {
    for params in PARAMS {
        let query = QueryParams::parse(params);
        let original = to_multimap(&query);

        for overrides in override_sets() {
            let decoded = decode(&query_transform(&query, &overrides));

            for (key, value) in overrides.iter() {
                let Override::Set(value) = value else {
                    unreachable!("override_sets only sets");
                };
                assert_eq!(decoded.get(key), Some(&vec![value.clone()]), "{params}");
            }
            for (key, values) in &original {
                if overrides.iter().any(|(k, _)| k == key.as_str()) {
                    continue;
                }
                assert_eq!(decoded.get(key), Some(values), "{params}");
            }
        }
    }
}

#[test]
fn test_removed_keys_are_absent() {
    for params in PARAMS {
        let query = QueryParams::parse(params);

        for overrides in removal_sets() {
            // The final override for each key decides its fate
            let mut removed: Vec<&str> = Vec::new();
            for (key, value) in overrides.iter() {
                removed.retain(|k| *k != key);
                if *value == Override::Remove {
                    removed.push(key);
                }
            }

            let decoded = decode(&query_transform(&query, &overrides));
            for key in removed {
                assert!(!decoded.contains_key(key), "{params}: {key} still present");
            }
        }
    }
}

#[test]
fn test_empty_overrides_round_trip() {
    for params in PARAMS {
        let query = QueryParams::parse(params);
        let output = query_transform(&query, Overrides::new());
        assert_eq!(decode(&output), to_multimap(&query), "{params}");
        assert_eq!(QueryParams::parse(&output), query, "{params}");
    }
}

#[test]
fn test_idempotent_re_encoding() {
    for params in PARAMS {
        let query = QueryParams::parse(params);
        for overrides in override_sets().into_iter().chain(removal_sets()) {
            let once = query_transform(&query, &overrides);
            let twice = query_transform(&QueryParams::parse(&once), Overrides::new());
            assert_eq!(decode(&twice), decode(&once), "{params}");
        }
    }
}

#[test]
fn test_no_key_has_conflicting_values_after_set() {
    let query = QueryParams::parse("k=1&k=2&k=3");
    let updated = query.transform([("k", "4"), ("k", "5")]);
    assert_eq!(updated.get_all("k"), vec!["5"]);
}
