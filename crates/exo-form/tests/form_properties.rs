use exo_dataset::{Sample, SampleRegistry};
use exo_form::{FormSchema, FormState, InputValidator, Selection};
use proptest::prelude::*;
use serde_json::{json, Map, Value};

fn build_sample(id: &str, planet: bool, features: &[f64]) -> Sample {
    let mut raw = Map::new();
    raw.insert("candidate_id".into(), json!(id));
    raw.insert(
        "disposition".into(),
        json!(if planet { "PLANET" } else { "FALSE_POSITIVE" }),
    );
    for (i, value) in features.iter().enumerate() {
        raw.insert(format!("feat_{i}"), json!(value));
    }
    serde_json::from_value(Value::Object(raw)).unwrap()
}

fn registry_strategy() -> impl Strategy<Value = SampleRegistry> {
    (1usize..6, 1usize..5).prop_flat_map(|(count, width)| {
        prop::collection::vec(
            (any::<bool>(), prop::collection::vec(-1.0e6f64..1.0e6, width)),
            count,
        )
        .prop_map(|rows| {
            let samples = rows
                .iter()
                .enumerate()
                .map(|(i, (planet, features))| build_sample(&format!("C{i:03}"), *planet, features))
                .collect();
            SampleRegistry::load(samples, vec![]).unwrap()
        })
    })
}

proptest! {
    #[test]
    fn prop_selection_reproduces_read_only_fields(registry in registry_strategy(), pick in any::<prop::sample::Index>()) {
        let mut form = FormState::new(FormSchema::from_sample(registry.first_sample().unwrap()));
        let sample = &registry.samples()[pick.index(registry.len())];

        form.apply_selection(&Selection::Candidate(sample.candidate_id().to_string()), &registry);

        prop_assert_eq!(form.candidate_id(), sample.candidate_id());
        prop_assert_eq!(form.disposition(), sample.disposition());
    }

    #[test]
    fn prop_none_clears_after_any_selection(registry in registry_strategy(), picks in prop::collection::vec(any::<prop::sample::Index>(), 0..4)) {
        let mut form = FormState::new(FormSchema::from_sample(registry.first_sample().unwrap()));
        for pick in picks {
            let id = registry.samples()[pick.index(registry.len())].candidate_id().to_string();
            form.apply_selection(&Selection::Candidate(id), &registry);
        }

        form.apply_selection(&Selection::None, &registry);

        prop_assert!(form.iter().all(|(_, value)| value.is_empty()));
    }

    #[test]
    fn prop_schema_never_changes(registry in registry_strategy(), pick in any::<prop::sample::Index>()) {
        let schema = FormSchema::from_sample(registry.first_sample().unwrap());
        let mut form = FormState::new(schema.clone());
        let id = registry.samples()[pick.index(registry.len())].candidate_id().to_string();

        form.apply_selection(&Selection::Candidate(id), &registry);

        prop_assert_eq!(form.schema(), &schema);
    }

    #[test]
    fn prop_empty_field_is_invalid(blank in "[ \t]{0,3}", filled in -1.0e3f64..1.0e3) {
        let mut form = FormState::new(FormSchema::new(
            ["candidate_id", "disposition", "feat_a", "feat_b"].map(Into::into),
        ));
        form.edit("feat_a", blank).unwrap();
        form.edit("feat_b", filled.to_string()).unwrap();

        let report = InputValidator::new().validate(&form);

        prop_assert!(!report.is_valid());
        prop_assert!(report.contains("feat_a"));
        prop_assert!(!report.contains("feat_b"));
    }

    #[test]
    fn prop_alphabetic_text_is_not_numeric(text in "[a-df-zA-DF-HJ-Z][a-zA-Z]{0,8}") {
        let mut form = FormState::new(FormSchema::new(["feat_a"].map(Into::into)));
        form.edit("feat_a", text).unwrap();

        let report = InputValidator::new().validate(&form);

        prop_assert!(report.contains("feat_a"));
    }
}
