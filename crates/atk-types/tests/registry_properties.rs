//! Resolution and suggestion properties of the built-in registry.

use atk_types::{TypeError, TypeMapping, TypeRegistry};
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};

#[fixture]
fn registry() -> TypeRegistry {
    TypeRegistry::builtin()
}

#[rstest]
fn every_canonical_type_resolves_to_a_non_empty_lms_type(registry: TypeRegistry) {
    for portable in registry.portable_types() {
        let mapping = registry.resolve(portable).unwrap();
        assert_eq!(mapping.portable_type, portable);

        let (lms_type, _) = registry.to_lms_format(portable).unwrap();
        assert!(!lms_type.is_empty(), "{portable} has an empty LMS type");
    }
}

#[rstest]
#[case("mcq", "multiple-choice")]
#[case("mc", "multiple-choice")]
#[case("tf", "true-false")]
#[case("t/f", "true-false")]
#[case("match", "matching")]
#[case("short-essay", "writing-short")]
#[case("code", "code-submission")]
#[case("programming", "code-submission")]
#[case("drag-drop", "drag-drop-ordering")]
#[case("dnd", "drag-drop-ordering")]
#[case("oral", "speaking")]
#[case("audio", "listening")]
#[case("image", "image-upload")]
#[case("upload", "image-upload")]
fn alias_resolves_like_its_target(registry: TypeRegistry, #[case] alias: &str, #[case] target: &str) {
    assert_eq!(registry.resolve(alias).unwrap(), registry.resolve(target).unwrap());
}

#[rstest]
#[case(" MCQ ")]
#[case("mcq")]
#[case("Mcq\t")]
fn resolution_ignores_case_and_whitespace(registry: TypeRegistry, #[case] input: &str) {
    assert_eq!(registry.resolve(input).unwrap().portable_type, "multiple-choice");
}

#[rstest]
fn canonical_keys_shadow_aliases() {
    let registry = TypeRegistry::from_parts(
        vec![
            TypeMapping::new("review", "writing", "", "Peer review"),
            TypeMapping::new("quiz", "multiple-choice", "", "Quiz"),
        ],
        vec![("review".into(), "quiz".into())],
    )
    .unwrap();

    assert_eq!(registry.resolve("review").unwrap().lms_type, "writing");
}

#[rstest]
fn suggest_drag_returns_all_drag_drop_types_in_table_order(registry: TypeRegistry) {
    assert_eq!(
        registry.suggest("drag"),
        [
            "drag-drop-ordering",
            "drag-drop-categorization",
            "drag-drop-fill-blank",
            "drag-drop-labeling",
            "drag-drop-image-caption",
        ]
    );
}

#[rstest]
fn suggest_maps_alias_hits_to_targets(registry: TypeRegistry) {
    // "mcq quiz" contains the alias "mcq" and the canonical key "quiz".
    let suggestions = registry.suggest("MCQ quiz");
    assert_eq!(suggestions, ["quiz", "multiple-choice"]);
}

#[rstest]
#[case("zzz")]
#[case("")]
#[case("   ")]
fn suggest_returns_empty_when_nothing_matches(registry: TypeRegistry, #[case] input: &str) {
    assert!(registry.suggest(input).is_empty());
}

#[rstest]
fn grouped_types_carry_subtypes(registry: TypeRegistry) {
    assert_eq!(
        registry.to_lms_format("drag-drop-fill-blank").unwrap(),
        ("drag-and-drop", "fill-blank")
    );
    assert_eq!(registry.to_lms_format("essay").unwrap(), ("writing-long", ""));
}

#[rstest]
fn unknown_type_is_not_valid(registry: TypeRegistry) {
    assert!(!registry.is_valid("crossword"));
    assert!(matches!(
        registry.to_lms_format("crossword"),
        Err(TypeError::NotFound { .. })
    ));
}

#[test]
fn registry_is_shareable_across_threads() {
    let registry = TypeRegistry::builtin();
    std::thread::scope(|scope| {
        for input in ["mcq", "dnd", "essay", "audio"] {
            let registry = &registry;
            scope.spawn(move || assert!(registry.is_valid(input)));
        }
    });
}

#[test]
fn type_mapping_omits_empty_subtype() {
    let registry = TypeRegistry::builtin();
    let json = serde_json::to_value(registry.resolve("quiz").unwrap()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "portable_type": "quiz",
            "lms_type": "multiple-choice",
            "description": "Quiz assignment (mapped to multiple-choice)"
        })
    );
}
