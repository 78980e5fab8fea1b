use atk_core::entities::{
    Assignment, AssignmentPackage, MultipleChoiceQuestion, PackageMetadata, QuestionPayload,
    Resource,
};
use atk_core::enums::{Difficulty, UnresolvedTypePolicy};
use atk_package::store::{load_package, save_package};
use atk_package::{Converter, PackageError, content_hash, validate};
use atk_types::TypeRegistry;
use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};

#[fixture]
fn registry() -> TypeRegistry {
    TypeRegistry::builtin()
}

fn multiple_choice_package() -> AssignmentPackage {
    let created = Utc.with_ymd_and_hms(2026, 2, 3, 9, 30, 0).unwrap();
    let mut metadata = PackageMetadata::new("pkg-mc-1", "Ada", created);
    metadata.tags = vec!["spanish".into(), "unit-2".into()];

    let mut assignment = Assignment::with_defaults("multiple-choice");
    assignment.title = "Colores".into();
    assignment.description = "Choose the matching color".into();
    assignment.difficulty = Some(Difficulty::Beginner);
    assignment.points = 5;
    assignment.due_date = Some(Utc.with_ymd_and_hms(2026, 3, 1, 23, 59, 0).unwrap());
    assignment.questions = Some(QuestionPayload::MultipleChoice(MultipleChoiceQuestion {
        question: "What color is 'rojo'?".into(),
        options: vec!["red".into(), "blue".into(), "green".into()],
        correct_answer: "red".into(),
        explanation: "Rojo means red.".into(),
    }));

    let mut pkg = AssignmentPackage::new(metadata, assignment);
    pkg.resources.push(Resource {
        id: "res-1".into(),
        title: "Color chart".into(),
        resource_type: "image".into(),
        local_path: "resources/chart.png".into(),
        order: 1,
        ..Resource::default()
    });
    pkg
}

// Validator

#[test]
fn empty_title_and_type_fail_with_two_errors() {
    let pkg = AssignmentPackage::new(
        PackageMetadata::new("pkg-empty", "Ada", Utc::now()),
        Assignment::default(),
    );

    let result = validate(&pkg);
    assert!(!result.is_valid);
    assert!(result.score <= 60);
    assert_eq!(result.errors.len(), 2);
}

#[test]
fn populated_multiple_choice_package_is_valid() {
    let result = validate(&multiple_choice_package());
    assert!(result.is_valid, "unexpected errors: {:?}", result.errors);
    assert!(result.warnings.is_empty());
    assert_eq!(result.score, 100);
}

#[test]
fn errors_and_warnings_deduct_independently() {
    let mut assignment = Assignment::with_defaults("multiple-choice");
    assignment.points = -3;
    assignment.title = "   ".into();
    let pkg = AssignmentPackage::new(PackageMetadata::new("p", "a", Utc::now()), assignment);

    let result = validate(&pkg);
    assert_eq!(result.errors.len(), 2);
    assert_eq!(result.warnings.len(), 2);
    assert_eq!(result.score, 35);
}

// Hasher

#[test]
fn hash_is_deterministic() {
    let pkg = multiple_choice_package();
    assert_eq!(
        content_hash(&pkg.assignment).unwrap(),
        content_hash(&pkg.assignment).unwrap()
    );
}

#[rstest]
#[case::title(|a: &mut Assignment| a.title.push('!'))]
#[case::points(|a: &mut Assignment| a.points += 1)]
#[case::published(|a: &mut Assignment| a.published = !a.published)]
#[case::due_date(|a: &mut Assignment| a.due_date = None)]
#[case::payload(|a: &mut Assignment| a.questions = None)]
fn substantive_edits_change_hash(#[case] edit: fn(&mut Assignment)) {
    let pkg = multiple_choice_package();
    let before = content_hash(&pkg.assignment).unwrap();

    let mut edited = pkg.assignment.clone();
    edit(&mut edited);
    assert_ne!(before, content_hash(&edited).unwrap());
}

#[test]
fn metadata_does_not_affect_hash() {
    let pkg = multiple_choice_package();
    let mut copy = pkg.clone();
    copy.metadata.id = "pkg-other".into();
    copy.metadata.created = Utc::now();
    copy.metadata.modified = Utc::now();
    copy.metadata.author = "Someone else".into();
    copy.resources.clear();

    assert_eq!(
        content_hash(&pkg.assignment).unwrap(),
        content_hash(&copy.assignment).unwrap()
    );
}

// Converter

#[rstest]
fn unresolved_type_passes_through(registry: TypeRegistry) {
    let mut pkg = multiple_choice_package();
    pkg.assignment.assignment_type = "Interpretive-Dance".into();
    pkg.assignment.subtype = "solo".into();

    let wire = Converter::new(&registry, UnresolvedTypePolicy::PassThrough)
        .to_wire(&pkg)
        .unwrap();
    assert_eq!(wire.lms_type, "Interpretive-Dance");
    assert_eq!(wire.lms_subtype, "solo");
}

#[rstest]
fn reject_policy_surfaces_suggestions(registry: TypeRegistry) {
    let mut pkg = multiple_choice_package();
    pkg.assignment.assignment_type = "drag".into();

    let err = Converter::new(&registry, UnresolvedTypePolicy::Reject)
        .to_wire(&pkg)
        .unwrap_err();
    let PackageError::UnresolvedType(type_err) = err else {
        panic!("expected an unresolved type error");
    };
    assert_eq!(type_err.suggestions().len(), 5);
}

#[rstest]
#[case("mcq", "multiple-choice", "")]
#[case(" DND ", "drag-and-drop", "ordering")]
#[case("drag-drop-labeling", "drag-and-drop", "labeling")]
#[case("essay", "writing-long", "")]
fn wire_type_uses_lms_vocabulary(
    registry: TypeRegistry,
    #[case] portable: &str,
    #[case] lms_type: &str,
    #[case] lms_subtype: &str,
) {
    let mut pkg = multiple_choice_package();
    pkg.assignment.assignment_type = portable.into();

    let wire = Converter::new(&registry, UnresolvedTypePolicy::Reject)
        .to_wire(&pkg)
        .unwrap();
    assert_eq!((wire.lms_type.as_str(), wire.lms_subtype.as_str()), (lms_type, lms_subtype));
}

#[rstest]
fn wire_record_provenance_and_optional_fields(registry: TypeRegistry) {
    let mut pkg = multiple_choice_package();
    pkg.metadata.source_hash = content_hash(&pkg.assignment).unwrap();
    let now = Utc.with_ymd_and_hms(2026, 2, 4, 12, 0, 0).unwrap();

    let wire = Converter::new(&registry, UnresolvedTypePolicy::PassThrough)
        .to_wire_at(&pkg, now)
        .unwrap();
    let json = serde_json::to_value(&wire).unwrap();

    assert_eq!(json["templateId"], "pkg-mc-1");
    assert_eq!(json["version"], "1.0.0");
    assert_eq!(json["sourceHash"], pkg.metadata.source_hash.as_str());
    assert_eq!(json["importedFrom"], "assignment-toolkit");
    assert_eq!(json["dueDate"], "2026-03-01T23:59:00Z");
    assert_eq!(json["difficulty"], "beginner");
    assert_eq!(json["questions"]["correctAnswer"], "red");
    for absent in ["availableFrom", "availableTo", "timeLimit", "maxAttempts", "codeSubmissionConfig"] {
        assert!(json.get(absent).is_none(), "{absent} should be omitted");
    }
}

#[rstest]
fn wire_hash_tracks_edits_made_after_stamping(registry: TypeRegistry) {
    let mut pkg = multiple_choice_package();
    pkg.metadata.source_hash = content_hash(&pkg.assignment).unwrap();
    let recorded = pkg.metadata.source_hash.clone();
    pkg.assignment.title = "Colores (revisado)".into();

    let wire = Converter::new(&registry, UnresolvedTypePolicy::PassThrough)
        .to_wire(&pkg)
        .unwrap();

    assert_ne!(wire.source_hash, recorded);
    assert_eq!(wire.source_hash, content_hash(&pkg.assignment).unwrap());
}

// Storage

#[test]
fn save_then_load_is_lossless() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("colores.yaml");
    let mut pkg = multiple_choice_package();
    pkg.metadata.source_hash = content_hash(&pkg.assignment).unwrap();

    save_package(&pkg, &path).unwrap();
    let loaded = load_package(&path).unwrap();
    assert_eq!(loaded, pkg);

    save_package(&loaded, &path).unwrap();
    assert_eq!(load_package(&path).unwrap(), pkg);
}

#[test]
fn malformed_file_is_a_load_failure() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.yaml");
    std::fs::write(&path, "metadata: {id: [unclosed\n").unwrap();

    assert!(matches!(load_package(&path), Err(PackageError::Parse { .. })));
}

#[test]
fn missing_file_is_a_read_failure() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_package(&dir.path().join("nope.yaml")).unwrap_err();
    assert!(matches!(err, PackageError::Read { .. }));
    assert!(err.to_string().contains("nope.yaml"));
}
