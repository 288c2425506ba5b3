//! End-to-end imports of `fixtures/week.json` into an in-memory database.

mod support;

use persist_core::document::WorkoutDocument;
use persist_core::enums::{Collection, ImportLevel, ImportStatus};
use persist_core::responses::ImportStats;
use persist_import::{validate, ErrorPolicy, FailureAction, ImportWorkflow, Importer};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{json, Value};
use support::{service, week_document, Call, FailingStore, WEEK_JSON, WEEK_TOTALS};

fn stats_array(stats: ImportStats) -> [u32; 5] {
    [
        stats.programs,
        stats.days,
        stats.sections,
        stats.components,
        stats.exercises,
    ]
}

async fn row_counts(store: &FailingStore) -> Vec<u64> {
    let mut counts = Vec::new();
    for collection in [
        Collection::Programs,
        Collection::ProgramDays,
        Collection::WorkoutSections,
        Collection::WorkoutComponents,
        Collection::Exercises,
    ] {
        counts.push(store.inner.count_rows(collection).await.unwrap());
    }
    counts
}

#[tokio::test]
async fn imports_whole_week() {
    let store = FailingStore::new(service().await);
    let result = Importer::new(&store).run(&week_document()).await;

    assert!(result.success, "{result:?}");
    assert_eq!(stats_array(result.stats.unwrap()), WEEK_TOTALS);
    assert_eq!(
        result.message,
        "Successfully imported 2 programs with 3 days, 4 sections, 6 components, and 8 exercises"
    );
    assert_eq!(row_counts(&store).await, vec![2, 3, 4, 6, 8]);
}

#[tokio::test]
async fn validator_and_importer_agree_on_exercise_total() {
    let value: serde_json::Value = serde_json::from_str(WEEK_JSON).unwrap();
    let report = validate(&value);
    assert!(report.is_valid, "{:?}", report.errors);
    assert_eq!(report.summary.total_exercises, 8);
    assert_eq!(report.summary.total_components, 3);
    assert_eq!(report.summary.program_names, vec!["Strength", "Engine"]);

    let store = FailingStore::new(service().await);
    let stats = Importer::new(&store).import(&week_document()).await.unwrap();
    assert_eq!(stats.exercises, report.summary.total_exercises);
}

#[tokio::test]
async fn reimport_is_idempotent() {
    let store = FailingStore::new(service().await);
    let importer = Importer::new(&store);
    importer.import(&week_document()).await.unwrap();
    let program = store.inner.get_program_by_name("Strength").await.unwrap().unwrap();

    let second = importer.import(&week_document()).await.unwrap();
    assert_eq!(stats_array(second), WEEK_TOTALS);
    assert_eq!(row_counts(&store).await, vec![2, 3, 4, 6, 8]);
    assert_eq!(store.calls(Call::InsertProgram), 2);
    assert_eq!(store.calls(Call::UpdateProgram), 2);

    let again = store.inner.get_program_by_name("Strength").await.unwrap().unwrap();
    assert_eq!(again.id, program.id);
}

#[tokio::test]
async fn reimport_updates_descriptive_fields() {
    let store = FailingStore::new(service().await);
    let importer = Importer::new(&store);
    importer.import(&week_document()).await.unwrap();

    let mut next_week = week_document();
    if let Some(week) = next_week.week_info.as_mut() {
        week.week_title = Some("Week 4 - Intensity".into());
    }
    next_week.programs[0].1.days[0].1.day_title = Some("Squat Day".into());
    importer.import(&next_week).await.unwrap();

    let program = store.inner.get_program_by_name("Strength").await.unwrap().unwrap();
    assert_eq!(program.week_title.as_deref(), Some("Week 4 - Intensity"));
    assert_eq!(program.full_name, "Strength & Conditioning");
    let day = store.inner.get_day(&program.id, "Monday").await.unwrap().unwrap();
    assert_eq!(day.day_title.as_deref(), Some("Squat Day"));
}

fn one_day(section: Value) -> WorkoutDocument {
    WorkoutDocument::from_value(&json!([{
        "source_file": "single.pdf",
        "programs": {"Strength": {"days": {"Monday": {"sections": [section]}}}}
    }]))
    .unwrap()
}

#[rstest]
#[case::flat(json!({"section_type": "Main", "exercises": [{"name": "Back Squat"}]}))]
#[case::nested(json!({"section_type": "Main", "components": [
    {"type": "single_lift", "exercises": [{"name": "Back Squat"}]}
]}))]
#[tokio::test]
async fn single_tree_imports_one_of_each(#[case] section: Value) {
    let store = FailingStore::new(service().await);
    let result = Importer::new(&store).run(&one_day(section)).await;

    assert!(result.success, "{result:?}");
    assert_eq!(stats_array(result.stats.unwrap()), [1, 1, 1, 1, 1]);
    assert_eq!(row_counts(&store).await, vec![1, 1, 1, 1, 1]);
}

#[tokio::test]
async fn flat_exercises_take_their_position() {
    let store = FailingStore::new(service().await);
    let document = one_day(json!({"section_type": "Warm-up", "exercises": [
        {"name": "A"}, {"name": "B"}, {"name": "C"}
    ]}));
    Importer::new(&store).import(&document).await.unwrap();

    let workout = store
        .inner
        .get_day_workout("Strength", "Monday")
        .await
        .unwrap()
        .unwrap();
    let stored: Vec<(u32, u32, &str)> = workout.sections[0]
        .components
        .iter()
        .flat_map(|c| {
            c.exercises
                .iter()
                .map(|e| (c.component.order_index, e.order_index, e.name.as_str()))
        })
        .collect();
    assert_eq!(stored, vec![(0, 0, "A"), (1, 1, "B"), (2, 2, "C")]);
}

#[tokio::test]
async fn stored_tree_keeps_order_and_derived_fields() {
    let store = FailingStore::new(service().await);
    Importer::new(&store).import(&week_document()).await.unwrap();

    let workout = store
        .inner
        .get_day_workout("Strength", "Monday")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(workout.day.coach_notes.as_deref(), Some("Keep the squats crisp."));

    let sections: Vec<&str> = workout
        .sections
        .iter()
        .map(|s| s.section.section_type.as_str())
        .collect();
    assert_eq!(sections, vec!["Warm-up", "Strength"]);

    let warmup = &workout.sections[0];
    assert_eq!(warmup.components.len(), 2);
    assert!(
        warmup
            .components
            .iter()
            .all(|c| c.component.component_type == "single_exercise" && c.exercises.len() == 1)
    );

    let main = &workout.sections[1];
    assert_eq!(main.section.format_interval_seconds, Some(120));
    let lift = &main.components[0];
    assert_eq!(lift.component.loading_note.as_deref(), Some("Build to a heavy triple"));
    let names: Vec<&str> = lift.exercises.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Back Squat", "Pause Squat"]);

    let pause = &lift.exercises[1];
    assert_eq!(pause.sets_reps.as_deref(), Some("3 × 8 @2011 RPE8"));
    assert_eq!(pause.set_type.as_deref(), Some("working"));
    assert_eq!(pause.set_number, Some(2));
    assert_eq!(pause.set_range.as_deref(), Some("3"));

    let superset: Vec<(&str, u32)> = main.components[1]
        .exercises
        .iter()
        .map(|e| (e.name.as_str(), e.order_index))
        .collect();
    assert_eq!(superset, vec![("Push-up", 1), ("DB Row", 2)]);
    assert!(!main.components[1].exercises[0].track_weight);
}

#[tokio::test]
async fn failing_section_is_skipped_and_import_succeeds() {
    let store = FailingStore::failing(service().await, Call::InsertSection, 2);
    let result = Importer::new(&store).run(&week_document()).await;

    assert!(result.success, "{result:?}");
    // The second section carried two components and four exercises.
    assert_eq!(stats_array(result.stats.unwrap()), [2, 3, 3, 4, 4]);
    assert_eq!(row_counts(&store).await, vec![2, 3, 3, 4, 4]);
}

#[tokio::test]
async fn strict_policy_aborts_and_keeps_earlier_writes() {
    let store = FailingStore::failing(service().await, Call::InsertSection, 2);
    let result = Importer::new(&store)
        .with_policy(ErrorPolicy::strict())
        .run(&week_document())
        .await;

    assert!(!result.success);
    assert_eq!(result.stats, None);
    assert_eq!(result.message, "Failed to import section: Strength/Monday#2");
    let error = result.error.unwrap();
    assert!(error.contains("Code: QUERY"), "{error}");
    assert!(error.contains("injected failure on InsertSection #2"), "{error}");

    assert_eq!(row_counts(&store).await, vec![1, 1, 1, 2, 2]);
}

#[tokio::test]
async fn program_failure_aborts_by_default() {
    let store = FailingStore::failing(service().await, Call::InsertProgram, 1);
    let result = Importer::new(&store).run(&week_document()).await;

    assert!(!result.success);
    assert_eq!(result.message, "Failed to import program: Strength");
    assert_eq!(store.calls(Call::InsertDay), 0);
}

#[tokio::test]
async fn skipped_program_leaves_the_rest() {
    let store = FailingStore::failing(service().await, Call::InsertProgram, 1);
    let policy = ErrorPolicy::default().with(ImportLevel::Program, FailureAction::Skip);
    let stats = Importer::new(&store)
        .with_policy(policy)
        .import(&week_document())
        .await
        .unwrap();

    assert_eq!(stats_array(stats), [1, 1, 1, 1, 1]);
    assert!(store.inner.get_program_by_name("Strength").await.unwrap().is_none());
}

#[tokio::test]
async fn clearing_sections_failure_skips_day_children() {
    let store = FailingStore::failing(service().await, Call::DeleteSections, 1);
    let stats = Importer::new(&store).import(&week_document()).await.unwrap();

    // Strength/Monday is written but its two sections are not.
    assert_eq!(stats_array(stats), [2, 3, 2, 2, 2]);
}

#[tokio::test]
async fn failing_exercise_only_loses_that_exercise() {
    let store = FailingStore::failing(service().await, Call::InsertExercise, 3);
    let stats = Importer::new(&store).import(&week_document()).await.unwrap();
    assert_eq!(stats_array(stats), [2, 3, 4, 6, 7]);
}

#[tokio::test]
async fn workflow_runs_select_then_import() {
    let store = FailingStore::new(service().await);
    let importer = Importer::new(&store);
    let mut flow = ImportWorkflow::default();

    let report = flow.select_file("week.json", WEEK_JSON.as_bytes()).unwrap();
    assert!(report.is_valid);
    assert_eq!(flow.status(), ImportStatus::Idle);

    let result = flow.import(&importer).await.unwrap();
    assert!(result.success);
    assert_eq!(flow.status(), ImportStatus::Success);

    // A finished import needs a fresh selection first.
    assert!(flow.import(&importer).await.is_err());
    flow.select_file("week.json", WEEK_JSON.as_bytes()).unwrap();
    assert_eq!(flow.status(), ImportStatus::Idle);
}

#[tokio::test]
async fn workflow_refuses_import_without_valid_file() {
    let store = FailingStore::new(service().await);
    let importer = Importer::new(&store);
    let mut flow = ImportWorkflow::default();

    assert!(flow.import(&importer).await.is_err());
    flow.select_file("week.json", b"[{}]").unwrap();
    assert_eq!(flow.status(), ImportStatus::Error);
    assert!(flow.import(&importer).await.is_err());
    assert_eq!(store.calls(Call::InsertProgram), 0);
}
