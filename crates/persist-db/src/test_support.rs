//! Shared test utilities for persist-db unit tests.

use crate::PersistDb;
use crate::service::WorkoutService;
use crate::store::{NewComponent, NewDay, NewExercise, NewProgram, NewSection};

/// Create an in-memory `WorkoutService`.
pub async fn test_service() -> WorkoutService {
    let db = PersistDb::open_local(":memory:").await.unwrap();
    WorkoutService::from_db(db)
}

pub fn new_program(name: &str) -> NewProgram {
    NewProgram {
        name: name.to_string(),
        full_name: format!("{name} Program"),
        week_title: Some("Week 1".into()),
        start_date: Some("2025-01-06".into()),
        end_date: Some("2025-01-12".into()),
    }
}

pub fn new_day(program_id: &str, day_name: &str) -> NewDay {
    NewDay {
        program_id: program_id.to_string(),
        day_name: day_name.to_string(),
        date: Some("2025-01-06".into()),
        day_title: Some("Lower".into()),
        coach_notes: None,
    }
}

pub fn new_section(day_id: &str, order_index: u32) -> NewSection {
    NewSection {
        day_id: day_id.to_string(),
        section_type: "Main".into(),
        section_letter: Some("A".into()),
        order_index,
        ..NewSection::default()
    }
}

pub fn new_component(section_id: &str, order_index: u32) -> NewComponent {
    NewComponent {
        section_id: section_id.to_string(),
        component_type: "superset".into(),
        order_index,
        ..NewComponent::default()
    }
}

pub fn new_exercise(component_id: &str, name: &str, order_index: u32) -> NewExercise {
    NewExercise {
        component_id: component_id.to_string(),
        name: name.to_string(),
        order_index,
        track_weight: true,
        ..NewExercise::default()
    }
}

/// Insert a program → day → section → component → two exercises chain.
///
/// Returns `(day_id, [exercise ids])`.
pub async fn seed_day(svc: &WorkoutService, program: &str, day: &str) -> (String, Vec<String>) {
    let program = svc.create_program(&new_program(program)).await.unwrap();
    let day = svc.create_day(&new_day(&program.id, day)).await.unwrap();
    let section = svc.create_section(&new_section(&day.id, 0)).await.unwrap();
    let component = svc.create_component(&new_component(&section.id, 0)).await.unwrap();
    let a = svc.create_exercise(&new_exercise(&component.id, "Back Squat", 0)).await.unwrap();
    let b = svc.create_exercise(&new_exercise(&component.id, "Plank", 1)).await.unwrap();
    (day.id, vec![a.id, b.id])
}
