//! CLI composition root for the roster core.
//!
//! # Responsibility
//! - Own the single store instance and wire the service and observers to it.
//! - Run a short scripted session with deterministic output.

use log::debug;
use roster_core::{
    outcome_message, LogEvent, LogStatus, LoggingConfig, ObserverHandle, Student, StudentForm,
    StudentService, StudentStore,
};
use std::rc::Rc;

fn main() {
    println!("roster_core ping={}", roster_core::ping());
    println!("roster_core version={}", roster_core::core_version());

    let log_dir = std::env::temp_dir().join("roster-logs");
    let logging = LoggingConfig::new(roster_core::default_log_level(), log_dir)
        .and_then(|config| roster_core::init_logging(&config));
    if let Err(err) = logging {
        eprintln!("logging disabled: {err}");
    }

    let store = Rc::new(StudentStore::new());
    let service = StudentService::new(Rc::clone(&store));

    let roster_view: ObserverHandle = {
        let store = Rc::downgrade(&store);
        Rc::new(move || {
            if let Some(store) = store.upgrade() {
                debug!(
                    "{}",
                    LogEvent::new("cli", "roster_refresh", LogStatus::Ok).count("rows", store.len())
                );
            }
        })
    };
    store.add_observer(roster_view);

    let session = [
        StudentForm::new("S01", "Ana Paz", "20"),
        StudentForm::new("S01", "Ana Paz", "20"),
        StudentForm::new("S02", "José Núñez", "abc"),
        StudentForm::new("ab", "Luis", "200"),
        StudentForm::new("S02", "José Núñez", "22"),
    ];
    for form in session {
        match form.into_student() {
            Ok(student) => println!("add: {}", outcome_message(&service.add_student(&student))),
            Err(err) => println!("add: {err}"),
        }
    }

    let result = service.update_student(&Student::new("S01", "Ana P", 21));
    println!("update: {}", outcome_message(&result));
    println!("remove: {}", outcome_message(&service.remove_student("S02")));
    println!("remove: {}", outcome_message(&service.remove_student("S99")));

    for student in service.list_students() {
        println!("{} | {} | {}", student.id, student.name, student.age);
    }
}
