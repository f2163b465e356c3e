//! In-memory student store with change notification.
//!
//! # Responsibility
//! - Hold the authoritative, insertion-ordered roster.
//! - Provide keyed CRUD primitives and notify observers after writes.
//!
//! # Invariants
//! - No two stored students share `id`.
//! - `update` replaces a student in place, keeping its position.
//! - Observers run only after a successful write, in registration order,
//!   and after internal borrows are released.
//! - Observer panics are not caught here.

use crate::model::student::Student;
use crate::repo::observer::{ObserverHandle, ObserverList};
use crate::logging::{LogEvent, LogStatus};
use log::{debug, info};
use std::cell::RefCell;

/// Single source of truth for student records.
///
/// Uses interior mutability so observers holding a shared handle to the
/// store can re-read it while being notified. The owning composition root
/// decides the store lifetime; there is no global instance.
#[derive(Default)]
pub struct StudentStore {
    students: RefCell<Vec<Student>>,
    observers: RefCell<ObserverList>,
}

impl StudentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a student whose id is not stored yet.
    ///
    /// Returns `false` without notifying when the id already exists.
    pub fn add(&self, student: Student) -> bool {
        {
            let mut students = self.students.borrow_mut();
            if students.iter().any(|stored| stored.id == student.id) {
                return false;
            }
            students.push(student);
        }
        info!("{}", LogEvent::new("store", "student_add", LogStatus::Ok));
        self.notify_observers();
        true
    }

    /// Replaces the stored student sharing `student.id`.
    ///
    /// Returns `false` without notifying when no such student exists.
    pub fn update(&self, student: Student) -> bool {
        {
            let mut students = self.students.borrow_mut();
            let Some(slot) = students.iter_mut().find(|stored| stored.id == student.id) else {
                return false;
            };
            *slot = student;
        }
        info!("{}", LogEvent::new("store", "student_update", LogStatus::Ok));
        self.notify_observers();
        true
    }

    /// Removes the student with `id`.
    ///
    /// Returns `false` without notifying when no such student exists.
    pub fn remove(&self, id: &str) -> bool {
        let removed = {
            let mut students = self.students.borrow_mut();
            let before = students.len();
            students.retain(|stored| stored.id != id);
            students.len() != before
        };
        if !removed {
            return false;
        }
        info!("{}", LogEvent::new("store", "student_remove", LogStatus::Ok));
        self.notify_observers();
        true
    }

    /// Returns a copy of all students in insertion order.
    pub fn list(&self) -> Vec<Student> {
        self.students.borrow().clone()
    }

    pub fn find_by_id(&self, id: &str) -> Option<Student> {
        self.students
            .borrow()
            .iter()
            .find(|stored| stored.id == id)
            .cloned()
    }

    pub fn exists(&self, id: &str) -> bool {
        self.find_by_id(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.students.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.borrow().is_empty()
    }

    /// Registers an observer. Registering the same handle twice is a no-op.
    pub fn add_observer(&self, observer: ObserverHandle) {
        if self.observers.borrow_mut().add(observer) {
            debug!("{}", LogEvent::new("store", "observer_add", LogStatus::Ok));
        }
    }

    /// Unregisters an observer; returns whether it was registered.
    pub fn remove_observer(&self, observer: &ObserverHandle) -> bool {
        self.observers.borrow_mut().remove(observer)
    }

    pub fn observer_count(&self) -> usize {
        self.observers.borrow().len()
    }

    fn notify_observers(&self) {
        let observers = self.observers.borrow().snapshot();
        debug!(
            "{}",
            LogEvent::new("store", "observers_notify", LogStatus::Ok)
                .count("count", observers.len())
        );
        for observer in observers {
            observer.on_data_changed();
        }
    }
}
