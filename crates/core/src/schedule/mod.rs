//! Schedule module - check-in/check-out selection state.

mod schedule_model;

// Re-export the public interface
pub use schedule_model::StaySchedule;
