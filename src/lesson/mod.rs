//! Lesson content and dealing.

pub mod catalog;
pub mod dealer;

pub use catalog::{builtin_lessons, Lesson, LessonProblem};
pub use dealer::{deal_hand, LessonProgress, DISTRACTOR_COUNT, MAX_HINT_LEVEL};

/// Score credited for solving a lesson problem.
pub const SOLVE_SCORE: u32 = 100;
