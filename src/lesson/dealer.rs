//! Lesson dealing: rigged hands and hint tracking.
//!
//! A lesson hand always contains every required token for the active
//! problem plus a fixed number of distractors sampled from the lesson
//! vocabulary, shuffled together. Only the required subset is
//! deterministic; tests must not assert on distractor identity or hand
//! order.

use log::debug;

use super::catalog::{Lesson, LessonProblem};
use crate::catalog::{CardInstance, TokenId, TokenRegistry};
use crate::core::Room;

/// Distractors dealt alongside the required tokens.
pub const DISTRACTOR_COUNT: usize = 6;

/// Highest hint level.
pub const MAX_HINT_LEVEL: u8 = 3;

/// Deal a rigged hand for `problem`.
///
/// Required tokens and distractors are minted fresh through the room so
/// instance ids never collide with cards already in play.
pub fn deal_hand(
    room: &mut Room,
    registry: &TokenRegistry,
    lesson: &Lesson,
    problem: &LessonProblem,
) -> Vec<CardInstance> {
    let required: Vec<TokenId> = problem
        .required
        .iter()
        .filter_map(|s| registry.by_surface(s))
        .map(|t| t.id)
        .collect();

    let pool: Vec<TokenId> = lesson
        .vocabulary
        .iter()
        .filter_map(|s| registry.by_surface(s))
        .map(|t| t.id)
        .collect();

    let mut hand: Vec<CardInstance> = required.iter().map(|&t| room.mint(t)).collect();
    for _ in 0..DISTRACTOR_COUNT {
        if pool.is_empty() {
            break;
        }
        let idx = room.rng.gen_range_usize(0..pool.len());
        let card = room.mint(pool[idx]);
        hand.push(card);
    }

    room.rng.shuffle(&mut hand);
    debug!(
        "dealt lesson hand: problem {} ({} required, {} cards)",
        problem.id,
        required.len(),
        hand.len()
    );
    hand
}

/// Progress through a lesson: active problem and hint level.
#[derive(Clone, Debug)]
pub struct LessonProgress {
    lesson: Lesson,
    problem_index: usize,
    hint_level: u8,
}

impl LessonProgress {
    /// Start a lesson at its first problem.
    #[must_use]
    pub fn new(lesson: Lesson) -> Self {
        Self {
            lesson,
            problem_index: 0,
            hint_level: 0,
        }
    }

    /// The lesson being played.
    #[must_use]
    pub fn lesson(&self) -> &Lesson {
        &self.lesson
    }

    /// The active problem, or `None` once the lesson is finished.
    #[must_use]
    pub fn current_problem(&self) -> Option<&LessonProblem> {
        self.lesson.problems.get(self.problem_index)
    }

    /// Move to the next problem, resetting the hint level.
    ///
    /// Returns false when there are no problems left.
    pub fn advance(&mut self) -> bool {
        self.problem_index += 1;
        self.hint_level = 0;
        self.problem_index < self.lesson.problems.len()
    }

    /// Bump the hint level, capped at [`MAX_HINT_LEVEL`].
    pub fn request_hint(&mut self) {
        self.hint_level = (self.hint_level + 1).min(MAX_HINT_LEVEL);
    }

    /// Current hint level.
    #[must_use]
    pub fn hint_level(&self) -> u8 {
        self.hint_level
    }

    /// The active hint text, if any has been requested.
    #[must_use]
    pub fn hint(&self) -> Option<String> {
        let problem = self.current_problem()?;
        let solution = problem.solutions.first()?;
        match self.hint_level {
            0 => None,
            1 => Some(format!("Length: {} characters", solution.chars().count())),
            2 => Some(format!(
                "Starts with: \"{}\"",
                solution.chars().next().unwrap_or_default()
            )),
            _ => Some(format!("Answer: {solution}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::standard_catalog;
    use crate::core::RoomId;
    use crate::lesson::builtin_lessons;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_dealt_hand_contains_required_tokens() {
        let registry = standard_catalog();
        let lessons = builtin_lessons();
        let lesson = &lessons[0];
        let problem = &lesson.problems[0];
        let mut room = Room::new(RoomId::new(1), 7);

        let hand = deal_hand(&mut room, &registry, lesson, problem);

        assert_eq!(hand.len(), problem.required.len() + DISTRACTOR_COUNT);
        for surface in &problem.required {
            let token = registry.by_surface(surface).unwrap().id;
            assert!(
                hand.iter().any(|c| c.token == token),
                "required {surface} missing from hand"
            );
        }
    }

    #[test]
    fn test_dealt_instances_are_unique() {
        let registry = standard_catalog();
        let lessons = builtin_lessons();
        let lesson = &lessons[1];
        let mut room = Room::new(RoomId::new(1), 11);

        // Deal every problem in sequence; no instance id may repeat.
        let mut seen = FxHashSet::default();
        for problem in &lesson.problems {
            for card in deal_hand(&mut room, &registry, lesson, problem) {
                assert!(seen.insert(card.instance), "instance id reused");
            }
        }
    }

    #[test]
    fn test_progress_advances_and_resets_hints() {
        let lessons = builtin_lessons();
        let mut progress = LessonProgress::new(lessons[0].clone());

        progress.request_hint();
        progress.request_hint();
        assert_eq!(progress.hint_level(), 2);

        assert!(progress.advance());
        assert_eq!(progress.hint_level(), 0);
        assert_eq!(progress.current_problem().unwrap().id, "L1-P2");
    }

    #[test]
    fn test_progress_exhausts() {
        let lessons = builtin_lessons();
        let count = lessons[0].problems.len();
        let mut progress = LessonProgress::new(lessons[0].clone());

        for _ in 0..count - 1 {
            assert!(progress.advance());
        }
        assert!(!progress.advance());
        assert!(progress.current_problem().is_none());
    }

    #[test]
    fn test_hint_ladder() {
        let lessons = builtin_lessons();
        let mut progress = LessonProgress::new(lessons[0].clone());

        assert_eq!(progress.hint(), None);

        progress.request_hint();
        assert_eq!(progress.hint().unwrap(), "Length: 4 characters");

        progress.request_hint();
        assert_eq!(progress.hint().unwrap(), "Starts with: \"我\"");

        progress.request_hint();
        assert_eq!(progress.hint().unwrap(), "Answer: 我是老师");

        // Capped.
        progress.request_hint();
        assert_eq!(progress.hint_level(), MAX_HINT_LEVEL);
    }
}
