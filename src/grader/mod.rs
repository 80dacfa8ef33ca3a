pub mod errors;
mod grade;
mod testcase;

pub use grade::{grade_task1, grade_task2, grade_task3, AlgoSelection, GradeOutcome, FACTOR};
pub use testcase::TestCase;
