pub mod question_service;
pub mod solver;

pub use question_service::QuestionService;
pub use solver::{solver_from_config, FixedAnswerSolver, FnSolver, Solver, UnsolvedSolver};
