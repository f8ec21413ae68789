pub mod question_pick;
pub mod solve_flow;

pub use question_pick::QuestionSource;
pub use solve_flow::{FlowOutcome, HaltReason, SolveFlow};
