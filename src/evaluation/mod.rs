//! Tour length evaluation.

mod evaluator;

pub use evaluator::TourEvaluator;
