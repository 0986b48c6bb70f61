mod evaluation;
mod stock_record;

pub use evaluation::{ConditionOutcome, EvaluationResult, ScreenReport};
pub use stock_record::{Field, StockRecord};
