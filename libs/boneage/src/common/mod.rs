mod types;
mod utils;

pub use types::LoggedPrediction;
pub use types::PredictionResult;
pub use types::{CONFIDENCE_SCORE, STANDARD_DEVIATION};
pub use utils::round_to;
pub use utils::truncate_for_log;
pub use utils::utc_timestamp;
