mod batch;
mod chart;
mod file_io;
mod records;

pub use batch::{BATCH_GAME_COUNT, BatchMode, run_batch};
pub use chart::{render_bar_chart, render_bar_chart_image};
pub use file_io::{SimulationError, generate_results_filename, load_results, save_results};
pub use records::{BatchSummary, GameRecord};
