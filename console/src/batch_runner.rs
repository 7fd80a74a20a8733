use std::path::Path;

use tictactoe_common::config::AppConfig;
use tictactoe_common::games::SessionRng;
use tictactoe_common::simulation::{
    BATCH_GAME_COUNT, BatchMode, BatchSummary, GameRecord, generate_results_filename,
    render_bar_chart, run_batch, save_results,
};
use tictactoe_common::{log, log_error};

pub fn run(mode: BatchMode, config: &AppConfig, rng: &mut SessionRng) -> Result<BatchSummary, String> {
    log!(
        "Running {} {} games (seed {})",
        BATCH_GAME_COUNT,
        mode.file_stem(),
        rng.seed()
    );

    let results = run_batch(mode, BATCH_GAME_COUNT, rng).map_err(|e| e.to_string())?;
    let records: Vec<GameRecord> = results.iter().map(GameRecord::from).collect();
    let summary = BatchSummary::from_records(&records);

    log!(
        "X wins: {} ({:.1}%), O wins: {} ({:.1}%), draws: {} ({:.1}%)",
        summary.x_wins,
        summary.percentage(summary.x_wins),
        summary.o_wins,
        summary.percentage(summary.o_wins),
        summary.draws,
        summary.percentage(summary.draws)
    );

    let output_dir = Path::new(&config.output.directory);
    if let Err(e) = std::fs::create_dir_all(output_dir) {
        log_error!("Failed to create output directory: {}", e);
        return Err(e.to_string());
    }

    let results_path = output_dir.join(generate_results_filename(mode));
    save_results(&results_path, &records).map_err(|e| e.to_string())?;
    log!("Results saved to: {}", results_path.display());

    let chart_path = results_path.with_extension("png");
    render_bar_chart(&summary, &config.chart, &chart_path).map_err(|e| e.to_string())?;
    log!("Chart saved to: {}", chart_path.display());

    Ok(summary)
}
