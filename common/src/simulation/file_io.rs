use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use super::batch::BatchMode;
use super::records::GameRecord;

pub const RESULTS_FILE_EXTENSION: &str = "json";

#[derive(Debug)]
pub enum SimulationError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Image(image::ImageError),
}

impl std::fmt::Display for SimulationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimulationError::Io(e) => write!(f, "IO error: {}", e),
            SimulationError::Json(e) => write!(f, "JSON error: {}", e),
            SimulationError::Image(e) => write!(f, "Image error: {}", e),
        }
    }
}

impl std::error::Error for SimulationError {}

impl From<std::io::Error> for SimulationError {
    fn from(e: std::io::Error) -> Self {
        SimulationError::Io(e)
    }
}

impl From<serde_json::Error> for SimulationError {
    fn from(e: serde_json::Error) -> Self {
        SimulationError::Json(e)
    }
}

impl From<image::ImageError> for SimulationError {
    fn from(e: image::ImageError) -> Self {
        SimulationError::Image(e)
    }
}

pub fn save_results(path: &Path, records: &[GameRecord]) -> Result<(), SimulationError> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, records)?;
    writer.flush()?;
    Ok(())
}

pub fn load_results(path: &Path) -> Result<Vec<GameRecord>, SimulationError> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

pub fn generate_results_filename(mode: BatchMode) -> String {
    let timestamp = chrono::Local::now().format("%Y%m%d%H%M%S");
    format!("{}_{}.{}", timestamp, mode.file_stem(), RESULTS_FILE_EXTENSION)
}
