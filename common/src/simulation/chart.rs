use std::path::Path;

use image::{Rgb, RgbImage};

use crate::config::ChartConfig;
use super::file_io::SimulationError;
use super::records::BatchSummary;

const AXIS_THICKNESS: u32 = 2;

/// Bars for X wins, O wins and draws, left to right, scaled to the largest count.
pub fn render_bar_chart_image(summary: &BatchSummary, config: &ChartConfig) -> RgbImage {
    let mut image = RgbImage::from_pixel(config.width, config.height, Rgb(config.background_color));

    let left = config.margin;
    let right = config.width - config.margin;
    let top = config.margin;
    let baseline = config.height - config.margin;

    let counts = [
        (summary.x_wins, config.x_wins_color),
        (summary.o_wins, config.o_wins_color),
        (summary.draws, config.draws_color),
    ];

    let slot_width = (right - left) / counts.len() as u32;
    let bar_width = slot_width * 2 / 3;
    let max_height = baseline - top;
    let max_count = summary.max_count();

    for (i, (count, color)) in counts.iter().enumerate() {
        if *count == 0 || max_count == 0 {
            continue;
        }
        let bar_height = ((*count as u64 * max_height as u64) / max_count as u64).max(1) as u32;
        let x0 = left + slot_width * i as u32 + (slot_width - bar_width) / 2;
        fill_rect(&mut image, x0, baseline - bar_height, bar_width, bar_height, Rgb(*color));
    }

    fill_rect(&mut image, left, baseline, right - left, AXIS_THICKNESS, Rgb(config.axis_color));
    fill_rect(&mut image, left, top, AXIS_THICKNESS, baseline - top, Rgb(config.axis_color));

    image
}

pub fn render_bar_chart(
    summary: &BatchSummary,
    config: &ChartConfig,
    path: &Path,
) -> Result<(), SimulationError> {
    render_bar_chart_image(summary, config).save(path)?;
    Ok(())
}

fn fill_rect(image: &mut RgbImage, x0: u32, y0: u32, width: u32, height: u32, color: Rgb<u8>) {
    let x1 = (x0 + width).min(image.width());
    let y1 = (y0 + height).min(image.height());
    for y in y0..y1 {
        for x in x0..x1 {
            image.put_pixel(x, y, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar_center(config: &ChartConfig, index: u32) -> u32 {
        let slot_width = (config.width - 2 * config.margin) / 3;
        config.margin + slot_width * index + slot_width / 2
    }

    #[test]
    fn test_chart_has_configured_size() {
        let config = ChartConfig::default();

        let image = render_bar_chart_image(&BatchSummary::default(), &config);

        assert_eq!(image.dimensions(), (config.width, config.height));
    }

    #[test]
    fn test_tallest_bar_reaches_top_margin() {
        let config = ChartConfig::default();
        let summary = BatchSummary { x_wins: 10, o_wins: 5, draws: 0 };

        let image = render_bar_chart_image(&summary, &config);

        let x_bar = bar_center(&config, 0);
        let o_bar = bar_center(&config, 1);
        let draw_bar = bar_center(&config, 2);
        let just_below_top = config.margin + 1;
        let mid_height = config.height / 2 + 10;
        assert_eq!(image.get_pixel(x_bar, just_below_top), &Rgb(config.x_wins_color));
        assert_eq!(image.get_pixel(o_bar, just_below_top), &Rgb(config.background_color));
        assert_eq!(image.get_pixel(o_bar, mid_height), &Rgb(config.o_wins_color));
        assert_eq!(image.get_pixel(draw_bar, mid_height), &Rgb(config.background_color));
    }

    #[test]
    fn test_chart_saved_as_png() {
        let random_number: u32 = rand::random();
        let path = std::env::temp_dir().join(format!("temp_tictactoe_chart_{}.png", random_number));
        let summary = BatchSummary { x_wins: 3, o_wins: 2, draws: 1 };

        render_bar_chart(&summary, &ChartConfig::default(), &path).unwrap();

        let loaded = image::open(&path).unwrap();
        assert_eq!(loaded.width(), ChartConfig::default().width);
        let _ = std::fs::remove_file(path);
    }
}
