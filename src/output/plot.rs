//! Static plot generation for simulation results
//!
//! Uses the `plotters` library to draw one line series per compartment over
//! the time grid, the classic presentation of an epidemic curve.
//!
//! # Example
//!
//! ```rust,ignore
//! use epi_rs::output::{plot_trajectory, PlotConfig};
//!
//! // Default styling
//! plot_trajectory(&solution, &["S", "I", "R"], "sir.png", None)?;
//!
//! // Custom styling
//! let mut config = PlotConfig::default();
//! config.title = "SIZR Zombie Apocalypse".to_string();
//! plot_trajectory(&solution, &["S", "I", "Z", "R"], "sizr.png", Some(&config))?;
//! ```

use plotters::prelude::*;
use std::error::Error;

use crate::solver::Solution;

// =================================================================================================
// Configuration
// =================================================================================================

/// Configuration for customizing trajectory plots
///
/// # Fields
///
/// - `width`, `height`: dimensions in pixels
/// - `title`: plot title
/// - `xlabel`, `ylabel`: axis labels
/// - `palette`: line colors, cycled when there are more compartments than
///   colors
/// - `background`: background color
/// - `line_width`: line thickness in pixels
/// - `show_grid`: whether to draw grid lines
#[derive(Clone)]
pub struct PlotConfig {
    /// Image width in pixels (default: 1024)
    pub width: u32,

    /// Image height in pixels (default: 768)
    pub height: u32,

    /// Plot title (default: "Epidemic Trajectory")
    pub title: String,

    /// X-axis label (default: "Time (days)")
    pub xlabel: String,

    /// Y-axis label (default: "Population")
    pub ylabel: String,

    /// Line colors, one per compartment, cycled if short
    pub palette: Vec<RGBColor>,

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Line width in pixels (default: 2)
    pub line_width: u32,

    /// Show grid lines (default: true)
    pub show_grid: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: "Epidemic Trajectory".to_string(),
            xlabel: "Time (days)".to_string(),
            ylabel: "Population".to_string(),
            palette: vec![BLUE, RED, GREEN, MAGENTA, CYAN, BLACK],
            background: WHITE,
            line_width: 2,
            show_grid: true,
        }
    }
}

// =================================================================================================
// Plotting
// =================================================================================================

/// Plot every compartment of a solution as a line series over time
///
/// # Arguments
///
/// * `solution` - Completed integration result
/// * `labels` - One legend label per compartment (length must equal the
///   solution dimension)
/// * `path` - Output file path; the extension selects the format (`.png`)
/// * `config` - Optional styling, defaults used when `None`
///
/// # Errors
///
/// Returns an error when the label count does not match the solution
/// dimension, when the palette is empty, or when the backend fails to write
/// the image.
pub fn plot_trajectory(
    solution: &Solution,
    labels: &[&str],
    path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    let default_config = PlotConfig::default();
    let config = config.unwrap_or(&default_config);

    if labels.len() != solution.dimension() {
        return Err(format!(
            "got {} labels for {} compartments",
            labels.len(),
            solution.dimension()
        )
        .into());
    }
    if solution.is_empty() {
        return Err("cannot plot an empty solution".into());
    }
    // The palette is cycled with a remainder below, so it must be non-empty
    if config.palette.is_empty() {
        return Err("palette must contain at least one color".into());
    }

    // ====== Axis ranges ======

    let t_min = solution.times[0];
    let t_max = *solution.times.last().unwrap();

    let y_max = solution
        .trajectory
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);
    let y_min = solution
        .trajectory
        .iter()
        .copied()
        .fold(f64::INFINITY, f64::min);

    // Pad so flat lines do not sit on the frame
    let pad = (y_max - y_min).abs().max(1e-9) * 0.05;
    let y_range = (y_min - pad)..(y_max + pad);

    // ====== Chart scaffolding ======

    let root = BitMapBackend::new(path, (config.width, config.height)).into_drawing_area();
    root.fill(&config.background)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 30))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(t_min..t_max, y_range)?;

    let mut mesh = chart.configure_mesh();
    if !config.show_grid {
        mesh.disable_x_mesh().disable_y_mesh();
    }
    mesh.x_desc(config.xlabel.clone())
        .y_desc(config.ylabel.clone())
        .draw()?;

    // ====== One series per compartment ======

    for (j, label) in labels.iter().enumerate() {
        let color = config.palette[j % config.palette.len()];
        let series = solution
            .times
            .iter()
            .copied()
            .zip(solution.component(j).into_iter());

        chart
            .draw_series(LineSeries::new(
                series,
                color.stroke_width(config.line_width),
            ))?
            .label(*label)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
