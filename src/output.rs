use std::fs;
use std::path::{Path, PathBuf};

use plotters::prelude::*;
use serde::Serialize;

use crate::sim::SimulationRun;
use crate::UmtsError;

const CHART_SIZE: (u32, u32) = (960, 540);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotFiles {
    pub output_dir: PathBuf,
    pub spreading_path: PathBuf,
    pub power_path: PathBuf,
    pub handover_path: PathBuf,
}

impl PlotFiles {
    pub fn in_dir(output_dir: &Path) -> Self {
        Self {
            output_dir: output_dir.to_path_buf(),
            spreading_path: output_dir.join("cdma_spreading.svg"),
            power_path: output_dir.join("power_control.svg"),
            handover_path: output_dir.join("handover.svg"),
        }
    }
}

fn plot_err<E: std::fmt::Display>(err: E) -> UmtsError {
    UmtsError::Plot(err.to_string())
}

/// Write the three charts of a run into `output_dir`
pub fn make_plots(run: &SimulationRun, output_dir: &Path) -> Result<PlotFiles, UmtsError> {
    fs::create_dir_all(output_dir)?;
    let files = PlotFiles::in_dir(output_dir);

    plot_spreading(run, &files.spreading_path)?;
    plot_power(run, &files.power_path)?;
    plot_handover(run, &files.handover_path)?;

    tracing::debug!(dir = %output_dir.display(), "charts written");
    Ok(files)
}

fn plot_spreading(run: &SimulationRun, path: &Path) -> Result<(), UmtsError> {
    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;

    let composite = &run.spreading.composite;
    let first_user = run.spreading.user_signal(0).unwrap_or_default();
    let max_x = composite.len().saturating_sub(1).max(1) as f64;
    let bound = run.spreading.users().max(1) as f64 + 0.5;

    let mut chart = ChartBuilder::on(&root)
        .caption("CDMA Spreading", ("sans-serif", 28).into_font())
        .margin(20)
        .x_label_area_size(45)
        .y_label_area_size(55)
        .build_cartesian_2d(0.0..max_x, -bound..bound)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .x_desc("Chip")
        .y_desc("Amplitude")
        .draw()
        .map_err(plot_err)?;

    chart
        .draw_series(LineSeries::new(
            composite.iter().enumerate().map(|(i, &v)| (i as f64, v)),
            &BLUE,
        ))
        .map_err(plot_err)?
        .label("Composite Signal (Multiple Users)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 25, y)], BLUE.stroke_width(3)));

    chart
        .draw_series(LineSeries::new(
            first_user.iter().enumerate().map(|(i, &v)| (i as f64, v)),
            &RED,
        ))
        .map_err(plot_err)?
        .label("User 1 Spread Signal")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 25, y)], RED.stroke_width(3)));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .border_style(BLACK)
        .background_style(WHITE.mix(0.7))
        .draw()
        .map_err(plot_err)?;

    root.present().map_err(plot_err)?;
    Ok(())
}

fn plot_power(run: &SimulationRun, path: &Path) -> Result<(), UmtsError> {
    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;

    let received = &run.power.received_power;
    let users = received.len() as i32;
    let max_power = run.power.peak().max(f64::MIN_POSITIVE) * 1.1;

    let mut chart = ChartBuilder::on(&root)
        .caption("Power Control", ("sans-serif", 28).into_font())
        .margin(20)
        .x_label_area_size(45)
        .y_label_area_size(70)
        .build_cartesian_2d((0..users).into_segmented(), 0.0..max_power)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Users")
        .y_desc("Received Power")
        .draw()
        .map_err(plot_err)?;

    chart
        .draw_series(received.iter().enumerate().map(|(i, &p)| {
            let i = i as i32;
            let mut bar = Rectangle::new(
                [(SegmentValue::Exact(i), 0.0), (SegmentValue::Exact(i + 1), p)],
                BLUE.filled(),
            );
            bar.set_margin(0, 0, 6, 6);
            bar
        }))
        .map_err(plot_err)?;

    root.present().map_err(plot_err)?;
    Ok(())
}

fn plot_handover(run: &SimulationRun, path: &Path) -> Result<(), UmtsError> {
    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;

    let handover = &run.handover;
    let strengths = [handover.cell_a_strength, handover.cell_b_strength];
    let max_strength = strengths
        .iter()
        .copied()
        .fold(0.0_f64, f64::max)
        .max(f64::MIN_POSITIVE)
        * 1.1;
    let caption = format!(
        "Handover Decision: {} at {:.1} km",
        handover.winner,
        run.params.distance_km()
    );

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 28).into_font())
        .margin(20)
        .x_label_area_size(45)
        .y_label_area_size(70)
        .build_cartesian_2d((0..2).into_segmented(), 0.0..max_strength)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_label_formatter(&|v| match v {
            SegmentValue::CenterOf(0) | SegmentValue::Exact(0) => "Cell A".to_string(),
            SegmentValue::CenterOf(1) | SegmentValue::Exact(1) => "Cell B".to_string(),
            _ => String::new(),
        })
        .y_desc("Signal Strength")
        .draw()
        .map_err(plot_err)?;

    chart
        .draw_series(strengths.iter().enumerate().map(|(i, &s)| {
            let i = i as i32;
            let mut bar = Rectangle::new(
                [(SegmentValue::Exact(i), 0.0), (SegmentValue::Exact(i + 1), s)],
                GREEN.filled(),
            );
            bar.set_margin(0, 0, 40, 40);
            bar
        }))
        .map_err(plot_err)?;

    root.present().map_err(plot_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plot_file_names() {
        let files = PlotFiles::in_dir(Path::new("out"));
        assert_eq!(files.spreading_path, Path::new("out/cdma_spreading.svg"));
        assert_eq!(files.power_path, Path::new("out/power_control.svg"));
        assert_eq!(files.handover_path, Path::new("out/handover.svg"));
    }
}
