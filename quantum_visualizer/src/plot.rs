//! Wavefunction and probability density plot

use egui::Color32;
use egui_plot::{Corner, Legend, Line, LineStyle, Plot, PlotBounds, PlotPoints};

use crate::sampler::Wavefunction;

/// Fixed plot frame: position in [0, 1], amplitude in [-2, 2]
pub const X_RANGE: (f64, f64) = (0.0, 1.0);
pub const Y_RANGE: (f64, f64) = (-2.0, 2.0);

const WAVEFUNCTION_COLOR: Color32 = Color32::from_rgb(56, 189, 248);
const DENSITY_COLOR: Color32 = Color32::from_rgb(167, 139, 250);

/// Convert a (position, value) series into plot points
pub fn to_plot_points(series: impl Iterator<Item = (f32, f32)>) -> PlotPoints {
    series.map(|(x, y)| [x as f64, y as f64]).collect()
}

/// Draw ψ(x) and |ψ(x)|² of `wavefunction` into `ui`
pub fn draw_wavefunction_plot(ui: &mut egui::Ui, wavefunction: &Wavefunction) {
    let psi = Line::new(to_plot_points(wavefunction.amplitude_series()))
        .name("Wavefunction ψ(x)")
        .color(WAVEFUNCTION_COLOR)
        .width(2.5_f32);

    let density = Line::new(to_plot_points(wavefunction.density_series()))
        .name("Prob. Density |ψ(x)|²")
        .color(DENSITY_COLOR)
        .width(1.5_f32)
        .style(LineStyle::Dashed { length: 6.0 })
        .fill(0.0_f32);

    Plot::new("wavefunction_plot")
        .legend(Legend::default().position(Corner::RightTop))
        .x_axis_label("Position (x/L)")
        .y_axis_label("Amplitude / Probability Density")
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .allow_double_click_reset(false)
        .show(ui, |plot_ui| {
            plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                [X_RANGE.0, Y_RANGE.0],
                [X_RANGE.1, Y_RANGE.1],
            ));
            plot_ui.line(psi);
            plot_ui.line(density);
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampler::{generate, PotentialKind, QuantumNumber, SAMPLE_COUNT};

    #[test]
    fn plot_points_keep_sample_order() {
        let wf = generate(PotentialKind::InfiniteWell, QuantumNumber::clamped(2));
        let points = to_plot_points(wf.amplitude_series());
        let points = points.points();

        assert_eq!(points.len(), SAMPLE_COUNT);
        assert_eq!(points[0].x, 0.0);
        assert_eq!(points[SAMPLE_COUNT - 1].x, 1.0);
        assert_eq!(points[50].y, wf.samples()[50].amplitude as f64);
    }

    #[test]
    fn every_state_fits_the_frame() {
        for kind in PotentialKind::ALL {
            for n in 1..=10 {
                let wf = generate(kind, QuantumNumber::clamped(n));
                for sample in wf.samples() {
                    let (psi, rho) = (sample.amplitude as f64, sample.density() as f64);
                    assert!((Y_RANGE.0..=Y_RANGE.1).contains(&psi), "{kind} n={n}: ψ = {psi}");
                    assert!(rho <= Y_RANGE.1 + 1e-5, "{kind} n={n}: ρ = {rho}");
                }
            }
        }
    }
}
