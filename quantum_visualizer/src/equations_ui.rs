//! Equations sidebar UI for the wavefunction explorer
//!
//! Provides the egui sidebar with the equations of the selected potential
//! and a short physics insight for the displayed state

use egui::{Color32, Context, FontFamily, FontId, RichText};

use crate::sampler::{PotentialKind, QuantumNumber, Wavefunction};

/// Equation entry with label and formula
pub struct Equation {
    pub name: &'static str,
    pub formula: &'static str,
    pub description: &'static str,
}

const HEADING: Color32 = Color32::from_rgb(100, 200, 255);
const SECTION: Color32 = Color32::from_rgb(255, 200, 100);
const SYMBOL: Color32 = Color32::from_rgb(150, 255, 150);
const FORMULA: Color32 = Color32::from_rgb(200, 220, 255);

/// Draw a styled equation sidebar, with `footer` below the variables
pub fn draw_equations_sidebar(
    ctx: &Context,
    title: &str,
    equations: &[Equation],
    variables: &[(&str, &str)],
    footer: impl FnOnce(&mut egui::Ui),
) {
    egui::SidePanel::right("equations_panel")
        .min_width(280.0)
        .max_width(350.0)
        .resizable(true)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading(RichText::new(title).color(HEADING));
                });

                ui.add_space(10.0);
                ui.separator();
                ui.add_space(5.0);

                ui.label(RichText::new("Equations").strong().color(SECTION));
                ui.add_space(5.0);

                for eq in equations {
                    draw_equation(ui, eq);
                    ui.add_space(8.0);
                }

                ui.add_space(10.0);
                ui.separator();
                ui.add_space(5.0);

                ui.label(RichText::new("Variables").strong().color(SECTION));
                ui.add_space(5.0);

                for (symbol, meaning) in variables {
                    ui.horizontal(|ui| {
                        ui.label(
                            RichText::new(*symbol)
                                .color(SYMBOL)
                                .font(FontId::new(14.0, FontFamily::Monospace)),
                        );
                        ui.label(RichText::new("=").color(Color32::GRAY));
                        ui.label(RichText::new(*meaning).color(Color32::LIGHT_GRAY));
                    });
                }

                ui.add_space(10.0);
                ui.separator();
                ui.add_space(5.0);

                footer(ui);
            });
        });
}

/// Draw a single equation with name, formula, and description
fn draw_equation(ui: &mut egui::Ui, eq: &Equation) {
    ui.group(|ui| {
        ui.label(RichText::new(eq.name).strong().color(Color32::WHITE));
        ui.label(
            RichText::new(eq.formula)
                .font(FontId::new(16.0, FontFamily::Monospace))
                .color(FORMULA),
        );
        ui.label(RichText::new(eq.description).small().color(Color32::GRAY));
    });
}

/// Node count, energy level and the correspondence-principle note
pub fn draw_insight(ui: &mut egui::Ui, wavefunction: &Wavefunction) {
    ui.label(RichText::new("Physics Insight").strong().color(SECTION));
    ui.add_space(5.0);

    ui.group(|ui| {
        let n = wavefunction.quantum_number();
        ui.label(RichText::new(format!("n = {n}")).color(Color32::WHITE));
        ui.label(
            RichText::new(energy_level(wavefunction.kind(), n))
                .font(FontId::new(14.0, FontFamily::Monospace))
                .color(FORMULA),
        );
        ui.label(format!("Interior nodes: {}", wavefunction.node_count()));
    });

    ui.add_space(5.0);
    ui.label(
        RichText::new(
            "As the quantum number n increases, the number of nodes (zeros) in the \
             wavefunction increases. According to the correspondence principle, at very \
             high n the quantum probability distribution starts to resemble the classical \
             distribution.",
        )
        .color(Color32::LIGHT_GRAY),
    );
}

/// Energy of level `n` in the natural units of `kind`
pub fn energy_level(kind: PotentialKind, n: QuantumNumber) -> String {
    let n = n.get();
    match kind {
        PotentialKind::InfiniteWell => format!("E = {} E₁", n * n),
        PotentialKind::HarmonicOscillator => format!("E = {}/2 ℏω", 2 * n - 1),
    }
}

/// Equation and variable tables for `kind`
pub fn equations_for(kind: PotentialKind) -> (&'static [Equation], &'static [(&'static str, &'static str)]) {
    match kind {
        PotentialKind::InfiniteWell => (WELL_EQUATIONS, WELL_VARIABLES),
        PotentialKind::HarmonicOscillator => (OSCILLATOR_EQUATIONS, OSCILLATOR_VARIABLES),
    }
}

// ============================================
// Infinite Well Equations
// ============================================

pub const WELL_EQUATIONS: &[Equation] = &[
    Equation {
        name: "Time-Independent Schrödinger",
        formula: "-ℏ²/2m ψ'' = Eψ",
        description: "V = 0 inside, ∞ outside",
    },
    Equation {
        name: "Stationary States",
        formula: "ψₙ(x) = √(2/L) sin(nπx/L)",
        description: "Sine modes vanishing at the walls",
    },
    Equation {
        name: "Energy Levels",
        formula: "Eₙ = n²π²ℏ²/(2mL²)",
        description: "Grows with n²",
    },
    Equation {
        name: "Probability Density",
        formula: "ρ(x) = |ψₙ(x)|²",
        description: "Probability of finding particle",
    },
];

pub const WELL_VARIABLES: &[(&str, &str)] = &[
    ("ψₙ", "Wavefunction of level n"),
    ("n", "Quantum number (1, 2, 3, ...)"),
    ("L", "Well width"),
    ("m", "Particle mass"),
    ("ℏ", "Reduced Planck constant"),
    ("Eₙ", "Energy of level n"),
];

// ============================================
// Harmonic Oscillator Equations
// ============================================

pub const OSCILLATOR_EQUATIONS: &[Equation] = &[
    Equation {
        name: "Potential",
        formula: "V(x) = ½mω²x²",
        description: "Quadratic restoring potential",
    },
    Equation {
        name: "Stationary States",
        formula: "ψₙ(u) ∝ Hₙ₋₁(u) e^(-u²/2)",
        description: "Hermite polynomial × Gaussian",
    },
    Equation {
        name: "Energy Levels",
        formula: "Eₙ = ℏω(n - ½)",
        description: "Evenly spaced, n = 1 is the ground state",
    },
    Equation {
        name: "High Levels (n ≥ 4)",
        formula: "ψ ≈ sin(nπx) e^(-u²/10)",
        description: "Visual approximation, not an eigenstate",
    },
];

pub const OSCILLATOR_VARIABLES: &[(&str, &str)] = &[
    ("u", "Scaled position (x - ½)·10"),
    ("Hₖ", "Hermite polynomial of order k"),
    ("ω", "Angular frequency"),
    ("m", "Particle mass"),
    ("ℏ", "Reduced Planck constant"),
    ("Eₙ", "Energy of level n"),
];
