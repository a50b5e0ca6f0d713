//! Explorer state and control panel
//!
//! Holds the two user-controlled parameters and the wavefunction sampled
//! for them. The cached wavefunction is replaced only when a parameter
//! actually changes; drawing never resamples.
//!
//! Keyboard shortcuts are taken out of egui's input at the start of each
//! frame, so a focused button or slider never swallows them. Only a focused
//! text field keeps its keys. Tab is left to egui for focus navigation.

use egui::text_edit::TextEditState;
use egui::{Align, Color32, Key, Layout, RichText};

use crate::config::ExplorerConfig;
use crate::equations_ui::{draw_equations_sidebar, draw_insight, equations_for};
use crate::plot::draw_wavefunction_plot;
use crate::sampler::{
    generate, PotentialKind, QuantumNumber, Wavefunction, MAX_QUANTUM_NUMBER, MIN_QUANTUM_NUMBER,
};

/// Outcome of a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Ignored,
    Changed,
    Quit,
}

pub struct Explorer {
    kind: PotentialKind,
    n: QuantumNumber,
    wavefunction: Wavefunction,
    pub show_equations: bool,
    quit_requested: bool,
}

impl Explorer {
    pub fn new(kind: PotentialKind, n: QuantumNumber) -> Self {
        Self {
            kind,
            n,
            wavefunction: generate(kind, n),
            show_equations: true,
            quit_requested: false,
        }
    }

    pub fn from_config(config: &ExplorerConfig) -> Self {
        Self::new(config.potential, config.quantum_number)
    }

    pub fn kind(&self) -> PotentialKind {
        self.kind
    }

    pub fn quantum_number(&self) -> QuantumNumber {
        self.n
    }

    pub fn wavefunction(&self) -> &Wavefunction {
        &self.wavefunction
    }

    /// Set once Escape has been pressed
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Select a state, resampling only if it differs from the current one.
    /// Returns whether the wavefunction was replaced.
    pub fn set_params(&mut self, kind: PotentialKind, n: QuantumNumber) -> bool {
        if kind == self.kind && n == self.n {
            return false;
        }

        self.kind = kind;
        self.n = n;
        self.wavefunction = generate(kind, n);

        log::debug!(
            "{} n={} ({} nodes)",
            kind,
            n,
            self.wavefunction.node_count()
        );
        true
    }

    pub fn handle_key(&mut self, key: Key) -> KeyAction {
        let changed = match key {
            Key::Escape => {
                self.quit_requested = true;
                return KeyAction::Quit;
            }
            Key::Num1 => self.set_params(PotentialKind::InfiniteWell, self.n),
            Key::Num2 => self.set_params(PotentialKind::HarmonicOscillator, self.n),
            Key::ArrowUp | Key::Plus | Key::Equals => self.set_params(self.kind, self.n.increment()),
            Key::ArrowDown | Key::Minus => self.set_params(self.kind, self.n.decrement()),
            Key::E => {
                self.show_equations = !self.show_equations;
                true
            }
            _ => return KeyAction::Ignored,
        };

        if changed {
            KeyAction::Changed
        } else {
            KeyAction::Ignored
        }
    }

    /// Apply the shortcuts pressed this frame and remove them from egui's input
    pub fn handle_input(&mut self, ctx: &egui::Context) -> KeyAction {
        if text_edit_focused(ctx) {
            return KeyAction::Ignored;
        }

        let mut pressed = Vec::new();
        ctx.input_mut(|input| {
            input.events.retain(|event| match event {
                egui::Event::Key {
                    key,
                    pressed: true,
                    modifiers,
                    ..
                } if !modifiers.command && !modifiers.ctrl && is_shortcut(*key) => {
                    pressed.push(*key);
                    false
                }
                _ => true,
            });
        });

        if pressed.is_empty() {
            return KeyAction::Ignored;
        }

        ctx.memory_mut(|memory| {
            if let Some(id) = memory.focused() {
                memory.surrender_focus(id);
            }
        });

        pressed
            .into_iter()
            .map(|key| self.handle_key(key))
            .fold(KeyAction::Ignored, |acc, action| match (acc, action) {
                (KeyAction::Quit, _) | (_, KeyAction::Quit) => KeyAction::Quit,
                (KeyAction::Changed, _) | (_, KeyAction::Changed) => KeyAction::Changed,
                _ => KeyAction::Ignored,
            })
    }

    /// Build the control panel, equations sidebar and plot
    pub fn ui(&mut self, ctx: &egui::Context) {
        self.handle_input(ctx);

        let mut kind = self.kind;
        let mut n = self.n.get();

        egui::SidePanel::left("controls_panel")
            .min_width(220.0)
            .resizable(false)
            .show(ctx, |ui| {
                ui.heading(RichText::new("Wavefunction Explorer").color(Color32::from_rgb(129, 140, 248)));
                ui.label(RichText::new("Visualize spatial probability densities.").color(Color32::GRAY));

                ui.add_space(10.0);
                ui.separator();

                ui.label(RichText::new("Potential").strong());
                for option in PotentialKind::ALL {
                    ui.selectable_value(&mut kind, option, option.label());
                }

                ui.add_space(10.0);
                ui.label(RichText::new(format!("Quantum Number (n = {n})")).strong());
                ui.add(egui::Slider::new(&mut n, MIN_QUANTUM_NUMBER..=MAX_QUANTUM_NUMBER));
                ui.horizontal(|ui| {
                    ui.small("Ground State");
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.small("High Energy");
                    });
                });

                ui.add_space(10.0);
                ui.separator();
                ui.checkbox(&mut self.show_equations, "Show equations (E)");

                ui.add_space(10.0);
                ui.small("1/2 potential · ↑/↓ n · E equations · Esc quit");
            });

        self.set_params(kind, QuantumNumber::clamped(n));

        if self.show_equations {
            let (equations, variables) = equations_for(self.kind);
            let wavefunction = &self.wavefunction;
            draw_equations_sidebar(ctx, self.kind.label(), equations, variables, |ui| {
                draw_insight(ui, wavefunction)
            });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            draw_wavefunction_plot(ui, &self.wavefunction);
        });
    }
}

fn is_shortcut(key: Key) -> bool {
    matches!(
        key,
        Key::Escape
            | Key::Num1
            | Key::Num2
            | Key::ArrowUp
            | Key::ArrowDown
            | Key::Plus
            | Key::Minus
            | Key::Equals
            | Key::E
    )
}

fn text_edit_focused(ctx: &egui::Context) -> bool {
    ctx.memory(|memory| memory.focused())
        .is_some_and(|id| TextEditState::load(ctx, id).is_some())
}
