//! Stationary-state wavefunction sampling
//!
//! Evaluates simplified closed-form eigenstates of the infinite square well
//! and the harmonic oscillator on a fixed grid over the unit interval.

use std::f32::consts::{PI, SQRT_2};
use std::fmt;

use thiserror::Error;

/// Number of intervals in the sample grid
pub const SAMPLE_STEPS: usize = 200;
/// Number of samples per wavefunction (grid endpoints included)
pub const SAMPLE_COUNT: usize = SAMPLE_STEPS + 1;

pub const MIN_QUANTUM_NUMBER: u32 = 1;
pub const MAX_QUANTUM_NUMBER: u32 = 10;

/// Scale mapping the unit interval onto the oscillator's display window
pub const OSCILLATOR_WINDOW: f32 = 10.0;

/// Amplitudes below this are treated as zero when counting nodes
const NODE_EPSILON: f32 = 1e-4;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SamplerError {
    #[error("quantum number {value} is outside [{min}, {max}]")]
    QuantumNumberOutOfRange { value: u32, min: u32, max: u32 },
}

/// Potential well the particle is confined in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PotentialKind {
    #[default]
    InfiniteWell,
    HarmonicOscillator,
}

impl PotentialKind {
    pub const ALL: [PotentialKind; 2] = [PotentialKind::InfiniteWell, PotentialKind::HarmonicOscillator];

    pub fn label(&self) -> &'static str {
        match self {
            PotentialKind::InfiniteWell => "Infinite Well",
            PotentialKind::HarmonicOscillator => "Harmonic Oscillator",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            PotentialKind::InfiniteWell => PotentialKind::HarmonicOscillator,
            PotentialKind::HarmonicOscillator => PotentialKind::InfiniteWell,
        }
    }
}

impl fmt::Display for PotentialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Energy level index, always within [`MIN_QUANTUM_NUMBER`, `MAX_QUANTUM_NUMBER`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QuantumNumber(u32);

impl QuantumNumber {
    pub const GROUND: QuantumNumber = QuantumNumber(MIN_QUANTUM_NUMBER);

    pub fn new(n: u32) -> Result<Self, SamplerError> {
        if (MIN_QUANTUM_NUMBER..=MAX_QUANTUM_NUMBER).contains(&n) {
            Ok(Self(n))
        } else {
            Err(SamplerError::QuantumNumberOutOfRange {
                value: n,
                min: MIN_QUANTUM_NUMBER,
                max: MAX_QUANTUM_NUMBER,
            })
        }
    }

    /// Nearest valid quantum number, as a range slider would produce
    pub fn clamped(n: u32) -> Self {
        Self(n.clamp(MIN_QUANTUM_NUMBER, MAX_QUANTUM_NUMBER))
    }

    pub fn get(&self) -> u32 {
        self.0
    }

    pub fn increment(&self) -> Self {
        Self::clamped(self.0 + 1)
    }

    pub fn decrement(&self) -> Self {
        Self::clamped(self.0.saturating_sub(1))
    }
}

impl Default for QuantumNumber {
    fn default() -> Self {
        Self::GROUND
    }
}

impl fmt::Display for QuantumNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One point of a sampled wavefunction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Position in units of the well width, in [0, 1]
    pub position: f32,
    pub amplitude: f32,
}

impl Sample {
    /// Probability density |ψ|²
    pub fn density(&self) -> f32 {
        self.amplitude * self.amplitude
    }
}

/// Amplitude of state `n` of `kind` at position `x`.
///
/// The oscillator maps `x` onto `u = (x - 0.5) * 10` and uses the first
/// three Hermite functions. From `n = 4` on it falls back to a sine mode
/// under a wide Gaussian envelope, which only approximates the true shape.
pub fn amplitude_at(kind: PotentialKind, n: QuantumNumber, x: f32) -> f32 {
    let n_f = n.get() as f32;

    match kind {
        PotentialKind::InfiniteWell => SQRT_2 * (n_f * PI * x).sin(),
        PotentialKind::HarmonicOscillator => {
            let u = (x - 0.5) * OSCILLATOR_WINDOW;
            let gaussian = (-u * u / 2.0).exp();

            match n.get() {
                1 => gaussian,
                2 => u * gaussian,
                3 => (2.0 * u * u - 1.0) * gaussian,
                _ => (n_f * PI * x).sin() * (-u * u / 10.0).exp(),
            }
        }
    }
}

/// Sample state `n` of `kind` at `x = i / 200` for `i` in `0..=200`
pub fn generate(kind: PotentialKind, n: QuantumNumber) -> Wavefunction {
    let samples = (0..=SAMPLE_STEPS)
        .map(|i| {
            let position = i as f32 / SAMPLE_STEPS as f32;
            Sample {
                position,
                amplitude: amplitude_at(kind, n, position),
            }
        })
        .collect();

    Wavefunction { kind, n, samples }
}

/// Immutable result of one [`generate`] call
#[derive(Debug, Clone, PartialEq)]
pub struct Wavefunction {
    kind: PotentialKind,
    n: QuantumNumber,
    samples: Vec<Sample>,
}

impl Wavefunction {
    pub fn kind(&self) -> PotentialKind {
        self.kind
    }

    pub fn quantum_number(&self) -> QuantumNumber {
        self.n
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// (position, ψ) pairs
    pub fn amplitude_series(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        self.samples.iter().map(|s| (s.position, s.amplitude))
    }

    /// (position, |ψ|²) pairs from the same samples
    pub fn density_series(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        self.samples.iter().map(|s| (s.position, s.density()))
    }

    /// Number of interior sign changes of ψ
    pub fn node_count(&self) -> usize {
        let mut nodes = 0;
        let mut last_sign: Option<bool> = None;

        for sample in &self.samples {
            if sample.amplitude.abs() < NODE_EPSILON {
                continue;
            }
            let positive = sample.amplitude > 0.0;
            if last_sign.is_some_and(|prev| prev != positive) {
                nodes += 1;
            }
            last_sign = Some(positive);
        }

        nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn all_quantum_numbers() -> impl Iterator<Item = QuantumNumber> {
        (MIN_QUANTUM_NUMBER..=MAX_QUANTUM_NUMBER).map(QuantumNumber::clamped)
    }

    fn amplitude_at_index(wf: &Wavefunction, i: usize) -> f32 {
        wf.samples()[i].amplitude
    }

    #[test]
    fn quantum_number_range() {
        assert_eq!(QuantumNumber::new(1).map(|n| n.get()), Ok(1));
        assert_eq!(QuantumNumber::new(10).map(|n| n.get()), Ok(10));
        assert_eq!(
            QuantumNumber::new(0),
            Err(SamplerError::QuantumNumberOutOfRange { value: 0, min: 1, max: 10 })
        );
        assert!(QuantumNumber::new(11).is_err());

        assert_eq!(QuantumNumber::clamped(0).get(), 1);
        assert_eq!(QuantumNumber::clamped(42).get(), 10);
        assert_eq!(QuantumNumber::clamped(10).increment().get(), 10);
        assert_eq!(QuantumNumber::GROUND.decrement().get(), 1);
        assert_eq!(QuantumNumber::clamped(4).increment().get(), 5);
    }

    #[test]
    fn well_grid_is_uniform() {
        for n in all_quantum_numbers() {
            let wf = generate(PotentialKind::InfiniteWell, n);
            let samples = wf.samples();

            assert_eq!(samples.len(), SAMPLE_COUNT);
            assert_eq!(samples[0].position, 0.0);
            assert_eq!(samples[SAMPLE_STEPS].position, 1.0);

            for pair in samples.windows(2) {
                assert!(pair[1].position > pair[0].position);
                assert_abs_diff_eq!(pair[1].position - pair[0].position, 1.0 / 200.0, epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn well_ground_state_peak() {
        let wf = generate(PotentialKind::InfiniteWell, QuantumNumber::GROUND);
        assert_eq!(wf.samples()[100].position, 0.5);
        assert_abs_diff_eq!(amplitude_at_index(&wf, 100), SQRT_2, epsilon = 1e-6);
    }

    #[test]
    fn well_vanishes_at_walls() {
        for n in all_quantum_numbers() {
            let wf = generate(PotentialKind::InfiniteWell, n);
            assert_abs_diff_eq!(amplitude_at_index(&wf, 0), 0.0, epsilon = 1e-5);
            assert_abs_diff_eq!(amplitude_at_index(&wf, SAMPLE_STEPS), 0.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn oscillator_ground_state_is_symmetric_gaussian() {
        let wf = generate(PotentialKind::HarmonicOscillator, QuantumNumber::GROUND);

        assert_eq!(amplitude_at_index(&wf, 100), 1.0);
        for sample in wf.samples() {
            assert!(sample.amplitude >= 0.0);
            assert!(sample.amplitude <= 1.0);
        }
        for d in 0..=100 {
            assert_abs_diff_eq!(
                amplitude_at_index(&wf, 100 + d),
                amplitude_at_index(&wf, 100 - d),
                epsilon = 1e-5
            );
        }
    }

    #[test]
    fn oscillator_first_excited_state_is_odd() {
        let wf = generate(PotentialKind::HarmonicOscillator, QuantumNumber::clamped(2));

        assert_abs_diff_eq!(amplitude_at_index(&wf, 100), 0.0, epsilon = 1e-6);
        for d in 0..=100 {
            assert_abs_diff_eq!(
                amplitude_at_index(&wf, 100 + d),
                -amplitude_at_index(&wf, 100 - d),
                epsilon = 1e-5
            );
        }
    }

    #[test]
    fn oscillator_second_excited_state_dips_at_center() {
        let n = QuantumNumber::clamped(3);
        assert_abs_diff_eq!(amplitude_at(PotentialKind::HarmonicOscillator, n, 0.5), -1.0);
        // u = 1 at x = 0.6: (2 - 1) * e^(-1/2)
        assert_abs_diff_eq!(
            amplitude_at(PotentialKind::HarmonicOscillator, n, 0.6),
            (-0.5f32).exp(),
            epsilon = 1e-5
        );
    }

    #[test]
    fn oscillator_high_levels_use_windowed_sine() {
        let n = QuantumNumber::clamped(5);
        let x = 0.3;
        let u = (x - 0.5) * OSCILLATOR_WINDOW;
        let expected = (5.0 * PI * x).sin() * (-u * u / 10.0).exp();
        assert_eq!(amplitude_at(PotentialKind::HarmonicOscillator, n, x), expected);
    }

    #[test]
    fn generate_is_deterministic() {
        for kind in PotentialKind::ALL {
            for n in all_quantum_numbers() {
                let first = generate(kind, n);
                let second = generate(kind, n);
                assert_eq!(first, second);
                for (a, b) in first.samples().iter().zip(second.samples()) {
                    assert_eq!(a.amplitude.to_bits(), b.amplitude.to_bits());
                }
            }
        }
    }

    #[test]
    fn density_is_squared_amplitude() {
        for kind in PotentialKind::ALL {
            for n in all_quantum_numbers() {
                let wf = generate(kind, n);
                let densities: Vec<(f32, f32)> = wf.density_series().collect();
                assert_eq!(densities.len(), SAMPLE_COUNT);

                for ((x, rho), (x_psi, psi)) in densities.into_iter().zip(wf.amplitude_series()) {
                    assert_eq!(x, x_psi);
                    assert_eq!(rho, psi * psi);
                    assert!(rho >= 0.0);
                }
            }
        }
    }

    #[test]
    fn well_has_n_minus_one_nodes() {
        for n in all_quantum_numbers() {
            let wf = generate(PotentialKind::InfiniteWell, n);
            assert_eq!(wf.node_count(), n.get() as usize - 1, "n = {n}");
        }
    }

    #[test]
    fn oscillator_low_level_nodes() {
        let nodes = |n| generate(PotentialKind::HarmonicOscillator, QuantumNumber::clamped(n)).node_count();
        assert_eq!(nodes(1), 0);
        assert_eq!(nodes(2), 1);
        assert_eq!(nodes(3), 2);
    }

    #[test]
    fn potential_toggle_round_trips() {
        for kind in PotentialKind::ALL {
            assert_ne!(kind.toggle(), kind);
            assert_eq!(kind.toggle().toggle(), kind);
        }
        assert_eq!(PotentialKind::default(), PotentialKind::InfiniteWell);
    }
}
