//! Estado de um qubit: `a|0⟩ + b|1⟩`
//!
//! Invariante assumida (não imposta): `|a|² + |b|² = 1`. Não há
//! renormalização após aplicar portas; como todas são unitárias a norma é
//! preservada analiticamente, mas o erro de ponto flutuante acumulado não é
//! corrigido.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::bloch::BlochVector;
use crate::complex::Complex;
use crate::error::QuantumResult;
use crate::gates::Gate;

/// Estado quântico single-qubit
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuantumState {
    /// Amplitude de |0⟩
    pub a: Complex,
    /// Amplitude de |1⟩
    pub b: Complex,
}

impl Default for QuantumState {
    fn default() -> Self {
        Self::initial()
    }
}

impl QuantumState {
    /// Cria estado a partir das amplitudes
    pub const fn new(a: Complex, b: Complex) -> Self {
        Self { a, b }
    }

    /// Estado |0⟩, alvo de reset
    pub const fn initial() -> Self {
        Self {
            a: Complex::ONE,
            b: Complex::ZERO,
        }
    }

    /// Vetor de Bloch: com `c = conj(a)·b`,
    /// `x = 2·Re(c)`, `y = 2·Im(c)`, `z = |a|² − |b|²`.
    pub fn to_coordinates(&self) -> BlochVector {
        let c = self.a.conjugate().multiply(self.b);

        BlochVector {
            x: 2.0 * c.re,
            y: 2.0 * c.im,
            z: self.a.norm_sqr() - self.b.norm_sqr(),
        }
    }

    /// Aplica uma porta do registro
    pub fn apply(&self, gate: Gate) -> Self {
        let [a, b] = gate.matrix().apply([self.a, self.b]);
        debug!(gate = gate.key(), "applied gate");
        Self { a, b }
    }

    /// Aplica a porta de chave `key`. Chave fora do registro é erro
    /// `UnknownGate`; o estado nunca é devolvido inalterado nesse caso.
    pub fn apply_gate(&self, key: &str) -> QuantumResult<Self> {
        Ok(self.apply(Gate::from_key(key)?))
    }

    /// Aplica uma sequência de chaves em ordem; para na primeira inválida
    pub fn apply_sequence<I, S>(&self, keys: I) -> QuantumResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        keys.into_iter()
            .try_fold(*self, |state, key| state.apply_gate(key.as_ref()))
    }

    /// `|a|² + |b|²`
    pub fn norm_sqr(&self) -> f64 {
        self.a.norm_sqr() + self.b.norm_sqr()
    }

    /// Verifica normalização dentro da tolerância
    pub fn is_normalized(&self, tolerance: f64) -> bool {
        (self.norm_sqr() - 1.0).abs() < tolerance
    }

    /// Probabilidades de medida (|a|², |b|²)
    pub fn probabilities(&self) -> (f64, f64) {
        (self.a.norm_sqr(), self.b.norm_sqr())
    }

    /// Compara amplitudes com tolerância absoluta
    pub fn approx_eq(&self, other: &QuantumState, tolerance: f64) -> bool {
        self.a.approx_eq(other.a, tolerance) && self.b.approx_eq(other.b, tolerance)
    }
}

impl fmt::Display for QuantumState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a = {}, b = {}", self.a, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QuantumError;
    use std::f64::consts::FRAC_1_SQRT_2;

    #[test]
    fn test_initial_is_zero_ket() {
        let s = QuantumState::initial();
        assert_eq!(s.a, Complex::new(1.0, 0.0));
        assert_eq!(s.b, Complex::new(0.0, 0.0));
        assert_eq!(QuantumState::default(), s);
    }

    #[test]
    fn test_initial_coordinates() {
        let v = QuantumState::initial().to_coordinates();
        assert_eq!(v, BlochVector::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_x_on_initial() {
        let s = QuantumState::initial().apply_gate("X").unwrap();
        assert_eq!(s.a, Complex::ZERO);
        assert_eq!(s.b, Complex::ONE);
        assert_eq!(s.to_coordinates(), BlochVector::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_h_on_initial_lands_on_equator() {
        let s = QuantumState::initial().apply_gate("H").unwrap();
        assert!((s.a.re - FRAC_1_SQRT_2).abs() < 1e-12);
        assert!((s.b.re - FRAC_1_SQRT_2).abs() < 1e-12);
        assert!(s.a.im.abs() < 1e-12 && s.b.im.abs() < 1e-12);

        let v = s.to_coordinates();
        assert!(v.z.abs() < 1e-12);
        assert!((v.x - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_identity_exact() {
        let s = QuantumState::new(Complex::new(0.6, 0.0), Complex::new(0.0, 0.8));
        assert_eq!(s.apply_gate("I").unwrap(), s);
    }

    #[test]
    fn test_phase_gates_leave_initial_in_place() {
        let start = QuantumState::initial().to_coordinates();
        for key in ["Z", "S", "T"] {
            let v = QuantumState::initial().apply_gate(key).unwrap().to_coordinates();
            assert!(v.distance(&start) < 1e-12, "{key} moved |0⟩");
        }
    }

    #[test]
    fn test_y_on_initial() {
        // Y|0⟩ = i|1⟩
        let s = QuantumState::initial().apply_gate("Y").unwrap();
        assert!(s.a.approx_eq(Complex::ZERO, 1e-12));
        assert!(s.b.approx_eq(Complex::I, 1e-12));
    }

    #[test]
    fn test_s_rotates_plus_to_plus_i() {
        let v = QuantumState::initial()
            .apply_sequence(["H", "S"])
            .unwrap()
            .to_coordinates();
        assert!((v.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_unknown_gate_fails() {
        let s = QuantumState::initial();
        assert_eq!(
            s.apply_gate("Q"),
            Err(QuantumError::UnknownGate("Q".to_string()))
        );
    }

    #[test]
    fn test_sequence_stops_at_unknown() {
        let result = QuantumState::initial().apply_sequence(["H", "nope", "X"]);
        assert_eq!(result, Err(QuantumError::UnknownGate("nope".to_string())));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            QuantumState::initial().to_string(),
            "a = 1.0000 + 0.0000i, b = 0.0000 + 0.0000i"
        );
    }

    #[test]
    fn test_probabilities() {
        let (p0, p1) = QuantumState::initial().apply(Gate::H).probabilities();
        assert!((p0 - 0.5).abs() < 1e-12);
        assert!((p1 - 0.5).abs() < 1e-12);
    }
}
