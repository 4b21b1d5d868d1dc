//! # Quantum Gates — Registro fixo de portas single-qubit
//!
//! O registro contém exatamente `I, X, Y, Z, H, S, T`, nesta ordem. Cada
//! porta carrega nome de exibição, matriz 2x2 constante e uma cor sugerida
//! para os controles de seleção.
//!
//! Todas as matrizes são unitárias: aplicar qualquer sequência preserva
//! `|a|² + |b|²` em aritmética exata.

use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_4};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

use crate::complex::Complex;
use crate::error::QuantumError;

/// Matriz 2x2 complexa para gates single-qubit
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix2x2 {
    /// Elementos: [[a, b], [c, d]]
    pub elements: [[Complex; 2]; 2],
}

impl Matrix2x2 {
    /// Cria matriz identidade
    pub const fn identity() -> Self {
        Self {
            elements: [
                [Complex::ONE, Complex::ZERO],
                [Complex::ZERO, Complex::ONE],
            ],
        }
    }

    /// Aplica a um par de amplitudes [alpha, beta]
    pub fn apply(&self, state: [Complex; 2]) -> [Complex; 2] {
        let [alpha, beta] = state;
        let [[a, b], [c, d]] = self.elements;

        [
            a.multiply(alpha).add(b.multiply(beta)),
            c.multiply(alpha).add(d.multiply(beta)),
        ]
    }

    /// Multiplicação de matrizes
    pub fn mul(&self, other: &Matrix2x2) -> Matrix2x2 {
        let [[a, b], [c, d]] = self.elements;
        let [[e, f], [g, h]] = other.elements;

        Matrix2x2 {
            elements: [
                [
                    a.multiply(e).add(b.multiply(g)),
                    a.multiply(f).add(b.multiply(h)),
                ],
                [
                    c.multiply(e).add(d.multiply(g)),
                    c.multiply(f).add(d.multiply(h)),
                ],
            ],
        }
    }

    /// Transposta conjugada (dagger)
    pub fn dagger(&self) -> Matrix2x2 {
        let [[a, b], [c, d]] = self.elements;
        Matrix2x2 {
            elements: [
                [a.conjugate(), c.conjugate()],
                [b.conjugate(), d.conjugate()],
            ],
        }
    }

    /// Verifica se M·M† = I dentro da tolerância
    pub fn is_unitary(&self, tolerance: f64) -> bool {
        let product = self.mul(&self.dagger());
        let identity = Matrix2x2::identity();

        product
            .elements
            .iter()
            .flatten()
            .zip(identity.elements.iter().flatten())
            .all(|(p, i)| p.approx_eq(*i, tolerance))
    }
}

/// Porta do registro
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gate {
    /// Identidade
    I,
    /// Pauli-X (NOT quântico)
    X,
    /// Pauli-Y
    Y,
    /// Pauli-Z (phase flip)
    Z,
    /// Hadamard: cria superposição
    H,
    /// S (√Z)
    S,
    /// T (π/8)
    T,
}

impl Gate {
    /// Registro em ordem de inserção
    pub const ALL: [Gate; 7] = [
        Gate::I,
        Gate::X,
        Gate::Y,
        Gate::Z,
        Gate::H,
        Gate::S,
        Gate::T,
    ];

    /// Chave do registro
    pub fn key(self) -> &'static str {
        match self {
            Self::I => "I",
            Self::X => "X",
            Self::Y => "Y",
            Self::Z => "Z",
            Self::H => "H",
            Self::S => "S",
            Self::T => "T",
        }
    }

    /// Nome de exibição
    pub fn name(self) -> &'static str {
        match self {
            Self::I => "Identity",
            Self::X => "Pauli-X",
            Self::Y => "Pauli-Y",
            Self::Z => "Pauli-Z",
            Self::H => "Hadamard",
            Self::S => "S",
            Self::T => "T(π/8)",
        }
    }

    /// Cor sugerida (hex CSS)
    pub fn color(self) -> &'static str {
        match self {
            Self::I => "#6b7280",
            Self::X => "#ef4444",
            Self::Y => "#f59e0b",
            Self::Z => "#3b82f6",
            Self::H => "#10b981",
            Self::S => "#8b5cf6",
            Self::T => "#f97316",
        }
    }

    /// Matriz da porta
    pub fn matrix(self) -> Matrix2x2 {
        let elements = match self {
            Self::I => Matrix2x2::identity().elements,
            Self::X => [
                [Complex::ZERO, Complex::ONE],
                [Complex::ONE, Complex::ZERO],
            ],
            Self::Y => [
                [Complex::ZERO, Complex::new(0.0, -1.0)],
                [Complex::I, Complex::ZERO],
            ],
            Self::Z => [
                [Complex::ONE, Complex::ZERO],
                [Complex::ZERO, Complex::real(-1.0)],
            ],
            Self::H => {
                let h = FRAC_1_SQRT_2;
                [
                    [Complex::real(h), Complex::real(h)],
                    [Complex::real(h), Complex::real(-h)],
                ]
            }
            Self::S => [
                [Complex::ONE, Complex::ZERO],
                [Complex::ZERO, Complex::I],
            ],
            Self::T => [
                [Complex::ONE, Complex::ZERO],
                [Complex::ZERO, Complex::from_polar(FRAC_PI_4)],
            ],
        };
        Matrix2x2 { elements }
    }

    /// Procura a porta pela chave exata (sensível a maiúsculas).
    /// Todo caminho que aceita chaves passa por aqui, inclusive o aviso de
    /// chave desconhecida.
    pub fn from_key(key: &str) -> Result<Self, QuantumError> {
        Self::ALL
            .into_iter()
            .find(|g| g.key() == key)
            .ok_or_else(|| {
                warn!(key, "unknown gate requested");
                QuantumError::UnknownGate(key.to_string())
            })
    }

    /// Metadados para controles de seleção
    pub fn info(self) -> GateInfo {
        GateInfo {
            key: self.key(),
            name: self.name(),
            color: self.color(),
        }
    }
}

impl FromStr for Gate {
    type Err = QuantumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s)
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Entrada de `list_gates()`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct GateInfo {
    pub key: &'static str,
    pub name: &'static str,
    pub color: &'static str,
}

/// Lista o registro em ordem estável
pub fn list_gates() -> impl Iterator<Item = GateInfo> {
    Gate::ALL.into_iter().map(Gate::info)
}

// =============================================================================
// Testes
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_all_gates_unitary() {
        for gate in Gate::ALL {
            assert!(gate.matrix().is_unitary(1e-12), "{} is not unitary", gate);
        }
    }

    #[test]
    fn test_identity_matrix_exact() {
        assert_eq!(Gate::I.matrix(), Matrix2x2::identity());
    }

    #[test]
    fn test_registry_order() {
        let keys: Vec<_> = list_gates().map(|g| g.key).collect();
        assert_eq!(keys, ["I", "X", "Y", "Z", "H", "S", "T"]);
    }

    #[test]
    fn test_registry_names() {
        let names: Vec<_> = list_gates().map(|g| g.name).collect();
        assert_eq!(
            names,
            ["Identity", "Pauli-X", "Pauli-Y", "Pauli-Z", "Hadamard", "S", "T(π/8)"]
        );
    }

    #[test]
    fn test_from_key_roundtrip() {
        for gate in Gate::ALL {
            assert_eq!(Gate::from_key(gate.key()), Ok(gate));
            assert_eq!(gate.key().parse::<Gate>(), Ok(gate));
        }
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(
            Gate::from_key("CNOT"),
            Err(QuantumError::UnknownGate("CNOT".to_string()))
        );
        assert!(Gate::from_key("h").is_err());
        assert!(Gate::from_key("").is_err());
    }

    /// Coleta a saída do subscriber de teste
    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn captured_logs<F: FnOnce()>(f: F) -> String {
        let buffer = LogBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = buffer.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_unknown_key_logs_warning() {
        let logs = captured_logs(|| {
            assert!(Gate::from_key("CNOT").is_err());
        });
        assert!(logs.contains("unknown gate requested"), "logs: {logs}");
        assert!(logs.contains("CNOT"));
    }

    #[test]
    fn test_known_key_logs_nothing() {
        let logs = captured_logs(|| {
            assert_eq!(Gate::from_key("H"), Ok(Gate::H));
        });
        assert!(logs.is_empty(), "logs: {logs}");
    }

    #[test]
    fn test_s_squared_is_z() {
        let s2 = Gate::S.matrix().mul(&Gate::S.matrix());
        let z = Gate::Z.matrix();

        for (a, b) in s2.elements.iter().flatten().zip(z.elements.iter().flatten()) {
            assert!(a.approx_eq(*b, 1e-12));
        }
    }

    #[test]
    fn test_t_squared_is_s() {
        let t2 = Gate::T.matrix().mul(&Gate::T.matrix());
        let s = Gate::S.matrix();

        for (a, b) in t2.elements.iter().flatten().zip(s.elements.iter().flatten()) {
            assert!(a.approx_eq(*b, 1e-12));
        }
    }

    #[test]
    fn test_pauli_x_flips() {
        let result = Gate::X.matrix().apply([Complex::ONE, Complex::ZERO]);

        // X|0⟩ = |1⟩
        assert_eq!(result, [Complex::ZERO, Complex::ONE]);
    }

    #[test]
    fn test_pauli_z_phase() {
        let result = Gate::Z.matrix().apply([Complex::ZERO, Complex::ONE]);

        // Z|1⟩ = -|1⟩
        assert!(result[0].norm_sqr() < 1e-10);
        assert!((result[1].re + 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_non_unitary_detected() {
        let m = Matrix2x2 {
            elements: [
                [Complex::ONE, Complex::ONE],
                [Complex::ZERO, Complex::ONE],
            ],
        };
        assert!(!m.is_unitary(1e-10));
    }
}
