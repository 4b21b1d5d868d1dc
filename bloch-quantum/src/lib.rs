//! # ⚛️ bloch-quantum — Single-qubit state algebra
//!
//! Representa um qubit como duas amplitudes complexas, projeta o estado na
//! esfera de Bloch e aplica as portas fixas do registro `{I, X, Y, Z, H, S, T}`.
//!
//! ## Computational Complexity
//!
//! Todas as operações são O(1): matrizes 2x2 fixas sobre valores `Copy`.
//! Não há estado compartilhado nem I/O; tudo é `Send + Sync`.
//!
//! ## Arquitetura
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │          QuantumState (a, b)                    │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  Gate registry  I X Y Z H S T             │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  Complex arithmetic                       │  │
//! │  └───────────────────────────────────────────┘  │
//! │                    │ to_coordinates            │
//! │                    ▼                            │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  BlochVector (x, y, z) → renderer         │  │
//! │  └───────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! ## Exemplo
//!
//! ```
//! use bloch_quantum::{QuantumState, BasisLabel};
//!
//! let state = QuantumState::initial().apply_gate("H").unwrap();
//! let v = state.to_coordinates();
//! assert!(v.z.abs() < 1e-12);
//! assert_eq!(v.nearest_label(), BasisLabel::Plus);
//! ```

pub mod bloch;
pub mod complex;
pub mod error;
pub mod gates;
pub mod state;

pub use bloch::{BasisLabel, BlochAngles, BlochVector, MAX_RENDER_RADIUS, MIN_RENDER_RADIUS};
pub use complex::Complex;
pub use error::{QuantumError, QuantumResult};
pub use gates::{Gate, GateInfo, Matrix2x2, list_gates};
pub use state::QuantumState;
