//! Tipos de erro para bloch-quantum

use thiserror::Error;

/// Resultado customizado para operações quânticas
pub type QuantumResult<T> = Result<T, QuantumError>;

/// Erros que podem ocorrer em operações quânticas
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuantumError {
    /// Chave fora do registro de portas. Violação de pré-condição do
    /// chamador: chaves válidas vêm de `list_gates()`.
    #[error("Unknown gate: '{0}' (expected one of I, X, Y, Z, H, S, T)")]
    UnknownGate(String),
}
