//! Interactive session: holds the current qubit state between commands

use bloch_quantum::{
    BasisLabel, BlochAngles, BlochVector, Gate, QuantumResult, QuantumState,
};
use serde::Serialize;
use tracing::info;

/// View-level memory. The state is replaced wholesale on every gate and
/// never persisted.
#[derive(Debug, Clone, Default)]
pub struct Session {
    state: QuantumState,
    applied: Vec<Gate>,
}

/// What the viewer draws after each change
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub state: QuantumState,
    pub coordinates: BlochVector,
    pub render_frame: [f64; 3],
    pub angles: BlochAngles,
    pub nearest: BasisLabel,
    pub probabilities: (f64, f64),
    pub applied: Vec<Gate>,
}

/// One line of REPL input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Apply(Vec<String>),
    Reset,
    Gates,
    State,
    Help,
    Quit,
    Empty,
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let mut words = line.split_whitespace().peekable();
        let Some(&first) = words.peek() else {
            return Self::Empty;
        };

        match first {
            "reset" => Self::Reset,
            "gates" => Self::Gates,
            "state" => Self::State,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            _ => Self::Apply(words.map(str::to_string).collect()),
        }
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a gate by key. On error the current state is left untouched.
    pub fn apply(&mut self, key: &str) -> QuantumResult<BlochVector> {
        let gate = Gate::from_key(key)?;
        self.push(gate);
        Ok(self.state.to_coordinates())
    }

    /// Apply keys in order. All keys are validated first so a bad key in
    /// the middle does not leave a half-applied sequence.
    pub fn apply_all<S: AsRef<str>>(&mut self, keys: &[S]) -> QuantumResult<BlochVector> {
        let gates = keys
            .iter()
            .map(|k| Gate::from_key(k.as_ref()))
            .collect::<QuantumResult<Vec<_>>>()?;

        gates.into_iter().for_each(|gate| self.push(gate));
        Ok(self.state.to_coordinates())
    }

    fn push(&mut self, gate: Gate) {
        self.state = self.state.apply(gate);
        self.applied.push(gate);
    }

    /// Back to |0⟩
    pub fn reset(&mut self) {
        info!(applied = self.applied.len(), "session reset");
        self.state = QuantumState::initial();
        self.applied.clear();
    }

    pub fn snapshot(&self) -> Snapshot {
        let coordinates = self.state.to_coordinates();
        Snapshot {
            state: self.state,
            coordinates,
            render_frame: coordinates.normalized().to_render_frame(),
            angles: coordinates.to_angles(),
            nearest: coordinates.nearest_label(),
            probabilities: self.state.probabilities(),
            applied: self.applied.clone(),
        }
    }
}
