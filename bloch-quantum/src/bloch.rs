//! Geometria da esfera de Bloch
//!
//! Convenção fixa de eixos:
//!
//! ```text
//!                +z  |0⟩
//!                 │
//!                 │    +y |i⟩
//!                 │  ╱
//!                 │╱
//!   -x |-⟩ ───────●─────── +x |+⟩
//!               ╱ │
//!             ╱   │
//!   -y |-i⟩       │
//!                -z  |1⟩
//! ```
//!
//! Para motores 3D com eixo "para cima" em Y, use
//! [`BlochVector::to_render_frame`].

use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_1_SQRT_2, PI};
use std::fmt;

use crate::complex::Complex;
use crate::state::QuantumState;

/// Menor raio aceito pela projeção ASCII
pub const MIN_RENDER_RADIUS: usize = 2;

/// Maior raio aceito pela projeção ASCII; valores acima são truncados
pub const MAX_RENDER_RADIUS: usize = 64;

/// Ponto na esfera de Bloch em coordenadas cartesianas
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlochVector {
    pub x: f64,
    pub y: f64,
    /// +z é |0⟩, -z é |1⟩
    pub z: f64,
}

/// Ângulos esféricos
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlochAngles {
    /// Ângulo polar θ ∈ [0, π]
    pub theta: f64,
    /// Ângulo azimutal φ ∈ [0, 2π)
    pub phi: f64,
}

impl BlochVector {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Norma euclidiana
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Renormaliza para a superfície da esfera. O vetor nulo é devolvido
    /// sem alteração.
    pub fn normalized(&self) -> Self {
        let r = self.magnitude();
        if r < 1e-12 {
            return *self;
        }
        Self {
            x: self.x / r,
            y: self.y / r,
            z: self.z / r,
        }
    }

    /// Estado puro: norma ≈ 1
    pub fn is_pure(&self, tolerance: f64) -> bool {
        (self.magnitude() - 1.0).abs() < tolerance
    }

    /// Converte para coordenadas esféricas
    pub fn to_angles(&self) -> BlochAngles {
        let r = self.magnitude();
        if r < 1e-10 {
            return BlochAngles { theta: 0.0, phi: 0.0 };
        }

        let theta = (self.z / r).clamp(-1.0, 1.0).acos();
        let phi = self.y.atan2(self.x);
        let phi = if phi < 0.0 { phi + 2.0 * PI } else { phi };

        BlochAngles { theta, phi }
    }

    /// Coordenadas para motores com eixo Y para cima: `(x, z, y)`,
    /// deixando |0⟩ no topo da cena.
    pub fn to_render_frame(&self) -> [f64; 3] {
        [self.x, self.z, self.y]
    }

    /// Produto escalar
    pub fn dot(&self, other: &BlochVector) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Distância euclidiana
    pub fn distance(&self, other: &BlochVector) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Rótulo de base mais próximo (maior produto escalar)
    pub fn nearest_label(&self) -> BasisLabel {
        let mut best = BasisLabel::Zero;
        let mut best_dot = f64::NEG_INFINITY;
        for label in BasisLabel::ALL {
            let d = self.dot(&label.point());
            if d > best_dot {
                best = label;
                best_dot = d;
            }
        }
        best
    }

    /// Rótulo exato, se o vetor estiver a menos de `tolerance` de um dos seis pontos
    pub fn exact_label(&self, tolerance: f64) -> Option<BasisLabel> {
        BasisLabel::ALL
            .into_iter()
            .find(|label| self.distance(&label.point()) < tolerance)
    }

    /// Projeção ASCII (planos XZ e XY). `radius` é limitado a
    /// `MIN_RENDER_RADIUS..=MAX_RENDER_RADIUS`.
    pub fn render_ascii(&self, radius: usize) -> String {
        let mut out = String::new();
        out.push_str("Side View (XZ plane):\n");
        out.push_str(&render_plane(self.x, self.z, radius, ("|-⟩", "|+⟩"), ("|0⟩", "|1⟩")));
        out.push('\n');
        out.push_str("Top View (XY plane):\n");
        out.push_str(&render_plane(self.x, self.y, radius, ("|-⟩", "|+⟩"), ("|i⟩", "|-i⟩")));
        out
    }
}

impl fmt::Display for BlochVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4}, {:.4})", self.x, self.y, self.z)
    }
}

/// Desenha um círculo de raio `radius` com o ponto `(h, v)` projetado.
/// `h_labels` = (esquerda, direita), `v_labels` = (topo, base).
fn render_plane(
    h: f64,
    v: f64,
    radius: usize,
    h_labels: (&str, &str),
    v_labels: (&str, &str),
) -> String {
    let clamped = radius.clamp(MIN_RENDER_RADIUS, MAX_RENDER_RADIUS);
    let r = i32::try_from(clamped).unwrap_or(MAX_RENDER_RADIUS as i32);
    let width = (4 * r + 1) as usize;
    let height = (2 * r + 1) as usize;
    let mut grid = vec![vec![' '; width]; height];

    // Células de terminal são ~2x mais altas que largas
    let to_cell = |h: f64, v: f64| -> (usize, usize) {
        let col = (2.0 * r as f64 * (1.0 + h)).round() as i32;
        let row = (r as f64 * (1.0 - v)).round() as i32;
        (
            row.clamp(0, height as i32 - 1) as usize,
            col.clamp(0, width as i32 - 1) as usize,
        )
    };

    for step in 0..360 {
        let rad = (step as f64).to_radians();
        let (row, col) = to_cell(rad.cos(), rad.sin());
        grid[row][col] = '·';
    }
    for col in 0..width {
        grid[r as usize][col] = '─';
    }
    for row in grid.iter_mut() {
        row[2 * r as usize] = '│';
    }
    grid[r as usize][2 * r as usize] = '┼';

    let (row, col) = to_cell(h, v);
    grid[row][col] = '●';

    let mut out = String::new();
    out.push_str(&format!("{:^width$}\n", v_labels.0, width = width));
    for row in grid {
        out.push_str(&format!("{:>4} ", ""));
        out.extend(row);
        out.push('\n');
    }
    out.push_str(&format!("{:^width$}\n", v_labels.1, width = width));
    out.push_str(&format!("{:<4} {:>width$}\n", h_labels.0, h_labels.1, width = width));
    out
}

/// Os seis pontos rotulados da esfera
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BasisLabel {
    /// |0⟩, +z
    Zero,
    /// |1⟩, -z
    One,
    /// |+⟩, +x
    Plus,
    /// |-⟩, -x
    Minus,
    /// |i⟩, +y
    PlusI,
    /// |-i⟩, -y
    MinusI,
}

impl BasisLabel {
    pub const ALL: [BasisLabel; 6] = [
        BasisLabel::Zero,
        BasisLabel::One,
        BasisLabel::Plus,
        BasisLabel::Minus,
        BasisLabel::PlusI,
        BasisLabel::MinusI,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Zero => "|0⟩",
            Self::One => "|1⟩",
            Self::Plus => "|+⟩",
            Self::Minus => "|-⟩",
            Self::PlusI => "|i⟩",
            Self::MinusI => "|-i⟩",
        }
    }

    /// Ponto na esfera sob a convenção fixa
    pub fn point(self) -> BlochVector {
        match self {
            Self::Zero => BlochVector::new(0.0, 0.0, 1.0),
            Self::One => BlochVector::new(0.0, 0.0, -1.0),
            Self::Plus => BlochVector::new(1.0, 0.0, 0.0),
            Self::Minus => BlochVector::new(-1.0, 0.0, 0.0),
            Self::PlusI => BlochVector::new(0.0, 1.0, 0.0),
            Self::MinusI => BlochVector::new(0.0, -1.0, 0.0),
        }
    }

    /// Estado canônico com este rótulo
    pub fn state(self) -> QuantumState {
        let h = FRAC_1_SQRT_2;
        let (a, b) = match self {
            Self::Zero => (Complex::ONE, Complex::ZERO),
            Self::One => (Complex::ZERO, Complex::ONE),
            Self::Plus => (Complex::real(h), Complex::real(h)),
            Self::Minus => (Complex::real(h), Complex::real(-h)),
            Self::PlusI => (Complex::real(h), Complex::new(0.0, h)),
            Self::MinusI => (Complex::real(h), Complex::new(0.0, -h)),
        };
        QuantumState::new(a, b)
    }
}

impl fmt::Display for BasisLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
