//! Números complexos para amplitudes de qubit
//!
//! Tipo de valor imutável: toda operação devolve um novo `Complex`.
//! O comportamento com NaN/infinito não é tratado.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// Número complexo `re + im·i`
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    /// Zero complexo
    pub const ZERO: Self = Self { re: 0.0, im: 0.0 };

    /// Um complexo
    pub const ONE: Self = Self { re: 1.0, im: 0.0 };

    /// Unidade imaginária
    pub const I: Self = Self { re: 0.0, im: 1.0 };

    /// Cria número complexo
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Número real puro
    pub const fn real(re: f64) -> Self {
        Self { re, im: 0.0 }
    }

    /// Exponencial complexa: e^(i*theta)
    pub fn from_polar(theta: f64) -> Self {
        Self {
            re: theta.cos(),
            im: theta.sin(),
        }
    }

    /// Multiplicação
    pub fn multiply(self, other: Self) -> Self {
        Self {
            re: self.re * other.re - self.im * other.im,
            im: self.re * other.im + self.im * other.re,
        }
    }

    /// Adição
    #[allow(clippy::should_implement_trait)]
    pub fn add(self, other: Self) -> Self {
        Self {
            re: self.re + other.re,
            im: self.im + other.im,
        }
    }

    /// Conjugado
    pub fn conjugate(self) -> Self {
        Self {
            re: self.re,
            im: -self.im,
        }
    }

    /// Módulo ao quadrado
    pub fn norm_sqr(self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// Módulo, sempre >= 0
    pub fn magnitude(self) -> f64 {
        self.norm_sqr().sqrt()
    }

    /// Multiplicação por escalar
    pub fn scale(self, s: f64) -> Self {
        Self {
            re: self.re * s,
            im: self.im * s,
        }
    }

    /// Compara componente a componente com tolerância absoluta
    pub fn approx_eq(self, other: Self, tolerance: f64) -> bool {
        (self.re - other.re).abs() <= tolerance && (self.im - other.im).abs() <= tolerance
    }
}

/// Zero com sinal é exibido como `0`
fn unsigned_zero(v: f64) -> f64 {
    if v == 0.0 { 0.0 } else { v }
}

/// Formato `"<re> + <im>i"` com 4 casas decimais; parte imaginária negativa
/// vira `" - <|im|>i"`.
impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.im >= 0.0 { '+' } else { '-' };
        write!(
            f,
            "{:.4} {} {:.4}i",
            unsigned_zero(self.re),
            sign,
            unsigned_zero(self.im.abs())
        )
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Complex::add(self, rhs)
    }
}

impl Sub for Complex {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Complex::add(self, -rhs)
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(rhs)
    }
}

impl Mul<f64> for Complex {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        self.scale(rhs)
    }
}

impl Neg for Complex {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            re: -self.re,
            im: -self.im,
        }
    }
}

impl From<num_complex::Complex64> for Complex {
    fn from(c: num_complex::Complex64) -> Self {
        Self { re: c.re, im: c.im }
    }
}

impl From<Complex> for num_complex::Complex64 {
    fn from(c: Complex) -> Self {
        num_complex::Complex64::new(c.re, c.im)
    }
}
