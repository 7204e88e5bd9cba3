use crate::core::data::complex::Complex;
use std::collections::BTreeMap;
use std::fmt;

/// A term of the control panel: one slider value plus its enable switch.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CoefficientTerm {
    pub degree: u32,
    pub value: f64,
    pub enabled: bool,
}

/// Sparse polynomial: degree to real coefficient. Missing degrees are zero.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polynomial {
    coefficients: BTreeMap<u32, f64>,
}

impl Polynomial {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a polynomial from `(degree, coefficient)` pairs. Zero
    /// coefficients are not stored.
    #[must_use]
    pub fn from_coefficients<I>(coefficients: I) -> Self
    where
        I: IntoIterator<Item = (u32, f64)>,
    {
        Self {
            coefficients: coefficients
                .into_iter()
                .filter(|&(_, value)| value != 0.0)
                .collect(),
        }
    }

    /// Builds a polynomial from control-panel terms. Disabled terms count
    /// as zero, matching the slider enable switches.
    #[must_use]
    pub fn from_terms(terms: &[CoefficientTerm]) -> Self {
        Self::from_coefficients(
            terms
                .iter()
                .filter(|term| term.enabled)
                .map(|term| (term.degree, term.value)),
        )
    }

    #[must_use]
    pub fn coefficient(&self, degree: u32) -> f64 {
        self.coefficients.get(&degree).copied().unwrap_or(0.0)
    }

    /// The y-intercept. Drives the two-region fill threshold.
    #[must_use]
    pub fn constant_term(&self) -> f64 {
        self.coefficient(0)
    }

    /// Full evaluation: sum of `coefficient * z^degree` over every stored
    /// degree.
    #[must_use]
    pub fn eval(&self, z: Complex) -> Complex {
        self.coefficients
            .iter()
            .fold(Complex::ZERO, |sum, (&degree, &coefficient)| {
                sum + z.powu(degree) * coefficient
            })
    }

    /// The textual rendering shown in the control panel output box:
    /// `f(x) = 0` when empty, otherwise terms joined by ` + ` in ascending
    /// degree, each coefficient to two decimal places.
    #[must_use]
    pub fn expression(&self) -> String {
        format!("f(x) = {}", self)
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.coefficients.is_empty() {
            return write!(f, "0");
        }

        let terms: Vec<String> = self
            .coefficients
            .iter()
            .map(|(&degree, &coefficient)| match degree {
                0 => format!("{:.2}", coefficient),
                1 => format!("{:.2}x", coefficient),
                _ => format!("{:.2}x^{}", coefficient, degree),
            })
            .collect();

        write!(f, "{}", terms.join(" + "))
    }
}
