//! Ordinary least squares regression.
//!
//! Columns are centered and scaled before the normal equations are solved,
//! so features with very different magnitudes (share volume next to prices)
//! do not wreck the conditioning. Coefficients are reported in the original
//! feature units.

use ndarray::{Array1, Array2, Axis};
use thiserror::Error;

/// Diagonal jitter added to the scaled Gram matrix so collinear designs still factor.
const JITTER: f64 = 1e-10;

#[derive(Error, Debug)]
pub enum LinearRegressionError {
    #[error("Matrix is singular and cannot be inverted")]
    SingularMatrix,

    #[error("Dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("Cannot fit on an empty dataset")]
    EmptyInput,

    #[error("Model has not been fitted yet")]
    NotFitted,
}

#[derive(Debug, Clone, Default)]
pub struct LinearRegression {
    pub coefficients: Option<Array1<f64>>,
    pub intercept: Option<f64>,
    pub feature_names: Option<Vec<String>>,
}

impl LinearRegression {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_feature_names<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.feature_names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    pub fn fit(&mut self, x: &Array2<f64>, y: &Array1<f64>) -> Result<(), LinearRegressionError> {
        if x.nrows() != y.len() {
            return Err(LinearRegressionError::DimensionMismatch {
                expected: x.nrows(),
                got: y.len(),
            });
        }
        let n = x.nrows() as f64;
        let means = x.mean_axis(Axis(0)).ok_or(LinearRegressionError::EmptyInput)?;
        let y_mean = y.mean().ok_or(LinearRegressionError::EmptyInput)?;

        let centered = x - &means;
        let scales = centered
            .mapv(|v| v * v)
            .mean_axis(Axis(0))
            .ok_or(LinearRegressionError::EmptyInput)?
            .mapv(|var| {
                let s = var.sqrt();
                if s > 0.0 && s.is_finite() { s } else { 1.0 }
            });
        let z = centered / &scales;
        let yc = y - y_mean;

        let mut gram = z.t().dot(&z) / n;
        for i in 0..gram.nrows() {
            gram[[i, i]] += JITTER;
        }
        let rhs = z.t().dot(&yc) / n;

        let beta = cholesky_solve(&gram, &rhs)?;
        let coefficients = beta / &scales;
        self.intercept = Some(y_mean - coefficients.dot(&means));
        self.coefficients = Some(coefficients);

        Ok(())
    }

    pub fn predict(&self, x: &Array2<f64>) -> Result<Array1<f64>, LinearRegressionError> {
        let coefficients = self
            .coefficients
            .as_ref()
            .ok_or(LinearRegressionError::NotFitted)?;
        let intercept = self.intercept.ok_or(LinearRegressionError::NotFitted)?;

        if x.ncols() != coefficients.len() {
            return Err(LinearRegressionError::DimensionMismatch {
                expected: coefficients.len(),
                got: x.ncols(),
            });
        }

        Ok(x.dot(coefficients) + intercept)
    }

    pub fn summary(&self) -> String {
        let Some(coef) = self.coefficients.as_ref() else {
            return "Model not fitted yet.".to_string();
        };

        let mut s = format!("Intercept: {:.6}\nCoefficients:\n", self.intercept.unwrap_or(0.0));
        for (i, c) in coef.iter().enumerate() {
            let name = self
                .feature_names
                .as_ref()
                .and_then(|names| names.get(i).cloned())
                .unwrap_or_else(|| format!("Feature {}", i));
            s.push_str(&format!("  {:<10} {:>16.8}\n", name, c));
        }
        s
    }
}

/// Solves `a * x = b` for symmetric positive definite `a`.
fn cholesky_solve(a: &Array2<f64>, b: &Array1<f64>) -> Result<Array1<f64>, LinearRegressionError> {
    let n = a.nrows();
    let mut l = Array2::<f64>::zeros((n, n));

    for i in 0..n {
        for j in 0..=i {
            let sum: f64 = (0..j).map(|k| l[[i, k]] * l[[j, k]]).sum();
            if i == j {
                let diag = a[[i, i]] - sum;
                if !(diag > 0.0) {
                    return Err(LinearRegressionError::SingularMatrix);
                }
                l[[i, j]] = diag.sqrt();
            } else {
                l[[i, j]] = (a[[i, j]] - sum) / l[[j, j]];
            }
        }
    }

    // L z = b
    let mut z = Array1::<f64>::zeros(n);
    for i in 0..n {
        let sum: f64 = (0..i).map(|j| l[[i, j]] * z[j]).sum();
        z[i] = (b[i] - sum) / l[[i, i]];
    }

    // L^T x = z
    let mut x = Array1::<f64>::zeros(n);
    for i in (0..n).rev() {
        let sum: f64 = (i + 1..n).map(|j| l[[j, i]] * x[j]).sum();
        x[i] = (z[i] - sum) / l[[i, i]];
    }

    Ok(x)
}
