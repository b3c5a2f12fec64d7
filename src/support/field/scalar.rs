use std::ops::{Add, Div, Index, Mul, Neg, Sub};

/// A scalar field: one `f64` value per element of the spatial domain.
///
/// Binary operators between two fields are elementwise.
/// Operators between a field and an `f64` apply the scalar to every element.
///
/// # Panics
///
/// Field-with-field operators panic if the two fields have different lengths.
/// Mixing domains is a programming error in the host, not a runtime condition.
///
/// # Example
///
/// ```
/// use cavitation_models::support::field::ScalarField;
///
/// let m_dot = ScalarField::from(vec![2000.0, 500.0]);
/// let rho = ScalarField::uniform(2, 1000.0);
///
/// let v_dot = &m_dot / &rho;
/// assert_eq!(v_dot.as_slice(), &[2.0, 0.5]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScalarField {
    values: Vec<f64>,
}

impl ScalarField {
    /// Creates a field with `len` elements all equal to `value`.
    #[must_use]
    pub fn uniform(len: usize, value: f64) -> Self {
        Self {
            values: vec![value; len],
        }
    }

    /// Returns the number of elements in the field.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the field has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }

    /// Returns a new field with `f` applied to every element.
    #[must_use]
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        self.values.iter().map(|&x| f(x)).collect()
    }

    /// Returns a new field combining `self` and `other` element by element.
    ///
    /// # Panics
    ///
    /// Panics if the fields have different lengths.
    #[must_use]
    pub fn zip_map(&self, other: &Self, f: impl Fn(f64, f64) -> f64) -> Self {
        assert_eq!(
            self.len(),
            other.len(),
            "field length mismatch: {} vs {}",
            self.len(),
            other.len()
        );
        self.values
            .iter()
            .zip(&other.values)
            .map(|(&a, &b)| f(a, b))
            .collect()
    }

    /// Returns the field clamped elementwise to `[lo, hi]`.
    #[must_use]
    pub fn clamp(&self, lo: f64, hi: f64) -> Self {
        self.map(|x| x.clamp(lo, hi))
    }

    /// Returns the elementwise maximum of the field and `floor`.
    #[must_use]
    pub fn max_scalar(&self, floor: f64) -> Self {
        self.map(|x| x.max(floor))
    }

    /// Returns `1.0` where `predicate` holds and `0.0` elsewhere.
    #[must_use]
    pub fn indicator(&self, predicate: impl Fn(f64) -> bool) -> Self {
        self.map(|x| if predicate(x) { 1.0 } else { 0.0 })
    }
}

impl From<Vec<f64>> for ScalarField {
    fn from(values: Vec<f64>) -> Self {
        Self { values }
    }
}

impl FromIterator<f64> for ScalarField {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl Index<usize> for ScalarField {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.values[index]
    }
}

macro_rules! elementwise {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait<&ScalarField> for &ScalarField {
            type Output = ScalarField;

            fn $method(self, rhs: &ScalarField) -> ScalarField {
                self.zip_map(rhs, |a, b| a $op b)
            }
        }

        impl $trait<ScalarField> for &ScalarField {
            type Output = ScalarField;

            fn $method(self, rhs: ScalarField) -> ScalarField {
                self.zip_map(&rhs, |a, b| a $op b)
            }
        }

        impl $trait<&ScalarField> for ScalarField {
            type Output = ScalarField;

            fn $method(self, rhs: &ScalarField) -> ScalarField {
                self.zip_map(rhs, |a, b| a $op b)
            }
        }

        impl $trait<ScalarField> for ScalarField {
            type Output = ScalarField;

            fn $method(self, rhs: ScalarField) -> ScalarField {
                self.zip_map(&rhs, |a, b| a $op b)
            }
        }

        impl $trait<f64> for &ScalarField {
            type Output = ScalarField;

            fn $method(self, rhs: f64) -> ScalarField {
                self.map(|a| a $op rhs)
            }
        }

        impl $trait<f64> for ScalarField {
            type Output = ScalarField;

            fn $method(self, rhs: f64) -> ScalarField {
                self.map(|a| a $op rhs)
            }
        }

        impl $trait<&ScalarField> for f64 {
            type Output = ScalarField;

            fn $method(self, rhs: &ScalarField) -> ScalarField {
                rhs.map(|b| self $op b)
            }
        }

        impl $trait<ScalarField> for f64 {
            type Output = ScalarField;

            fn $method(self, rhs: ScalarField) -> ScalarField {
                rhs.map(|b| self $op b)
            }
        }
    };
}

elementwise!(Add, add, +);
elementwise!(Sub, sub, -);
elementwise!(Mul, mul, *);
elementwise!(Div, div, /);

impl Neg for &ScalarField {
    type Output = ScalarField;

    fn neg(self) -> ScalarField {
        self.map(|x| -x)
    }
}

impl Neg for ScalarField {
    type Output = ScalarField;

    fn neg(mut self) -> ScalarField {
        self.values.iter_mut().for_each(|x| *x = -*x);
        self
    }
}
