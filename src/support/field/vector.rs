/// A vector field: one 3-component value per element of the spatial domain.
///
/// Velocity is handed to cavitation models as part of the constructor
/// contract. None of the bundled correlations read it, but turbulence-aware
/// correlations do.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VectorField {
    values: Vec<[f64; 3]>,
}

impl VectorField {
    /// Creates a field with `len` elements all equal to `value`.
    #[must_use]
    pub fn uniform(len: usize, value: [f64; 3]) -> Self {
        Self {
            values: vec![value; len],
        }
    }
}

impl From<Vec<[f64; 3]>> for VectorField {
    fn from(values: Vec<[f64; 3]>) -> Self {
        Self { values }
    }
}
