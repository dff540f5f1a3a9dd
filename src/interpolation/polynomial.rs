use crate::interpolation::interpolator::*;

use itertools::Itertools;

/// The unique polynomial of degree `n - 1` passing through `n` (anchor, ordinate) pairs
///
/// Evaluated in the Lagrange form, so values at anchors are reproduced exactly.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(
    try_from = "PolynomialInterpolatorParameters<T>",
    into = "PolynomialInterpolatorParameters<T>",
    bound = "T: Float"
)]
pub struct PolynomialInterpolator<T> {
    anchors: Anchors<T>,
    ordinates: Vec<T>,
}

impl<T> PolynomialInterpolator<T>
where
    T: Float,
{
    /// Returns `None` if lengths of `anchors` and `ordinates` differ
    pub fn new(anchors: Anchors<T>, ordinates: Vec<T>) -> Option<Self> {
        (anchors.len() == ordinates.len()).then_some(Self { anchors, ordinates })
    }

    pub fn ordinates(&self) -> &[T] {
        &self.ordinates
    }

    /// Monomial coefficients `c_0, ..., c_{n-1}` of the polynomial, lowest power first
    pub fn coefficients(&self) -> Vec<T> {
        let n = self.anchors.len();
        let mut result = vec![T::zero(); n];
        for (i, (&x_i, &y_i)) in self.anchors.iter().zip_eq(&self.ordinates).enumerate() {
            // Expand y_i * prod_{j != i} (x - x_j) / (x_i - x_j)
            let mut basis = vec![T::zero(); n];
            basis[0] = T::one();
            let mut denominator = T::one();
            let mut power = 0;
            for (j, &x_j) in self.anchors.iter().enumerate() {
                if i == j {
                    continue;
                }
                denominator *= x_i - x_j;
                power += 1;
                for p in (1..=power).rev() {
                    basis[p] = basis[p - 1] - x_j * basis[p];
                }
                basis[0] = -x_j * basis[0];
            }
            for (c, b) in result.iter_mut().zip(basis) {
                *c += y_i * b / denominator;
            }
        }
        result
    }
}

impl<T> InterpolatorTrait<T> for PolynomialInterpolator<T>
where
    T: Float,
{
    fn eval(&self, x: T) -> T {
        self.anchors
            .iter()
            .zip_eq(&self.ordinates)
            .enumerate()
            .map(|(i, (&x_i, &y_i))| {
                self.anchors
                    .iter()
                    .enumerate()
                    .filter(|&(j, _)| j != i)
                    .fold(y_i, |acc, (_, &x_j)| acc * ((x - x_j) / (x_i - x_j)))
            })
            .sum()
    }

    fn degree(&self) -> usize {
        self.anchors.len() - 1
    }

    fn anchors(&self) -> &Anchors<T> {
        &self.anchors
    }
}

impl<T> JsonSchema for PolynomialInterpolator<T>
where
    T: Float,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        PolynomialInterpolatorParameters::<T>::schema_name()
    }

    fn json_schema(generator: &mut schemars::SchemaGenerator) -> schemars::Schema {
        PolynomialInterpolatorParameters::<T>::json_schema(generator)
    }
}

#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(rename = "PolynomialInterpolator", bound = "T: Float")]
struct PolynomialInterpolatorParameters<T> {
    anchors: Anchors<T>,
    ordinates: Vec<T>,
}

impl<T> From<PolynomialInterpolator<T>> for PolynomialInterpolatorParameters<T> {
    fn from(f: PolynomialInterpolator<T>) -> Self {
        Self {
            anchors: f.anchors,
            ordinates: f.ordinates,
        }
    }
}

impl<T> TryFrom<PolynomialInterpolatorParameters<T>> for PolynomialInterpolator<T>
where
    T: Float,
{
    type Error = &'static str;

    fn try_from(p: PolynomialInterpolatorParameters<T>) -> Result<Self, Self::Error> {
        Self::new(p.anchors, p.ordinates).ok_or("anchors and ordinates must have the same length")
    }
}
