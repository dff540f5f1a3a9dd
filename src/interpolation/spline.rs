use crate::interpolation::interpolator::*;
use crate::interpolation::linear_system::solve_linear_system;

use ndarray::{Array1, Array2};
use std::iter;

/// Maximum spline degree, the limit of FITPACK-based splines
pub const MAX_SPLINE_DEGREE: usize = 5;

/// Spline degree actually used for `n_anchors` anchors when `requested` is asked for
pub fn effective_spline_degree(requested: usize, n_anchors: usize) -> usize {
    MAX_SPLINE_DEGREE
        .min(requested)
        .min(n_anchors.saturating_sub(1))
}

/// Interpolating B-spline passing through every (anchor, ordinate) pair
///
/// Knots are placed the way FITPACK places them for a zero smoothing factor: for odd
/// degree interior knots coincide with interior anchors, for even degree they lie in the
/// middle between neighbouring anchors. Outside of the anchor range the boundary polynomial
/// pieces are extrapolated.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(
    try_from = "SplineInterpolatorParameters<T>",
    into = "SplineInterpolatorParameters<T>",
    bound = "T: Float"
)]
pub struct SplineInterpolator<T> {
    anchors: Anchors<T>,
    ordinates: Vec<T>,
    degree: usize,
    knots: Vec<T>,
    coefficients: Vec<T>,
}

impl<T> SplineInterpolator<T>
where
    T: Float,
{
    /// Fit the spline, `degree` is clamped by [effective_spline_degree]
    ///
    /// Returns `None` if lengths of `anchors` and `ordinates` differ or the collocation system
    /// cannot be solved.
    pub fn new(anchors: Anchors<T>, ordinates: Vec<T>, degree: usize) -> Option<Self> {
        if anchors.len() != ordinates.len() {
            return None;
        }
        let degree = effective_spline_degree(degree, anchors.len());
        let knots = Self::knots(&anchors, degree);
        let mut spline = Self {
            anchors,
            ordinates,
            degree,
            knots,
            coefficients: vec![],
        };
        spline.coefficients = spline.solve_coefficients()?;
        Some(spline)
    }

    pub fn ordinates(&self) -> &[T] {
        &self.ordinates
    }

    pub fn knots(anchors: &[T], degree: usize) -> Vec<T> {
        let m = anchors.len();
        let half = degree / 2;
        let interior = (0..m.saturating_sub(degree + 1)).map(|l| {
            let j = half + 1 + l;
            if degree % 2 == 1 {
                anchors[j]
            } else {
                T::half() * (anchors[j] + anchors[j - 1])
            }
        });
        iter::repeat_n(anchors[0], degree + 1)
            .chain(interior)
            .chain(iter::repeat_n(anchors[m - 1], degree + 1))
            .collect()
    }

    fn n_coefficients(&self) -> usize {
        self.anchors.len()
    }

    // Index mu of the knot interval [t_mu, t_mu+1) used for x, clamped to the spline domain
    fn span(&self, x: T) -> usize {
        let interior = &self.knots[self.degree + 1..self.n_coefficients()];
        self.degree + interior.partition_point(|&t| t <= x)
    }

    // Non-zero B-spline basis functions B_{mu-k..=mu, k}(x), Cox-de Boor recursion
    fn basis(&self, mu: usize, x: T) -> [T; MAX_SPLINE_DEGREE + 1] {
        let k = self.degree;
        let t = &self.knots;
        let mut n = [T::zero(); MAX_SPLINE_DEGREE + 1];
        let mut left = [T::zero(); MAX_SPLINE_DEGREE + 1];
        let mut right = [T::zero(); MAX_SPLINE_DEGREE + 1];
        n[0] = T::one();
        for j in 1..=k {
            left[j] = x - t[mu + 1 - j];
            right[j] = t[mu + j] - x;
            let mut saved = T::zero();
            for r in 0..j {
                let temp = n[r] / (right[r + 1] + left[j - r]);
                n[r] = saved + right[r + 1] * temp;
                saved = left[j - r] * temp;
            }
            n[j] = saved;
        }
        n
    }

    fn solve_coefficients(&self) -> Option<Vec<T>> {
        let m = self.n_coefficients();
        let k = self.degree;
        let mut collocation = Array2::zeros((m, m));
        for (i, &x) in self.anchors.iter().enumerate() {
            let mu = self.span(x);
            let basis = self.basis(mu, x);
            for (r, &value) in basis[..=k].iter().enumerate() {
                collocation[(i, mu - k + r)] = value;
            }
        }
        let rhs = Array1::from_vec(self.ordinates.clone());
        solve_linear_system(&collocation, &rhs).map(|c| c.to_vec())
    }
}

impl<T> InterpolatorTrait<T> for SplineInterpolator<T>
where
    T: Float,
{
    fn eval(&self, x: T) -> T {
        let k = self.degree;
        let mu = self.span(x);
        let basis = self.basis(mu, x);
        basis[..=k]
            .iter()
            .zip(&self.coefficients[mu - k..=mu])
            .fold(T::zero(), |acc, (&b, &c)| acc + b * c)
    }

    fn degree(&self) -> usize {
        self.degree
    }

    fn anchors(&self) -> &Anchors<T> {
        &self.anchors
    }
}

impl<T> JsonSchema for SplineInterpolator<T>
where
    T: Float,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        SplineInterpolatorParameters::<T>::schema_name()
    }

    fn json_schema(generator: &mut schemars::SchemaGenerator) -> schemars::Schema {
        SplineInterpolatorParameters::<T>::json_schema(generator)
    }
}

#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(rename = "SplineInterpolator", bound = "T: Float")]
struct SplineInterpolatorParameters<T> {
    anchors: Anchors<T>,
    ordinates: Vec<T>,
    degree: usize,
}

impl<T> From<SplineInterpolator<T>> for SplineInterpolatorParameters<T> {
    fn from(f: SplineInterpolator<T>) -> Self {
        Self {
            anchors: f.anchors,
            ordinates: f.ordinates,
            degree: f.degree,
        }
    }
}

impl<T> TryFrom<SplineInterpolatorParameters<T>> for SplineInterpolator<T>
where
    T: Float,
{
    type Error = &'static str;

    fn try_from(p: SplineInterpolatorParameters<T>) -> Result<Self, Self::Error> {
        Self::new(p.anchors, p.ordinates, p.degree)
            .ok_or("spline cannot be fitted to the given anchors and ordinates")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::*;

    check_interpolator_exact!(
        spline_cubic_exact,
        SplineInterpolator::new(
            Anchors::new(vec![0.0, 1.0, 2.5, 3.0, 4.5, 6.0]).unwrap(),
            vec![1.0, -1.0, 0.5, 2.0, 0.0, 3.0],
            3
        )
        .unwrap()
    );
    check_interpolator_exact!(
        spline_quartic_exact,
        SplineInterpolator::new(
            Anchors::new(vec![-2.0, -1.0, 0.5, 1.0, 2.0, 4.0, 5.0]).unwrap(),
            vec![0.3, 0.1, 0.9, 1.1, 0.2, 0.4, 0.8],
            4
        )
        .unwrap()
    );
    check_interpolator_exact!(
        spline_halo_mass_anchors_exact,
        SplineInterpolator::new(
            Anchors::new(vec![1e12, 1e13, 1e14, 1e15]).unwrap(),
            vec![1.0, 1.2, 0.8, 0.7],
            3
        )
        .unwrap()
    );

    #[test]
    fn degree_clamping() {
        assert_eq!(effective_spline_degree(3, 2), 1);
        assert_eq!(effective_spline_degree(3, 6), 3);
        assert_eq!(effective_spline_degree(7, 6), 5);
        assert_eq!(effective_spline_degree(3, 1), 0);
        assert_eq!(effective_spline_degree(0, 4), 0);
    }

    #[test]
    fn fitted_degree_is_clamped() {
        let anchors = Anchors::new(vec![1.0, 2.0]).unwrap();
        let spline = SplineInterpolator::new(anchors, vec![1.0, 3.0], 3).unwrap();
        assert_eq!(spline.degree(), 1);
    }

    #[test]
    fn linear_spline_extrapolates_linearly() {
        let anchors = Anchors::new(vec![1.0, 2.0]).unwrap();
        let spline = SplineInterpolator::new(anchors, vec![1.0, 3.0], 3).unwrap();
        assert_relative_eq!(spline.eval(1.5), 2.0, epsilon = 1e-12);
        assert_relative_eq!(spline.eval(0.0), -1.0, epsilon = 1e-12);
        assert_relative_eq!(spline.eval(4.0), 7.0, epsilon = 1e-12);
    }

    #[test]
    fn single_anchor_is_constant() {
        let anchors = Anchors::new(vec![5.0_f32]).unwrap();
        let spline = SplineInterpolator::new(anchors, vec![0.7], 3).unwrap();
        assert_eq!(spline.degree(), 0);
        for x in [-1.0, 5.0, 100.0] {
            assert_eq!(spline.eval(x), 0.7);
        }
    }

    #[test]
    fn cubic_reproduces_cubic_polynomial() {
        let f = |x: f64| 0.5 * x.powi(3) - x.powi(2) + 2.0 * x - 1.0;
        let x: Vec<f64> = vec![-1.0, 0.0, 0.7, 1.5, 2.0, 3.2, 4.0];
        let y = x.iter().map(|&x| f(x)).collect();
        let spline = SplineInterpolator::new(Anchors::new(x).unwrap(), y, 3).unwrap();
        for x in [-2.0, -0.5, 0.3, 1.1, 2.7, 3.9, 5.0] {
            assert_relative_eq!(spline.eval(x), f(x), max_relative = 1e-9, epsilon = 1e-9);
        }
    }

    #[test]
    fn zero_degree_is_nearest_anchor() {
        let anchors = Anchors::new(vec![0.0, 1.0, 2.0]).unwrap();
        let spline = SplineInterpolator::new(anchors, vec![10.0, 20.0, 30.0], 0).unwrap();
        assert_eq!(spline.eval(0.2), 10.0);
        assert_eq!(spline.eval(0.9), 20.0);
        assert_eq!(spline.eval(1.7), 30.0);
    }

    #[test]
    fn knots_odd_degree() {
        let knots = SplineInterpolator::knots(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0], 3);
        assert_eq!(
            knots,
            vec![0.0, 0.0, 0.0, 0.0, 2.0, 3.0, 5.0, 5.0, 5.0, 5.0]
        );
    }

    #[test]
    fn knots_even_degree() {
        let knots = SplineInterpolator::knots(&[0.0, 1.0, 2.0, 3.0], 2);
        assert_eq!(knots, vec![0.0, 0.0, 0.0, 1.5, 3.0, 3.0, 3.0]);
    }

    #[test]
    fn mismatched_lengths() {
        let anchors = Anchors::new(vec![1.0, 2.0]).unwrap();
        assert!(SplineInterpolator::new(anchors, vec![1.0], 1).is_none());
    }

    #[test]
    fn serde_refits() {
        let anchors = Anchors::new(vec![0.0, 1.0, 2.0, 4.0]).unwrap();
        let spline = SplineInterpolator::new(anchors, vec![1.0, 2.0, 0.0, 1.0], 3).unwrap();
        let json = serde_json::to_string(&spline).unwrap();
        let restored: SplineInterpolator<f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(spline, restored);
    }
}
