use rand::rngs::StdRng;
use rand::Rng;
use rand_distr::StandardNormal;

use crate::math::matrix::Matrix;

/// An endless source of synthetic, linearly separable classification
/// minibatches.
///
/// Each sample draws a class uniformly from `0..num_classes`; every feature
/// is then `(N(0,1) + 3) · (class + 1)`, so both the mean and the spread of
/// a sample grow with its class index. Classes overlap slightly but remain
/// learnable. Labels are one-hot rows over the fixed class count.
pub struct SyntheticClassSource {
    feature_dim: usize,
    num_classes: usize,
    rng: StdRng,
}

impl SyntheticClassSource {
    pub fn new(feature_dim: usize, num_classes: usize, rng: StdRng) -> SyntheticClassSource {
        assert!(feature_dim > 0, "feature_dim must be at least 1");
        assert!(num_classes > 1, "need at least two classes to classify");
        SyntheticClassSource {
            feature_dim,
            num_classes,
            rng,
        }
    }

    pub fn feature_dim(&self) -> usize {
        self.feature_dim
    }

    pub fn num_classes(&self) -> usize {
        self.num_classes
    }

    /// Draws a fresh minibatch of `n` samples.
    ///
    /// Returns `(features, labels)`: `n × feature_dim` and `n × num_classes`
    /// one-hot respectively.
    pub fn minibatch(&mut self, n: usize) -> (Matrix, Matrix) {
        let mut features = Matrix::zeros(n, self.feature_dim);
        let mut labels = Matrix::zeros(n, self.num_classes);
        for i in 0..n {
            let class = self.rng.gen_range(0..self.num_classes);
            let scale = (class + 1) as f64;
            for j in 0..self.feature_dim {
                let z: f64 = self.rng.sample(StandardNormal);
                features.set(i, j, (z + 3.0) * scale);
            }
            labels.set(i, class, 1.0);
        }
        (features, labels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::argmax;
    use crate::rng;

    #[test]
    fn minibatch_has_expected_shapes() {
        let mut source = SyntheticClassSource::new(2, 2, rng::from_seed(0));
        let (x, y) = source.minibatch(25);
        assert_eq!((x.rows, x.cols), (25, 2));
        assert_eq!((y.rows, y.cols), (25, 2));
    }

    #[test]
    fn labels_are_one_hot() {
        let mut source = SyntheticClassSource::new(3, 4, rng::from_seed(1));
        let (_, y) = source.minibatch(100);
        for r in 0..y.rows {
            let row = y.row(r);
            let sum: f64 = row.iter().sum();
            assert!((sum - 1.0).abs() < 1e-12, "label row {r} is not one-hot");
            assert_eq!(row.iter().filter(|&&v| v == 1.0).count(), 1);
        }
    }

    #[test]
    fn higher_classes_have_larger_features() {
        let mut source = SyntheticClassSource::new(2, 2, rng::from_seed(2));
        let (x, y) = source.minibatch(400);
        let mut sums = [0.0f64; 2];
        let mut counts = [0usize; 2];
        for r in 0..x.rows {
            let class = argmax(y.row(r));
            sums[class] += x.row(r).iter().sum::<f64>() / x.cols as f64;
            counts[class] += 1;
        }
        let mean0 = sums[0] / counts[0] as f64;
        let mean1 = sums[1] / counts[1] as f64;
        // Class 0 features center on 3, class 1 on 6.
        assert!(mean1 > mean0 + 1.0, "mean0 {mean0}, mean1 {mean1}");
    }

    #[test]
    fn same_seed_reproduces_minibatches() {
        let mut a = SyntheticClassSource::new(2, 2, rng::from_seed(0));
        let mut b = SyntheticClassSource::new(2, 2, rng::from_seed(0));
        let (xa, ya) = a.minibatch(25);
        let (xb, yb) = b.minibatch(25);
        assert_eq!(xa, xb);
        assert_eq!(ya, yb);
    }
}
