use rand::RngCore;

use crate::shuffle::random_permutation;

/// Chooses the centers of an `Rbf` net from its training inputs.
///
/// Called once at the start of every `Rbf::train`, before any weight changes.
pub trait CenterSelection: Send {
    /// Returns `count` centers for given `inputs`.
    ///
    /// `count` never exceeds `inputs.len()`, and all inputs have the same length.
    fn select(&mut self, inputs: &[&[f64]], count: usize, rng: &mut dyn RngCore)
        -> Vec<Box<[f64]>>;
}

/// Centers are distinct training samples, drawn uniformly without replacement.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSubsample;

impl CenterSelection for RandomSubsample {
    fn select(
        &mut self,
        inputs: &[&[f64]],
        count: usize,
        rng: &mut dyn RngCore,
    ) -> Vec<Box<[f64]>> {
        random_permutation(inputs.len(), rng)
            .into_iter()
            .take(count)
            .map(|i| Box::from(inputs[i]))
            .collect()
    }
}

/// Lloyd's k-means, starting from a random subsample.
///
/// Every iteration assigns inputs to their nearest center and moves each center
/// to the mean of its inputs. A center with no inputs stays where it is.
/// Stops early once no center moves.
#[derive(Debug, Clone, Copy)]
pub struct KMeans {
    pub iterations: usize,
}

impl Default for KMeans {
    fn default() -> Self {
        KMeans { iterations: 20 }
    }
}

impl CenterSelection for KMeans {
    fn select(
        &mut self,
        inputs: &[&[f64]],
        count: usize,
        rng: &mut dyn RngCore,
    ) -> Vec<Box<[f64]>> {
        let mut centers = RandomSubsample.select(inputs, count, rng);
        if centers.is_empty() {
            return centers;
        }
        let dim = centers[0].len();

        for _ in 0..self.iterations {
            let mut sums = vec![vec![0.0; dim]; count];
            let mut members = vec![0usize; count];

            for &input in inputs {
                let k = nearest(&centers, input);
                members[k] += 1;
                for (s, &x) in sums[k].iter_mut().zip(input.iter()) {
                    *s += x;
                }
            }

            let mut moved = false;
            for ((center, sum), &n) in centers.iter_mut().zip(sums.iter()).zip(members.iter()) {
                if n == 0 {
                    continue;
                }
                for (c, &s) in center.iter_mut().zip(sum.iter()) {
                    let mean = s / n as f64;
                    moved |= *c != mean;
                    *c = mean;
                }
            }
            if !moved {
                break;
            }
        }
        centers
    }
}

/// Squared Euclidean distance over the common length of `a` and `b`.
pub(crate) fn squared_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(&a, &b)| (a - b) * (a - b))
        .sum()
}

/// Index of the center closest to `input`; `centers` must not be empty.
fn nearest(centers: &[Box<[f64]>], input: &[f64]) -> usize {
    let mut best = (0, f64::INFINITY);
    for (k, center) in centers.iter().enumerate() {
        let d = squared_distance(center, input);
        if d < best.1 {
            best = (k, d);
        }
    }
    best.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn subsample_takes_distinct_inputs() {
        let data: Vec<Vec<f64>> = (0..10).map(|i| vec![i as f64, -(i as f64)]).collect();
        let inputs: Vec<&[f64]> = data.iter().map(|v| v.as_slice()).collect();
        let mut rng = StdRng::seed_from_u64(2);

        let centers = RandomSubsample.select(&inputs, 4, &mut rng);
        assert_eq!(centers.len(), 4);
        let mut firsts: Vec<i64> = centers.iter().map(|c| c[0] as i64).collect();
        for c in &centers {
            assert!(data.iter().any(|d| d.as_slice() == &c[..]));
        }
        firsts.sort_unstable();
        firsts.dedup();
        assert_eq!(firsts.len(), 4);
    }

    #[test]
    fn subsample_of_everything() {
        let data = [[1.0], [2.0], [3.0]];
        let inputs: Vec<&[f64]> = data.iter().map(|v| &v[..]).collect();
        let mut centers: Vec<f64> = RandomSubsample
            .select(&inputs, 3, &mut StdRng::seed_from_u64(0))
            .iter()
            .map(|c| c[0])
            .collect();
        centers.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(centers, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn kmeans_finds_cluster_means() {
        let data = [
            [0.0, 0.0],
            [0.2, 0.0],
            [0.0, 0.2],
            [10.0, 10.0],
            [10.2, 10.0],
            [10.0, 10.2],
        ];
        let inputs: Vec<&[f64]> = data.iter().map(|v| &v[..]).collect();

        for seed in 0..10 {
            let mut centers =
                KMeans::default().select(&inputs, 2, &mut StdRng::seed_from_u64(seed));
            centers.sort_by(|a, b| a[0].partial_cmp(&b[0]).unwrap());
            let (low, high) = (&centers[0], &centers[1]);

            // Starting points may share a cluster, but never for long
            assert_abs_diff_eq!(low[0], 0.2 / 3.0, epsilon = 1e-9);
            assert_abs_diff_eq!(low[1], 0.2 / 3.0, epsilon = 1e-9);
            assert_abs_diff_eq!(high[0], 10.0 + 0.2 / 3.0, epsilon = 1e-9);
            assert_abs_diff_eq!(high[1], 10.0 + 0.2 / 3.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn kmeans_without_centers() {
        let data = [[1.0]];
        let inputs: Vec<&[f64]> = data.iter().map(|v| &v[..]).collect();
        assert!(KMeans::default()
            .select(&inputs, 0, &mut StdRng::seed_from_u64(0))
            .is_empty());
    }

    #[test]
    fn distance() {
        assert_eq!(squared_distance(&[1.0, 2.0], &[4.0, -2.0]), 25.0);
    }
}
