use rand::Rng;

/// Returns every index of `0..n` exactly once, in uniformly random order.
///
/// Forward Fisher-Yates: position `i` is swapped with a position drawn from `[i, n)`.
///
/// # Examples
/// ```
/// # use shallownet::random_permutation;
/// let mut rng = rand::thread_rng();
/// let mut order = random_permutation(5, &mut rng);
/// order.sort_unstable();
/// assert_eq!(order, vec![0, 1, 2, 3, 4]);
/// ```
pub fn random_permutation<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..n).collect();
    for i in 0..n {
        let j = rng.gen_range(i..n);
        indices.swap(i, j);
    }
    indices
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn is_permutation() {
        let mut rng = StdRng::seed_from_u64(11);
        for &n in &[0, 1, 2, 7, 100, 1000] {
            let mut order = random_permutation(n, &mut rng);
            assert_eq!(order.len(), n);
            order.sort_unstable();
            assert!(order.iter().copied().eq(0..n));
        }
    }

    #[test]
    fn every_position_is_reachable() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut first_seen = [false; 4];
        for _ in 0..200 {
            first_seen[random_permutation(4, &mut rng)[0]] = true;
        }
        assert!(first_seen.iter().all(|&s| s));
    }

    #[test]
    fn same_seed_same_order() {
        let a = random_permutation(50, &mut StdRng::seed_from_u64(42));
        let b = random_permutation(50, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
