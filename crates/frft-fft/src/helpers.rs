/// Move the zero-frequency bin to the middle.
///
/// `out[i] = input[(i + n/2) % n]`, which is also the gather half of the
/// centering permutation around integer-order steps.
#[must_use]
pub fn fftshift_1d<T: Clone>(input: &[T]) -> Vec<T> {
    rotated(input, input.len() / 2)
}

/// Undo [`fftshift_1d`]; differs from it only for odd lengths.
#[must_use]
pub fn ifftshift_1d<T: Clone>(input: &[T]) -> Vec<T> {
    rotated(input, input.len().div_ceil(2))
}

fn rotated<T: Clone>(input: &[T], mid: usize) -> Vec<T> {
    let mut out = input.to_vec();
    if !out.is_empty() {
        let mid = mid % out.len();
        out.rotate_left(mid);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{fftshift_1d, ifftshift_1d};

    #[test]
    fn fftshift_and_ifftshift_roundtrip() {
        let data = vec![0, 1, 2, 3, 4];
        let shifted = fftshift_1d(&data);
        assert_eq!(shifted, vec![2, 3, 4, 0, 1]);
        assert_eq!(ifftshift_1d(&shifted), data);
    }

    #[test]
    fn fftshift_matches_centering_permutation() {
        for n in 1..9usize {
            let data = (0..n).collect::<Vec<_>>();
            let shifted = fftshift_1d(&data);
            for (i, &value) in shifted.iter().enumerate() {
                assert_eq!(value, (i + n / 2) % n, "n={n}, i={i}");
            }
            assert_eq!(ifftshift_1d(&shifted), data, "n={n}");
        }
    }

    #[test]
    fn shifts_of_empty_input_are_empty() {
        assert!(fftshift_1d::<u8>(&[]).is_empty());
        assert!(ifftshift_1d::<u8>(&[]).is_empty());
    }
}
