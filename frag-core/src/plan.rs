use crate::domain::Fragment;
use crate::error::{FragError, Result};

/// Split `frame_count` frames into contiguous fragments of `fragment_size`.
/// The last fragment holds the remainder (1..=fragment_size frames).
pub fn plan_fragments(frame_count: usize, fragment_size: usize) -> Result<Vec<Fragment>> {
    if fragment_size == 0 {
        return Err(FragError::InvalidConfiguration(
            "fragment_size must be positive".into(),
        ));
    }
    Ok((0..frame_count)
        .step_by(fragment_size)
        .enumerate()
        .map(|(id, start)| Fragment {
            id,
            start,
            end: start.saturating_add(fragment_size).min(frame_count),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_frames_by_two() {
        let plan = plan_fragments(5, 2).unwrap();
        let ranges: Vec<_> = plan.iter().map(|f| (f.id, f.start, f.end)).collect();
        assert_eq!(ranges, vec![(0, 0, 2), (1, 2, 4), (2, 4, 5)]);
    }

    #[test]
    fn empty_input_has_no_fragments() {
        assert!(plan_fragments(0, 3).unwrap().is_empty());
    }

    #[test]
    fn zero_size_is_rejected() {
        assert!(matches!(
            plan_fragments(10, 0),
            Err(FragError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn sizes_cover_input_exactly() {
        for n in 0..40usize {
            for k in 1..12usize {
                let plan = plan_fragments(n, k).unwrap();
                assert_eq!(plan.len(), n.div_ceil(k));
                assert_eq!(plan.iter().map(Fragment::len).sum::<usize>(), n);

                let mut next = 0;
                for (i, f) in plan.iter().enumerate() {
                    assert_eq!(f.id, i);
                    assert_eq!(f.start, next);
                    next = f.end;
                    if i + 1 < plan.len() {
                        assert_eq!(f.len(), k);
                    } else {
                        assert!((1..=k).contains(&f.len()));
                        assert_eq!(f.len(), n - k * (plan.len() - 1));
                    }
                }
            }
        }
    }
}
