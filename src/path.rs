use crate::contour::Point;

/// Build closed-polygon SVG path data for a boundary.
///
/// Returns `None` for degenerate boundaries with fewer than two points.
pub fn path_data(points: &[Point]) -> Option<String> {
    let (first, rest) = points.split_first()?;
    if rest.is_empty() {
        return None;
    }

    let lines: String = rest
        .iter()
        .map(|p| format!(" L {} {}", p.x, p.y))
        .collect();
    Some(format!("M {} {}{lines} Z", first.x, first.y))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[(i32, i32)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    mod unit {
        use super::*;

        #[test]
        fn empty_is_degenerate() {
            assert_eq!(path_data(&[]), None);
        }

        #[test]
        fn single_point_is_degenerate() {
            assert_eq!(path_data(&pts(&[(3, 4)])), None);
        }

        #[test]
        fn two_points_make_a_closed_segment() {
            assert_eq!(
                path_data(&pts(&[(1, 2), (5, 2)])).as_deref(),
                Some("M 1 2 L 5 2 Z")
            );
        }

        #[test]
        fn rectangle() {
            let d = path_data(&pts(&[(0, 0), (0, 3), (3, 3), (3, 0)])).unwrap();
            assert_eq!(d, "M 0 0 L 0 3 L 3 3 L 3 0 Z");
        }
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// one move, one line per extra point, one close
            #[test]
            fn command_counts(coords in proptest::collection::vec((0i32..1000, 0i32..1000), 2..50)) {
                let d = path_data(&pts(&coords)).unwrap();
                prop_assert!(d.starts_with("M "));
                prop_assert!(d.ends_with(" Z"));
                prop_assert_eq!(d.matches('M').count(), 1);
                prop_assert_eq!(d.matches('L').count(), coords.len() - 1);
                prop_assert_eq!(d.matches('Z').count(), 1);
            }
        }
    }
}
