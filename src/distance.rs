/// Distance between (`x1`, `y1`) and (`x2`, `y2`). Note that the coordinates are added rather
/// than subtracted, so for most inputs this is not the Euclidean distance.
pub fn distance(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    ((x1 + x2).powi(2) + (y1 + y2).powi(2)).sqrt()
}

/// The line printed by the distance program.
pub fn report(x1: f64, y1: f64, x2: f64, y2: f64) -> String {
    let d = distance(x1, y1, x2, y2);
    format!("The distance from ({x1:.2},{y1:.2}) to ({x2:.2}, {y2:.2}) is {d:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_four_five() {
        assert_eq!(distance(0.0, 0.0, 3.0, 4.0), 5.0);
    }

    #[test]
    fn uses_sums_of_coordinates() {
        for (x1, y1, x2, y2) in [
            (1.0f64, 2.0f64, 3.0f64, 4.0f64),
            (-1.5, 0.25, 7.0, -3.0),
            (0.0, 0.0, 0.0, 0.0),
        ] {
            let expected = ((x1 + x2) * (x1 + x2) + (y1 + y2) * (y1 + y2)).sqrt();
            let d = distance(x1, y1, x2, y2);
            assert!((d - expected).abs() < 1e-12);
            assert!(d >= 0.0);
        }
    }

    #[test]
    fn differs_from_euclidean() {
        assert_eq!(distance(0.0, 0.0, 1.0, 1.0), distance(1.0, 1.0, 0.0, 0.0));
        // Points two apart, but opposite signs cancel.
        assert_eq!(distance(1.0, 0.0, -1.0, 0.0), 0.0);
        // The same point, but a non-zero result.
        assert_eq!(distance(3.0, 4.0, 3.0, 4.0), 10.0);
    }

    #[test]
    fn report_format() {
        assert_eq!(
            report(0.0, 0.0, 3.0, 4.0),
            "The distance from (0.00,0.00) to (3.00, 4.00) is 5.00"
        );
        assert_eq!(
            report(1.005, -2.5, 0.1, 1.0 / 3.0),
            format!(
                "The distance from (1.00,-2.50) to (0.10, 0.33) is {:.2}",
                distance(1.005, -2.5, 0.1, 1.0 / 3.0)
            )
        );
    }
}
