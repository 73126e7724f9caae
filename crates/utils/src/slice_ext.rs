use crate::error::{Error, Result};

/// Extends functionality for slices of float arrays
pub trait SliceExt<T> {
    /// Find the (min, max) of only the finite values
    ///
    /// Any `NAN` or infinite values are skipped rather than treated as an
    /// error. Field data regularly contains these in masked or solid regions,
    /// and plotting still needs a range.
    ///
    /// ```rust
    /// # use ngatools_utils::SliceExt;
    /// # use ngatools_utils::Error;
    /// assert_eq!([3.0, f64::NAN, -1.0, 2.0].finite_range(), Ok((-1.0, 3.0)));
    /// assert_eq!([f64::NAN, f64::INFINITY].finite_range(), Err(Error::SliceContainsNoValues));
    /// ```
    fn finite_range(&self) -> Result<(T, T)>;

    /// Find index bin containing 'value', where bins are low < value <= high
    ///
    /// A value on a bin edge returns the bin below. Values equal to the lowest
    /// bound are considered part of the first bin.
    ///
    /// For example, with grid coordinates `0.0 0.1 1.0 20.0`:
    /// ```text
    ///     0.0 <= bin 0 <= 0.1
    ///     0.1 < bin 1 <= 1.0
    ///     1.0 < bin 2 <= 20.0
    /// ```
    ///
    /// ```rust
    /// # use ngatools_utils::SliceExt;
    /// let bounds = vec![0.0, 0.1, 1.0, 20.0];
    ///
    /// // Find values in the array
    /// assert_eq!(bounds.find_bin_inclusive(0.0 ), Ok(0));
    /// assert_eq!(bounds.find_bin_inclusive(0.5 ), Ok(1));
    /// assert_eq!(bounds.find_bin_inclusive(1.0 ), Ok(1));
    /// assert_eq!(bounds.find_bin_inclusive(20.0), Ok(2));
    ///
    /// // Values outside the bin bounds are an error case
    /// assert!(bounds.find_bin_inclusive(-1.0).is_err());
    /// assert!(bounds.find_bin_inclusive(21.0).is_err());
    /// ```
    fn find_bin_inclusive(&self, value: T) -> Result<usize>;

    /// Find the index of the grid point closest to 'value'
    ///
    /// Coordinates must be in ascending order. The bin containing the value is
    /// found first, and the nearer of its two edges is returned. Ties go to
    /// the lower edge.
    ///
    /// A single coordinate is a valid axis for a 2D case (e.g. `nz = 1`), so
    /// this always returns `0` when the value matches it.
    ///
    /// ```rust
    /// # use ngatools_utils::SliceExt;
    /// let z = vec![0.0, 1.0, 2.0, 4.0];
    /// assert_eq!(z.find_nearest(0.4), Ok(0));
    /// assert_eq!(z.find_nearest(0.6), Ok(1));
    /// assert_eq!(z.find_nearest(3.5), Ok(3));
    /// assert_eq!(z.find_nearest(4.0), Ok(3));
    /// assert!(z.find_nearest(4.1).is_err());
    ///
    /// assert_eq!([0.5].find_nearest(0.5), Ok(0));
    /// ```
    fn find_nearest(&self, value: T) -> Result<usize>;

    /// Check that values never decrease
    ///
    /// Grid coordinates are expected to be monotonic but not necessarily
    /// strictly so.
    ///
    /// ```rust
    /// # use ngatools_utils::SliceExt;
    /// assert!([0.0, 0.5, 0.5, 1.0].is_ascending());
    /// assert!(![0.0, 1.0, 0.5].is_ascending());
    /// assert!(Vec::<f64>::new().is_ascending());
    /// ```
    fn is_ascending(&self) -> bool;
}

impl SliceExt<f64> for [f64] {
    fn finite_range(&self) -> Result<(f64, f64)> {
        self.iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |range, v| match range {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
            .ok_or(Error::SliceContainsNoValues)
    }

    fn find_bin_inclusive(&self, value: f64) -> Result<usize> {
        // make sure there are bin edges to check against
        let n = self.len();
        if n < 2 {
            return Err(Error::BelowMinimumSliceLength {
                length: n,
                minimum_required: 2,
            });
        }

        let (Some((lower_bound, upper)), Some((upper_bound, lower))) =
            (self.split_first(), self.split_last())
        else {
            return Err(Error::UncapturedErrorCondition);
        };

        // is the value relevant?
        if &value < lower_bound || &value > upper_bound {
            return Err(Error::ValueOutsideOfBounds {
                value,
                lower_bound: *lower_bound,
                upper_bound: *upper_bound,
            });
        }

        // special case for being on the lowest edge
        if &value == lower_bound {
            return Ok(0);
        }

        // try to find the bin index, range INCLUSIVE of upper edge
        for (idx, (low, high)) in lower.iter().zip(upper.iter()).enumerate() {
            if low < &value && &value <= high {
                return Ok(idx);
            }
        }

        // this should be unreachable
        Err(Error::UncapturedErrorCondition)
    }

    fn find_nearest(&self, value: f64) -> Result<usize> {
        // a lone coordinate is its own nearest point, if the value is on it
        if let [only] = self {
            return match value == *only {
                true => Ok(0),
                false => Err(Error::ValueOutsideOfBounds {
                    value,
                    lower_bound: *only,
                    upper_bound: *only,
                }),
            };
        }

        let bin = self.find_bin_inclusive(value)?;
        let (low, high) = (self[bin], self[bin + 1]);

        if (value - low) <= (high - value) {
            Ok(bin)
        } else {
            Ok(bin + 1)
        }
    }

    fn is_ascending(&self) -> bool {
        self.windows(2).all(|pair| pair[0] <= pair[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finite_range_skips_undefined() {
        let values = [f64::NEG_INFINITY, 0.25, f64::NAN, 0.75];
        assert_eq!(values.finite_range(), Ok((0.25, 0.75)));
    }

    #[test]
    fn finite_range_without_finite_values() {
        let values = [f64::NAN, f64::INFINITY, f64::NEG_INFINITY];
        assert_eq!(values.finite_range(), Err(Error::SliceContainsNoValues));
        assert_eq!(Vec::<f64>::new().finite_range(), Err(Error::SliceContainsNoValues));
    }

    #[test]
    fn finite_range_single_value() {
        assert_eq!([2.0].finite_range(), Ok((2.0, 2.0)));
    }

    #[test]
    fn nearest_on_non_uniform_grid() {
        let x = [0.0, 0.1, 1.0, 20.0];
        assert_eq!(x.find_nearest(0.05), Ok(0));
        assert_eq!(x.find_nearest(0.06), Ok(1));
        assert_eq!(x.find_nearest(10.0), Ok(2));
        assert_eq!(x.find_nearest(11.0), Ok(3));
    }

    #[test]
    fn nearest_with_repeated_coordinates() {
        // non-strict monotonic grids are allowed
        let x = [0.0, 1.0, 1.0, 2.0];
        assert_eq!(x.find_nearest(1.0), Ok(1));
        assert_eq!(x.find_nearest(1.6), Ok(3));
    }

    #[test]
    fn nearest_single_coordinate() {
        assert_eq!([3.0].find_nearest(3.0), Ok(0));
        assert_eq!(
            [3.0].find_nearest(2.0),
            Err(Error::ValueOutsideOfBounds {
                value: 2.0,
                lower_bound: 3.0,
                upper_bound: 3.0
            })
        );
        assert_eq!(
            Vec::<f64>::new().find_nearest(0.0),
            Err(Error::BelowMinimumSliceLength {
                length: 0,
                minimum_required: 2
            })
        );
    }
}
