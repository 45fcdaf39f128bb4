// ABOUTME: Sorting of extracted packages by a numeric price field.
// ABOUTME: Missing values compare as zero; the default order is descending.

use crate::models::Package;
use crate::options::SortKey;

/// Sorts `packages` in place by `key`.
///
/// Descending unless `ascending` is set. Packages without a value for the key
/// compare as `0.0`. The sort is stable, so ties keep their extraction order.
pub fn sort_packages(packages: &mut [Package], key: SortKey, ascending: bool) {
    packages.sort_by(|a, b| {
        let lhs = key.value_or_zero(a);
        let rhs = key.value_or_zero(b);
        if ascending {
            lhs.total_cmp(&rhs)
        } else {
            rhs.total_cmp(&lhs)
        }
    });
}
