// ABOUTME: Billing frequency detection from the text around a price.

use crate::models::Frequency;

const PER_MONTH: &str = "Per Month";
const PER_YEAR: &str = "Per Year";

/// Classifies the full text of a price block.
///
/// "Per Month" is checked before "Per Year", so text mentioning both is
/// treated as monthly. Matching is case-sensitive.
pub fn classify_frequency(text: &str) -> Option<Frequency> {
    if text.contains(PER_MONTH) {
        Some(Frequency::Monthly)
    } else if text.contains(PER_YEAR) {
        Some(Frequency::Yearly)
    } else {
        None
    }
}
