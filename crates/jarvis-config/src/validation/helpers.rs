//! Shared range-validation helpers used by all domain validators.

/// Push an error if `value` is outside `[min, max]`.
pub(crate) fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error unless `lo..hi` is a non-empty range bounded by `limit`.
pub(crate) fn validate_half_open(
    errors: &mut Vec<String>,
    name: &str,
    lo: u32,
    hi: u32,
    limit: u32,
) {
    if lo >= hi || hi > limit {
        errors.push(format!(
            "{name} = {lo}..{hi} must be a non-empty range ending at or below {limit}"
        ));
    }
}
