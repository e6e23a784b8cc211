//! Activation Policy: resolve the effective rule set from `select` /
//! `exclude` over a registry of known rule codes. Per spec.md section 4.4,
//! unknown codes are silently dropped rather than rejected.

use std::collections::BTreeSet;

/// `active = (select ∩ known) if select else known; active -= exclude`.
pub fn resolve_active_rules<'a>(
    known: &[&'a str],
    select: Option<&[&str]>,
    exclude: Option<&[&str]>,
) -> BTreeSet<&'a str> {
    let mut active: BTreeSet<&'a str> = match select {
        Some(codes) => known
            .iter()
            .copied()
            .filter(|k| codes.contains(k))
            .collect(),
        None => known.iter().copied().collect(),
    };
    if let Some(codes) = exclude {
        active.retain(|k| !codes.contains(k));
    }
    active
}
