use std::fmt;

use super::model::{LaunchDataset, LaunchRecord, PayloadBounds};
use crate::config::ALL_SITES;

// ---------------------------------------------------------------------------
// Site selection: the dropdown value
// ---------------------------------------------------------------------------

/// Either the "All Sites" sentinel or one concrete site name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    pub fn matches(&self, site: &str) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(selected) => selected == site,
        }
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteSelection::All => write!(f, "{ALL_SITES}"),
            SiteSelection::Site(name) => write!(f, "{name}"),
        }
    }
}

/// Dropdown choices: the sentinel followed by every distinct site.
pub fn site_options(dataset: &LaunchDataset) -> Vec<SiteSelection> {
    std::iter::once(SiteSelection::All)
        .chain(dataset.site_names().map(|s| SiteSelection::Site(s.to_string())))
        .collect()
}

// ---------------------------------------------------------------------------
// Payload range: the slider value
// ---------------------------------------------------------------------------

/// Inclusive payload mass interval `[lo, hi]` in kilograms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    pub lo: f64,
    pub hi: f64,
}

impl PayloadRange {
    pub fn new(lo: f64, hi: f64) -> Self {
        PayloadRange { lo, hi }
    }

    /// The default slider selection: the dataset's full range.
    pub fn full(bounds: PayloadBounds) -> Self {
        PayloadRange::new(bounds.min, bounds.max)
    }

    /// Clamp both ends into `bounds` and order them so `lo <= hi`.
    pub fn clamped(self, bounds: PayloadBounds) -> Self {
        let lo = self.lo.clamp(bounds.min, bounds.max);
        let hi = self.hi.clamp(bounds.min, bounds.max);
        if lo <= hi {
            PayloadRange { lo, hi }
        } else {
            PayloadRange { lo: hi, hi: lo }
        }
    }

    /// Lower handle moved to `lo`; the upper handle is pushed up if passed.
    pub fn with_lo(self, lo: f64) -> Self {
        PayloadRange::new(lo, self.hi.max(lo))
    }

    /// Upper handle moved to `hi`; the lower handle is pushed down if passed.
    pub fn with_hi(self, hi: f64) -> Self {
        PayloadRange::new(self.lo.min(hi), hi)
    }

    pub fn contains(&self, mass: f64) -> bool {
        self.lo <= mass && mass <= self.hi
    }
}

// ---------------------------------------------------------------------------
// Row selection
// ---------------------------------------------------------------------------

/// Records at the selected site(s), in dataset order.
pub fn records_at<'a>(
    dataset: &'a LaunchDataset,
    site: &'a SiteSelection,
) -> impl Iterator<Item = &'a LaunchRecord> + 'a {
    dataset
        .records()
        .iter()
        .filter(move |r| site.matches(&r.launch_site))
}

/// Records at the selected site(s) whose payload lies within `range`.
pub fn records_in<'a>(
    dataset: &'a LaunchDataset,
    site: &'a SiteSelection,
    range: PayloadRange,
) -> impl Iterator<Item = &'a LaunchRecord> + 'a {
    records_at(dataset, site).filter(move |r| range.contains(r.payload_mass_kg))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::sample_dataset;
    use pretty_assertions::assert_eq;

    #[test]
    fn dropdown_labels_use_sentinel_and_site_name() {
        assert_eq!(SiteSelection::All.to_string(), ALL_SITES);
        assert_eq!(SiteSelection::Site("KSC LC-39A".into()).to_string(), "KSC LC-39A");
    }

    #[test]
    fn options_start_with_sentinel() {
        let ds = sample_dataset();
        assert_eq!(
            site_options(&ds),
            vec![
                SiteSelection::All,
                SiteSelection::Site("A".into()),
                SiteSelection::Site("B".into()),
            ]
        );
    }

    #[test]
    fn range_is_inclusive_at_both_ends() {
        let r = PayloadRange::new(500.0, 2500.0);
        assert!(r.contains(500.0));
        assert!(r.contains(2500.0));
        assert!(!r.contains(499.9));
        assert!(!r.contains(2500.1));
    }

    #[test]
    fn clamped_stays_within_bounds_and_ordered() {
        let bounds = PayloadBounds { min: 0.0, max: 9600.0 };
        assert_eq!(
            PayloadRange::new(-1000.0, 20000.0).clamped(bounds),
            PayloadRange::full(bounds)
        );
        assert_eq!(
            PayloadRange::new(7000.0, 3000.0).clamped(bounds),
            PayloadRange::new(3000.0, 7000.0)
        );
    }

    #[test]
    fn moving_lower_handle_past_upper_pushes_it() {
        let r = PayloadRange::new(2000.0, 4000.0);
        assert_eq!(r.with_lo(3000.0), PayloadRange::new(3000.0, 4000.0));
        assert_eq!(r.with_lo(6000.0), PayloadRange::new(6000.0, 6000.0));
    }

    #[test]
    fn moving_upper_handle_past_lower_pushes_it() {
        let r = PayloadRange::new(2000.0, 4000.0);
        assert_eq!(r.with_hi(3000.0), PayloadRange::new(2000.0, 3000.0));
        assert_eq!(r.with_hi(1000.0), PayloadRange::new(1000.0, 1000.0));
    }

    #[test]
    fn records_in_combines_site_and_range() {
        let ds = sample_dataset();
        let site = SiteSelection::Site("A".into());
        let masses: Vec<f64> = records_in(&ds, &site, PayloadRange::new(0.0, 3000.0))
            .map(|r| r.payload_mass_kg)
            .collect();
        assert_eq!(masses, vec![2500.0, 0.0]);
    }

    #[test]
    fn unknown_site_matches_nothing() {
        let ds = sample_dataset();
        let site = SiteSelection::Site("Boca Chica".into());
        assert_eq!(records_at(&ds, &site).count(), 0);
    }
}
