use crate::chart::{PieChart, ScatterChart, pie_chart, scatter_chart};
use crate::color::ColorMap;
use crate::data::filter::{PayloadRange, SiteSelection};
use crate::data::model::LaunchDataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// Inputs are only changed through the setters, which recompute exactly the
/// charts that depend on the changed input.
pub struct AppState {
    /// Loaded dataset (read-only until replaced via File → Open).
    pub dataset: LaunchDataset,

    /// Dropdown value.
    pub site: SiteSelection,

    /// Slider value, always within the dataset's payload bounds.
    pub payload_range: PayloadRange,

    /// Current chart values.
    pub pie: PieChart,
    pub scatter: ScatterChart,

    /// Slice colours for the current pie.
    pub pie_colors: ColorMap,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(dataset: LaunchDataset) -> Self {
        let site = SiteSelection::All;
        let payload_range = PayloadRange::full(dataset.bounds());
        let pie = pie_chart(&dataset, &site);
        let scatter = scatter_chart(&dataset, &site, payload_range);
        let pie_colors = colors_for(&pie);
        Self {
            dataset,
            site,
            payload_range,
            pie,
            scatter,
            pie_colors,
            status_message: None,
        }
    }

    /// Replace the dataset and reset inputs to their defaults.
    pub fn set_dataset(&mut self, dataset: LaunchDataset) {
        *self = AppState::new(dataset);
    }

    /// Dropdown changed: both charts depend on the site.
    pub fn set_site(&mut self, site: SiteSelection) {
        if site == self.site {
            return;
        }
        log::debug!("Site selection changed to {site}");
        self.site = site;
        self.pie = pie_chart(&self.dataset, &self.site);
        self.pie_colors = colors_for(&self.pie);
        self.refresh_scatter();
    }

    /// Slider changed: only the scatter chart depends on the range.
    pub fn set_payload_range(&mut self, range: PayloadRange) {
        let range = range.clamped(self.dataset.bounds());
        if range == self.payload_range {
            return;
        }
        log::debug!("Payload range changed to [{}, {}]", range.lo, range.hi);
        self.payload_range = range;
        self.refresh_scatter();
    }

    fn refresh_scatter(&mut self) {
        self.scatter = scatter_chart(&self.dataset, &self.site, self.payload_range);
    }
}

fn colors_for(pie: &PieChart) -> ColorMap {
    ColorMap::new(pie.slices.iter().map(|s| s.label.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::sample_dataset;
    use pretty_assertions::assert_eq;

    #[test]
    fn starts_with_all_sites_and_full_range() {
        let state = AppState::new(sample_dataset());
        assert_eq!(state.site, SiteSelection::All);
        assert_eq!(state.payload_range, PayloadRange::new(0.0, 9600.0));
        assert_eq!(state.scatter.points.len(), 5);
        assert_eq!(state.pie.slices.len(), 2);
    }

    #[test]
    fn site_change_recomputes_both_charts() {
        let mut state = AppState::new(sample_dataset());
        state.set_site(SiteSelection::Site("A".into()));
        assert_eq!(state.pie.title, "Success vs. Failed at A");
        assert_eq!(state.scatter.points.len(), 3);
        assert!(state.scatter.points.iter().all(|p| p.site == "A"));
    }

    #[test]
    fn range_change_recomputes_scatter_only() {
        let mut state = AppState::new(sample_dataset());
        let pie_before = state.pie.clone();
        state.set_payload_range(PayloadRange::new(1000.0, 6000.0));
        assert_eq!(state.pie, pie_before);
        assert_eq!(state.scatter.points.len(), 2);
    }

    #[test]
    fn range_is_kept_within_bounds() {
        let mut state = AppState::new(sample_dataset());
        state.set_payload_range(PayloadRange::new(-5000.0, 50_000.0));
        assert_eq!(state.payload_range, PayloadRange::new(0.0, 9600.0));
    }

    #[test]
    fn new_dataset_resets_inputs() {
        let mut state = AppState::new(sample_dataset());
        state.set_site(SiteSelection::Site("B".into()));
        state.set_payload_range(PayloadRange::new(1000.0, 2000.0));
        state.status_message = Some("Error: boom".into());

        state.set_dataset(sample_dataset());
        assert_eq!(state.site, SiteSelection::All);
        assert_eq!(state.payload_range, PayloadRange::new(0.0, 9600.0));
        assert_eq!(state.status_message, None);
    }
}
