/// Data layer: launch records, loading, and view filters.
///
/// Architecture:
/// ```text
///   spacex_launch_dash.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse + validate rows → LaunchDataset
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ LaunchDataset │  Vec<LaunchRecord>, payload bounds, site summaries
///   └───────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  site selection + payload range → matching records
///   └──────────┘
/// ```
pub mod filter;
pub mod loader;
pub mod model;
