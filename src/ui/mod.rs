/// Widgets: input panels and chart renderers.
pub mod panels;
pub mod plot;
