mod formatter;

pub use formatter::{format_facility_table, format_risk_summary, should_use_colors};
