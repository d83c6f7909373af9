pub mod formatter;

pub use formatter::{
    format_authenticity_report, format_count, format_score, format_tier, format_value_report,
    format_value_tsv, score_bar, should_use_colors,
};
