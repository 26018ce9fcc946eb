pub mod formatter;
pub mod report;

pub use formatter::{
    format_assessment, format_fields, format_methods, format_no_result, format_score_line,
    should_use_colors, terminal_width,
};
pub use report::{render_json, write_reports, Report};
