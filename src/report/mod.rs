mod charts;
mod reshape;
mod spreadsheet;

pub use charts::{to_frequency_charts, ChartBar, FrequencyChart};
pub use reshape::{question_labels, reshape, ResponseTable};
pub use spreadsheet::{to_spreadsheet, XLSX_MIME};
