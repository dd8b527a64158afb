use crate::types::GetReportsResponse;

pub const NO_DATA_NOTICE: &str = "No data found for given view.";

/// Render a batch report response as padded text.
///
/// One header line per report (dimension names then metric names), one line
/// per row (dimension values then every metric value of every value group),
/// each field wrapped as `" {value} "`. Order is preserved exactly as
/// received. An empty or absent row collection yields the no-data notice in
/// place of row lines; an absent response yields no output at all.
pub fn render(response: Option<&GetReportsResponse>) -> String {
    let mut output = String::new();

    let Some(response) = response else {
        return output;
    };

    for report in &response.reports {
        let header = &report.column_header;

        for name in &header.dimensions {
            output.push_str(&format!(" {name} "));
        }
        for entry in &header.metric_header.metric_header_entries {
            output.push_str(&format!(" {} ", entry.name));
        }
        output.push('\n');

        if report.data.rows.is_empty() {
            output.push_str(NO_DATA_NOTICE);
            output.push('\n');
            continue;
        }

        for row in &report.data.rows {
            for value in &row.dimensions {
                output.push_str(&format!(" {value} "));
            }
            for group in &row.metrics {
                for value in &group.values {
                    output.push_str(&format!(" {value} "));
                }
            }
            output.push('\n');
        }
    }

    output
}

/// Render to standard output.
pub fn print(response: Option<&GetReportsResponse>) {
    print!("{}", render(response));
}
