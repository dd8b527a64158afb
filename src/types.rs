use serde::{Deserialize, Serialize};

/// Top-level body for a `reports:batchGet` call
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetReportsRequest {
    pub report_requests: Vec<ReportRequest>,
}

/// A single report query within a batch request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    pub view_id: String,
    pub date_ranges: Vec<DateRange>,
    pub metrics: Vec<Metric>,
    pub metric_filter_clauses: Vec<MetricFilterClause>,
    pub dimensions: Vec<Dimension>,
}

/// Inclusive date range; end may be a keyword like "today"
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start_date: String,
    pub end_date: String,
}

/// A requested metric with its display alias
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metric {
    pub expression: String,
    pub alias: String,
}

/// A requested dimension breakdown
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dimension {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricFilterClause {
    pub filters: Vec<MetricFilter>,
}

/// Server-side row restriction on a metric value
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricFilter {
    pub metric_name: String,
    pub operator: String,
    pub comparison_value: String,
}

/// Response from `reports:batchGet`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GetReportsResponse {
    #[serde(default)]
    pub reports: Vec<Report>,
}

/// One report in the batch response
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    #[serde(default)]
    pub column_header: ColumnHeader,
    #[serde(default)]
    pub data: ReportData,
}

/// Column layout: dimension names followed by metric headers
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ColumnHeader {
    #[serde(default)]
    pub dimensions: Vec<String>,
    #[serde(default)]
    pub metric_header: MetricHeader,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MetricHeader {
    #[serde(default)]
    pub metric_header_entries: Vec<MetricHeaderEntry>,
}

/// Header for one metric column; `type` is the API's value type tag
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricHeaderEntry {
    pub name: String,
    pub r#type: Option<String>,
}

/// Row data for one report
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ReportData {
    #[serde(default)]
    pub rows: Vec<ReportRow>,
    pub row_count: Option<i64>,
    #[serde(default)]
    pub totals: Vec<DateRangeValues>,
    pub is_data_golden: Option<bool>,
}

/// One result row: dimension values, then one value group per date range
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow {
    #[serde(default)]
    pub dimensions: Vec<String>,
    #[serde(default)]
    pub metrics: Vec<DateRangeValues>,
}

/// Metric values for one date range
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DateRangeValues {
    #[serde(default)]
    pub values: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_serializes_to_camel_case() {
        let request = GetReportsRequest {
            report_requests: vec![ReportRequest {
                view_id: "12345".to_string(),
                date_ranges: vec![DateRange {
                    start_date: "2022-09-01".to_string(),
                    end_date: "today".to_string(),
                }],
                metrics: vec![Metric {
                    expression: "ga:users".to_string(),
                    alias: "Users".to_string(),
                }],
                metric_filter_clauses: vec![MetricFilterClause {
                    filters: vec![MetricFilter {
                        metric_name: "ga:transactions".to_string(),
                        operator: "GREATER_THAN".to_string(),
                        comparison_value: "20".to_string(),
                    }],
                }],
                dimensions: vec![Dimension {
                    name: "ga:country".to_string(),
                }],
            }],
        };

        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(
            value,
            json!({
                "reportRequests": [{
                    "viewId": "12345",
                    "dateRanges": [{"startDate": "2022-09-01", "endDate": "today"}],
                    "metrics": [{"expression": "ga:users", "alias": "Users"}],
                    "metricFilterClauses": [{
                        "filters": [{
                            "metricName": "ga:transactions",
                            "operator": "GREATER_THAN",
                            "comparisonValue": "20"
                        }]
                    }],
                    "dimensions": [{"name": "ga:country"}]
                }]
            })
        );
    }

    #[test]
    fn test_response_deserializes_wire_format() {
        let body = json!({
            "reports": [{
                "columnHeader": {
                    "dimensions": ["ga:country", "ga:city"],
                    "metricHeader": {
                        "metricHeaderEntries": [
                            {"name": "Users", "type": "INTEGER"},
                            {"name": "Revenue", "type": "CURRENCY"}
                        ]
                    }
                },
                "data": {
                    "rows": [{
                        "dimensions": ["USA", "NYC"],
                        "metrics": [{"values": ["42", "13.37"]}]
                    }],
                    "totals": [{"values": ["42", "13.37"]}],
                    "rowCount": 1,
                    "isDataGolden": true
                }
            }]
        });

        let response: GetReportsResponse = serde_json::from_value(body).unwrap();

        assert_eq!(response.reports.len(), 1);
        let report = &response.reports[0];
        assert_eq!(report.column_header.dimensions, vec!["ga:country", "ga:city"]);
        assert_eq!(
            report.column_header.metric_header.metric_header_entries[0].name,
            "Users"
        );
        assert_eq!(
            report.column_header.metric_header.metric_header_entries[1]
                .r#type
                .as_deref(),
            Some("CURRENCY")
        );
        assert_eq!(report.data.row_count, Some(1));
        assert_eq!(report.data.is_data_golden, Some(true));
        assert_eq!(report.data.rows[0].dimensions, vec!["USA", "NYC"]);
        assert_eq!(report.data.rows[0].metrics[0].values, vec!["42", "13.37"]);
    }

    #[test]
    fn test_response_tolerates_missing_rows() {
        let body = json!({
            "reports": [{
                "columnHeader": {
                    "dimensions": ["ga:country"],
                    "metricHeader": {
                        "metricHeaderEntries": [{"name": "Users"}]
                    }
                },
                "data": {}
            }]
        });

        let response: GetReportsResponse = serde_json::from_value(body).unwrap();

        assert!(response.reports[0].data.rows.is_empty());
        assert_eq!(response.reports[0].data.row_count, None);
    }

    #[test]
    fn test_empty_response_body() {
        let response: GetReportsResponse = serde_json::from_value(json!({})).unwrap();
        assert!(response.reports.is_empty());
    }
}
