use crate::types::{
    DateRange, Dimension, GetReportsRequest, Metric, MetricFilter, MetricFilterClause,
    ReportRequest,
};

/// The analytics view this reporter is wired to.
pub const VIEW_ID: &str = "261593436";

/// Build the one fixed report query: sessions and revenue metrics since
/// 2022-09-01, broken down by country and city, restricted to rows with
/// more than 20 transactions.
pub fn build_report_request() -> GetReportsRequest {
    GetReportsRequest {
        report_requests: vec![ReportRequest {
            view_id: VIEW_ID.to_string(),
            date_ranges: vec![DateRange {
                start_date: "2022-09-01".to_string(),
                end_date: "today".to_string(),
            }],
            metrics: vec![
                Metric {
                    expression: "ga:users".to_string(),
                    alias: "Users".to_string(),
                },
                Metric {
                    expression: "ga:sessions".to_string(),
                    alias: "Sessions".to_string(),
                },
                Metric {
                    expression: "ga:transactions".to_string(),
                    alias: "Transactions".to_string(),
                },
                Metric {
                    expression: "ga:transactionRevenue".to_string(),
                    alias: "Revenue".to_string(),
                },
            ],
            metric_filter_clauses: vec![MetricFilterClause {
                filters: vec![MetricFilter {
                    metric_name: "ga:transactions".to_string(),
                    operator: "GREATER_THAN".to_string(),
                    comparison_value: "20".to_string(),
                }],
            }],
            dimensions: vec![
                Dimension {
                    name: "ga:country".to_string(),
                },
                Dimension {
                    name: "ga:city".to_string(),
                },
            ],
        }],
    }
}
