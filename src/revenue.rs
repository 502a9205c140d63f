//! The monthly revenue disclosure row.

use serde::{Deserialize, Serialize};

/// One row of a monthly company-revenue disclosure.
///
/// Listed companies report the prior month's operating revenue through the
/// exchange's disclosure system; one value of this type is one disclosed
/// company-month. Amounts follow the exchange convention of thousands of
/// New Taiwan dollars. The four growth percentages are the service's own
/// derivations from the corresponding absolute figures; nothing here
/// recomputes or checks them. Rows produced by a paged query also echo
/// that query's pagination context in [`RevenueData::page_num`] and
/// [`RevenueData::total`], so those two values repeat on every row of a
/// page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueData {
    /// Date the disclosure was published (出表日期), e.g. `"2024-05-10"`.
    pub publish_date: String,

    /// Fiscal year-month the figures cover (資料年月), e.g. `"2024-04"`.
    #[serde(rename = "year_Date")]
    pub year_month: String,

    /// Stock code identifying the company (公司代號), e.g. `"2330"`.
    pub company_code: String,

    /// Registered company name (公司名稱).
    pub company_name: String,

    /// Exchange industry classification (產業別).
    pub industry_name: String,

    /// Operating revenue for the disclosed month.
    #[serde(rename = "revenue_CurrentMonth")]
    pub revenue_current_month: f64,

    /// Operating revenue for the month before the disclosed month.
    #[serde(rename = "revenue_PreviousMonth")]
    pub revenue_previous_month: f64,

    /// Operating revenue for the same month one year earlier.
    #[serde(rename = "revenue_SameMonthLastYear")]
    pub revenue_same_month_last_year: f64,

    /// Month-over-month revenue change, in percent.
    #[serde(rename = "revenue_MonthOverMonthGrowthPct")]
    pub revenue_month_over_month_growth_pct: f64,

    /// Year-over-year revenue change, in percent.
    #[serde(rename = "revenue_YearOverYearGrowthPct")]
    pub revenue_year_over_year_growth_pct: f64,

    /// Revenue accumulated from January through the disclosed month.
    #[serde(rename = "cumulativeRevenue_CurrentMonth")]
    pub cumulative_revenue_current_month: f64,

    /// Revenue accumulated over the same period one year earlier.
    #[serde(rename = "cumulativeRevenue_LastYear")]
    pub cumulative_revenue_last_year: f64,

    /// Period-over-period change of the cumulative figures, in percent.
    #[serde(rename = "cumulativeRevenue_PeriodOverPeriodGrowthPct")]
    pub cumulative_revenue_period_over_period_growth_pct: f64,

    /// Free-text notes attached by the company (備註); often empty.
    pub memo: String,

    /// Total pages available for the query that produced this row.
    pub page_num: i64,

    /// Total record count across all pages of that query.
    pub total: i64,
}
