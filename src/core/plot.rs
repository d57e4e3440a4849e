//! Time-series chart of income and expenses.
//!
//! The chart is built with `charming` and written as a standalone HTML page
//! that loads ECharts and renders the options.

use crate::errors::{AppError, AppResult};
use crate::models::{Category, Transaction};
use crate::utils::date::format_date;
use charming::{
    Chart,
    component::{Axis, Grid, Legend, Title},
    element::{AxisType, ItemStyle, Tooltip, Trigger},
    series::Line,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;

const ECHARTS_CDN: &str = "https://cdn.jsdelivr.net/npm/echarts@5/dist/echarts.min.js";

/// Summed amounts per date, one value per category; dates are ascending.
#[derive(Debug, Clone, PartialEq)]
pub struct DailySeries {
    pub labels: Vec<String>,
    pub income: Vec<f64>,
    pub expense: Vec<f64>,
}

pub fn daily_series(rows: &[Transaction]) -> DailySeries {
    let mut per_day: BTreeMap<NaiveDate, (Decimal, Decimal)> = BTreeMap::new();
    for t in rows {
        let day = per_day.entry(t.date).or_default();
        match t.category {
            Category::Income => day.0 += t.amount,
            Category::Expense => day.1 += t.amount,
        }
    }

    let to_f64 = |d: &Decimal| d.to_f64().unwrap_or_default();

    DailySeries {
        labels: per_day.keys().map(format_date).collect(),
        income: per_day.values().map(|(i, _)| to_f64(i)).collect(),
        expense: per_day.values().map(|(_, e)| to_f64(e)).collect(),
    }
}

pub fn transactions_chart(series: &DailySeries) -> Chart {
    Chart::new()
        .title(Title::new().text("Income and Expenses Over Time"))
        .tooltip(Tooltip::new().trigger(Trigger::Axis))
        .legend(Legend::new().top("5%"))
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .name("Date")
                .data(series.labels.clone()),
        )
        .y_axis(Axis::new().type_(AxisType::Value).name("Amount"))
        .series(
            Line::new()
                .name("Income")
                .item_style(ItemStyle::new().color("green"))
                .data(series.income.clone()),
        )
        .series(
            Line::new()
                .name("Expense")
                .item_style(ItemStyle::new().color("red"))
                .data(series.expense.clone()),
        )
}

fn render_page(chart: &Chart) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Income and Expenses Over Time</title>
<script src="{ECHARTS_CDN}"></script>
</head>
<body>
<div id="transactions-chart" style="width: 1000px; height: 600px;"></div>
<script>
(function() {{
    const chart = echarts.init(document.getElementById("transactions-chart"));
    chart.setOption({options});
    window.addEventListener('resize', chart.resize);
}})();
</script>
</body>
</html>
"#,
        options = chart
    )
}

pub struct PlotLogic;

impl PlotLogic {
    /// Write the chart page for `rows` to `path`.
    pub fn render(rows: &[Transaction], path: &Path) -> AppResult<()> {
        if rows.is_empty() {
            return Err(AppError::Chart("no transactions to plot".into()));
        }

        let series = daily_series(rows);
        let page = render_page(&transactions_chart(&series));
        fs::write(path, page).map_err(|e| AppError::Chart(format!("{}: {}", path.display(), e)))?;

        debug!(points = series.labels.len(), path = %path.display(), "chart written");
        Ok(())
    }
}
