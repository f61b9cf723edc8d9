//! Aggregate → [`ChartSpec`] mappings.
//!
//! Pure functions: no validation beyond what decoding already did, so an
//! empty or partial aggregate simply yields an empty or partial chart.

use api::{ComponentBreakdown, CycleTrendPoint, Distribution, TesterBreakdown, TesterCounts};

use super::palette::{
    donut_label, series_label, Category, COMPONENT_BAR_BORDER, COMPONENT_BAR_FILL,
};
use super::spec::{Axis, ChartKind, ChartSpec, Dataset, LegendPosition, Paint, Side};
use crate::core::format::percent_value;

/// Classification distribution as a doughnut, one slice per category.
pub fn classification_donut(distribution: &Distribution) -> ChartSpec {
    let labels = distribution.keys().map(donut_label).collect();
    let values = distribution.values().map(|&count| count as f64).collect();
    let colors = distribution
        .keys()
        .map(|key| Category::parse(key).color().to_string())
        .collect();

    let mut slices = Dataset::new("", values, Paint::PerPoint(colors));
    slices.border_width = Some(2);
    slices.border_color = Some("#fff".into());

    ChartSpec {
        kind: ChartKind::Doughnut,
        labels,
        datasets: vec![slices],
        scales: Vec::new(),
        legend: LegendPosition::Bottom,
    }
}

/// Valid / invalid / duplicate counts stacked per tester, testers in input order.
pub fn tester_stacked_bar(testers: &TesterBreakdown) -> ChartSpec {
    let series: [(&str, Category, fn(&TesterCounts) -> u64); 3] = [
        ("Valid", Category::Valid, |c| c.valid),
        ("Invalid", Category::Invalid, |c| c.invalid),
        ("Duplicate", Category::Duplicate, |c| c.duplicate),
    ];

    let datasets = series
        .into_iter()
        .map(|(label, category, count)| {
            let data = testers.values().map(|c| count(c) as f64).collect();
            Dataset::new(label, data, Paint::Solid(category.color().into()))
        })
        .collect();

    ChartSpec {
        kind: ChartKind::Bar,
        labels: testers.keys().map(str::to_string).collect(),
        datasets,
        scales: stacked_axes(),
        legend: LegendPosition::Top,
    }
}

/// Accuracy, invalid and duplicate rates per cycle, as percentages on a 0–100 axis.
pub fn trend_line(trends: &[CycleTrendPoint]) -> ChartSpec {
    let series = |pick: fn(&CycleTrendPoint) -> f64| -> Vec<f64> {
        trends.iter().map(|point| percent_value(pick(point))).collect()
    };

    let valid = Category::Valid.color();
    let mut accuracy = Dataset::new(
        "Testing Accuracy",
        series(|p| p.testing_accuracy),
        Paint::Solid(format!("{valid}33")),
    );
    accuracy.border_color = Some(valid.into());
    accuracy.fill = true;
    accuracy.tension = Some(0.3);

    let mut invalid = Dataset::new(
        "Invalid Rate",
        series(|p| p.invalid_rate),
        Paint::Solid(Category::Invalid.color().into()),
    );
    invalid.border_color = Some(Category::Invalid.color().into());
    invalid.tension = Some(0.3);

    let mut duplicate = Dataset::new(
        "Duplicate Rate",
        series(|p| p.duplicate_rate),
        Paint::Solid(Category::Duplicate.color().into()),
    );
    duplicate.border_color = Some(Category::Duplicate.color().into());
    duplicate.tension = Some(0.3);

    let mut y = Axis::new("y");
    y.begin_at_zero = true;
    y.max = Some(100.0);
    y.tick_suffix = Some("%");

    ChartSpec {
        kind: ChartKind::Line,
        labels: cycle_labels(trends),
        datasets: vec![accuracy, invalid, duplicate],
        scales: vec![y],
        legend: LegendPosition::Top,
    }
}

/// Every known category stacked per cycle; a category a cycle lacks counts as 0.
pub fn category_by_cycle_bar(trends: &[CycleTrendPoint]) -> ChartSpec {
    let datasets = Category::KNOWN
        .iter()
        .map(|category| {
            let data = trends
                .iter()
                .map(|point| {
                    point
                        .classification_distribution
                        .as_ref()
                        .and_then(|dist| dist.get(category.key()))
                        .copied()
                        .unwrap_or(0) as f64
                })
                .collect();
            Dataset::new(
                series_label(category.key()),
                data,
                Paint::Solid(category.color().into()),
            )
        })
        .collect();

    ChartSpec {
        kind: ChartKind::Bar,
        labels: cycle_labels(trends),
        datasets,
        scales: stacked_axes(),
        legend: LegendPosition::Top,
    }
}

/// Bug count bars on the left axis with an accuracy line on an independent 0–100 right axis.
pub fn component_dual_axis(components: &ComponentBreakdown) -> ChartSpec {
    let mut totals = Dataset::new(
        "Total Bugs",
        components.values().map(|m| m.total as f64).collect(),
        Paint::Solid(COMPONENT_BAR_FILL.into()),
    );
    totals.border_color = Some(COMPONENT_BAR_BORDER.into());
    totals.border_width = Some(1);
    totals.axis = Some("y");

    let valid = Category::Valid.color();
    let mut accuracy = Dataset::new(
        "Accuracy %",
        components
            .values()
            .map(|m| percent_value(m.accuracy))
            .collect(),
        Paint::Solid(valid.into()),
    );
    accuracy.kind = Some(ChartKind::Line);
    accuracy.border_color = Some(valid.into());
    accuracy.point_radius = Some(5);
    accuracy.axis = Some("y1");

    let mut counts = Axis::new("y");
    counts.begin_at_zero = true;
    counts.position = Some(Side::Left);
    counts.title = Some("Bug Count".into());

    let mut percent = Axis::new("y1");
    percent.begin_at_zero = true;
    percent.max = Some(100.0);
    percent.position = Some(Side::Right);
    percent.title = Some("Accuracy %".into());
    percent.grid_on_chart_area = false;

    ChartSpec {
        kind: ChartKind::Bar,
        labels: components.keys().map(str::to_string).collect(),
        datasets: vec![totals, accuracy],
        scales: vec![counts, percent],
        legend: LegendPosition::Top,
    }
}

fn cycle_labels(trends: &[CycleTrendPoint]) -> Vec<String> {
    trends.iter().map(|p| p.cycle_name.clone()).collect()
}

fn stacked_axes() -> Vec<Axis> {
    let mut x = Axis::new("x");
    x.stacked = true;
    let mut y = Axis::new("y");
    y.stacked = true;
    y.begin_at_zero = true;
    vec![x, y]
}
