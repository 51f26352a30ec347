//! Stanza table construction for the derived tables.

use stanza::style::{HAlign, Header, MinWidth, Styles};
use stanza::table::{Col, Row, Table};
use strum::IntoEnumIterator;

use crate::distribution::GoalDistribution;
use crate::domain::Metric;
use crate::radar::NormalizedTeamSummary;
use crate::summary::TeamSummary;

fn value_cell(value: Option<f64>) -> String {
    match value {
        None => "-".into(),
        Some(value) => format!("{value:.2}"),
    }
}

pub fn tabulate_summaries(rows: &[TeamSummary]) -> Table {
    let mut table = Table::default()
        .with_cols({
            let mut cols = vec![Col::new(
                Styles::default().with(MinWidth(14)).with(HAlign::Left),
            )];
            for _ in Metric::iter() {
                cols.push(Col::new(
                    Styles::default().with(MinWidth(9)).with(HAlign::Right),
                ));
            }
            cols
        })
        .with_row(Row::new(Styles::default().with(Header(true)), {
            let mut cells = vec!["Team".into()];
            for metric in Metric::iter() {
                cells.push(metric.to_string().into());
            }
            cells
        }));
    for row in rows {
        let mut cells = vec![row.team_name.clone().into()];
        for metric in Metric::iter() {
            cells.push(value_cell(row.value(metric)).into());
        }
        table.push_row(Row::new(Styles::default(), cells));
    }
    table
}

pub fn tabulate_goal_distribution(rows: &[GoalDistribution]) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(14)).with(HAlign::Left)),
            Col::new(Styles::default().with(MinWidth(10)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(11)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(8)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(7)).with(HAlign::Right)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)),
            vec![
                "Team".into(),
                "First half".into(),
                "Second half".into(),
                "Overtime".into(),
                "Played".into(),
            ],
        ));
    for row in rows {
        table.push_row(Row::new(
            Styles::default(),
            vec![
                row.team_name.clone().into(),
                row.first_half.to_string().into(),
                row.second_half.to_string().into(),
                row.overtime.to_string().into(),
                row.match_count.to_string().into(),
            ],
        ));
    }
    table
}

pub fn tabulate_radar(row: &NormalizedTeamSummary, metrics: &[Metric]) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(28)).with(HAlign::Left)),
            Col::new(Styles::default().with(MinWidth(9)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(10)).with(HAlign::Right)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)),
            vec!["Metric".into(), "Raw".into(), "Normalised".into()],
        ));
    for &metric in metrics {
        table.push_row(Row::new(
            Styles::default(),
            vec![
                metric.to_string().into(),
                value_cell(row.summary.value(metric)).into(),
                match row.normalized_value(metric) {
                    None => "-".into(),
                    Some(value) => format!("{value:.3}").into(),
                },
            ],
        ));
    }
    table
}
