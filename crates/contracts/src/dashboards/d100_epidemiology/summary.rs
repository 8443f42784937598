use super::dto::{field, EpidemiologyRecord};
use crate::shared::kpi::{average, sum_field, total, Kpi, KpiValue};
use crate::shared::pipeline::{
    aggregate, aggregate_series, to_chart_points, top_key, AggregateSpec, BucketOrder, ChartPoint,
    GroupKey, SeriesRow,
};
use serde::{Deserialize, Serialize};

/// KPI cards and chart series of the epidemiology page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpidemiologySummary {
    pub kpis: Vec<Kpi>,
    pub prevalence_by_disease: Vec<ChartPoint>,
    pub incidence_by_region: Vec<ChartPoint>,
    /// Per year: `[prevalence, incidence]`, chronological
    pub yearly_trend: Vec<SeriesRow>,
}

pub const TREND_SERIES: &[&str] = &[field::PREVALENCE, field::INCIDENCE];

pub fn summarize(rows: &[&EpidemiologyRecord], label_max_len: usize) -> EpidemiologySummary {
    let by_disease = aggregate(
        rows,
        &AggregateSpec::sum(GroupKey::categorical(field::DISEASE), field::PREVALENCE),
    );
    let by_region = aggregate(
        rows,
        &AggregateSpec::sum(GroupKey::categorical(field::REGION), field::INCIDENCE),
    );
    let yearly_trend = aggregate_series(
        rows,
        &GroupKey::chronological(field::YEAR),
        TREND_SERIES,
        BucketOrder::KeyAsc,
    );

    EpidemiologySummary {
        kpis: kpis(rows, top_key(&by_disease)),
        prevalence_by_disease: to_chart_points(&by_disease, label_max_len),
        incidence_by_region: to_chart_points(&by_region, label_max_len),
        yearly_trend,
    }
}

fn kpis(rows: &[&EpidemiologyRecord], top_disease: Option<String>) -> Vec<Kpi> {
    let avg_incidence = if rows.is_empty() {
        KpiValue::NotAvailable
    } else {
        KpiValue::Number(average(sum_field(rows, field::INCIDENCE), rows.len()))
    };

    vec![
        Kpi::new("Total Prevalence", total(rows, field::PREVALENCE)),
        Kpi::new("Total Incidence", total(rows, field::INCIDENCE)),
        Kpi::new("Top Disease", KpiValue::text_or_na(top_disease)),
        Kpi::new("Avg Incidence Rate", avg_incidence),
    ]
}
