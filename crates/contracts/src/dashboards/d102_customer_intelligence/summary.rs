use super::dto::{field, CustomerRecord};
use crate::dashboards::common::catalog::round1;
use crate::shared::kpi::{average, sum_field, Kpi, KpiValue};
use crate::shared::pipeline::aggregate::{COMPACT_LABEL_LEN, LEAD_POTENTIAL_LABELS};
use crate::shared::pipeline::{
    aggregate, bucket_value, in_label_order, to_chart_points, top_key, AggregateSpec, BucketOrder,
    ChartPoint, GroupKey,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerSummary {
    pub kpis: Vec<Kpi>,
    /// Hot, Warm, Cold; absent labels are left out
    pub by_lead_potential: Vec<ChartPoint>,
    pub by_industry: Vec<ChartPoint>,
    pub by_tier: Vec<ChartPoint>,
}

pub fn summarize(rows: &[&CustomerRecord], label_max_len: usize) -> CustomerSummary {
    let by_lead = aggregate(
        rows,
        &AggregateSpec::count(GroupKey::lead_potential(field::LEAD_POTENTIAL))
            .ordered(BucketOrder::Unordered),
    );
    let by_lead = in_label_order(&by_lead, LEAD_POTENTIAL_LABELS);
    let by_industry = aggregate(
        rows,
        &AggregateSpec::count(GroupKey::categorical(field::KEY_INDUSTRY)),
    );
    let by_tier = aggregate(
        rows,
        &AggregateSpec::count(GroupKey::categorical(field::CUSTOMER_TIER))
            .ordered(BucketOrder::KeyAsc),
    );

    CustomerSummary {
        kpis: kpis(rows, bucket_value(&by_lead, "Hot"), top_key(&by_industry)),
        by_lead_potential: to_chart_points(&by_lead, label_max_len),
        by_industry: to_chart_points(&by_industry, label_max_len.min(COMPACT_LABEL_LEN)),
        by_tier: to_chart_points(&by_tier, label_max_len),
    }
}

fn kpis(rows: &[&CustomerRecord], hot: f64, top_industry: Option<String>) -> Vec<Kpi> {
    let avg_score = if rows.is_empty() {
        KpiValue::NotAvailable
    } else {
        KpiValue::Number(round1(average(
            sum_field(rows, field::RELATIONSHIP_STRENGTH_SCORE),
            rows.len(),
        )))
    };

    vec![
        Kpi::new("Total Customers", KpiValue::Number(rows.len() as f64)),
        Kpi::new("Hot Leads", KpiValue::Number(hot)),
        Kpi::new("Avg Relationship Score", avg_score),
        Kpi::new("Top Industry", KpiValue::text_or_na(top_industry)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::common::RegionTab;
    use crate::dashboards::d102_customer_intelligence::demo;

    fn with(lead: &str, industry: &str, score: f64) -> CustomerRecord {
        let mut record = demo::generate(RegionTab::India).remove(0);
        record.lead_potential = lead.to_string();
        record.key_industry = industry.to_string();
        record.relationship_strength_score = score;
        record
    }

    #[test]
    fn test_lead_potential_is_normalised() {
        let data = [
            with("SuperHot", "Retail", 8.0),
            with("warm lead", "Retail", 6.0),
            with("COLD", "Energy", 4.0),
        ];
        let rows: Vec<&CustomerRecord> = data.iter().collect();
        let summary = summarize(&rows, 47);

        let leads: Vec<(&str, f64)> = summary
            .by_lead_potential
            .iter()
            .map(|p| (p.label.as_str(), p.value))
            .collect();
        assert_eq!(leads, vec![("Hot", 1.0), ("Warm", 1.0), ("Cold", 1.0)]);

        assert_eq!(summary.kpis[0].value.to_string(), "3");
        assert_eq!(summary.kpis[1].value.to_string(), "1");
        assert_eq!(summary.kpis[2].value.to_string(), "6");
        assert_eq!(summary.kpis[3].value.to_string(), "Retail");
    }

    #[test]
    fn test_industry_labels_use_compact_width() {
        let data = [with("Hot", "Banking, Financial Services and Insurance", 5.0)];
        let rows: Vec<&CustomerRecord> = data.iter().collect();
        let summary = summarize(&rows, 47);
        assert_eq!(summary.by_industry[0].label, "Banking, Financial Services and Insur...");
        assert_eq!(summary.by_industry[0].key, "Banking, Financial Services and Insurance");
    }

    #[test]
    fn test_empty_selection() {
        let summary = summarize(&[], 47);
        assert_eq!(summary.kpis[0].value.to_string(), "0");
        assert_eq!(summary.kpis[2].value, KpiValue::NotAvailable);
        assert_eq!(summary.kpis[3].value, KpiValue::NotAvailable);
        assert!(summary.by_lead_potential.is_empty());
    }
}
