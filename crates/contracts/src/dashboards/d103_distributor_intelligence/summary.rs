use super::dto::{field, DistributorRecord};
use crate::shared::kpi::{sum_field, Kpi, KpiValue};
use crate::shared::pipeline::aggregate::LEAD_POTENTIAL_LABELS;
use crate::shared::pipeline::{
    aggregate, bucket_value, in_label_order, to_chart_points, top_key, AggregateSpec, BucketOrder,
    ChartPoint, GroupKey,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributorSummary {
    pub kpis: Vec<Kpi>,
    pub volume_by_country: Vec<ChartPoint>,
    pub by_lead_potential: Vec<ChartPoint>,
    pub by_channel: Vec<ChartPoint>,
}

pub fn summarize(rows: &[&DistributorRecord], label_max_len: usize) -> DistributorSummary {
    let volume_by_country = aggregate(
        rows,
        &AggregateSpec::sum(GroupKey::categorical(field::COUNTRY), field::ANNUAL_VOLUME),
    );
    let by_lead = aggregate(
        rows,
        &AggregateSpec::count(GroupKey::lead_potential(field::LEAD_POTENTIAL))
            .ordered(BucketOrder::Unordered),
    );
    let by_lead = in_label_order(&by_lead, LEAD_POTENTIAL_LABELS);
    let by_channel = aggregate(
        rows,
        &AggregateSpec::count(GroupKey::categorical(field::CHANNEL)),
    );

    let total_volume = if rows.is_empty() {
        KpiValue::NotAvailable
    } else {
        KpiValue::Number(sum_field(rows, field::ANNUAL_VOLUME))
    };
    let hot = bucket_value(&by_lead, "Hot");

    DistributorSummary {
        kpis: vec![
            Kpi::new("Total Distributors", KpiValue::Number(rows.len() as f64)),
            Kpi::new("Total Annual Volume", total_volume),
            Kpi::new("Hot Leads", KpiValue::Number(hot)),
            Kpi::new("Top Country", KpiValue::text_or_na(top_key(&volume_by_country))),
        ],
        volume_by_country: to_chart_points(&volume_by_country, label_max_len),
        by_lead_potential: to_chart_points(&by_lead, label_max_len),
        by_channel: to_chart_points(&by_channel, label_max_len),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(country: &str, channel: &str, volume: &str, lead: &str) -> DistributorRecord {
        DistributorRecord {
            distributor_name: "MedLine Trading".into(),
            country: country.into(),
            city: "Mumbai".into(),
            region: "Asia".into(),
            channel: channel.into(),
            brands_carried: "Fluarix".into(),
            annual_volume: volume.into(),
            coverage: "National".into(),
            lead_potential: lead.into(),
            partnership_status: "Prospect".into(),
            contact_email: "sales@medline.com".into(),
        }
    }

    #[test]
    fn test_volume_text_is_coerced() {
        let data = [
            rec("India", "Wholesale", "12,500 units", "hot lead"),
            rec("India", "E-commerce", "2,500 units", "Cold"),
            rec("Japan", "Wholesale", "n/a", "warm - follow up"),
        ];
        let rows: Vec<&DistributorRecord> = data.iter().collect();
        let summary = summarize(&rows, 47);

        assert_eq!(summary.kpis[0].value.to_string(), "3");
        assert_eq!(summary.kpis[1].value.to_string(), "15,000");
        assert_eq!(summary.kpis[2].value.to_string(), "1");
        assert_eq!(summary.kpis[3].value.to_string(), "India");

        assert_eq!(summary.volume_by_country[0].value, 15000.0);
        assert_eq!(summary.volume_by_country[1].value, 0.0);
        assert_eq!(summary.by_channel[0].label, "Wholesale");
        let leads: Vec<&str> = summary.by_lead_potential.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(leads, vec!["Hot", "Warm", "Cold"]);
    }

    #[test]
    fn test_empty_selection() {
        let summary = summarize(&[], 47);
        assert_eq!(summary.kpis[1].value, KpiValue::NotAvailable);
        assert_eq!(summary.kpis[3].value, KpiValue::NotAvailable);
        assert!(summary.volume_by_country.is_empty());
    }
}
