use super::dto::{field, ProcurementRecord, SECTOR_OPTIONS};
use crate::shared::kpi::{share_kpi, total, Kpi, KpiValue};
use crate::shared::pipeline::{
    aggregate, in_label_order, stack, to_chart_points, top_key, AggregateSpec, ChartPoint, GroupKey,
    SeriesRow,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcurementSummary {
    pub kpis: Vec<Kpi>,
    pub qty_by_procurement: Vec<ChartPoint>,
    /// Public then Private; zero slices are left out
    pub sector_split: Vec<ChartPoint>,
    /// Per year: `[public qty, private qty]`
    pub qty_by_year: Vec<SeriesRow>,
}

pub fn summarize(rows: &[&ProcurementRecord], label_max_len: usize) -> ProcurementSummary {
    let by_procurement = aggregate(
        rows,
        &AggregateSpec::sum(GroupKey::categorical(field::PROCUREMENT), field::QTY),
    );
    let by_sector = aggregate(
        rows,
        &AggregateSpec::sum(GroupKey::categorical(field::PUBLIC_PRIVATE), field::QTY),
    );
    let sector_split: Vec<_> = in_label_order(&by_sector, SECTOR_OPTIONS)
        .into_iter()
        .filter(|b| b.value > 0.0)
        .collect();

    ProcurementSummary {
        kpis: kpis(rows, top_key(&by_procurement)),
        qty_by_procurement: to_chart_points(&by_procurement, label_max_len),
        sector_split: to_chart_points(&sector_split, label_max_len),
        qty_by_year: stack(
            rows,
            &GroupKey::chronological(field::YEAR),
            field::PUBLIC_PRIVATE,
            field::QTY,
            SECTOR_OPTIONS,
        ),
    }
}

fn kpis(rows: &[&ProcurementRecord], top_procurement: Option<String>) -> Vec<Kpi> {
    let public = rows.iter().filter(|r| r.is_public()).count();
    let private = rows.iter().filter(|r| r.is_private()).count();

    vec![
        Kpi::new("Total Quantity", total(rows, field::QTY)),
        Kpi::new("Public Procurement %", share_kpi(public, rows.len())),
        Kpi::new("Private Procurement %", share_kpi(private, rows.len())),
        Kpi::new("Top Procurement Type", KpiValue::text_or_na(top_procurement)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(year: i32, sector: &str, procurement: Option<&str>, qty: f64) -> ProcurementRecord {
        ProcurementRecord {
            year,
            market: "Emerging".into(),
            region: "Asia".into(),
            income_type: "Lower Middle Income".into(),
            country: "India".into(),
            public_private: sector.into(),
            brand: "Fluarix".into(),
            procurement: procurement.map(str::to_string),
            qty,
        }
    }

    #[test]
    fn test_summary_over_rows() {
        let data = [
            rec(2021, "Public", Some("National Tender"), 100.0),
            rec(2020, "Public", Some("National Tender"), 50.0),
            rec(2020, "Private", Some("Retail Pharmacy"), 120.0),
            rec(2020, "Public", None, 10.0),
        ];
        let rows: Vec<&ProcurementRecord> = data.iter().collect();
        let summary = summarize(&rows, 47);

        assert_eq!(summary.kpis[0].value.to_string(), "280");
        assert_eq!(summary.kpis[1].value.to_string(), "75.0%");
        assert_eq!(summary.kpis[2].value.to_string(), "25.0%");
        assert_eq!(summary.kpis[3].value.to_string(), "National Tender");

        // The unreported channel is not a bucket of its own
        assert_eq!(summary.qty_by_procurement.len(), 2);

        let sectors: Vec<&str> = summary.sector_split.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(sectors, vec!["Public", "Private"]);

        assert_eq!(summary.qty_by_year[0].key, "2020");
        assert_eq!(summary.qty_by_year[0].values, vec![60.0, 120.0]);
        assert_eq!(summary.qty_by_year[1].values, vec![100.0, 0.0]);
    }

    #[test]
    fn test_zero_slices_are_dropped() {
        let data = [rec(2020, "Private", Some("Retail Pharmacy"), 5.0)];
        let rows: Vec<&ProcurementRecord> = data.iter().collect();
        let summary = summarize(&rows, 47);
        assert_eq!(summary.sector_split.len(), 1);
        assert_eq!(summary.sector_split[0].key, "Private");
        // Rows present but none public
        assert_eq!(summary.kpis[1].value.to_string(), "0.0%");
        assert_eq!(summary.kpis[2].value.to_string(), "100.0%");
    }

    #[test]
    fn test_empty_selection() {
        let summary = summarize(&[], 47);
        assert_eq!(summary.kpis[0].value, KpiValue::NotAvailable);
        assert_eq!(summary.kpis[1].value.to_string(), "0%");
        assert_eq!(summary.kpis[2].value.to_string(), "0%");
        assert_eq!(summary.kpis[3].value, KpiValue::NotAvailable);
        assert!(summary.sector_split.is_empty());
        assert!(summary.qty_by_year.is_empty());
    }
}
