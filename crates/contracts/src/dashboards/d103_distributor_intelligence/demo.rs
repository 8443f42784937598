use super::dto::{DistributorRecord, DATASET_NAME};
use crate::dashboards::common::catalog::{pick, rng_for, RegionTab};
use rand::Rng;

const TRADE_NAMES: &[&str] = &[
    "MedLine", "PharmaLink", "CareBridge", "VitalChain", "HealthPort", "Apollo Trade", "Sunrise",
    "Unity Medical", "Lotus", "Global Cure",
];

const ENTITY_TYPES: &[&str] = &["Distributors", "Wholesale", "Supply Co", "Trading", "Logistics"];

const CHANNELS: &[&str] = &["Wholesale", "Retail Pharmacy", "Hospital Supply", "E-commerce", "Government Tender"];

const BRANDS: &[&str] = &["Vaxigrip", "Fluarix", "Engerix-B", "Coartem", "Glucophage", "Truvada"];

const COVERAGE: &[&str] = &["National", "Regional", "Metro only", "Multi-country"];

const LEAD_LABELS: &[&str] = &["Hot", "hot lead", "Warm", "warm - follow up", "Cold", "COLD"];

const STATUSES: &[&str] = &["Active Partner", "In Negotiation", "Prospect", "Inactive"];

pub fn record_count(tab: RegionTab) -> usize {
    match tab {
        RegionTab::Global => 120,
        RegionTab::Asia => 80,
        RegionTab::India => 40,
    }
}

/// Demo distributors of a region tab, stable across calls
pub fn generate(tab: RegionTab) -> Vec<DistributorRecord> {
    let mut rng = rng_for(&format!("{}_{}", DATASET_NAME, tab.key()));
    let countries = tab.countries();

    (0..record_count(tab))
        .map(|_| {
            let country = *pick(&mut rng, &countries);
            let name = format!("{} {}", pick(&mut rng, TRADE_NAMES), pick(&mut rng, ENTITY_TYPES));
            let domain: String = name
                .to_lowercase()
                .chars()
                .filter(|c| c.is_ascii_alphanumeric())
                .collect();
            let brand_count = rng.gen_range(1..=3);
            let brands: Vec<&str> = (0..brand_count).map(|_| *pick(&mut rng, BRANDS)).collect();
            let volume = rng.gen_range(10..=2_000u32) * 100;

            DistributorRecord {
                distributor_name: name,
                country: country.name.to_string(),
                city: pick(&mut rng, country.cities).to_string(),
                region: country.region.to_string(),
                channel: pick(&mut rng, CHANNELS).to_string(),
                brands_carried: brands.join(", "),
                annual_volume: format!("{} units", group_thousands(volume)),
                coverage: pick(&mut rng, COVERAGE).to_string(),
                lead_potential: pick(&mut rng, LEAD_LABELS).to_string(),
                partnership_status: pick(&mut rng, STATUSES).to_string(),
                contact_email: format!("sales@{}.com", domain),
            }
        })
        .collect()
}

fn group_thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::pipeline::coerce_number;

    #[test]
    fn test_counts_and_volume_text() {
        for tab in RegionTab::all() {
            let records = generate(tab);
            assert_eq!(records.len(), record_count(tab));
            assert!(records
                .iter()
                .all(|r| r.annual_volume.ends_with(" units") && coerce_number(&r.annual_volume) >= 1000.0));
        }
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(12500), "12,500");
        assert_eq!(group_thousands(200000), "200,000");
    }
}
