use super::dto::{ProcurementRecord, DATASET_NAME, PRIVATE, PUBLIC};
use crate::dashboards::common::catalog::{pick, rng_for, COUNTRIES};
use rand::Rng;

const YEARS: std::ops::RangeInclusive<i32> = 2019..=2024;

const BRANDS: &[&str] = &["Vaxigrip", "Fluarix", "Engerix-B", "Coartem", "Glucophage", "Truvada"];

const PUBLIC_CHANNELS: &[&str] = &["National Tender", "UNICEF Supply Division", "PAHO Revolving Fund"];

const PRIVATE_CHANNELS: &[&str] = &["Retail Pharmacy", "Hospital Group Purchasing", "Direct Distributor"];

/// Demo dataset: a handful of purchases per country and year
pub fn generate() -> Vec<ProcurementRecord> {
    let mut rng = rng_for(DATASET_NAME);
    let mut records = Vec::new();

    for year in YEARS {
        for country in COUNTRIES {
            let purchases = rng.gen_range(2..=4);
            for _ in 0..purchases {
                let public = rng.gen_bool(0.6);
                let channels = if public { PUBLIC_CHANNELS } else { PRIVATE_CHANNELS };
                // Roughly one purchase in ten has no reported channel
                let procurement = if rng.gen_bool(0.1) {
                    None
                } else {
                    Some(pick(&mut rng, channels).to_string())
                };
                records.push(ProcurementRecord {
                    year,
                    market: country.market.to_string(),
                    region: country.region.to_string(),
                    income_type: country.income_type.to_string(),
                    country: country.name.to_string(),
                    public_private: if public { PUBLIC } else { PRIVATE }.to_string(),
                    brand: pick(&mut rng, BRANDS).to_string(),
                    procurement,
                    qty: (rng.gen_range(500..50_000) / 10 * 10) as f64,
                });
            }
        }
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_is_deterministic() {
        let a = generate();
        assert_eq!(a, generate());
        assert!(a.len() >= 6 * COUNTRIES.len() * 2);
        assert!(a.iter().all(|r| r.is_public() || r.is_private()));
        assert!(a.iter().any(|r| r.procurement.is_none()));
    }
}
