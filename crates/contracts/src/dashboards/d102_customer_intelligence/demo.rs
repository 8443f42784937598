use super::dto::{CustomerRecord, DATASET_NAME};
use crate::dashboards::common::catalog::{pick, round1, rng_for, RegionTab};
use rand::rngs::StdRng;
use rand::Rng;

const NAME_PREFIXES: &[&str] = &[
    "Apex", "Blue", "Crest", "Delta", "Evergreen", "Falcon", "Granite", "Harbor", "Ion", "Juniper",
    "Keystone", "Lumen", "Meridian", "Nimbus", "Orbit", "Pinnacle", "Quantum", "Redwood", "Summit",
    "Titan",
];

const NAME_SUFFIXES: &[&str] = &[
    "Health", "Logistics", "Financial", "Manufacturing", "Retail", "Energy", "Telecom", "Foods",
    "Pharma", "Systems",
];

const LEGAL_FORMS: &[&str] = &["Ltd", "Inc", "Group", "Holdings", "Pvt Ltd", "Corp"];

const INDUSTRIES: &[&str] = &[
    "Healthcare & Life Sciences",
    "Banking, Financial Services and Insurance",
    "Manufacturing & Industrial Automation",
    "Retail & Consumer Goods",
    "Energy & Utilities",
    "Telecommunications",
    "Logistics & Transportation",
    "Public Sector & Government Services",
];

const TIERS: &[&str] = &["Tier 1 (Strategic)", "Tier 2 (Growth)", "Tier 3 (Transactional)"];

const ENGAGEMENT_STYLES: &[&str] = &["Co-managed", "Fully managed", "Project based", "Staff augmentation"];

const MSP_DEPENDENCE: &[&str] = &["High", "Medium", "Low", "None"];

const SERVICES: &[&str] = &[
    "Managed infrastructure, service desk",
    "Cloud migration, FinOps",
    "Managed security (SOC/MDR)",
    "Network operations, SD-WAN",
    "Application management, DevOps",
];

const FIRST_NAMES: &[&str] = &[
    "Aarav", "Priya", "Wei", "Mei", "Kenji", "Yuki", "James", "Sarah", "Lucas", "Ana", "Chidi",
    "Amara", "Oliver", "Emma", "Rahul", "Ananya",
];

const LAST_NAMES: &[&str] = &[
    "Sharma", "Iyer", "Chen", "Wang", "Tanaka", "Sato", "Smith", "Brown", "Silva", "Costa",
    "Okafor", "Mensah", "Taylor", "Wilson", "Nair", "Reddy",
];

const BUDGET_DIRECTIONS: &[&str] = &["Increasing", "Stable", "Decreasing"];

const DRIVERS: &[&str] = &[
    "Cloud-first mandate",
    "Cost optimisation",
    "Regulatory compliance",
    "M&A integration",
    "AI and analytics adoption",
];

const METRICS: &[&str] = &["Uptime SLA 99.9%", "MTTR < 4h", "Cost per ticket", "CSAT > 4.5", "Change success rate"];

const MATURITY: &[&str] = &["Initial", "Developing", "Defined", "Managed", "Optimised"];

const ADOPTION: &[&str] = &["Pilot", "Selective", "Broad", "Strategic"];

const TRENDS: &[&str] = &["Growing", "Flat", "Declining"];

const SCOPES: &[&str] = &["Service desk only", "Infrastructure and cloud", "End-to-end IT operations", "Security operations"];

/// Lead labels as they arrive from CRM exports, deliberately inconsistent
const LEAD_LABELS: &[&str] = &["Hot", "SuperHot", "hot prospect", "Warm", "warm lead", "WARM", "Cold", "COLD", "cold - revisit"];

const STRENGTHS: &[&str] = &["Strong brand", "Modern data platform", "Skilled in-house IT", "Healthy cash flow"];
const WEAKNESSES: &[&str] = &["Legacy ERP", "Fragmented tooling", "High attrition", "Slow procurement"];
const OPPORTUNITIES: &[&str] = &["Cloud cost optimisation", "Zero-trust rollout", "Edge analytics", "Managed SOC upsell"];
const THREATS: &[&str] = &["Competitor MSP incumbency", "Budget freeze", "Regulatory change", "In-sourcing"];

/// Number of demo customers in a region tab
pub fn record_count(tab: RegionTab) -> usize {
    match tab {
        RegionTab::Global => 200,
        RegionTab::Asia => 100,
        RegionTab::India => 50,
    }
}

/// Demo customers of a region tab, stable across calls
pub fn generate(tab: RegionTab) -> Vec<CustomerRecord> {
    let mut rng = rng_for(&format!("{}_{}", DATASET_NAME, tab.key()));
    let countries = tab.countries();

    (1..=record_count(tab))
        .map(|n| {
            let country = *pick(&mut rng, &countries);
            let city = *pick(&mut rng, country.cities);
            let company = format!(
                "{} {} {}",
                pick(&mut rng, NAME_PREFIXES),
                pick(&mut rng, NAME_SUFFIXES),
                pick(&mut rng, LEGAL_FORMS)
            );
            let slug: String = company
                .to_lowercase()
                .chars()
                .filter(|c| c.is_ascii_alphanumeric())
                .collect();
            let website = format!("www.{}.com", slug);
            let employees = rng.gen_range(50..=60_000u32);
            let revenue_musd = rng.gen_range(5..=4_000u32);

            CustomerRecord {
                customer_name: company.clone(),
                company_id: format!("{}-{:04}", tab.key().to_uppercase(), n),
                company_name: company,
                website: website.clone(),
                company_size_employees: employees,
                annual_revenue: format!("${}M", revenue_musd),
                customer_tier: pick(&mut rng, TIERS).to_string(),
                preferred_engagement_style: pick(&mut rng, ENGAGEMENT_STYLES).to_string(),
                existing_msp_dependence: pick(&mut rng, MSP_DEPENDENCE).to_string(),
                headquarters_country: country.name.to_string(),
                headquarters_city: city.to_string(),
                regional_operating_areas: country.region.to_string(),
                key_industry: pick(&mut rng, INDUSTRIES).to_string(),
                business_focus: pick(&mut rng, &["B2B", "B2C", "B2B2C", "Public"]).to_string(),
                services: pick(&mut rng, SERVICES).to_string(),
                owner_sponsor: person(&mut rng, "CIO"),
                provider_executives: person(&mut rng, "COO"),
                program_director: person(&mut rng, "Program Director"),
                director_estates_facilities: person(&mut rng, "Facilities Director"),
                head_of_engineering: person(&mut rng, "Chief Engineer"),
                head_of_procurement: person(&mut rng, "Head of Procurement"),
                contracts_commercial_manager: person(&mut rng, "Commercial Manager"),
                others: String::new(),
                contact_website: website,
                email: format!("it.partners@{}.com", slug),
                contact_details: format!("+{} {:03} {:04}", rng.gen_range(1..=99), rng.gen_range(100..=999), rng.gen_range(0..=9999)),
                address: format!("{} Business Park, {}, {}", rng.gen_range(1..=250), city, country.name),
                budget_direction: pick(&mut rng, BUDGET_DIRECTIONS).to_string(),
                major_it_transformation_drivers: pick(&mut rng, DRIVERS).to_string(),
                key_performance_metrics: pick(&mut rng, METRICS).to_string(),
                strategic_partnerships_announced: pick(&mut rng, &["AWS", "Microsoft Azure", "Google Cloud", "ServiceNow", "None"]).to_string(),
                cloud_modernization_data: pick(&mut rng, MATURITY).to_string(),
                cybersecurity_maturity_evo: pick(&mut rng, MATURITY).to_string(),
                investment_in_edge_iot: pick(&mut rng, ADOPTION).to_string(),
                open_source_adoption_lic: pick(&mut rng, ADOPTION).to_string(),
                current_engagement_scope: pick(&mut rng, SCOPES).to_string(),
                contract_value_trend: pick(&mut rng, TRENDS).to_string(),
                renewal_probability: rng.gen_range(20..=98) as f64,
                relationship_strength_score: round1(rng.gen_range(1.0..10.0)),
                lead_potential: pick(&mut rng, LEAD_LABELS).to_string(),
                strengths: pick(&mut rng, STRENGTHS).to_string(),
                weaknesses: pick(&mut rng, WEAKNESSES).to_string(),
                opportunities: pick(&mut rng, OPPORTUNITIES).to_string(),
                threats: pick(&mut rng, THREATS).to_string(),
            }
        })
        .collect()
}

fn person(rng: &mut StdRng, role: &str) -> String {
    format!("{} {} ({})", pick(rng, FIRST_NAMES), pick(rng, LAST_NAMES), role)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_per_tab() {
        for tab in RegionTab::all() {
            assert_eq!(generate(tab).len(), record_count(tab));
        }
    }

    #[test]
    fn test_india_tab_is_india_only_and_stable() {
        let a = generate(RegionTab::India);
        assert!(a.iter().all(|c| c.headquarters_country == "India"));
        assert_eq!(a, generate(RegionTab::India));
        assert_eq!(a[0].company_id, "INDIA-0001");
    }
}
