use crate::shared::pipeline::{FieldDef, FieldValue, Record};
use serde::{Deserialize, Serialize};

pub const DATASET_NAME: &str = "distributor_intelligence";

pub mod field {
    pub const DISTRIBUTOR_NAME: &str = "distributorName";
    pub const COUNTRY: &str = "country";
    pub const CITY: &str = "city";
    pub const REGION: &str = "region";
    pub const CHANNEL: &str = "channel";
    pub const BRANDS_CARRIED: &str = "brandsCarried";
    pub const ANNUAL_VOLUME: &str = "annualVolume";
    pub const COVERAGE: &str = "coverage";
    pub const LEAD_POTENTIAL: &str = "leadPotential";
    pub const PARTNERSHIP_STATUS: &str = "partnershipStatus";
    pub const CONTACT_EMAIL: &str = "contactEmail";
}

pub const SCHEMA: &[FieldDef] = &[
    FieldDef::text(field::DISTRIBUTOR_NAME, "Distributor"),
    FieldDef::text(field::COUNTRY, "Country"),
    FieldDef::text(field::CITY, "City"),
    FieldDef::text(field::REGION, "Region"),
    FieldDef::text(field::CHANNEL, "Channel"),
    FieldDef::text(field::BRANDS_CARRIED, "Brands Carried"),
    // Free text ("12,500 units"); sums coerce it
    FieldDef::text(field::ANNUAL_VOLUME, "Annual Volume"),
    FieldDef::text(field::COVERAGE, "Coverage"),
    FieldDef::text(field::LEAD_POTENTIAL, "Lead Potential"),
    FieldDef::text(field::PARTNERSHIP_STATUS, "Partnership Status"),
    FieldDef::text(field::CONTACT_EMAIL, "Contact Email"),
];

pub const FILTER_FIELDS: &[&str] = &[
    field::COUNTRY,
    field::CHANNEL,
    field::LEAD_POTENTIAL,
    field::PARTNERSHIP_STATUS,
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributorRecord {
    pub distributor_name: String,
    pub country: String,
    pub city: String,
    pub region: String,
    pub channel: String,
    pub brands_carried: String,
    pub annual_volume: String,
    pub coverage: String,
    pub lead_potential: String,
    pub partnership_status: String,
    pub contact_email: String,
}

impl Record for DistributorRecord {
    fn schema() -> &'static [FieldDef] {
        SCHEMA
    }

    fn value(&self, key: &str) -> Option<FieldValue> {
        let text = match key {
            field::DISTRIBUTOR_NAME => &self.distributor_name,
            field::COUNTRY => &self.country,
            field::CITY => &self.city,
            field::REGION => &self.region,
            field::CHANNEL => &self.channel,
            field::BRANDS_CARRIED => &self.brands_carried,
            field::ANNUAL_VOLUME => &self.annual_volume,
            field::COVERAGE => &self.coverage,
            field::LEAD_POTENTIAL => &self.lead_potential,
            field::PARTNERSHIP_STATUS => &self.partnership_status,
            field::CONTACT_EMAIL => &self.contact_email,
            _ => return None,
        };
        Some(text.as_str().into())
    }
}
