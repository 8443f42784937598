use crate::shared::pipeline::{FieldDef, FieldValue, Record};
use serde::{Deserialize, Serialize};

pub const DATASET_NAME: &str = "epidemiology";

/// Field keys
pub mod field {
    pub const YEAR: &str = "year";
    pub const DISEASE: &str = "disease";
    pub const REGION: &str = "region";
    pub const INCOME_TYPE: &str = "incomeType";
    pub const COUNTRY: &str = "country";
    pub const PREVALENCE: &str = "prevalence";
    pub const INCIDENCE: &str = "incidence";
}

pub const SCHEMA: &[FieldDef] = &[
    FieldDef::number(field::YEAR, "Year"),
    FieldDef::text(field::DISEASE, "Disease"),
    FieldDef::text(field::REGION, "Region"),
    FieldDef::text(field::INCOME_TYPE, "Income Type"),
    FieldDef::text(field::COUNTRY, "Country"),
    FieldDef::number(field::PREVALENCE, "Prevalence"),
    FieldDef::number(field::INCIDENCE, "Incidence"),
];

/// Multi-select filters of the page, in display order
pub const FILTER_FIELDS: &[&str] = &[
    field::YEAR,
    field::DISEASE,
    field::REGION,
    field::INCOME_TYPE,
    field::COUNTRY,
];

/// Disease burden for one country, disease and year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpidemiologyRecord {
    pub year: i32,
    pub disease: String,
    pub region: String,
    pub income_type: String,
    pub country: String,
    pub prevalence: f64,
    pub incidence: f64,
}

impl Record for EpidemiologyRecord {
    fn schema() -> &'static [FieldDef] {
        SCHEMA
    }

    fn value(&self, key: &str) -> Option<FieldValue> {
        match key {
            field::YEAR => Some(self.year.into()),
            field::DISEASE => Some(self.disease.as_str().into()),
            field::REGION => Some(self.region.as_str().into()),
            field::INCOME_TYPE => Some(self.income_type.as_str().into()),
            field::COUNTRY => Some(self.country.as_str().into()),
            field::PREVALENCE => Some(self.prevalence.into()),
            field::INCIDENCE => Some(self.incidence.into()),
            _ => None,
        }
    }
}
