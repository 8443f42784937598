use crate::shared::pipeline::record::opt_text;
use crate::shared::pipeline::{FieldDef, FieldValue, Record};
use serde::{Deserialize, Serialize};

pub const DATASET_NAME: &str = "procurement";

pub const PUBLIC: &str = "Public";
pub const PRIVATE: &str = "Private";

/// Field keys
pub mod field {
    pub const YEAR: &str = "year";
    pub const MARKET: &str = "market";
    pub const REGION: &str = "region";
    pub const INCOME_TYPE: &str = "incomeType";
    pub const COUNTRY: &str = "country";
    pub const PUBLIC_PRIVATE: &str = "publicPrivate";
    pub const BRAND: &str = "brand";
    pub const PROCUREMENT: &str = "procurement";
    pub const QTY: &str = "qty";
}

pub const SCHEMA: &[FieldDef] = &[
    FieldDef::number(field::YEAR, "Year"),
    FieldDef::text(field::MARKET, "Market"),
    FieldDef::text(field::REGION, "Region"),
    FieldDef::text(field::INCOME_TYPE, "Income Type"),
    FieldDef::text(field::COUNTRY, "Country"),
    FieldDef::text(field::PUBLIC_PRIVATE, "Public/Private"),
    FieldDef::text(field::BRAND, "Brand"),
    FieldDef::text(field::PROCUREMENT, "Procurement Type"),
    FieldDef::number(field::QTY, "Quantity"),
];

pub const FILTER_FIELDS: &[&str] = &[
    field::YEAR,
    field::MARKET,
    field::REGION,
    field::INCOME_TYPE,
    field::COUNTRY,
    field::PUBLIC_PRIVATE,
    field::BRAND,
];

/// Fixed option list of the Public/Private filter
pub const SECTOR_OPTIONS: &[&str] = &[PUBLIC, PRIVATE];

/// Purchased volume of one brand in one country and year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcurementRecord {
    pub year: i32,
    pub market: String,
    pub region: String,
    pub income_type: String,
    pub country: String,
    pub public_private: String,
    pub brand: String,
    /// Tender channel; not reported for every purchase
    #[serde(default)]
    pub procurement: Option<String>,
    pub qty: f64,
}

impl ProcurementRecord {
    pub fn is_public(&self) -> bool {
        self.public_private == PUBLIC
    }

    pub fn is_private(&self) -> bool {
        self.public_private == PRIVATE
    }
}

impl Record for ProcurementRecord {
    fn schema() -> &'static [FieldDef] {
        SCHEMA
    }

    fn value(&self, key: &str) -> Option<FieldValue> {
        match key {
            field::YEAR => Some(self.year.into()),
            field::MARKET => Some(self.market.as_str().into()),
            field::REGION => Some(self.region.as_str().into()),
            field::INCOME_TYPE => Some(self.income_type.as_str().into()),
            field::COUNTRY => Some(self.country.as_str().into()),
            field::PUBLIC_PRIVATE => Some(self.public_private.as_str().into()),
            field::BRAND => Some(self.brand.as_str().into()),
            field::PROCUREMENT => opt_text(&self.procurement),
            field::QTY => Some(self.qty.into()),
            _ => None,
        }
    }
}
