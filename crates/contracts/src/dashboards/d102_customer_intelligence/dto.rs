use crate::shared::pipeline::{ColumnGroup, FieldDef, FieldValue, Record};
use serde::{Deserialize, Serialize};

pub const DATASET_NAME: &str = "msp_customer_intelligence";

pub mod field {
    pub const CUSTOMER_NAME: &str = "customerName";

    pub const COMPANY_ID: &str = "companyID";
    pub const COMPANY_NAME: &str = "companyName";
    pub const WEBSITE: &str = "website";
    pub const COMPANY_SIZE_EMPLOYEES: &str = "companySizeEmployees";
    pub const ANNUAL_REVENUE: &str = "annualRevenue";
    pub const CUSTOMER_TIER: &str = "customerTier";
    pub const PREFERRED_ENGAGEMENT_STYLE: &str = "preferredEngagementStyle";
    pub const EXISTING_MSP_DEPENDENCE: &str = "existingMSPDependence";

    pub const HEADQUARTERS_COUNTRY: &str = "headquartersCountry";
    pub const HEADQUARTERS_CITY: &str = "headquartersCity";
    pub const REGIONAL_OPERATING_AREAS: &str = "regionalOperatingAreas";

    pub const KEY_INDUSTRY: &str = "keyIndustry";
    pub const BUSINESS_FOCUS: &str = "businessFocus";
    pub const SERVICES: &str = "services";

    pub const OWNER_SPONSOR: &str = "ownerSponsor";
    pub const PROVIDER_EXECUTIVES: &str = "providerExecutives";
    pub const PROGRAM_DIRECTOR: &str = "programDirector";
    pub const DIRECTOR_ESTATES_FACILITIES: &str = "directorEstatesFacilities";
    pub const HEAD_OF_ENGINEERING: &str = "headOfEngineering";
    pub const HEAD_OF_PROCUREMENT: &str = "headOfProcurement";
    pub const CONTRACTS_COMMERCIAL_MANAGER: &str = "contractsCommercialManager";
    pub const OTHERS: &str = "others";

    pub const CONTACT_WEBSITE: &str = "contactWebsite";
    pub const EMAIL: &str = "email";
    pub const CONTACT_DETAILS: &str = "contactDetails";
    pub const ADDRESS: &str = "address";

    pub const BUDGET_DIRECTION: &str = "budgetDirection";
    pub const MAJOR_IT_TRANSFORMATION_DRIVERS: &str = "majorITTransformationDrivers";
    pub const KEY_PERFORMANCE_METRICS: &str = "keyPerformanceMetrics";
    pub const STRATEGIC_PARTNERSHIPS_ANNOUNCED: &str = "strategicPartnershipsAnnounced";

    pub const CLOUD_MODERNIZATION_DATA: &str = "cloudModernizationData";
    pub const CYBERSECURITY_MATURITY_EVO: &str = "cybersecurityMaturityEvo";
    pub const INVESTMENT_IN_EDGE_IOT: &str = "investmentInEdgeIoT";
    pub const OPEN_SOURCE_ADOPTION_LIC: &str = "openSourceAdoptionLic";

    pub const CURRENT_ENGAGEMENT_SCOPE: &str = "currentEngagementScope";
    pub const CONTRACT_VALUE_TREND: &str = "contractValueTrend";
    pub const RENEWAL_PROBABILITY: &str = "renewalProbability";
    pub const RELATIONSHIP_STRENGTH_SCORE: &str = "relationshipStrengthScore";
    pub const LEAD_POTENTIAL: &str = "leadPotential";

    pub const STRENGTHS: &str = "strengths";
    pub const WEAKNESSES: &str = "weaknesses";
    pub const OPPORTUNITIES: &str = "opportunities";
    pub const THREATS: &str = "threats";
}

pub const SCHEMA: &[FieldDef] = &[
    FieldDef::text(field::CUSTOMER_NAME, "Customer Name"),
    FieldDef::text(field::COMPANY_ID, "Company ID"),
    FieldDef::text(field::COMPANY_NAME, "Company Name"),
    FieldDef::text(field::WEBSITE, "Website"),
    FieldDef::number(field::COMPANY_SIZE_EMPLOYEES, "Company Size (Employees)"),
    FieldDef::text(field::ANNUAL_REVENUE, "Annual Revenue"),
    FieldDef::text(field::CUSTOMER_TIER, "Customer Tier"),
    FieldDef::text(field::PREFERRED_ENGAGEMENT_STYLE, "Preferred Engagement Style"),
    FieldDef::text(field::EXISTING_MSP_DEPENDENCE, "Existing MSP Dependence"),
    FieldDef::text(field::HEADQUARTERS_COUNTRY, "Headquarters Country"),
    FieldDef::text(field::HEADQUARTERS_CITY, "Headquarters City"),
    FieldDef::text(field::REGIONAL_OPERATING_AREAS, "Regional Operating Areas"),
    FieldDef::text(field::KEY_INDUSTRY, "Key Industry"),
    FieldDef::text(field::BUSINESS_FOCUS, "Business Focus"),
    FieldDef::text(field::SERVICES, "Services"),
    FieldDef::text(field::OWNER_SPONSOR, "Owner/Sponsor"),
    FieldDef::text(field::PROVIDER_EXECUTIVES, "Provider Executives (CEO/COO/CFO)"),
    FieldDef::text(field::PROGRAM_DIRECTOR, "Program Director"),
    FieldDef::text(field::DIRECTOR_ESTATES_FACILITIES, "Director - Estates/Facilities"),
    FieldDef::text(field::HEAD_OF_ENGINEERING, "Head of Engineering / Chief Engineer"),
    FieldDef::text(field::HEAD_OF_PROCUREMENT, "Head of Procurement"),
    FieldDef::text(field::CONTRACTS_COMMERCIAL_MANAGER, "Contracts & Commercial Manager"),
    FieldDef::text(field::OTHERS, "Others"),
    FieldDef::text(field::CONTACT_WEBSITE, "Website"),
    FieldDef::text(field::EMAIL, "Email"),
    FieldDef::text(field::CONTACT_DETAILS, "Contact Details"),
    FieldDef::text(field::ADDRESS, "Address"),
    FieldDef::text(field::BUDGET_DIRECTION, "Budget Direction"),
    FieldDef::text(field::MAJOR_IT_TRANSFORMATION_DRIVERS, "Major IT Transformation Drivers"),
    FieldDef::text(field::KEY_PERFORMANCE_METRICS, "Key Performance Metrics"),
    FieldDef::text(field::STRATEGIC_PARTNERSHIPS_ANNOUNCED, "Strategic Partnerships Announced"),
    FieldDef::text(field::CLOUD_MODERNIZATION_DATA, "Cloud Modernization / Data"),
    FieldDef::text(field::CYBERSECURITY_MATURITY_EVO, "Cybersecurity Maturity Evo"),
    FieldDef::text(field::INVESTMENT_IN_EDGE_IOT, "Investment in Edge / IoT"),
    FieldDef::text(field::OPEN_SOURCE_ADOPTION_LIC, "Open-Source Adoption / Lic"),
    FieldDef::text(field::CURRENT_ENGAGEMENT_SCOPE, "Current Engagement Scope"),
    FieldDef::text(field::CONTRACT_VALUE_TREND, "Contract Value Trend"),
    FieldDef::number(field::RENEWAL_PROBABILITY, "Renewal Probability (%)"),
    FieldDef::number(field::RELATIONSHIP_STRENGTH_SCORE, "Relationship Strength Score"),
    FieldDef::text(field::LEAD_POTENTIAL, "Lead Potential"),
    FieldDef::text(field::STRENGTHS, "Strengths"),
    FieldDef::text(field::WEAKNESSES, "Weaknesses"),
    FieldDef::text(field::OPPORTUNITIES, "Opportunities"),
    FieldDef::text(field::THREATS, "Threats"),
];

/// Header bands over [`SCHEMA`]; spans add up to the schema length
pub const COLUMN_GROUPS: &[ColumnGroup] = &[
    ColumnGroup::new("", 1),
    ColumnGroup::new("Customer Overview", 8),
    ColumnGroup::new("Geographical Presence", 3),
    ColumnGroup::new("Product Offering/Business Segments", 3),
    ColumnGroup::new("Key Stakeholders", 8),
    ColumnGroup::new("Contact Details", 4),
    ColumnGroup::new("IT Strategy & Investment Priorities", 4),
    ColumnGroup::new("Innovation & Transformation Focus", 4),
    ColumnGroup::new("Relationship & Partnership Health", 5),
    ColumnGroup::new("SWOT Analysis", 4),
];

pub const FILTER_FIELDS: &[&str] = &[
    field::CUSTOMER_TIER,
    field::KEY_INDUSTRY,
    field::HEADQUARTERS_COUNTRY,
    field::LEAD_POTENTIAL,
];

/// One MSP customer account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRecord {
    pub customer_name: String,

    #[serde(rename = "companyID")]
    pub company_id: String,
    pub company_name: String,
    pub website: String,
    pub company_size_employees: u32,
    pub annual_revenue: String,
    pub customer_tier: String,
    pub preferred_engagement_style: String,
    #[serde(rename = "existingMSPDependence")]
    pub existing_msp_dependence: String,

    pub headquarters_country: String,
    pub headquarters_city: String,
    pub regional_operating_areas: String,

    pub key_industry: String,
    pub business_focus: String,
    pub services: String,

    pub owner_sponsor: String,
    pub provider_executives: String,
    pub program_director: String,
    pub director_estates_facilities: String,
    pub head_of_engineering: String,
    pub head_of_procurement: String,
    pub contracts_commercial_manager: String,
    pub others: String,

    pub contact_website: String,
    pub email: String,
    pub contact_details: String,
    pub address: String,

    pub budget_direction: String,
    #[serde(rename = "majorITTransformationDrivers")]
    pub major_it_transformation_drivers: String,
    pub key_performance_metrics: String,
    pub strategic_partnerships_announced: String,

    pub cloud_modernization_data: String,
    pub cybersecurity_maturity_evo: String,
    #[serde(rename = "investmentInEdgeIoT")]
    pub investment_in_edge_iot: String,
    pub open_source_adoption_lic: String,

    pub current_engagement_scope: String,
    pub contract_value_trend: String,
    /// 0..=100
    pub renewal_probability: f64,
    /// 1..=10
    pub relationship_strength_score: f64,
    /// Free text such as `"Hot"`, `"warm lead"`
    pub lead_potential: String,

    pub strengths: String,
    pub weaknesses: String,
    pub opportunities: String,
    pub threats: String,
}

impl Record for CustomerRecord {
    fn schema() -> &'static [FieldDef] {
        SCHEMA
    }

    fn value(&self, key: &str) -> Option<FieldValue> {
        let text = match key {
            field::COMPANY_SIZE_EMPLOYEES => return Some(self.company_size_employees.into()),
            field::RENEWAL_PROBABILITY => return Some(self.renewal_probability.into()),
            field::RELATIONSHIP_STRENGTH_SCORE => {
                return Some(self.relationship_strength_score.into())
            }
            field::CUSTOMER_NAME => &self.customer_name,
            field::COMPANY_ID => &self.company_id,
            field::COMPANY_NAME => &self.company_name,
            field::WEBSITE => &self.website,
            field::ANNUAL_REVENUE => &self.annual_revenue,
            field::CUSTOMER_TIER => &self.customer_tier,
            field::PREFERRED_ENGAGEMENT_STYLE => &self.preferred_engagement_style,
            field::EXISTING_MSP_DEPENDENCE => &self.existing_msp_dependence,
            field::HEADQUARTERS_COUNTRY => &self.headquarters_country,
            field::HEADQUARTERS_CITY => &self.headquarters_city,
            field::REGIONAL_OPERATING_AREAS => &self.regional_operating_areas,
            field::KEY_INDUSTRY => &self.key_industry,
            field::BUSINESS_FOCUS => &self.business_focus,
            field::SERVICES => &self.services,
            field::OWNER_SPONSOR => &self.owner_sponsor,
            field::PROVIDER_EXECUTIVES => &self.provider_executives,
            field::PROGRAM_DIRECTOR => &self.program_director,
            field::DIRECTOR_ESTATES_FACILITIES => &self.director_estates_facilities,
            field::HEAD_OF_ENGINEERING => &self.head_of_engineering,
            field::HEAD_OF_PROCUREMENT => &self.head_of_procurement,
            field::CONTRACTS_COMMERCIAL_MANAGER => &self.contracts_commercial_manager,
            field::OTHERS => &self.others,
            field::CONTACT_WEBSITE => &self.contact_website,
            field::EMAIL => &self.email,
            field::CONTACT_DETAILS => &self.contact_details,
            field::ADDRESS => &self.address,
            field::BUDGET_DIRECTION => &self.budget_direction,
            field::MAJOR_IT_TRANSFORMATION_DRIVERS => &self.major_it_transformation_drivers,
            field::KEY_PERFORMANCE_METRICS => &self.key_performance_metrics,
            field::STRATEGIC_PARTNERSHIPS_ANNOUNCED => &self.strategic_partnerships_announced,
            field::CLOUD_MODERNIZATION_DATA => &self.cloud_modernization_data,
            field::CYBERSECURITY_MATURITY_EVO => &self.cybersecurity_maturity_evo,
            field::INVESTMENT_IN_EDGE_IOT => &self.investment_in_edge_iot,
            field::OPEN_SOURCE_ADOPTION_LIC => &self.open_source_adoption_lic,
            field::CURRENT_ENGAGEMENT_SCOPE => &self.current_engagement_scope,
            field::CONTRACT_VALUE_TREND => &self.contract_value_trend,
            field::LEAD_POTENTIAL => &self.lead_potential,
            field::STRENGTHS => &self.strengths,
            field::WEAKNESSES => &self.weaknesses,
            field::OPPORTUNITIES => &self.opportunities,
            field::THREATS => &self.threats,
            _ => return None,
        };
        Some(text.as_str().into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_groups_cover_schema() {
        let spanned: usize = COLUMN_GROUPS.iter().map(|g| g.span).sum();
        assert_eq!(spanned, SCHEMA.len());
    }
}
