//! Static reference data shared by the demo generators

use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountryInfo {
    pub name: &'static str,
    pub region: &'static str,
    pub income_type: &'static str,
    pub market: &'static str,
    pub cities: &'static [&'static str],
}

pub const COUNTRIES: &[CountryInfo] = &[
    CountryInfo { name: "United States", region: "North America", income_type: "High Income", market: "Developed", cities: &["New York", "Austin", "Chicago"] },
    CountryInfo { name: "Canada", region: "North America", income_type: "High Income", market: "Developed", cities: &["Toronto", "Vancouver"] },
    CountryInfo { name: "Brazil", region: "Latin America", income_type: "Upper Middle Income", market: "Emerging", cities: &["Sao Paulo", "Rio de Janeiro"] },
    CountryInfo { name: "Mexico", region: "Latin America", income_type: "Upper Middle Income", market: "Emerging", cities: &["Mexico City", "Monterrey"] },
    CountryInfo { name: "United Kingdom", region: "Europe", income_type: "High Income", market: "Developed", cities: &["London", "Manchester"] },
    CountryInfo { name: "Germany", region: "Europe", income_type: "High Income", market: "Developed", cities: &["Berlin", "Munich", "Hamburg"] },
    CountryInfo { name: "France", region: "Europe", income_type: "High Income", market: "Developed", cities: &["Paris", "Lyon"] },
    CountryInfo { name: "Nigeria", region: "Africa", income_type: "Lower Middle Income", market: "Emerging", cities: &["Lagos", "Abuja"] },
    CountryInfo { name: "Kenya", region: "Africa", income_type: "Lower Middle Income", market: "Emerging", cities: &["Nairobi", "Mombasa"] },
    CountryInfo { name: "Ethiopia", region: "Africa", income_type: "Low Income", market: "Frontier", cities: &["Addis Ababa"] },
    CountryInfo { name: "India", region: "Asia", income_type: "Lower Middle Income", market: "Emerging", cities: &["Mumbai", "Bengaluru", "New Delhi", "Hyderabad", "Chennai", "Pune"] },
    CountryInfo { name: "China", region: "Asia", income_type: "Upper Middle Income", market: "Emerging", cities: &["Shanghai", "Shenzhen", "Beijing"] },
    CountryInfo { name: "Japan", region: "Asia", income_type: "High Income", market: "Developed", cities: &["Tokyo", "Osaka"] },
    CountryInfo { name: "Singapore", region: "Asia", income_type: "High Income", market: "Developed", cities: &["Singapore"] },
    CountryInfo { name: "Indonesia", region: "Asia", income_type: "Upper Middle Income", market: "Emerging", cities: &["Jakarta", "Surabaya"] },
    CountryInfo { name: "Vietnam", region: "Asia", income_type: "Lower Middle Income", market: "Emerging", cities: &["Ho Chi Minh City", "Hanoi"] },
    CountryInfo { name: "Australia", region: "Oceania", income_type: "High Income", market: "Developed", cities: &["Sydney", "Melbourne"] },
];

/// Countries grouped by region name
pub static COUNTRIES_BY_REGION: Lazy<BTreeMap<&'static str, Vec<&'static CountryInfo>>> =
    Lazy::new(|| {
        let mut map: BTreeMap<&'static str, Vec<&'static CountryInfo>> = BTreeMap::new();
        for country in COUNTRIES {
            map.entry(country.region).or_default().push(country);
        }
        map
    });

/// Region tab of the intelligence pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RegionTab {
    #[default]
    Global,
    Asia,
    India,
}

impl RegionTab {
    pub fn all() -> [RegionTab; 3] {
        [RegionTab::Global, RegionTab::Asia, RegionTab::India]
    }

    /// Dataset key, also the export file qualifier
    pub fn key(&self) -> &'static str {
        match self {
            RegionTab::Global => "global",
            RegionTab::Asia => "asia",
            RegionTab::India => "india",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RegionTab::Global => "Global",
            RegionTab::Asia => "Asia",
            RegionTab::India => "India",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().into_iter().find(|tab| tab.key() == key)
    }

    /// Countries a record of this tab may be located in
    pub fn countries(&self) -> Vec<&'static CountryInfo> {
        match self {
            RegionTab::Global => COUNTRIES.iter().collect(),
            RegionTab::Asia => COUNTRIES_BY_REGION.get("Asia").cloned().unwrap_or_default(),
            RegionTab::India => COUNTRIES.iter().filter(|c| c.name == "India").collect(),
        }
    }
}

/// Deterministic RNG for a dataset key (FNV-1a of the key)
pub fn rng_for(dataset: &str) -> StdRng {
    let seed = dataset.bytes().fold(0xcbf2_9ce4_8422_2325u64, |hash, byte| {
        (hash ^ byte as u64).wrapping_mul(0x0000_0100_0000_01b3)
    });
    StdRng::seed_from_u64(seed)
}

/// Uniform pick from a non-empty slice
pub fn pick<'a, T>(rng: &mut StdRng, items: &'a [T]) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}

/// `value` rounded to one decimal
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_tabs() {
        assert_eq!(RegionTab::from_key("asia"), Some(RegionTab::Asia));
        assert_eq!(RegionTab::from_key("mars"), None);
        assert!(RegionTab::Asia.countries().iter().all(|c| c.region == "Asia"));
        assert_eq!(RegionTab::India.countries().len(), 1);
        assert_eq!(RegionTab::Global.countries().len(), COUNTRIES.len());
    }

    #[test]
    fn test_rng_is_deterministic_per_dataset() {
        let a: u32 = rng_for("global").gen();
        let b: u32 = rng_for("global").gen();
        let c: u32 = rng_for("asia").gen();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
