//! End-to-end runs of the dashboard pipeline over the typed dashboard records

use contracts::dashboards::common::RegionTab;
use contracts::dashboards::d100_epidemiology::{self as epi, EpidemiologyRecord};
use contracts::dashboards::d102_customer_intelligence::{self as customers, CustomerRecord};
use contracts::dashboards::d103_distributor_intelligence as distributors;
use contracts::shared::config::load_config;
use contracts::shared::kpi::KpiValue;
use contracts::shared::pipeline::{
    aggregate, export_file_name, filter_records, project, to_csv, AggregateSpec, Bucket,
    FilterCriteria, GroupKey, ListState, LoadState, Record, RecordStore,
};

fn epi_record(region: &str, disease: &str, prevalence: f64) -> EpidemiologyRecord {
    EpidemiologyRecord {
        year: 2023,
        disease: disease.to_string(),
        region: region.to_string(),
        income_type: "High Income".to_string(),
        country: "Japan".to_string(),
        prevalence,
        incidence: 1.0,
    }
}

#[test]
fn test_filter_then_sum_by_disease() {
    let records = vec![
        epi_record("Asia", "Flu", 10.0),
        epi_record("Asia", "Flu", 5.0),
        epi_record("EU", "Flu", 3.0),
    ];
    let criteria = FilterCriteria::new().with(epi::field::REGION, ["Asia"]);

    let rows = filter_records(&records, &criteria);
    assert_eq!(rows.len(), 2);

    let buckets = aggregate(
        &rows,
        &AggregateSpec::sum(GroupKey::categorical(epi::field::DISEASE), epi::field::PREVALENCE),
    );
    assert_eq!(
        buckets,
        vec![Bucket {
            key: vec!["Flu".to_string()],
            value: 15.0
        }]
    );
}

#[test]
fn test_empty_record_set_degrades_to_na() {
    let records: Vec<EpidemiologyRecord> = Vec::new();
    let rows = filter_records(&records, &FilterCriteria::new());
    let summary = epi::summary::summarize(&rows, 47);

    let total = summary
        .kpis
        .iter()
        .find(|k| k.label == "Total Prevalence")
        .map(|k| k.value.to_string());
    assert_eq!(total.as_deref(), Some("N/A"));
    assert!(summary.prevalence_by_disease.is_empty());
}

#[test]
fn test_45_records_third_page() {
    let records: Vec<EpidemiologyRecord> = (1..=45)
        .map(|i| epi_record("Asia", &format!("Disease {:02}", i), i as f64))
        .collect();

    let mut state = ListState::new(20);
    state.toggle_sort(epi::field::PREVALENCE);
    state.page.go_to(3, records.len());

    let view = project(&records, &state);
    assert_eq!(view.total_pages, 3);
    let page: Vec<f64> = view.page_rows().iter().map(|r| r.prevalence).collect();
    assert_eq!(page, vec![41.0, 42.0, 43.0, 44.0, 45.0]);
    assert_eq!(view.page.range(view.total()), (41, 45));
}

#[test]
fn test_lead_potential_buckets() {
    let mut data = customers::demo::generate(RegionTab::India);
    data.truncate(3);
    for (record, label) in data.iter_mut().zip(["SuperHot", "warm lead", "COLD"]) {
        record.lead_potential = label.to_string();
    }

    let buckets = aggregate(
        &data,
        &AggregateSpec::count(GroupKey::lead_potential(customers::field::LEAD_POTENTIAL)),
    );
    let mut counts: Vec<(String, f64)> = buckets
        .into_iter()
        .map(|b| (b.key_text(), b.value))
        .collect();
    counts.sort_by(|a, b| a.0.cmp(&b.0));
    assert_eq!(
        counts,
        vec![
            ("Cold".to_string(), 1.0),
            ("Hot".to_string(), 1.0),
            ("Warm".to_string(), 1.0),
        ]
    );
}

#[test]
fn test_region_switch_discards_stale_load() {
    let mut store: RecordStore<CustomerRecord> = RecordStore::new();

    let global = store.begin_load(RegionTab::Global.key());
    let asia = store.begin_load(RegionTab::Asia.key());

    assert!(store.complete_load(&asia, customers::demo::generate(RegionTab::Asia)));
    assert!(!store.complete_load(&global, customers::demo::generate(RegionTab::Global)));

    assert_eq!(store.state(), LoadState::Ready);
    assert_eq!(store.dataset(), Some("asia"));
    assert_eq!(store.len(), customers::demo::record_count(RegionTab::Asia));
}

#[test]
fn test_region_switch_exposes_no_previous_rows() {
    let mut store = RecordStore::with_records(
        RegionTab::Global.key(),
        customers::demo::generate(RegionTab::Global),
    );
    let _india = store.begin_load(RegionTab::India.key());
    assert_eq!(store.state(), LoadState::Loading);

    let view = project(store.records(), &ListState::new(20));
    assert_eq!(view.total(), 0);
    assert!(view.rows.is_empty());

    let csv = to_csv(view.rows.iter().copied()).expect("export");
    assert_eq!(csv.lines().count(), 1, "header only while loading");
}

#[test]
fn test_export_of_filtered_distributors() {
    let records = distributors::demo::generate(RegionTab::India);
    let mut state = ListState::new(20);
    state.set_filter(distributors::field::CHANNEL, ["Wholesale"]);
    let view = project(&records, &state);

    let csv = to_csv(view.rows.iter().copied()).expect("export");
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), view.total() + 1);
    assert!(lines[0].starts_with("\"distributorName\",\"country\""));
    assert!(lines[1..].iter().all(|line| line.contains("\"Wholesale\"")));

    assert_eq!(
        export_file_name(distributors::DATASET_NAME, RegionTab::India.key()),
        "distributor_intelligence_india.csv"
    );
}

#[test]
fn test_serialized_keys_match_schema() {
    let records = customers::demo::generate(RegionTab::Asia);
    let json = serde_json::to_value(&records[0]).expect("serialize");
    let object = json.as_object().expect("object");

    let mut serialized: Vec<&str> = object.keys().map(String::as_str).collect();
    let mut declared: Vec<&str> = CustomerRecord::schema().iter().map(|def| def.key).collect();
    serialized.sort_unstable();
    declared.sort_unstable();
    assert_eq!(serialized, declared);

    let records = epi::demo::generate();
    let json = serde_json::to_value(&records[0]).expect("serialize");
    assert_eq!(json.as_object().map(|o| o.len()), Some(EpidemiologyRecord::schema().len()));
}

#[test]
fn test_configured_page_size_drives_projection() {
    let config = load_config(Some("[dashboard]\npage_size = 7\n")).expect("config");
    let records = epi::demo::generate();
    let view = project(&records, &ListState::new(config.page_size));
    assert_eq!(view.page_rows().len(), 7);
    assert_eq!(view.total_pages, records.len().div_ceil(7));
    assert!(matches!(
        epi::summary::summarize(&view.rows, config.label_max_len).kpis[0].value,
        KpiValue::Number(_)
    ));
}
