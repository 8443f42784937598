//! Generic dashboard data pipeline.
//!
//! Record Store -> Filter Engine -> { Aggregator -> charts / KPI cards,
//! Sorter / Paginator -> table }. The Exporter consumes the filtered (and
//! sorted) collection directly.

pub mod aggregate;
pub mod export;
pub mod filter;
pub mod paginate;
pub mod record;
pub mod sort;
pub mod store;
pub mod view;

pub use aggregate::{
    aggregate, aggregate_series, bucket_value, in_label_order, stack, to_chart_points, top_key,
    truncate_label, AggregateOp, AggregateSpec, Bucket, BucketOrder, ChartPoint, GroupKey, KeyRule,
    SeriesRow,
};
pub use export::{export_file_name, to_csv, ExportError};
pub use filter::{distinct_values, filter_records, FilterCriteria};
pub use paginate::{paginate, total_pages, PageState};
pub use record::{coerce_number, ColumnGroup, FieldDef, FieldKind, FieldValue, Record};
pub use sort::{sort_records, SortDirection, SortState};
pub use store::{LoadState, LoadTicket, RecordStore};
pub use view::{project, ListState, Projection};
