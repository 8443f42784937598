//! CSV export of the collection currently on screen.
//!
//! The exporter never filters or sorts: it serialises rows in the order the
//! caller passes them, so a download always matches the visible view.

use super::record::Record;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV buffer error: {0}")]
    Buffer(String),

    #[error("CSV output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Serialise `records` as CSV.
///
/// Header = declared schema keys; every cell is quoted, inner quotes are
/// doubled, rows end with `\n`. Missing values become empty cells.
pub fn to_csv<'a, R, I>(records: I) -> Result<String, ExportError>
where
    R: Record + 'a,
    I: IntoIterator<Item = &'a R>,
{
    let schema = R::schema();
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(schema.iter().map(|def| def.key))?;

    for record in records {
        writer.write_record(schema.iter().map(|def| {
            record
                .value(def.key)
                .map(|value| value.as_text())
                .unwrap_or_default()
        }))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Buffer(e.to_string()))?;
    Ok(String::from_utf8(bytes)?)
}

/// `<dataset>_<qualifier>.csv`, e.g. `msp_customer_intelligence_asia.csv`
pub fn export_file_name(dataset: &str, qualifier: &str) -> String {
    if qualifier.is_empty() {
        format!("{}.csv", dataset)
    } else {
        format!("{}_{}.csv", dataset, qualifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::pipeline::record::{FieldDef, FieldValue};

    struct Row {
        name: &'static str,
        note: Option<&'static str>,
        qty: f64,
    }

    const SCHEMA: &[FieldDef] = &[
        FieldDef::text("name", "Name"),
        FieldDef::text("note", "Note"),
        FieldDef::number("qty", "Qty"),
    ];

    impl Record for Row {
        fn schema() -> &'static [FieldDef] {
            SCHEMA
        }

        fn value(&self, key: &str) -> Option<FieldValue> {
            match key {
                "name" => Some(self.name.into()),
                "note" => self.note.map(FieldValue::from),
                "qty" => Some(self.qty.into()),
                _ => None,
            }
        }
    }

    #[test]
    fn test_every_cell_is_quoted_and_quotes_doubled() {
        let rows = [
            Row { name: "Acme \"Prime\"", note: Some("a,b"), qty: 0.0 },
            Row { name: "Beta", note: None, qty: 12.5 },
        ];
        let csv = to_csv(&rows).unwrap();
        assert_eq!(
            csv,
            "\"name\",\"note\",\"qty\"\n\
             \"Acme \"\"Prime\"\"\",\"a,b\",\"0\"\n\
             \"Beta\",\"\",\"12.5\"\n"
        );
    }

    #[test]
    fn test_empty_input_gives_header_only() {
        let rows: Vec<Row> = Vec::new();
        assert_eq!(to_csv(&rows).unwrap(), "\"name\",\"note\",\"qty\"\n");
    }

    #[test]
    fn test_export_file_name() {
        assert_eq!(
            export_file_name("msp_customer_intelligence", "asia"),
            "msp_customer_intelligence_asia.csv"
        );
        assert_eq!(export_file_name("epidemiology", ""), "epidemiology.csv");
    }
}
