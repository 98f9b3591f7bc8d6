use crate::engine::Outcome;
use crate::types::Record;

/// Formats records as a tab-separated table, header taken from the first record.
pub fn format_records(records: &[Record]) -> String {
    let Some(first) = records.first() else {
        return "(no rows)".to_string();
    };

    let header = first.fields().collect::<Vec<_>>().join("\t");
    let row_lines = records
        .iter()
        .map(|record| {
            record
                .values()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join("\t")
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!("{header}\n{row_lines}")
}

/// Console rendering of a statement result.
pub fn format_outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Rows(records) => format_records(records),
        Outcome::Inserted(record) => {
            format!("inserted 1 row\n{}", format_records(std::slice::from_ref(record)))
        }
        Outcome::Updated(n) => format!("updated {n} row(s)"),
        Outcome::Deleted(records) => format!("deleted {} row(s)", records.len()),
        Outcome::Selected(name) => format!("using database {name}"),
        Outcome::Dropped { kind, name } => format!("dropped {} {name}", kind.as_str()),
        Outcome::Exit => "bye".to_string(),
    }
}
