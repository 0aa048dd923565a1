//! Whole-script and per-batch SQL units.

use crate::SqlDialect;
use sector_core::{Column, GeneratedStatement};

/// Columns shown by the verification sample query.
pub const SAMPLE_COLUMNS: [Column; 6] = [
    Column::Id,
    Column::Code,
    Column::Name,
    Column::City,
    Column::Latitude,
    Column::Longitude,
];

/// Options for [`render_script`].
#[derive(Debug, Clone)]
pub struct ScriptOptions {
    /// Emit `DELETE FROM <table>` before the inserts
    pub clear_existing: bool,

    /// Row limit of the verification sample query
    pub sample_rows: usize,

    /// Input name recorded in the header comment
    pub source_name: Option<String>,

    /// Extra header comment lines (e.g. corrections applied)
    pub notes: Vec<String>,
}

impl Default for ScriptOptions {
    fn default() -> Self {
        Self {
            clear_existing: true,
            sample_rows: 10,
            source_name: None,
            notes: vec![],
        }
    }
}

/// Render a self-contained import script.
///
/// Layout: header comments, optional clearing statement, the inserts in
/// order, `COMMIT;`, then verification queries.
pub fn render_script(
    table: &str,
    statements: &[GeneratedStatement],
    dialect: &dyn SqlDialect,
    options: &ScriptOptions,
) -> String {
    let mut out = String::new();

    match &options.source_name {
        Some(source) => out.push_str(&format!("-- Generated by sector-sync from {source}\n")),
        None => out.push_str("-- Generated by sector-sync\n"),
    }
    out.push_str(&format!(
        "-- {} INSERT statements for {table} ({})\n",
        statements.len(),
        dialect.name()
    ));
    for note in &options.notes {
        out.push_str(&format!("-- {note}\n"));
    }
    out.push('\n');

    if let Some(begin) = dialect.script_begin() {
        out.push_str(begin);
        out.push_str("\n\n");
    }

    if options.clear_existing {
        out.push_str("-- Clear existing rows\n");
        out.push_str(&format!("DELETE FROM {table};\n\n"));
    }

    for stmt in statements {
        out.push_str(&stmt.sql);
        out.push_str(";\n");
    }

    out.push_str("\nCOMMIT;\n\n");
    out.push_str("-- Verify inserted row count\n");
    out.push_str(&format!("SELECT COUNT(*) AS TOTAL_INSERTED FROM {table};\n\n"));
    out.push_str("-- Sample of inserted rows\n");
    let sample_columns: Vec<&str> = SAMPLE_COLUMNS.iter().map(Column::name).collect();
    out.push_str(&dialect.sample_rows_query(table, &sample_columns, options.sample_rows));
    out.push('\n');

    if let Some(footer) = dialect.script_footer() {
        out.push('\n');
        out.push_str(footer);
        out.push('\n');
    }

    out
}

/// Render one transactional block: a label comment, the begin marker, the
/// statements in order and the commit marker.
pub fn render_block(label: &str, statements: &[GeneratedStatement], dialect: &dyn SqlDialect) -> String {
    let mut out = format!("-- {label}\n");
    out.push_str(dialect.block_begin());
    out.push('\n');
    for stmt in statements {
        out.push_str(&dialect.block_statement(&stmt.sql));
        out.push('\n');
    }
    out.push_str(dialect.block_end());
    out.push('\n');
    out
}
