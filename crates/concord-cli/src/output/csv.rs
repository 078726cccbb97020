//! CSV output formatter

use anyhow::Result;
use concord_core::MatchTable;

/// Full column schema as header, then one record per match
pub fn format_matches(matches: &MatchTable) -> Result<String> {
    let table = matches.to_table();
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record(table.columns())?;
    for row in table.rows() {
        writer.write_record(row.iter().map(|v| v.to_string()))?;
    }

    let bytes = writer.into_inner().map_err(|e| anyhow::anyhow!(e.to_string()))?;
    Ok(String::from_utf8(bytes)?)
}
