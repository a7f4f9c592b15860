//! CLI command for listing container entries

use std::path::Path;

use crate::formats::xbin::read_xbin;

pub fn execute(path: &Path, limit: Option<usize>, json: bool) -> anyhow::Result<()> {
    let resource = read_xbin(path)?;
    let shown = limit.unwrap_or(resource.len()).min(resource.len());

    if json {
        let entries: Vec<_> = resource.entries.iter().take(shown).collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for entry in resource.entries.iter().take(shown) {
        // Truncate long text for display
        let text = entry.text.replace('\n', "\\n");
        let preview: String = if text.chars().count() > 80 {
            let mut truncated: String = text.chars().take(77).collect();
            truncated.push_str("...");
            truncated
        } else {
            text
        };

        println!("{}_{}", entry.index, entry.name);
        println!("  {preview}");
    }

    if shown < resource.len() {
        println!("... and {} more entries", resource.len() - shown);
    }

    Ok(())
}
