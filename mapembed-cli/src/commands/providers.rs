//! Providers command - list the supported map providers.

use mapembed::list_providers;
use mapembed::provider::ProviderId;

use crate::error::CliError;

/// Run the providers command.
pub fn run(json: bool) -> Result<(), CliError> {
    println!("{}", format_listing(json)?);
    Ok(())
}

fn format_listing(json: bool) -> Result<String, CliError> {
    let providers = list_providers();
    if json {
        return Ok(serde_json::to_string_pretty(&providers)?);
    }

    let mut lines = vec![format!("{:<12} {:<26} {}", "ID", "NAME", "CREDENTIAL")];
    for (info, id) in providers.iter().zip(ProviderId::ALL) {
        lines.push(format!(
            "{:<12} {:<26} {}",
            info.id,
            info.name,
            id.credential_key().unwrap_or("-")
        ));
    }
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_listing() {
        let listing = format_listing(false).unwrap();
        let lines: Vec<&str> = listing.lines().collect();

        assert_eq!(lines.len(), 10);
        assert!(lines[1].starts_with("google"));
        assert!(lines[1].ends_with("GOOGLE_MAPS_API_KEY"));
        assert!(lines[7].contains("OpenStreetMap"));
        assert!(lines[7].ends_with('-'));
    }

    #[test]
    fn test_json_listing() {
        let listing = format_listing(true).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&listing).unwrap();

        assert_eq!(parsed.as_array().unwrap().len(), 9);
        assert_eq!(parsed[4]["id"], "parsimap");
    }
}
