use beeutil_core::CredentialsRecord;
use eyre::WrapErr;
use std::path::Path;

pub fn execute(plugin_id: &str, input: Option<&Path>) -> eyre::Result<()> {
    let raw = super::read_input(input)?;
    let record: CredentialsRecord =
        serde_json::from_str(&raw).wrap_err("Credentials must be a JSON object of strings")?;

    let missing = record.missing_required();
    if !missing.is_empty() {
        tracing::warn!(
            missing = %missing.join(", "),
            "Encrypting a record that will fail validation"
        );
    }

    let blob = beeutil_secrets::encrypt(plugin_id, &record)?;
    tracing::debug!(fields = record.len(), "Encrypted plugin secrets");

    println!("{blob}");
    Ok(())
}
