use beeutil_core::EncryptedBlob;
use std::io;

pub fn execute(plugin_id: &str, blob: Option<String>, show_values: bool) -> eyre::Result<()> {
    let blob = match blob {
        Some(blob) => blob,
        None => super::read_input(None)?,
    };
    let blob = EncryptedBlob::new(blob.trim());

    let record = beeutil_secrets::decrypt(plugin_id, &blob)?;
    beeutil_secrets::validate(&record)?;

    super::print_record(&mut io::stdout().lock(), &record, show_values)?;
    Ok(())
}
