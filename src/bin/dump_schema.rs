use anyhow::{Result, bail};

/// Prints the JSON schema of the stream file format, or of the user config
/// when called with `config`.
fn main() -> Result<()> {
    let schema = match std::env::args().nth(1).as_deref() {
        None | Some("stream") => ux_gui_stream::StreamFile::schema(),
        Some("config") => schemars::schema_for!(ux_gui_stream::Config),
        Some(other) => bail!("unknown schema '{other}' (expected 'stream' or 'config')"),
    };
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
