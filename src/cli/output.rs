pub use catalog_core::format::OutputFormat;

/// The `--format` named on a raw command line, for use when clap itself
/// rejected the arguments. The last parseable value wins.
pub fn requested_format<I>(args: I) -> Option<OutputFormat>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let mut format = None;
    while let Some(arg) = args.next() {
        let value = match arg.strip_prefix("--format") {
            Some("") => args.next(),
            Some(rest) => rest.strip_prefix('=').map(str::to_string),
            None => continue,
        };
        if let Some(parsed) = value.and_then(|v| v.parse::<OutputFormat>().ok()) {
            format = Some(parsed);
        }
    }
    format
}
