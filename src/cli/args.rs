use std::ffi::OsString;

/// Flags written Go-style with a single dash (`-op add`, `-show-history`)
const LONG_FLAGS: [&str; 11] = [
    "op",
    "precision",
    "verbose",
    "version",
    "interactive",
    "show-history",
    "export-json",
    "export-csv",
    "export-txt",
    "history-file",
    "help",
];

/// Rewrite single-dash long flags to the double-dash form clap expects.
///
/// `-a`/`-b`, negative numbers and flags already written with `--` are left alone.
/// The first element (program name) is never touched.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .enumerate()
        .map(|(i, arg)| {
            let arg = arg.into();
            if i == 0 {
                return arg;
            }
            match arg.to_str() {
                Some(s) if is_single_dash_long_flag(s) => OsString::from(format!("-{}", s)),
                _ => arg,
            }
        })
        .collect()
}

fn is_single_dash_long_flag(arg: &str) -> bool {
    let Some(rest) = arg.strip_prefix('-') else {
        return false;
    };
    if rest.starts_with('-') {
        return false;
    }
    let name = rest.split('=').next().unwrap_or(rest);
    LONG_FLAGS.contains(&name)
}
