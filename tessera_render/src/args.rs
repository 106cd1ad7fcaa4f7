// Command-line helpers shared by the binaries.
//
// Plain `std::env::args()` matching: one positional input path and
// `--flag value` pairs, in any order. Flags override values from an
// optional `--config` JSON file.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use tessera_mosaic::{GridShape, MosaicError};

use crate::config::RenderConfig;
use crate::error::RenderError;

/// Flags that consume the following argument.
const VALUE_FLAGS: [&str; 6] = [
    "--out",
    "--grid",
    "--spacing",
    "--channels",
    "--scale",
    "--config",
];

/// First argument after the program name that is neither a flag nor a
/// flag's value.
pub fn positional(args: &[String]) -> Option<&str> {
    let mut rest = args.iter().skip(1);
    while let Some(arg) = rest.next() {
        if VALUE_FLAGS.contains(&arg.as_str()) {
            rest.next();
        } else if !arg.starts_with("--") {
            return Some(arg);
        }
    }
    None
}

/// Raw value following `flag`. A flag given without a value (at the end,
/// or directly followed by another flag) is an error.
pub fn flag_value<'a>(args: &'a [String], flag: &str) -> Result<Option<&'a str>, RenderError> {
    let Some(i) = args.iter().position(|a| a == flag) else {
        return Ok(None);
    };
    match args.get(i + 1) {
        Some(raw) if !raw.starts_with("--") => Ok(Some(raw.as_str())),
        _ => Err(RenderError::BadArgument(format!("{flag} requires a value"))),
    }
}

/// Parsed value following `flag`. A present but unparsable value is an
/// error rather than being ignored.
pub fn parse_flag<T: FromStr>(args: &[String], flag: &str) -> Result<Option<T>, RenderError> {
    match flag_value(args, flag)? {
        None => Ok(None),
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| RenderError::BadArgument(format!("{flag}: invalid value '{raw}'"))),
    }
}

/// Parse grid dimensions written as `S`, `R,C` or `RxC`.
pub fn parse_grid_dims(raw: &str) -> Result<Vec<usize>, RenderError> {
    raw.split([',', 'x'])
        .map(|part| {
            part.trim().parse().map_err(|_| {
                RenderError::BadArgument(format!("--grid: invalid dimension '{part}'"))
            })
        })
        .collect()
}

/// Parse a grid argument, rejecting dimension counts other than 1 or 2.
pub fn parse_grid(raw: &str) -> Result<Vec<usize>, RenderError> {
    let dims = parse_grid_dims(raw)?;
    GridShape::from_dims(&dims).map_err(MosaicError::from)?;
    Ok(dims)
}

/// Build the render config: `--config` file (if any), then flag overrides.
pub fn render_config(args: &[String]) -> Result<RenderConfig, RenderError> {
    let mut config = match flag_value(args, "--config")? {
        Some(path) => RenderConfig::load(Path::new(path))?,
        None => RenderConfig::default(),
    };
    if let Some(raw) = flag_value(args, "--grid")? {
        config.grid = Some(parse_grid(raw)?);
    }
    if let Some(spacing) = parse_flag(args, "--spacing")? {
        config.spacing = spacing;
    }
    if let Some(channels) = parse_flag(args, "--channels")? {
        config.channel_count = channels;
    }
    if let Some(scale) = parse_flag(args, "--scale")? {
        config.scale = scale;
    }
    if args.iter().any(|a| a == "--no-normalize") {
        config.normalize = false;
    }
    config.validate()?;
    Ok(config)
}

/// `--out` if given, else the input path with a `.png` extension.
pub fn output_path(args: &[String], input: &str) -> Result<PathBuf, RenderError> {
    Ok(flag_value(args, "--out")?
        .map(PathBuf::from)
        .unwrap_or_else(|| Path::new(input).with_extension("png")))
}
