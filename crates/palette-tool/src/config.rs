//! Command-line configuration.

use std::fmt;
use std::path::PathBuf;

use palette_core::{Color, HexError, Scheme, UnsupportedScheme};
use palette_swatch::FontChoice;

/// Base colour used when none is given.
pub const DEFAULT_BASE: Color = Color::rgb(0x3F, 0x51, 0xB5);

/// Scheme used when none is given.
pub const DEFAULT_SCHEME: Scheme = Scheme::Complementary;

pub const USAGE: &str = "\
Usage: palette-tool [OPTIONS]

Options:
  --color <hex>     Base colour [default: #3f51b5]
  --scheme <name>   Complementary, Analogous, Triadic or Tetradic [default: Complementary]
  --all             Show every scheme
  --png <file>      Save the rendered palette as a PNG
  --download        Save the PNG as <Scheme>_palette.png in the current directory
  --font <file>     TrueType/OpenType font for swatch labels
  --builtin-font    Always use the built-in label font
  --mcp             Run as MCP server (JSON-RPC over stdio)
  --verbose         Log debug output to stderr
  -h, --help        Show this help";

/// Everything the binary needs to know for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolConfig {
    pub base: Color,
    pub scheme: Scheme,
    pub all_schemes: bool,
    pub png_path: Option<PathBuf>,
    pub download: bool,
    pub font: FontChoice,
    pub mcp: bool,
    pub verbose: bool,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE,
            scheme: DEFAULT_SCHEME,
            all_schemes: false,
            png_path: None,
            download: false,
            font: FontChoice::Preferred,
            mcp: false,
            verbose: false,
        }
    }
}

impl ToolConfig {
    /// Schemes to show, in menu order.
    #[must_use]
    pub fn schemes(&self) -> Vec<Scheme> {
        if self.all_schemes {
            Scheme::ALL.to_vec()
        } else {
            vec![self.scheme]
        }
    }
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Run(ToolConfig),
    Help,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ArgsError {
    MissingValue(String),
    Color(HexError),
    Scheme(UnsupportedScheme),
    Unknown(String),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingValue(flag) => write!(f, "{flag} needs a value"),
            Self::Color(e) => write!(f, "--color: {e}"),
            Self::Scheme(e) => write!(f, "--scheme: {e}"),
            Self::Unknown(arg) => write!(f, "Unknown argument: {arg}"),
        }
    }
}

impl std::error::Error for ArgsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Color(e) => Some(e),
            Self::Scheme(e) => Some(e),
            Self::MissingValue(_) | Self::Unknown(_) => None,
        }
    }
}

/// Parse arguments, excluding the program name.
pub fn parse_args<I>(args: I) -> Result<Command, ArgsError>
where
    I: IntoIterator<Item = String>,
{
    let mut cfg = ToolConfig::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        let mut value = |flag: &str| {
            args.next()
                .ok_or_else(|| ArgsError::MissingValue(flag.to_string()))
        };

        match arg.as_str() {
            "--color" | "--colour" => {
                cfg.base = Color::from_hex(&value("--color")?).map_err(ArgsError::Color)?;
            }
            "--scheme" => {
                cfg.scheme = value("--scheme")?.parse().map_err(ArgsError::Scheme)?;
            }
            "--all" => cfg.all_schemes = true,
            "--png" => cfg.png_path = Some(PathBuf::from(value("--png")?)),
            "--download" => cfg.download = true,
            "--font" => cfg.font = FontChoice::Path(PathBuf::from(value("--font")?)),
            "--builtin-font" => cfg.font = FontChoice::Builtin,
            "--mcp" => cfg.mcp = true,
            "--verbose" | "-v" => cfg.verbose = true,
            "--help" | "-h" => return Ok(Command::Help),
            other => return Err(ArgsError::Unknown(other.to_string())),
        }
    }

    Ok(Command::Run(cfg))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Command, ArgsError> {
        parse_args(args.iter().map(|s| (*s).to_string()))
    }

    fn run(args: &[&str]) -> ToolConfig {
        match parse(args) {
            Ok(Command::Run(cfg)) => cfg,
            other => panic!("expected a run config, got {other:?}"),
        }
    }

    #[test]
    fn defaults_match_picker_and_menu() {
        let cfg = run(&[]);
        assert_eq!(cfg.base, Color::rgb(63, 81, 181));
        assert_eq!(cfg.scheme, Scheme::Complementary);
        assert_eq!(cfg.schemes(), vec![Scheme::Complementary]);
        assert_eq!(cfg.font, FontChoice::Preferred);
    }

    #[test]
    fn colour_and_scheme() {
        let cfg = run(&["--color", "FF0000", "--scheme", "triadic"]);
        assert_eq!(cfg.base, Color::rgb(255, 0, 0));
        assert_eq!(cfg.scheme, Scheme::Triadic);
    }

    #[test]
    fn all_schemes_in_menu_order() {
        assert_eq!(run(&["--all"]).schemes(), Scheme::ALL.to_vec());
    }

    #[test]
    fn output_and_font_flags() {
        let cfg = run(&["--png", "out.png", "--download", "--font", "x.ttf", "--mcp", "-v"]);
        assert_eq!(cfg.png_path, Some(PathBuf::from("out.png")));
        assert!(cfg.download && cfg.mcp && cfg.verbose);
        assert_eq!(cfg.font, FontChoice::Path(PathBuf::from("x.ttf")));
        assert_eq!(run(&["--builtin-font"]).font, FontChoice::Builtin);
    }

    #[test]
    fn help_short_circuits() {
        assert_eq!(parse(&["--help", "--bogus"]), Ok(Command::Help));
    }

    #[test]
    fn errors() {
        assert_eq!(
            parse(&["--color"]),
            Err(ArgsError::MissingValue("--color".to_string()))
        );
        assert!(matches!(parse(&["--color", "#12"]), Err(ArgsError::Color(_))));
        assert!(matches!(
            parse(&["--scheme", "Monochrome"]),
            Err(ArgsError::Scheme(_))
        ));
        assert_eq!(
            parse(&["--frames"]),
            Err(ArgsError::Unknown("--frames".to_string()))
        );
    }
}
