//! Palette generator binary.
//!
//! Prints colour-theory palettes as terminal swatches, saves them as
//! labelled PNG images, or runs as an MCP server.

use std::error::Error;
use std::path::Path;
use std::process;

use palette_core::generate_palette;
use palette_swatch::capture;
use palette_swatch::{RenderConfig, SwatchRenderer};
use palette_tool::config::USAGE;
use palette_tool::display::render_swatches;
use palette_tool::mcp::McpServer;
use palette_tool::{Command, ToolConfig, parse_args};

fn setup_logging(verbose: bool) -> Result<(), Box<dyn Error>> {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    // stderr only: stdout carries JSON-RPC in MCP mode
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("[{}] {}", record.level(), message));
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()?;
    Ok(())
}

fn run(cfg: &ToolConfig) -> Result<(), Box<dyn Error>> {
    let renderer = SwatchRenderer::new(&RenderConfig {
        font: cfg.font.clone(),
        ..RenderConfig::default()
    });

    if cfg.mcp {
        McpServer::new(renderer).run();
        return Ok(());
    }

    for scheme in cfg.schemes() {
        let palette = generate_palette(cfg.base, scheme);
        print!("{}", render_swatches(&palette));

        if cfg.download {
            let path = capture::save_palette_png(&renderer, &palette, Path::new("."))?;
            eprintln!("Palette saved to {}", path.display());
        }
    }

    // An explicit --png path only makes sense for a single palette
    if let Some(ref path) = cfg.png_path {
        let palette = generate_palette(cfg.base, cfg.scheme);
        capture::save_png(&renderer, palette.colors(), path)?;
        eprintln!("Palette saved to {}", path.display());
    }

    Ok(())
}

fn main() {
    let cfg = match parse_args(std::env::args().skip(1)) {
        Ok(Command::Run(cfg)) => cfg,
        Ok(Command::Help) => {
            eprintln!("{USAGE}");
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{e}");
            eprintln!();
            eprintln!("{USAGE}");
            process::exit(1);
        }
    };

    if let Err(e) = setup_logging(cfg.verbose) {
        eprintln!("Logging setup failed: {e}");
    }

    if let Err(e) = run(&cfg) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
