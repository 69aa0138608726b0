//! Appton site CLI - check data, render snapshots, serve the export.

#![allow(
    clippy::needless_pass_by_value,
    clippy::uninlined_format_args,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use appton_core::Event;
use appton_data::Catalog;
use appton_site::{Site, SiteError};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use thiserror::Error;
use tiny_http::{Header, Response, Server};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "appton")]
#[command(about = "Static site engine for the Appton marketing page")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the static data files
    Check {
        /// Directory holding site.json, apps.json, members.json
        #[arg(short, long, default_value = "data")]
        data: PathBuf,

        /// Fail on validation findings instead of reporting them
        #[arg(long)]
        strict: bool,
    },

    /// Render an SVG snapshot of the page
    Render {
        /// Directory holding the data files
        #[arg(short, long, default_value = "data")]
        data: PathBuf,

        /// Viewport width in pixels
        #[arg(long, default_value = "1280")]
        width: f32,

        /// Viewport height in pixels
        #[arg(long, default_value = "720")]
        height: f32,

        /// Animation clock position in seconds
        #[arg(long, default_value = "0")]
        time: f32,

        /// Output file
        #[arg(short, long, default_value = "site.svg")]
        output: PathBuf,
    },

    /// Serve a static export directory
    Serve {
        /// Port to serve on
        #[arg(short, long, default_value = "8080")]
        port: u16,

        /// Directory to serve
        #[arg(short, long, default_value = "www")]
        dir: PathBuf,
    },
}

/// CLI-level errors.
#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Site(#[from] SiteError),

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to bind server: {0}")]
    Bind(String),

    #[error("{0} validation finding(s) in strict mode")]
    Findings(usize),
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Check { data, strict } => check(&data, strict),
        Commands::Render {
            data,
            width,
            height,
            time,
            output,
        } => render(&data, width, height, time, &output),
        Commands::Serve { port, dir } => serve(port, &dir),
    }
}

fn check(data: &Path, strict: bool) -> Result<(), CliError> {
    let catalog = Catalog::load_dir(data).map_err(SiteError::from)?;
    let findings = catalog.validate();

    info!(
        apps = catalog.apps.len(),
        members = catalog.members.len(),
        "loaded {}",
        catalog.manifest.name
    );

    if findings.is_empty() {
        info!("data is clean");
        return Ok(());
    }

    for finding in &findings {
        warn!("{finding}");
    }
    if strict {
        return Err(CliError::Findings(findings.len()));
    }
    Ok(())
}

fn render(
    data: &Path,
    width: f32,
    height: f32,
    time: f32,
    output: &Path,
) -> Result<(), CliError> {
    let mut site = Site::load_dir(data)?;
    site.handle(&Event::Resize { width, height });
    if time > 0.0 {
        site.tick(time);
    }

    let svg = site.snapshot()?;
    fs::write(output, svg).map_err(|source| CliError::Write {
        path: output.to_path_buf(),
        source,
    })?;

    info!(
        "rendered {}x{} snapshot at t={time}s to {}",
        width,
        height,
        output.display()
    );
    Ok(())
}

fn serve(port: u16, dir: &Path) -> Result<(), CliError> {
    let server = Server::http(("0.0.0.0", port)).map_err(|e| CliError::Bind(e.to_string()))?;
    info!("serving {} on http://localhost:{port}", dir.display());

    for request in server.incoming_requests() {
        let url = request.url().trim_start_matches('/');
        let relative = if url.is_empty() { "index.html" } else { url };

        // Keep requests inside the export directory.
        if relative.split('/').any(|part| part == "..") {
            let _ = request.respond(Response::from_string("forbidden").with_status_code(403));
            continue;
        }

        let path = dir.join(relative);
        match fs::read(&path) {
            Ok(body) => {
                info!("200 {relative}");
                let header = Header::from_bytes(&b"Content-Type"[..], content_type(&path))
                    .expect("static header is valid");
                let _ = request.respond(Response::from_data(body).with_header(header));
            }
            Err(_) => {
                warn!("404 {relative}");
                let _ = request.respond(Response::from_string("not found").with_status_code(404));
            }
        }
    }
    Ok(())
}

fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        Some("ico") => "image/x-icon",
        Some("wasm") => "application/wasm",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_mapping() {
        assert_eq!(content_type(Path::new("index.html")), "text/html; charset=utf-8");
        assert_eq!(content_type(Path::new("site.svg")), "image/svg+xml");
        assert_eq!(content_type(Path::new("logo.png")), "image/png");
        assert_eq!(content_type(Path::new("unknown.bin")), "application/octet-stream");
    }

    #[test]
    fn test_cli_parses_render_defaults() {
        let cli = Cli::parse_from(["appton", "render"]);
        if let Commands::Render { width, height, time, output, .. } = cli.command {
            assert_eq!(width, 1280.0);
            assert_eq!(height, 720.0);
            assert_eq!(time, 0.0);
            assert_eq!(output, PathBuf::from("site.svg"));
        } else {
            panic!("Expected render command");
        }
    }

    #[test]
    fn test_cli_parses_check_strict() {
        let cli = Cli::parse_from(["appton", "check", "--strict", "--data", "fixtures"]);
        if let Commands::Check { data, strict } = cli.command {
            assert!(strict);
            assert_eq!(data, PathBuf::from("fixtures"));
        } else {
            panic!("Expected check command");
        }
    }
}
