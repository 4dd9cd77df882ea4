use std::io::Write;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use sigil_core::catalog::load_catalog;
use sigil_core::error::CatalogError;
use sigil_core::report::{model::ToolInfo, render};

mod args;
mod logging;

/// Process exit statuses, one per failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Success = 0,
    Usage = 1,
    CatalogLoad = 2,
    InspectionFailed = 3,
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        ExitCode::from(status as u8)
    }
}

fn main() -> ExitCode {
    let args = match args::Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version arrive here as well, on stdout.
            let _ = e.print();
            return if e.use_stderr() {
                Status::Usage.into()
            } else {
                Status::Success.into()
            };
        }
    };

    logging::init_tracing(args.verbose);

    match run(&args) {
        Ok(()) => Status::Success.into(),
        Err(err) => {
            eprintln!("[ERROR] {err:#}");
            status_for(&err).into()
        }
    }
}

fn run(args: &args::Args) -> Result<()> {
    let config = args.inspect_config();

    let catalog = load_catalog(&args.catalog, &config).context("signature loading failed")?;
    debug!(signatures = catalog.len(), "catalog ready");

    let tool = ToolInfo {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    let report = sigil_core::inspect(&args.file, &catalog, &config, tool)
        .context("file inspection failed")?;

    let output = match args.output_format() {
        args::OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&report)?;
            json.push('\n');
            json
        }
        args::OutputFormat::Text => render::render_text(&report),
    };

    match &args.out {
        Some(path) => std::fs::write(path, &output)
            .with_context(|| format!("failed to write report to {}", path.display()))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(output.as_bytes())
                .and_then(|()| stdout.flush())
                .context("failed to write report to stdout")?;
        }
    }

    Ok(())
}

fn status_for(err: &anyhow::Error) -> Status {
    if err.chain().any(|cause| cause.is::<CatalogError>()) {
        Status::CatalogLoad
    } else {
        Status::InspectionFailed
    }
}
