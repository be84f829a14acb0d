use std::{io::Write, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{debug, info};

use protoid_codegen::{Registry, DEFAULT_GO_PACKAGE};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Target {
    Go,
    Rust,
}

/// Generates protocol id lookup tables from the protocol identifier registry
///
/// Output is unformatted, e.g.: `protoid-gen | gofmt > protoid.go`
#[derive(Debug, Parser)]
#[command(name = "protoid-gen", version)]
struct Cli {
    /// Registry definition file (defaults to the bundled registry)
    #[arg(short, long, value_name = "FILE", env = "PROTOID_REGISTRY")]
    registry: Option<PathBuf>,

    /// Language of the generated code
    #[arg(short, long, value_enum, default_value = "go")]
    target: Target,

    /// Package name of the generated Go file
    #[arg(short, long, env = "PROTOID_PACKAGE", default_value = DEFAULT_GO_PACKAGE)]
    package: String,

    /// Write the generated code to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn load_registry(path: Option<&PathBuf>) -> Result<Registry> {
    match path {
        Some(path) => {
            debug!("reading registry from {}", path.display());
            let data = std::fs::read(path)
                .with_context(|| format!("failed to read registry {}", path.display()))?;
            Ok(protoid_codegen::parse_registry(&data)?)
        }
        None => Ok(protoid_codegen::load_registry()?),
    }
}

fn render(cli: &Cli, registry: &Registry) -> Result<String> {
    let code = match cli.target {
        Target::Go => protoid_codegen::generate_go(registry, &cli.package)?.to_string(),
        Target::Rust => protoid_codegen::generate_rust(registry)?.to_string(),
    };
    Ok(code)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { log::LevelFilter::Debug } else { log::LevelFilter::Info };
    env_logger::Builder::from_default_env().filter_level(level).init();

    let registry = load_registry(cli.registry.as_ref())?;
    let code = render(&cli, &registry)?;

    match &cli.output {
        Some(path) => {
            std::fs::write(path, &code)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!("wrote {:?} code to {}", cli.target, path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            out.write_all(code.as_bytes())?;
            out.flush()?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["protoid-gen"]).unwrap();
        assert_eq!(cli.target, Target::Go);
        assert_eq!(cli.package, "main");
        assert!(cli.registry.is_none());
        assert!(cli.output.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn rust_target_to_file() {
        let cli = Cli::try_parse_from(["protoid-gen", "-t", "rust", "-o", "ids.rs", "-v"]).unwrap();
        assert_eq!(cli.target, Target::Rust);
        assert_eq!(cli.output, Some(PathBuf::from("ids.rs")));
        assert!(cli.verbose);
    }

    #[test]
    fn unknown_target() {
        assert!(Cli::try_parse_from(["protoid-gen", "--target", "python"]).is_err());
    }

    #[test]
    fn render_bundled_registry() {
        let cli = Cli::try_parse_from(["protoid-gen", "--package", "futu"]).unwrap();
        let registry = load_registry(None).unwrap();

        let code = render(&cli, &registry).unwrap();
        assert!(code.starts_with("package futu\n"));
        assert!(code.contains("1001: \"InitConnect\",\n"));
        assert!(code.contains("\"TrdGetAccList\": 2001,\n"));
    }

    #[test]
    fn missing_registry_file() {
        let path = PathBuf::from("/nonexistent/protoid-def.xml");
        assert!(load_registry(Some(&path)).is_err());
    }
}
