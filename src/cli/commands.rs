//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::path::{Component, Path};

use crate::backend::{CodegenConfig, EnumCodegen, OutputWriter};
use crate::spec::EnumSpec;

use super::{CliError, CliResult, ExitCode};

/// Validate the output directory before anything is written.
///
/// Paths containing `..` are rejected; absolute paths are allowed with a warning.
pub fn validate_output_dir(out_dir: &Path) -> CliResult<()> {
    if out_dir.components().any(|c| matches!(c, Component::ParentDir)) {
        return Err(CliError::usage(format!(
            "Error: output directory '{}' contains path traversal (..)",
            out_dir.display()
        )));
    }

    if out_dir.is_absolute() {
        tracing::warn!(
            "Using absolute output path: {}. Consider using a relative path.",
            out_dir.display()
        );
    }

    Ok(())
}

fn generate(spec: &EnumSpec, config: CodegenConfig) -> CliResult<String> {
    Ok(EnumCodegen::with_config(config).try_generate(spec)?)
}

/// Print the generated module to stdout.
pub fn emit_stdout(spec: &EnumSpec, config: CodegenConfig) -> CliResult<ExitCode> {
    let source = generate(spec, config)?;
    print!("{}", source);
    Ok(ExitCode::SUCCESS)
}

/// Generate the module and write it under `dir`.
pub fn write_module(dir: &Path, spec: &EnumSpec, config: CodegenConfig) -> CliResult<ExitCode> {
    let source = generate(spec, config)?;
    let writer = OutputWriter::new(dir);
    let module = spec.module_name();
    writer.write(&module, &source).map_err(|e| {
        CliError::failure(format!(
            "Error writing {}: {}",
            writer.target_path(&module).display(),
            e
        ))
    })?;
    Ok(ExitCode::SUCCESS)
}

/// Compare the module on disk with freshly generated output without touching it.
pub fn check_module(dir: &Path, spec: &EnumSpec, config: CodegenConfig) -> CliResult<ExitCode> {
    let source = generate(spec, config)?;
    let writer = OutputWriter::new(dir);
    let module = spec.module_name();
    let path = writer.target_path(&module);

    let up_to_date = writer
        .is_up_to_date(&module, &source)
        .map_err(|e| CliError::failure(format!("Error reading {}: {}", path.display(), e)))?;

    if up_to_date {
        tracing::info!(path = %path.display(), "generated module is up to date");
        Ok(ExitCode::SUCCESS)
    } else {
        eprintln!("Would regenerate: {}", path.display());
        Ok(ExitCode::FAILURE)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_output_dir_rejects_traversal() {
        let err = validate_output_dir(Path::new("gen/../../etc")).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::USAGE);
        assert!(err.message.contains(".."));
    }

    #[test]
    fn test_validate_output_dir_accepts_relative_and_absolute() {
        assert!(validate_output_dir(Path::new("gen/status")).is_ok());
        assert!(validate_output_dir(Path::new("/tmp/gen")).is_ok());
    }

    #[test]
    fn test_write_module_uses_module_name() {
        let tmp = tempfile::tempdir().unwrap();
        let spec = EnumSpec::new("HttpMethod", ["GET", "POST"]).unwrap();
        write_module(tmp.path(), &spec, CodegenConfig::default()).unwrap();

        let written = std::fs::read_to_string(tmp.path().join("httpmethodenum.rs")).unwrap();
        assert!(written.contains("pub struct EnumHttpMethod"));
    }
}
