//! The lint pipeline behind the `vslint` binary.
//!
//! 1. Load configuration (`vslint.toml`) and merge CLI overrides
//! 2. Load every requested file into the source database
//! 3. Per file, in parallel: parse, analyze each module, run the rules
//! 4. Merge per-file diagnostics in command-line file order and render
//!
//! Exit codes: 0 for a clean run, 1 when any diagnostic was produced,
//! 2 for usage or configuration errors (via `Err` from [`run`]).

use std::error::Error;
use std::path::Path;

use rayon::prelude::*;
use vslint_analyze::{analyze_module, AnalyzeError};
use vslint_common::Interner;
use vslint_config::{load_config, load_config_from_str, LintConfig, ToolConfig, KNOWN_RULES};
use vslint_diagnostics::{
    Category, Diagnostic, DiagnosticCode, DiagnosticRenderer, DiagnosticSink, Severity,
    TerminalRenderer,
};
use vslint_lint::LintEngine;
use vslint_source::SourceDb;

use crate::{Cli, ReportFormat};

/// A module whose model violated the analyzer's contract.
const E102: DiagnosticCode = DiagnosticCode::new(Category::Error, 102);

/// Runs the lint pipeline for the parsed command line.
pub fn run(cli: &Cli) -> Result<i32, Box<dyn Error>> {
    let config = load_effective_config(cli)?;
    let format = resolve_format(cli, &config)?;

    for rule in cli.allow.iter().chain(cli.deny.iter()) {
        if !KNOWN_RULES.contains(&rule.as_str()) {
            return Err(format!("unknown rule '{rule}'").into());
        }
    }
    let merged = merge_lint_config(&config.lint, cli);

    let mut source_db = SourceDb::new();
    let mut file_ids = Vec::new();
    for path in &cli.files {
        let id = source_db
            .load_file(path)
            .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
        file_ids.push(id);
    }

    let interner = Interner::new();

    // Files are independent; rayon's collect keeps input order, so the
    // merged output is deterministic regardless of scheduling.
    let per_file: Vec<Vec<Diagnostic>> = file_ids
        .par_iter()
        .map(|&file| {
            let sink = DiagnosticSink::new();
            let model = vslint_verilog_parser::parse_file(file, &source_db, &interner, &sink);
            let engine = LintEngine::new(&merged);
            for module in &model.modules {
                match analyze_module(module) {
                    Ok(analysis) => engine.run(&analysis, &interner, &sink),
                    Err(err) => {
                        let AnalyzeError::MissingAssignTarget { span } = err;
                        sink.emit(Diagnostic::error(E102, err.to_string(), span));
                    }
                }
            }
            sink.take_all()
        })
        .collect();

    let diagnostics: Vec<Diagnostic> = per_file.into_iter().flatten().collect();

    match format {
        ReportFormat::Text => {
            let renderer = TerminalRenderer::new(cli.color.resolve());
            for diag in &diagnostics {
                eprintln!("{}", renderer.render(diag, &source_db));
            }
            if !cli.quiet {
                let errors = diagnostics
                    .iter()
                    .filter(|d| d.severity == Severity::Error)
                    .count();
                let warnings = diagnostics
                    .iter()
                    .filter(|d| d.severity == Severity::Warning)
                    .count();
                eprintln!("{errors} error(s), {warnings} warning(s)");
            }
        }
        ReportFormat::Json => {
            let json =
                serde_json::to_string_pretty(&diagnostics).unwrap_or_else(|_| "[]".to_string());
            println!("{json}");
        }
    }

    Ok(if diagnostics.is_empty() { 0 } else { 1 })
}

fn load_effective_config(cli: &Cli) -> Result<ToolConfig, Box<dyn Error>> {
    match &cli.config {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
            Ok(load_config_from_str(&content)?)
        }
        None => Ok(load_config(Path::new("."))?),
    }
}

fn resolve_format(cli: &Cli, config: &ToolConfig) -> Result<ReportFormat, Box<dyn Error>> {
    if let Some(format) = cli.format {
        return Ok(format);
    }
    match config.output.format.as_deref() {
        None | Some("text") => Ok(ReportFormat::Text),
        Some("json") => Ok(ReportFormat::Json),
        Some(other) => Err(format!("unknown output format '{other}' in configuration").into()),
    }
}

/// Merges CLI `--allow`/`--deny` flags over the config file's lint section.
///
/// CLI flags win: a rule passed as `--allow` is removed from the config's
/// deny list, and vice versa.
fn merge_lint_config(config: &LintConfig, cli: &Cli) -> LintConfig {
    let mut deny = config.deny.clone();
    let mut allow = config.allow.clone();

    for rule in &cli.deny {
        allow.retain(|r| r != rule);
        if !deny.contains(rule) {
            deny.push(rule.clone());
        }
    }
    for rule in &cli.allow {
        deny.retain(|r| r != rule);
        if !allow.contains(rule) {
            allow.push(rule.clone());
        }
    }

    LintConfig { deny, allow }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ColorChoice;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn cli_for(files: Vec<PathBuf>) -> Cli {
        Cli {
            files,
            allow: Vec::new(),
            deny: Vec::new(),
            format: Some(ReportFormat::Text),
            quiet: true,
            color: ColorChoice::Never,
            config: None,
        }
    }

    fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn clean_file_exits_zero() {
        let tmp = TempDir::new().unwrap();
        let file = write_file(
            &tmp,
            "clean.v",
            "module clean(input din, output dout);\n  assign dout = din;\nendmodule\n",
        );
        let code = run(&cli_for(vec![file])).unwrap();
        assert_eq!(code, 0);
    }

    #[test]
    fn findings_exit_one() {
        let tmp = TempDir::new().unwrap();
        let file = write_file(
            &tmp,
            "dirty.v",
            "module dirty(input din, output dout);\n  wire never_used;\n  reg r1;\n  assign r1 = din;\n  assign dout = r1 | ghost;\nendmodule\n",
        );
        let code = run(&cli_for(vec![file])).unwrap();
        assert_eq!(code, 1);
    }

    #[test]
    fn allowing_every_firing_rule_cleans_the_run() {
        let tmp = TempDir::new().unwrap();
        let file = write_file(
            &tmp,
            "unused.v",
            "module m();\n  wire never_used;\nendmodule\n",
        );
        let mut cli = cli_for(vec![file]);
        cli.allow = vec!["unused-signal".to_string()];
        assert_eq!(run(&cli).unwrap(), 0);
    }

    #[test]
    fn missing_input_file_is_an_error() {
        let cli = cli_for(vec![PathBuf::from("/no/such/file.v")]);
        assert!(run(&cli).is_err());
    }

    #[test]
    fn unknown_cli_rule_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let file = write_file(&tmp, "m.v", "module m(); endmodule\n");
        let mut cli = cli_for(vec![file]);
        cli.deny = vec!["no-such-rule".to_string()];
        let err = run(&cli).unwrap_err();
        assert!(err.to_string().contains("unknown rule"));
    }

    #[test]
    fn parse_errors_in_one_file_do_not_block_others() {
        let tmp = TempDir::new().unwrap();
        let broken = write_file(&tmp, "broken.v", "module m; wire ; endmodule\n");
        let clean = write_file(&tmp, "ok.v", "module ok(input a, output y);\n  assign y = a;\nendmodule\n");
        let code = run(&cli_for(vec![broken, clean])).unwrap();
        // the broken file contributes a parse diagnostic
        assert_eq!(code, 1);
    }

    #[test]
    fn non_ascii_source_reports_and_exits_one() {
        let tmp = TempDir::new().unwrap();
        let bad = write_file(&tmp, "bad.v", "module m; wire é; endmodule\n");
        let clean = write_file(
            &tmp,
            "ok.v",
            "module ok(input a, output y);\n  assign y = a;\nendmodule\n",
        );
        // the bad character is a diagnostic in its file, not a crash
        let code = run(&cli_for(vec![bad, clean])).unwrap();
        assert_eq!(code, 1);
    }

    #[test]
    fn config_file_allow_is_honored() {
        let tmp = TempDir::new().unwrap();
        let file = write_file(&tmp, "m.v", "module m();\n  wire never_used;\nendmodule\n");
        let config = write_file(&tmp, "vslint.toml", "[lint]\nallow = [\"unused-signal\"]\n");
        let mut cli = cli_for(vec![file]);
        cli.config = Some(config);
        assert_eq!(run(&cli).unwrap(), 0);
    }

    #[test]
    fn cli_deny_overrides_config_allow() {
        let config = load_config_from_str("[lint]\nallow = [\"unused-signal\"]\n").unwrap();
        let mut cli = cli_for(Vec::new());
        cli.deny = vec!["unused-signal".to_string()];
        let merged = merge_lint_config(&config.lint, &cli);
        assert_eq!(merged.deny, vec!["unused-signal"]);
        assert!(merged.allow.is_empty());
    }

    #[test]
    fn cli_allow_overrides_config_deny() {
        let config = load_config_from_str("[lint]\ndeny = [\"undefined-reference\"]\n").unwrap();
        let mut cli = cli_for(Vec::new());
        cli.allow = vec!["undefined-reference".to_string()];
        let merged = merge_lint_config(&config.lint, &cli);
        assert_eq!(merged.allow, vec!["undefined-reference"]);
        assert!(merged.deny.is_empty());
    }

    #[test]
    fn format_falls_back_to_config() {
        let config = load_config_from_str("[output]\nformat = \"json\"\n").unwrap();
        let mut cli = cli_for(Vec::new());
        cli.format = None;
        assert_eq!(resolve_format(&cli, &config).unwrap(), ReportFormat::Json);
        cli.format = Some(ReportFormat::Text);
        assert_eq!(resolve_format(&cli, &config).unwrap(), ReportFormat::Text);
    }

    #[test]
    fn bad_config_format_is_an_error() {
        let config = load_config_from_str("[output]\nformat = \"xml\"\n").unwrap();
        let mut cli = cli_for(Vec::new());
        cli.format = None;
        assert!(resolve_format(&cli, &config).is_err());
    }

    #[test]
    fn multiple_files_lint_in_one_run() {
        let tmp = TempDir::new().unwrap();
        let a = write_file(&tmp, "a.v", "module a();\n  wire unused_a;\nendmodule\n");
        let b = write_file(&tmp, "b.v", "module b();\n  wire unused_b;\nendmodule\n");
        let code = run(&cli_for(vec![a, b])).unwrap();
        assert_eq!(code, 1);
    }
}
