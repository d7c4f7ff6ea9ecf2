use crate::batch;
use crate::error::ConvertResult;
use crate::project;
use crate::types::ConvertOptions;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

/// Execute the convert command.
pub fn convert(
    input: PathBuf,
    output: PathBuf,
    options: ConvertOptions,
    report_path: Option<PathBuf>,
    verbose: bool,
) -> ConvertResult<()> {
    println!("{}", "📊 sheet2json - Converting spreadsheets".bold().green());
    println!("   Input:  {}", input.display());
    println!("   Output: {}", output.display());
    println!();

    let report = batch::convert_directory(&input, &output, &options)?;

    if report.total == 0 {
        println!("{}", "⚠️  No spreadsheet files found".yellow());
        return Ok(());
    }

    println!(
        "{}",
        format!("📁 Found {} spreadsheet file(s)", report.total).blue()
    );

    for artifact in &report.outputs {
        println!(
            "   {} {} ({}, {} records)",
            "✅".green(),
            artifact.file_name.bright_blue(),
            artifact.shape.label(),
            artifact.record_count
        );
        if verbose {
            println!("      from {}", artifact.source.cyan());
        }
        if artifact.header_fallback {
            println!(
                "      {} no id/key header row found, used the first row",
                "⚠️".yellow()
            );
        }
    }

    for skipped in &report.skipped {
        println!("   {} {} is empty, skipped", "⚠️".yellow(), skipped);
    }

    for failure in &report.failures {
        println!(
            "   {} {} failed: {}",
            "❌".red(),
            failure.file.bold(),
            failure.error
        );
    }

    println!();
    println!(
        "{}",
        format!(
            "🎉 Conversion complete! Success: {}/{} file(s)",
            report.success, report.total
        )
        .bold()
        .green()
    );

    if let Some(path) = report_path {
        fs::write(&path, serde_json::to_vec_pretty(&report)?)?;
        if verbose {
            println!("   Report written to {}", path.display());
        }
    }

    Ok(())
}

/// Execute the new command - scaffold a project directory.
pub fn new_project(root: PathBuf, name: String) -> ConvertResult<()> {
    let path = project::create_project(&root, &name)?;

    println!(
        "{}",
        format!("🎉 Project \"{}\" created!", name).bold().green()
    );
    println!("   Path: {}", path.display());
    println!("{}", "   Usage:".cyan());
    println!("     1. Put spreadsheet files into {}", "excels/".yellow());
    println!("     2. Run {}", "convert.sh".yellow());
    println!("     3. Collect JSON files from {}", "jsons/".yellow());

    Ok(())
}

/// Execute the list command - show existing projects.
pub fn list_projects(root: PathBuf) -> ConvertResult<()> {
    let projects = project::list_projects(&root)?;

    if projects.is_empty() {
        println!("{}", "No projects yet".yellow());
    } else {
        println!("{}", "Projects:".blue());
        for name in &projects {
            println!("  📁 {}", name);
        }
    }

    Ok(())
}
