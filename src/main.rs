use clap::{Parser, Subcommand};
use sheet2json::cli;
use sheet2json::error::ConvertResult;
use sheet2json::types::{ConvertOptions, MultiSheetNaming};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sheet2json")]
#[command(about = "Convert spreadsheet workbooks to JSON game-config documents")]
#[command(long_about = "sheet2json - Spreadsheet to JSON converter

Infers the shape of every worksheet and emits one JSON file per sheet:
  key-value sheets  (first header cell contains 'key')  → JSON object
  record sheets     (header row starting with id/key)   → JSON array

COMMANDS:
  convert  - Convert a directory of .xlsx/.xls files to JSON
  new      - Scaffold a project directory (excels/ + jsons/ + script)
  list     - List existing projects

EXAMPLES:
  sheet2json convert -i ./excels -o ./jsons
  sheet2json convert -i ./excels -o ./jsons --indent 2 --naming file-and-sheet-name
  sheet2json new my-game
  sheet2json list")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(long_about = "Convert all spreadsheet files in a directory to JSON.

Every .xlsx/.xls file is read sheet by sheet. A worksheet whose first
header cell contains 'key' becomes a flat JSON object (one field per row,
'name[]' keys collapse trailing cells into arrays). Any other worksheet
becomes a JSON array of records, using the first row starting with 'id'
or 'key' as the header so leading comment rows are skipped.

Cell values are coerced: numbers, true/false, [..] and {..} JSON
literals, comma lists like [coin, gem], everything else stays a string.

A file that cannot be read is reported and the batch continues; empty
worksheets are skipped without emitting a file.")]
    /// Convert spreadsheet files to JSON
    Convert {
        /// Directory containing spreadsheet files (.xlsx/.xls)
        #[arg(short, long)]
        input: PathBuf,

        /// Directory to write JSON files into (created if absent)
        #[arg(short, long)]
        output: PathBuf,

        /// Spaces of JSON indentation (0 = compact single line)
        #[arg(long, default_value = "0")]
        indent: usize,

        /// Output naming for workbooks with several sheets
        #[arg(long, value_enum, default_value_t = MultiSheetNaming::SheetNameOnly)]
        naming: MultiSheetNaming,

        /// Disable the 'name[]' array-field convention in key-value sheets
        #[arg(long)]
        no_array_fields: bool,

        /// Write a JSON batch report (success/total plus per-sheet detail)
        #[arg(long)]
        report: Option<PathBuf>,

        /// Show per-sheet provenance
        #[arg(short, long)]
        verbose: bool,
    },

    /// Scaffold a new project directory
    New {
        /// Project name
        name: String,

        /// Root directory that holds projects
        #[arg(long, env = "SHEET2JSON_PROJECTS", default_value = "projects")]
        root: PathBuf,
    },

    /// List existing projects
    List {
        /// Root directory that holds projects
        #[arg(long, env = "SHEET2JSON_PROJECTS", default_value = "projects")]
        root: PathBuf,
    },
}

fn main() -> ConvertResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            input,
            output,
            indent,
            naming,
            no_array_fields,
            report,
            verbose,
        } => {
            let options = ConvertOptions {
                naming,
                json_indent: indent,
                support_array_fields: !no_array_fields,
            };
            cli::convert(input, output, options, report, verbose)
        }

        Commands::New { name, root } => cli::new_project(root, name),

        Commands::List { root } => cli::list_projects(root),
    }
}
