//! Project scaffolding: per-game working directories with an `excels/`
//! input folder, a `jsons/` output folder, and a ready-to-run script.

use crate::error::{ConvertError, ConvertResult};
use std::fs;
use std::path::{Path, PathBuf};

const README_NAME: &str = "README.txt";
const SCRIPT_NAME: &str = "convert.sh";

/// Create a new project directory under `root`, returning its path.
pub fn create_project(root: &Path, name: &str) -> ConvertResult<PathBuf> {
    if name.is_empty() || name.contains(['/', '\\']) {
        return Err(ConvertError::Project(format!(
            "Invalid project name: '{}'",
            name
        )));
    }

    let project_path = root.join(name);
    let excels_path = project_path.join("excels");
    let jsons_path = project_path.join("jsons");

    fs::create_dir_all(&excels_path)?;
    fs::create_dir_all(&jsons_path)?;

    fs::write(project_path.join(SCRIPT_NAME), convert_script(name))?;
    fs::write(excels_path.join(README_NAME), EXAMPLE_README)?;

    Ok(project_path)
}

/// List existing project directories under `root`, sorted by name. A
/// missing root simply means no projects yet.
pub fn list_projects(root: &Path) -> ConvertResult<Vec<String>> {
    if !root.exists() {
        return Ok(Vec::new());
    }

    let mut projects: Vec<String> = fs::read_dir(root)?
        .filter_map(Result::ok)
        .filter(|entry| entry.path().is_dir())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .collect();
    projects.sort();
    Ok(projects)
}

fn convert_script(name: &str) -> String {
    format!(
        r#"#!/bin/sh
# {} - convert excels/ to jsons/
cd "$(dirname "$0")" || exit 1

if [ ! -d excels ]; then
    echo "error: no excels directory" >&2
    exit 1
fi

sheet2json convert -i excels -o jsons
"#,
        name
    )
}

const EXAMPLE_README: &str = r#"Example worksheet layouts:

1. Key-value sheet (config.xlsx):
   | key       | value   |
   |-----------|---------|
   | game_name | My Game |
   | version   | 1.0.0   |

2. Record list (items.xlsx):
   | id | name | type     | value |
   |----|------|----------|-------|
   | 1  | Gold | currency | 100   |
   | 2  | Gem  | currency | 50    |

3. Key-value sheet with array fields (levels.xlsx):
   | key        | value |       |
   |------------|-------|-------|
   | level      | 1     |       |
   | rewards[]  | coin  | gem   |
   | multiplier | 1.5   |       |

Drop your spreadsheet files in this directory, then run convert.sh.
"#;
