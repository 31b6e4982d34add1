use std::{
    fs::{self, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
    process::exit,
};

use clap::Parser;
use thiserror::Error;

mod template;

/// Creates the crate and input files for a new day
#[derive(Parser)]
#[command()]
struct Cli {
    /// Day of the month
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    day: u8,

    /// Repository root
    #[arg(short, long, default_value = ".")]
    root: PathBuf,
}

#[derive(Debug, Error)]
enum ScaffoldError {
    #[error("files for day {day} already exist at {}", .path.display())]
    AlreadyExists { day: u8, path: PathBuf },

    #[error("could not write {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
}

fn create(path: &Path, contents: &str) -> Result<(), ScaffoldError> {
    let io_err = |source| ScaffoldError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(io_err)?;
    }

    OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .and_then(|mut file| file.write_all(contents.as_bytes()))
        .map_err(io_err)
}

/// Returns the files that were created
fn scaffold(root: &Path, day: u8) -> Result<Vec<PathBuf>, ScaffoldError> {
    let dir = root.join(format!("day{day:02}"));
    if dir.exists() {
        return Err(ScaffoldError::AlreadyExists { day, path: dir });
    }

    let files = [
        (dir.join("rust").join("Cargo.toml"), template::cargo_toml(day)),
        (dir.join("rust").join("src").join("main.rs"), template::main_rs(day)),
        (dir.join("input.txt"), String::new()),
        (dir.join("sample.txt"), String::new()),
    ];

    let mut created = vec![];
    for (path, contents) in files {
        create(&path, &contents)?;
        created.push(path);
    }

    Ok(created)
}

fn main() {
    let cli = Cli::parse();

    match scaffold(&cli.root, cli.day) {
        Ok(created) => {
            for path in created {
                println!("created {}", path.display());
            }
        }
        Err(err) => {
            eprintln!("{err}");
            exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    #[test]
    fn creates_day_from_template() {
        let root = TempDir::new().unwrap();
        let created = scaffold(root.path(), 7).unwrap();

        assert_eq!(created.len(), 4);
        assert!(created.iter().all(|path| path.exists()));

        let manifest = fs::read_to_string(root.path().join("day07/rust/Cargo.toml")).unwrap();
        assert!(manifest.contains(r#"name = "day07""#));

        let main = fs::read_to_string(root.path().join("day07/rust/src/main.rs")).unwrap();
        assert!(main.contains("fn solve(input: &str)"));
        assert!(main.contains("input for day 07"));

        assert_eq!(fs::read_to_string(root.path().join("day07/input.txt")).unwrap(), "");
    }

    #[test]
    fn refuses_existing_day() {
        let root = TempDir::new().unwrap();
        fs::create_dir_all(root.path().join("day12")).unwrap();

        let err = scaffold(root.path(), 12).unwrap_err();
        assert!(matches!(err, ScaffoldError::AlreadyExists { day: 12, .. }));
        assert!(!root.path().join("day12/rust").exists());
    }

    #[test]
    fn day_is_validated() {
        assert!(Cli::try_parse_from(["new_day", "--day", "26"]).is_err());
        assert!(Cli::try_parse_from(["new_day", "--day", "0"]).is_err());

        let cli = Cli::try_parse_from(["new_day", "-d", "3"]).unwrap();
        assert_eq!(cli.day, 3);
        assert_eq!(cli.root, PathBuf::from("."));
    }
}
