use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::{Path, PathBuf};

use log::warn;
use walkdir::{DirEntry, WalkDir};

use crate::commands::{RULE_FILE_SUPPORTED_EXTENSIONS, STDIN_NAME, STDIN_PATH};
use crate::rules::errors::Error;
use crate::utils::reader::Reader;

/// Where the content of one rules file comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum RuleSource {
    Stdin,
    File(PathBuf),
}

impl RuleSource {
    pub(crate) fn read(&self, reader: &mut Reader) -> Result<String, Error> {
        match self {
            RuleSource::Stdin => {
                let mut content = String::new();
                reader.read_to_string(&mut content)?;
                Ok(content)
            }
            RuleSource::File(path) => match File::open(path) {
                Ok(file) => Ok(read_file_content(file)?),
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    Err(Error::FileNotFoundError(path.display().to_string()))
                }
                Err(e) => Err(Error::from(e)),
            },
        }
    }
}

impl Display for RuleSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RuleSource::Stdin => f.write_str(STDIN_NAME),
            RuleSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

pub(crate) fn read_file_content(file: File) -> Result<String, std::io::Error> {
    let mut file_content = String::new();
    let mut buf_reader = BufReader::new(file);
    buf_reader.read_to_string(&mut file_content)?;
    Ok(file_content)
}

pub(crate) fn alphabetical(first: &DirEntry, second: &DirEntry) -> Ordering {
    first.file_name().cmp(second.file_name())
}

pub(crate) fn has_a_supported_extension(name: &str, extensions: &[&str]) -> bool {
    extensions.iter().any(|extension| name.ends_with(extension))
}

pub(crate) fn get_files_with_filter<S, F>(
    file: &Path,
    sort: S,
    filter: F,
) -> Result<Vec<PathBuf>, Error>
where
    S: FnMut(&DirEntry, &DirEntry) -> Ordering + Send + Sync + 'static,
    F: Fn(&DirEntry) -> bool,
{
    let mut selected = Vec::with_capacity(10);
    let walker = WalkDir::new(file).sort_by(sort).into_iter();
    let dir_check = |entry: &DirEntry| {
        // select directories to traverse
        if entry.path().is_dir() {
            return true;
        }
        filter(entry)
    };
    for entry in walker.filter_entry(dir_check) {
        match entry {
            Ok(entry) => {
                if entry.path().is_file() {
                    selected.push(entry.into_path());
                }
            }
            Err(e) => warn!("Skipping entry below {}: {}", file.display(), e),
        }
    }

    Ok(selected)
}

/// Turns the command line arguments into rule sources, keeping argument
/// order. A directory contributes its `.rules` files in alphabetical order,
/// anything else is taken as a file name and only opened when it is checked.
pub(crate) fn expand_rule_sources(args: &[String]) -> Result<Vec<RuleSource>, Error> {
    let mut sources = Vec::with_capacity(args.len());
    for arg in args {
        if arg == STDIN_PATH {
            sources.push(RuleSource::Stdin);
            continue;
        }

        let path = PathBuf::from(arg);
        if path.is_dir() {
            let files = get_files_with_filter(&path, alphabetical, |entry| {
                entry
                    .file_name()
                    .to_str()
                    .map_or(false, |name| {
                        has_a_supported_extension(name, &RULE_FILE_SUPPORTED_EXTENSIONS)
                    })
            })?;
            if files.is_empty() {
                warn!("No rules files found in {}", path.display());
            }
            sources.extend(files.into_iter().map(RuleSource::File));
        } else {
            sources.push(RuleSource::File(path));
        }
    }

    Ok(sources)
}
