//! Reserved usernames
//!
//! A process-wide list of names that can never be registered (`admin`,
//! `root`, names already handed out by a previous deployment, ...). It backs
//! [`ReservedNameLookup`], the local stand-in for an account service.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use thiserror::Error;

static RESERVED_USERNAMES: RwLock<Option<HashSet<String>>> = RwLock::new(None);

const PATH_ENV: &str = "QUIZ_RESERVED_USERNAMES_PATH";
const DEFAULT_PATH: &str = "./assets/reserved-usernames.txt";

#[derive(Error, Debug)]
pub enum ReservedError {
    #[error("Reserved username file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read reserved username file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Reserved username file is empty")]
    EmptyFile,
}

/// Returns the reserved username file path.
///
/// Priority:
/// 1. Environment variable `QUIZ_RESERVED_USERNAMES_PATH`
/// 2. Default path `./assets/reserved-usernames.txt`
pub fn reserved_usernames_path() -> PathBuf {
    std::env::var(PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_PATH))
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Loads the reserved username list from the configured path.
///
/// # Errors
///
/// Returns error if the file does not exist, cannot be read, or holds no
/// names.
pub fn init_reserved_usernames() -> Result<usize, ReservedError> {
    init_reserved_usernames_from_path(reserved_usernames_path())
}

/// Loads the reserved username list from a specific file, one name per line.
///
/// Idempotent: once a list is loaded, later calls return its size without
/// reading the file.
pub fn init_reserved_usernames_from_path<P: AsRef<Path>>(path: P) -> Result<usize, ReservedError> {
    {
        let guard = RESERVED_USERNAMES.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(set) = guard.as_ref() {
            return Ok(set.len());
        }
    }

    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Reserved usernames FAILED to load: file not found {:?}", path);
        return Err(ReservedError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    let set: HashSet<String> = content
        .lines()
        .map(normalize)
        .filter(|l| !l.is_empty())
        .collect();

    if set.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Reserved usernames FAILED to load: empty file {:?}", path);
        return Err(ReservedError::EmptyFile);
    }

    let count = set.len();
    *RESERVED_USERNAMES.write().unwrap_or_else(PoisonError::into_inner) = Some(set);

    #[cfg(feature = "tracing")]
    tracing::info!("Reserved usernames loaded: {} names from {:?}", count, path);

    Ok(count)
}

/// Returns a copy of the loaded list, or `None` before initialization.
pub fn reserved_usernames() -> Option<HashSet<String>> {
    RESERVED_USERNAMES
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

fn lookup_reserved(name: &str) -> Option<bool> {
    RESERVED_USERNAMES
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .as_ref()
        .map(|set| set.contains(&normalize(name)))
}

/// Checks a username against the list (trimmed, case-insensitive).
///
/// Returns `false` if the list is not initialized.
pub fn is_reserved(name: &str) -> bool {
    lookup_reserved(name).unwrap_or(false)
}

/// Availability backend answering from the reserved username list.
#[cfg(feature = "async")]
#[derive(Debug, Default, Clone, Copy)]
pub struct ReservedNameLookup;

#[cfg(feature = "async")]
impl crate::availability::AvailabilityLookup for ReservedNameLookup {
    fn check(
        &self,
        name: &str,
    ) -> impl std::future::Future<
        Output = Result<crate::availability::Availability, crate::availability::LookupError>,
    > + Send {
        use crate::availability::{Availability, LookupError};

        let answer = match lookup_reserved(name) {
            Some(true) => Ok(Availability::Taken),
            Some(false) => Ok(Availability::Available),
            None => Err(LookupError::NotInitialized),
        };
        std::future::ready(answer)
    }
}

/// Clears the list for testing purposes.
#[cfg(test)]
pub fn reset_reserved_for_testing() {
    *RESERVED_USERNAMES.write().unwrap_or_else(PoisonError::into_inner) = None;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn set_env(key: &str, value: &str) {
        // SAFETY: tests touching the environment are #[serial]
        unsafe { std::env::set_var(key, value); }
    }

    fn remove_env(key: &str) {
        // SAFETY: tests touching the environment are #[serial]
        unsafe { std::env::remove_var(key); }
    }

    fn setup_with_tempfile(names: &[&str]) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        for name in names {
            writeln!(temp_file, "{}", name).expect("Failed to write");
        }
        temp_file
    }

    #[test]
    #[serial]
    fn test_path_default() {
        remove_env(PATH_ENV);
        assert_eq!(reserved_usernames_path(), PathBuf::from(DEFAULT_PATH));
    }

    #[test]
    #[serial]
    fn test_path_from_env() {
        set_env(PATH_ENV, "/etc/quiz/reserved.txt");
        assert_eq!(reserved_usernames_path(), PathBuf::from("/etc/quiz/reserved.txt"));
        remove_env(PATH_ENV);
    }

    #[test]
    #[serial]
    fn test_init_file_not_found() {
        reset_reserved_for_testing();
        set_env(PATH_ENV, "/nonexistent/path/reserved.txt");

        let result = init_reserved_usernames();
        assert!(matches!(result, Err(ReservedError::FileNotFound(_))));

        remove_env(PATH_ENV);
    }

    #[test]
    #[serial]
    fn test_init_blank_file() {
        reset_reserved_for_testing();
        let temp_file = setup_with_tempfile(&["", "   "]);

        let result = init_reserved_usernames_from_path(temp_file.path());
        assert!(matches!(result, Err(ReservedError::EmptyFile)));
        assert!(reserved_usernames().is_none());
    }

    #[test]
    #[serial]
    fn test_init_from_env_path() {
        reset_reserved_for_testing();
        let temp_file = setup_with_tempfile(&["admin", "Root", "admin"]);
        set_env(PATH_ENV, temp_file.path().to_str().unwrap());

        assert_eq!(init_reserved_usernames().unwrap(), 2);
        assert!(reserved_usernames().unwrap().contains("root"));

        remove_env(PATH_ENV);
    }

    #[test]
    #[serial]
    fn test_init_is_idempotent() {
        reset_reserved_for_testing();
        let first = setup_with_tempfile(&["admin"]);
        let second = setup_with_tempfile(&["one", "two", "three"]);

        assert_eq!(init_reserved_usernames_from_path(first.path()).unwrap(), 1);
        assert_eq!(init_reserved_usernames_from_path(second.path()).unwrap(), 1);
    }

    #[test]
    #[serial]
    fn test_is_reserved_case_insensitive() {
        reset_reserved_for_testing();
        let temp_file = setup_with_tempfile(&["Admin"]);
        init_reserved_usernames_from_path(temp_file.path()).unwrap();

        assert!(is_reserved("admin"));
        assert!(is_reserved("  ADMIN "));
        assert!(!is_reserved("alice"));
    }

    #[test]
    #[serial]
    fn test_is_reserved_uninitialized() {
        reset_reserved_for_testing();
        assert!(!is_reserved("admin"));
    }

    #[cfg(feature = "async")]
    #[tokio::test]
    #[serial]
    async fn test_lookup_answers_from_list() {
        use crate::availability::{Availability, AvailabilityLookup, LookupError};

        reset_reserved_for_testing();
        assert_eq!(
            ReservedNameLookup.check("admin").await,
            Err(LookupError::NotInitialized)
        );

        let temp_file = setup_with_tempfile(&["admin"]);
        init_reserved_usernames_from_path(temp_file.path()).unwrap();

        assert_eq!(ReservedNameLookup.check("Admin").await, Ok(Availability::Taken));
        assert_eq!(ReservedNameLookup.check("alice").await, Ok(Availability::Available));
    }
}
