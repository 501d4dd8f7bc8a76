#![allow(unused)] // Ignore due to all constants not being utilized across all environments

use std::path::PathBuf;
use std::sync::LazyLock;

macro_rules! define_path {
    ($($segment:expr),*) => {{
        PathBuf::from_iter(vec![$($segment),*])
    }};
}

pub static ALTERNATIVES_CSV_FILE_PATH: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("data", "alternatives.csv"));

pub static COMPRESSED_ALTERNATIVES_FILE_NAME: &str = "alternatives.csv.gz";
