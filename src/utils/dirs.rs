use anyhow::Result;
use std::fs;

// Base data directory
pub const DATA_DIR: &str = "data";

// EDGAR specific directories
pub const EDGAR_DIR: &str = "data/edgar";
pub const EDGAR_FACTS_DIR: &str = "data/edgar/facts";

// Assembled statement output
pub const REPORTS_DIR: &str = "data/reports";

pub fn ensure_dir(path: &str) -> Result<()> {
    fs::create_dir_all(path)?;
    Ok(())
}

pub fn ensure_edgar_dirs() -> Result<()> {
    ensure_dir(DATA_DIR)?;
    ensure_dir(EDGAR_DIR)?;
    ensure_dir(EDGAR_FACTS_DIR)?;
    Ok(())
}

pub fn ensure_report_dirs() -> Result<()> {
    ensure_dir(DATA_DIR)?;
    ensure_dir(REPORTS_DIR)?;
    Ok(())
}
