//! Host-side report rendering and export
//!
//! Turns an [`AssessmentReport`] into the plain-text plan and three
//! single-column CSV tables (tests, medicines, next steps), and renders the
//! cycle timeline. None of this feeds back into the engine.

pub mod csv;
pub mod text;
pub mod timeline;

pub use text::render_report;

use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::GenoviveConfig;
use crate::pipeline::AssessmentReport;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to create export directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Where each export landed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPaths {
    pub plan: PathBuf,
    pub tests: PathBuf,
    pub medicines: PathBuf,
    pub next_steps: PathBuf,
}

/// Write the text plan and the three CSV tables into `dir`.
pub fn write_exports(
    report: &AssessmentReport,
    config: &GenoviveConfig,
    dir: &Path,
) -> Result<ExportPaths, ExportError> {
    std::fs::create_dir_all(dir).map_err(|source| ExportError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let e = &config.export;
    let paths = ExportPaths {
        plan: dir.join(&e.plan_file),
        tests: dir.join(&e.tests_file),
        medicines: dir.join(&e.medicines_file),
        next_steps: dir.join(&e.next_steps_file),
    };

    write_file(
        &paths.plan,
        &render_report(report, &config.clinic, &config.report),
    )?;
    write_file(
        &paths.tests,
        &csv::single_column_csv(csv::TESTS_HEADER, &report.recommendations.tests),
    )?;
    write_file(
        &paths.medicines,
        &csv::single_column_csv(csv::MEDICINES_HEADER, &report.recommendations.medicines),
    )?;
    write_file(
        &paths.next_steps,
        &csv::single_column_csv(csv::NEXT_STEPS_HEADER, &report.next_steps),
    )?;

    info!(dir = %dir.display(), "Exports written");
    Ok(paths)
}

fn write_file(path: &Path, contents: &str) -> Result<(), ExportError> {
    std::fs::write(path, contents).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })
}
