#![forbid(unsafe_code)]

//! Differential conformance harness.
//!
//! A packet fixture is a JSON file holding transform cases with reference
//! outputs. Running a packet evaluates every case through the public
//! `frft` entry points and compares against the reference within the
//! case's tolerance, producing a [`PacketReport`].

use frft::{BackendKind, FrftError, FrftOptions, frft_with_options, ifrft_with_options};
use frft_runtime::{RuntimeMode, Tolerance, max_abs_diff, now_unix_ms};
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone)]
pub struct HarnessConfig {
    pub fixture_root: PathBuf,
    pub strict_mode: bool,
}

impl HarnessConfig {
    #[must_use]
    pub fn default_paths() -> Self {
        Self {
            fixture_root: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures"),
            strict_mode: true,
        }
    }

    #[must_use]
    pub fn with_fixture_root(mut self, fixture_root: impl Into<PathBuf>) -> Self {
        self.fixture_root = fixture_root.into();
        self
    }

    #[must_use]
    pub fn artifact_dir_for(&self, packet_id: &str) -> PathBuf {
        self.fixture_root.join("artifacts").join(packet_id)
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self::default_paths()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessReport {
    pub suite: &'static str,
    pub fixture_count: usize,
    pub strict_mode: bool,
}

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("fixture load failed for {path}: {source}")]
    FixtureIo { path: PathBuf, source: io::Error },
    #[error("fixture parse failed for {path}: {source}")]
    FixtureParse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("artifact write failed for {path}: {source}")]
    ArtifactIo { path: PathBuf, source: io::Error },
    #[error("report serialization failed: {0}")]
    ReportEncode(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FrftOperation {
    Frft,
    Ifrft,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FixtureBackend {
    #[default]
    RustFft,
    NaiveDft,
}

impl From<FixtureBackend> for BackendKind {
    fn from(value: FixtureBackend) -> Self {
        match value {
            FixtureBackend::RustFft => Self::RustFft,
            FixtureBackend::NaiveDft => Self::NaiveDft,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FrftExpectedOutcome {
    Ok {
        output: Vec<Complex64>,
        atol: f64,
        rtol: f64,
    },
    Error {
        error: String,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FrftCase {
    pub case_id: String,
    pub operation: FrftOperation,
    #[serde(default)]
    pub mode: RuntimeMode,
    #[serde(default)]
    pub backend: FixtureBackend,
    pub order: f64,
    pub input: Vec<Complex64>,
    pub expected: FrftExpectedOutcome,
}

impl FrftCase {
    #[must_use]
    pub fn options(&self) -> FrftOptions {
        FrftOptions::default()
            .with_mode(self.mode)
            .with_backend(self.backend.into())
    }

    pub fn execute(&self) -> Result<Vec<Complex64>, FrftError> {
        let options = self.options();
        match self.operation {
            FrftOperation::Frft => frft_with_options(&self.input, self.order, &options),
            FrftOperation::Ifrft => ifrft_with_options(&self.input, self.order, &options),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FrftPacketFixture {
    pub packet_id: String,
    pub family: String,
    pub cases: Vec<FrftCase>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaseResult {
    pub case_id: String,
    pub passed: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_abs_diff: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PacketReport {
    pub packet_id: String,
    pub family: String,
    pub case_results: Vec<CaseResult>,
    pub passed_cases: usize,
    pub failed_cases: usize,
    pub generated_unix_ms: u64,
}

impl PacketReport {
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failed_cases == 0
    }

    #[must_use]
    pub fn summary(&self) -> PacketSummary {
        PacketSummary {
            packet_id: self.packet_id.clone(),
            family: self.family.clone(),
            passed_cases: self.passed_cases,
            failed_cases: self.failed_cases,
            total_cases: self.case_results.len(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PacketSummary {
    pub packet_id: String,
    pub family: String,
    pub passed_cases: usize,
    pub failed_cases: usize,
    pub total_cases: usize,
}

#[must_use]
pub fn run_smoke(config: &HarnessConfig) -> HarnessReport {
    let fixture_count = fs::read_dir(&config.fixture_root)
        .ok()
        .into_iter()
        .flat_map(|it| it.filter_map(Result::ok))
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "json"))
        .count();

    HarnessReport {
        suite: "smoke",
        fixture_count,
        strict_mode: config.strict_mode,
    }
}

pub fn load_frft_fixture(path: &Path) -> Result<FrftPacketFixture, HarnessError> {
    let raw = fs::read_to_string(path).map_err(|source| HarnessError::FixtureIo {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| HarnessError::FixtureParse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn run_frft_packet(
    config: &HarnessConfig,
    fixture_name: &str,
) -> Result<PacketReport, HarnessError> {
    let fixture = load_frft_fixture(&config.fixture_root.join(fixture_name))?;
    let case_results = fixture.cases.iter().map(evaluate_case).collect();
    Ok(build_packet_report(fixture, case_results))
}

#[must_use]
pub fn evaluate_case(case: &FrftCase) -> CaseResult {
    let (passed, message, observed_diff) = match (&case.expected, case.execute()) {
        (FrftExpectedOutcome::Ok { output, atol, rtol }, Ok(actual)) => {
            if actual.len() != output.len() {
                (
                    false,
                    format!(
                        "length mismatch: expected {}, got {}",
                        output.len(),
                        actual.len()
                    ),
                    None,
                )
            } else {
                let diff = max_abs_diff(&actual, output);
                let pass = Tolerance::new(*atol, *rtol).allclose(&actual, output);
                let msg = if pass {
                    "output matched reference within tolerance".to_owned()
                } else {
                    format!("mismatch: max |actual - expected| = {diff:e} (atol={atol}, rtol={rtol})")
                };
                (pass, msg, Some(diff))
            }
        }
        (FrftExpectedOutcome::Error { error }, Err(actual)) => {
            let pass = error == &actual.to_string();
            let msg = if pass {
                "error matched expected contract".to_owned()
            } else {
                format!("mismatch: expected error `{error}`, got `{actual}`")
            };
            (pass, msg, None)
        }
        (FrftExpectedOutcome::Ok { .. }, Err(actual)) => {
            (false, format!("expected output, got error `{actual}`"), None)
        }
        (FrftExpectedOutcome::Error { error }, Ok(_)) => {
            (false, format!("expected error `{error}`, got output"), None)
        }
    };

    CaseResult {
        case_id: case.case_id.clone(),
        passed,
        message,
        max_abs_diff: observed_diff,
    }
}

pub fn write_parity_report(
    config: &HarnessConfig,
    report: &PacketReport,
) -> Result<PathBuf, HarnessError> {
    let output_dir = config.artifact_dir_for(&report.packet_id);
    fs::create_dir_all(&output_dir).map_err(|source| HarnessError::ArtifactIo {
        path: output_dir.clone(),
        source,
    })?;
    let report_path = output_dir.join("parity_report.json");
    let payload = serde_json::to_string_pretty(report)?;
    fs::write(&report_path, payload).map_err(|source| HarnessError::ArtifactIo {
        path: report_path.clone(),
        source,
    })?;
    Ok(report_path)
}

/// Every `artifacts/<packet>/parity_report.json` under the fixture root,
/// ordered by packet id.
pub fn load_packet_reports(config: &HarnessConfig) -> Result<Vec<PacketReport>, HarnessError> {
    let artifact_root = config.fixture_root.join("artifacts");
    let entries = match fs::read_dir(&artifact_root) {
        Ok(entries) => entries,
        Err(source) if source.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(source) => {
            return Err(HarnessError::ArtifactIo {
                path: artifact_root,
                source,
            });
        }
    };

    let mut reports = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path().join("parity_report.json"))
        .filter(|path| path.is_file())
        .map(|path| read_report(&path))
        .collect::<Result<Vec<_>, _>>()?;
    reports.sort_by(|a, b| a.packet_id.cmp(&b.packet_id));
    Ok(reports)
}

fn read_report(path: &Path) -> Result<PacketReport, HarnessError> {
    let raw = fs::read_to_string(path).map_err(|source| HarnessError::ArtifactIo {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| HarnessError::FixtureParse {
        path: path.to_path_buf(),
        source,
    })
}

fn build_packet_report(fixture: FrftPacketFixture, case_results: Vec<CaseResult>) -> PacketReport {
    let passed_cases = case_results.iter().filter(|case| case.passed).count();
    PacketReport {
        packet_id: fixture.packet_id,
        family: fixture.family,
        failed_cases: case_results.len() - passed_cases,
        passed_cases,
        case_results,
        generated_unix_ms: now_unix_ms(),
    }
}
