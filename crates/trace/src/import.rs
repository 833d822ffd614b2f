// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Import kinds for externally produced artifact data

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Coverage tool that produced a coverage report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoverageTool {
    DotCover,
    PartCover,
    NCover,
    NCover3,
}

/// NUnit result schema version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NunitSchema {
    V2,
    V3,
}

/// Format of an externally produced build, test, or analysis artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImportKind {
    BuildArtifact,
    Coverage(CoverageTool),
    DupFinder,
    FxCop,
    Pmd,
    Nunit(NunitSchema),
    Junit,
    Xunit,
    Mstest,
}

impl ImportKind {
    /// Canonical short name used in formatted output
    pub fn name(&self) -> &'static str {
        match self {
            ImportKind::BuildArtifact => "buildArtifact",
            ImportKind::Coverage(CoverageTool::DotCover) => "dotcover",
            ImportKind::Coverage(CoverageTool::PartCover) => "partcover",
            ImportKind::Coverage(CoverageTool::NCover) => "ncover",
            ImportKind::Coverage(CoverageTool::NCover3) => "ncover3",
            ImportKind::DupFinder => "dupFinder",
            ImportKind::FxCop => "fxcop",
            ImportKind::Pmd => "pmd",
            ImportKind::Nunit(NunitSchema::V2) => "nunit",
            ImportKind::Nunit(NunitSchema::V3) => "nunit3",
            ImportKind::Junit => "junit",
            ImportKind::Xunit => "xunit",
            ImportKind::Mstest => "mstest",
        }
    }
}

impl fmt::Display for ImportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown import kind: {0}")]
pub struct UnknownImportKind(pub String);

impl std::str::FromStr for ImportKind {
    type Err = UnknownImportKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "buildartifact" => Ok(ImportKind::BuildArtifact),
            "dotcover" => Ok(ImportKind::Coverage(CoverageTool::DotCover)),
            "partcover" => Ok(ImportKind::Coverage(CoverageTool::PartCover)),
            "ncover" => Ok(ImportKind::Coverage(CoverageTool::NCover)),
            "ncover3" => Ok(ImportKind::Coverage(CoverageTool::NCover3)),
            "dupfinder" => Ok(ImportKind::DupFinder),
            "fxcop" => Ok(ImportKind::FxCop),
            "pmd" => Ok(ImportKind::Pmd),
            "nunit" => Ok(ImportKind::Nunit(NunitSchema::V2)),
            "nunit3" => Ok(ImportKind::Nunit(NunitSchema::V3)),
            "junit" => Ok(ImportKind::Junit),
            "xunit" => Ok(ImportKind::Xunit),
            "mstest" => Ok(ImportKind::Mstest),
            other => Err(UnknownImportKind(other.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "import_tests.rs"]
mod tests;
