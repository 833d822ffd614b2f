// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Ambient build-server input

/// Build server hosting the current process
///
/// Detection happens in the surrounding tool; this core only consumes the
/// result to decide stream routing for important and error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildServer {
    Local,
    TeamCity,
    Jenkins,
    GitLab,
    GitHubActions,
    AppVeyor,
    CruiseControl,
}

impl BuildServer {
    /// Whether important and error messages may go to standard error
    ///
    /// AppVeyor and CruiseControl consoles flag error-stream writes as build
    /// failures, so those hosts keep everything on standard output.
    pub fn important_to_stderr(self) -> bool {
        !matches!(self, BuildServer::AppVeyor | BuildServer::CruiseControl)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
