// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the draft job actor.

/// Errors that can occur when sending commands to a draft job.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftJobError {
    /// The job task has stopped and no longer accepts commands.
    #[error("Draft job is no longer running")]
    Closed,

    /// The job dropped the command without answering.
    #[error("Draft job dropped the response for {command}")]
    NoResponse {
        /// Name of the command that went unanswered
        command: &'static str,
    },
}
