// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Line-oriented JSON request loop over a shared store.
//!
//! Each non-blank input line is one request; each request gets exactly one
//! response line. A bad request is answered with an error response and the
//! session continues.
//!
//! ```text
//! {"op":"lookup","number":"146882"}
//! {"op":"add","entry":{"number":"9","recipient":"Ann Lee"}}
//! {"op":"replace","entries":[...]}
//! {"op":"list"}
//! ```

use std::io::{BufRead, Write};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::controller::LookupController;
use crate::error::{Error, Result};
use crate::matcher::{LookupOutcome, MatchKind};
use crate::query::LookupQuery;
use crate::record::{CertificateRecord, coerce_to_string};

/// One decoded request line.
#[derive(Debug, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
enum Request {
    Lookup {
        #[serde(default)]
        number: Value,
        #[serde(default)]
        name: Value,
    },
    Add {
        entry: Value,
    },
    Replace {
        entries: Value,
    },
    List,
}

/// Failure category reported in error responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Line was not a well-formed request.
    Request,
    /// Store mutation rejected its input.
    Validation,
    /// Lookup without a number or a name.
    EmptyQuery,
    /// Anything else.
    Internal,
}

impl From<&Error> for FailureKind {
    fn from(err: &Error) -> Self {
        match err {
            Error::Validation(_) => FailureKind::Validation,
            Error::EmptyQuery => FailureKind::EmptyQuery,
            Error::Argument(_) => FailureKind::Request,
            Error::Config { .. } | Error::Io { .. } | Error::Internal(_) => FailureKind::Internal,
        }
    }
}

/// One response line.
#[derive(Debug, Default, PartialEq, Serialize)]
pub struct Response {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub found: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_by: Option<MatchKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate: Option<CertificateRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificates: Option<Vec<CertificateRecord>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<FailureKind>,
}

impl Response {
    fn count(count: usize) -> Self {
        Self {
            ok: true,
            count: Some(count),
            ..Self::default()
        }
    }

    fn failure(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: Some(message.into()),
            kind: Some(kind),
            ..Self::default()
        }
    }
}

impl From<LookupOutcome> for Response {
    fn from(outcome: LookupOutcome) -> Self {
        match outcome {
            LookupOutcome::Found { record, kind } => Self {
                ok: true,
                found: Some(true),
                matched_by: Some(kind),
                certificate: Some(record),
                ..Self::default()
            },
            LookupOutcome::NotFound => Self {
                ok: true,
                found: Some(false),
                ..Self::default()
            },
        }
    }
}

impl From<Error> for Response {
    fn from(err: Error) -> Self {
        Self::failure(FailureKind::from(&err), err.to_string())
    }
}

/// Totals for a finished session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub requests: usize,
    pub failures: usize,
}

/// Answer one request line. Blank lines produce no response.
pub fn handle_line(controller: &LookupController, line: &str) -> Option<Response> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let response = match serde_json::from_str::<Request>(line) {
        Ok(request) => dispatch(controller, request).unwrap_or_else(Response::from),
        Err(e) => Response::failure(FailureKind::Request, format!("invalid request: {e}")),
    };
    Some(response)
}

fn dispatch(controller: &LookupController, request: Request) -> Result<Response> {
    let store = controller.store();
    match request {
        Request::Lookup { number, name } => {
            let query = LookupQuery::new(coerce_to_string(&number), coerce_to_string(&name));
            Ok(controller.submit(&query)?.into())
        }
        Request::Add { entry } => {
            store.add_record(CertificateRecord::from_value(&entry))?;
            Ok(Response::count(store.snapshot()?.len()))
        }
        Request::Replace { entries } => Ok(Response::count(store.replace_all(&entries)?)),
        Request::List => {
            let snapshot = store.snapshot()?;
            Ok(Response {
                certificates: Some(snapshot.records().to_vec()),
                ..Response::count(snapshot.len())
            })
        }
    }
}

/// Read requests from `input` until EOF, writing one response line each.
pub fn run<R: BufRead, W: Write>(
    controller: &LookupController,
    input: R,
    mut output: W,
) -> std::io::Result<SessionStats> {
    let mut stats = SessionStats::default();
    for line in input.split(b'\n') {
        let line = line?;
        let response = match std::str::from_utf8(&line) {
            Ok(text) => handle_line(controller, text),
            Err(_) => Some(Response::failure(
                FailureKind::Request,
                "invalid request: not valid UTF-8",
            )),
        };
        let Some(response) = response else {
            continue;
        };

        stats.requests += 1;
        if !response.ok {
            stats.failures += 1;
            tracing::debug!(error = ?response.error, "request failed");
        }
        let json = serde_json::to_string(&response).map_err(std::io::Error::other)?;
        writeln!(output, "{}", json)?;
        output.flush()?;
    }
    Ok(stats)
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
