// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Demo certificates used when no config file lists any.

use crate::record::CertificateRecord;

/// Status shown for every demo certificate.
pub const VALID_STATUS: &str = "Authentic & Valid";

/// The demo certificate list, in store order.
pub fn demo_certificates() -> Vec<CertificateRecord> {
    vec![
        CertificateRecord::new("146882", "Mary Kevin", "Level 3 TESOL", "23/08/2022")
            .with_status(VALID_STATUS),
        CertificateRecord::new("123456", "Jane Doe", "Level 2 TEFL", "05/09/2025")
            .with_status(VALID_STATUS),
        CertificateRecord::new(
            "GA-24K7F195",
            "Tunka Botyova Popova",
            "Level 5 Diploma in TEFL",
            "14/02/2024",
        )
        .with_status(VALID_STATUS),
    ]
}

#[cfg(test)]
#[path = "builtin_tests.rs"]
mod tests;
