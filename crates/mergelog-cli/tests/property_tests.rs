// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Property-based tests for mergelog-cli
//!
//! These tests use proptest to verify configuration invariants hold for
//! arbitrary inputs: format lookup, range classification and the parsed
//! command line. They never touch a repository or the process
//! environment.

use clap::Parser;
use proptest::prelude::*;

use mergelog_cli::config::{Config, ConfigError};
use mergelog_git::RangeSpec;

/// The format names the command accepts, canonical and alias forms
static KNOWN_FORMATS: [&str; 8] = [
    "commits",
    "changes",
    "ticket",
    "tickets",
    "ticket_urls",
    "urls",
    "merge_requests",
    "mr",
];

// ============================================================================
// Strategies
// ============================================================================

/// Generate format names: valid ones, near misses and arbitrary junk
fn arbitrary_format() -> impl Strategy<Value = String> {
    prop_oneof![
        // Every accepted name
        proptest::sample::select(&KNOWN_FORMATS[..]).prop_map(str::to_string),
        // Case variants of accepted names are not accepted
        Just("Changes".to_string()),
        Just("COMMITS".to_string()),
        Just("Mr".to_string()),
        // Near misses
        Just("change".to_string()),
        Just("commit".to_string()),
        Just("ticket-urls".to_string()),
        Just("merge_request".to_string()),
        // Empty and whitespace
        Just("".to_string()),
        Just(" changes".to_string()),
        Just("changes ".to_string()),
        // Unicode
        Just("変更".to_string()),
        // Arbitrary short tokens
        "[a-z_]{1,20}",
    ]
}

/// Generate range endpoint names without `..`
fn arbitrary_endpoint() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("HEAD".to_string()),
        Just("main".to_string()),
        Just("v1.0".to_string()),
        Just("origin/release".to_string()),
        "[0-9a-f]{7,40}",
        "[a-zA-Z][a-zA-Z0-9/_-]{0,30}",
    ]
}

// ============================================================================
// Format lookup
// ============================================================================

proptest! {
    #[test]
    fn prop_output_mode_accepts_exactly_known_names(format in arbitrary_format()) {
        let config = Config {
            format: format.clone(),
            ..Default::default()
        };
        let known = KNOWN_FORMATS.contains(&format.as_str());
        prop_assert_eq!(config.output_mode().is_ok(), known);
    }

    #[test]
    fn prop_unknown_format_error_names_the_input(format in "[A-Z]{1,12}") {
        // Uppercase names are never accepted, so the lookup always fails
        let config = Config {
            format: format.clone(),
            ..Default::default()
        };
        match config.output_mode() {
            Err(ConfigError::UnknownFormat { name }) => prop_assert_eq!(name, format),
            other => prop_assert!(false, "expected UnknownFormat, got {:?}", other),
        }
    }
}

// ============================================================================
// Range classification
// ============================================================================

proptest! {
    #[test]
    fn prop_two_endpoint_expressions_parse_as_ranges(
        start in arbitrary_endpoint(),
        end in arbitrary_endpoint(),
    ) {
        let expr = format!("{start}..{end}");
        prop_assert_eq!(RangeSpec::parse(&expr), RangeSpec::Range(expr));
    }

    #[test]
    fn prop_single_names_parse_as_references(name in "[a-zA-Z][a-zA-Z0-9/_-]{0,30}") {
        prop_assert_eq!(RangeSpec::parse(&name), RangeSpec::Reference(name));
    }

    #[test]
    fn prop_parse_preserves_expression_verbatim(expr in "[a-zA-Z0-9/._~^-]{1,40}") {
        prop_assert_eq!(RangeSpec::parse(&expr).to_string(), expr);
    }

    #[test]
    fn prop_since_is_exclusive_start_to_head(start in arbitrary_endpoint()) {
        prop_assert_eq!(
            RangeSpec::since(&start),
            RangeSpec::Range(format!("{start}..HEAD"))
        );
    }
}

// ============================================================================
// Command-line parsing
// ============================================================================

proptest! {
    #[test]
    fn prop_any_format_value_parses(format in "[a-zA-Z0-9_-]{1,20}") {
        // Format validation is deferred to output_mode, so parsing succeeds
        let config = Config::try_parse_from(["mergelog", "--format", format.as_str()])
            .expect("parse should accept any format token");
        prop_assert_eq!(config.format, format);
    }

    #[test]
    fn prop_range_argument_is_passed_through(expr in "[a-zA-Z0-9/._~^][a-zA-Z0-9/._~^-]{0,39}") {
        // A leading dash would read as a flag, so expressions start elsewhere
        let config = Config::try_parse_from(["mergelog", expr.as_str()])
            .expect("parse should accept any range expression");
        prop_assert_eq!(config.range.as_deref(), Some(expr.as_str()));
    }

    #[test]
    fn prop_log_level_ladder(verbose in any::<bool>(), quiet in any::<bool>()) {
        let config = Config {
            verbose,
            quiet,
            ..Default::default()
        };
        let level = config.log_level();
        if verbose {
            prop_assert_eq!(level, tracing::Level::DEBUG);
        } else if quiet {
            prop_assert_eq!(level, tracing::Level::ERROR);
        } else {
            prop_assert_eq!(level, tracing::Level::WARN);
        }
    }
}
