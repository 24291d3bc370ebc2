//! Tests for etag, mime and info subcommands.

use super::parse;
use crate::cli::{AccessArg, CliCommand};

#[test]
fn cli_parse_etag() {
    match parse(&["gedmedia", "etag", "a.jpg", "--tree", "jones", "--access", "manager"]) {
        CliCommand::Etag { target } => {
            assert_eq!(target.file, "a.jpg");
            assert_eq!(target.tree.as_deref(), Some("jones"));
            assert_eq!(target.access, AccessArg::Manager);
            assert!(!target.thumb);
        }
        _ => panic!("expected Etag"),
    }
}

#[test]
fn cli_parse_mime() {
    match parse(&["gedmedia", "mime", "report.PDF?v=2", "--thumb"]) {
        CliCommand::Mime { file, thumb } => {
            assert_eq!(file, "report.PDF?v=2");
            assert!(thumb);
        }
        _ => panic!("expected Mime"),
    }
}

#[test]
fn cli_parse_info() {
    match parse(&["gedmedia", "info", "https://example.com/x.jpg"]) {
        CliCommand::Info { file } => assert_eq!(file, "https://example.com/x.jpg"),
        _ => panic!("expected Info"),
    }
}
