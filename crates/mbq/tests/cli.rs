//! CLI integration tests for mbq commands.
//!
//! These tests pin down the rendered query text for each subcommand,
//! since that text is the whole point of the tool.

#![allow(clippy::tests_outside_test_module)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to get an mbq command.
fn mbq() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("mbq").unwrap()
}

/// Runs mbq with the given arguments and returns trimmed stdout.
fn query_output(args: &[&str]) -> String {
    let output = mbq().args(args).output().unwrap();
    assert!(
        output.status.success(),
        "mbq {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).unwrap().trim().to_string()
}

mod artist {
    use super::*;

    #[test]
    fn builds_fielded_clauses() {
        let query = query_output(&["artist", "--artist", "Jethro Tull", "--type", "group"]);
        assert_eq!(query, "artist:\"Jethro Tull\" type:group");
    }

    #[test]
    fn positional_terms_hit_the_default_field() {
        let query = query_output(&["artist", "Tull", "Aqualung"]);
        assert_eq!(query, "Tull Aqualung");
    }

    #[test]
    fn escapes_reserved_characters() {
        let query = query_output(&["artist", "--artist", "what?"]);
        assert_eq!(query, "artist:what\\?");
    }

    #[test]
    fn valid_mbid_renders_verbatim() {
        let query = query_output(&["artist", "--arid", "5b11f4ce-a62d-471e-81fc-a69a8278c7da"]);
        assert_eq!(query, "arid:5b11f4ce-a62d-471e-81fc-a69a8278c7da");
    }

    #[test]
    fn rejects_malformed_mbid() {
        mbq()
            .args(["artist", "--arid", "not-a-uuid"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid mbid"));
    }

    #[test]
    fn missing_flag_prohibits_the_field() {
        let query = query_output(&["artist", "--missing", "endarea"]);
        assert_eq!(query, "-endarea:*");
    }

    #[test]
    fn require_and_not_wrap_clauses() {
        let query = query_output(&["artist", "--require", "tag=rock", "--not", "country=US"]);
        assert_eq!(query, "+tag:rock -country:US");
    }

    #[test]
    fn ended_renders_bare_booleans() {
        let query = query_output(&["artist", "--ended", "false"]);
        assert_eq!(query, "ended:false");
    }

    #[test]
    fn fuzzy_adds_edit_distance() {
        let query = query_output(&["artist", "--fuzzy", "Aqualng"]);
        assert_eq!(query, "artist:Aqualng~2");
    }

    #[test]
    fn rejects_unknown_field_name() {
        mbq()
            .args(["artist", "-f", "bogus=x"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("unknown field"));
    }

    #[test]
    fn rejects_clause_without_delimiter() {
        mbq()
            .args(["artist", "-f", "nodelimiter"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("expected FIELD=VALUE"));
    }

    #[test]
    fn rejects_empty_query() {
        mbq()
            .arg("artist")
            .assert()
            .failure()
            .stderr(predicate::str::contains("empty query"));
    }

    #[test]
    fn json_output_wraps_the_query() {
        let stdout = query_output(&["artist", "--artist", "Tull", "--json"]);
        let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
        assert_eq!(json["query"], "artist:Tull");
    }
}

mod recording {
    use super::*;

    #[test]
    fn builds_title_and_artist_clauses() {
        let query =
            query_output(&["recording", "--recording", "Aqualung", "--artist", "Jethro Tull"]);
        assert_eq!(query, "recording:Aqualung artist:\"Jethro Tull\"");
    }

    #[test]
    fn duration_renders_bare_numbers() {
        let query = query_output(&["recording", "--dur", "383000"]);
        assert_eq!(query, "dur:383000");
    }

    #[test]
    fn repeated_statuses_build_an_alternation() {
        let query = query_output(&["recording", "--status", "official", "--status", "promotion"]);
        assert_eq!(query, "status:(official OR promotion)");
    }

    #[test]
    fn rejects_unknown_status() {
        mbq()
            .args(["recording", "--status", "weird"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("unknown status"));
    }

    #[test]
    fn video_renders_bare_booleans() {
        let query = query_output(&["recording", "--video", "true"]);
        assert_eq!(query, "video:true");
    }

    #[test]
    fn isrc_passes_through() {
        let query = query_output(&["recording", "--isrc", "GBAYE7300031"]);
        assert_eq!(query, "isrc:GBAYE7300031");
    }
}

mod release {
    use super::*;

    #[test]
    fn full_dates_render_quoted() {
        let query = query_output(&["release", "--date", "1973-03-28"]);
        assert_eq!(query, "date:\"1973-03-28\"");
    }

    #[test]
    fn partial_dates_render_escaped() {
        let query = query_output(&["release", "--date", "1973-03"]);
        assert_eq!(query, "date:1973\\-03");
    }

    #[test]
    fn primary_type_renders_quoted() {
        let query = query_output(&["release", "--primary-type", "album"]);
        assert_eq!(query, "primarytype:\"album\"");
    }

    #[test]
    fn repeated_types_build_an_alternation() {
        let query = query_output(&[
            "release",
            "--primary-type",
            "album",
            "--primary-type",
            "ep",
        ]);
        assert_eq!(query, "primarytype:(\"album\" OR \"ep\")");
    }

    #[test]
    fn track_count_and_format_combine() {
        let query = query_output(&["release", "--tracks", "8", "--format", "CD"]);
        assert_eq!(query, "format:CD tracks:8");
    }

    #[test]
    fn barcode_passes_through() {
        let query = query_output(&["release", "--barcode", "5099902988313"]);
        assert_eq!(query, "barcode:5099902988313");
    }
}

mod release_group {
    use super::*;

    #[test]
    fn builds_title_and_count_clauses() {
        let query =
            query_output(&["release-group", "--release-group", "Aqualung", "--releases", "2"]);
        assert_eq!(query, "releasegroup:Aqualung releases:2");
    }

    #[test]
    fn first_release_date_renders_quoted() {
        let query = query_output(&["release-group", "--first-release-date", "1971-03-19"]);
        assert_eq!(query, "firstreleasedate:\"1971-03-19\"");
    }

    #[test]
    fn multi_word_types_stay_quoted() {
        let query = query_output(&["release-group", "--primary-type", "audio drama"]);
        assert_eq!(query, "primarytype:\"audio drama\"");
    }

    #[test]
    fn repeated_secondary_types_build_an_alternation() {
        let query = query_output(&[
            "release-group",
            "--secondary-type",
            "live",
            "--secondary-type",
            "remix",
        ]);
        assert_eq!(query, "secondarytype:(\"live\" OR \"remix\")");
    }
}

mod fields {
    use super::*;

    #[test]
    fn lists_artist_fields() {
        mbq()
            .args(["fields", "artist"])
            .assert()
            .success()
            .stdout(predicate::str::contains("arid"))
            .stdout(predicate::str::contains("sortname"))
            .stdout(predicate::str::contains("(default)"));
    }

    #[test]
    fn lists_release_group_fields() {
        mbq()
            .args(["fields", "release-group"])
            .assert()
            .success()
            .stdout(predicate::str::contains("firstreleasedate"));
    }

    #[test]
    fn json_lists_field_objects() {
        let stdout = query_output(&["fields", "recording", "--json"]);
        let rows: serde_json::Value = serde_json::from_str(&stdout).unwrap();
        let names: Vec<&str> = rows
            .as_array()
            .unwrap()
            .iter()
            .map(|row| row["field"].as_str().unwrap())
            .collect();
        assert!(names.contains(&"dur"));
        assert!(names.contains(&"isrc"));
    }

    #[test]
    fn rejects_unknown_entity() {
        mbq()
            .args(["fields", "bogus"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("unknown entity"));
    }
}

mod escape {
    use super::*;

    #[test]
    fn escapes_reserved_characters() {
        let escaped = query_output(&["escape", "what?"]);
        assert_eq!(escaped, "what\\?");
    }

    #[test]
    fn escapes_boolean_operator_pairs() {
        let escaped = query_output(&["escape", "weird && loud"]);
        assert_eq!(escaped, "weird \\&& loud");
    }

    #[test]
    fn leaves_plain_text_alone() {
        let escaped = query_output(&["escape", "plain"]);
        assert_eq!(escaped, "plain");
    }
}
