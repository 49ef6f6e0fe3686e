use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr_of, stdout_of};

#[test]
fn no_arguments_is_a_usage_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stderr_of(&output),
        "You must specify only the root directory path\n"
    );
    assert!(!test.has_file("todo.md"));

    Ok(())
}

#[test]
fn multiple_roots_is_a_usage_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().args(["a", "b"]).output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stderr_of(&output),
        "You must specify only the root directory path\n"
    );
    assert!(!test.has_file("todo.md"));

    Ok(())
}

#[test]
fn missing_root_is_rejected_with_its_absolute_path() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("missing").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stderr_of(&output),
        format!(
            "{} is not a valid directory path\n",
            test.root().join("missing").display()
        )
    );
    assert!(!test.has_file("todo.md"));

    Ok(())
}

#[test]
fn a_file_is_not_a_valid_root() -> Result<()> {
    let test = CliTest::with_file("notes.md", "<!-- TODO(alice): fix this -->\n")?;

    let output = test.command().arg("notes.md").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stderr_of(&output),
        format!(
            "{} is not a valid directory path\n",
            test.root().join("notes.md").display()
        )
    );
    assert!(!test.has_file("todo.md"));

    Ok(())
}

#[test]
fn report_groups_comments_and_skips_silent_files() -> Result<()> {
    let test = CliTest::with_file(
        "docs/alpha.md",
        "# Alpha\n\n<!-- TODO(alice): fix this -->\n",
    )?;
    test.write_file("docs/beta.md", "# Beta\n\nno comments here\n")?;
    test.write_file("docs/empty.md", "")?;

    let output = test.scan()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout_of(&output).contains("3 files scanned, 1 comments"));
    assert_eq!(
        test.read_file("todo.md")?,
        "\n#### alpha\n\n  AUTHOR : alice  -  COMMENT: fix this\n\n"
    );

    Ok(())
}

#[test]
fn comment_variants_end_up_in_one_section() -> Result<()> {
    let test = CliTest::with_file(
        "doc.md",
        concat!(
            "# Doc\n",
            "<!-- HERE(bob):\n",
            "continue the\n",
            "thought -->\n",
            "<!-- just a note -->\n",
            "<!-- TODO(alice): fix this -->\n",
            "<!-- never closes\n",
        ),
    )?;

    let output = test.scan()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        test.read_file("todo.md")?,
        concat!(
            "\n#### doc\n\n",
            "  AUTHOR : bob  -  COMMENT: continue the thought\n\n",
            "  AUTHOR : n/a  -  COMMENT: just a note\n\n",
            "  AUTHOR : alice  -  COMMENT: fix this\n\n",
        )
    );

    Ok(())
}

#[test]
fn report_is_overwritten_and_idempotent() -> Result<()> {
    let test = CliTest::with_file("notes.md", "<!-- TODO(alice): fix this -->\n")?;
    test.write_file("todo.md", "stale content from a previous tool\n")?;

    let first = test.scan()?;
    assert_eq!(first.status.code(), Some(0));
    let first_report = test.read_file("todo.md")?;
    assert_eq!(
        first_report,
        "\n#### notes\n\n  AUTHOR : alice  -  COMMENT: fix this\n\n"
    );

    // A second run also scans the report it wrote, which adds no entries.
    let second = test.scan()?;
    assert_eq!(second.status.code(), Some(0));
    assert_eq!(test.read_file("todo.md")?, first_report);

    Ok(())
}

#[test]
fn sections_follow_sorted_walk_order() -> Result<()> {
    let test = CliTest::with_file("b/second.md", "<!-- TODO(bob): two -->\n")?;
    test.write_file("a/first.md", "<!-- TODO(alice): one -->\n")?;

    let output = test.scan()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        test.read_file("todo.md")?,
        concat!(
            "\n#### first\n\n",
            "  AUTHOR : alice  -  COMMENT: one\n\n",
            "\n#### second\n\n",
            "  AUTHOR : bob  -  COMMENT: two\n\n",
        )
    );

    Ok(())
}

#[test]
fn output_flag_redirects_the_report() -> Result<()> {
    let test = CliTest::with_file("notes.md", "<!-- HERE(bob): resume here -->\n")?;

    let output = test
        .command()
        .args([".", "--output", "annotations.md"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(!test.has_file("todo.md"));
    assert_eq!(
        test.read_file("annotations.md")?,
        "\n#### notes\n\n  AUTHOR : bob  -  COMMENT: resume here\n\n"
    );

    Ok(())
}

#[test]
fn verbose_lists_scanned_files_on_stderr() -> Result<()> {
    let test = CliTest::with_file("notes.md", "plain text\n")?;

    let output = test.command().args([".", "--verbose"]).output()?;

    assert_eq!(output.status.code(), Some(0));
    let stderr = stderr_of(&output);
    assert!(stderr.contains("scanning"));
    assert!(stderr.contains("notes.md"));
    // No comments anywhere, so the report exists but is empty.
    assert_eq!(test.read_file("todo.md")?, "");

    Ok(())
}
