/// Simple example demonstrating how to use the review library

use anyhow::Result;
use auto_review::app::collect_reports;
use auto_review::utils::output_formatter::format_document;

fn main() -> Result<()> {
    let dir = std::env::temp_dir().join("auto_review_demo");
    std::fs::create_dir_all(&dir)?;

    let noisy = dir.join("test_noisy.py");
    std::fs::write(
        &noisy,
        r#"import pytest

@pytest.mark.skip(reason="flaky")
def test_login():
    # TODO: cover the lockout path
    print("logging in")
"#,
    )?;

    let clean = dir.join("test_clean.py");
    std::fs::write(&clean, "def test_sum():\n    assert sum([1, 2]) == 3\n")?;

    let reports = collect_reports(&[noisy, clean, dir.join("test_missing.py")]);
    println!("{}", format_document(&reports));

    Ok(())
}
