mod common;
use common::{TestResult, init_logger};
use safedoc::{LineBreakOptions, MeasureError, break_lines};

fn ten_per_char(text: &str) -> Result<f32, MeasureError> {
    Ok(text.chars().count() as f32 * 10.0)
}

#[test]
fn test_greedy_packing_under_width() -> TestResult {
    init_logger();
    let lines = break_lines(
        "Fall Protection Required Near Excavation Edge",
        120.0,
        &LineBreakOptions::default(),
        ten_per_char,
    )?;

    assert_eq!(
        lines,
        vec!["Fall", "Protection", "Required", "Near", "Excavation", "Edge"]
    );
    for line in &lines {
        assert!(line.chars().count() <= 12, "'{}' is wider than 120pt", line);
    }
    Ok(())
}

#[test]
fn test_greedy_packing_joins_short_words() -> TestResult {
    let lines = break_lines(
        "Do not stand under the load",
        120.0,
        &LineBreakOptions::default(),
        ten_per_char,
    )?;
    assert_eq!(lines, vec!["Do not stand", "under the", "load"]);
    Ok(())
}

#[test]
fn test_long_word_breaks_into_fragments() -> TestResult {
    init_logger();
    let word = "Pneumoultramicroscopicsilicovolcanoconiosis";
    let lines = break_lines(word, 120.0, &LineBreakOptions::default(), ten_per_char)?;

    assert_eq!(lines.len(), word.chars().count().div_ceil(12));
    for line in &lines {
        assert!(ten_per_char(line)? <= 120.0);
    }
    assert_eq!(lines.concat(), word);
    Ok(())
}

#[test]
fn test_long_word_with_hyphens_stays_within_width() -> TestResult {
    let word = "Pneumoultramicroscopicsilicovolcanoconiosis";
    let options = LineBreakOptions {
        hyphenate_long_words: true,
        ..Default::default()
    };
    let lines = break_lines(word, 120.0, &options, ten_per_char)?;

    assert!(lines.len() > 1);
    for line in &lines {
        assert!(ten_per_char(line)? <= 120.0);
    }
    let rebuilt: String = lines.iter().map(|l| l.trim_end_matches('-')).collect();
    assert_eq!(rebuilt, word);
    Ok(())
}

#[test]
fn test_whitespace_runs_collapse_by_default() -> TestResult {
    let collapsed = break_lines("Wear   gloves", 500.0, &LineBreakOptions::default(), ten_per_char)?;
    assert_eq!(collapsed, vec!["Wear gloves"]);
    Ok(())
}

#[test]
fn test_blank_text_has_no_lines() -> TestResult {
    let lines = break_lines("   ", 120.0, &LineBreakOptions::default(), ten_per_char)?;
    assert!(lines.is_empty());
    Ok(())
}

#[test]
fn test_measure_failure_propagates() {
    let result = break_lines("Anything", 120.0, &LineBreakOptions::default(), |_: &str| {
        Err::<f32, MeasureError>(MeasureError::Unavailable {
            measurer: "test",
            message: "fonts missing".into(),
        })
    });
    assert!(matches!(result, Err(MeasureError::Unavailable { .. })));
}
