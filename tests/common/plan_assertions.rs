// ============================================================================
// Fluent Assertion Macros
// ============================================================================

/// Assert the number of pages in a plan
#[macro_export]
macro_rules! assert_page_count {
    ($outcome:expr, $count:expr) => {
        assert_eq!(
            $outcome.plan.page_count,
            $count,
            "Expected {} pages, got {}",
            $count,
            $outcome.plan.page_count
        );
    };
}

/// Assert that a page draws specific text
#[macro_export]
macro_rules! assert_page_contains_text {
    ($outcome:expr, $page:expr, $text:expr) => {
        let drawn = $crate::common::page_text(&$outcome.plan, $page);
        assert!(
            drawn.contains($text),
            "Page {} should contain '{}', but drew:\n{}",
            $page,
            $text,
            drawn
        );
    };
}

/// Assert that no placement crosses the bottom margin
#[macro_export]
macro_rules! assert_no_overflow {
    ($outcome:expr) => {
        let bottom = $outcome.plan.geometry.content_bottom();
        for placement in &$outcome.plan.placements {
            assert!(
                placement.bottom() <= bottom,
                "{:?} on page {} ends at {} below the content bottom {}",
                placement.origin,
                placement.page_index,
                placement.bottom(),
                bottom
            );
        }
    };
}
