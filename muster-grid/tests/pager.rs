use muster_grid::pager::{
    PAGE_SIZE_OPTIONS, PageItem, Pagination, last_page_for, page_numbers,
};

fn pages(items: &[PageItem]) -> Vec<String> {
    items
        .iter()
        .map(|item| match item {
            PageItem::Page(page) => page.to_string(),
            PageItem::Gap => "...".to_string(),
        })
        .collect()
}

#[test]
fn test_single_page_strip() {
    assert_eq!(pages(&page_numbers(1, 1)), ["1"]);
}

#[test]
fn test_middle_page_gets_gaps_on_both_sides() {
    assert_eq!(
        pages(&page_numbers(5, 10)),
        ["1", "...", "4", "5", "6", "...", "10"]
    );
}

#[test]
fn test_short_range_has_no_gaps() {
    assert_eq!(pages(&page_numbers(2, 3)), ["1", "2", "3"]);
    assert_eq!(pages(&page_numbers(1, 4)), ["1", "2", "3", "4"]);
}

#[test]
fn test_gap_never_hides_a_single_page() {
    // Between the 1..=2 head and the 4..=5 window only page 3 is missing,
    // so its number shows instead of an ellipsis.
    assert_eq!(
        pages(&page_numbers(4, 10)),
        ["1", "2", "3", "4", "5", "...", "10"]
    );
}

#[test]
fn test_first_and_last_page_strips() {
    assert_eq!(pages(&page_numbers(1, 10)), ["1", "2", "...", "10"]);
    assert_eq!(pages(&page_numbers(10, 10)), ["1", "...", "9", "10"]);
}

#[test]
fn test_strip_tolerates_zero_last_page() {
    assert_eq!(pages(&page_numbers(1, 0)), ["1"]);
}

#[test]
fn test_summary_line() {
    let info = Pagination {
        current_page: 2,
        per_page: 10,
        total: 35,
        last_page: 4,
    };
    assert_eq!(info.summary(), "Showing 11 to 20 of 35 entries");
}

#[test]
fn test_summary_clamps_to_total_on_last_page() {
    let info = Pagination {
        current_page: 4,
        per_page: 10,
        total: 35,
        last_page: 4,
    };
    assert_eq!(info.summary(), "Showing 31 to 35 of 35 entries");
}

#[test]
fn test_summary_of_empty_listing() {
    let info = Pagination::default();
    assert_eq!(info.summary(), "Showing 0 to 0 of 0 entries");
}

#[test]
fn test_last_page_never_below_one() {
    assert_eq!(last_page_for(0, 10), 1);
    assert_eq!(last_page_for(5, 10), 1);
    assert_eq!(last_page_for(10, 10), 1);
    assert_eq!(last_page_for(11, 10), 2);
    assert_eq!(last_page_for(3, 0), 1);
}

#[test]
fn test_page_size_options() {
    assert_eq!(PAGE_SIZE_OPTIONS, [10, 20, 50, 100]);
}
