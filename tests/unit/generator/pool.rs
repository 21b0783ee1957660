//! Tests for content modes, number ranges, word lists and pool building

#[cfg(test)]
mod tests {
    use bingo_master::card::{ContentItem, ImageRef};
    use bingo_master::generator::{ContentMode, NumberRange, build_pool, parse_word_list};

    // Tests the default range yields "1" through "75"
    // Verified by using an exclusive upper bound
    #[test]
    fn test_number_range_pool() {
        let pool = NumberRange::new(1, 75).pool();

        assert_eq!(pool.len(), 75);
        assert_eq!(pool.first(), Some(&ContentItem::text("1")));
        assert_eq!(pool.last(), Some(&ContentItem::text("75")));
        assert_eq!(NumberRange::default(), NumberRange::new(1, 75));
    }

    // Tests inverted ranges yield an empty pool instead of an error
    // Verified by swapping min and max
    #[test]
    fn test_inverted_range_is_empty() {
        let range = NumberRange::new(5, 3);

        assert!(range.is_empty());
        assert_eq!(range.len(), 0);
        assert!(range.pool().is_empty());
    }

    // Tests negative and single-value ranges
    // Verified by computing the length without the inclusive end
    #[test]
    fn test_number_range_bounds() {
        assert_eq!(NumberRange::new(-2, 2).len(), 5);
        assert_eq!(
            NumberRange::new(7, 7).pool(),
            vec![ContentItem::text("7")]
        );
        assert_eq!(NumberRange::new(i64::MIN, i64::MAX).len(), u64::MAX);
    }

    // Tests ranges above the pool limit fail validation and never materialize
    // Verified by collecting the whole range in pool
    #[test]
    fn test_oversized_range() {
        let huge = NumberRange::new(0, 10_000_000_000);
        assert!(huge.validate().is_err());
        assert_eq!(huge.pool().len(), 10_000);
        assert!(NumberRange::new(i64::MIN, i64::MAX).validate().is_err());

        assert!(NumberRange::new(1, 10_000).validate().is_ok());
        assert!(NumberRange::new(1, 10_001).validate().is_err());
        assert!(NumberRange::new(5, 3).validate().is_ok());
    }

    // Tests lines are trimmed and blank lines dropped
    // Verified by keeping whitespace-only lines
    #[test]
    fn test_parse_word_list() {
        assert_eq!(parse_word_list("Alice\n\nBob \n"), vec!["Alice", "Bob"]);
        assert_eq!(parse_word_list("  \n\t\n"), Vec::<String>::new());
        assert_eq!(parse_word_list("one two\r\nthree"), vec!["one two", "three"]);
    }

    // Tests only the active mode's source feeds the pool
    // Verified by always building the numbers pool
    #[test]
    fn test_build_pool_by_mode() {
        let images = vec![
            ImageRef::new("a", "a.png", vec![0_u8]),
            ImageRef::new("b", "b.png", vec![1_u8]),
        ];
        let range = NumberRange::new(1, 3);
        let words = "x\ny";

        assert_eq!(build_pool(ContentMode::Numbers, range, words, &images).len(), 3);
        assert_eq!(
            build_pool(ContentMode::Words, range, words, &images),
            vec![ContentItem::text("x"), ContentItem::text("y")]
        );
        let image_pool = build_pool(ContentMode::Images, range, words, &images);
        assert_eq!(image_pool.len(), 2);
        assert!(image_pool.iter().all(|item| matches!(item, ContentItem::Image(_))));
    }

    // Tests mode names parse case-insensitively and print back
    // Verified by matching names case-sensitively
    #[test]
    fn test_content_mode_parse() {
        assert_eq!("Words".parse::<ContentMode>().ok(), Some(ContentMode::Words));
        assert_eq!(" images ".parse::<ContentMode>().ok(), Some(ContentMode::Images));
        assert!("letters".parse::<ContentMode>().is_err());
        assert_eq!(ContentMode::Numbers.to_string(), "numbers");
    }
}
