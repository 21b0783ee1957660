//! Tests for session state, card counts and regeneration triggers

#[cfg(test)]
mod tests {
    use bingo_master::BingoError;
    use bingo_master::card::{Cell, GridSize};
    use bingo_master::export::{BatchExporter, CancellationToken, ImageRasterizer, MemorySink};
    use bingo_master::generator::{ContentMode, FreeSpace, NumberRange};
    use bingo_master::render::{CenterIcon, Theme, encode_png};
    use bingo_master::session::{CardCount, Session};
    use image::{Rgba, RgbaImage};

    // Tests card counts are limited to 1..=100
    // Verified by accepting zero cards
    #[test]
    fn test_card_count_bounds() {
        assert!(CardCount::new(0).is_err());
        assert_eq!(CardCount::new(1).map(CardCount::get).ok(), Some(1));
        assert_eq!(CardCount::try_from(100).map(CardCount::get).ok(), Some(100));
        assert!(CardCount::new(101).is_err());
        assert_eq!(CardCount::default().get(), 1);
    }

    // Tests a new session holds one 3x3 numbers card with a free space
    // Verified by starting with an empty set
    #[test]
    fn test_default_session() {
        let session = Session::new(Some(1));

        assert_eq!(session.cards().len(), 1);
        assert_eq!(session.grid(), GridSize::Three);
        assert_eq!(session.mode(), ContentMode::Numbers);
        assert_eq!(session.pool().len(), 75);
        assert_eq!(session.generation(), 1);
        let card = session.cards().get(0);
        assert!(card.and_then(|c| c.get(1, 1)).is_some_and(Cell::is_free_space));
    }

    // Tests content setters regenerate only when the value changes
    // Verified by regenerating on every call
    #[test]
    fn test_setters_regenerate_on_change() -> bingo_master::Result<()> {
        let mut session = Session::new(Some(2));
        let start = session.generation();

        session.set_grid_size(GridSize::Three);
        assert_eq!(session.generation(), start);
        session.set_grid_size(GridSize::Five);
        assert_eq!(session.generation(), start + 1);
        assert_eq!(session.cards().grid(), GridSize::Five);

        session.set_number_range(NumberRange::new(1, 30))?;
        session.set_free_space(FreeSpace::disabled());
        session.set_card_count(4)?;
        assert_eq!(session.generation(), start + 4);
        assert_eq!(session.cards().len(), 4);

        session.set_card_count(4)?;
        assert_eq!(session.generation(), start + 4);
        assert!(session.set_card_count(0).is_err());
        assert_eq!(session.cards().len(), 4);
        Ok(())
    }

    // Tests word-list edits regenerate like other content edits
    // Verified by ignoring word-list changes
    #[test]
    fn test_word_list_regenerates() {
        let mut session = Session::new(Some(3));
        session.set_content_mode(ContentMode::Words);
        let before = session.generation();

        session.set_word_list("Alice\nBob\n");
        assert_eq!(session.generation(), before + 1);
        assert_eq!(session.pool().len(), 2);
        let card = session.cards().get(0);
        assert_eq!(card.map(|c| c.empty_count()), Some(6));

        session.set_word_list("Alice\nBob\n");
        assert_eq!(session.generation(), before + 1);
    }

    // Tests presentation setters leave the cards alone
    // Verified by regenerating on title changes
    #[test]
    fn test_style_setters_keep_cards() -> bingo_master::Result<()> {
        let mut session = Session::new(Some(4));
        let cards = session.cards().clone();

        session.set_title("Party");
        session.set_theme(Theme::by_name("sunset")?);
        session.set_icon(CenterIcon::Heart);

        assert_eq!(session.cards(), &cards);
        assert_eq!(session.style().title, "Party");
        assert_eq!(session.style().theme.name, "sunset");
        assert_eq!(session.style().icon, CenterIcon::Heart);
        Ok(())
    }

    // Tests library changes regenerate and feed images mode
    // Verified by leaving the set untouched after an upload
    #[test]
    fn test_image_library_triggers() -> bingo_master::Result<()> {
        let mut session = Session::new(Some(5));
        session.set_content_mode(ContentMode::Images);
        assert!(session.pool().is_empty());

        let png = encode_png(&RgbaImage::from_pixel(2, 2, Rgba([9, 9, 9, 255])))?;
        let before = session.generation();
        let id = session.add_image("dot.png", png);
        assert_eq!(session.generation(), before + 1);
        assert_eq!(session.pool().len(), 1);
        assert_eq!(session.library().len(), 1);

        assert!(session.remove_image(&id));
        assert!(!session.remove_image(&id));
        assert_eq!(session.generation(), before + 2);

        session.clear_images();
        assert_eq!(session.generation(), before + 2);
        Ok(())
    }

    // Tests the same seed reproduces the same session cards
    // Verified by seeding the session from entropy
    #[test]
    fn test_seeded_sessions_match() -> bingo_master::Result<()> {
        let mut first = Session::new(Some(6));
        let mut second = Session::new(Some(6));
        first.set_card_count(5)?;
        second.set_card_count(5)?;

        assert_eq!(first.cards(), second.cards());
        Ok(())
    }

    // Tests the session exports its current set
    // Verified by exporting an empty set
    #[test]
    fn test_session_export() -> bingo_master::Result<()> {
        let mut session = Session::new(Some(7));
        session.set_card_count(2)?;
        let mut exporter: BatchExporter<_, _> =
            BatchExporter::new(ImageRasterizer::new(), MemorySink::default());

        let report = session.export(&mut exporter, &mut (), &CancellationToken::new())?;

        assert_eq!(report.entries, ["card-1.png", "card-2.png"]);
        assert_eq!(exporter.sink().saved.len(), 1);
        assert!(!exporter.rasterizer().is_open());
        Ok(())
    }

    // Tests print sheets come from the session pool and cards
    // Verified by building the lottery sheet from card cells
    #[test]
    fn test_session_sheets() -> bingo_master::Result<()> {
        let mut session = Session::new(Some(8));
        session.set_card_count(3)?;
        assert_eq!(session.card_sheet().len(), 2);
        assert_eq!(session.lottery_sheet().len(), 2);

        session.set_number_range(NumberRange::new(1, 30))?;
        assert_eq!(session.lottery_sheet().len(), 1);
        Ok(())
    }

    // Tests an oversized numbers range is rejected without regenerating
    // Verified by building the pool before checking its size
    #[test]
    fn test_oversized_range_rejected() {
        let mut session = Session::new(Some(4));
        let start = session.generation();

        let result = session.set_number_range(NumberRange::new(1, 10_000_000_000));

        assert!(matches!(
            result,
            Err(BingoError::InvalidParameter {
                parameter: "range",
                ..
            })
        ));
        assert_eq!(session.generation(), start);
        assert_eq!(session.range(), NumberRange::default());
        assert!(session.set_number_range(NumberRange::new(1, 10_000)).is_ok());
    }
}
