//! Deleting and reordering slides.

use crate::ooxml::error::{PptxError, Result};
use crate::ooxml::pptx::model::{Presentation, Slide};
use log::debug;

/// Remove the slide at `index` (zero-based) and return it.
///
/// Later slides shift down by one position.
pub fn delete_slide(presentation: &mut Presentation, index: usize) -> Result<Slide> {
    let len = presentation.slide_count();
    if index >= len {
        return Err(PptxError::SlideIndexOutOfRange { index, len });
    }

    let slide = presentation.slides.remove(index);
    presentation.mark_modified();
    debug!("deleted slide {} at index {}", slide.slide_id(), index);
    Ok(slide)
}

/// Move the slide at `old_idx` to `new_idx` (both zero-based).
///
/// The slide is removed first and then inserted at `new_idx` of the
/// shortened list, so on a deck `[A, B, C, D]`, `move_slide(p, 0, 2)` gives
/// `[B, C, A, D]`. `new_idx` must be a valid index of the deck: a
/// destination at or past the end is rejected with
/// [`PptxError::SlideIndexOutOfRange`] rather than appending the slide the way
/// a plain list insert would. Nothing is changed when either index is out of
/// range.
///
/// # Examples
///
/// ```rust
/// use slidecraft::ooxml::pptx::Presentation;
/// use slidecraft::ooxml::pptx::helpers::move_slide;
///
/// let mut pres = Presentation::new();
/// for _ in 0..4 {
///     pres.add_slide();
/// }
/// move_slide(&mut pres, 0, 2)?;
/// assert_eq!(pres.slide_ids(), vec![257, 258, 256, 259]);
/// # Ok::<(), slidecraft::PptxError>(())
/// ```
pub fn move_slide(presentation: &mut Presentation, old_idx: usize, new_idx: usize) -> Result<()> {
    let len = presentation.slide_count();
    if old_idx >= len {
        return Err(PptxError::SlideIndexOutOfRange {
            index: old_idx,
            len,
        });
    }
    if new_idx >= len {
        return Err(PptxError::SlideIndexOutOfRange {
            index: new_idx,
            len,
        });
    }

    let slide = presentation.slides.remove(old_idx);
    debug!(
        "moving slide {} from index {} to {}",
        slide.slide_id(),
        old_idx,
        new_idx
    );
    presentation.slides.insert(new_idx, slide);
    presentation.mark_modified();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck(n: usize) -> Presentation {
        let mut pres = Presentation::new();
        for _ in 0..n {
            pres.add_slide();
        }
        pres
    }

    const A: u32 = 256;
    const B: u32 = 257;
    const C: u32 = 258;
    const D: u32 = 259;

    #[test]
    fn test_delete_slide() {
        let mut pres = deck(4);
        let removed = delete_slide(&mut pres, 1).unwrap();
        assert_eq!(removed.slide_id(), B);
        assert_eq!(pres.slide_ids(), vec![A, C, D]);
    }

    #[test]
    fn test_delete_last_slide() {
        let mut pres = deck(2);
        delete_slide(&mut pres, 1).unwrap();
        delete_slide(&mut pres, 0).unwrap();
        assert_eq!(pres.slide_count(), 0);
        assert!(!pres.to_xml().unwrap().contains("sldIdLst"));
    }

    #[test]
    fn test_delete_slide_out_of_range() {
        let mut pres = deck(3);
        assert!(matches!(
            delete_slide(&mut pres, 3),
            Err(PptxError::SlideIndexOutOfRange { index: 3, len: 3 })
        ));
        assert_eq!(pres.slide_count(), 3);
    }

    #[test]
    fn test_move_slide_forward_lands_after_removal() {
        let mut pres = deck(4);
        move_slide(&mut pres, 0, 2).unwrap();
        assert_eq!(pres.slide_ids(), vec![B, C, A, D]);
    }

    #[test]
    fn test_move_slide_backward() {
        let mut pres = deck(4);
        move_slide(&mut pres, 3, 1).unwrap();
        assert_eq!(pres.slide_ids(), vec![A, D, B, C]);
    }

    #[test]
    fn test_move_slide_to_end() {
        let mut pres = deck(4);
        move_slide(&mut pres, 1, 3).unwrap();
        assert_eq!(pres.slide_ids(), vec![A, C, D, B]);
    }

    #[test]
    fn test_move_slide_same_index() {
        let mut pres = deck(3);
        move_slide(&mut pres, 1, 1).unwrap();
        assert_eq!(pres.slide_ids(), vec![A, B, C]);
    }

    #[test]
    fn test_move_slide_keeps_relationship_ids() {
        let mut pres = deck(3);
        move_slide(&mut pres, 2, 0).unwrap();
        let xml = pres.to_xml().unwrap();
        assert!(xml.contains(
            r#"<p:sldId id="258" r:id="rId4"/><p:sldId id="256" r:id="rId2"/><p:sldId id="257" r:id="rId3"/>"#
        ));
    }

    #[test]
    fn test_move_slide_out_of_range_leaves_deck_untouched() {
        let mut pres = deck(3);
        assert!(move_slide(&mut pres, 3, 0).is_err());
        assert!(matches!(
            move_slide(&mut pres, 0, 3),
            Err(PptxError::SlideIndexOutOfRange { index: 3, len: 3 })
        ));
        assert_eq!(pres.slide_ids(), vec![A, B, C]);
    }

    #[cfg(test)]
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        /// Deck size and an index valid for it
        fn deck_and_index() -> impl Strategy<Value = (usize, usize)> {
            (1usize..20).prop_flat_map(|n| (Just(n), 0..n))
        }

        /// Deck size and two indices valid for it
        fn deck_and_two_indices() -> impl Strategy<Value = (usize, usize, usize)> {
            (1usize..20).prop_flat_map(|n| (Just(n), 0..n, 0..n))
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(100))]

            #[test]
            fn prop_delete_removes_exactly_one((n, index) in deck_and_index()) {
                let mut pres = deck(n);
                let before = pres.slide_ids();

                let removed = delete_slide(&mut pres, index).unwrap();

                let mut expected = before.clone();
                expected.remove(index);
                prop_assert_eq!(removed.slide_id(), before[index]);
                prop_assert_eq!(pres.slide_count(), n - 1);
                prop_assert_eq!(pres.slide_ids(), expected);
            }

            #[test]
            fn prop_move_is_remove_then_insert((n, old_idx, new_idx) in deck_and_two_indices()) {
                let mut pres = deck(n);
                let mut expected = pres.slide_ids();
                let moved = expected.remove(old_idx);
                expected.insert(new_idx, moved);

                move_slide(&mut pres, old_idx, new_idx).unwrap();

                prop_assert_eq!(pres.slide_count(), n);
                prop_assert_eq!(pres.slide_ids()[new_idx], moved);
                prop_assert_eq!(pres.slide_ids(), expected);
            }
        }
    }
}
