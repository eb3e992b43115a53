//! Replacing the text of keyword runs on a slide.

use crate::ooxml::error::{PptxError, Result};
use crate::ooxml::pptx::model::{Run, Shape, Slide};
use log::{debug, warn};

use super::style::{MatchPolicy, RunStyle};

/// Replace the text of the run whose text is exactly `target_text`.
///
/// All shapes, paragraphs and runs are visited; when several runs carry the
/// target, the last one visited is changed ([`MatchPolicy::Last`]). The
/// style only switches formatting on and only sets the font name and size
/// when given.
///
/// Returns [`PptxError::TargetNotFound`] when no run matches, after logging
/// a warning naming the target.
///
/// # Examples
///
/// ```rust
/// use slidecraft::common::Length;
/// use slidecraft::ooxml::pptx::Presentation;
/// use slidecraft::ooxml::pptx::helpers::{RunStyle, run_text};
///
/// let mut pres = Presentation::new();
/// let slide = pres.add_slide();
/// let cm = Length::from_cm;
/// slide.add_text_box("{{title}}", cm(1.0), cm(1.0), cm(20.0), cm(2.0));
///
/// run_text(slide, "Quarterly Review", "{{title}}", &RunStyle::new().with_bold())?;
/// assert_eq!(slide.shapes()[0].text_frame().unwrap().text(), "Quarterly Review");
/// # Ok::<(), slidecraft::PptxError>(())
/// ```
pub fn run_text(
    slide: &mut Slide,
    input_text: &str,
    target_text: &str,
    style: &RunStyle,
) -> Result<()> {
    run_text_with_policy(slide, input_text, target_text, style, MatchPolicy::default())
}

/// [`run_text`] with an explicit choice of which matching run is changed.
pub fn run_text_with_policy(
    slide: &mut Slide,
    input_text: &str,
    target_text: &str,
    style: &RunStyle,
    policy: MatchPolicy,
) -> Result<()> {
    let Slide {
        shapes, modified, ..
    } = slide;
    let mut matches = shapes
        .iter_mut()
        .filter_map(Shape::text_frame_mut)
        .flat_map(|frame| frame.runs_mut())
        .filter(|run| run.text() == target_text);

    let found: Option<&mut Run> = match policy {
        MatchPolicy::First => matches.next(),
        MatchPolicy::Last => matches.last(),
    };

    let Some(run) = found else {
        warn!("Target could not be found: {}", target_text);
        return Err(PptxError::TargetNotFound(target_text.to_string()));
    };

    run.set_text(input_text);
    style.apply(run.font_mut());
    *modified = true;
    debug!("replaced run text {:?} with {:?}", target_text, input_text);
    Ok(())
}

/// Replace several keyword runs on one slide.
///
/// Pairs `texts[i]` with `targets[i]` and calls [`run_text`] for each pair in
/// order with the default style. Both slices must have the same length.
/// Stops at the first target that cannot be found; earlier replacements stay
/// applied.
pub fn inject_text<T, K>(slide: &mut Slide, texts: &[T], targets: &[K]) -> Result<()>
where
    T: AsRef<str>,
    K: AsRef<str>,
{
    if texts.len() != targets.len() {
        return Err(PptxError::InjectionLengthMismatch {
            texts: texts.len(),
            targets: targets.len(),
        });
    }

    let style = RunStyle::default();
    for (text, target) in texts.iter().zip(targets) {
        run_text(slide, text.as_ref(), target.as_ref(), &style)?;
    }
    Ok(())
}
