use std::time::Duration;

use super::card::{CardState, CardView};
use crate::carousel::CarouselController;
use crate::content::Palette;
use crate::layout::visible_window;
use crate::util::color::{Contrast, HexColor};

/// One frame of the palette carousel section.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackView {
    /// Translation the track transitions toward.
    pub target_x: f32,
    /// Interpolated translation at the build instant.
    pub current_x: f32,
    /// Transition length for the track transform; only set while sliding.
    pub track_transition_ms: Option<u64>,
    /// Transition length for the section background and title. `None`
    /// while snapping.
    pub transition_ms: Option<u64>,
    /// Height of the track box.
    pub height: f32,
    /// Gap between cards.
    pub gap: f32,
    /// Section background: the incoming hero's color while sliding.
    pub background: Option<HexColor>,
    /// Section heading.
    pub title: Option<String>,
    /// Heading color against `background`.
    pub title_color: &'static str,
    /// Cards in window order, left to right.
    pub cards: Vec<CardView>,
}

impl TrackView {
    /// Resolve the carousel at `now` on the controller's scheduler clock.
    #[must_use]
    pub fn build(
        controller: &CarouselController,
        palette: &Palette,
        now: Duration,
    ) -> Self {
        let geometry = controller.geometry();
        let options = controller.options();

        let background = if controller.is_animating() {
            palette.get_wrapped(controller.next_hero_index())
        } else {
            palette.get_wrapped(controller.hero_index())
        }
        .map(|swatch| swatch.hex);

        let focal = controller.focal_position();
        let pressed = controller.pressed_position();
        let snapping = controller.is_snapping();
        let cards = visible_window(
            controller.hero_index(),
            palette.len(),
            geometry.side_count,
        )
        .into_iter()
        .filter_map(|slot| {
            let swatch = palette.swatches.get(slot.item_index)?;
            let state = CardState {
                position: slot.position,
                is_focal: slot.position == focal,
                is_pressed: pressed == Some(slot.position),
                suppress_transition: snapping,
            };
            Some(CardView::build(swatch, state, geometry, options))
        })
        .collect();

        Self {
            target_x: controller.target_offset(),
            current_x: controller.track_offset(now),
            track_transition_ms: controller
                .is_animating()
                .then_some(options.shift_ms),
            transition_ms: (!snapping).then_some(options.shift_ms),
            height: geometry.track_height(
                options.hero_scale,
                controller.layout().track_padding,
            ),
            gap: geometry.card_gap,
            background,
            title: palette.title.clone(),
            title_color: background.map_or(Contrast::Dark, HexColor::contrast).text(),
            cards,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Breakpoint, Viewport};
    use crate::options::{CarouselOptions, LayoutOptions};
    use crate::schedule::{ManualScheduler, Scheduler};

    fn controller(len: usize) -> CarouselController {
        CarouselController::new(
            len,
            Viewport::new(1200.0, Breakpoint::Desktop),
            CarouselOptions::default(),
            LayoutOptions::default(),
        )
    }

    #[test]
    fn resting_track_centers_hero() {
        let palette = Palette::brand();
        let c = controller(palette.len());
        let view = TrackView::build(&c, &palette, Duration::ZERO);

        assert_eq!(view.cards.len(), 2 * c.geometry().side_count + 1);
        let focal: Vec<_> = view.cards.iter().filter(|card| card.scale > 1.0).collect();
        assert_eq!(focal.len(), 1);
        assert_eq!(focal[0].position, 0);
        assert_eq!(view.background, Some(palette.swatches[0].hex));
        assert_eq!(view.target_x, c.geometry().resting_offset);
        assert_eq!(view.track_transition_ms, None);
        // ceil(320 * 1.4) + 20
        assert_eq!(view.height, 468.0);
    }

    #[test]
    fn sliding_track_previews_next_hero() {
        let palette = Palette::brand();
        let mut c = controller(palette.len());
        let mut sched = ManualScheduler::immediate_frames();
        c.mount(&mut sched);
        sched.advance(Duration::from_millis(1200), &mut c);

        let view = TrackView::build(&c, &palette, sched.now());
        assert_eq!(view.background, Some(palette.swatches[1].hex));
        assert_eq!(view.target_x, c.geometry().animating_offset);
        assert_eq!(view.track_transition_ms, Some(1200));
        let focal = view.cards.iter().find(|card| card.border == "#FFFFFF");
        assert_eq!(focal.map(|card| card.position), Some(1));
    }

    #[test]
    fn empty_palette_renders_nothing() {
        let palette = Palette::default();
        let c = controller(0);
        let view = TrackView::build(&c, &palette, Duration::ZERO);
        assert!(view.cards.is_empty());
        assert_eq!(view.background, None);
        assert_eq!(view.title_color, Contrast::Dark.text());
    }
}
