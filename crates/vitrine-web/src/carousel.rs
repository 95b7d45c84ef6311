//! Palette carousel section.

use std::rc::Rc;

use dioxus::prelude::*;
use vitrine::carousel::CarouselController;
use vitrine::content::Palette;
use vitrine::layout::{Breakpoint, Viewport};
use vitrine::options::{LayoutOptions, Options};
use vitrine::view::{CardView, TrackView};

use crate::runtime::{viewport_width, Driver, WindowListener};

type CarouselDriver = Driver<CarouselController>;

fn transition(properties: &[&str], ms: Option<u64>) -> String {
    ms.map_or_else(
        || "none".to_owned(),
        |ms| {
            properties
                .iter()
                .map(|p| format!("{p} {ms}ms ease-in-out"))
                .collect::<Vec<_>>()
                .join(", ")
        },
    )
}

fn viewport(layout: &LayoutOptions) -> Viewport {
    let width = viewport_width();
    Viewport::new(width, Breakpoint::from_width(width, layout))
}

/// Auto-advancing palette carousel.
#[component]
pub fn PaletteCarousel(palette: Palette, options: Options) -> Element {
    let mut revision = use_signal(|| 0_u64);

    let driver = use_hook(|| {
        let controller = CarouselController::new(
            palette.len(),
            viewport(&options.layout),
            options.carousel.clone(),
            options.layout.clone(),
        );
        let driver = Driver::new(controller, move |_| *revision.write() += 1);
        let _ = driver.update(|c, s| c.mount(s));
        driver
    });

    let _resize = use_hook(|| {
        let driver = driver.clone();
        let layout = options.layout.clone();
        Rc::new(WindowListener::new("resize", move |_| {
            let viewport = viewport(&layout);
            let _ = driver.update(|c, s| c.resize(viewport, s));
        }))
    });

    use_drop({
        let driver = driver.clone();
        move || {
            let _ = driver.update(|c, s| c.dispose(s));
        }
    });

    let _ = revision();
    let Some(view) =
        driver.read(|c, now| TrackView::build(c, &palette, now))
    else {
        return rsx! {};
    };

    let background = view
        .background
        .map_or_else(|| "transparent".to_owned(), |c| c.to_string());
    let fade = transition(&["background-color"], view.transition_ms);
    let title_fade = transition(&["color"], view.transition_ms);
    let slide = transition(&["transform"], view.track_transition_ms);
    let label = view.title.clone().unwrap_or_else(|| "Color palette".to_owned());
    let title_color = view.title_color;
    let height = view.height;
    let gap = view.gap;
    let offset = view.target_x;

    rsx! {
        section {
            aria_label: "{label}",
            style: "width: 100%; background-color: {background}; transition: {fade}; padding: 64px 0; overflow: hidden; position: relative;",
            if let Some(title) = view.title.clone() {
                div { style: "max-width: 1190px; margin: 0 auto 24px; padding: 0 32px;",
                    span {
                        style: "font-family: monospace; font-style: italic; font-weight: 300; text-transform: lowercase; color: {title_color}; transition: {title_fade};",
                        "{title}"
                    }
                }
            }
            div { style: "position: relative; width: 100%; height: {height}px;",
                div {
                    style: "position: absolute; top: 50%; left: 0; display: flex; align-items: center; gap: {gap}px; transform: translate({offset}px, -50%); transition: {slide};",
                    for card in view.cards {
                        PaletteCard { key: "{card.position}", card, driver: driver.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn PaletteCard(card: CardView, driver: CarouselDriver) -> Element {
    let position = card.position;
    let enter = driver.clone();
    let leave = driver.clone();
    let tap = driver;

    let CardView {
        width,
        height,
        scale,
        margin_x,
        background,
        border,
        text_color,
        subtext_color,
        transition_ms,
        name_lines,
        icon,
        rows,
        ..
    } = card;
    let motion = transition(&["transform", "border-color", "margin"], transition_ms);
    let rows = rows.into_iter().map(|row| (row.label, row.value));

    rsx! {
        div {
            style: "width: {width}px; min-width: {width}px; height: {height}px; border-radius: 16px; background-color: {background}; display: flex; flex-direction: column; justify-content: space-between; padding: 24px 20px 20px; box-sizing: border-box; box-shadow: 0 4px 24px rgba(0,0,0,0.12); border: 1px solid {border}; transform: scale({scale}); margin: 0 {margin_x}px; transition: {motion}; flex-shrink: 0; position: relative;",
            onmouseenter: move |_| {
                let _ = enter.update(|c, s| c.pointer_enter(position, s));
            },
            onmouseleave: move |_| {
                let _ = leave.update(|c, s| c.pointer_leave(position, s));
            },
            onclick: move |_| {
                let _ = tap.update(|c, s| c.tap(position, s));
            },
            div {
                if let Some(icon) = icon {
                    img { src: "{icon}", alt: "", style: "width: 32px; height: 32px; margin-bottom: 12px;" }
                }
                h3 { style: "margin: 0; font-size: 20px; line-height: 1.1; color: {text_color};",
                    for line in name_lines {
                        div { "{line}" }
                    }
                }
            }
            div { style: "display: flex; flex-direction: column; gap: 4px; font-family: monospace; font-size: 11px;",
                for (label, value) in rows {
                    div { style: "display: flex; justify-content: space-between;",
                        span { style: "color: {subtext_color};", "{label}" }
                        span { style: "color: {text_color};", "{value}" }
                    }
                }
            }
        }
    }
}
