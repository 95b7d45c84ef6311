//! Browser demo for the vitrine palette carousel and media gallery.
//!
//! Compiled to WASM and served as a single page. Widget state lives in the
//! `vitrine` controllers; this crate only wires them to browser timers and
//! pointer events and renders their view models.

// `rsx!` event-handler expansion trips this lint on plain closures.
#![allow(unused_qualifications)]

mod carousel;
mod gallery;
mod runtime;

use dioxus::prelude::*;
use vitrine::content::{GalleryLayout, Palette};
use vitrine::options::Options;

const BRAND_PALETTE: &str = include_str!("../../../assets/palettes/brand.json");
const DEFAULT_PRESET: &str = include_str!("../../../assets/presets/default.toml");

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    dioxus::launch(app);
}

fn app() -> Element {
    let options = use_hook(|| {
        Options::from_toml(DEFAULT_PRESET).unwrap_or_else(|e| {
            log::warn!("default preset rejected ({e}), using built-in options");
            Options::default()
        })
    });
    let palette = use_hook(|| {
        Palette::from_json(BRAND_PALETTE).unwrap_or_else(|e| {
            log::warn!("brand palette rejected ({e}), using built-in palette");
            Palette::brand()
        })
    });
    let gallery_options = options.gallery.clone();

    rsx! {
        main { style: "margin: 0; font-family: sans-serif;",
            carousel::PaletteCarousel { palette, options }
            gallery::MediaGallery { layout: GalleryLayout::default(), options: gallery_options }
        }
    }
}
