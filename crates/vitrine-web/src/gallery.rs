//! Drag- and wheel-scrollable media filmstrip.

use dioxus::prelude::*;
use vitrine::content::GalleryLayout;
use vitrine::gallery::ScrollDriver;
use vitrine::options::GalleryOptions;
use vitrine::view::GalleryView;

use crate::runtime::Driver;

/// Continuously scrolling gallery strip.
#[component]
pub fn MediaGallery(layout: GalleryLayout, options: GalleryOptions) -> Element {
    let mut revision = use_signal(|| 0_u64);

    let driver = use_hook(|| {
        let scroll = ScrollDriver::new(layout.content_width, options.clone());
        let driver = Driver::new(scroll, move |_| *revision.write() += 1);
        let _ = driver.update(|d, s| d.start(s));
        driver
    });

    use_drop({
        let driver = driver.clone();
        move || {
            let _ = driver.update(|d, s| d.dispose(s));
        }
    });

    let _ = revision();
    let Some(view) = driver.read(|d, _| GalleryView::build(&layout, d)) else {
        return rsx! {};
    };
    let scroll_left = view.scroll_left;
    let strip_width = view.strip_width;

    let (leave, down, moved, up, wheel) = (
        driver.clone(),
        driver.clone(),
        driver.clone(),
        driver.clone(),
        driver,
    );

    rsx! {
        div {
            style: "width: 100%; height: 756px; overflow: hidden; position: relative; cursor: grab; user-select: none;",
            onmouseleave: move |_| {
                let _ = leave.update(|d, s| d.pointer_leave(s));
            },
            onmousedown: move |evt| {
                let x = evt.client_coordinates().x as f32;
                let _ = down.update(|d, s| d.pointer_down(x, s));
            },
            onmousemove: move |evt| {
                let x = evt.client_coordinates().x as f32;
                let _ = moved.update(|d, _| d.pointer_move(x));
            },
            onmouseup: move |_| {
                let _ = up.update(|d, s| d.pointer_up(s));
            },
            onwheel: move |evt| {
                let delta = evt.delta().strip_units();
                let step = (if delta.x == 0.0 { delta.y } else { delta.x }) as f32;
                let _ = wheel.update(|d, s| {
                    d.wheel(s);
                    d.sync_native_offset(d.offset() + step);
                });
            },
            div {
                style: "position: absolute; top: 0; left: 0; height: 100%; width: {strip_width}px; transform: translateX(-{scroll_left}px);",
                for tile in view.tiles {
                    img {
                        key: "{tile.copy}-{tile.left}-{tile.top}",
                        src: "{tile.image}",
                        alt: "",
                        draggable: "false",
                        style: "position: absolute; left: {tile.left}px; top: {tile.top}px; width: {tile.width}px; height: {tile.height}px; object-fit: cover;",
                    }
                }
            }
        }
    }
}
