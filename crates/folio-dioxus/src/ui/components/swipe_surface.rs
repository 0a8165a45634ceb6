use dioxus::html::point_interaction::InteractionLocation;
use dioxus::prelude::*;
use folio_engine::gesture::{SwipeConfig, SwipeGesture, TouchPoint};
use std::cell::RefCell;
use std::rc::Rc;

/// Client position translated to the surface whose top-left corner is at
/// `origin`
fn surface_point(x: f64, y: f64, (left, top): (f64, f64)) -> TouchPoint {
    TouchPoint::new(x - left, y - top)
}

fn points(touches: Vec<dioxus::html::TouchPoint>, origin: (f64, f64)) -> Vec<TouchPoint> {
    touches
        .iter()
        .map(|touch| {
            let client = touch.client_coordinates();
            surface_point(client.x, client.y, origin)
        })
        .collect()
}

/// Wraps its children in a touch surface that reports horizontal swipes.
/// The recognizer is attached on mount and detached on unmount. Touches are
/// measured from the surface's own top-left corner, taken when it mounts.
#[component]
pub fn SwipeSurface(
    config: SwipeConfig,
    on_swipe_left: EventHandler<()>,
    on_swipe_right: EventHandler<()>,
    children: Element,
) -> Element {
    let gesture = use_hook(|| {
        Rc::new(RefCell::new(
            SwipeGesture::attach(config)
                .on_swipe_left(move || on_swipe_left.call(()))
                .on_swipe_right(move || on_swipe_right.call(())),
        ))
    });

    let mut origin = use_signal(|| (0.0, 0.0));

    use_drop({
        let gesture = gesture.clone();
        move || gesture.borrow_mut().detach()
    });

    rsx! {
        div {
            class: "swipe-surface",
            onmounted: move |evt: MountedEvent| async move {
                match evt.get_client_rect().await {
                    Ok(rect) => origin.set((rect.origin.x, rect.origin.y)),
                    Err(e) => log::debug!("Swipe surface has no layout box: {e:?}"),
                }
            },
            ontouchstart: {
                let gesture = gesture.clone();
                move |evt: TouchEvent| {
                    gesture.borrow_mut().touch_start(&points(evt.touches(), origin()))
                }
            },
            ontouchmove: {
                let gesture = gesture.clone();
                move |evt: TouchEvent| {
                    let response = gesture.borrow_mut().touch_move(&points(evt.touches(), origin()));
                    if response.prevent_default {
                        evt.prevent_default();
                    }
                }
            },
            ontouchend: {
                let gesture = gesture.clone();
                move |evt: TouchEvent| {
                    gesture.borrow_mut().touch_end(&points(evt.touches_changed(), origin()));
                }
            },
            ontouchcancel: {
                let gesture = gesture.clone();
                move |_| gesture.borrow_mut().cancel()
            },
            {children}
        }
    }
}
