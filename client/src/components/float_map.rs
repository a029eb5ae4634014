//! Bridge component between the `MapView` signal and the Leaflet widget.
//!
//! ARCHITECTURE
//! ============
//! The widget is created once the container div is in the DOM. After that a
//! single effect pushes each new `MapView` revision into it. Marker clicks come
//! back through the same signals the search box writes, so every selection
//! path ends in `session::map`.

use leptos::prelude::*;
use session::map::MapView;

use crate::state::chat::ChatState;
use crate::util::map_style::MAP_ELEMENT_ID;

#[component]
pub fn FloatMap() -> impl IntoView {
    let map_view = expect_context::<RwSignal<MapView>>();
    let chat = expect_context::<RwSignal<ChatState>>();
    let container_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        use session::Float;
        use session::float::catalog;
        use session::map;

        use crate::util::leaflet::LeafletMap;

        let widget: Rc<RefCell<Option<LeafletMap>>> = Rc::new(RefCell::new(None));
        Effect::new(move || {
            let view = map_view.get();
            if container_ref.get().is_none() {
                return;
            }
            let mut slot = widget.borrow_mut();
            if slot.is_none() {
                let on_click = move |float: &'static Float| {
                    map_view.update(|v| chat.update(|c| map::click_marker(v, &mut c.session, float)));
                };
                match LeafletMap::mount(MAP_ELEMENT_ID, &view, catalog(), on_click) {
                    Ok(mounted) => *slot = Some(mounted),
                    Err(err) => {
                        log::warn!("map widget unavailable: {err:?}");
                        return;
                    }
                }
            }
            if let Some(mounted) = slot.as_mut() {
                if let Err(err) = mounted.apply(&view) {
                    log::warn!("map update failed: {err:?}");
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (map_view, chat);

    view! { <div id=MAP_ELEMENT_ID class="float-map" node_ref=container_ref></div> }
}
