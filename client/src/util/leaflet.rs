//! Thin binding to the global Leaflet (`L`) loaded from the page head.
//!
//! SYSTEM CONTEXT
//! ==============
//! The map widget is imperative. `FloatMap` owns one `LeafletMap` and calls
//! `apply` whenever the declarative `MapView` changes revision; everything the
//! widget shows is derived from that value plus the static float catalog.

use serde_json::Value;
use session::map::{MapView, ViewTarget};
use session::{Coordinates, Float};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::util::map_style;

#[wasm_bindgen]
extern "C" {
    /// `L.Map`.
    pub type Map;

    #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
    fn create_map(element_id: &str, options: &JsValue) -> Result<Map, JsValue>;

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view(this: &Map, center: &JsValue, zoom: u8) -> Map;

    #[wasm_bindgen(method, js_name = flyTo)]
    fn fly_to(this: &Map, center: &JsValue, zoom: u8) -> Map;

    #[wasm_bindgen(method, js_name = removeLayer)]
    fn remove_layer(this: &Map, layer: &Layer) -> Map;

    /// Any `L.Layer` (tile layer, circle, marker).
    pub type Layer;

    #[wasm_bindgen(catch, js_namespace = L, js_name = tileLayer)]
    fn tile_layer(url: &str, options: &JsValue) -> Result<Layer, JsValue>;

    #[wasm_bindgen(catch, js_namespace = L)]
    fn circle(center: &JsValue, options: &JsValue) -> Result<Layer, JsValue>;

    #[wasm_bindgen(catch, js_namespace = L, js_name = circleMarker)]
    fn circle_marker(center: &JsValue, options: &JsValue) -> Result<Layer, JsValue>;

    #[wasm_bindgen(catch, js_namespace = L)]
    fn marker(center: &JsValue) -> Result<Layer, JsValue>;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &Layer, map: &Map) -> Layer;

    #[wasm_bindgen(method, js_name = bindPopup)]
    fn bind_popup(this: &Layer, html: &str) -> Layer;

    #[wasm_bindgen(method, js_name = openPopup)]
    fn open_popup(this: &Layer) -> Layer;

    #[wasm_bindgen(method)]
    fn on(this: &Layer, event: &str, handler: &js_sys::Function) -> Layer;

    /// `L.Control`.
    pub type Control;

    #[wasm_bindgen(catch, js_namespace = ["L", "control"], js_name = zoom)]
    fn zoom_control(options: &JsValue) -> Result<Control, JsValue>;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_control_to(this: &Control, map: &Map) -> Control;
}

fn lat_lng(at: Coordinates) -> JsValue {
    js_sys::Array::of2(&JsValue::from_f64(at.lat), &JsValue::from_f64(at.lon)).into()
}

fn js_options(value: &Value) -> Result<JsValue, JsValue> {
    js_sys::JSON::parse(&value.to_string())
}

/// A mounted map and the layers it manages after setup.
pub struct LeafletMap {
    map: Map,
    search_marker: Option<(&'static str, Layer)>,
    applied_revision: Option<u64>,
}

impl LeafletMap {
    /// Create the map inside `element_id`, add tiles, the zoom control and
    /// one area circle plus one clickable point per float.
    ///
    /// # Errors
    ///
    /// Returns the JS exception if Leaflet is missing or rejects an option.
    pub fn mount<F>(element_id: &str, view: &MapView, floats: &'static [Float], on_click: F) -> Result<Self, JsValue>
    where
        F: Fn(&'static Float) + Clone + 'static,
    {
        let map = create_map(element_id, &js_options(&map_style::map_options())?)?;
        let start = view.target();
        map.set_view(&lat_lng(start.center), start.zoom);

        tile_layer(map_style::TILE_URL, &js_options(&map_style::tile_options())?)?.add_to(&map);
        zoom_control(&js_options(&map_style::zoom_control_options())?)?.add_control_to(&map);

        let area = js_options(&map_style::area_options())?;
        let point = js_options(&map_style::point_options())?;
        for float in floats {
            let at = lat_lng(float.coordinates);
            circle(&at, &area)?.add_to(&map);
            let marker = circle_marker(&at, &point)?.add_to(&map);
            marker.bind_popup(&map_style::popup_html(float.name));

            let on_click = on_click.clone();
            let handler = Closure::wrap(Box::new(move |_ev: JsValue| on_click(float)) as Box<dyn FnMut(JsValue)>);
            marker.on("click", handler.as_ref().unchecked_ref());
            // Markers live as long as the page.
            handler.forget();
        }

        Ok(Self { map, search_marker: None, applied_revision: Some(view.revision()) })
    }

    /// Bring the widget in line with `view`. No-op if this revision was
    /// already applied.
    ///
    /// # Errors
    ///
    /// Returns the JS exception if a new marker cannot be created.
    pub fn apply(&mut self, view: &MapView) -> Result<(), JsValue> {
        if self.applied_revision == Some(view.revision()) {
            return Ok(());
        }
        self.move_to(view.target());
        self.sync_search_marker(view.search_marker())?;
        self.applied_revision = Some(view.revision());
        Ok(())
    }

    fn move_to(&self, target: ViewTarget) {
        let center = lat_lng(target.center);
        if target.animate {
            self.map.fly_to(&center, target.zoom);
        } else {
            self.map.set_view(&center, target.zoom);
        }
    }

    fn sync_search_marker(&mut self, wanted: Option<&'static Float>) -> Result<(), JsValue> {
        let current = self.search_marker.as_ref().map(|(name, _)| *name);
        if current == wanted.map(|f| f.name) {
            return Ok(());
        }
        if let Some((_, layer)) = self.search_marker.take() {
            self.map.remove_layer(&layer);
        }
        if let Some(float) = wanted {
            let layer = marker(&lat_lng(float.coordinates))?.add_to(&self.map);
            layer.bind_popup(float.name);
            layer.open_popup();
            self.search_marker = Some((float.name, layer));
        }
        Ok(())
    }
}
