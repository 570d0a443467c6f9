use std::cell::RefCell;
use std::rc::Rc;

use log::{info, warn};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::js_sys::Reflect;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::components::script::{ensure_stylesheet, ExternalScript};
use crate::content::service_area::{
    ServicePoint, BASE, DEFAULT_ZOOM, EXTENDED_RADIUS_M, PRIMARY_RADIUS_M, SERVICE_POINTS,
};
use crate::links;

const LEAFLET_CSS: &str = "https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.9.4/leaflet.min.css";
const LEAFLET_JS: &str = "https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.9.4/leaflet.min.js";
const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
const OUTLINE: &str = "#1a1a1a";
const BRAND: &str = "#FF9500";

#[wasm_bindgen]
extern "C" {
    type LeafletMap;
    type Layer;

    #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
    fn leaflet_map(container: &HtmlElement) -> Result<LeafletMap, JsValue>;

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view(this: &LeafletMap, center: &JsValue, zoom: u8) -> LeafletMap;

    #[wasm_bindgen(method)]
    fn remove(this: &LeafletMap);

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    fn tile_layer(url: &str, options: &JsValue) -> Layer;

    #[wasm_bindgen(js_namespace = L, js_name = circle)]
    fn circle(center: &JsValue, options: &JsValue) -> Layer;

    #[wasm_bindgen(js_namespace = L, js_name = circleMarker)]
    fn circle_marker(center: &JsValue, options: &JsValue) -> Layer;

    #[wasm_bindgen(method, js_name = bindPopup)]
    fn bind_popup(this: &Layer, html: &str) -> Layer;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &Layer, map: &LeafletMap) -> Layer;
}

#[derive(Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TileOptions {
    pub attribution: &'static str,
    pub max_zoom: u8,
}

/// Leaflet path options shared by `L.circle` and `L.circleMarker`.
#[derive(Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PathOptions {
    pub radius: f64,
    pub color: &'static str,
    pub weight: u32,
    pub opacity: f64,
    pub fill_color: &'static str,
    pub fill_opacity: f64,
}

pub fn coverage_rings() -> [PathOptions; 2] {
    [
        PathOptions {
            radius: PRIMARY_RADIUS_M,
            color: BRAND,
            weight: 2,
            opacity: 0.5,
            fill_color: BRAND,
            fill_opacity: 0.1,
        },
        PathOptions {
            radius: EXTENDED_RADIUS_M,
            color: BRAND,
            weight: 1,
            opacity: 0.3,
            fill_color: BRAND,
            fill_opacity: 0.05,
        },
    ]
}

pub fn marker_options(point: &ServicePoint) -> PathOptions {
    PathOptions {
        radius: f64::from(point.tier.marker_radius()),
        color: OUTLINE,
        weight: 2,
        opacity: 1.0,
        fill_color: point.tier.fill_colour(),
        fill_opacity: 0.8,
    }
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(JsValue::from)
}

fn leaflet_loaded() -> bool {
    web_sys::window()
        .and_then(|w| Reflect::has(&w, &JsValue::from_str("L")).ok())
        .unwrap_or(false)
}

fn draw_map(container: &HtmlElement) -> Result<LeafletMap, JsValue> {
    let map = leaflet_map(container)?;
    map.set_view(&to_js(&[BASE.0, BASE.1])?, DEFAULT_ZOOM);

    tile_layer(
        TILE_URL,
        &to_js(&TileOptions {
            attribution: "&copy; OpenStreetMap contributors",
            max_zoom: 19,
        })?,
    )
    .add_to(&map);

    for ring in coverage_rings() {
        circle(&to_js(&[BASE.0, BASE.1])?, &to_js(&ring)?).add_to(&map);
    }

    for point in SERVICE_POINTS {
        circle_marker(&to_js(&[point.lat, point.lng])?, &to_js(&marker_options(point))?)
            .bind_popup(&point.popup_html())
            .add_to(&map);
    }

    Ok(map)
}

#[function_component(ServiceAreaMap)]
pub fn service_area_map() -> Html {
    let container = use_node_ref();

    {
        let container = container.clone();
        use_effect_with_deps(
            move |_| {
                ensure_stylesheet(LEAFLET_CSS);
                let map: Rc<RefCell<Option<LeafletMap>>> = Rc::new(RefCell::new(None));

                let onload = {
                    let map = map.clone();
                    Box::new(move || {
                        if map.borrow().is_some() || !leaflet_loaded() {
                            return;
                        }
                        let Some(element) = container.cast::<HtmlElement>() else {
                            return;
                        };
                        match draw_map(&element) {
                            Ok(drawn) => {
                                info!("Service map ready with {} points", SERVICE_POINTS.len());
                                *map.borrow_mut() = Some(drawn);
                            }
                            Err(e) => warn!("Could not draw service map: {:?}", e),
                        }
                    }) as Box<dyn FnMut()>
                };
                let script = ExternalScript::load_or_warn(LEAFLET_JS, Some(onload));

                move || {
                    drop(script);
                    if let Some(map) = map.borrow_mut().take() {
                        map.remove();
                    }
                }
            },
            (),
        );
    }

    html! {
        <section id="service-area" class="map-section">
            <div class="map-inner">
                <div class="map-header">
                    <h2>{"Service Areas We Cover"}</h2>
                    <p>{"We provide mobile DPF cleaning services throughout Somerset and surrounding areas. Check the map to see if we service your location."}</p>
                </div>
                <div ref={container} class="map-canvas"></div>
                <div class="area-cards">
                    <div class="area-card primary">
                        <h3><span class="area-dot"></span>{"Primary Area"}</h3>
                        <p><strong>{"15-mile radius from Bridgwater"}</strong></p>
                        <p class="area-note">{"Same-day service available for most locations within our primary service area. Call for availability."}</p>
                    </div>
                    <div class="area-card extended">
                        <h3><span class="area-dot"></span>{"Extended Area"}</h3>
                        <p><strong>{"15-25 mile radius from Bridgwater"}</strong></p>
                        <p class="area-note">{"We can service these areas with advance notice. Travel charges may apply for locations beyond 20 miles."}</p>
                    </div>
                    <div class="area-card beyond">
                        <h3>{"📍 Beyond 25 Miles?"}</h3>
                        <p><strong>{"Contact us anyway!"}</strong></p>
                        <p class="area-note">{"We occasionally service locations beyond our standard area. Call to discuss your specific location and requirements."}</p>
                    </div>
                </div>
                <div class="map-cta">
                    <h3>{"Not sure if we cover your area?"}</h3>
                    <p>{"Give us a call and we'll let you know if we can help. We're happy to discuss your specific location."}</p>
                    <a href={links::business_tel_uri()} class="map-cta-button">
                        {format!("📞 Call: {}", crate::config::PHONE_DISPLAY)}
                    </a>
                </div>
            </div>
            <style>
                {r#"
                .map-section {
                    padding: 5rem 1rem;
                    background: #ffffff;
                }
                .map-inner {
                    max-width: 64rem;
                    margin: 0 auto;
                }
                .map-header {
                    text-align: center;
                    margin-bottom: 3rem;
                }
                .map-header h2 {
                    font-size: 2.5rem;
                }
                .map-header p {
                    color: #4b5563;
                }
                .map-canvas {
                    width: 100%;
                    height: 500px;
                    border: 4px solid #FF9500;
                    border-radius: 12px;
                    overflow: hidden;
                    margin-bottom: 3rem;
                    background: #f3f4f6;
                }
                .area-cards {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }
                .area-card {
                    border-radius: 12px;
                    padding: 2rem;
                    border: 2px solid #d1d5db;
                    background: #f9fafb;
                }
                .area-card.primary {
                    border-color: #FF9500;
                    background: #fff7ed;
                }
                .area-card.extended {
                    border-color: #22c55e;
                    background: #f0fdf4;
                }
                .area-card h3 {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }
                .area-dot {
                    width: 1.5rem;
                    height: 1.5rem;
                    border-radius: 50%;
                    background: #FF9500;
                }
                .area-card.extended .area-dot {
                    background: #22c55e;
                }
                .area-note {
                    color: #4b5563;
                    font-size: 0.875rem;
                }
                .map-cta {
                    margin-top: 4rem;
                    background: linear-gradient(90deg, #111827, #1f2937);
                    border-radius: 12px;
                    padding: 2rem;
                    text-align: center;
                    color: #ffffff;
                }
                .map-cta p {
                    color: #d1d5db;
                }
                .map-cta-button {
                    display: inline-block;
                    background: #FF9500;
                    color: #ffffff;
                    font-weight: 700;
                    padding: 0.75rem 1.5rem;
                    border-radius: 8px;
                    text-decoration: none;
                }
                @media (max-width: 768px) {
                    .map-canvas {
                        height: 24rem;
                    }
                    .area-cards {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::service_area::Tier;

    #[test]
    fn path_options_use_leaflet_field_names() {
        let json = serde_json::to_value(&coverage_rings()[0]).unwrap();
        assert_eq!(json["radius"], 24_140.0);
        assert_eq!(json["fillColor"], "#FF9500");
        assert_eq!(json["fillOpacity"], 0.1);
        assert!(json.get("fill_color").is_none());
    }

    #[test]
    fn rings_cover_fifteen_and_twenty_five_miles() {
        let radii: Vec<_> = coverage_rings().iter().map(|r| r.radius).collect();
        assert_eq!(radii, [24_140.0, 40_234.0]);
    }

    #[test]
    fn markers_follow_tier() {
        let base = SERVICE_POINTS.iter().find(|p| p.tier == Tier::Primary).unwrap();
        let street = SERVICE_POINTS.iter().find(|p| p.name == "Street").unwrap();
        assert_eq!(marker_options(base).radius, 10.0);
        assert_eq!(marker_options(base).fill_color, "#FF9500");
        assert_eq!(marker_options(street).radius, 6.0);
        assert_eq!(marker_options(street).fill_color, "#4CAF50");
    }
}
