use crate::error::{Error, Result};
use crate::point::GeoPoint;

use log::info;
use serde::Serialize;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};

pub const MAP_FILE_NAME: &str = "map.html";

const ECHARTS_JS: &str =
    "https://go-echarts.github.io/go-echarts-assets/assets/echarts.min.js";
const MAPS_BASE: &str =
    "https://go-echarts.github.io/go-echarts-assets/assets/maps";

const MAP_HTML_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>__TITLE__</title>
    <script src="__ECHARTS_JS__"></script>
    <script src="__REGION_JS__"></script>
    <style>
        .container { display: flex; justify-content: center; align-items: center; }
        .item { margin: auto; }
    </style>
</head>
<body>
    <div class="container">
        <div class="item" id="photos2map" style="width:900px;height:500px;"></div>
    </div>
    <script type="text/javascript">
        "use strict";
        let chart = echarts.init(document.getElementById('photos2map'), "white", { renderer: "canvas" });
        let option = __OPTION__;
        chart.setOption(option);
    </script>
</body>
</html>
"#;

/// Fixed look of the rendered map.
#[derive(Clone, Debug, PartialEq)]
pub struct MapStyle {
    pub title: String,
    // Name of an echarts-maps region script, e.g. "USA" or "world"
    pub region: String,
    pub region_color: String,
    pub ripple_period: f64,
    pub ripple_scale: f64,
    pub ripple_brush: String,
}

impl Default for MapStyle {
    fn default() -> Self {
        Self {
            title: "photos2map: GPS Image Map".to_string(),
            region: "USA".to_string(),
            region_color: "#006666".to_string(),
            ripple_period: 4.0,
            ripple_scale: 6.0,
            ripple_brush: "stroke".to_string(),
        }
    }
}

impl MapStyle {
    pub fn with_region(region: &str) -> Self {
        Self {
            region: region.to_string(),
            ..Default::default()
        }
    }
}

#[derive(Serialize)]
struct EffectPoint<'a> {
    name: &'a str,
    value: [f64; 2],
}

fn chart_option(points: &[GeoPoint], style: &MapStyle) -> serde_json::Value {
    let data: Vec<EffectPoint> = points.iter()
        .map(|p| EffectPoint {
            name: p.name(),
            value: [p.longitude(), p.latitude()],
        })
        .collect();

    json!({
        "title": { "text": style.title },
        "tooltip": { "show": true },
        "legend": { "show": false },
        "geo": {
            "map": style.region,
            "roam": true,
            "itemStyle": { "color": style.region_color },
        },
        "series": [{
            "name": "geo",
            "type": "effectScatter",
            "coordinateSystem": "geo",
            "showEffectOn": "render",
            "rippleEffect": {
                "period": style.ripple_period,
                "scale": style.ripple_scale,
                "brushType": style.ripple_brush,
            },
            "data": data,
        }],
    })
}

// JSON placed inside a <script> element must not contain "</".
fn script_safe(json: &str) -> String {
    json.replace("</", "<\\/")
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Render a standalone HTML page with one effect-scatter point per image.
pub fn render_map(points: &[GeoPoint], style: &MapStyle) -> Result<String> {
    let option = serde_json::to_string_pretty(&chart_option(points, style))
        .map_err(|e| Error::render("map options", e))?;
    let region_js = format!("{}/{}.js", MAPS_BASE, style.region);

    Ok(MAP_HTML_TEMPLATE
       .replace("__TITLE__", &html_escape(&style.title))
       .replace("__ECHARTS_JS__", ECHARTS_JS)
       .replace("__REGION_JS__", &html_escape(&region_js))
       .replace("__OPTION__", &script_safe(&option)))
}

/// Write the map page to `map.html` in `out_dir`, replacing any existing
/// file. Returns the path written.
pub fn write_map(points: &[GeoPoint], style: &MapStyle, out_dir: &Path)
                 -> Result<PathBuf> {
    let html = render_map(points, style)?;

    let path = out_dir.join(MAP_FILE_NAME);
    fs::write(&path, html).map_err(|e| Error::output(&path, e))?;

    info!("HTML map generated successfully: {}", path.display());

    Ok(path)
}
