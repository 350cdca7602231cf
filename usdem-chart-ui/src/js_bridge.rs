//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! D3.js chart functions are split across `assets/js/*.js` and loaded at runtime.
//! They are evaluated as globals (no ES modules) and exposed via `window.*`.
//! This module provides safe Rust wrappers that serialize chart specs and
//! call those globals.

use usdem_view::{ChartKind, ChartSpec};
use wasm_bindgen::JsValue;

// Embed all D3 chart JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static PIE_CHART_JS: &str = include_str!("../assets/js/pie-chart.js");
static BAR_CHART_JS: &str = include_str!("../assets/js/bar-chart.js");
static SCATTER_CHART_JS: &str = include_str!("../assets/js/scatter-chart.js");

/// D3 is loaded from a CDN when the host page does not already provide it.
const D3_CDN_URL: &str = "https://cdn.jsdelivr.net/npm/d3@7";

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('USDEM JS call failed:', e); }}",
        code
    );
    if let Err(e) = js_sys::eval(&wrapped) {
        web_sys::console::warn_2(&JsValue::from_str("USDEM JS eval failed:"), &e);
    }
}

/// Set the browser tab title.
pub fn set_page_title(title: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(title);
    }
}

/// Quote `s` as a JS string literal.
///
/// JSON string syntax is a subset of JS string syntax, so serde_json's
/// escaping is reused rather than hand-escaping quotes and backslashes.
pub fn js_string_literal(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
}

/// Name of the global JS function that draws `kind`.
pub fn renderer_name(kind: ChartKind) -> &'static str {
    match kind {
        ChartKind::Pie => "renderPieChart",
        ChartKind::Bar => "renderBarChart",
        ChartKind::Scatter => "renderScatterChart",
    }
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// Injects a D3 `<script>` tag if neither `d3` nor a previous injection is
/// present. Once D3 is ready, the chart scripts are evaluated at global
/// scope via indirect `eval` and each function is promoted to `window.*`.
/// Safe to call repeatedly: only the first call does any work.
pub fn init_charts() {
    let all_js = [TOOLTIP_JS, PIE_CHART_JS, BAR_CHART_JS, SCATTER_CHART_JS].join("\n");

    // Store the scripts on window so the polling callback can eval them
    // at global scope (not block-scoped inside setInterval).
    call_js(&format!(
        "if (!window.__usdemChartsRequested) {{ window.__usdemChartScripts = {}; }}",
        js_string_literal(&all_js)
    ));

    let init_js = format!(
        r#"
        (function() {{
            if (window.__usdemChartsRequested) return;
            window.__usdemChartsRequested = true;
            if (typeof d3 === 'undefined' && !document.getElementById('usdem-d3')) {{
                var s = document.createElement('script');
                s.id = 'usdem-d3';
                s.src = {d3_url};
                document.head.appendChild(s);
            }}
            var waitForD3 = setInterval(function() {{
                if (typeof d3 !== 'undefined') {{
                    clearInterval(waitForD3);
                    (0, eval)(window.__usdemChartScripts);
                    delete window.__usdemChartScripts;
                    if (typeof renderPieChart !== 'undefined') window.renderPieChart = renderPieChart;
                    if (typeof renderBarChart !== 'undefined') window.renderBarChart = renderBarChart;
                    if (typeof renderScatterChart !== 'undefined') window.renderScatterChart = renderScatterChart;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.__usdemChartsReady = true;
                    console.log('USDEM charts initialized');
                }}
            }}, 100);
        }})();
        "#,
        d3_url = js_string_literal(D3_CDN_URL),
    );
    call_js(&init_js);
}

/// Build the JS that renders one spec once the charts and its container exist.
///
/// Each call takes a new generation number for the container in
/// `window.__usdemGen`. A poll whose generation is no longer current gives up
/// without drawing, so only the latest render or clear of a container wins.
pub fn render_script(spec: &ChartSpec) -> serde_json::Result<String> {
    let renderer = renderer_name(spec.kind);
    let container_id = js_string_literal(spec.id);
    let data = js_string_literal(&spec.data_json()?);
    let config = js_string_literal(&spec.config_json()?);
    Ok(format!(
        r#"
        (function() {{
            var gens = window.__usdemGen = window.__usdemGen || {{}};
            var gen = (gens[{container_id}] || 0) + 1;
            gens[{container_id}] = gen;
            var poll = setInterval(function() {{
                if (window.__usdemGen[{container_id}] !== gen) {{
                    clearInterval(poll);
                    return;
                }}
                if (window.__usdemChartsReady &&
                    typeof window.{renderer} !== 'undefined' &&
                    document.getElementById({container_id})) {{
                    clearInterval(poll);
                    try {{
                        window.{renderer}({container_id}, {data}, {config});
                    }} catch(e) {{ console.error('[USDEM] {renderer} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ))
}

/// Render a chart spec into its container.
///
/// Uses a polling loop to wait for D3.js to load, chart scripts to initialize,
/// and the container DOM element to exist before rendering.
pub fn render_chart(spec: &ChartSpec) {
    match render_script(spec) {
        Ok(script) => call_js(&script),
        Err(e) => log::error!("[USDEM] failed to serialize chart {}: {}", spec.id, e),
    }
}

/// Build the JS that empties a container and cancels its pending renders.
pub fn destroy_script(container_id: &str) -> String {
    let id = js_string_literal(container_id);
    format!(
        "var gens = window.__usdemGen = window.__usdemGen || {{}}; \
         gens[{id}] = (gens[{id}] || 0) + 1; \
         var el = document.getElementById({id}); if (el) el.innerHTML = '';",
    )
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&destroy_script(container_id));
}

#[cfg(test)]
mod tests {
    use super::*;
    use usdem_view::{ChartConfig, ChartData, LabeledValue, Theme};

    fn bar_spec(label: &str) -> ChartSpec {
        ChartSpec {
            id: "bar-chart",
            kind: ChartKind::Bar,
            data: ChartData::Categories(vec![LabeledValue::new(label, 1.0)]),
            config: ChartConfig {
                title: "Total Population".to_string(),
                x_label: None,
                y_label: None,
                hover_label: None,
                theme: Theme::plain(),
            },
        }
    }

    #[test]
    fn string_literal_escapes_quotes_and_backslashes() {
        assert_eq!(js_string_literal(r#"it's "x"\"#), r#""it's \"x\"\\""#);
        assert_eq!(js_string_literal("a\nb"), r#""a\nb""#);
    }

    #[test]
    fn renderer_names_match_chart_scripts() {
        for kind in [ChartKind::Pie, ChartKind::Bar, ChartKind::Scatter] {
            let name = renderer_name(kind);
            let script = match kind {
                ChartKind::Pie => PIE_CHART_JS,
                ChartKind::Bar => BAR_CHART_JS,
                ChartKind::Scatter => SCATTER_CHART_JS,
            };
            assert!(
                script.contains(&format!("function {}(", name)),
                "{} should be defined by its script",
                name
            );
        }
    }

    #[test]
    fn render_script_targets_container_and_renderer() {
        let script = render_script(&bar_spec("Texas")).unwrap();
        assert!(script.contains("window.renderBarChart(\"bar-chart\""));
        assert!(script.contains("Texas"));
    }

    #[test]
    fn render_script_survives_awkward_labels() {
        let script = render_script(&bar_spec("O'Brien \"County\"")).unwrap();
        // The data literal is JSON quoted twice: once for the array, once as a JS string.
        assert!(script.contains(r#"O'Brien \\\"County\\\""#));
    }

    #[test]
    fn render_claims_a_new_generation() {
        let script = render_script(&bar_spec("Texas")).unwrap();
        assert!(script.contains("gens[\"bar-chart\"] = gen;"));
        assert!(script.contains("if (window.__usdemGen[\"bar-chart\"] !== gen)"));
        // The staleness check runs before the readiness check.
        let stale = script.find("!== gen").unwrap();
        let ready = script.find("window.__usdemChartsReady").unwrap();
        assert!(stale < ready);
    }

    #[test]
    fn tooltips_never_inject_markup() {
        for script in [TOOLTIP_JS, PIE_CHART_JS, BAR_CHART_JS, SCATTER_CHART_JS] {
            assert!(!script.contains(".html("), "tooltip content must go through .text()");
            assert!(!script.contains("'<strong>'"));
        }
        assert!(TOOLTIP_JS.contains("tip.append('strong').text(title);"));
    }

    #[test]
    fn destroy_bumps_generation_and_clears() {
        let script = destroy_script("scatter-plot");
        assert!(script.contains(
            "gens[\"scatter-plot\"] = (gens[\"scatter-plot\"] || 0) + 1;"
        ));
        assert!(script.contains("el.innerHTML = '';"));
    }
}
