//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! D3.js chart functions live in `assets/js/*.js`, are embedded at compile
//! time, and are evaluated as globals (no ES modules) exposed via `window.*`.
//! Chart payloads are passed as JSON string literals produced by `serde_json`,
//! so titles containing quotes survive the trip.

use wasm_bindgen_futures::JsFuture;

// Embed all D3 chart JS files at compile time
static LINE_CHART_JS: &str = include_str!("../assets/js/line-chart.js");
static HEATMAP_JS: &str = include_str!("../assets/js/heatmap.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('Pyro JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Quote a JSON document as a JS string literal.
fn js_string(json: &str) -> String {
    serde_json::to_string(json).unwrap_or_else(|_| "\"null\"".to_string())
}

/// Initialize chart scripts once D3 has loaded.
///
/// The scripts are stashed on `window` and evaluated at global scope by a
/// polling callback, then each render function is promoted to `window.*`.
pub fn init_charts() {
    let all_js = [LINE_CHART_JS, HEATMAP_JS].join("\n");

    let store_js = format!("window.__pyroChartScripts = {};", js_string(&all_js));
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    (0, eval)(window.__pyroChartScripts);
                    delete window.__pyroChartScripts;
                    if (typeof renderLineChart !== 'undefined') window.renderLineChart = renderLineChart;
                    if (typeof renderHeatmap !== 'undefined') window.renderHeatmap = renderHeatmap;
                    if (typeof markHeatmapColumn !== 'undefined') window.markHeatmapColumn = markHeatmapColumn;
                    window.__pyroChartsReady = true;
                    if (window.__pyroFlush) window.__pyroFlush();
                    console.log('Pyro charts initialized');
                }
            }, 50);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Pending-call queue: one slot per `function:container` key and a single
/// shared poller. Installed on first use.
const QUEUE_JS: &str = r#"
    if (!window.__pyroFlush) {
        window.__pyroPending = {};
        window.__pyroPoller = null;
        window.__pyroFlush = function() {
            if (!window.__pyroChartsReady) return false;
            var pending = window.__pyroPending;
            var waiting = 0;
            Object.keys(pending).forEach(function(key) {
                var id = key.slice(key.indexOf(':') + 1);
                if (!document.getElementById(id)) { waiting += 1; return; }
                var run = pending[key];
                delete pending[key];
                try { run(); } catch(e) { console.error('[Pyro] ' + key + ' error:', e); }
            });
            return waiting === 0;
        };
        window.__pyroSchedule = function() {
            if (window.__pyroFlush() || window.__pyroPoller !== null) return;
            window.__pyroPoller = setInterval(function() {
                if (window.__pyroFlush()) {
                    clearInterval(window.__pyroPoller);
                    window.__pyroPoller = null;
                }
            }, 50);
        };
    }
"#;

/// JS that stores `call` in the slot for `function` on `container_id`,
/// replacing any older payload still waiting there, then flushes.
fn queue_call(container_id: &str, function: &str, call: &str) -> String {
    let key = js_string(&format!("{}:{}", function, container_id));
    format!(
        "{}\nwindow.__pyroPending[{}] = function() {{ {} }};\nwindow.__pyroSchedule();",
        QUEUE_JS, key, call
    )
}

/// Run `call` once the chart scripts are ready and `container_id` exists.
///
/// Runs immediately in steady state. Until then only the latest call per
/// chart is kept, so frames produced while D3 is still loading (or never
/// loads) replace each other instead of piling up.
fn when_ready(container_id: &str, function: &str, call: &str) {
    call_js(&queue_call(container_id, function, call));
}

/// Draw one line-chart frame into `container_id`.
pub fn render_line_chart(container_id: &str, chart_json: &str) {
    let call = format!(
        "window.renderLineChart('{}', {});",
        container_id,
        js_string(chart_json)
    );
    when_ready(container_id, "renderLineChart", &call);
}

/// Draw the full-dataset heatmap into `container_id`.
pub fn render_heatmap(container_id: &str, heatmap_json: &str) {
    let call = format!(
        "window.renderHeatmap('{}', {});",
        container_id,
        js_string(heatmap_json)
    );
    when_ready(container_id, "renderHeatmap", &call);
}

/// Move the heatmap's current-time marker to `column`.
pub fn mark_heatmap_column(container_id: &str, column: usize) {
    let call = format!("window.markHeatmapColumn('{}', {});", container_id, column);
    when_ready(container_id, "markHeatmapColumn", &call);
}

/// Milliseconds since the epoch, from the browser clock.
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Resolve after `ms` milliseconds via `window.setTimeout`.
///
/// Outside a browser window the returned future never resolves.
pub async fn sleep_ms(ms: u32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let scheduled = web_sys::window().map(|window| {
            window.set_timeout_with_callback_and_timeout_and_arguments_0(
                &resolve,
                i32::try_from(ms).unwrap_or(i32::MAX),
            )
        });
        if !matches!(scheduled, Some(Ok(_))) {
            log::error!("setTimeout unavailable, timer stopped");
        }
    });
    if let Err(e) = JsFuture::from(promise).await {
        log::warn!("sleep interrupted: {:?}", e);
    }
}
