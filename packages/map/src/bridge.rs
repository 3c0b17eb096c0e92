//! Script bridge to the embedded browser map.
//!
//! The embedded page exposes two JavaScript entry points, `placeMarker(lat,
//! lng, label)` and `deleteMarkers()`. [`WebViewBridge`] renders each
//! [`crate::MapSurface`] instruction as one script call and hands it to a
//! [`ScriptSink`] for execution. Labels are serialized as JSON string
//! literals so an arbitrary case number can never break out of the call.

use crate::MapSurface;

/// Executes a script in the embedded browser.
///
/// Execution is fire-and-forget: no return value is consumed and failures
/// are the host's problem to log.
pub trait ScriptSink {
    /// Executes one script statement.
    fn execute_script(&mut self, script: &str);
}

impl ScriptSink for Vec<String> {
    fn execute_script(&mut self, script: &str) {
        self.push(script.to_owned());
    }
}

/// [`MapSurface`] implementation backed by a script-executing web view.
#[derive(Debug)]
pub struct WebViewBridge<S> {
    sink: S,
}

impl<S: ScriptSink> WebViewBridge<S> {
    /// Wraps a script sink.
    pub const fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Unwraps the bridge, returning the underlying sink.
    pub fn into_inner(self) -> S {
        self.sink
    }
}

impl<S: ScriptSink> MapSurface for WebViewBridge<S> {
    fn place_marker(&mut self, latitude: f64, longitude: f64, label: &str) {
        // serde_json::to_string on a &str cannot fail.
        let label = serde_json::to_string(label).unwrap_or_default();
        let script = format!("placeMarker({latitude}, {longitude}, {label});");
        self.sink.execute_script(&script);
    }

    fn delete_markers(&mut self) {
        self.sink.execute_script("deleteMarkers();");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_place_marker_call() {
        let mut bridge = WebViewBridge::new(Vec::new());
        bridge.place_marker(41.8, -87.6, "JE163990");
        assert_eq!(
            bridge.into_inner(),
            vec![r#"placeMarker(41.8, -87.6, "JE163990");"#]
        );
    }

    #[test]
    fn renders_delete_markers_call() {
        let mut bridge = WebViewBridge::new(Vec::new());
        bridge.delete_markers();
        assert_eq!(bridge.into_inner(), vec!["deleteMarkers();"]);
    }

    #[test]
    fn escapes_hostile_labels() {
        let mut bridge = WebViewBridge::new(Vec::new());
        bridge.place_marker(0.5, 0.5, "x\"); alert(1); (\"");
        assert_eq!(
            bridge.into_inner(),
            vec![r#"placeMarker(0.5, 0.5, "x\"); alert(1); (\"");"#]
        );
    }
}
