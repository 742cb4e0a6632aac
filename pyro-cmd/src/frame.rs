//! One-shot frame rendering for scripting and debugging.

use anyhow::Context;
use pyro_playback::{Event, UpdateLoop};

/// Print the frame for `event_json` applied at `current`.
pub fn run_frame(
    update_loop: &UpdateLoop,
    current: usize,
    event_json: Option<&str>,
    pretty: bool,
) -> anyhow::Result<()> {
    println!("{}", render_frame(update_loop, current, event_json, pretty)?);
    Ok(())
}

/// Apply one event (default `page_loaded`) and serialize the resulting frame.
pub fn render_frame(
    update_loop: &UpdateLoop,
    current: usize,
    event_json: Option<&str>,
    pretty: bool,
) -> anyhow::Result<String> {
    let event = match event_json {
        Some(json) => serde_json::from_str::<Event>(json)
            .with_context(|| format!("Invalid event JSON: {}", json))?,
        None => Event::PageLoaded,
    };

    let frame = update_loop.step(event, current)?;
    let out = if pretty {
        serde_json::to_string_pretty(&frame)?
    } else {
        serde_json::to_string(&frame)?
    };
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;

    #[test]
    fn test_default_event_is_page_loaded() {
        let ul = test_support::update_loop();
        let json: serde_json::Value =
            serde_json::from_str(&render_frame(&ul, 7, None, false).unwrap()).unwrap();
        assert_eq!(json["index"], 0);
        assert_eq!(json["source"], "page_loaded");
        assert_eq!(json["charts"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_play_wraps_from_last_step() {
        let ul = test_support::update_loop();
        let out = render_frame(&ul, 9, Some(r#"{"source":"play_clicked"}"#), true).unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["index"], 0);
        assert_eq!(json["charts"][0]["y"][0], 0.0);
    }

    #[test]
    fn test_bad_input_is_reported() {
        let ul = test_support::update_loop();
        assert!(render_frame(&ul, 0, Some("{not json"), false).is_err());
        assert!(render_frame(&ul, 10, None, false).is_err());
        assert!(render_frame(&ul, 0, Some(r#"{"source":"slider_moved","index":10}"#), false).is_err());
    }
}
