//! Frame assembly
//!
//! Turns the app state into one triangle list in screen pixels (origin top
//! left, y down). Text is not drawn here; the host lays HUD labels over the bar.

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::app::{App, Screen};

/// Build the vertex list for the current screen
pub fn build_frame(app: &App) -> Vec<Vertex> {
    let config = app.config();
    let screen_size = Vec2::new(config.screen_w, config.screen_h);

    match app.screen() {
        Screen::Playing => {
            let mut vertices: Vec<Vertex> = app.bubbles().iter().flat_map(shapes::bubble).collect();
            // HUD bar last so bubbles never cover it
            vertices.extend(shapes::rect(
                Vec2::ZERO,
                Vec2::new(config.screen_w, config.ui_bar_height),
                colors::UI_BAR,
            ));
            vertices
        }
        Screen::Summary => shapes::rect(Vec2::ZERO, screen_size, colors::SUMMARY_OVERLAY),
        Screen::Exited => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::settings::GameConfig;

    #[test]
    fn test_playing_frame_has_bar_and_bubbles() {
        let mut app = App::new(GameConfig::default(), 11).unwrap();
        let empty = build_frame(&app);
        assert_eq!(empty.len(), 6);

        for _ in 0..40 {
            app.frame(SIM_DT).unwrap();
        }
        assert!(!app.bubbles().is_empty());
        let frame = build_frame(&app);
        assert!(frame.len() > 6);
        assert!(frame[frame.len() - 6..]
            .iter()
            .all(|v| v.color == colors::UI_BAR));
    }

    #[test]
    fn test_exited_frame_is_empty() {
        let mut app = App::new(GameConfig::default(), 11).unwrap();
        app.on_close();
        assert!(build_frame(&app).is_empty());
    }
}
