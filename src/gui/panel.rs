//! Control panel
//!
//! One window, one button: start or stop the rotation.

use crate::renderer::RotationState;

/// Title of the control panel window.
pub const PANEL_TITLE: &str = "Control Panel";

/// Lay out the control panel for this frame.
///
/// A click on the button flips `rotation`. Returns the button response, or
/// `None` while the window is collapsed.
pub fn show(ctx: &egui::Context, rotation: &mut RotationState) -> Option<egui::Response> {
    egui::Window::new(PANEL_TITLE)
        .show(ctx, |ui| {
            let response = ui.button(rotation.button_label());
            if response.clicked() {
                rotation.toggle();
            }
            response
        })
        .and_then(|inner| inner.inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Event, Modifiers, PointerButton, Pos2, RawInput, Rect, Vec2};
    use glam::Vec3;

    fn input(events: Vec<Event>) -> RawInput {
        RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, Vec2::new(800.0, 600.0))),
            events,
            ..Default::default()
        }
    }

    fn frame(
        ctx: &egui::Context,
        rotation: &mut RotationState,
        events: Vec<Event>,
    ) -> Option<Rect> {
        let mut rect = None;
        let _ = ctx.run(input(events), |ctx| {
            rect = show(ctx, rotation).map(|response| response.rect);
        });
        rect
    }

    #[test]
    fn test_panel_lays_out_without_toggling() {
        let ctx = egui::Context::default();
        let mut rotation = RotationState::new(0.01, Vec3::Z);
        for _ in 0..3 {
            assert!(frame(&ctx, &mut rotation, Vec::new()).is_some());
        }
        assert!(!rotation.is_rotating());
    }

    #[test]
    fn test_click_toggles_rotation() {
        let ctx = egui::Context::default();
        let mut rotation = RotationState::new(0.01, Vec3::Z);

        let mut rect = None;
        // Sizing pass and fade-in settle before the button takes input.
        for _ in 0..10 {
            rect = frame(&ctx, &mut rotation, Vec::new());
        }
        let pos = rect.expect("button laid out").center();

        frame(&ctx, &mut rotation, vec![Event::PointerMoved(pos)]);
        frame(
            &ctx,
            &mut rotation,
            vec![Event::PointerButton {
                pos,
                button: PointerButton::Primary,
                pressed: true,
                modifiers: Modifiers::NONE,
            }],
        );
        frame(
            &ctx,
            &mut rotation,
            vec![Event::PointerButton {
                pos,
                button: PointerButton::Primary,
                pressed: false,
                modifiers: Modifiers::NONE,
            }],
        );

        assert!(rotation.is_rotating());
        assert_eq!(rotation.button_label(), "Stop Rotation");
    }
}
