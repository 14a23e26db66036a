//! Two images side by side joined by a fading accent line.

use reel_common::clock::FrameClock;
use reel_motion_core::{ramp, OpacityEnvelope, Transform};
use reel_project_model::region::Region;
use reel_project_model::shot::{ShotDescriptor, SplitScreenSpec};

use super::{captions, overlay_layer};
use crate::compositor::{ConnectorLayer, ImageLayer, Layer};

/// Connector column, as fractions of the frame width.
const CONNECTOR_X: f64 = 0.45;
const CONNECTOR_WIDTH: f64 = 0.10;

const CONNECTOR_THICKNESS_PX: f64 = 4.0;

pub(crate) fn render(
    clock: FrameClock,
    shot: &ShotDescriptor,
    spec: &SplitScreenSpec,
    frame: f64,
) -> (f64, Vec<Layer>) {
    let fps = clock.fps_f64();
    let pane = |src: &str, region: Region| {
        Layer::Image(ImageLayer {
            src: src.to_string(),
            region,
            transform: Transform::identity(),
            filters: vec![],
        })
    };

    let mut layers = vec![
        pane(&spec.left_image, Region::left_half()),
        pane(&spec.right_image, Region::right_half()),
        Layer::Connector(ConnectorLayer {
            region: Region::column(CONNECTOR_X, CONNECTOR_WIDTH),
            thickness_px: CONNECTOR_THICKNESS_PX,
            gradient: vec![
                "transparent".to_string(),
                spec.connector_color.clone(),
                "transparent".to_string(),
            ],
            opacity: ramp(
                frame,
                fps * spec.connector_fade_start_secs,
                fps * spec.connector_fade_end_secs,
            ),
        }),
    ];

    layers.extend(overlay_layer(shot));
    if let Some(narration) = shot.narration.as_deref() {
        layers.push(Layer::Caption(captions::narration(narration)));
    }

    // Rounded like the mount window so both agree on the shot length.
    let duration_frames = clock.secs_to_frames(shot.duration) as f64;
    let opacity = OpacityEnvelope::for_shot(duration_frames, fps).opacity_at(frame);
    (opacity, layers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reel_project_model::shot::BlendMode;

    fn contrast_shot() -> (ShotDescriptor, SplitScreenSpec) {
        let shot = ShotDescriptor::new(20, 105.0, 10.0)
            .overlay("data_flow.mp4", 0.3, BlendMode::Overlay)
            .narration("有人问，Cloudflare 是什么？");
        (shot, SplitScreenSpec::new("server.jpg", "desk.jpg"))
    }

    fn connector_opacity(frame: f64) -> f64 {
        let (shot, spec) = contrast_shot();
        let (_, layers) = render(FrameClock::new(30), &shot, &spec, frame);
        match &layers[2] {
            Layer::Connector(connector) => connector.opacity,
            other => panic!("expected connector, got {other:?}"),
        }
    }

    #[test]
    fn test_panes_split_the_frame() {
        let (shot, spec) = contrast_shot();
        let (_, layers) = render(FrameClock::new(30), &shot, &spec, 0.0);
        assert_eq!(layers.len(), 5);
        match (&layers[0], &layers[1]) {
            (Layer::Image(left), Layer::Image(right)) => {
                assert_eq!(left.src, "server.jpg");
                assert_eq!(left.region, Region::left_half());
                assert_eq!(right.src, "desk.jpg");
                assert_eq!(right.region, Region::right_half());
            }
            other => panic!("unexpected panes: {other:?}"),
        }
    }

    #[test]
    fn test_connector_fades_in_between_two_and_four_seconds() {
        assert_eq!(connector_opacity(0.0), 0.0);
        assert_eq!(connector_opacity(60.0), 0.0);
        assert!((connector_opacity(90.0) - 0.5).abs() < 1e-9);
        assert_eq!(connector_opacity(120.0), 1.0);
        assert_eq!(connector_opacity(299.0), 1.0);
    }

    #[test]
    fn test_connector_gradient_uses_accent() {
        let (shot, spec) = contrast_shot();
        let (_, layers) = render(FrameClock::new(30), &shot, &spec, 150.0);
        match &layers[2] {
            Layer::Connector(connector) => {
                assert_eq!(connector.gradient[1], "#F38020");
                assert_eq!(connector.thickness_px, 4.0);
                assert_eq!(connector.region, Region::column(0.45, 0.10));
            }
            other => panic!("expected connector, got {other:?}"),
        }
    }

    #[test]
    fn test_envelope_uses_rounded_shot_length() {
        let (_, spec) = contrast_shot();
        let shot = ShotDescriptor::new(20, 0.0, 1.0 / 3.0 + 0.01);
        let clock = FrameClock::new(30);
        assert!((render(clock, &shot, &spec, 9.0).0 - 0.2).abs() < 1e-9);
        assert_eq!(render(clock, &shot, &spec, 10.0).0, 0.0);
    }

    #[test]
    fn test_shot_envelope() {
        let (shot, spec) = contrast_shot();
        let clock = FrameClock::new(30);
        assert_eq!(render(clock, &shot, &spec, 0.0).0, 0.0);
        assert_eq!(render(clock, &shot, &spec, 9.0).0, 1.0);
        assert_eq!(render(clock, &shot, &spec, 291.0).0, 1.0);
        assert_eq!(render(clock, &shot, &spec, 300.0).0, 0.0);
    }
}
