use reel_project_model::promo;
use reel_render_engine::{Layer, ShotRenderer, Timeline};

fn promo_timeline() -> Timeline {
    Timeline::new(promo::storyboard())
}

#[test]
fn promo_windows_tile_the_whole_composition() {
    let timeline = promo_timeline();
    let report = timeline.coverage();

    assert_eq!(report.total_frames, promo::DURATION_IN_FRAMES);
    assert!(report.gaps.is_empty(), "gaps: {:?}", report.gaps);
    assert!(report.overlaps.is_empty(), "overlaps: {:?}", report.overlaps);
    assert!(report.is_exact());
}

#[test]
fn every_frame_shows_exactly_one_shot() {
    let timeline = promo_timeline();
    for frame in 0..promo::DURATION_IN_FRAMES {
        let composition = timeline.evaluate(frame);
        assert_eq!(composition.shots.len(), 1, "frame {frame}");
    }
    assert!(timeline.evaluate(promo::DURATION_IN_FRAMES).shots.is_empty());
}

#[test]
fn first_shot_fades_in_and_out_over_five_seconds() {
    let timeline = promo_timeline();
    let mount = timeline.mount(1).copied().expect("shot 1 is mounted");
    assert_eq!((mount.from_frame, mount.end_frame()), (0, 150));

    let shot = timeline.storyboard().shot(1).expect("shot 1 exists");
    let renderer = ShotRenderer::new(&timeline.storyboard().config);
    let opacity = |frame| renderer.render(shot, frame).opacity;
    assert_eq!(opacity(0), 0.0);
    assert_eq!(opacity(9), 1.0);
    assert_eq!(opacity(141), 1.0);
    assert_eq!(opacity(150), 0.0);

    // Frame 150 belongs to the next shot on the global timeline.
    assert_eq!(timeline.evaluate(150).visible_ids(), vec![2]);
}

#[test]
fn shot_two_premounts_during_last_second_of_shot_one() {
    let timeline = promo_timeline();
    let frame = timeline.evaluate(125);
    assert_eq!(frame.visible_ids(), vec![1]);
    assert_eq!(frame.premounting.len(), 1);
    assert_eq!(frame.premounting[0].shot_id, 2);
    assert_eq!(frame.premounting[0].starts_in, 25);
    assert!(!frame.premounting[0].assets.is_empty());
}

#[test]
fn triptych_index_never_exceeds_last_image() {
    let timeline = promo_timeline();
    for id in [16, 24] {
        let mount = timeline.mount(id).copied().expect("triptych is mounted");
        let mut seen = vec![];
        for frame in mount.from_frame..mount.end_frame() {
            let composition = timeline.evaluate(frame);
            let shot = composition.shot(id).expect("triptych is visible");
            let src = shot.images().next().expect("triptych shows an image").src.clone();
            if seen.last() != Some(&src) {
                seen.push(src);
            }
        }
        assert_eq!(seen.len(), 3, "shot {id} cycles through {seen:?}");
    }
}

#[test]
fn connector_opacity_rises_then_holds() {
    let timeline = promo_timeline();
    let mount = timeline.mount(20).copied().expect("split screen is mounted");

    let mut last = 0.0;
    for frame in mount.from_frame..mount.end_frame() {
        let composition = timeline.evaluate(frame);
        let shot = composition.shot(20).expect("split screen is visible");
        let connector = shot
            .layers
            .iter()
            .find_map(|layer| match layer {
                Layer::Connector(c) => Some(c.opacity),
                _ => None,
            })
            .expect("split screen has a connector");

        assert!(connector >= last, "connector dimmed at frame {frame}");
        let local = frame - mount.from_frame;
        if local <= 60 {
            assert_eq!(connector, 0.0);
        }
        if local >= 120 {
            assert_eq!(connector, 1.0);
        }
        last = connector;
    }
}

#[test]
fn black_shot_has_no_image() {
    let timeline = promo_timeline();
    let mount = timeline.mount(5).copied().expect("shot 5 is mounted");
    let composition = timeline.evaluate(mount.from_frame + 30);
    let shot = composition.shot(5).expect("shot 5 is visible");
    assert_eq!(shot.images().count(), 0);
    assert!(matches!(shot.layers[0], Layer::Solid(_)));
}

#[test]
fn composition_serializes_to_json() {
    let timeline = promo_timeline();
    let json = serde_json::to_value(timeline.evaluate(2000)).expect("serializes");
    assert_eq!(json["frame_index"], 2000);
    assert!(json["shots"].as_array().is_some_and(|shots| shots.len() == 1));
}
