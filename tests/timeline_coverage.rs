use roier_promo::{Composition, FrameIndex, SceneId};

#[test]
fn every_frame_maps_to_exactly_one_span() {
    let comp = Composition::promo_video().unwrap();
    let spans = comp.timeline.spans();

    for f in 0..comp.duration().0 {
        let frame = FrameIndex(f);
        let covering: Vec<_> = spans.iter().filter(|s| s.range.contains(frame)).collect();
        assert_eq!(covering.len(), 1, "frame {f} covered by {} spans", covering.len());

        let active = comp.timeline.active_at(frame).unwrap();
        assert_eq!(active.scene, covering[0].scene);
        assert!(active.local.0 < 90, "frame {f} local {}", active.local.0);
    }
}

#[test]
fn scene_boundaries() {
    let comp = Composition::promo_video().unwrap();

    let at = |f: u64| comp.timeline.active_at(FrameIndex(f));

    let a = at(0).unwrap();
    assert_eq!((a.scene, a.local.0), (SceneId::Title, 0));

    let a = at(89).unwrap();
    assert_eq!((a.scene, a.local.0), (SceneId::Title, 89));

    let a = at(90).unwrap();
    assert_eq!((a.scene, a.local.0), (SceneId::Problem, 0));

    let a = at(269).unwrap();
    assert_eq!((a.scene, a.local.0), (SceneId::Solution, 89));

    let a = at(270).unwrap();
    assert_eq!((a.scene, a.local.0), (SceneId::Install, 0));

    let a = at(449).unwrap();
    assert_eq!((a.scene, a.local.0), (SceneId::Cta, 89));

    assert!(at(450).is_none());
}

#[test]
fn spans_are_contiguous_and_ordered() {
    let comp = Composition::promo_video().unwrap();
    let spans = comp.timeline.spans();

    assert_eq!(spans[0].range.start.0, 0);
    for w in spans.windows(2) {
        assert_eq!(w[0].range.end, w[1].range.start);
    }
    assert_eq!(spans.last().unwrap().range.end, comp.duration());
}
