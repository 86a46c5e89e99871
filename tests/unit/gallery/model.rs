use super::*;
use crate::foundation::core::Phase;

fn items(n: usize) -> Vec<GalleryItem> {
    (0..n).map(|i| GalleryItem::new(format!("img{i}"), i)).collect()
}

fn snapshot(active_index: usize, rotation_degrees: f64) -> AnimationSnapshot {
    AnimationSnapshot {
        phase: Phase::Intro,
        local_progress: 0.5,
        active_index,
        rotation_degrees,
        text_opacities: vec![],
        background_opacity: 0.0,
    }
}

#[test]
fn edge_offsets_parse_css_like_values() {
    assert_eq!("0".parse::<EdgeOffset>().unwrap(), EdgeOffset::Px(0.0));
    assert_eq!("12px".parse::<EdgeOffset>().unwrap(), EdgeOffset::Px(12.0));
    assert_eq!(
        "-65%".parse::<EdgeOffset>().unwrap(),
        EdgeOffset::Percent(-65.0)
    );
    assert!("abc".parse::<EdgeOffset>().is_err());
    assert!("%".parse::<EdgeOffset>().is_err());
}

#[test]
fn edge_offset_resolves_against_axis() {
    assert_eq!(EdgeOffset::Percent(50.0).resolve(800.0), 400.0);
    assert_eq!(EdgeOffset::Px(7.0).resolve(800.0), 7.0);
}

#[test]
fn gallery_rejects_invalid_items() {
    assert!(matches!(
        Gallery::new(items(1)),
        Err(ReelError::Configuration(_))
    ));

    let mut dup = items(3);
    dup[2].id = "img0".to_string();
    assert!(Gallery::new(dup).is_err());

    let mut gap = items(3);
    gap[2].order_index = 5;
    assert!(Gallery::new(gap).is_err());

    let mut zero = items(3);
    zero[1].transform.scale = 0.0;
    assert!(Gallery::new(zero).is_err());
}

#[test]
fn present_shows_exactly_one_item() {
    let g = Gallery::new(items(5)).unwrap();
    let p = g.present(&snapshot(3, 0.0));
    assert_eq!(p.iter().filter(|i| i.visible).count(), 1);
    assert!(p[3].visible);
    assert_eq!(p[3].opacity, 1.0);
    assert_eq!(p[0].opacity, 0.0);
}

#[test]
fn rotation_lands_only_on_active_item() {
    let g = Gallery::new(items(4)).unwrap();
    let p = g.present(&snapshot(0, 90.0));
    assert_eq!(p[0].rotation_degrees, 90.0);
    assert!(p[1..].iter().all(|i| i.rotation_degrees == 0.0));
}

#[test]
fn item_json_uses_css_anchor_strings() {
    let item: GalleryItem = serde_json::from_str(
        r#"{
            "id": "007",
            "order_index": 1,
            "src": "/images/007.png",
            "object_fit": "scale-down",
            "transform": { "scale": 2.65, "anchors": { "top": "-65%", "left": "48%" } }
        }"#,
    )
    .unwrap();
    assert_eq!(item.object_fit, ObjectFit::ScaleDown);
    assert_eq!(item.transform.anchors.top, Some(EdgeOffset::Percent(-65.0)));
    assert_eq!(item.transform.anchors.bottom, None);

    let back = serde_json::to_value(&item).unwrap();
    assert_eq!(back["transform"]["anchors"]["left"], "48%");
}
