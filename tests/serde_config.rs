//! Options and insets loaded from JSON configuration.

#![cfg(feature = "serde")]

use zenparallax::{ConfigError, Inset, InsetSet, Options, PositionMethod, inset};

#[test]
fn insets_accept_every_shorthand_shape() {
    let expected = inset::resolve(5).unwrap();
    for json in ["5", r#""5""#, "[5]", "[5, 5, 5, 5]", r#""5 5 5 5""#] {
        let parsed: InsetSet = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, expected, "{json}");
    }
    let mixed: InsetSet = serde_json::from_str(r#"[10, "20%"]"#).unwrap();
    assert_eq!(mixed.top, Inset::px(10.0));
    assert_eq!(mixed.left, Inset::pct(0.2));
}

#[test]
fn bad_insets_rejected() {
    assert!(serde_json::from_str::<InsetSet>("[1, 2, 3]").is_err());
    assert!(serde_json::from_str::<InsetSet>(r#""wide""#).is_err());
    assert!(serde_json::from_str::<InsetSet>("true").is_err());
    // Same rule the resolver applies.
    assert_eq!(
        inset::resolve("1 2 3"),
        Err(ConfigError::InsetCount { count: 3 })
    );
}

#[test]
fn insets_serialize_as_shorthand() {
    let s = inset::resolve("10 50% 0 5").unwrap();
    assert_eq!(serde_json::to_string(&s).unwrap(), r#""10 50% 0 5""#);
    let back: InsetSet = serde_json::from_str(&serde_json::to_string(&s).unwrap()).unwrap();
    assert_eq!(back, s);
}

#[test]
fn options_fill_missing_fields_with_defaults() {
    let o: Options = serde_json::from_str(
        r#"{ "horizontal": true, "insets": "10%", "positionMethod": "backgroundPosition" }"#,
    )
    .unwrap();
    assert!(o.horizontal);
    assert!(o.vertical);
    assert!(o.hide_on_exit);
    assert_eq!(o.fixed, None);
    assert_eq!(o.insets, InsetSet::uniform(Inset::pct(0.1)));
    assert_eq!(o.position_method, PositionMethod::BackgroundPosition);
}

#[test]
fn options_round_trip() {
    let o = Options::default()
        .fixed(true)
        .responsive(true)
        .position_method(PositionMethod::Translate3d);
    let json = serde_json::to_string(&o).unwrap();
    assert!(json.contains(r#""positionMethod":"cssTranslate3d""#), "{json}");
    assert!(json.contains(r#""hideOnExit":true"#), "{json}");
    let back: Options = serde_json::from_str(&json).unwrap();
    assert_eq!(back, o);
}
