//! View rendering tests - chips, placeholder, classes, colors

mod common;

use common::{test_model, test_model_with_config};
use tagfield::config::{ChipPlacement, TagConfig};
use tagfield::messages::{ApiMsg, ChipMsg, DraftMsg, Msg};
use tagfield::model::{HostSnapshot, TagFieldModel};
use tagfield::normalize::TagInput;
use tagfield::theme::{Color, PALETTE};
use tagfield::update::update;
use tagfield::view::{render_view, ChipSize, EMPTY_SIZER};

#[test]
fn test_chips_follow_value_order() {
    let model = test_model("red,green,blue");
    let view = render_view(&model);

    assert_eq!(view.labels(), vec!["red", "green", "blue"]);
    let indices: Vec<usize> = view.chips.iter().map(|c| c.index).collect();
    assert_eq!(indices, vec![0, 1, 2]);
    assert!(view.chips.iter().all(|c| c.closable && !c.locked));
    assert!(view.chips.iter().all(|c| c.variant == "secondary"));
}

#[test]
fn test_placeholder_only_when_empty() {
    let mut model = test_model("");
    let view = render_view(&model);
    let draft = view.draft.unwrap();
    assert_eq!(draft.placeholder, "Add a tag");
    assert_eq!(draft.sizer, "Add a tag");

    update(&mut model, Msg::Api(ApiMsg::AddValue(TagInput::from("a"))));
    let draft = render_view(&model).draft.unwrap();
    assert_eq!(draft.placeholder, "");
    assert_eq!(draft.sizer, EMPTY_SIZER);
}

#[test]
fn test_sizer_prefers_draft_text() {
    let mut model = test_model("");
    update(&mut model, Msg::Draft(DraftMsg::Input("typing".to_string())));
    let draft = render_view(&model).draft.unwrap();
    assert_eq!(draft.text, "typing");
    assert_eq!(draft.sizer, "typing");
}

#[test]
fn test_view_is_recomputed_from_state() {
    let mut model = test_model("a,b");
    let before = render_view(&model);
    assert_eq!(render_view(&model), before);

    update(&mut model, Msg::Api(ApiMsg::RemoveValue(TagInput::from("a"))));
    let after = render_view(&model);
    assert_eq!(after.labels(), vec!["b"]);
    assert_eq!(after.chips[0].index, 0);
}

#[test]
fn test_root_classes_carry_host_classes_and_focus() {
    let mut model = test_model("a");
    let view = render_view(&model);
    assert_eq!(view.classes, vec!["tagfield", "form-control"]);

    update(&mut model, Msg::Chip(ChipMsg::Focus(0)));
    let view = render_view(&model);
    assert_eq!(view.classes, vec!["tagfield", "form-control", "focus"]);
    assert!(view.chips[0].active);
}

#[test]
fn test_chip_size_and_placement() {
    let mut config = TagConfig::default();
    config.placement = ChipPlacement::Leading;
    config.variant = "primary".to_string();
    let host = HostSnapshot {
        placeholder: String::new(),
        disabled: false,
        classes: vec!["form-control".to_string(), "form-control-sm".to_string()],
    };
    let model = TagFieldModel::new(config, "a", host);
    let chip = &render_view(&model).chips[0];

    assert_eq!(chip.size, ChipSize::Small);
    assert_eq!(chip.placement, ChipPlacement::Leading);
    assert_eq!(chip.variant, "primary");
    assert_eq!(chip.to_string(), "[×a]");
}

#[test]
fn test_locked_chip_renders_without_close() {
    let mut model = test_model("a");
    update(
        &mut model,
        Msg::Api(ApiMsg::AddReadonlyValue(TagInput::from("b"))),
    );
    let view = render_view(&model);
    assert!(view.chips[0].closable);
    assert!(view.chips[1].locked);
    assert!(!view.chips[1].closable);
    assert_eq!(view.chips[1].to_string(), "[b]");
}

#[test]
fn test_rainbow_colors_are_stable_across_renders() {
    let mut config = TagConfig::default();
    config.rainbow = true;
    config.color_seed = Some(3);
    let mut model = test_model_with_config("a,b", config);

    let first = render_view(&model);
    for chip in &first.chips {
        let colors = chip.colors.expect("rainbow chips are colored");
        assert!(PALETTE.contains(&colors.background));
        assert!(colors.foreground == Color::BLACK || colors.foreground == Color::WHITE);
    }

    update(&mut model, Msg::Api(ApiMsg::AddValue(TagInput::from("c"))));
    let second = render_view(&model);
    assert_eq!(second.chips[0].colors, first.chips[0].colors);
    assert_eq!(second.chips[1].colors, first.chips[1].colors);
    assert!(second.chips[2].colors.is_some());
}

#[test]
fn test_no_colors_without_rainbow() {
    let model = test_model("a");
    assert_eq!(render_view(&model).chips[0].colors, None);
}

#[test]
fn test_view_serializes_to_json() {
    let model = test_model("a");
    let json = serde_json::to_value(render_view(&model)).unwrap();
    assert_eq!(json["chips"][0]["label"], "a");
    assert_eq!(json["chips"][0]["placement"], "trailing");
    assert_eq!(json["chips"][0]["size"], "regular");
}
