use glam::Vec3;
use room_editor::config::EditorConfig;
use room_editor::input::{EditorAction, InputKey, KeyBindings, NamedKeyCode};
use room_editor::scene::FurnitureDescriptor;
use room_editor::{EditorInput, EditorSession, ItemId, SelectionState, TransformMode};
use std::io::Write;
use tempfile::NamedTempFile;
use winit::keyboard::{Key, NamedKey};

#[test]
fn remapped_mode_keys_override_defaults() {
    let mut temp = NamedTempFile::new().expect("temp bindings file");
    write!(temp, r#"{{"bindings":{{"mode_rotate":["t"],"deselect":["q","escape"]}}}}"#)
        .expect("write remap config");

    let bindings = KeyBindings::load(temp.path()).expect("load bindings");
    let actions = |key: InputKey| bindings.actions_for_key(&key).collect::<Vec<_>>();

    assert_eq!(actions(InputKey::character("t")), vec![EditorAction::ModeRotate]);
    assert!(actions(InputKey::character("r")).is_empty(), "default key no longer rotates");
    assert_eq!(actions(InputKey::character("q")), vec![EditorAction::Deselect]);
    assert_eq!(actions(InputKey::named(NamedKeyCode::Escape)), vec![EditorAction::Deselect]);
    assert_eq!(actions(InputKey::character("g")), vec![EditorAction::ModeTranslate]);
}

#[test]
fn unreadable_bindings_fall_back_to_defaults() {
    let mut temp = NamedTempFile::new().expect("temp bindings file");
    write!(temp, "{{ not json").expect("write broken config");
    assert!(KeyBindings::load(temp.path()).is_err());

    let bindings = KeyBindings::load_or_default(temp.path());
    let rotate: Vec<_> = bindings.actions_for_key(&InputKey::character("r")).collect();
    assert_eq!(rotate, vec![EditorAction::ModeRotate]);
}

#[test]
fn session_uses_bindings_from_editor_config() {
    let mut temp = NamedTempFile::new().expect("temp editor config");
    write!(temp, r#"{{"input":{{"bindings":{{"mode_scale":["x"]}}}}}}"#).expect("write editor config");
    let config = EditorConfig::load(temp.path()).expect("load editor config");

    let mut session = EditorSession::from_config(&config).expect("session");
    session.load_descriptors(&[FurnitureDescriptor::new(3, "desk", Vec3::new(0.0, 0.5, 0.0))]);
    session.dispatch(EditorInput::ItemClicked { item: ItemId(3) });

    session.dispatch(EditorInput::KeyDown { key: InputKey::character("s") });
    assert_eq!(session.active(), Some((ItemId(3), TransformMode::Translate)));
    session.dispatch(EditorInput::KeyDown { key: InputKey::character("x") });
    assert_eq!(session.active(), Some((ItemId(3), TransformMode::Scale)));
}

#[test]
fn winit_keys_drive_the_session() {
    let mut session = EditorSession::new();
    session.load_descriptors(&[FurnitureDescriptor::new(1, "chair", Vec3::new(0.0, 1.0, 0.0))]);
    session.dispatch(EditorInput::ItemClicked { item: ItemId(1) });

    let rotate = InputKey::from_winit(&Key::Character("r".into())).expect("character key");
    session.dispatch(EditorInput::KeyDown { key: rotate });
    assert_eq!(session.active(), Some((ItemId(1), TransformMode::Rotate)));

    let escape = InputKey::from_winit(&Key::Named(NamedKey::Escape)).expect("escape key");
    session.dispatch(EditorInput::KeyDown { key: escape });
    assert_eq!(session.selection().state(), SelectionState::Idle);
}

#[test]
fn shifted_mode_key_does_not_switch_mode() {
    let mut session = EditorSession::new();
    session.load_descriptors(&[FurnitureDescriptor::new(1, "chair", Vec3::new(0.0, 1.0, 0.0))]);
    session.dispatch(EditorInput::ItemClicked { item: ItemId(1) });

    let shifted = InputKey::from_winit(&Key::Character("S".into())).expect("character key");
    session.dispatch(EditorInput::KeyDown { key: shifted });
    assert_eq!(session.active(), Some((ItemId(1), TransformMode::Translate)));

    let scale = InputKey::from_winit(&Key::Character("s".into())).expect("character key");
    session.dispatch(EditorInput::KeyDown { key: scale });
    assert_eq!(session.active(), Some((ItemId(1), TransformMode::Scale)));
}
