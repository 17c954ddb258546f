use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use winit::keyboard::{Key, NamedKey};

/// Editor commands reachable from the keyboard while an item is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditorAction {
    ModeTranslate,
    ModeRotate,
    ModeScale,
    Deselect,
}

impl EditorAction {
    fn from_str(value: &str) -> Option<Self> {
        match value {
            "mode_translate" | "translate" => Some(Self::ModeTranslate),
            "mode_rotate" | "rotate" => Some(Self::ModeRotate),
            "mode_scale" | "scale" => Some(Self::ModeScale),
            "deselect" => Some(Self::Deselect),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedKeyCode {
    Escape,
    Space,
    Delete,
}

impl NamedKeyCode {
    fn from_named_key(key: &NamedKey) -> Option<Self> {
        match key {
            NamedKey::Escape => Some(Self::Escape),
            NamedKey::Space => Some(Self::Space),
            NamedKey::Delete => Some(Self::Delete),
            _ => None,
        }
    }

    fn from_str(value: &str) -> Option<Self> {
        match value {
            "escape" | "esc" => Some(Self::Escape),
            "space" => Some(Self::Space),
            "delete" | "del" => Some(Self::Delete),
            _ => None,
        }
    }
}

/// Toolkit-independent key as seen by the editor. Characters are case-sensitive, so `S`
/// (shift+s) is a different key from `s`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum InputKey {
    Character(String),
    Named(NamedKeyCode),
}

impl InputKey {
    pub fn character(ch: &str) -> Self {
        Self::Character(ch.to_string())
    }

    pub fn named(named: NamedKeyCode) -> Self {
        Self::Named(named)
    }

    pub fn from_winit(key: &Key) -> Option<Self> {
        match key {
            Key::Character(ch) => {
                let s = ch.to_string();
                if s.is_empty() {
                    None
                } else {
                    Some(Self::Character(s))
                }
            }
            Key::Named(named) => NamedKeyCode::from_named_key(named).map(Self::Named),
            _ => None,
        }
    }

    fn from_config_value(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        if let Some(named) = NamedKeyCode::from_str(&trimmed.to_lowercase()) {
            return Some(Self::Named(named));
        }
        if trimmed.chars().count() == 1 {
            return Some(Self::Character(trimmed.to_string()));
        }
        None
    }
}

/// Key → action table. Defaults are `g`/`r`/`s` for the transform modes and `Escape` to
/// deselect; any action can be rebound from JSON.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    key_to_actions: HashMap<InputKey, Vec<EditorAction>>,
}

impl KeyBindings {
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(bindings) => bindings,
            Err(err) => {
                tracing::warn!(target: "input", "{err:#}. Falling back to default bindings.");
                Self::default()
            }
        }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents =
            fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
        let config: BindingsConfig = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(Self::from_config(&config, &path.display().to_string()))
    }

    pub fn from_config(config: &BindingsConfig, origin: &str) -> Self {
        Self::with_overrides(config.overrides(origin))
    }

    fn with_overrides(overrides: HashMap<EditorAction, Vec<InputKey>>) -> Self {
        let mut action_map = Self::default_action_map();
        for (action, keys) in overrides {
            if keys.is_empty() {
                continue;
            }
            action_map.insert(action, keys);
        }
        Self::from_action_map(action_map)
    }

    fn default_action_map() -> HashMap<EditorAction, Vec<InputKey>> {
        use EditorAction::*;
        let mut map = HashMap::new();
        map.insert(ModeTranslate, vec![InputKey::character("g")]);
        map.insert(ModeRotate, vec![InputKey::character("r")]);
        map.insert(ModeScale, vec![InputKey::character("s")]);
        map.insert(Deselect, vec![InputKey::named(NamedKeyCode::Escape)]);
        map
    }

    fn from_action_map(action_map: HashMap<EditorAction, Vec<InputKey>>) -> Self {
        let mut key_to_actions: HashMap<InputKey, Vec<EditorAction>> = HashMap::new();
        for (action, keys) in action_map {
            for key in keys {
                key_to_actions.entry(key).or_default().push(action);
            }
        }
        Self { key_to_actions }
    }

    pub fn actions_for_key(&self, key: &InputKey) -> impl Iterator<Item = EditorAction> + '_ {
        self.key_to_actions.get(key).into_iter().flatten().copied()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::from_action_map(Self::default_action_map())
    }
}

/// On-disk shape: `{"bindings": {"mode_rotate": ["t"], "deselect": ["escape", "q"]}}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BindingsConfig {
    #[serde(default)]
    pub bindings: HashMap<String, Vec<String>>,
}

impl BindingsConfig {
    fn overrides(&self, origin: &str) -> HashMap<EditorAction, Vec<InputKey>> {
        let mut overrides = HashMap::new();
        for (action_name, keys) in &self.bindings {
            let action_key = action_name.trim().to_lowercase();
            let Some(action) = EditorAction::from_str(&action_key) else {
                tracing::warn!(target: "input", "{origin}: unknown action '{action_name}', ignoring.");
                continue;
            };
            let mut parsed = Vec::new();
            for key in keys {
                match InputKey::from_config_value(key) {
                    Some(binding) => parsed.push(binding),
                    None => tracing::warn!(
                        target: "input",
                        "{origin}: unknown key '{key}' for action '{action_name}', ignoring."
                    ),
                }
            }
            if parsed.is_empty() {
                tracing::warn!(
                    target: "input",
                    "{origin}: action '{action_name}' has no valid keys, keeping defaults."
                );
                continue;
            }
            overrides.insert(action, parsed);
        }
        overrides
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bindings_cover_mode_keys() {
        let bindings = KeyBindings::default();
        let actions = |key: InputKey| bindings.actions_for_key(&key).collect::<Vec<_>>();
        assert_eq!(actions(InputKey::character("g")), vec![EditorAction::ModeTranslate]);
        assert_eq!(actions(InputKey::character("r")), vec![EditorAction::ModeRotate]);
        assert_eq!(actions(InputKey::character("s")), vec![EditorAction::ModeScale]);
        assert_eq!(actions(InputKey::named(NamedKeyCode::Escape)), vec![EditorAction::Deselect]);
        assert!(actions(InputKey::character("x")).is_empty());
    }

    #[test]
    fn winit_keys_keep_their_case() {
        let shifted = InputKey::from_winit(&Key::Character("G".into()));
        assert_eq!(shifted, Some(InputKey::character("G")));
        assert_ne!(shifted, Some(InputKey::character("g")));
        assert_eq!(KeyBindings::default().actions_for_key(&InputKey::character("G")).count(), 0);
        assert_eq!(
            InputKey::from_winit(&Key::Named(NamedKey::Escape)),
            Some(InputKey::named(NamedKeyCode::Escape))
        );
        assert_eq!(InputKey::from_winit(&Key::Named(NamedKey::F1)), None);
    }

    #[test]
    fn invalid_entries_keep_defaults() {
        let mut config = BindingsConfig::default();
        config.bindings.insert("mode_rotate".into(), vec!["not-a-key".into()]);
        config.bindings.insert("teleport".into(), vec!["t".into()]);
        let bindings = KeyBindings::from_config(&config, "test");
        let rotate: Vec<_> = bindings.actions_for_key(&InputKey::character("r")).collect();
        assert_eq!(rotate, vec![EditorAction::ModeRotate]);
        assert_eq!(bindings.actions_for_key(&InputKey::character("t")).count(), 0);
    }

    #[test]
    fn config_keys_keep_case_but_named_keys_do_not() {
        let mut config = BindingsConfig::default();
        config.bindings.insert("mode_scale".into(), vec!["S".into()]);
        config.bindings.insert("deselect".into(), vec![" ESC ".into()]);
        let bindings = KeyBindings::from_config(&config, "test");
        let actions = |key: InputKey| bindings.actions_for_key(&key).collect::<Vec<_>>();
        assert_eq!(actions(InputKey::character("S")), vec![EditorAction::ModeScale]);
        assert!(actions(InputKey::character("s")).is_empty());
        assert_eq!(actions(InputKey::named(NamedKeyCode::Escape)), vec![EditorAction::Deselect]);
    }
}
