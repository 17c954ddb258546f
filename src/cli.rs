use anyhow::{anyhow, bail, Result};
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolCommand {
    List,
    Validate,
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolArgs {
    pub command: ToolCommand,
    pub scene: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

impl ToolArgs {
    pub fn parse_from_env() -> Result<Self> {
        Self::parse(env::args())
    }

    pub fn parse<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut iter = args.into_iter();
        let _ = iter.next(); // skip program name if present
        let Some(command) = iter.next() else {
            return Ok(Self { command: ToolCommand::Help, scene: None, config: None });
        };
        let command = match command.as_ref() {
            "list" => ToolCommand::List,
            "validate" => ToolCommand::Validate,
            "help" | "--help" | "-h" => ToolCommand::Help,
            other => bail!("unknown command '{other}'"),
        };
        let mut scene = None;
        let mut config = None;
        while let Some(raw) = iter.next() {
            let arg = raw.as_ref();
            if let Some(flag) = arg.strip_prefix("--") {
                let value = iter.next().ok_or_else(|| anyhow!("Expected a value after '{arg}'"))?;
                match flag {
                    "config" => config = Some(PathBuf::from(value.as_ref())),
                    _ => bail!("Unknown flag '{arg}'. Supported flags: --config."),
                }
            } else if scene.is_none() {
                scene = Some(PathBuf::from(arg));
            } else {
                bail!("Unexpected argument '{arg}'");
            }
        }
        if command != ToolCommand::Help && scene.is_none() {
            bail!("{} requires a scene path", command.name());
        }
        Ok(Self { command, scene, config })
    }
}

impl ToolCommand {
    pub fn name(self) -> &'static str {
        match self {
            ToolCommand::List => "list",
            ToolCommand::Validate => "validate",
            ToolCommand::Help => "help",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_validate_with_config() {
        let args = ["room_tool", "validate", "scene.json", "--config", "editor.json"];
        let parsed = ToolArgs::parse(args).expect("parse");
        assert_eq!(parsed.command, ToolCommand::Validate);
        assert_eq!(parsed.scene, Some(PathBuf::from("scene.json")));
        assert_eq!(parsed.config, Some(PathBuf::from("editor.json")));
    }

    #[test]
    fn no_command_means_help() {
        let parsed = ToolArgs::parse(["room_tool"]).expect("parse");
        assert_eq!(parsed.command, ToolCommand::Help);
    }

    #[test]
    fn rejects_missing_scene_and_unknown_flags() {
        assert!(ToolArgs::parse(["room_tool", "list"]).is_err());
        assert!(ToolArgs::parse(["room_tool", "list", "a.json", "--verbose", "1"]).is_err());
        assert!(ToolArgs::parse(["room_tool", "list", "a.json", "--config"]).is_err());
        assert!(ToolArgs::parse(["room_tool", "explode", "a.json"]).is_err());
    }
}
