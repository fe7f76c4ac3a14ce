//! Tests for CLI argument parsing.

use std::path::PathBuf;

use super::cli::{Cli, Command, SendArgs};

mod global_options {
    use super::*;

    #[test]
    fn parse_identity_before_subcommand() {
        let cli = Cli::parse_from_iter([
            "hookcast",
            "--url",
            "https://discord.com/api/webhooks/1/t",
            "--username",
            "Bot",
            "--avatar-url",
            "https://example.com/a.png",
            "info",
        ]);

        assert_eq!(
            cli.url.as_deref(),
            Some("https://discord.com/api/webhooks/1/t")
        );
        assert_eq!(cli.username.as_deref(), Some("Bot"));
        assert_eq!(cli.avatar_url.as_deref(), Some("https://example.com/a.png"));
        assert!(matches!(cli.command, Command::Info));
    }

    #[test]
    fn global_options_accepted_after_subcommand() {
        let cli = Cli::parse_from_iter(["hookcast", "delete", "--url", "https://x.io/a", "-v"]);

        assert_eq!(cli.url.as_deref(), Some("https://x.io/a"));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Command::Delete));
    }

    #[test]
    fn parse_config_path() {
        let cli = Cli::parse_from_iter(["hookcast", "-c", "/etc/hookcast.toml", "info"]);

        assert_eq!(cli.config, Some(PathBuf::from("/etc/hookcast.toml")));
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from_iter(["hookcast"]).is_err());
    }
}

mod init {
    use super::*;

    #[test]
    fn default_output_path() {
        let cli = Cli::parse_from_iter(["hookcast", "init"]);

        match cli.command {
            Command::Init { output } => assert_eq!(output, PathBuf::from("hookcast.toml")),
            other => panic!("Expected Init, got {other:?}"),
        }
    }

    #[test]
    fn custom_output_path() {
        let cli = Cli::parse_from_iter(["hookcast", "init", "-o", "custom.toml"]);

        match cli.command {
            Command::Init { output } => assert_eq!(output, PathBuf::from("custom.toml")),
            other => panic!("Expected Init, got {other:?}"),
        }
    }
}

mod send {
    use super::*;

    fn send_args(args: &[&str]) -> SendArgs {
        let mut full = vec!["hookcast", "send"];
        full.extend(args);
        match Cli::parse_from_iter(full).command {
            Command::Send(args) => args,
            other => panic!("Expected Send, got {other:?}"),
        }
    }

    #[test]
    fn message_options() {
        let args = send_args(&[
            "--content",
            "hello",
            "--tts",
            "--thread-name",
            "Release",
            "--flags",
            "4",
            "--file",
            "a.png",
            "--file",
            "b.txt",
        ]);

        assert_eq!(args.content.as_deref(), Some("hello"));
        assert!(args.tts);
        assert_eq!(args.thread_name.as_deref(), Some("Release"));
        assert_eq!(args.flags, Some(4));
        assert_eq!(
            args.files,
            vec![PathBuf::from("a.png"), PathBuf::from("b.txt")]
        );
        assert!(args.embed.is_empty());
    }

    #[test]
    fn embed_options() {
        let args = send_args(&[
            "--title",
            "Deploy",
            "--description",
            "done",
            "--color",
            "#00ff00",
            "--footer",
            "ci",
            "--field",
            "Env=prod",
            "--inline-field",
            "Took=3m",
        ]);

        let embed = &args.embed;
        assert!(!embed.is_empty());
        assert_eq!(embed.title.as_deref(), Some("Deploy"));
        assert_eq!(embed.color.as_deref(), Some("#00ff00"));
        assert_eq!(
            embed.fields,
            vec![("Env".to_string(), "prod".to_string())]
        );
        assert_eq!(
            embed.inline_fields,
            vec![("Took".to_string(), "3m".to_string())]
        );
    }

    #[test]
    fn timestamp_without_value_means_now() {
        let now = send_args(&["--timestamp"]);
        assert_eq!(now.embed.timestamp, Some(None));

        let fixed = send_args(&["--timestamp", "2024-01-01"]);
        assert_eq!(fixed.embed.timestamp, Some(Some("2024-01-01".to_string())));

        let none = send_args(&["--content", "x"]);
        assert_eq!(none.embed.timestamp, None);
    }

    #[test]
    fn link_button_value_keeps_equals_signs() {
        let args = send_args(&["--link-button", "Open=https://example.com/?a=1&b=2"]);

        assert_eq!(
            args.link_buttons,
            vec![(
                "Open".to_string(),
                "https://example.com/?a=1&b=2".to_string()
            )]
        );
    }

    #[test]
    fn malformed_key_value_is_rejected() {
        let missing_eq = Cli::try_parse_from_iter(["hookcast", "send", "--field", "novalue"]);
        let empty_key = Cli::try_parse_from_iter(["hookcast", "send", "--field", "=v"]);

        assert!(missing_eq.is_err());
        assert!(empty_key.is_err());
    }
}

mod modify {
    use super::*;

    #[test]
    fn parse_modify_options() {
        let cli = Cli::parse_from_iter([
            "hookcast",
            "modify",
            "--name",
            "Renamed",
            "--channel-id",
            "42",
        ]);

        match cli.command {
            Command::Modify(args) => {
                assert_eq!(args.name.as_deref(), Some("Renamed"));
                assert_eq!(args.avatar, None);
                assert_eq!(args.channel_id.as_deref(), Some("42"));
            }
            other => panic!("Expected Modify, got {other:?}"),
        }
    }
}
