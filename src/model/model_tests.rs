//! Tests for wire types.

use serde_json::json;

use super::*;

mod components {
    use super::*;

    #[test]
    fn button_json_parses_as_typed_button() {
        let component: Component = serde_json::from_value(json!({
            "type": 2,
            "style": 5,
            "label": "Docs",
            "url": "https://example.com/docs"
        }))
        .unwrap();

        let Component::Button(button) = component else {
            panic!("expected a typed button, got {component:?}");
        };
        assert_eq!(button.style, ButtonStyle::Link);
        assert_eq!(button.custom_id, "");
        assert_eq!(button.url.as_deref(), Some("https://example.com/docs"));
    }

    #[test]
    fn action_row_is_kept_raw() {
        let row = json!({
            "type": 1,
            "components": [{"type": 2, "style": 1, "custom_id": "ok"}]
        });
        let component: Component = serde_json::from_value(row.clone()).unwrap();

        assert_eq!(component, Component::Raw(row.clone()));
        assert_eq!(serde_json::to_value(&component).unwrap(), row);
    }

    #[test]
    fn emoji_from_str_sets_name_only() {
        let emoji = ComponentEmoji::from("🔥");

        assert_eq!(
            serde_json::to_value(&emoji).unwrap(),
            json!({"name": "🔥"})
        );
    }
}

mod execute_data {
    use super::*;

    #[test]
    fn files_are_not_serialized() {
        let data = ExecuteData::text("hi").with_file(Attachment::new("a.txt", b"abc".to_vec()));

        assert_eq!(serde_json::to_value(&data).unwrap(), json!({"content": "hi"}));
    }

    #[test]
    fn unset_fields_are_omitted() {
        let data = ExecuteData::default();

        assert_eq!(serde_json::to_value(&data).unwrap(), json!({}));
    }

    #[test]
    fn all_fields_use_wire_names() {
        let data = ExecuteData {
            content: Some("c".to_string()),
            username: Some("u".to_string()),
            avatar_url: Some("https://example.com/a.png".to_string()),
            tts: Some(true),
            embeds: Some(vec![EmbedData::default()]),
            allowed_mentions: Some(AllowedMentions::none()),
            components: Some(vec![]),
            flags: Some(4),
            thread_name: Some("t".to_string()),
            files: vec![],
        };

        assert_eq!(
            serde_json::to_value(&data).unwrap(),
            json!({
                "content": "c",
                "username": "u",
                "avatar_url": "https://example.com/a.png",
                "tts": true,
                "embeds": [{}],
                "allowed_mentions": {"parse": []},
                "components": [],
                "flags": 4,
                "thread_name": "t"
            })
        );
    }
}

mod webhook_object {
    use super::*;

    #[test]
    fn parses_token_webhook_response() {
        let webhook: WebhookObject = serde_json::from_value(json!({
            "application_id": null,
            "avatar": null,
            "channel_id": "199737254929760256",
            "guild_id": "199737254929760256",
            "id": "223704706495545344",
            "name": "test webhook",
            "type": 1,
            "token": "3d89bb7572e0fb30d8128367b3b1b44fecd1726de135cbe28a41f8b2f777c372ba2939e72279b94526ff5d1bd4358d65cf11"
        }))
        .unwrap();

        assert_eq!(webhook.id, "223704706495545344");
        assert_eq!(webhook.name.as_deref(), Some("test webhook"));
        assert_eq!(webhook.kind, Some(1));
        assert!(webhook.user.is_none());
        assert!(webhook.application_id.is_none());
    }

    #[test]
    fn reply_with_descriptor_shape_is_typed() {
        let reply: WebhookReply =
            serde_json::from_value(json!({"id": "1", "name": "alerts"})).unwrap();

        assert_eq!(reply.webhook().map(|w| w.id.as_str()), Some("1"));
        assert!(!reply.is_other());
    }

    #[test]
    fn reply_keeps_error_object_as_received() {
        let body = json!({"message": "Invalid Webhook Token", "code": 50027});

        let reply: WebhookReply = serde_json::from_value(body.clone()).unwrap();

        assert!(reply.webhook().is_none());
        assert_eq!(reply, WebhookReply::Other(body.clone()));
        assert_eq!(serde_json::to_value(&reply).unwrap(), body);
    }

    #[test]
    fn modify_options_report_emptiness() {
        assert!(ModifyWebhookOptions::default().is_empty());
        assert!(
            !ModifyWebhookOptions {
                name: Some("renamed".to_string()),
                ..ModifyWebhookOptions::default()
            }
            .is_empty()
        );
    }
}

mod attachment {
    use super::*;

    #[test]
    fn reference_uses_attachment_scheme() {
        let file = Attachment::new("chart.png", vec![0_u8; 4]);

        assert_eq!(file.reference(), "attachment://chart.png");
    }

    #[test]
    fn debug_shows_length_not_bytes() {
        let file = Attachment::new("chart.png", vec![7_u8; 1024]);
        let debug = format!("{file:?}");

        assert!(debug.contains("chart.png"));
        assert!(debug.contains("1024"));
    }
}
