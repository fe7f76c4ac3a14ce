//! Tests for `MessageBuilder`.

use serde_json::json;

use super::{MessageBuilder, MessagePayload};
use crate::builders::{Button, Embed};
use crate::model::{Component, EmbedData, ExecuteData};

fn titled(title: &str) -> EmbedData {
    EmbedData {
        title: Some(title.to_string()),
        ..EmbedData::default()
    }
}

mod embeds {
    use super::*;

    #[test]
    fn builder_and_plain_embeds_are_both_accepted() {
        let mut embed = Embed::new();
        embed.set_title("built").unwrap();

        let mut message = MessageBuilder::default();
        message.add_embed(&embed).add_embed(titled("plain"));

        let payload = message.to_json();
        assert_eq!(payload.embeds.len(), 2);
        assert_eq!(payload.embeds[0], embed.to_json());
        assert_eq!(payload.embeds[1], titled("plain"));
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut message = MessageBuilder::default();
        message
            .add_embed(titled("a"))
            .add_embed(titled("b"))
            .add_embed(titled("c"));

        let titles: Vec<_> = message
            .embeds()
            .iter()
            .map(|e| e.title.as_deref().unwrap())
            .collect();
        assert_eq!(titles, ["a", "b", "c"]);
    }

    #[test]
    fn remove_embed_deletes_one_entry() {
        let mut message = MessageBuilder::default();
        message
            .add_embed(titled("a"))
            .add_embed(titled("b"))
            .add_embed(titled("c"));

        message.remove_embed(1);

        assert_eq!(message.embeds(), &[titled("a"), titled("c")]);
    }

    #[test]
    fn remove_embed_out_of_range_is_noop() {
        let mut message = MessageBuilder::default();
        message.add_embed(titled("a"));

        message.remove_embed(1).remove_embed(usize::MAX);

        assert_eq!(message.embeds(), &[titled("a")]);
    }

    #[test]
    fn clear_embeds_empties_sequence() {
        let mut message = MessageBuilder::default();
        message.add_embed(titled("a")).add_embed(titled("b"));

        message.clear_embeds();

        assert!(message.embeds().is_empty());
    }
}

mod components {
    use super::*;

    #[test]
    fn buttons_and_raw_components_are_appended() {
        let row = json!({"type": 1, "components": []});
        let mut message = MessageBuilder::default();
        message
            .add_component(Button::custom("ok"))
            .add_component(row.clone());

        assert_eq!(
            message.components(),
            &[
                Component::Button(Button::custom("ok").to_json()),
                Component::Raw(row),
            ]
        );
    }
}

mod payload {
    use super::*;

    #[test]
    fn content_is_optional_in_json() {
        let empty = serde_json::to_value(MessageBuilder::default().to_json()).unwrap();
        assert_eq!(empty, json!({"embeds": [], "components": []}));

        let text = serde_json::to_value(MessageBuilder::new(Some("hi")).to_json()).unwrap();
        assert_eq!(text, json!({"content": "hi", "embeds": [], "components": []}));
    }

    #[test]
    fn set_content_replaces_text() {
        let mut message = MessageBuilder::new(Some("old"));
        message.set_content("new");

        assert_eq!(message.to_json().content.as_deref(), Some("new"));
    }

    #[test]
    fn snapshot_is_not_a_live_view() {
        let mut message = MessageBuilder::default();
        let before: MessagePayload = message.to_json();

        message.add_embed(titled("later"));

        assert!(before.embeds.is_empty());
    }

    #[test]
    fn converts_into_execute_data() {
        let mut message = MessageBuilder::new(Some("hi"));
        message.add_embed(titled("a"));

        let data = ExecuteData::from(message);

        assert_eq!(data.content.as_deref(), Some("hi"));
        assert_eq!(data.embeds, Some(vec![titled("a")]));
        assert_eq!(data.components, Some(vec![]));
        assert!(data.files.is_empty());
    }
}
