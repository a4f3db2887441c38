//! Type conversions between gateway types and async-openai types.

use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestMessageContentPartImage,
    ChatCompletionRequestMessageContentPartText, ChatCompletionRequestSystemMessageArgs,
    ChatCompletionRequestUserMessageArgs, ChatCompletionRequestUserMessageContent,
    ChatCompletionRequestUserMessageContentPart, ChatCompletionTool, ChatCompletionToolType,
    CreateChatCompletionResponse, FunctionObject, ImageDetail, ImageUrl,
};
use voxgate_core::{
    ChatReply, GatewayError, Part, Result, Role, ToolArgs, ToolInvocation, Turn, catalog,
};

/// Convert a gateway Turn to an OpenAI request message.
pub fn turn_to_message(turn: &Turn) -> ChatCompletionRequestMessage {
    match turn.role {
        Role::System => {
            let text = extract_text(&turn.parts);
            ChatCompletionRequestSystemMessageArgs::default().content(text).build().unwrap().into()
        }
        Role::User => {
            if turn.has_image() {
                let content_parts: Vec<ChatCompletionRequestUserMessageContentPart> = turn
                    .parts
                    .iter()
                    .map(|p| match p {
                        Part::Text { text } => ChatCompletionRequestUserMessageContentPart::Text(
                            ChatCompletionRequestMessageContentPartText { text: text.clone() },
                        ),
                        Part::ImageBase64 { mime_type, data_base64 } => {
                            // Screenshots are tagged for low-detail analysis:
                            // fast processing is enough for UI understanding.
                            ChatCompletionRequestUserMessageContentPart::ImageUrl(
                                ChatCompletionRequestMessageContentPartImage {
                                    image_url: ImageUrl {
                                        url: format!("data:{mime_type};base64,{data_base64}"),
                                        detail: Some(ImageDetail::Low),
                                    },
                                },
                            )
                        }
                    })
                    .collect();
                ChatCompletionRequestUserMessageArgs::default()
                    .content(ChatCompletionRequestUserMessageContent::Array(content_parts))
                    .build()
                    .unwrap()
                    .into()
            } else {
                let text = extract_text(&turn.parts);
                ChatCompletionRequestUserMessageArgs::default()
                    .content(ChatCompletionRequestUserMessageContent::Text(text))
                    .build()
                    .unwrap()
                    .into()
            }
        }
    }
}

fn extract_text(parts: &[Part]) -> String {
    parts
        .iter()
        .filter_map(|p| match p {
            Part::Text { text } => Some(text.clone()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// The fixed tool catalog as OpenAI function declarations.
pub fn catalog_tools() -> Vec<ChatCompletionTool> {
    catalog()
        .iter()
        .map(|descriptor| {
            let name =
                descriptor.get("name").and_then(|n| n.as_str()).unwrap_or_default().to_string();
            let description =
                descriptor.get("description").and_then(|d| d.as_str()).map(String::from);
            let parameters = descriptor.get("parameters").cloned();

            ChatCompletionTool {
                r#type: ChatCompletionToolType::Function,
                function: FunctionObject { name, description, parameters, strict: None },
            }
        })
        .collect()
}

/// Normalize an OpenAI chat completion into the reply envelope.
///
/// Only the first tool call is kept; its arguments must parse as JSON and
/// validate against the catalog, otherwise the whole reply is treated as
/// malformed. Free-text content emitted alongside a tool call is preserved.
pub fn reply_from_response(resp: &CreateChatCompletionResponse) -> Result<ChatReply> {
    let choice = resp
        .choices
        .first()
        .ok_or_else(|| GatewayError::MalformedResponse("response has no choices".to_string()))?;

    let text = choice.message.content.clone().unwrap_or_default();

    if let Some(tool_calls) = &choice.message.tool_calls {
        if let Some(first) = tool_calls.first() {
            if tool_calls.len() > 1 {
                tracing::debug!(
                    dropped = tool_calls.len() - 1,
                    "model returned multiple tool calls; keeping the first"
                );
            }

            let args: serde_json::Value =
                serde_json::from_str(&first.function.arguments).map_err(|e| {
                    GatewayError::MalformedResponse(format!(
                        "tool arguments are not valid JSON: {e}"
                    ))
                })?;
            ToolArgs::parse(&first.function.name, &args)?;

            return Ok(ChatReply::with_tool_call(
                text,
                ToolInvocation { name: first.function.name.clone(), args },
            ));
        }
    }

    Ok(ChatReply::text_only(text))
}
