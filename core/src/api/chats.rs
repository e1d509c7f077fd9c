//! Buyer chats.

use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::context::Context;
use crate::envelope::{CommonResponse, Envelope};
use crate::error::Result;
use crate::http::HttpMethod;
use crate::transport::Transport;

#[derive(Debug)]
pub struct Chats<'a, T> {
    pub(crate) client: &'a Client<T>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListChatsParams {
    pub filter: ChatFilter,
    pub limit: i64,
    pub offset: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatFilter {
    /// `All`, `Opened` or `Closed`.
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub chat_status: String,
    #[serde(default)]
    pub unread_only: bool,
}

crate::query_value!(nested ChatFilter);

crate::query_params!(
    ListChatsParams {
        filter => "filter",
        limit => "limit" = "30",
        offset => "offset",
    };
    ChatFilter {
        chat_status => "chat_status",
        unread_only => "unread_only",
    }
);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListChatsResponse {
    #[serde(skip)]
    pub common: CommonResponse,
    #[serde(default)]
    pub chats: Vec<ChatInfo>,
    #[serde(default)]
    pub total_chats_count: i64,
    #[serde(default)]
    pub total_unread_count: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatInfo {
    pub chat_id: String,
    pub chat_status: String,
    pub chat_type: String,
    pub created_at: String,
    pub unread_count: i64,
    pub last_message_id: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StartChatParams {
    pub posting_number: String,
}

crate::query_params!(StartChatParams {
    posting_number => "posting_number",
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StartChatResponse {
    #[serde(skip)]
    pub common: CommonResponse,
    #[serde(default)]
    pub result: StartedChat,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StartedChat {
    pub chat_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SendMessageParams {
    pub chat_id: String,
    pub text: String,
}

crate::query_params!(SendMessageParams {
    chat_id => "chat_id",
    text => "text",
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SendMessageResponse {
    #[serde(skip)]
    pub common: CommonResponse,
    /// `success` when the message was accepted.
    #[serde(default)]
    pub result: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatHistoryParams {
    pub chat_id: String,
    /// `Forward` or `Backward`.
    pub direction: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub from_message_id: Option<u64>,
    pub limit: i64,
}

crate::query_params!(ChatHistoryParams {
    chat_id => "chat_id",
    direction => "direction" = "Backward",
    from_message_id => "from_message_id",
    limit => "limit" = "50",
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatHistoryResponse {
    #[serde(skip)]
    pub common: CommonResponse,
    #[serde(default)]
    pub has_next: bool,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatMessage {
    pub message_id: u64,
    pub user: ChatUser,
    pub created_at: String,
    pub is_read: bool,
    pub data: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatUser {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
}

crate::common_fields!(
    ListChatsResponse,
    StartChatResponse,
    SendMessageResponse,
    ChatHistoryResponse,
);

impl<T: Transport> Chats<'_, T> {
    pub async fn list(&self, ctx: &Context, params: &ListChatsParams) -> Result<ListChatsResponse> {
        let envelope: Envelope<ListChatsResponse> = self
            .client
            .request(ctx, HttpMethod::Post, "/v2/chat/list", Some(params), &[])
            .await?;
        Ok(envelope.into_response())
    }

    /// Open a chat with the buyer of a posting.
    pub async fn start(&self, ctx: &Context, params: &StartChatParams) -> Result<StartChatResponse> {
        let envelope: Envelope<StartChatResponse> = self
            .client
            .request(ctx, HttpMethod::Post, "/v1/chat/start", Some(params), &[])
            .await?;
        Ok(envelope.into_response())
    }

    pub async fn send_message(
        &self,
        ctx: &Context,
        params: &SendMessageParams,
    ) -> Result<SendMessageResponse> {
        let envelope: Envelope<SendMessageResponse> = self
            .client
            .request(ctx, HttpMethod::Post, "/v1/chat/send/message", Some(params), &[])
            .await?;
        Ok(envelope.into_response())
    }

    pub async fn history(&self, ctx: &Context, params: &ChatHistoryParams) -> Result<ChatHistoryResponse> {
        let envelope: Envelope<ChatHistoryResponse> = self
            .client
            .request(ctx, HttpMethod::Post, "/v2/chat/history", Some(params), &[])
            .await?;
        Ok(envelope.into_response())
    }
}
