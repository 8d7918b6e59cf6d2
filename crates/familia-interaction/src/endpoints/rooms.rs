//! Family rooms and their potluck calendar.

use crate::FamiliaClient;
use familia_core::error::{FamiliaError, Result};
use familia_core::rooms::{
    CreatePotluckRequest, CreateRoomRequest, FamilyRoom, InviteToRoomRequest, Potluck,
    PotluckList, RoomMember, RoomMessage, RoomMessageRequest, StatusResponse,
};
use serde::Deserialize;

#[derive(Deserialize)]
struct RoomResponse {
    room: FamilyRoom,
}

#[derive(Deserialize)]
struct RoomsResponse {
    #[serde(default)]
    rooms: Vec<FamilyRoom>,
}

#[derive(Deserialize)]
struct MemberResponse {
    member: Option<RoomMember>,
}

#[derive(Deserialize)]
struct MessageResponse {
    message: Option<RoomMessage>,
}

#[derive(Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    messages: Vec<RoomMessage>,
}

#[derive(Deserialize)]
struct PotluckResponse {
    potluck: Option<Potluck>,
}

impl FamiliaClient {
    pub async fn create_room(&self, request: &CreateRoomRequest) -> Result<FamilyRoom> {
        let response: RoomResponse = self.api.post("/rooms/create", request).await?;
        Ok(response.room)
    }

    pub async fn rooms(&self) -> Result<Vec<FamilyRoom>> {
        let response: RoomsResponse = self.api.get("/rooms/").await?;
        Ok(response.rooms)
    }

    pub async fn invite_to_room(
        &self,
        room_id: &str,
        request: &InviteToRoomRequest,
    ) -> Result<RoomMember> {
        let response: MemberResponse = self
            .api
            .post(&format!("/rooms/{}/invite", room_id), request)
            .await?;
        response
            .member
            .ok_or_else(|| FamiliaError::not_found("RoomMember", &request.user_id))
    }

    pub async fn send_room_message(&self, request: &RoomMessageRequest) -> Result<RoomMessage> {
        let response: MessageResponse = self
            .api
            .post(&format!("/rooms/{}/message", request.room_id), request)
            .await?;
        response
            .message
            .ok_or_else(|| FamiliaError::internal("Room message was not stored"))
    }

    /// Room history, oldest first.
    pub async fn room_messages(&self, room_id: &str) -> Result<Vec<RoomMessage>> {
        let response: MessagesResponse =
            self.api.get(&format!("/rooms/{}/messages", room_id)).await?;
        Ok(response.messages)
    }

    pub async fn leave_room(&self, room_id: &str) -> Result<StatusResponse> {
        self.api
            .post(&format!("/rooms/{}/leave", room_id), &serde_json::json!({}))
            .await
    }

    pub async fn potlucks(&self, room_id: &str) -> Result<PotluckList> {
        self.api.get(&format!("/rooms/{}/potlucks", room_id)).await
    }

    pub async fn create_potluck(&self, request: &CreatePotluckRequest) -> Result<Potluck> {
        let response: PotluckResponse = self
            .api
            .post(&format!("/rooms/{}/potluck", request.room_id), request)
            .await?;
        response
            .potluck
            .ok_or_else(|| FamiliaError::internal("Potluck was not stored"))
    }
}
