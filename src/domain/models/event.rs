use super::BackendResponse;
use super::Message;
use super::Session;
use super::UserProfile;

pub enum Event {
    AuthRequired(String),
    BackendMessage(Message),
    BackendPromptResponse(BackendResponse),
    ProfileLoaded(UserProfile),
    SessionList(Vec<Session>),
    SessionLoaded(Session),
}
