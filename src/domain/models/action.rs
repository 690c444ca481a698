use super::BackendPrompt;
use super::PendingUpload;

pub enum Action {
    BackendRequest(BackendPrompt),
    CheckAuth(),
    ListSessions(),
    LoadSession(String),
    ProcessFile(PendingUpload),
    UploadFile(PendingUpload, Option<String>),
}
