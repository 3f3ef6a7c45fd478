use crate::SessionUserDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub user: Option<SessionUserDto>,
}
