pub mod session;
pub mod session_response;
pub mod session_user_dto;
