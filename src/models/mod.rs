pub mod contact;
pub mod faculty;
pub mod publication;
pub mod teaching;
